//! 拖拽生命周期：开始 → 经过 → 离开/放下 → 结束

use super::Workbench;
use crate::kernel::dnd::{
    hover_mode, perform_drop, DragPayload, DragPreview, DropMode, DropRejection, FeedbackKind,
};
use crate::kernel::services::ports::{EditingSurface, SurfacePoint};
use crate::models::EntityId;
use std::time::Instant;

/// 一次进行中的拖拽
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub payload: DragPayload,
    pub preview: DragPreview,
}

impl<S: EditingSurface> Workbench<S> {
    /// 从侧栏拖起一个文本块；文本块不存在时不开始拖拽
    pub fn begin_drag(&mut self, block_id: &EntityId) -> Option<&DragSession> {
        let block = self.store.state().repo.block(block_id)?;
        let session = DragSession {
            payload: DragPayload::from_block(block),
            preview: DragPreview::for_block(block, self.settings.drag.preview_max_chars),
        };
        self.feedback.begin_drag();
        self.drag = Some(session);
        self.drag.as_ref()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// 经过编辑面：只更新反馈
    pub fn drag_over(&mut self, point: SurfacePoint, now: Instant) -> bool {
        if self.drag.is_none() {
            return false;
        }
        let mode = hover_mode(&self.surface, point);
        self.feedback.show(FeedbackKind::from(mode), now)
    }

    /// 离开编辑面；移入编辑面内部子元素不算离开
    pub fn drag_leave(&mut self, into_child: bool) -> bool {
        if into_child {
            return false;
        }
        self.feedback.hide()
    }

    /// 放下；成功时编辑面内容经 `ContentChanged` 写回正在编辑的实体
    pub fn drop_block(&mut self, point: SurfacePoint, now: Instant) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        self.feedback.end_drag(now);

        match perform_drop(&mut self.surface, &session.payload, point) {
            Ok(plan) => {
                match plan.mode {
                    DropMode::Replace => {
                        self.feedback.show(FeedbackKind::Replaced, now);
                    }
                    DropMode::Insert => {
                        self.feedback.hide();
                    }
                }
                tracing::debug!(block = %session.payload.block_id, mode = ?plan.mode, "block dropped");
                self.sync_surface();
                true
            }
            Err(DropRejection::Surface(e)) => {
                tracing::warn!(block = %session.payload.block_id, error = %e, "drop failed");
                self.feedback.hide();
                false
            }
            Err(rejection) => {
                tracing::debug!(
                    block = %session.payload.block_id,
                    reason = %rejection,
                    "drop rejected"
                );
                self.feedback.hide();
                false
            }
        }
    }

    /// 拖拽结束（包括取消）
    pub fn end_drag(&mut self, now: Instant) {
        if self.drag.take().is_some() || self.feedback.is_dragging() {
            self.feedback.end_drag(now);
        }
    }
}
