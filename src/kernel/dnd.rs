//! 拖拽插入协议：把文本块的纯文本合并进编辑面
//!
//! 放下位置严格落在非空选区内部（两端都不含）时替换整个选区，否则在该位置插入。
//! 这里只做位置/选区判断和编辑计划，真正的编辑由 `EditingSurface::apply_edit` 原子完成。

mod feedback;

pub use feedback::{DropFeedback, FeedbackKind, REPLACED_NOTICE, REPLACE_HINT};

use crate::kernel::services::ports::surface::{
    EditingSurface, SurfaceEdit, SurfaceError, SurfacePoint, TextRange,
};
use crate::models::{excerpt, plain_text, EntityId, TextBlock};
use std::fmt;

/// 拖拽预览放在可视区域之外，只作为拖拽光标图像
pub const PREVIEW_OFFSCREEN: SurfacePoint = SurfacePoint { x: -1000, y: -1000 };

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPayload {
    pub block_id: EntityId,
    /// 原始标记，放下时重新提取纯文本
    pub markup: String,
    /// 供外部应用使用的纯文本
    pub plain_text: String,
}

impl DragPayload {
    pub fn from_block(block: &TextBlock) -> Self {
        Self {
            block_id: block.id.clone(),
            markup: block.content.clone(),
            plain_text: plain_text(&block.content),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPreview {
    pub title: String,
    pub excerpt: String,
    pub position: SurfacePoint,
}

impl DragPreview {
    pub fn for_block(block: &TextBlock, max_chars: usize) -> Self {
        let text = plain_text(&block.content);
        Self {
            title: block.title.clone(),
            excerpt: excerpt(text.trim(), max_chars).into_owned(),
            position: PREVIEW_OFFSCREEN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropMode {
    Insert,
    Replace,
}

/// 未解析、为负或超过文档末尾的位置都无效
pub fn resolve_drop_position(raw: Option<i64>, doc_size: usize) -> Option<usize> {
    let pos = usize::try_from(raw?).ok()?;
    (pos <= doc_size).then_some(pos)
}

pub fn drop_mode(selection: Option<TextRange>, pos: usize) -> DropMode {
    match selection {
        Some(range) if !range.is_empty() && range.contains_strictly(pos) => DropMode::Replace,
        _ => DropMode::Insert,
    }
}

/// 拖拽经过编辑面：只做位置与选区比较，无副作用
pub fn hover_mode(surface: &dyn EditingSurface, point: SurfacePoint) -> DropMode {
    match resolve_drop_position(surface.pos_at_point(point), surface.doc_size()) {
        Some(pos) => drop_mode(surface.selection(), pos),
        None => DropMode::Insert,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropPlan {
    pub mode: DropMode,
    pub edit: SurfaceEdit,
    pub cursor_after: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropRejection {
    InvalidPosition(Option<i64>),
    EmptyPayload,
    Surface(SurfaceError),
}

impl fmt::Display for DropRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropRejection::InvalidPosition(Some(pos)) => write!(f, "invalid drop position {}", pos),
            DropRejection::InvalidPosition(None) => write!(f, "drop position unresolved"),
            DropRejection::EmptyPayload => write!(f, "dropped block has no text"),
            DropRejection::Surface(e) => write!(f, "surface rejected drop: {}", e),
        }
    }
}

impl std::error::Error for DropRejection {}

pub fn plan_drop(
    markup: &str,
    raw_pos: Option<i64>,
    doc_size: usize,
    selection: Option<TextRange>,
) -> Result<DropPlan, DropRejection> {
    let pos =
        resolve_drop_position(raw_pos, doc_size).ok_or(DropRejection::InvalidPosition(raw_pos))?;

    let text = plain_text(markup);
    let text = text.trim();
    if text.is_empty() {
        return Err(DropRejection::EmptyPayload);
    }
    let inserted = text.chars().count();

    let plan = match (drop_mode(selection, pos), selection) {
        (DropMode::Replace, Some(range)) => DropPlan {
            mode: DropMode::Replace,
            edit: SurfaceEdit::Replace {
                range,
                text: text.to_string(),
            },
            cursor_after: range.from + inserted,
        },
        _ => DropPlan {
            mode: DropMode::Insert,
            edit: SurfaceEdit::Insert {
                at: pos,
                text: text.to_string(),
            },
            cursor_after: pos + inserted,
        },
    };
    Ok(plan)
}

/// 放下：重新解析位置、生成计划、原子应用并聚焦编辑面
///
/// 任何失败都不改变编辑面。
pub fn perform_drop(
    surface: &mut dyn EditingSurface,
    payload: &DragPayload,
    point: SurfacePoint,
) -> Result<DropPlan, DropRejection> {
    let raw_pos = surface.pos_at_point(point);
    let plan = plan_drop(&payload.markup, raw_pos, surface.doc_size(), surface.selection())?;
    surface
        .apply_edit(&plan.edit, plan.cursor_after)
        .map_err(DropRejection::Surface)?;
    surface.request_focus();
    Ok(plan)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dnd.rs"]
mod tests;
