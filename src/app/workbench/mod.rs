//! 工作台：内核的宿主
//!
//! 持有内核 Store、编辑面、持久化存储与拖拽反馈。内核发出的效果在这里落地：
//! - Persist* → 整体序列化对应集合写入存储（失败只记日志）
//! - LoadSurface / FocusSurface → 驱动编辑面
//! - RequestConfirmation → 交给界面展示，应答通过 `resolve_confirmation` 回到内核

use super::resize::SidebarResize;
use crate::kernel::dnd::DropFeedback;
use crate::kernel::services::adapters::RopeSurface;
use crate::kernel::services::ports::{EditingSurface, KeyValueStore, Settings};
use crate::kernel::state::ConfirmationRequest;
use crate::kernel::{Action, AppState, Effect, Store};
use std::time::{Duration, Instant};

mod dnd;
mod persistence;

pub use dnd::DragSession;

pub struct Workbench<S: EditingSurface = RopeSurface> {
    store: Store,
    storage: Box<dyn KeyValueStore>,
    surface: S,
    settings: Settings,
    feedback: DropFeedback,
    drag: Option<DragSession>,
    resize: Option<SidebarResize>,
    confirmation: Option<ConfirmationRequest>,
}

impl Workbench<RopeSurface> {
    pub fn open(storage: Box<dyn KeyValueStore>, settings: Settings) -> Self {
        Self::with_surface(storage, RopeSurface::new(), settings)
    }
}

impl<S: EditingSurface> Workbench<S> {
    pub fn with_surface(storage: Box<dyn KeyValueStore>, mut surface: S, settings: Settings) -> Self {
        let loaded = persistence::load_state(storage.as_ref(), &settings.layout);
        surface.set_content(loaded.state.surface_content());
        tracing::info!(
            documents = loaded.state.repo.documents().len(),
            blocks = loaded.state.repo.blocks().len(),
            active = ?loaded.state.selection.active_document(),
            "workbench loaded"
        );

        let feedback = DropFeedback::new(Duration::from_millis(settings.drag.feedback_dismiss_ms));
        let mut workbench = Self {
            store: Store::new(loaded.state),
            storage,
            surface,
            settings,
            feedback,
            drag: None,
            resize: None,
            confirmation: None,
        };
        if loaded.active_changed {
            workbench.persist_active_document();
        }
        workbench
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// 直接操作编辑面（输入、选区）；内容变化后调用 `sync_surface`
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn feedback(&self) -> &DropFeedback {
        &self.feedback
    }

    pub fn pending_confirmation(&self) -> Option<&ConfirmationRequest> {
        self.confirmation.as_ref()
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    /// 把编辑面的当前内容作为变化通知交给内核
    pub fn sync_surface(&mut self) -> bool {
        let content = self.surface.content();
        self.dispatch(Action::ContentChanged(content))
    }

    /// 界面对当前确认框的应答
    pub fn resolve_confirmation(&mut self, confirmed: bool) -> bool {
        let Some(request) = self.confirmation.take() else {
            return false;
        };
        self.dispatch(Action::ConfirmationResolved {
            request_id: request.id,
            confirmed,
        })
    }

    /// 由主循环定时调用
    pub fn tick(&mut self, now: Instant) -> bool {
        self.feedback.tick(now)
    }

    pub fn begin_resize(&mut self, x: i32) {
        let width = self.store.state().ui.sidebar_width;
        self.resize = Some(SidebarResize::begin(x, width));
    }

    pub fn resize_to(&mut self, x: i32) -> bool {
        let Some(resize) = self.resize else {
            return false;
        };
        let width = resize.width_at(x, &self.settings.layout);
        self.dispatch(Action::SetSidebarWidth {
            width: i64::from(width),
        })
    }

    pub fn end_resize(&mut self) {
        self.resize = None;
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PersistDocuments => self.persist_documents(),
            Effect::PersistBlocks => self.persist_blocks(),
            Effect::PersistActiveDocument => self.persist_active_document(),
            Effect::PersistSidebarWidth => self.persist_sidebar_width(),
            Effect::LoadSurface { content } => {
                if self.surface.content() != content {
                    self.surface.set_content(&content);
                }
            }
            Effect::FocusSurface => self.surface.request_focus(),
            Effect::RequestConfirmation(request) => {
                tracing::debug!(
                    request_id = request.id,
                    title = %request.title,
                    "confirmation requested"
                );
                self.confirmation = Some(request);
            }
            Effect::DismissConfirmation { request_id } => {
                if self
                    .confirmation
                    .as_ref()
                    .is_some_and(|request| request.id == request_id)
                {
                    self.confirmation = None;
                }
            }
        }
    }
}
