use super::coordinator::{EditingMode, EditingSelection};
use super::repository::Repository;
use super::services::ports::LayoutSettings;
use crate::models::{EntityId, TextBlock};

pub const CONFIRM_TEXT: &str = "Подтвердить";
pub const CANCEL_TEXT: &str = "Отменить";

/// 等待确认后才执行的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteDocument { id: EntityId },
    DeleteBlock { id: EntityId },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmVariant {
    #[default]
    Danger,
    Warning,
    Info,
}

/// 交给宿主展示的确认请求，`id` 用于关联之后的应答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub variant: ConfirmVariant,
}

impl ConfirmationRequest {
    pub fn new(id: u64, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            confirm_text: CONFIRM_TEXT.to_string(),
            cancel_text: CANCEL_TEXT.to_string(),
            variant: ConfirmVariant::default(),
        }
    }

    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }
}

/// 确认框上的用户输入；只有确认按钮和 Enter 算作确认
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogInput {
    ConfirmClicked,
    CancelClicked,
    CloseClicked,
    KeyEnter,
    KeyEscape,
    OverlayClicked,
}

impl DialogInput {
    pub fn confirms(self) -> bool {
        matches!(self, DialogInput::ConfirmClicked | DialogInput::KeyEnter)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub request: Option<ConfirmationRequest>,
    pub on_confirm: Option<PendingAction>,
    next_request_id: u64,
}

impl ConfirmDialogState {
    /// 打开新的确认请求，返回它和被它取代的旧请求 id
    pub fn open(
        &mut self,
        build: impl FnOnce(u64) -> ConfirmationRequest,
        on_confirm: PendingAction,
    ) -> (ConfirmationRequest, Option<u64>) {
        let replaced = self.close().map(|(id, _)| id);

        self.next_request_id += 1;
        let request = build(self.next_request_id);
        self.visible = true;
        self.request = Some(request.clone());
        self.on_confirm = Some(on_confirm);
        (request, replaced)
    }

    pub fn pending_id(&self) -> Option<u64> {
        self.request.as_ref().map(|req| req.id)
    }

    /// 关闭并取出挂起的操作
    pub fn close(&mut self) -> Option<(u64, Option<PendingAction>)> {
        let request = self.request.take()?;
        self.visible = false;
        Some((request.id, self.on_confirm.take()))
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub sidebar_width: u16,
    pub layout: LayoutSettings,
    pub confirm_dialog: ConfirmDialogState,
}

impl UiState {
    pub fn new(layout: LayoutSettings) -> Self {
        Self {
            sidebar_width: layout.sidebar_width,
            layout,
            confirm_dialog: ConfirmDialogState::default(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(LayoutSettings::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub repo: Repository,
    pub selection: EditingSelection,
    pub ui: UiState,
}

impl AppState {
    pub fn new(repo: Repository, selection: EditingSelection, ui: UiState) -> Self {
        Self {
            repo,
            selection,
            ui,
        }
    }

    pub fn editing_mode(&self) -> EditingMode<'_> {
        self.selection.mode()
    }

    /// 侧栏的文本块列表：只显示活动文档下的文本块
    pub fn visible_blocks(&self) -> Vec<&TextBlock> {
        match self.selection.active_document() {
            Some(doc) => self.repo.blocks_for(doc).collect(),
            None => Vec::new(),
        }
    }

    pub fn surface_content(&self) -> &str {
        self.selection.surface_content(&self.repo)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
