//! 拖拽反馈（替换提示）的状态与自动隐藏计时
//!
//! 提示显示后 `dismiss_after` 自动清除，拖拽进行中不计时。
//! 计时是一个截止时间，新的显示/隐藏请求会取代旧的截止时间，由 `tick` 轮询。

use super::DropMode;
use std::time::{Duration, Instant};

pub const REPLACE_HINT: &str = "Заменить выделенный текст";
pub const REPLACED_NOTICE: &str = "Текст заменен";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Insert,
    Replace,
    /// 替换完成后的提示
    Replaced,
}

impl From<DropMode> for FeedbackKind {
    fn from(mode: DropMode) -> Self {
        match mode {
            DropMode::Insert => FeedbackKind::Insert,
            DropMode::Replace => FeedbackKind::Replace,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DropFeedback {
    kind: Option<FeedbackKind>,
    dragging: bool,
    dismiss_at: Option<Instant>,
    dismiss_after: Duration,
}

impl DropFeedback {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            kind: None,
            dragging: false,
            dismiss_at: None,
            dismiss_after,
        }
    }

    pub fn kind(&self) -> Option<FeedbackKind> {
        self.kind
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn dismiss_at(&self) -> Option<Instant> {
        self.dismiss_at
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        match self.kind? {
            FeedbackKind::Insert => None,
            FeedbackKind::Replace => Some(REPLACE_HINT),
            FeedbackKind::Replaced => Some(REPLACED_NOTICE),
        }
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.dismiss_at = None;
    }

    /// 拖拽结束（放下或取消）；显示中的提示从此开始计时
    pub fn end_drag(&mut self, now: Instant) {
        self.dragging = false;
        if self.kind.is_some() {
            self.dismiss_at = Some(now + self.dismiss_after);
        }
    }

    /// 显示某种反馈；与当前相同时不算新请求
    pub fn show(&mut self, kind: FeedbackKind, now: Instant) -> bool {
        if self.kind == Some(kind) {
            return false;
        }
        self.kind = Some(kind);
        self.dismiss_at = (!self.dragging).then(|| now + self.dismiss_after);
        true
    }

    pub fn hide(&mut self) -> bool {
        self.dismiss_at = None;
        self.kind.take().is_some()
    }

    /// 组件销毁：清除状态并取消计时
    pub fn teardown(&mut self) {
        self.hide();
        self.dragging = false;
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.dismiss_at else {
            return false;
        };
        if self.dragging || now < deadline {
            return false;
        }
        self.dismiss_at = None;
        self.kind.take().is_some()
    }
}

impl Default for DropFeedback {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/dnd/feedback.rs"]
mod tests;
