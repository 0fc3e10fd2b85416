use chrono::{DateTime, Utc};

use super::coordinator::{self, Transition};
use super::{Action, AppState, Effect};
use crate::models::{EntityKind, EntityRef};

mod blocks;
mod dialogs;
mod documents;

#[derive(Debug)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: true,
        }
    }

    /// 追加一个效果并标记状态已变；相同的效果只保留一个
    fn with_effect(mut self, effect: Effect) -> Self {
        if !self.effects.contains(&effect) {
            self.effects.push(effect);
        }
        self.state_changed = true;
        self
    }

    fn merge(&mut self, other: DispatchResult) {
        for effect in other.effects {
            if !self.effects.contains(&effect) {
                self.effects.push(effect);
            }
        }
        self.state_changed |= other.state_changed;
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        self.dispatch_at(action, Utc::now())
    }

    /// 以给定时间处理动作；之后重新求值自动选择规则
    pub fn dispatch_at(&mut self, action: Action, now: DateTime<Utc>) -> DispatchResult {
        let prev_active = self.state.selection.active_document().cloned();

        let mut result = match action {
            Action::CreateDocument
            | Action::SelectDocument { .. }
            | Action::RenameDocument { .. }
            | Action::RequestDeleteDocument { .. } => self.reduce_document_action(action, now),
            Action::CreateBlock
            | Action::EditBlock { .. }
            | Action::RenameBlock { .. }
            | Action::RequestDeleteBlock { .. } => self.reduce_block_action(action, now),
            Action::ConfirmationResolved { .. } | Action::Dialog(_) => {
                self.reduce_dialog_action(action, now)
            }
            Action::ContentChanged(content) => {
                let selection = self.state.selection.clone();
                let transition = coordinator::content_changed(selection, &content);
                self.apply_transition(transition, now)
            }
            Action::SetSidebarWidth { width } => {
                let width = self.state.ui.layout.clamp_width(width);
                if width == self.state.ui.sidebar_width {
                    DispatchResult::unchanged()
                } else {
                    self.state.ui.sidebar_width = width;
                    DispatchResult::changed(vec![Effect::PersistSidebarWidth])
                }
            }
        };

        self.settle_selection(&mut result);
        if self.state.selection.active_document() != prev_active.as_ref() {
            result.effects.push(Effect::PersistActiveDocument);
        }
        result
    }

    /// 应用协调器给出的转换：先提交暂存内容，再切换选择
    fn apply_transition(&mut self, transition: Transition, now: DateTime<Utc>) -> DispatchResult {
        let Transition {
            selection,
            commit,
            reload_surface,
            focus,
        } = transition;

        let mut effects = Vec::new();
        let mut state_changed = selection != self.state.selection;

        if let Some(commit) = commit {
            if self.state.repo.update_content(&commit.target, &commit.content, now) {
                tracing::debug!(target_id = %commit.target.id(), "committed content");
                effects.push(persist_effect(commit.target.kind()));
                state_changed = true;
            }
        }

        self.state.selection = selection;
        if reload_surface {
            effects.push(Effect::LoadSurface {
                content: self.state.surface_content().to_string(),
            });
            state_changed = true;
        }
        if focus {
            effects.push(Effect::FocusSurface);
        }

        DispatchResult {
            effects,
            state_changed,
        }
    }

    fn settle_selection(&mut self, result: &mut DispatchResult) {
        let Some(next) = coordinator::derive_auto_selection(&self.state.selection, &self.state.repo)
        else {
            return;
        };

        tracing::debug!(active = ?next.active_document(), "auto-selected document");
        self.state.selection = next;
        result
            .effects
            .retain(|effect| !matches!(effect, Effect::LoadSurface { .. }));
        result.effects.push(Effect::LoadSurface {
            content: self.state.surface_content().to_string(),
        });
        result.state_changed = true;
    }

    fn entity_deleted(&mut self, deleted: &EntityRef, now: DateTime<Utc>) -> DispatchResult {
        let selection = self.state.selection.clone();
        let transition = coordinator::entity_deleted(selection, &self.state.repo, deleted);
        self.apply_transition(transition, now)
    }
}

fn persist_effect(kind: EntityKind) -> Effect {
    match kind {
        EntityKind::Document => Effect::PersistDocuments,
        EntityKind::Block => Effect::PersistBlocks,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
