use chrono::{DateTime, Utc};

use crate::kernel::coordinator;
use crate::kernel::state::PendingAction;
use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_block_action(
        &mut self,
        action: Action,
        now: DateTime<Utc>,
    ) -> super::DispatchResult {
        match action {
            Action::CreateBlock => {
                let Some(document_id) = self.state.selection.active_document().cloned() else {
                    tracing::debug!("create block ignored: no active document");
                    return super::DispatchResult::unchanged();
                };
                let Some(block) = self.state.repo.create_block(&document_id, now) else {
                    return super::DispatchResult::unchanged();
                };
                tracing::debug!(id = %block.id, document = %document_id, "text block created");

                let selection = self.state.selection.clone();
                let transition = coordinator::block_created(selection, &self.state.repo, &block.id);
                self.apply_transition(transition, now)
                    .with_effect(Effect::PersistBlocks)
            }
            Action::EditBlock { id } => {
                let selection = self.state.selection.clone();
                let transition = coordinator::select_block(selection, &self.state.repo, &id);
                self.apply_transition(transition, now)
            }
            Action::RenameBlock { id, title } => {
                if !self.state.repo.rename_block(&id, &title, now) {
                    return super::DispatchResult::unchanged();
                }
                super::DispatchResult::changed(vec![Effect::PersistBlocks])
            }
            Action::RequestDeleteBlock { id } => {
                let Some(block) = self.state.repo.block(&id) else {
                    return super::DispatchResult::unchanged();
                };
                let message = format!("Вы уверены, что хотите удалить блок \"{}\"?", block.title);
                self.request_confirmation(
                    "Удалить блок",
                    message,
                    PendingAction::DeleteBlock { id },
                )
            }
            _ => super::DispatchResult::unchanged(),
        }
    }
}
