use chrono::{DateTime, Utc};

use crate::kernel::state::{ConfirmationRequest, PendingAction};
use crate::kernel::{Action, Effect};
use crate::models::EntityRef;

const DELETE_TEXT: &str = "Удалить";

impl super::Store {
    pub(super) fn reduce_dialog_action(
        &mut self,
        action: Action,
        now: DateTime<Utc>,
    ) -> super::DispatchResult {
        match action {
            Action::ConfirmationResolved {
                request_id,
                confirmed,
            } => self.resolve_confirmation(request_id, confirmed, now),
            Action::Dialog(input) => {
                let Some(request_id) = self.state.ui.confirm_dialog.pending_id() else {
                    return super::DispatchResult::unchanged();
                };
                self.resolve_confirmation(request_id, input.confirms(), now)
                    .with_effect(Effect::DismissConfirmation { request_id })
            }
            _ => super::DispatchResult::unchanged(),
        }
    }

    /// 挂起操作并请求确认；仍在等待的旧请求被取消
    pub(super) fn request_confirmation(
        &mut self,
        title: &str,
        message: String,
        on_confirm: PendingAction,
    ) -> super::DispatchResult {
        let (request, replaced) = self.state.ui.confirm_dialog.open(
            |id| ConfirmationRequest::new(id, title, message).with_confirm_text(DELETE_TEXT),
            on_confirm,
        );

        let mut effects = Vec::new();
        if let Some(request_id) = replaced {
            tracing::debug!(request_id, "confirmation superseded");
            effects.push(Effect::DismissConfirmation { request_id });
        }
        effects.push(Effect::RequestConfirmation(request));
        super::DispatchResult::changed(effects)
    }

    fn resolve_confirmation(
        &mut self,
        request_id: u64,
        confirmed: bool,
        now: DateTime<Utc>,
    ) -> super::DispatchResult {
        if self.state.ui.confirm_dialog.pending_id() != Some(request_id) {
            tracing::debug!(request_id, "stale confirmation ignored");
            return super::DispatchResult::unchanged();
        }

        let pending = self
            .state
            .ui
            .confirm_dialog
            .close()
            .and_then(|(_, pending)| pending);
        let mut result = super::DispatchResult::changed(Vec::new());
        if let Some(pending) = pending.filter(|_| confirmed) {
            result.merge(self.run_pending(pending, now));
        }
        result
    }

    fn run_pending(&mut self, pending: PendingAction, now: DateTime<Utc>) -> super::DispatchResult {
        match pending {
            PendingAction::DeleteDocument { id } => {
                let Some(removed_blocks) = self.state.repo.delete_document(&id) else {
                    return super::DispatchResult::unchanged();
                };
                tracing::info!(id = %id, removed_blocks, "document deleted");

                let mut result = self.entity_deleted(&EntityRef::Document(id), now);
                result.merge(super::DispatchResult::changed(vec![Effect::PersistDocuments]));
                if removed_blocks > 0 {
                    result.merge(super::DispatchResult::changed(vec![Effect::PersistBlocks]));
                }
                result
            }
            PendingAction::DeleteBlock { id } => {
                if !self.state.repo.delete_block(&id) {
                    return super::DispatchResult::unchanged();
                }
                tracing::info!(id = %id, "text block deleted");

                self.entity_deleted(&EntityRef::Block(id), now)
                    .with_effect(Effect::PersistBlocks)
            }
        }
    }
}
