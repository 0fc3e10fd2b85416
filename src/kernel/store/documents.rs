use chrono::{DateTime, Utc};

use crate::kernel::coordinator;
use crate::kernel::state::PendingAction;
use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_document_action(
        &mut self,
        action: Action,
        now: DateTime<Utc>,
    ) -> super::DispatchResult {
        match action {
            Action::CreateDocument => {
                let doc = self.state.repo.create_document(now);
                tracing::debug!(id = %doc.id, title = %doc.title, "document created");

                let selection = self.state.selection.clone();
                let transition = coordinator::document_created(selection, &self.state.repo, &doc);
                self.apply_transition(transition, now)
                    .with_effect(Effect::PersistDocuments)
            }
            Action::SelectDocument { id, focus } => {
                let selection = self.state.selection.clone();
                let transition =
                    coordinator::select_document(selection, &self.state.repo, &id, focus);
                self.apply_transition(transition, now)
            }
            Action::RenameDocument { id, title } => {
                if !self.state.repo.rename_document(&id, &title, now) {
                    return super::DispatchResult::unchanged();
                }
                super::DispatchResult::changed(vec![Effect::PersistDocuments])
            }
            Action::RequestDeleteDocument { id } => {
                let Some(doc) = self.state.repo.document(&id) else {
                    return super::DispatchResult::unchanged();
                };
                let message = format!(
                    "Вы уверены, что хотите удалить документ \"{}\"? Все связанные блоки также будут удалены.",
                    doc.title
                );
                self.request_confirmation(
                    "Удалить документ",
                    message,
                    PendingAction::DeleteDocument { id },
                )
            }
            _ => super::DispatchResult::unchanged(),
        }
    }
}
