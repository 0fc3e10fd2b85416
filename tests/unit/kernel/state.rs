use super::*;
use chrono::{TimeZone, Utc};

#[test]
fn test_dialog_input_confirms_only_on_confirm_and_enter() {
    assert!(DialogInput::ConfirmClicked.confirms());
    assert!(DialogInput::KeyEnter.confirms());
    for input in [
        DialogInput::CancelClicked,
        DialogInput::CloseClicked,
        DialogInput::KeyEscape,
        DialogInput::OverlayClicked,
    ] {
        assert!(!input.confirms(), "{:?}", input);
    }
}

#[test]
fn test_confirmation_request_defaults() {
    let req = ConfirmationRequest::new(7, "Удалить блок", "msg");
    assert_eq!(req.confirm_text, CONFIRM_TEXT);
    assert_eq!(req.cancel_text, CANCEL_TEXT);
    assert_eq!(req.variant, ConfirmVariant::Danger);
}

#[test]
fn test_open_replaces_pending_request() {
    let mut dialog = ConfirmDialogState::default();
    let (first, replaced) = dialog.open(
        |id| ConfirmationRequest::new(id, "t", "a"),
        PendingAction::DeleteBlock { id: "b1".into() },
    );
    assert_eq!(replaced, None);
    assert!(dialog.visible);

    let (second, replaced) = dialog.open(
        |id| ConfirmationRequest::new(id, "t", "b"),
        PendingAction::DeleteDocument { id: "d1".into() },
    );
    assert_eq!(replaced, Some(first.id));
    assert_ne!(second.id, first.id);
    assert_eq!(dialog.pending_id(), Some(second.id));

    let (id, pending) = dialog.close().unwrap();
    assert_eq!(id, second.id);
    assert_eq!(pending, Some(PendingAction::DeleteDocument { id: "d1".into() }));
    assert!(!dialog.visible);
    assert!(dialog.close().is_none());
}

#[test]
fn test_visible_blocks_follow_active_document() {
    let now = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
    let mut repo = Repository::new();
    let d1 = repo.create_document(now).id;
    let d2 = repo.create_document(now).id;
    let b1 = repo.create_block(&d1, now).unwrap().id;
    let b2 = repo.create_block(&d1, now).unwrap().id;
    repo.create_block(&d2, now).unwrap();

    let state = AppState::new(repo.clone(), EditingSelection::new(), UiState::default());
    assert!(state.visible_blocks().is_empty());
    assert_eq!(state.editing_mode(), EditingMode::NoSelection);

    let selection = EditingSelection::restore(&repo, Some(&d1));
    let state = AppState::new(repo, selection, UiState::default());
    let ids: Vec<_> = state.visible_blocks().iter().map(|b| b.id.clone()).collect();
    assert_eq!(ids, vec![b2, b1]);
}

#[test]
fn test_ui_state_starts_at_layout_default() {
    let ui = UiState::default();
    assert_eq!(ui.sidebar_width, 320);
    assert!(!ui.confirm_dialog.visible);
}
