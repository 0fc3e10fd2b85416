use super::*;

const DISMISS: Duration = Duration::from_millis(2000);

#[test]
fn test_show_outside_drag_auto_dismisses() {
    let t0 = Instant::now();
    let mut feedback = DropFeedback::new(DISMISS);

    assert!(feedback.show(FeedbackKind::Replaced, t0));
    assert_eq!(feedback.tooltip(), Some(REPLACED_NOTICE));
    assert_eq!(feedback.dismiss_at(), Some(t0 + DISMISS));

    assert!(!feedback.tick(t0 + Duration::from_millis(1999)));
    assert_eq!(feedback.kind(), Some(FeedbackKind::Replaced));
    assert!(feedback.tick(t0 + DISMISS));
    assert_eq!(feedback.kind(), None);
    assert!(!feedback.tick(t0 + DISMISS * 2));
}

#[test]
fn test_no_auto_dismiss_while_dragging() {
    let t0 = Instant::now();
    let mut feedback = DropFeedback::new(DISMISS);
    feedback.begin_drag();

    assert!(feedback.show(FeedbackKind::Replace, t0));
    assert_eq!(feedback.tooltip(), Some(REPLACE_HINT));
    assert_eq!(feedback.dismiss_at(), None);
    assert!(!feedback.tick(t0 + DISMISS * 10));
    assert_eq!(feedback.kind(), Some(FeedbackKind::Replace));

    let t1 = t0 + DISMISS * 10;
    feedback.end_drag(t1);
    assert!(!feedback.is_dragging());
    assert!(feedback.tick(t1 + DISMISS));
}

#[test]
fn test_repeated_show_is_idempotent_and_new_request_resets_timer() {
    let t0 = Instant::now();
    let mut feedback = DropFeedback::new(DISMISS);

    feedback.show(FeedbackKind::Replace, t0);
    assert!(!feedback.show(FeedbackKind::Replace, t0 + Duration::from_millis(500)));
    assert_eq!(feedback.dismiss_at(), Some(t0 + DISMISS));

    let t1 = t0 + Duration::from_millis(1500);
    assert!(feedback.show(FeedbackKind::Insert, t1));
    assert_eq!(feedback.tooltip(), None);
    assert!(!feedback.tick(t0 + DISMISS));
    assert!(feedback.tick(t1 + DISMISS));
}

#[test]
fn test_hide_and_teardown_cancel_timer() {
    let t0 = Instant::now();
    let mut feedback = DropFeedback::new(DISMISS);
    feedback.show(FeedbackKind::Replaced, t0);
    assert!(feedback.hide());
    assert_eq!(feedback.dismiss_at(), None);
    assert!(!feedback.hide());

    feedback.begin_drag();
    feedback.show(FeedbackKind::Replace, t0);
    feedback.teardown();
    assert_eq!(feedback.kind(), None);
    assert!(!feedback.is_dragging());
    assert!(!feedback.tick(t0 + DISMISS));
}

#[test]
fn test_kind_from_drop_mode() {
    assert_eq!(FeedbackKind::from(DropMode::Replace), FeedbackKind::Replace);
    assert_eq!(FeedbackKind::from(DropMode::Insert), FeedbackKind::Insert);
}
