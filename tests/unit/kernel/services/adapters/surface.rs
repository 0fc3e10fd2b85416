use super::*;

#[test]
fn test_pos_at_point_maps_line_and_column() {
    let surface = RopeSurface::from_text("hello\nworld");
    assert_eq!(surface.pos_at_point(SurfacePoint::new(0, 0)), Some(0));
    assert_eq!(surface.pos_at_point(SurfacePoint::new(3, 1)), Some(9));
    assert_eq!(surface.pos_at_point(SurfacePoint::new(-2, 0)), Some(-2));
    assert_eq!(surface.pos_at_point(SurfacePoint::new(0, 2)), None);
    assert_eq!(surface.pos_at_point(SurfacePoint::new(0, -1)), None);
}

#[test]
fn test_select_normalizes_and_ignores_empty() {
    let mut surface = RopeSurface::from_text("0123456789");
    surface.select(8, 3);
    assert_eq!(surface.selection(), Some(TextRange::new(3, 8)));

    surface.select(4, 4);
    assert_eq!(surface.selection(), None);
}

#[test]
fn test_apply_replace_and_insert() {
    let mut surface = RopeSurface::from_text("0123456789");
    surface.select(2, 5);

    let edit = SurfaceEdit::Replace {
        range: TextRange::new(2, 5),
        text: "ab".to_string(),
    };
    surface.apply_edit(&edit, 4).unwrap();
    assert_eq!(surface.text(), "01ab56789");
    assert_eq!(surface.cursor(), 4);
    assert_eq!(surface.selection(), None);

    let edit = SurfaceEdit::Insert {
        at: 0,
        text: "Ж".to_string(),
    };
    surface.apply_edit(&edit, 1).unwrap();
    assert_eq!(surface.text(), "Ж01ab56789");
}

#[test]
fn test_failed_edit_leaves_state_untouched() {
    let mut surface = RopeSurface::from_text("abc");
    surface.select(0, 2);

    let edit = SurfaceEdit::Insert {
        at: 10,
        text: "x".to_string(),
    };
    assert_eq!(
        surface.apply_edit(&edit, 11),
        Err(SurfaceError::OutOfBounds { pos: 10, size: 3 })
    );

    let edit = SurfaceEdit::Insert {
        at: 1,
        text: "x".to_string(),
    };
    assert!(surface.apply_edit(&edit, 99).is_err());

    assert_eq!(surface.text(), "abc");
    assert_eq!(surface.selection(), Some(TextRange::new(0, 2)));
}

#[test]
fn test_set_content_and_focus() {
    let mut surface = RopeSurface::new();
    surface.set_content("<p>x</p>");
    assert_eq!(surface.content(), "<p>x</p>");
    assert_eq!(surface.doc_size(), 8);

    surface.request_focus();
    surface.request_focus();
    assert_eq!(surface.focus_requests(), 2);
}
