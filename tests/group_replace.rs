//! Group lifecycle end to end: replace and discard against the
//! kasuari-backed engine, observing solved geometry rather than recorded
//! engine calls.

use pretty_assertions::assert_eq;

use anchorage::{CassowarySolver, ConstraintError, Layout, Priority, EQ};

#[test]
fn test_replace_updates_solved_geometry() {
    let mut layout = Layout::new(CassowarySolver::new());
    let root = layout.add_root();
    let view = layout.add_child(root).unwrap();

    let mut group = layout
        .constrain([view], |cx, [view]| {
            cx.add(view.width() | EQ(Priority::REQUIRED) | 100.0)
        })
        .unwrap();
    assert_eq!(group.len(), 1);
    let frame = layout.engine_mut().frame(view);
    assert!((frame.width - 100.0).abs() < 0.001);

    layout
        .replace(&mut group, [view], |cx, [view]| {
            cx.add(view.width() | EQ(Priority::REQUIRED) | 150.0)?;
            cx.add(view.height() | EQ(Priority::REQUIRED) | 80.0)?;
            Ok(())
        })
        .unwrap();

    assert_eq!(group.len(), 2);
    assert_eq!(layout.engine().installed_len(), 2);
    let frame = layout.engine_mut().frame(view);
    assert!((frame.width - 150.0).abs() < 0.001);
    assert!((frame.height - 80.0).abs() < 0.001);
}

#[test]
fn test_repeated_replace_keeps_only_the_last_build() {
    let mut layout = Layout::new(CassowarySolver::new());
    let root = layout.add_root();
    let view = layout.add_child(root).unwrap();

    let mut group = layout
        .constrain([view], |cx, [view]| {
            cx.add(view.width() | EQ(Priority::REQUIRED) | 100.0)
        })
        .unwrap();

    for width in [130.0, 160.0, 90.0] {
        layout
            .replace(&mut group, [view], |cx, [view]| {
                cx.add(view.width() | EQ(Priority::REQUIRED) | width)
            })
            .unwrap();
    }

    // never the union of builds, only the latest one
    assert_eq!(group.len(), 1);
    assert_eq!(layout.engine().installed_len(), 1);
    let frame = layout.engine_mut().frame(view);
    assert!((frame.width - 90.0).abs() < 0.001);
}

#[test]
fn test_failed_replace_build_keeps_the_old_constraints_solving() {
    let mut layout = Layout::new(CassowarySolver::new());
    let root = layout.add_root();
    let view = layout.add_child(root).unwrap();
    let other = layout.add_child(root).unwrap();

    let mut group = layout
        .constrain([view], |cx, [view]| {
            cx.add(view.width() | EQ(Priority::REQUIRED) | 100.0)
        })
        .unwrap();

    let result = layout.replace(&mut group, [view, other], |cx, [view, other]| {
        // dimension against position never compiles
        cx.add(view.width() | EQ(Priority::REQUIRED) | other.top())
    });

    assert!(matches!(
        result,
        Err(ConstraintError::IncompatibleAttributes { .. })
    ));
    assert_eq!(group.len(), 1);
    assert_eq!(layout.engine().installed_len(), 1);
    let frame = layout.engine_mut().frame(view);
    assert!((frame.width - 100.0).abs() < 0.001);
}

#[test]
fn test_discard_frees_the_engine() {
    let mut layout = Layout::new(CassowarySolver::new());
    let root = layout.add_root();
    let view = layout.add_child(root).unwrap();

    let group = layout
        .constrain([view], |cx, [view]| {
            cx.add(view.width() | EQ(Priority::REQUIRED) | 100.0)?;
            cx.add(view.height() | EQ(Priority::REQUIRED) | 50.0)?;
            Ok(())
        })
        .unwrap();

    layout.discard(group);
    assert_eq!(layout.engine().installed_len(), 0);

    // the width is free again: a conflicting value installs cleanly
    layout
        .constrain([view], |cx, [view]| {
            cx.add(view.width() | EQ(Priority::REQUIRED) | 70.0)
        })
        .unwrap();
    let frame = layout.engine_mut().frame(view);
    assert!((frame.width - 70.0).abs() < 0.001);
}
