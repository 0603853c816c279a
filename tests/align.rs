//! Alignment helpers built on the constraint algebra.

use pretty_assertions::assert_eq;

use anchorage::{
    align, align_in, Attribute, CassowarySolver, ElementId, Layout, Priority, Rect, RelationKind,
    EQ,
};

const EDGES: [Attribute; 4] = [
    Attribute::Top,
    Attribute::Right,
    Attribute::Bottom,
    Attribute::Left,
];

fn window_layout() -> (Layout<CassowarySolver>, ElementId) {
    let mut layout = Layout::new(CassowarySolver::new());
    let window = layout.add_root();
    layout
        .engine_mut()
        .suggest_frame(window, Rect::new(0.0, 0.0, 400.0, 400.0))
        .unwrap();
    (layout, window)
}

#[test]
fn test_align_compiles_one_equality_per_attribute_per_follower() {
    let (mut layout, window) = window_layout();
    let a = layout.add_child(window).unwrap();
    let b = layout.add_child(window).unwrap();
    let c = layout.add_child(window).unwrap();
    let d = layout.add_child(window).unwrap();

    let group = align(&mut layout, &EDGES, &[a, b, c, d]).unwrap();

    // three followers, four attributes
    assert_eq!(group.len(), 12);
    for constraint in group.constraints() {
        assert_eq!(constraint.relation, RelationKind::Equal);
        assert_eq!(constraint.multiplier, 1.0);
        assert_eq!(constraint.constant, 0.0);
        assert_eq!(constraint.priority, Priority::REQUIRED);
        let (_, second) = constraint.elements();
        assert_eq!(second, Some(a));
    }

    // the first compiled constraint reads b.Top == a.Top
    let first = group.constraints().next().unwrap();
    assert_eq!(first.first.element, b);
    assert_eq!(first.first.attribute, Attribute::Top);
}

#[test]
fn test_aligned_elements_share_the_leader_frame() {
    let (mut layout, window) = window_layout();
    let a = layout.add_child(window).unwrap();
    let b = layout.add_child(window).unwrap();
    let c = layout.add_child(window).unwrap();

    layout
        .constrain([a, window], |cx, [a, window]| {
            cx.add(a.top() | EQ(Priority::REQUIRED) | window.top() + 10.0)?;
            cx.add(a.left() | EQ(Priority::REQUIRED) | window.left() + 10.0)?;
            cx.add(a.width() | EQ(Priority::REQUIRED) | 200.0)?;
            cx.add(a.height() | EQ(Priority::REQUIRED) | 200.0)?;
            Ok(())
        })
        .unwrap();

    align(&mut layout, &EDGES, &[a, b, c]).unwrap();

    let expected = Rect::new(10.0, 10.0, 200.0, 200.0);
    for view in [a, b, c] {
        let frame = layout.engine_mut().frame(view);
        assert!(
            (frame.x - expected.x).abs() < 0.001
                && (frame.y - expected.y).abs() < 0.001
                && (frame.width - expected.width).abs() < 0.001
                && (frame.height - expected.height).abs() < 0.001,
            "element {} expected {:?}, got {:?}",
            view,
            expected,
            frame
        );
    }
}

#[test]
fn test_align_needs_two_elements_to_do_anything() {
    let (mut layout, window) = window_layout();
    let a = layout.add_child(window).unwrap();

    let group = align(&mut layout, &EDGES, &[a]).unwrap();
    assert!(group.is_empty());

    let group = align(&mut layout, &EDGES, &[]).unwrap();
    assert!(group.is_empty());
}

#[test]
fn test_align_in_appends_to_an_open_block() {
    let (mut layout, window) = window_layout();
    let a = layout.add_child(window).unwrap();
    let b = layout.add_child(window).unwrap();
    let c = layout.add_child(window).unwrap();

    let group = layout
        .constrain([a, b, c], |cx, proxies| {
            let [a, _, _] = proxies;
            cx.add(a.center_y() | EQ(Priority::REQUIRED) | 120.0)?;
            align_in(cx, Attribute::CenterY, &proxies)?;
            Ok(())
        })
        .unwrap();

    // one anchor plus two follower equalities
    assert_eq!(group.len(), 3);
    for view in [a, b, c] {
        let frame = layout.engine_mut().frame(view);
        assert!((frame.y + frame.height * 0.5 - 120.0).abs() < 0.001);
    }
}
