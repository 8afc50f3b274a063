// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use gimbal_geom::BoundingBox;
use gimbal_math::Vec3;
use proptest::prelude::*;

fn unit_cube() -> BoundingBox {
    BoundingBox::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0))
}

#[test]
fn contains_interior_but_not_faces() {
    let b = unit_cube();
    assert!(b.contains(&Vec3::ZERO));
    assert!(b.contains(&Vec3::new(0.999, 0.0, 0.0)));
    assert!(!b.contains(&Vec3::new(1.0, 1.0, 1.0)));
    assert!(!b.contains(&Vec3::new(1.0, 0.0, 0.0)));
    assert!(!b.contains(&Vec3::new(0.0, -1.0, 0.0)));
    assert!(!b.contains(&Vec3::new(0.0, 0.0, 1.5)));
}

#[test]
fn size_and_extents_are_two_views() {
    let b = BoundingBox::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(b.extents().to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(b.size().to_array(), [2.0, 4.0, 6.0]);
    assert_eq!(b.center().to_array(), [1.0, 1.0, 1.0]);
    assert_eq!(b.min().to_array(), [0.0, -1.0, -2.0]);
    assert_eq!(b.max().to_array(), [2.0, 3.0, 4.0]);
}

#[test]
fn with_builders_replace_one_field() {
    let b = unit_cube();
    let moved = b.with_center(Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(moved.extents().to_array(), b.extents().to_array());
    assert!(moved.contains(&Vec3::new(5.5, 0.0, 0.0)));
    assert!(!moved.contains(&Vec3::ZERO));

    let resized = b.with_size(Vec3::new(10.0, 10.0, 10.0));
    assert_eq!(resized.extents().to_array(), [5.0, 5.0, 5.0]);
    assert_eq!(resized.center().to_array(), [0.0, 0.0, 0.0]);

    let grown = b.with_extents(Vec3::new(3.0, 0.5, 1.0));
    assert_eq!(grown.size().to_array(), [6.0, 1.0, 2.0]);
}

#[test]
fn from_min_max_spans_corners() {
    let b = BoundingBox::from_min_max(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 4.0, 6.0));
    assert_eq!(b.center().to_array(), [1.0, 2.0, 4.0]);
    assert_eq!(b.extents().to_array(), [2.0, 2.0, 2.0]);
    assert_eq!(b, BoundingBox::new(Vec3::new(1.0, 2.0, 4.0), Vec3::new(4.0, 4.0, 4.0)));
}

#[test]
fn negative_size_contains_nothing() {
    let b = BoundingBox::new(Vec3::ZERO, Vec3::new(-2.0, 2.0, 2.0));
    assert!(!b.contains(&Vec3::ZERO));
}

#[test]
fn zero_size_contains_nothing() {
    let b = BoundingBox::new(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO);
    assert!(!b.contains(&Vec3::new(1.0, 1.0, 1.0)));
}

proptest! {
    #[test]
    fn center_is_inside_any_positive_box(
        c in (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0),
        s in (0.01f32..50.0, 0.01f32..50.0, 0.01f32..50.0),
    ) {
        let center = Vec3::new(c.0, c.1, c.2);
        let b = BoundingBox::new(center, Vec3::new(s.0, s.1, s.2));
        prop_assert!(b.contains(&center));
        prop_assert!(!b.contains(&b.max()));
        prop_assert!(!b.contains(&b.min()));
    }
}
