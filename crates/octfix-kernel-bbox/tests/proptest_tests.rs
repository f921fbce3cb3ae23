//! Property-based tests for box subdivision using the `proptest` crate.

use proptest::prelude::*;

use octfix_kernel_bbox::{Aabb3, OCTANT_COUNT};
use octfix_kernel_math::{length, Tolerance, Vec3};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary valid box: a min corner plus non-negative extents.
fn arb_box() -> impl Strategy<Value = Aabb3> {
    (
        (-1000.0f32..1000.0, -1000.0f32..1000.0, -1000.0f32..1000.0),
        (0.0f32..500.0, 0.0f32..500.0, 0.0f32..500.0),
    )
        .prop_map(|((x, y, z), (dx, dy, dz))| {
            let min = Vec3::new(x, y, z);
            Aabb3::new(min, min + Vec3::new(dx, dy, dz))
        })
}

// ---------------------------------------------------------------------------
// 1. Children tile the parent: union bounds equal the parent, halves meet
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn children_tile_parent(b in arb_box()) {
        let children = b.children();
        let tol = Tolerance::relative_to(1500.0);

        for axis in 0..3 {
            let lo = children.iter().map(|c| c.min[axis]).fold(f32::INFINITY, f32::min);
            let hi = children.iter().map(|c| c.max[axis]).fold(f32::NEG_INFINITY, f32::max);
            prop_assert_eq!(lo, b.min[axis]);
            prop_assert_eq!(hi, b.max[axis]);
        }

        for i in 0..OCTANT_COUNT {
            let c = children[i as usize];
            prop_assert!(c.is_valid(), "child {} inverted: {:?}", i, c);
            for axis in 0..3 {
                let bit = 1u8 << axis;
                if i & bit == 0 {
                    // Shared face with the upper neighbour along this axis.
                    let upper = children[(i | bit) as usize];
                    prop_assert!(tol.scalars_equal(c.max[axis], upper.min[axis]),
                        "face mismatch on axis {}: {} vs {}", axis, c.max[axis], upper.min[axis]);
                    prop_assert_eq!(c.min[axis], b.min[axis]);
                } else {
                    prop_assert_eq!(c.max[axis], b.max[axis]);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Diagonal is exactly the length of the extent
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn diagonal_is_extent_length(b in arb_box()) {
        prop_assert_eq!(b.diagonal(), length(&(b.max - b.min)));
    }
}

// ---------------------------------------------------------------------------
// 3. Out-of-range octant index returns the parent
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn out_of_range_child_is_parent(b in arb_box(), index in OCTANT_COUNT..=u8::MAX) {
        prop_assert_eq!(b.child(index), b);
    }
}
