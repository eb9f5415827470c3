//! Property-based invariant tests for geometry primitives (Rect, Sides).
//!
//! 1. Intersection is commutative.
//! 2. Intersection fits within both inputs.
//! 3. Union contains both inputs.
//! 4. Inner insets never produce negative extents.
//! 5. Overlap is symmetric and agrees with intersection.

use lac_core::geometry::{Rect, Sides};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -500.0f64..500.0,
        -500.0f64..500.0,
        0.0f64..500.0,
        0.0f64..500.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn sides_strategy() -> impl Strategy<Value = Sides> {
    (0.0f64..300.0, 0.0f64..300.0, 0.0f64..300.0, 0.0f64..300.0)
        .prop_map(|(l, r, t, b)| Sides::new(l, r, t, b))
}

const EPS: f64 = 1e-9;

proptest! {
    #[test]
    fn intersection_commutative(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.intersection_opt(&b), b.intersection_opt(&a));
    }

    #[test]
    fn intersection_within_both(a in rect_strategy(), b in rect_strategy()) {
        if let Some(i) = a.intersection_opt(&b) {
            prop_assert!(a.contains_rect(&i, EPS), "a={:?} i={:?}", a, i);
            prop_assert!(b.contains_rect(&i, EPS), "b={:?} i={:?}", b, i);
        }
    }

    #[test]
    fn union_contains_both(a in rect_strategy(), b in rect_strategy()) {
        let u = a.union(&b);
        prop_assert!(u.contains_rect(&a, EPS));
        prop_assert!(u.contains_rect(&b, EPS));
    }

    #[test]
    fn inner_never_negative(r in rect_strategy(), s in sides_strategy()) {
        let inner = r.inner(s);
        prop_assert!(inner.width >= 0.0);
        prop_assert!(inner.height >= 0.0);
        prop_assert!((inner.x - (r.x + s.left)).abs() <= EPS);
        prop_assert!((inner.y - (r.y + s.top)).abs() <= EPS);
    }

    #[test]
    fn overlap_symmetric_and_consistent(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.overlaps(&b, 0.0), b.overlaps(&a, 0.0));
        if a.overlaps(&b, 0.0) {
            prop_assert!(a.intersection_opt(&b).is_some());
        }
    }
}
