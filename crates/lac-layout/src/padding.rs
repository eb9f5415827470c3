//! Padding forms accepted by [`Container::set_padding`](crate::Container::set_padding).

use crate::LayoutError;
use lac_core::geometry::Sides;

/// Anything that can describe the four padding edges of a container.
///
/// - one value: the same inset on every edge;
/// - two values: left/right then top/bottom;
/// - four values `(left, right, top, bottom)`.
///
/// Slices, arrays and vectors are checked at runtime; any length other than
/// 2 or 4 is rejected with [`LayoutError::PaddingArity`].
pub trait IntoPadding {
    fn into_padding(self) -> Result<Sides, LayoutError>;
}

impl IntoPadding for Sides {
    fn into_padding(self) -> Result<Sides, LayoutError> {
        Ok(self)
    }
}

impl IntoPadding for f64 {
    fn into_padding(self) -> Result<Sides, LayoutError> {
        Ok(Sides::all(self))
    }
}

impl IntoPadding for (f64, f64) {
    fn into_padding(self) -> Result<Sides, LayoutError> {
        Ok(Sides::from(self))
    }
}

impl IntoPadding for (f64, f64, f64, f64) {
    fn into_padding(self) -> Result<Sides, LayoutError> {
        Ok(Sides::from(self))
    }
}

impl IntoPadding for &[f64] {
    fn into_padding(self) -> Result<Sides, LayoutError> {
        match *self {
            [sides, ends] => Ok(Sides::from((sides, ends))),
            [left, right, top, bottom] => Ok(Sides::new(left, right, top, bottom)),
            _ => Err(LayoutError::PaddingArity { len: self.len() }),
        }
    }
}

impl<const N: usize> IntoPadding for [f64; N] {
    fn into_padding(self) -> Result<Sides, LayoutError> {
        self.as_slice().into_padding()
    }
}

impl IntoPadding for Vec<f64> {
    fn into_padding(self) -> Result<Sides, LayoutError> {
        self.as_slice().into_padding()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_value_fills_every_edge() {
        assert_eq!(5.0_f64.into_padding(), Ok(Sides::all(5.0)));
    }

    #[test]
    fn pair_is_left_right_then_top_bottom() {
        let sides = [4.0_f64, 8.0].into_padding().expect("pair is valid");
        assert_eq!(sides, Sides::new(4.0, 4.0, 8.0, 8.0));
        assert_eq!((4.0_f64, 8.0_f64).into_padding(), Ok(sides));
    }

    #[test]
    fn quad_is_left_right_top_bottom() {
        let sides = vec![1.0_f64, 2.0, 3.0, 4.0].into_padding().expect("quad is valid");
        assert_eq!(sides.left, 1.0);
        assert_eq!(sides.right, 2.0);
        assert_eq!(sides.top, 3.0);
        assert_eq!(sides.bottom, 4.0);
    }

    #[test]
    fn other_arities_are_rejected() {
        for len in [0usize, 1, 3, 5] {
            let values = vec![1.0_f64; len];
            assert_eq!(
                values.into_padding(),
                Err(LayoutError::PaddingArity { len })
            );
        }
        assert_eq!(
            [1.0_f64, 2.0, 3.0].into_padding(),
            Err(LayoutError::PaddingArity { len: 3 })
        );
    }
}
