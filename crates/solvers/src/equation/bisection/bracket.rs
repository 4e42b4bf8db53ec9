use thiserror::Error;

/// Reasons a bracket cannot be used for bisection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// Residuals at the endpoints do not have strictly opposite signs.
    #[error("no sign change")]
    NoSignChange,
}

/// Current bracket bounds and the residual sign at the left end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    /// Creates a bracket whose endpoint residuals have opposite signs.
    ///
    /// A residual of exactly zero has no sign, so an endpoint that is
    /// already a root is rejected like any other non-bracketing pair.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if the signs do not bracket a root.
    pub(super) fn new(
        bounds: Bounds,
        left_sign: Sign,
        right_sign: Sign,
    ) -> Result<Self, BracketError> {
        match (left_sign, right_sign) {
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => Ok(Self {
                left: bounds.left,
                right: bounds.right,
                left_sign,
            }),
            _ => Err(BracketError::NoSignChange),
        }
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns half the bracket width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        0.5 * (self.right - self.left)
    }

    /// Replaces the endpoint whose residual shares `sign` with `x`.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if self.left_sign == sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    #[allow(clippy::float_cmp)]
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_eq!(bounds.as_array(), [1.0, 3.0]);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite)
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        ));
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert!(matches!(
            Bounds::new([2.0, 2.0]),
            Err(BracketError::ZeroWidth)
        ));
    }

    #[test]
    fn rejects_same_signs_and_zero_endpoints() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        for (left, right) in [
            (Sign::Positive, Sign::Positive),
            (Sign::Negative, Sign::Negative),
            (Sign::Zero, Sign::Positive),
            (Sign::Negative, Sign::Zero),
        ] {
            assert!(matches!(
                Bracket::new(bounds, left, right),
                Err(BracketError::NoSignChange)
            ));
        }
    }

    #[test]
    fn shrink_replaces_matching_endpoint() {
        let mut bracket = Bracket::new(
            Bounds::new([0.0, 2.0]).expect("valid bounds"),
            Sign::Negative,
            Sign::Positive,
        )
        .expect("valid bracket");

        bracket.shrink(1.0, Sign::Negative);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);
        assert_relative_eq!(bracket.half_width(), 0.5);

        bracket.shrink(1.5, Sign::Positive);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
        assert_relative_eq!(bracket.midpoint(), 1.25);
    }
}
