use std::fmt;

use numkit_core::Model;

use super::StepSize;

/// A finite-difference scheme, for callers that compare all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Forward,
    Backward,
    Central,
    Richardson,
}

impl Scheme {
    /// Every scheme, from lowest to highest order.
    pub const ALL: [Scheme; 4] = [
        Scheme::Forward,
        Scheme::Backward,
        Scheme::Central,
        Scheme::Richardson,
    ];

    /// Estimates `f'(x)` with this scheme.
    ///
    /// # Errors
    ///
    /// Returns the model's error if an evaluation fails.
    pub fn estimate<M>(self, model: &M, x: f64, h: StepSize) -> Result<f64, M::Error>
    where
        M: Model<Input = f64, Output = f64>,
    {
        match self {
            Scheme::Forward => super::forward(model, x, h),
            Scheme::Backward => super::backward(model, x, h),
            Scheme::Central => super::central(model, x, h),
            Scheme::Richardson => super::richardson(model, x, h),
        }
    }

    /// Lowercase name of the scheme.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Forward => "forward",
            Scheme::Backward => "backward",
            Scheme::Central => "central",
            Scheme::Richardson => "richardson",
        }
    }

    /// Order of the leading truncation error term.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Scheme::Forward | Scheme::Backward => 1,
            Scheme::Central => 2,
            Scheme::Richardson => 4,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use numkit_core::Function;

    #[test]
    fn higher_order_schemes_are_more_accurate() {
        let model = Function(f64::sin);
        let h = StepSize::new(0.05).expect("valid step");
        let exact = 1.0_f64.cos();

        let errors: Vec<f64> = [Scheme::Forward, Scheme::Central, Scheme::Richardson]
            .into_iter()
            .map(|scheme| (scheme.estimate(&model, 1.0, h).unwrap() - exact).abs())
            .collect();

        assert!(errors[0] > errors[1]);
        assert!(errors[1] > errors[2]);
    }

    #[test]
    fn display_names() {
        let names: Vec<String> = Scheme::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["forward", "backward", "central", "richardson"]);
        assert_eq!(format!("{:>8}|", Scheme::Central), " central|");
    }
}
