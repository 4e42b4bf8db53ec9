mod equation;

pub use equation::{DifferentiableProblem, EquationProblem};
