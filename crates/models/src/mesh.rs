//! Mesh-current analysis of a resistive network.
//!
//! Kirchhoff's voltage law around each loop gives `R · I = V`, where `R` is
//! the mesh resistance matrix and `V` the loop source voltages. The
//! [`Default`] network is the three-loop circuit
//!
//! ```text
//!  4·I₁ -   I₂ -   I₃ = 5
//!   -I₁ + 3·I₂ -   I₃ = 3
//!   -I₁ -   I₂ + 5·I₃ = 4
//! ```

use log::info;
use nalgebra::{DMatrix, DVector, dmatrix, dvector};
use numkit_solvers::linear::{self, Elimination, gauss, gauss_jordan};

/// A mesh resistance matrix and its source vector.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNetwork {
    resistance: DMatrix<f64>,
    sources: DVector<f64>,
}

/// Everything the linear kernels report about a network.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAnalysis {
    pub gauss: Elimination,
    pub gauss_jordan: Elimination,
    pub determinant: f64,
    pub inverse: DMatrix<f64>,
}

impl MeshAnalysis {
    /// Largest absolute difference between the two elimination solutions.
    #[must_use]
    pub fn solution_gap(&self) -> f64 {
        (&self.gauss.x - &self.gauss_jordan.x).amax()
    }

    /// Currents computed as `R⁻¹ · V`.
    #[must_use]
    pub fn currents_from_inverse(&self, sources: &DVector<f64>) -> DVector<f64> {
        &self.inverse * sources
    }
}

impl MeshNetwork {
    /// Creates a network from its mesh resistance matrix and loop sources.
    ///
    /// # Errors
    ///
    /// Returns a shape error unless `resistance` is square and non-empty and
    /// `sources` matches its size.
    pub fn new(resistance: DMatrix<f64>, sources: DVector<f64>) -> Result<Self, linear::Error> {
        let (rows, cols) = resistance.shape();
        if rows != cols {
            return Err(linear::Error::NotSquare { rows, cols });
        }
        if rows == 0 {
            return Err(linear::Error::Empty);
        }
        if sources.len() != rows {
            return Err(linear::Error::DimensionMismatch {
                expected: rows,
                found: sources.len(),
            });
        }
        Ok(Self {
            resistance,
            sources,
        })
    }

    #[must_use]
    pub fn resistance(&self) -> &DMatrix<f64> {
        &self.resistance
    }

    #[must_use]
    pub fn sources(&self) -> &DVector<f64> {
        &self.sources
    }

    /// Solves for the loop currents with both elimination kernels and
    /// computes the determinant and inverse of the resistance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`linear::Error`] if a pivot or the determinant is zero.
    pub fn analyze(&self) -> Result<MeshAnalysis, linear::Error> {
        let analysis = MeshAnalysis {
            gauss: gauss::solve(&self.resistance, &self.sources)?,
            gauss_jordan: gauss_jordan::solve(&self.resistance, &self.sources)?,
            determinant: linear::determinant(&self.resistance)?,
            inverse: linear::inverse(&self.resistance)?,
        };
        info!(
            "mesh analysis: {} loops, determinant {}, solution gap {:e}",
            self.sources.len(),
            analysis.determinant,
            analysis.solution_gap()
        );
        Ok(analysis)
    }
}

impl Default for MeshNetwork {
    fn default() -> Self {
        Self {
            resistance: dmatrix![
                4.0, -1.0, -1.0;
                -1.0, 3.0, -1.0;
                -1.0, -1.0, 5.0
            ],
            sources: dvector![5.0, 3.0, 4.0],
        }
    }
}
