//! Physical models for the numkit kernels.
//!
//! - [`rlc`] — series RLC resonance and the resistance that hits a target
//!   frequency
//! - [`thermistor`] — beta-model thermistor curve with its analytic slope
//! - [`mesh`] — mesh-current equations of a three-loop resistive network
//!
//! Runnable demos live under `examples/`:
//!
//! ```text
//! cargo run -p numkit-models --example resonance
//! cargo run -p numkit-models --example thermistor
//! cargo run -p numkit-models --example mesh_currents
//! ```

pub mod mesh;
pub mod rlc;
pub mod thermistor;
