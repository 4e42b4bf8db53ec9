//! Reusable observers for numkit solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the root-finding solvers in `numkit-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIterate`], [`HasResidual`], [`CanStopEarly`])
//! - [`LogObserver`] — records every event through the `log` facade
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing solver behavior via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: numkit_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;

#[cfg(feature = "plot")]
mod plot;

pub use logging::LogObserver;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
