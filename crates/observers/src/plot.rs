//! Plotting observer for visualizing solver behavior.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use numkit_core::Observer;
use numkit_solvers::equation::{bisection, newton};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Bisection").legend().log_y())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
    markers: bool,
}

impl ShowConfig {
    /// Creates a config with no title, no legend, a linear scale and lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots `log₁₀(y)`. Non-positive values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Draws a marker at every recorded point as well as the line.
    #[must_use]
    pub fn markers(mut self) -> Self {
        self.markers = true;
        self
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip only that trace.
///
/// Both root-finding events implement `Plottable<2>`, plotting the iterate
/// and the residual magnitude against the iteration number.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

#[allow(clippy::cast_precision_loss)]
impl<I, O> Plottable<2> for bisection::Event<'_, I, O> {
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(bisection::Event::x(self)), Some(self.residual().abs())]
    }
}

#[allow(clippy::cast_precision_loss)]
impl<I, O> Plottable<2> for newton::Event<'_, I, O> {
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(newton::Event::x(self)), Some(self.residual().abs())]
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Pass `&mut PlotObserver`
/// as the solver observer to collect [`Plottable`] events, or call
/// [`record`][PlotObserver::record] from a closure for anything else, such
/// as derivative error against step size.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["x", "|residual|"]);
/// bisection::solve(&model, &problem, [0.0, 100.0], &config, &mut obs)?;
/// obs.show(ShowConfig::new().title("Bisection").legend().log_y())?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Returns the points recorded for trace `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[must_use]
    pub fn points(&self, i: usize) -> &[[f64; 2]] {
        &self.data[i]
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl PlotApp {
    fn transformed(&self, points: &[[f64; 2]]) -> Vec<[f64; 2]> {
        if self.config.log_y {
            points
                .iter()
                .filter(|p| p[1] > 0.0)
                .map(|p| [p[0], p[1].log10()])
                .collect()
        } else {
            points.to_vec()
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("numkit_plot_observer");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if self.config.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let points = self.transformed(points);
                    if self.config.markers {
                        let markers: PlotPoints = points.iter().copied().collect();
                        plot_ui.points(Points::new(markers).name(name).radius(3.0));
                    }
                    let line: PlotPoints = points.into_iter().collect();
                    plot_ui.line(Line::new(line).name(name));
                }
            });
        });
    }
}
