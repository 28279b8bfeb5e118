//! Live trace recording and the shared window settings.
//!
//! [`PlotObserver`] collects one line per solve while the solver runs;
//! [`ShowConfig`] sizes and labels the window that shows it.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use odestep_core::{Observer, Sample};

use crate::traits::HasSample;

/// Fraction of the display height given to the plot window.
const DISPLAY_FRACTION: f32 = 0.5;

/// Width-to-height ratio of the plot window.
const ASPECT: f32 = 1.1;

/// Marker diameter as a fraction of the window height.
const MARKER_FRACTION: f32 = 0.015;

/// Window settings shared by [`PlotObserver`] and [`ComparisonPlot`].
///
/// ```ignore
/// ShowConfig::new().title("RK4 error").legend().log_y().fit_display(1440.0)
/// ```
///
/// [`ComparisonPlot`]: crate::ComparisonPlot
#[derive(Debug, Clone, PartialEq)]
pub struct ShowConfig {
    pub(crate) title: Option<String>,
    pub(crate) legend: bool,
    pub(crate) log_y: bool,
    pub(crate) size: [f32; 2],
}

impl ShowConfig {
    /// Untitled, no legend, linear y, sized for a 1080-pixel-high display.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
            size: canvas_size(1080.0),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Shows a legend keyed by series name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots `log₁₀ y` instead of `y`. Points with `y <= 0` are dropped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Sets the window size in logical pixels.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = [width, height];
        self
    }

    /// Sizes the window to half the given display height, slightly wider
    /// than tall, so it looks the same on standard and high-resolution screens.
    #[must_use]
    pub fn fit_display(mut self, display_height: f32) -> Self {
        self.size = canvas_size(display_height);
        self
    }

    /// Returns the marker radius that suits this window height.
    #[must_use]
    pub fn marker_radius(&self) -> f32 {
        0.5 * MARKER_FRACTION * self.size[1]
    }

    pub(crate) fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(self.size),
            ..Default::default()
        }
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the `[width, height]` of a plot window for a display of the given height.
#[must_use]
pub(crate) fn canvas_size(display_height: f32) -> [f32; 2] {
    let height = DISPLAY_FRACTION * display_height;
    [ASPECT * height, height]
}

/// Maps `[x, y]` pairs to plot points, taking log₁₀ of `y` when `log_y` is set.
pub(crate) fn plot_points(points: &[[f64; 2]], log_y: bool) -> PlotPoints<'_> {
    if log_y {
        points
            .iter()
            .filter(|&&[_, y]| y > 0.0)
            .map(|&[x, y]| [x, y.log10()])
            .collect()
    } else {
        points.iter().copied().collect()
    }
}

/// Collects solver samples as named lines and shows them in an egui window.
///
/// Each solve records into its own trace. Pass [`trace`] as the observer;
/// it borrows the plot only for the duration of that solve.
///
/// ```ignore
/// let mut plot = PlotObserver::new();
/// for method in Method::ALL {
///     fixed_step::solve(&method, &f, &spec, plot.trace(method.label()));
/// }
/// plot.show(ShowConfig::new().title("All methods").legend())?;
/// ```
///
/// [`trace`]: PlotObserver::trace
#[derive(Debug, Default)]
pub struct PlotObserver {
    traces: Vec<(String, Vec<[f64; 2]>)>,
}

impl PlotObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new named trace and returns an observer that appends to it.
    pub fn trace(&mut self, name: impl Into<String>) -> Trace<'_> {
        self.traces.push((name.into(), Vec::new()));
        let last = self.traces.len() - 1;
        Trace {
            points: &mut self.traces[last].1,
        }
    }

    /// Returns the recorded traces in creation order.
    #[must_use]
    pub fn traces(&self) -> &[(String, Vec<[f64; 2]>)] {
        &self.traces
    }

    /// Opens a blocking window with one line per trace.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.clone().unwrap_or_default();
        let options = config.native_options();
        let app = TraceApp {
            traces: self.traces,
            legend: config.legend,
            log_y: config.log_y,
        };

        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
    }
}

/// Observer that appends each event's sample to one [`PlotObserver`] trace.
#[derive(Debug)]
pub struct Trace<'a> {
    points: &'a mut Vec<[f64; 2]>,
}

impl Trace<'_> {
    /// Appends a sample by hand, for points that do not come from a solver.
    pub fn record(&mut self, sample: Sample) {
        self.points.push(sample.into());
    }
}

impl<E: HasSample, A> Observer<E, A> for Trace<'_> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.sample());
        None
    }
}

struct TraceApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    log_y: bool,
}

impl eframe::App for TraceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let y_label = if self.log_y { "log₁₀ y" } else { "y" };
            let mut plot = Plot::new("traces").x_axis_label("x").y_axis_label(y_label);
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    plot_ui.line(Line::new(plot_points(points, self.log_y)).name(name));
                }
            });
        });
    }
}
