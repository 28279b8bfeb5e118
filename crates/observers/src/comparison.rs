use eframe::egui::{self, Color32};
use egui_plot::{Corner, Legend, Line, LineStyle, MarkerShape, Plot, Points};
use odestep_core::Trajectory;

use crate::{ShowConfig, plot::plot_points};

/// Number of points used to draw a reference curve.
const CURVE_RESOLUTION: u32 = 300;

/// Marker style for one trajectory in a [`ComparisonPlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Filled upward triangle.
    TriangleUp,
    /// Filled downward triangle.
    TriangleDown,
    /// Hollow circle.
    Circle,
    /// Filled square.
    Square,
}

impl Marker {
    /// Returns a distinct marker and color for the `i`th series.
    #[must_use]
    pub fn nth(i: usize) -> (Self, Color32) {
        const STYLES: [(Marker, Color32); 4] = [
            (Marker::TriangleUp, Color32::RED),
            (Marker::TriangleDown, Color32::DARK_GREEN),
            (Marker::Circle, Color32::BLUE),
            (Marker::Square, Color32::from_rgb(200, 120, 0)),
        ];
        STYLES[i % STYLES.len()]
    }

    fn shape(self) -> MarkerShape {
        match self {
            Marker::TriangleUp => MarkerShape::Up,
            Marker::TriangleDown => MarkerShape::Down,
            Marker::Circle => MarkerShape::Circle,
            Marker::Square => MarkerShape::Square,
        }
    }

    fn filled(self) -> bool {
        !matches!(self, Marker::Circle)
    }
}

struct Series {
    name: String,
    points: Vec<[f64; 2]>,
    marker: Marker,
    color: Color32,
}

struct Curve {
    name: String,
    points: Vec<[f64; 2]>,
}

/// A runnable egui application comparing trajectories against a reference curve.
///
/// Each trajectory is drawn as unconnected markers so the sample spacing is
/// visible; reference curves are drawn as dashed black lines.
///
/// # Example
///
/// ```ignore
/// ComparisonPlot::new()
///     .add_trajectory("RK1 Solution", &rk1)
///     .add_trajectory("RK2 Solution", &rk2)
///     .add_curve("Exact Solution", [0.0, 3.0], |x| 3.0 * (-2.0 * x).exp())
///     .show(ShowConfig::new().title("DEQ solutions").legend())?;
/// ```
#[derive(Default)]
pub struct ComparisonPlot {
    series: Vec<Series>,
    curves: Vec<Curve>,
    marker_radius: f32,
}

impl ComparisonPlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trajectory with the next marker and color in sequence.
    #[must_use]
    pub fn add_trajectory(self, name: &str, trajectory: &Trajectory) -> Self {
        let (marker, color) = Marker::nth(self.series.len());
        self.add_styled(name, trajectory, marker, color)
    }

    /// Adds a trajectory with an explicit marker and color.
    #[must_use]
    pub fn add_styled(
        mut self,
        name: &str,
        trajectory: &Trajectory,
        marker: Marker,
        color: Color32,
    ) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: trajectory.points(),
            marker,
            color,
        });
        self
    }

    /// Adds a reference curve sampled densely over `[from, to]`.
    #[must_use]
    pub fn add_curve(mut self, name: &str, [from, to]: [f64; 2], f: impl Fn(f64) -> f64) -> Self {
        let points = (0..=CURVE_RESOLUTION)
            .map(|i| {
                let x = from + (to - from) * f64::from(i) / f64::from(CURVE_RESOLUTION);
                [x, f(x)]
            })
            .collect();
        self.curves.push(Curve {
            name: name.to_string(),
            points,
        });
        self
    }

    /// Opens a blocking window showing every series and curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(mut self, config: ShowConfig) -> Result<(), eframe::Error> {
        self.marker_radius = config.marker_radius();
        let title = config.title.clone().unwrap_or_default();
        let options = config.native_options();
        let app = ComparisonApp {
            plot: self,
            legend: config.legend,
            log_y: config.log_y,
        };

        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
    }
}

struct ComparisonApp {
    plot: ComparisonPlot,
    legend: bool,
    log_y: bool,
}

impl eframe::App for ComparisonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let y_label = if self.log_y { "log₁₀ y" } else { "y" };
            let mut plot = Plot::new("comparison").x_axis_label("x").y_axis_label(y_label);
            if self.legend {
                plot = plot.legend(Legend::default().position(Corner::RightTop));
            }
            let radius = self.plot.marker_radius;
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                for series in &self.plot.series {
                    plot_ui.points(
                        Points::new(plot_points(&series.points, log_y))
                            .name(&series.name)
                            .shape(series.marker.shape())
                            .filled(series.marker.filled())
                            .radius(radius)
                            .color(series.color),
                    );
                }
                for curve in &self.plot.curves {
                    plot_ui.line(
                        Line::new(plot_points(&curve.points, log_y))
                            .name(&curve.name)
                            .color(Color32::BLACK)
                            .style(LineStyle::dashed_loose()),
                    );
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use odestep_core::Sample;

    #[test]
    fn markers_cycle_through_distinct_styles() {
        assert_eq!(Marker::nth(0).0, Marker::TriangleUp);
        assert_eq!(Marker::nth(1).0, Marker::TriangleDown);
        assert_ne!(Marker::nth(0).1, Marker::nth(1).1);
        assert_eq!(Marker::nth(4), Marker::nth(0));
    }

    #[test]
    fn trajectories_keep_their_points() {
        let trajectory: Trajectory = [Sample::new(0.0, 3.0), Sample::new(1.0, 1.2)]
            .into_iter()
            .collect();
        let plot = ComparisonPlot::new()
            .add_trajectory("RK1", &trajectory)
            .add_trajectory("RK2", &trajectory);

        assert_eq!(plot.series.len(), 2);
        assert_eq!(plot.series[0].points, trajectory.points());
        assert_eq!(plot.series[1].marker, Marker::TriangleDown);
    }

    #[test]
    fn curves_span_the_requested_interval() {
        let plot = ComparisonPlot::new().add_curve("Exact", [0.0, 3.0], |x| 3.0 * (-2.0 * x).exp());
        let points = &plot.curves[0].points;

        assert_eq!(points.len(), 301);
        assert_eq!(points[0], [0.0, 3.0]);
        assert_relative_eq!(points[300][0], 3.0);
        assert_relative_eq!(points[300][1], 3.0 * (-6.0_f64).exp());
    }
}
