use std::io::{self, Write};

use odestep_core::{IntegrationSpec, Trajectory};
use odestep_observers::StepLog;
use odestep_report::{
    Table,
    accuracy::{ErrorProfile, Summary},
};
use odestep_solvers::{Method, fixed_step};

use crate::preset::Preset;

/// Trajectories from several methods on one preset problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    preset: Preset,
    spec: IntegrationSpec,
    runs: Vec<(Method, Trajectory)>,
}

impl Comparison {
    /// Solves `preset` once per method, in order.
    ///
    /// When `log` is given, every step of every run is written to it.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `log` fails.
    pub fn run<W: Write>(
        preset: Preset,
        spec: IntegrationSpec,
        methods: &[Method],
        mut log: Option<W>,
    ) -> io::Result<Self> {
        let mut runs = Vec::with_capacity(methods.len());
        for &method in methods {
            let trajectory = match log.as_mut() {
                Some(writer) => {
                    let mut step_log = StepLog::new(writer, method.label());
                    let solution = fixed_step::solve(&method, &preset, &spec, &mut step_log);
                    step_log.finish()?;
                    solution.trajectory
                }
                None => fixed_step::integrate(&method, &preset, &spec),
            };
            runs.push((method, trajectory));
        }

        Ok(Self {
            preset,
            spec,
            runs,
        })
    }

    /// Describes the problem being solved: equation, initial condition,
    /// domain, step count and step size.
    #[must_use]
    pub fn header(&self) -> String {
        let spec = &self.spec;
        format!(
            "ODE problem: {}\n\
             Initial condition: y({}) = {}\n\
             Domain: x ∈ [{}, {}]\n\
             Number of steps: {}\n\
             Step size h = {:.4}\n",
            self.preset.equation(),
            spec.x0(),
            spec.y0(),
            spec.x0(),
            spec.x_end(),
            spec.steps(),
            spec.step_size(),
        )
    }

    /// Returns `true` if the preset's closed-form solution applies.
    ///
    /// Overriding `x0` or `y0` moves the initial condition off the known
    /// solution, so there is nothing exact to compare against.
    #[must_use]
    pub fn has_exact(&self) -> bool {
        let d = self.preset.defaults();
        self.spec.x0() == d.x0 && self.spec.y0() == d.y0
    }

    /// Lines the trajectories up by sample, with an `Exact` column when available.
    ///
    /// # Errors
    ///
    /// Returns an error if no methods were run.
    pub fn table(&self) -> Result<Table, odestep_report::Error> {
        let named: Vec<(&str, &Trajectory)> = self
            .runs
            .iter()
            .map(|(method, trajectory)| (method.label(), trajectory))
            .collect();
        let table = Table::from_trajectories(&named)?;

        if self.has_exact() {
            let preset = self.preset;
            Ok(table.computed("Exact", move |x| preset.exact(x)))
        } else {
            Ok(table)
        }
    }

    /// Measures each run against the exact solution, when there is one.
    #[must_use]
    pub fn summary(&self) -> Option<Summary> {
        if !self.has_exact() {
            return None;
        }
        let profiles = self
            .runs
            .iter()
            .map(|(method, trajectory)| {
                ErrorProfile::new(method.label(), trajectory, |x| self.preset.exact(x))
            })
            .collect();
        Some(Summary::new(profiles))
    }

    /// Opens a window with every trajectory and the exact solution.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    #[cfg(feature = "plot")]
    pub fn show_solutions(&self) -> Result<(), Box<dyn std::error::Error>> {
        use odestep_observers::{ComparisonPlot, ShowConfig};

        let mut plot = ComparisonPlot::new();
        for (method, trajectory) in &self.runs {
            plot = plot.add_trajectory(&format!("{} Solution", method.label()), trajectory);
        }
        if self.has_exact() {
            let preset = self.preset;
            let end = self.spec.x_at(self.spec.steps());
            plot = plot.add_curve("Exact Solution", [self.spec.x0(), end], move |x| {
                preset.exact(x)
            });
        }

        let title = format!("DEQ Solutions: {}", self.preset.equation());
        plot.show(ShowConfig::new().title(title).legend())?;
        Ok(())
    }

    /// Opens a window with each method's absolute error on a log scale.
    ///
    /// Does nothing when there is no exact solution to measure against.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    #[cfg(feature = "plot")]
    pub fn show_errors(&self) -> Result<(), Box<dyn std::error::Error>> {
        use odestep_core::Sample;
        use odestep_observers::{ComparisonPlot, ShowConfig};

        let Some(summary) = self.summary() else {
            return Ok(());
        };

        let mut plot = ComparisonPlot::new();
        for profile in summary.profiles() {
            let errors: Trajectory = profile.errors().iter().copied().map(Sample::from).collect();
            plot = plot.add_trajectory(&format!("{} Error", profile.name()), &errors);
        }

        let title = format!("Absolute Error: {}", self.preset.equation());
        plot.show(ShowConfig::new().title(title).legend().log_y())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn decay(methods: &[Method]) -> Comparison {
        let d = Preset::Decay.defaults();
        let spec = IntegrationSpec::new(d.y0, d.steps, d.x0, d.x_end).unwrap();
        Comparison::run(Preset::Decay, spec, methods, None::<io::Sink>).unwrap()
    }

    #[test]
    fn runs_each_method_on_the_same_grid() {
        let comparison = decay(&[Method::Euler, Method::Midpoint, Method::Rk4]);

        assert_eq!(comparison.runs.len(), 3);
        for (_, trajectory) in &comparison.runs {
            assert_eq!(trajectory.len(), 31);
            assert_eq!(trajectory.xs(), comparison.runs[0].1.xs());
        }
    }

    #[test]
    fn logging_writes_every_step_of_every_run() {
        let d = Preset::Decay.defaults();
        let spec = IntegrationSpec::new(d.y0, 4, d.x0, d.x_end).unwrap();
        let mut out = Vec::new();

        let comparison =
            Comparison::run(Preset::Decay, spec, &[Method::Euler, Method::Rk4], Some(&mut out))
                .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 10);
        assert!(text.lines().next().unwrap().starts_with("[RK1] step    0"));
        assert!(text.lines().last().unwrap().starts_with("[RK4] step    4"));
        assert_eq!(comparison.runs[1].1, decay_with_steps(Method::Rk4, 4));
    }

    fn decay_with_steps(method: Method, steps: usize) -> Trajectory {
        let spec = IntegrationSpec::new(3.0, steps, 0.0, 3.0).unwrap();
        fixed_step::integrate(&method, &Preset::Decay, &spec)
    }

    #[test]
    fn table_includes_exact_column() {
        let table = decay(&[Method::Euler, Method::Midpoint]).table().unwrap();

        assert_eq!(table.headers(), ["x", "RK1", "RK2", "Exact"]);
        assert_eq!(table.len(), 31);

        let last = table.row(30).unwrap();
        assert_relative_eq!(last[3], 3.0 * (-6.0_f64).exp(), max_relative = 1e-12);
    }

    #[test]
    fn header_describes_the_problem() {
        let header = decay(&[Method::Euler]).header();
        let lines: Vec<&str> = header.lines().collect();

        assert_eq!(
            lines,
            [
                "ODE problem: dy/dx = -2y",
                "Initial condition: y(0) = 3",
                "Domain: x ∈ [0, 3]",
                "Number of steps: 30",
                "Step size h = 0.1000",
            ]
        );
    }

    #[test]
    fn summary_prefers_higher_order() {
        let summary = decay(&Method::ALL).summary().unwrap();
        assert_eq!(summary.best().map(ErrorProfile::name), Some("RK4"));
    }

    #[test]
    fn overridden_initial_condition_drops_the_exact_solution() {
        let spec = IntegrationSpec::new(1.0, 30, 0.0, 3.0).unwrap();
        let comparison =
            Comparison::run(Preset::Decay, spec, &[Method::Euler], None::<io::Sink>).unwrap();

        assert!(!comparison.has_exact());
        assert!(comparison.summary().is_none());
        assert_eq!(comparison.table().unwrap().headers(), ["x", "RK1"]);
    }
}
