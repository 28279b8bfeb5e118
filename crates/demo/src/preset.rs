use odestep_core::Derivative;
use serde::Deserialize;

/// A built-in problem with a closed-form solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// `y' = -2y`, `y(0) = 3` on `[0, 3]`.
    #[default]
    Decay,

    /// `y' = -y/x - 2/x²`, `y(1) = 2` on `[1, 100]`.
    InverseSquare,

    /// `y' = 2x - 1 - 3y`, `y(0) = 3` on `[0, 3]`.
    ForcedLinear,
}

/// Default initial condition and grid for a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub y0: f64,
    pub steps: usize,
    pub x0: f64,
    pub x_end: f64,
}

impl Preset {
    /// Returns the equation as shown in window titles.
    #[must_use]
    pub fn equation(self) -> &'static str {
        match self {
            Preset::Decay => "dy/dx = -2y",
            Preset::InverseSquare => "dy/dx = -y/x - 2/x²",
            Preset::ForcedLinear => "dy/dx = 2x - 1 - 3y",
        }
    }

    #[must_use]
    pub fn defaults(self) -> Defaults {
        match self {
            Preset::Decay => Defaults {
                y0: 3.0,
                steps: 30,
                x0: 0.0,
                x_end: 3.0,
            },
            Preset::InverseSquare => Defaults {
                y0: 2.0,
                steps: 100,
                x0: 1.0,
                x_end: 100.0,
            },
            Preset::ForcedLinear => Defaults {
                y0: 3.0,
                steps: 30,
                x0: 0.0,
                x_end: 3.0,
            },
        }
    }

    /// Evaluates the exact solution through the preset's default initial condition.
    #[must_use]
    pub fn exact(self, x: f64) -> f64 {
        match self {
            Preset::Decay => 3.0 * (-2.0 * x).exp(),
            Preset::InverseSquare => -2.0 * x.ln() / x + 2.0 / x,
            Preset::ForcedLinear => 2.0 * x / 3.0 - 5.0 / 9.0 + 32.0 / 9.0 * (-3.0 * x).exp(),
        }
    }
}

impl Derivative for Preset {
    fn slope(&self, x: f64, y: f64) -> f64 {
        match self {
            Preset::Decay => -2.0 * y,
            Preset::InverseSquare => -y / x - 2.0 / (x * x),
            Preset::ForcedLinear => 2.0 * x - 1.0 - 3.0 * y,
        }
    }
}
