/// One point `(x, y)` on an approximated solution curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// The independent variable.
    pub x: f64,

    /// The dependent variable at `x`.
    pub y: f64,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Sample> for [f64; 2] {
    fn from(sample: Sample) -> Self {
        [sample.x, sample.y]
    }
}

impl From<[f64; 2]> for Sample {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
