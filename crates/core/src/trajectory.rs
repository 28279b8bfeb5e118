use std::slice;

use crate::Sample;

/// An ordered sequence of samples approximating a solution curve.
///
/// A trajectory is produced by value by a solver and is not modified
/// afterwards. A completed fixed-step solve yields `steps + 1` samples that
/// start exactly at `(x0, y0)` and are spaced by a constant step size, in the
/// direction of `x_end - x0`.
///
/// Renderers and writers can consume it either as pairs ([`points`]) or as two
/// parallel sequences ([`xs`] and [`ys`]).
///
/// [`points`]: Trajectory::points
/// [`xs`]: Trajectory::xs
/// [`ys`]: Trajectory::ys
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    /// Creates a trajectory from an ordered list of samples.
    #[must_use]
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Returns the samples in order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Consumes the trajectory and returns its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the trajectory has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the first sample, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// Returns the last sample, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Returns an iterator over the samples.
    pub fn iter(&self) -> slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Returns the x values in order.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    /// Returns the y values in order.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }

    /// Returns the samples as `[x, y]` pairs, ready for plotting.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.samples.iter().copied().map(Into::into).collect()
    }
}

impl FromIterator<Sample> for Trajectory {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl IntoIterator for Trajectory {
    type Item = Sample;
    type IntoIter = std::vec::IntoIter<Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}
