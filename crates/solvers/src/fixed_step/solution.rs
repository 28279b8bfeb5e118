use odestep_core::Trajectory;

/// Why a fixed-step solve returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every requested step was taken.
    Complete,

    /// An observer returned [`Action::StopEarly`](super::Action::StopEarly).
    StoppedByObserver,
}

/// Outcome of [`solve`](super::solve).
///
/// `trajectory` always holds `steps + 1` samples, the first being the
/// initial condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub status: Status,
    pub trajectory: Trajectory,

    /// Steps taken, which is less than requested only when stopped early.
    pub steps: usize,
}
