use std::io::{self, Write};

use odestep_core::Observer;

use crate::traits::HasSample;

/// An observer that writes one line per solver event.
///
/// Lines look like:
///
/// ```text
/// [RK2] step    3  x =     0.300000  y =   1.654686e0
/// ```
///
/// Writing never interrupts the solve. The first I/O error is kept and
/// returned from [`finish`]; later events are dropped once it occurs.
///
/// [`finish`]: StepLog::finish
#[derive(Debug)]
pub struct StepLog<W: Write> {
    writer: W,
    label: String,
    every: usize,
    error: Option<io::Error>,
}

impl<W: Write> StepLog<W> {
    /// Creates a log that prefixes each line with `[label]`.
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
            every: 1,
            error: None,
        }
    }

    /// Logs only every `n`th step. Step 0 is always logged.
    ///
    /// A value of zero is treated as one.
    #[must_use]
    pub fn every(mut self, n: usize) -> Self {
        self.every = n.max(1);
        self
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn record<E: HasSample>(&mut self, event: &E) {
        if self.error.is_some() || event.step() % self.every != 0 {
            return;
        }
        let sample = event.sample();
        let result = writeln!(
            self.writer,
            "[{}] step {:>4}  x = {:>12.6}  y = {:>12.6e}",
            self.label,
            event.step(),
            sample.x,
            sample.y,
        );
        if let Err(err) = result {
            self.error = Some(err);
        }
    }
}

impl<W: Write, E: HasSample, A> Observer<E, A> for StepLog<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut StepLog` to be passed to solvers that take an observer by
/// value, so [`StepLog::finish`] can be called after the solve completes.
impl<W: Write, E: HasSample, A> Observer<E, A> for &mut StepLog<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).record(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use odestep_core::{IntegrationSpec, Sample};
    use odestep_solvers::{
        Method,
        fixed_step::{self, Event},
    };

    fn lines(bytes: &[u8]) -> Vec<String> {
        String::from_utf8(bytes.to_vec())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn writes_one_line_per_event() {
        let spec = IntegrationSpec::new(3.0, 4, 0.0, 1.0).unwrap();
        let mut log = StepLog::new(Vec::new(), "RK1");

        fixed_step::solve(&Method::Euler, &|_x: f64, y: f64| -2.0 * y, &spec, &mut log);

        let lines = lines(&log.finish().unwrap());
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("[RK1] step    0"));
        assert!(lines[4].starts_with("[RK1] step    4"));
        assert!(lines[4].contains("x =     1.000000"));
    }

    #[test]
    fn every_thins_the_output() {
        let mut log = StepLog::new(Vec::new(), "RK4").every(10);

        for step in 0..=25 {
            let event = Event {
                step,
                sample: Sample::new(0.0, 0.0),
            };
            let _: Option<fixed_step::Action> = log.observe(&event);
        }

        let lines = lines(&log.finish().unwrap());
        assert_eq!(lines.len(), 3); // steps 0, 10, 20
    }

    #[derive(Debug)]
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_the_first_write_error() {
        let spec = IntegrationSpec::new(3.0, 4, 0.0, 1.0).unwrap();
        let mut log = StepLog::new(FailingWriter, "RK2");

        let solution = fixed_step::solve(&Method::Midpoint, &|_x: f64, y: f64| -y, &spec, &mut log);

        assert_eq!(solution.steps, 4);
        let err = log.finish().unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }
}
