/// Watches a solve one event at a time.
///
/// The fixed-step driver calls [`observe`] after recording each sample,
/// starting with the initial condition. `None` means carry on. `Some(action)`
/// asks the solver to react; the fixed-step driver only knows how to stop
/// early.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is one that
/// never acts.
///
/// [`observe`]: Observer::observe
pub trait Observer<E, A> {
    /// Inspects `event` and returns an action, if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O>(mut observer: O, events: &[usize]) -> Vec<&'static str>
    where
        O: Observer<usize, &'static str>,
    {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closure_observer_can_act_and_keep_state() {
        let mut seen = 0;
        let actions = drive(
            |e: &usize| {
                seen += 1;
                (*e == 2).then_some("stop")
            },
            &[1, 2, 3],
        );
        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, 3);
    }
}
