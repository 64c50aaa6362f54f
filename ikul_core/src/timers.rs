//! Scoped ownership of cancelable timers.
//!
//! Every timeout or interval a component arms goes into a [`TimerSet`] owned
//! by that component. Tearing the component down cancels the set, so no
//! callback can fire into a discarded view.

/// A pending timer that can be stopped.
pub trait CancelTimer {
    /// Stop the timer. Must be harmless if it already fired.
    fn cancel(&self);
}

#[cfg(feature = "runtime")]
impl CancelTimer for tokio::task::AbortHandle {
    fn cancel(&self) {
        self.abort();
    }
}

/// Timers owned by one component; cancelled together.
#[derive(Debug)]
pub struct TimerSet<H: CancelTimer> {
    handles: Vec<H>,
}

impl<H: CancelTimer> Default for TimerSet<H> {
    fn default() -> Self {
        Self {
            handles: Vec::new(),
        }
    }
}

impl<H: CancelTimer> TimerSet<H> {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a timer.
    pub fn push(&mut self, handle: H) {
        self.handles.push(handle);
    }

    /// Cancel the previously owned timers and keep only `handle`.
    ///
    /// This is the debounce primitive: at most one timer stays live.
    pub fn replace(&mut self, handle: H) {
        self.cancel_all();
        self.handles.push(handle);
    }

    /// Number of owned timers.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether nothing is owned.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancel and forget every owned timer.
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
    }
}

impl<H: CancelTimer> Drop for TimerSet<H> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone)]
    struct Probe {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl CancelTimer for Probe {
        fn cancel(&self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    fn probes(log: &Rc<RefCell<Vec<u32>>>, ids: &[u32]) -> Vec<Probe> {
        ids.iter()
            .map(|&id| Probe {
                id,
                log: Rc::clone(log),
            })
            .collect()
    }

    #[test]
    fn drop_cancels_everything_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut set = TimerSet::new();
            for probe in probes(&log, &[1, 2, 3]) {
                set.push(probe);
            }
            assert_eq!(set.len(), 3);
        }
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn replace_keeps_a_single_live_timer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = TimerSet::new();
        let mut handles = probes(&log, &[1, 2, 3]).into_iter();
        set.replace(handles.next().unwrap());
        set.replace(handles.next().unwrap());
        set.replace(handles.next().unwrap());
        assert_eq!(set.len(), 1);
        assert_eq!(*log.borrow(), vec![1, 2]);

        set.cancel_all();
        assert!(set.is_empty());
        drop(set);
        assert_eq!(*log.borrow(), vec![1, 2, 3], "no double cancel on drop");
    }

    #[cfg(feature = "runtime")]
    #[tokio::test(start_paused = true)]
    async fn aborted_tokio_timer_never_fires() {
        let fired = Rc::new(RefCell::new(false));
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let flag = Rc::clone(&fired);
                let task = tokio::task::spawn_local(async move {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                    *flag.borrow_mut() = true;
                });
                let mut set = TimerSet::new();
                set.push(task.abort_handle());
                drop(set);

                tokio::time::sleep(Duration::from_secs(1)).await;
                assert!(task.await.unwrap_err().is_cancelled());
            })
            .await;
        assert!(!*fired.borrow());
    }
}
