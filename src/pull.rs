//! Lazy pull adapter over a push-style producer.
//!
//! Rust has no stable suspension primitive for an arbitrary closure, so the
//! adapter runs the producer on its own worker thread and hands elements
//! over a rendezvous channel. A second, control-direction channel lets the
//! consumer cancel: dropping it wakes a producer parked on the handoff, its
//! next yield answers "stop", and the worker terminates after running the
//! producer's cleanups. The worker can never be left parked forever.

use std::panic::resume_unwind;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{bounded, Receiver, Sender};
use crossbeam::select;

use crate::seq::Seq;

/// A pull-style cursor over the elements of a [`Seq`].
///
/// `next` returns each element in production order, then `None` forever.
/// `stop` disposes the adapter early; afterwards `next` reports "no more
/// values" without ever resuming the producer.
pub struct Pull<T> {
    items: Option<Receiver<T>>,
    cancel: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
    finished: bool,
}

/// A pull-style cursor over `(value, Option<error>)` pairs.
pub type Pull2<T, E> = Pull<(T, Option<E>)>;

impl<T: Send + 'static> Pull<T> {
    pub fn new(seq: Seq<T>) -> Self {
        // Capacity 0 keeps exactly one element in flight: the producer
        // parks on each handoff until the consumer asks for it.
        let (item_tx, item_rx) = bounded::<T>(0);
        let (cancel_tx, cancel_rx) = bounded::<()>(0);

        let worker = thread::spawn(move || {
            let mut cancelled = false;
            seq.run(|item| {
                // A producer that keeps yielding after being told to stop
                // must not park on a handoff nobody will receive.
                if cancelled {
                    return false;
                }
                select! {
                    send(item_tx, item) -> delivered => delivered.is_ok(),
                    recv(cancel_rx) -> _ => {
                        cancelled = true;
                        false
                    }
                }
            });
        });

        Pull {
            items: Some(item_rx),
            cancel: Some(cancel_tx),
            worker: Some(worker),
            finished: false,
        }
    }

    /// Fetches the next element, or `None` once the sequence is exhausted.
    ///
    /// If the producer panicked, the panic is re-raised here, after the
    /// producer's cleanups have already run on the worker.
    pub fn next(&mut self) -> Option<T> {
        if self.finished {
            return None;
        }

        let received = match &self.items {
            Some(items) => items.recv().ok(),
            None => None,
        };

        match received {
            Some(item) => Some(item),
            None => {
                // The producer is done, one way or another. Reap it and
                // surface a panic if it carried one.
                self.finished = true;
                self.items = None;
                self.cancel = None;
                self.reap();
                None
            }
        }
    }

    /// Signals the producer to stop, waits for its cleanups to run, and
    /// releases the worker. Idempotent; all later `next` calls return `None`.
    pub fn stop(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        // Dropping both channel ends wakes a producer parked on the
        // rendezvous send; its pending yield answers "stop".
        self.cancel = None;
        self.items = None;
        self.reap();
    }

    /// Joins the worker, re-raising any panic it carried.
    fn reap(&mut self) {
        if let Some(worker) = self.worker.take() {
            if let Err(payload) = worker.join() {
                resume_unwind(payload);
            }
        }
    }
}

impl<T: Send + 'static> Iterator for Pull<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Pull::next(self)
    }
}

impl<T> Drop for Pull<T> {
    fn drop(&mut self) {
        self.finished = true;
        self.cancel = None;
        self.items = None;
        if let Some(worker) = self.worker.take() {
            if let Err(payload) = worker.join() {
                // Re-raising while already unwinding would abort.
                if !thread::panicking() {
                    resume_unwind(payload);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleanup::Cleanup;
    use crate::seq::Seq2;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn counting_seq(limit: usize, computed: Arc<AtomicUsize>) -> Seq<usize> {
        Seq::new(move |yield_item| {
            for n in 0..limit {
                computed.fetch_add(1, Ordering::SeqCst);
                if !yield_item(n) {
                    return;
                }
            }
        })
    }

    #[test]
    fn exhausts_in_order_then_reports_done_forever() {
        let mut pull = Seq::of(0..5).pull();
        for expected in 0..5 {
            assert_eq!(pull.next(), Some(expected));
        }
        assert_eq!(pull.next(), None);
        assert_eq!(pull.next(), None);
        assert_eq!(pull.next(), None);
    }

    #[test]
    fn stop_halts_the_producer() {
        let computed = Arc::new(AtomicUsize::new(0));
        let mut pull = counting_seq(usize::MAX, Arc::clone(&computed)).pull();

        assert_eq!(pull.next(), Some(0));
        assert_eq!(pull.next(), Some(1));
        assert_eq!(pull.next(), Some(2));
        pull.stop();

        // stop() joins the worker, so the count is final: the three
        // delivered elements plus at most the one in flight.
        assert!(computed.load(Ordering::SeqCst) <= 4);
        assert_eq!(pull.next(), None);
        pull.stop();
        assert_eq!(pull.next(), None);
    }

    #[test]
    fn stop_runs_cleanups_in_reverse_order() {
        let log: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let producer_log = Arc::clone(&log);

        let seq = Seq::new(move |yield_item| {
            let mut cleanup = Cleanup::new();
            for n in 0.. {
                let log = Arc::clone(&producer_log);
                cleanup.defer(move || log.lock().unwrap().push(format!("cleanup-{n}")));
                if !yield_item(n) {
                    return;
                }
            }
        });

        let mut pull = seq.pull();
        assert_eq!(pull.next(), Some(0));
        assert_eq!(pull.next(), Some(1));
        pull.stop();

        // Element 2 was already registered and in flight when the stop
        // landed, so three cleanups run, newest first.
        assert_eq!(
            *log.lock().unwrap(),
            vec!["cleanup-2", "cleanup-1", "cleanup-0"]
        );
    }

    #[test]
    fn cleanups_run_exactly_once_on_drop() {
        let runs = Arc::new(AtomicUsize::new(0));
        let producer_runs = Arc::clone(&runs);

        let seq = Seq::new(move |yield_item| {
            let mut cleanup = Cleanup::new();
            let runs = Arc::clone(&producer_runs);
            cleanup.defer(move || {
                runs.fetch_add(1, Ordering::SeqCst);
            });
            for n in 0.. {
                if !yield_item(n) {
                    return;
                }
            }
        });

        {
            let mut pull = seq.pull();
            assert_eq!(pull.next(), Some(0));
            // Dropped without stop(); Drop must dispose the worker.
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn producer_panic_surfaces_after_its_cleanups() {
        let log: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let producer_log = Arc::clone(&log);

        let seq = Seq::new(move |yield_item| {
            let mut cleanup = Cleanup::new();
            for n in 0..3 {
                let log = Arc::clone(&producer_log);
                cleanup.defer(move || log.lock().unwrap().push(format!("cleanup-{n}")));
                if n == 2 {
                    panic!("fault at n=2");
                }
                if !yield_item(n) {
                    return;
                }
            }
        });

        let mut pull = seq.pull();
        assert_eq!(pull.next(), Some(0));
        assert_eq!(pull.next(), Some(1));

        let fault = catch_unwind(AssertUnwindSafe(|| pull.next()));
        let payload = fault.expect_err("the producer panic must propagate");
        let message = payload
            .downcast_ref::<&str>()
            .copied()
            .expect("panic payload");
        assert_eq!(message, "fault at n=2");

        // The worker unwound before the panic reached us, so every cleanup
        // registered up to the fault already ran, newest first.
        assert_eq!(
            *log.lock().unwrap(),
            vec!["cleanup-2", "cleanup-1", "cleanup-0"]
        );

        // The adapter is spent, not wedged.
        assert_eq!(pull.next(), None);
    }

    #[test]
    fn pull2_carries_per_element_errors() {
        let seq = Seq2::new(|yield_item| {
            for n in 1..=5 {
                let (value, err) = if n == 3 {
                    (0, Some("decode failed"))
                } else {
                    (n, None)
                };
                if !yield_item(value, err) {
                    return;
                }
            }
        });

        let mut pull = seq.pull();
        let mut seen = Vec::new();
        while let Some(pair) = pull.next() {
            seen.push(pair);
        }

        assert_eq!(seen.len(), 5);
        assert_eq!(seen[2], (0, Some("decode failed")));
        assert_eq!(seen[0], (1, None));
        assert_eq!(seen[4], (5, None));
    }

    #[test]
    fn works_as_a_plain_iterator() {
        let total: i32 = Seq::of(1..=10).pull().sum();
        assert_eq!(total, 55);
    }
}
