// crates/infra/src/debounce.rs
use std::{
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use text_count_shared_kernel::{InfraResult, InfrastructureError};
use tracing::{debug, trace};

enum Message<T> {
    Call(T),
    Cancel,
    Flush(Sender<()>),
}

/// Trailing-edge debouncer: the target runs once per quiet period with the
/// latest payload.
///
/// Each [`call`](Self::call) supersedes the pending payload and restarts the
/// delay. Calls made after the target fired start a new cycle. Dropping the
/// coalescer discards anything still pending and joins the worker thread.
pub struct Coalescer<T: Send + 'static> {
    tx: Option<Sender<Message<T>>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Coalescer<T> {
    /// Spawn the worker that invokes `target` after `delay` of quiet.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::Scheduler`] if the thread cannot be spawned.
    pub fn new<F>(delay: Duration, target: F) -> InfraResult<Self>
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = crossbeam_channel::unbounded();
        let worker = thread::Builder::new()
            .name("text-count-coalescer".into())
            .spawn(move || run_worker(&rx, delay, target))
            .map_err(|err| InfrastructureError::Scheduler { details: err.to_string() })?;
        Ok(Self { tx: Some(tx), worker: Some(worker) })
    }

    pub fn call(&self, payload: T) {
        self.send(Message::Call(payload));
    }

    /// Drop the pending payload, if any.
    pub fn cancel(&self) {
        self.send(Message::Cancel);
    }

    /// Run the pending payload now; returns once the target has finished.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = crossbeam_channel::bounded(1);
        if self.send(Message::Flush(ack_tx)) {
            let _ = ack_rx.recv();
        }
    }

    fn send(&self, message: Message<T>) -> bool {
        let sent = self.tx.as_ref().is_some_and(|tx| tx.send(message).is_ok());
        if !sent {
            trace!("coalescer worker is gone; message dropped");
        }
        sent
    }
}

impl<T: Send + 'static> Drop for Coalescer<T> {
    fn drop(&mut self) {
        drop(self.tx.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker<T, F>(rx: &Receiver<Message<T>>, delay: Duration, mut target: F)
where
    F: FnMut(T),
{
    let mut pending: Option<(T, Instant)> = None;

    loop {
        let message = match &pending {
            None => match rx.recv() {
                Ok(message) => message,
                Err(_) => return,
            },
            Some((_, deadline)) => match rx.recv_deadline(*deadline) {
                Ok(message) => message,
                Err(RecvTimeoutError::Timeout) => {
                    if let Some((payload, _)) = pending.take() {
                        target(payload);
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("coalescer closed with a pending call; discarded");
                    return;
                }
            },
        };

        match message {
            Message::Call(payload) => pending = Some((payload, Instant::now() + delay)),
            Message::Cancel => pending = None,
            Message::Flush(ack) => {
                if let Some((payload, _)) = pending.take() {
                    target(payload);
                }
                let _ = ack.send(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    const DELAY: Duration = Duration::from_millis(60);

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl FnMut(u32) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |n| sink.lock().unwrap().push(n))
    }

    fn settle() {
        thread::sleep(DELAY * 5);
    }

    #[test]
    fn burst_collapses_to_latest_payload() {
        let (seen, target) = recorder();
        let coalescer = Coalescer::new(DELAY, target).unwrap();

        for n in 1..=5 {
            coalescer.call(n);
        }
        settle();

        assert_eq!(*seen.lock().unwrap(), vec![5]);
    }

    #[test]
    fn calls_after_firing_start_a_new_cycle() {
        let (seen, target) = recorder();
        let coalescer = Coalescer::new(DELAY, target).unwrap();

        coalescer.call(1);
        settle();
        coalescer.call(2);
        settle();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn does_not_fire_before_the_delay() {
        let (seen, target) = recorder();
        let coalescer = Coalescer::new(Duration::from_secs(5), target).unwrap();

        coalescer.call(1);
        thread::sleep(Duration::from_millis(50));
        assert!(seen.lock().unwrap().is_empty());
        coalescer.cancel();
    }

    #[test]
    fn flush_runs_pending_payload_immediately() {
        let (seen, target) = recorder();
        let coalescer = Coalescer::new(Duration::from_secs(5), target).unwrap();

        coalescer.call(7);
        coalescer.call(8);
        coalescer.flush();
        assert_eq!(*seen.lock().unwrap(), vec![8]);

        // nothing pending: flush is a no-op
        coalescer.flush();
        assert_eq!(*seen.lock().unwrap(), vec![8]);
    }

    #[test]
    fn cancel_discards_pending_payload() {
        let (seen, target) = recorder();
        let coalescer = Coalescer::new(DELAY, target).unwrap();

        coalescer.call(1);
        coalescer.cancel();
        settle();

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn drop_discards_pending_payload() {
        let (seen, target) = recorder();
        let coalescer = Coalescer::new(Duration::from_secs(5), target).unwrap();

        coalescer.call(1);
        drop(coalescer);

        assert!(seen.lock().unwrap().is_empty());
    }
}
