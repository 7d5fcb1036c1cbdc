//! Cancellable auto-reload timer implementation

use std::sync::mpsc::{self, RecvTimeoutError, TrySendError};
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, warn};

use crate::controller::ControlEvent;
use crate::range::unix_time_ms;

/// An owned, cancellable recurring timer
///
/// While alive, sends [`ControlEvent::Tick`] into the control channel once per
/// period, stamping each tick with its own generation and the wall-clock "now"
/// at the moment it fired. Dropping the handle cancels the timer: the stop
/// channel closes, the thread wakes out of its wait and exits, and the drop
/// joins it. A pending tick is abandoned, not delivered late.
pub struct TickerHandle {
    /// Generation the controller compares incoming ticks against
    generation: u64,
    /// Closing this channel wakes and stops the timer thread
    stop_sender: Option<mpsc::Sender<()>>,
    /// Timer thread, joined on drop
    thread: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Spawn a timer thread firing every `period`
    ///
    /// Ticks are delivered with `try_send`: if the control channel is full the
    /// tick is dropped with a warning rather than blocking, so cancellation
    /// can never deadlock against a backlogged controller.
    pub fn spawn(
        period: Duration,
        generation: u64,
        events: mpsc::SyncSender<ControlEvent>,
    ) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel::<()>();

        let thread = std::thread::spawn(move || {
            debug!(generation, ?period, "auto-reload ticker armed");
            loop {
                match stop_receiver.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        let tick = ControlEvent::Tick {
                            generation,
                            now_ms: unix_time_ms(),
                        };
                        match events.try_send(tick) {
                            Ok(()) => debug!(generation, "tick delivered"),
                            Err(TrySendError::Full(_)) => {
                                warn!(generation, "control channel full, dropping tick");
                            }
                            Err(TrySendError::Disconnected(_)) => {
                                debug!(generation, "control channel closed, ticker exiting");
                                break;
                            }
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!(generation, "auto-reload ticker stopped");
        });

        Self {
            generation,
            stop_sender: Some(stop_sender),
            thread: Some(thread),
        }
    }

    /// Generation stamped onto every tick this handle produces
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        // Closing the stop channel wakes recv_timeout immediately
        drop(self.stop_sender.take());
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!(generation = self.generation, "ticker thread panicked");
            }
        }
    }
}
