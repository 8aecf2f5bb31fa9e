//! Live tail: a cancellable periodic tick that drives a log list.
//!
//! The tail only produces ticks. Whoever owns it decides what a tick means;
//! the list view prepends a freshly generated record and truncates the
//! collection to its retention cap.
//!
//! Every tail has a process-unique id and a generation tag. Ticks carry both,
//! and [`Model::update`] ignores ticks from another tail, from a stopped tail
//! or from an earlier generation. Stopping or cancelling bumps the tag, so a
//! tick already in flight when the view is torn down is dropped on arrival.
//!
//! ```rust
//! use admin_widgets::livetail;
//! use std::time::Duration;
//!
//! let mut tail = livetail::new();
//! assert_eq!(tail.interval, Duration::from_secs(2));
//! assert!(!tail.running());
//!
//! let _first_tick = tail.start();
//! assert!(tail.running());
//!
//! tail.cancel();
//! assert!(!tail.running());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, trace};

/// Default time between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);

static LAST_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Sent every interval while the tail runs.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the tail that scheduled this tick.
    pub id: u64,
    tag: u64,
}

/// Asks a tail to start or stop from inside the message loop.
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// Id of the target tail.
    pub id: u64,
    running: bool,
}

/// Outcome of [`Model::update`].
pub struct TailUpdate {
    /// True when the message was an accepted tick; the owner should
    /// produce one entry.
    pub tick: bool,
    /// Follow-up command scheduling the next tick, if any.
    pub cmd: Option<Cmd>,
}

impl TailUpdate {
    fn ignored() -> Self {
        Self {
            tick: false,
            cmd: None,
        }
    }
}

/// A live tail. Starts stopped.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between ticks.
    pub interval: Duration,
    id: u64,
    tag: u64,
    running: bool,
}

/// Creates a stopped tail with the default interval.
pub fn new() -> Model {
    new_with_interval(DEFAULT_INTERVAL)
}

/// Creates a stopped tail ticking every `interval`.
pub fn new_with_interval(interval: Duration) -> Model {
    Model {
        interval,
        id: next_id(),
        tag: 0,
        running: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Process-unique id of this tail.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether ticks are currently accepted.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Starts a new generation and returns the command for its first tick.
    /// Ticks of any earlier generation are ignored from now on.
    pub fn start(&mut self) -> Cmd {
        self.running = true;
        self.tag = self.tag.wrapping_add(1);
        debug!(id = self.id, tag = self.tag, "live tail started");
        self.tick()
    }

    /// Stops accepting ticks. The tick in flight, if any, is dropped when it
    /// arrives.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.tag = self.tag.wrapping_add(1);
            debug!(id = self.id, "live tail stopped");
        }
    }

    /// Starts a stopped tail or stops a running one. Returns the first-tick
    /// command when starting.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.running {
            self.stop();
            None
        } else {
            Some(self.start())
        }
    }

    /// Teardown. Equivalent to [`stop`](Self::stop); call it when the owning
    /// view goes away so no further entries are produced.
    pub fn cancel(&mut self) {
        self.stop();
    }

    /// Command that delivers a [`StartStopMsg`] for this tail.
    pub fn start_stop_cmd(&self, running: bool) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }

    /// The tick this tail currently waits for.
    #[cfg(test)]
    pub(crate) fn pending_tick(&self) -> Msg {
        Box::new(TickMsg {
            id: self.id,
            tag: self.tag,
        }) as Msg
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Handles tail messages. Anything else, and ticks belonging to another
    /// tail or generation, yields an ignored update.
    pub fn update(&mut self, msg: &Msg) -> TailUpdate {
        if let Some(start_stop) = msg.downcast_ref::<StartStopMsg>() {
            if start_stop.id != self.id || start_stop.running == self.running {
                return TailUpdate::ignored();
            }
            if start_stop.running {
                return TailUpdate {
                    tick: false,
                    cmd: Some(self.start()),
                };
            }
            self.stop();
            return TailUpdate::ignored();
        }

        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if !self.running || tick.id != self.id || tick.tag != self.tag {
                trace!(id = tick.id, tag = tick.tag, "stale live tail tick dropped");
                return TailUpdate::ignored();
            }
            self.tag = self.tag.wrapping_add(1);
            return TailUpdate {
                tick: true,
                cmd: Some(self.tick()),
            };
        }

        TailUpdate::ignored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_of(tail: &Model) -> Msg {
        tail.pending_tick()
    }

    #[test]
    fn test_ids_are_unique() {
        let a = new();
        let b = new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_stopped_tail_ignores_ticks() {
        let mut tail = new();
        let update = tail.update(&tick_of(&tail));
        assert!(!update.tick);
        assert!(update.cmd.is_none());
    }

    #[test]
    fn test_running_tail_accepts_current_tick_once() {
        let mut tail = new();
        let _ = tail.start();
        let msg = tick_of(&tail);

        let first = tail.update(&msg);
        assert!(first.tick);
        assert!(first.cmd.is_some());

        // Same tick delivered twice must not double the rate.
        let replay = tail.update(&msg);
        assert!(!replay.tick);
    }

    #[test]
    fn test_cancel_drops_in_flight_tick() {
        let mut tail = new();
        let _ = tail.start();
        let in_flight = tick_of(&tail);
        tail.cancel();
        assert!(!tail.update(&in_flight).tick);

        // Restarting does not revive the old generation either.
        let _ = tail.start();
        assert!(!tail.update(&in_flight).tick);
        assert!(tail.update(&tick_of(&tail)).tick);
    }

    #[test]
    fn test_foreign_tick_ignored() {
        let mut mine = new();
        let mut other = new();
        let _ = mine.start();
        let _ = other.start();
        assert!(!mine.update(&tick_of(&other)).tick);
    }

    #[test]
    fn test_toggle() {
        let mut tail = new();
        assert!(tail.toggle().is_some());
        assert!(tail.running());
        assert!(tail.toggle().is_none());
        assert!(!tail.running());
    }

    #[test]
    fn test_start_stop_msg() {
        let mut tail = new();
        let start = Box::new(StartStopMsg {
            id: tail.id,
            running: true,
        }) as Msg;
        let update = tail.update(&start);
        assert!(tail.running());
        assert!(update.cmd.is_some());

        let stop = Box::new(StartStopMsg {
            id: tail.id,
            running: false,
        }) as Msg;
        tail.update(&stop);
        assert!(!tail.running());
    }

    #[test]
    fn test_unrelated_message() {
        let mut tail = new();
        let _ = tail.start();
        let msg = Box::new(42u32) as Msg;
        let update = tail.update(&msg);
        assert!(!update.tick);
        assert!(update.cmd.is_none());
    }
}
