// src/domain/clock.rs
//! Countdown that gates bidding.
//!
//! The clock runs its ticks on a background tokio task. The task never sees
//! the bidding model or the display: it only publishes [`ClockNotice`]s over a
//! channel whose receiver lives on the foreground. The phase is the one value
//! both sides touch, so it is kept in an atomic.
//!
//! Every notice carries the id of the clock that sent it, so a receiver shared
//! by successive clocks can ignore late notices from a replaced clock.
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

pub const AUCTION_DURATION_SECONDS: u32 = 60;
pub const TICK: Duration = Duration::from_secs(1);

pub type ClockId = u64;

static NEXT_CLOCK_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Phase {
    Idle = 0,
    Running = 1,
    Closed = 2,
}

impl Phase {
    fn from_u8(raw: u8) -> Phase {
        match raw {
            0 => Phase::Idle,
            1 => Phase::Running,
            _ => Phase::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    TimeUpdated { remaining_seconds: u32 },
    /// Sent once, after the last tick or after a stop.
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockNotice {
    pub clock: ClockId,
    pub event: ClockEvent,
}

pub type ClockSender = mpsc::UnboundedSender<ClockNotice>;
pub type ClockEvents = mpsc::UnboundedReceiver<ClockNotice>;

pub fn channel() -> (ClockSender, ClockEvents) {
    mpsc::unbounded_channel()
}

#[derive(Debug)]
pub struct AuctionClock {
    id: ClockId,
    phase: Arc<AtomicU8>,
    remaining: Arc<AtomicU32>,
    duration_seconds: u32,
    tick: Duration,
    task: Option<JoinHandle<()>>,
}

impl Default for AuctionClock {
    fn default() -> Self {
        AuctionClock::new(AUCTION_DURATION_SECONDS, TICK)
    }
}

impl AuctionClock {
    pub fn new(duration_seconds: u32, tick: Duration) -> Self {
        AuctionClock {
            id: NEXT_CLOCK_ID.fetch_add(1, Ordering::Relaxed),
            phase: Arc::new(AtomicU8::new(Phase::Idle as u8)),
            remaining: Arc::new(AtomicU32::new(duration_seconds)),
            duration_seconds,
            tick,
            task: None,
        }
    }

    pub fn id(&self) -> ClockId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::SeqCst))
    }

    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining.load(Ordering::SeqCst)
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Starts ticking. Only an idle clock starts; otherwise this is a no-op
    /// returning `false`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, events: ClockSender) -> bool {
        if self
            .phase
            .compare_exchange(
                Phase::Idle as u8,
                Phase::Running as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_err()
        {
            debug!("start ignored, clock is {:?}", self.phase());
            return false;
        }

        info!("auction clock started for {} seconds", self.duration_seconds);
        self.remaining.store(self.duration_seconds, Ordering::SeqCst);
        self.task = Some(tokio::spawn(run_ticks(
            self.id,
            self.phase.clone(),
            self.remaining.clone(),
            self.tick,
            events,
        )));
        true
    }

    /// Forces the clock out of `Running`. The tick task notices on its next
    /// wake and sends the final [`ClockEvent::Ended`].
    pub fn stop(&self) -> bool {
        let stopped = self
            .phase
            .compare_exchange(
                Phase::Running as u8,
                Phase::Closed as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok();
        if stopped {
            info!("auction clock stopped with {} seconds left", self.remaining_seconds());
        }
        stopped
    }

    /// Interrupts the tick task without announcing the end.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        debug!("auction clock cancelled while {:?}", self.phase());
        self.phase.store(Phase::Closed as u8, Ordering::SeqCst);
    }
}

impl Drop for AuctionClock {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_ticks(
    clock: ClockId,
    phase: Arc<AtomicU8>,
    remaining: Arc<AtomicU32>,
    tick: Duration,
    events: ClockSender,
) {
    let mut ticks = time::interval_at(Instant::now() + tick, tick);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while remaining.load(Ordering::SeqCst) > 0 {
        ticks.tick().await;

        if phase.load(Ordering::SeqCst) != Phase::Running as u8 {
            break;
        }

        // Only this task writes `remaining` while running.
        let left = remaining.load(Ordering::SeqCst) - 1;
        remaining.store(left, Ordering::SeqCst);
        debug!("time left: {} seconds", left);

        let notice = ClockNotice {
            clock,
            event: ClockEvent::TimeUpdated { remaining_seconds: left },
        };
        if events.send(notice).is_err() {
            // Nobody is listening any more: treat as an interruption.
            phase.store(Phase::Closed as u8, Ordering::SeqCst);
            return;
        }
    }

    phase.store(Phase::Closed as u8, Ordering::SeqCst);
    info!("auction clock ended");
    // Ignoring the error: a closed receiver means the foreground is gone.
    let _ = events.send(ClockNotice {
        clock,
        event: ClockEvent::Ended,
    });
}
