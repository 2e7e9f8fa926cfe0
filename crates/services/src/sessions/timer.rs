use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use flash_core::flip::{AUTO_FLIP_DELAY, FLIP_FRAME_INTERVAL, NEXT_CARD_DELAY};

/// Opaque id of a scheduled wake-up, minted by the [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Turn a fresh card over after it has been read.
    AutoFlip,
    /// Draw the next animation frame.
    FlipFrame,
    /// Move on after a card was flipped back.
    NextCard,
}

impl TimerKind {
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            TimerKind::AutoFlip => AUTO_FLIP_DELAY,
            TimerKind::FlipFrame => FLIP_FRAME_INTERVAL,
            TimerKind::NextCard => NEXT_CARD_DELAY,
        }
    }
}

/// What a wake-up delivers back to the controller.
///
/// `epoch` pins the ticket to the transition that scheduled it; the controller
/// ignores tickets from earlier epochs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    epoch: u64,
    kind: TimerKind,
}

impl TimerTicket {
    #[must_use]
    pub const fn new(epoch: u64, kind: TimerKind) -> Self {
        Self { epoch, kind }
    }

    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub const fn kind(&self) -> TimerKind {
        self.kind
    }
}

/// The host's timer primitive.
///
/// Implementations arrange for `ticket` to be handed to
/// [`crate::SessionController::on_timer`] once `delay` has passed, unless the
/// handle is cancelled first.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, ticket: TimerTicket) -> TimerHandle;

    /// Cancel a wake-up. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// A wake-up recorded by [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub handle: TimerHandle,
    pub delay: Duration,
    pub ticket: TimerTicket,
}

#[derive(Debug, Default)]
struct ManualQueue {
    next_id: u64,
    pending: Vec<PendingTimer>,
    cancelled: usize,
}

/// Scheduler that never fires on its own; tests pop wake-ups explicitly.
///
/// Clones share one queue, so a test can keep a clone while the controller owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> Vec<PendingTimer> {
        self.queue.borrow().pending.clone()
    }

    /// Remove and return the oldest pending wake-up.
    pub fn pop(&self) -> Option<PendingTimer> {
        let mut queue = self.queue.borrow_mut();
        if queue.pending.is_empty() {
            None
        } else {
            Some(queue.pending.remove(0))
        }
    }

    #[must_use]
    pub fn cancelled(&self) -> usize {
        self.queue.borrow().cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, ticket: TimerTicket) -> TimerHandle {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        let handle = TimerHandle::new(queue.next_id);
        queue.pending.push(PendingTimer {
            handle,
            delay,
            ticket,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.pending.len();
        queue.pending.retain(|timer| timer.handle != handle);
        if queue.pending.len() < before {
            queue.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_queues_and_cancels() {
        let observer = ManualScheduler::new();
        let mut scheduler = observer.clone();

        let first = scheduler.schedule(
            TimerKind::AutoFlip.delay(),
            TimerTicket::new(1, TimerKind::AutoFlip),
        );
        let second = scheduler.schedule(
            TimerKind::FlipFrame.delay(),
            TimerTicket::new(2, TimerKind::FlipFrame),
        );
        assert_ne!(first, second);
        assert_eq!(observer.pending().len(), 2);

        scheduler.cancel(first);
        scheduler.cancel(first);
        assert_eq!(observer.cancelled(), 1);

        let popped = observer.pop().unwrap();
        assert_eq!(popped.handle, second);
        assert_eq!(popped.delay, Duration::from_millis(30));
        assert!(observer.pop().is_none());
    }
}
