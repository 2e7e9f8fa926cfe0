mod controller;
mod notice;
mod state;
mod timer;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::SessionController;
pub use notice::Notice;
pub use state::{Action, DoneReason, SessionState};
pub use timer::{ManualScheduler, PendingTimer, Scheduler, TimerHandle, TimerKind, TimerTicket};
