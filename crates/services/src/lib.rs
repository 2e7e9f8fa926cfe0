#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod overview;
pub mod sessions;

pub use sessions as session;

pub use app_services::AppServices;
pub use error::SessionError;
pub use overview::{LanguageOverview, LanguageStatus};
pub use sessions::{
    Action, DoneReason, ManualScheduler, Notice, Scheduler, SessionController, SessionState,
    TimerHandle, TimerKind, TimerTicket,
};
