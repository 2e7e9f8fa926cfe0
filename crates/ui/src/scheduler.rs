//! Timer primitive for sessions running inside the dioxus runtime.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use services::{Scheduler, SessionController, TimerHandle, TimerTicket};

/// Runs each wake-up as a dioxus task that sleeps and then hands the ticket
/// to the controller stored in `session`.
///
/// Tasks belong to the scope that created the scheduler, so they die with the
/// card view.
pub struct TaskScheduler {
    session: Signal<Option<SessionController>>,
    next_id: u64,
    tasks: Rc<RefCell<HashMap<TimerHandle, Task>>>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new(session: Signal<Option<SessionController>>) -> Self {
        Self {
            session,
            next_id: 0,
            tasks: Rc::default(),
        }
    }
}

impl Scheduler for TaskScheduler {
    fn schedule(&mut self, delay: Duration, ticket: TimerTicket) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        let mut session = self.session;
        let tasks = Rc::clone(&self.tasks);

        let task = spawn(async move {
            tokio::time::sleep(delay).await;
            // Finished tasks must not be cancelled later; their ids get reused.
            tasks.borrow_mut().remove(&handle);
            if let Some(controller) = session.write().as_mut() {
                controller.on_timer(ticket);
            }
        });
        self.tasks.borrow_mut().insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let task = self.tasks.borrow_mut().remove(&handle);
        if let Some(task) = task {
            task.cancel();
        }
    }
}
