//! `setTimeout`-backed [`Scheduler`].

use gloo_timers::callback::Timeout;

use super::view::DomView;
use crate::core::{PendingTask, Scheduler, Task, TaskHandle, View};

#[derive(Debug, Default, Clone, Copy)]
pub struct GlooScheduler;

struct GlooPending(Timeout);

impl PendingTask for GlooPending {
    fn cancel(self: Box<Self>) {
        let _ = self.0.cancel();
    }

    fn detach(self: Box<Self>) {
        let _ = self.0.forget();
    }
}

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        let timeout = Timeout::new(delay_ms, move || match DomView::current() {
            Ok(mut dom) => {
                let view: &mut dyn View = &mut dom;
                task(view)
            }
            Err(err) => tracing::warn!(%err, "scheduled task dropped"),
        });
        TaskHandle::new(GlooPending(timeout))
    }
}
