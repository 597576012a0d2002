//! Transient notifications with cancellable auto-dismiss.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{NotificationKind, Scheduler, TaskHandle, View};

#[derive(Debug, Default)]
struct NotifierState {
    generation: u64,
    visible: bool,
    pending: Option<TaskHandle>,
}

/// Owner of the single on-screen notification.
///
/// Showing a notification cancels the previous dismissal task and removes
/// the previous node before inserting the new one.
pub struct Notifier {
    scheduler: Rc<dyn Scheduler>,
    dismiss_after_ms: u32,
    state: Rc<RefCell<NotifierState>>,
}

impl Notifier {
    pub fn new(scheduler: Rc<dyn Scheduler>, dismiss_after_ms: u32) -> Self {
        Self {
            scheduler,
            dismiss_after_ms,
            state: Rc::default(),
        }
    }

    pub fn show(&self, view: &mut dyn View, message: &str, kind: NotificationKind) {
        let generation = {
            let mut state = self.state.borrow_mut();
            if let Some(previous) = state.pending.take() {
                previous.cancel();
            }
            state.generation += 1;
            state.visible = true;
            state.generation
        };

        while view.remove_notification() {}
        view.show_notification(message, kind);
        tracing::debug!(?kind, generation, "notification shown");

        let weak = Rc::downgrade(&self.state);
        let handle = self.scheduler.schedule(
            self.dismiss_after_ms,
            Box::new(move |view: &mut dyn View| {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let mut state = shared.borrow_mut();
                if state.generation == generation && state.visible {
                    state.visible = false;
                    state.pending = None;
                    view.remove_notification();
                }
            }),
        );
        self.state.borrow_mut().pending = Some(handle);
    }

    /// Close button: remove now and drop the pending timer, so a manual
    /// close leaves nothing scheduled.
    pub fn dismiss(&self, view: &mut dyn View) {
        let mut state = self.state.borrow_mut();
        if let Some(pending) = state.pending.take() {
            pending.cancel();
        }
        if state.visible {
            state.visible = false;
            view.remove_notification();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }
}
