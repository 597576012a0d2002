//! Deferred execution for controllers.
//!
//! Everything runs on the page's single event loop; a scheduled task is a
//! callback that receives the view when its delay elapses. Handles are
//! fire-and-forget unless explicitly cancelled.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::view::View;

pub type Task = Box<dyn FnOnce(&mut dyn View)>;

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle;
}

/// Backend-specific pending timer.
pub trait PendingTask {
    fn cancel(self: Box<Self>);
    /// Let the task run without keeping a handle around.
    fn detach(self: Box<Self>);
}

/// Handle to a scheduled task. Dropping it detaches the task.
pub struct TaskHandle {
    inner: Option<Box<dyn PendingTask>>,
}

impl TaskHandle {
    pub fn new(pending: impl PendingTask + 'static) -> Self {
        Self {
            inner: Some(Box::new(pending)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(pending) = self.inner.take() {
            pending.cancel();
        }
    }

    pub fn detach(mut self) {
        if let Some(pending) = self.inner.take() {
            pending.detach();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(pending) = self.inner.take() {
            pending.detach();
        }
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("pending", &self.inner.is_some())
            .finish()
    }
}

/// Virtual-clock scheduler: tasks run only when [`ManualScheduler::advance`]
/// moves time past their deadline.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

#[derive(Default)]
struct Queue {
    now: u64,
    seq: u64,
    entries: Vec<Entry>,
}

struct Entry {
    due: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Task,
}

struct ManualPending {
    cancelled: Rc<Cell<bool>>,
}

impl PendingTask for ManualPending {
    fn cancel(self: Box<Self>) {
        self.cancelled.set(true);
    }

    fn detach(self: Box<Self>) {}
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.queue.borrow().now
    }

    /// Tasks still waiting to run (cancelled ones excluded).
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .entries
            .iter()
            .filter(|e| !e.cancelled.get())
            .count()
    }

    /// Moves the clock forward, running due tasks in deadline order. Tasks
    /// scheduled by a running task are honoured if they fall inside the window.
    pub fn advance(&self, ms: u64, view: &mut dyn View) {
        let target = self.queue.borrow().now + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(_, e)| (e.due, e.seq))
                    .map(|(idx, _)| idx);
                due.map(|idx| {
                    let entry = queue.entries.remove(idx);
                    queue.now = entry.due;
                    entry
                })
            };
            match next {
                Some(entry) if !entry.cancelled.get() => (entry.task)(&mut *view),
                Some(_) => {}
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        let cancelled = Rc::new(Cell::new(false));
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + u64::from(delay_ms);
        let seq = queue.seq;
        queue.seq += 1;
        queue.entries.push(Entry {
            due,
            seq,
            cancelled: cancelled.clone(),
            task,
        });
        TaskHandle::new(ManualPending { cancelled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::{ElementRef, ElementState, MemoryView};

    fn counter_view() -> MemoryView {
        let mut view = MemoryView::new();
        view.insert_id("log", ElementState::default());
        view
    }

    fn append(tag: &'static str) -> Task {
        Box::new(move |view: &mut dyn View| {
            let el = ElementRef::id("log");
            let text = view.text(&el).unwrap_or_default();
            view.set_text(&el, &format!("{text}{tag}"));
        })
    }

    #[test]
    fn runs_tasks_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let mut view = counter_view();
        scheduler.schedule(300, append("b")).detach();
        scheduler.schedule(100, append("a")).detach();
        scheduler.schedule(900, append("c")).detach();

        scheduler.advance(500, &mut view);
        assert_eq!(view.text(&ElementRef::id("log")).as_deref(), Some("ab"));
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.now(), 500);

        scheduler.advance(400, &mut view);
        assert_eq!(view.text(&ElementRef::id("log")).as_deref(), Some("abc"));
    }

    #[test]
    fn cancelled_task_never_runs() {
        let scheduler = ManualScheduler::new();
        let mut view = counter_view();
        let handle = scheduler.schedule(10, append("x"));
        handle.cancel();
        scheduler.advance(100, &mut view);
        assert_eq!(view.text(&ElementRef::id("log")).as_deref(), Some(""));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropped_handle_still_fires() {
        let scheduler = ManualScheduler::new();
        let mut view = counter_view();
        drop(scheduler.schedule(10, append("x")));
        scheduler.advance(10, &mut view);
        assert_eq!(view.text(&ElementRef::id("log")).as_deref(), Some("x"));
    }
}
