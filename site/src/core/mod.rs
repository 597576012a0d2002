//! Platform-neutral building blocks shared by every controller.

pub mod platform;
pub mod storage;
pub mod timing;
pub mod tracker;
pub mod view;

pub use storage::{MemoryStore, PreferenceStore};
pub use timing::{ManualScheduler, PendingTask, Scheduler, Task, TaskHandle};
pub use tracker::{EventTracker, Interaction, LogTracker, RecordingTracker, TrackedEvent};
pub use view::{ElementRef, ElementState, MemoryView, NotificationKind, ScrollBlock, View};
