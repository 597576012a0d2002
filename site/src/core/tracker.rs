//! Fire-and-forget analytics boundary.
//!
//! Calls are never awaited and never fail from the caller's perspective. The
//! diagnostic log line is emitted whether or not a collector is present.

use std::cell::RefCell;

pub trait EventTracker {
    fn track(&self, category: &str, action: &str, label: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl TrackedEvent {
    pub fn new(category: &str, action: &str, label: &str) -> Self {
        Self {
            category: category.to_string(),
            action: action.to_string(),
            label: label.to_string(),
        }
    }
}

fn log_event(category: &str, action: &str, label: &str) {
    tracing::info!(category, action, label, "event tracked");
}

/// Tracker with no collector behind it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracker;

impl EventTracker for LogTracker {
    fn track(&self, category: &str, action: &str, label: &str) {
        log_event(category, action, label);
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    events: RefCell<Vec<TrackedEvent>>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TrackedEvent> {
        self.events.borrow().clone()
    }
}

impl EventTracker for RecordingTracker {
    fn track(&self, category: &str, action: &str, label: &str) {
        log_event(category, action, label);
        self.events
            .borrow_mut()
            .push(TrackedEvent::new(category, action, label));
    }
}

/// Forwards to the page's global `gtag` function when one is installed.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GtagTracker;

#[cfg(target_arch = "wasm32")]
impl EventTracker for GtagTracker {
    fn track(&self, category: &str, action: &str, label: &str) {
        use js_sys::{Function, Object, Reflect};
        use wasm_bindgen::{JsCast, JsValue};

        log_event(category, action, label);

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(gtag) = Reflect::get(&window, &JsValue::from_str("gtag"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
        else {
            return;
        };

        let params = Object::new();
        let _ = Reflect::set(&params, &"event_category".into(), &category.into());
        let _ = Reflect::set(&params, &"event_label".into(), &label.into());
        if let Err(err) = gtag.call3(&JsValue::NULL, &"event".into(), &action.into(), &params) {
            tracing::warn!(?err, "gtag call failed");
        }
    }
}

/// Clicks tracked at document level, independent of the surface controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    GalleryImage { src: String },
    PrimaryButton { text: String },
    ViewDetails { room: String },
}

impl Interaction {
    pub fn event(&self) -> TrackedEvent {
        match self {
            Self::GalleryImage { src } => TrackedEvent::new("Gallery", "View Image", src),
            Self::PrimaryButton { text } => TrackedEvent::new("CTA", "Button Click", text.trim()),
            Self::ViewDetails { room } => {
                TrackedEvent::new("Rooms", "View Details", &format!("Room {room}"))
            }
        }
    }

    pub fn track(&self, tracker: &dyn EventTracker) {
        let event = self.event();
        tracker.track(&event.category, &event.action, &event.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactions_map_to_events() {
        let tracker = RecordingTracker::new();
        Interaction::PrimaryButton {
            text: "  Book Now \n".into(),
        }
        .track(&tracker);
        Interaction::ViewDetails { room: "2".into() }.track(&tracker);
        Interaction::GalleryImage {
            src: "pool.jpg".into(),
        }
        .track(&tracker);

        assert_eq!(
            tracker.events(),
            vec![
                TrackedEvent::new("CTA", "Button Click", "Book Now"),
                TrackedEvent::new("Rooms", "View Details", "Room 2"),
                TrackedEvent::new("Gallery", "View Image", "pool.jpg"),
            ]
        );
    }
}
