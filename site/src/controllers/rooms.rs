//! Expandable room detail panels, booking shortcut and thumbnail gallery.
//!
//! Open/closed state lives in the `active` class of each
//! `#room-details-<id>` panel; there is no model object behind it.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::core::{ElementRef, EventTracker, Scheduler, ScrollBlock, View};

pub const PANEL_SELECTOR: &str = ".room-details-expanded";
pub const ROOM_TYPE_ID: &str = "room-type";
pub const CONTACT_ID: &str = "contact";
const ACTIVE: &str = "active";

pub fn panel_id(room: &str) -> String {
    format!("room-details-{room}")
}

pub fn main_image_id(room: &str) -> String {
    format!("main-image-{room}")
}

pub fn thumbnails_selector(room: &str) -> String {
    format!(r#".thumbnail[data-room="{room}"]"#)
}

pub struct RoomPanels {
    scheduler: Rc<dyn Scheduler>,
    tracker: Rc<dyn EventTracker>,
    room_types: BTreeMap<String, String>,
    scroll_delay_ms: u32,
}

impl RoomPanels {
    pub fn new(
        config: &SiteConfig,
        scheduler: Rc<dyn Scheduler>,
        tracker: Rc<dyn EventTracker>,
    ) -> Self {
        Self {
            scheduler,
            tracker,
            room_types: config.room_types.clone(),
            scroll_delay_ms: config.details_scroll_delay_ms,
        }
    }

    pub fn is_open(view: &dyn View, room: &str) -> bool {
        view.has_class(&ElementRef::id(panel_id(room)), ACTIVE)
    }

    /// "View details": closes every other room's panel, then toggles this
    /// one. An opened panel is scrolled into view after a short delay so
    /// the expand transition can start first.
    pub fn toggle_details(&self, view: &mut dyn View, room: &str) -> bool {
        let target = panel_id(room);
        for panel in view.select_all(PANEL_SELECTOR) {
            if view.attr(&panel, "id").as_deref() != Some(target.as_str()) {
                view.set_class(&panel, ACTIVE, false);
            }
        }

        let panel = ElementRef::id(target);
        if !view.exists(&panel) {
            tracing::debug!(room, "no detail panel for room");
            return false;
        }

        let open = view.toggle_class(&panel, ACTIVE);
        if open {
            self.scheduler
                .schedule(
                    self.scroll_delay_ms,
                    Box::new(move |view: &mut dyn View| {
                        view.scroll_into_view(&panel, ScrollBlock::Nearest)
                    }),
                )
                .detach();
        }
        open
    }

    pub fn close_details(&self, view: &mut dyn View, room: &str) {
        view.set_class(&ElementRef::id(panel_id(room)), ACTIVE, false);
    }

    /// "Book this room": pre-select the room type in the contact form, close
    /// the panel and bring the form into view.
    pub fn book(&self, view: &mut dyn View, room: &str) {
        match self.room_types.get(room) {
            Some(kind) => view.set_value(&ElementRef::id(ROOM_TYPE_ID), kind),
            None => tracing::debug!(room, "no room type mapped; leaving selector as is"),
        }
        self.close_details(view, room);
        view.scroll_into_view(&ElementRef::id(CONTACT_ID), ScrollBlock::Start);
        self.tracker
            .track("Rooms", "Book Now", &format!("Room {room}"));
    }

    /// Thumbnail click: show `src` as the room's main image and make the
    /// thumbnail with `data-image == image` the only active one.
    pub fn select_thumbnail(&self, view: &mut dyn View, room: &str, image: &str, src: &str, alt: &str) {
        let main = ElementRef::id(main_image_id(room));
        view.set_attr(&main, "src", src);
        view.set_attr(&main, "alt", alt);

        for thumb in view.select_all(&thumbnails_selector(room)) {
            let on = view.attr(&thumb, "data-image").as_deref() == Some(image);
            view.set_class(&thumb, ACTIVE, on);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::{ElementState, MemoryView, ScrollRecord};
    use crate::core::{ManualScheduler, RecordingTracker, TrackedEvent};

    struct Harness {
        view: MemoryView,
        scheduler: ManualScheduler,
        tracker: Rc<RecordingTracker>,
        rooms: RoomPanels,
    }

    fn harness() -> Harness {
        let mut view = MemoryView::new();
        for room in ["1", "2", "3", "4"] {
            let id = panel_id(room);
            view.insert_id(&id, ElementState::default().with_attr("id", &id));
            view.alias(PANEL_SELECTOR, &id);
            view.insert_id(&main_image_id(room), ElementState::default());
            for image in ["1", "2", "3"] {
                let thumb = ElementState::default()
                    .with_attr("data-room", room)
                    .with_attr("data-image", image);
                let thumb = if image == "1" { thumb.with_class(ACTIVE) } else { thumb };
                view.push(&thumbnails_selector(room), thumb);
            }
        }
        view.insert_id(ROOM_TYPE_ID, ElementState::default());
        view.insert_id(CONTACT_ID, ElementState::default());

        let scheduler = ManualScheduler::new();
        let tracker = Rc::new(RecordingTracker::new());
        let rooms = RoomPanels::new(
            &SiteConfig::default(),
            Rc::new(scheduler.clone()),
            tracker.clone(),
        );
        Harness {
            view,
            scheduler,
            tracker,
            rooms,
        }
    }

    #[test]
    fn opening_second_panel_closes_first() {
        let mut h = harness();
        assert!(h.rooms.toggle_details(&mut h.view, "1"));
        assert!(h.rooms.toggle_details(&mut h.view, "2"));
        assert!(!RoomPanels::is_open(&h.view, "1"));
        assert!(RoomPanels::is_open(&h.view, "2"));
    }

    #[test]
    fn same_panel_twice_toggles_closed() {
        let mut h = harness();
        assert!(h.rooms.toggle_details(&mut h.view, "3"));
        assert!(!h.rooms.toggle_details(&mut h.view, "3"));
        assert!(!RoomPanels::is_open(&h.view, "3"));
    }

    #[test]
    fn opened_panel_scrolls_after_delay() {
        let mut h = harness();
        h.rooms.toggle_details(&mut h.view, "1");
        h.scheduler.advance(299, &mut h.view);
        assert!(h.view.scrolls.is_empty());
        h.scheduler.advance(1, &mut h.view);
        assert_eq!(
            h.view.scrolls,
            vec![ScrollRecord::IntoView(ElementRef::id("room-details-1"), ScrollBlock::Nearest)]
        );

        // Closing schedules nothing.
        h.rooms.toggle_details(&mut h.view, "1");
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn unknown_room_is_a_no_op() {
        let mut h = harness();
        h.rooms.toggle_details(&mut h.view, "1");
        assert!(!h.rooms.toggle_details(&mut h.view, "9"));
        // Other panels still close, as with any view-details click.
        assert!(!RoomPanels::is_open(&h.view, "1"));
    }

    #[test]
    fn booking_prefills_closes_and_scrolls() {
        let mut h = harness();
        h.rooms.toggle_details(&mut h.view, "3");
        h.rooms.book(&mut h.view, "3");

        assert!(!RoomPanels::is_open(&h.view, "3"));
        assert_eq!(
            h.view.get(&ElementRef::id(ROOM_TYPE_ID)).and_then(|s| s.value.clone()),
            Some("presidential".to_string())
        );
        assert!(h.view.scrolls.contains(&ScrollRecord::IntoView(
            ElementRef::id(CONTACT_ID),
            ScrollBlock::Start
        )));
        assert_eq!(h.tracker.events(), vec![TrackedEvent::new("Rooms", "Book Now", "Room 3")]);
    }

    #[test]
    fn booking_unmapped_room_leaves_selector() {
        let mut h = harness();
        h.rooms.book(&mut h.view, "7");
        assert_eq!(h.view.get(&ElementRef::id(ROOM_TYPE_ID)).and_then(|s| s.value.clone()), None);
    }

    #[test]
    fn thumbnail_swaps_main_image_and_active_state() {
        let mut h = harness();
        h.rooms.select_thumbnail(&mut h.view, "2", "3", "img/r2-3.jpg", "Bathroom");

        let main = h.view.get(&ElementRef::id(main_image_id("2"))).unwrap();
        assert_eq!(main.attrs.get("src").map(String::as_str), Some("img/r2-3.jpg"));
        assert_eq!(main.attrs.get("alt").map(String::as_str), Some("Bathroom"));

        let active: Vec<_> = h
            .view
            .select_all(&thumbnails_selector("2"))
            .into_iter()
            .filter(|t| h.view.has_class(t, ACTIVE))
            .filter_map(|t| h.view.attr(&t, "data-image"))
            .collect();
        assert_eq!(active, vec!["3".to_string()]);

        // Other rooms keep their own active thumbnail.
        assert!(h.view.has_class(&ElementRef::nth(thumbnails_selector("1"), 0), ACTIVE));
    }
}
