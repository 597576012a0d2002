//! Floating contact button: hides while scrolling down, returns on the way
//! up or near the top of the page.

use crate::config::SiteConfig;
use crate::core::{ElementRef, EventTracker, View};

pub const FLOAT_ID: &str = "whatsapp-float";
pub const LINK_SELECTOR: &str = ".whatsapp-link";
pub const TOOLTIP_SELECTOR: &str = ".whatsapp-tooltip";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetVisibility {
    Shown,
    Hidden,
}

#[derive(Debug)]
pub struct FloatingWidget {
    threshold_px: f64,
    last_offset: f64,
    visible: bool,
}

impl FloatingWidget {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            threshold_px: config.widget_threshold_px,
            last_offset: 0.0,
            visible: true,
        }
    }

    pub fn visibility(&self) -> WidgetVisibility {
        if self.visible {
            WidgetVisibility::Shown
        } else {
            WidgetVisibility::Hidden
        }
    }

    /// Force the shown state regardless of stylesheet defaults.
    pub fn init(&self, view: &mut dyn View) {
        let el = ElementRef::id(FLOAT_ID);
        if !view.exists(&el) {
            tracing::warn!("floating widget element not found");
            return;
        }
        view.set_style(&el, "display", "block");
        view.set_style(&el, "visibility", "visible");
        show(view, &el);
    }

    pub fn on_scroll(&mut self, view: &mut dyn View, offset: f64) -> WidgetVisibility {
        let el = ElementRef::id(FLOAT_ID);
        if offset > self.last_offset && offset > self.threshold_px {
            if self.visible {
                view.set_style(&el, "transform", "translateY(100px)");
                view.set_style(&el, "opacity", "0");
                self.visible = false;
            }
        } else if (offset < self.last_offset || offset < self.threshold_px) && !self.visible {
            show(view, &el);
            self.visible = true;
        }
        self.last_offset = offset;
        self.visibility()
    }

    /// Hover enlarge; ignored while hidden.
    pub fn on_hover(&self, view: &mut dyn View, entering: bool) {
        if !self.visible {
            return;
        }
        let transform = if entering {
            "translateY(0) scale(1.1)"
        } else {
            "translateY(0) scale(1)"
        };
        view.set_style(&ElementRef::id(FLOAT_ID), "transform", transform);
    }

    pub fn on_click(&self, tracker: &dyn EventTracker) {
        tracker.track("WhatsApp", "Button Click", "Floating Button");
    }
}

fn show(view: &mut dyn View, el: &ElementRef) {
    view.set_style(el, "transform", "translateY(0)");
    view.set_style(el, "opacity", "1");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::{ElementState, MemoryView};
    use crate::core::{RecordingTracker, TrackedEvent};
    use super::WidgetVisibility::{Hidden, Shown};

    fn setup() -> (MemoryView, FloatingWidget) {
        let mut view = MemoryView::new();
        view.insert_id(FLOAT_ID, ElementState::default());
        let widget = FloatingWidget::new(&SiteConfig::default());
        widget.init(&mut view);
        (view, widget)
    }

    fn style(view: &MemoryView, prop: &str) -> Option<String> {
        view.get(&ElementRef::id(FLOAT_ID))
            .and_then(|s| s.styles.get(prop).cloned())
    }

    #[test]
    fn hides_on_scroll_down_and_returns_on_scroll_up() {
        let (mut view, mut widget) = setup();
        let seen: Vec<_> = [0.0, 50.0, 250.0, 400.0, 150.0]
            .into_iter()
            .map(|y| widget.on_scroll(&mut view, y))
            .collect();
        assert_eq!(seen, vec![Shown, Shown, Hidden, Hidden, Shown]);
    }

    #[test]
    fn near_top_always_shows() {
        let (mut view, mut widget) = setup();
        widget.on_scroll(&mut view, 500.0);
        assert_eq!(style(&view, "opacity").as_deref(), Some("0"));
        // Smaller offset than last, and under the threshold.
        assert_eq!(widget.on_scroll(&mut view, 199.0), Shown);
        // Moving down but still under the threshold.
        assert_eq!(widget.on_scroll(&mut view, 199.5), Shown);
        assert_eq!(style(&view, "transform").as_deref(), Some("translateY(0)"));
    }

    #[test]
    fn hover_only_applies_while_shown() {
        let (mut view, mut widget) = setup();
        widget.on_hover(&mut view, true);
        assert_eq!(
            style(&view, "transform").as_deref(),
            Some("translateY(0) scale(1.1)")
        );

        widget.on_scroll(&mut view, 300.0);
        widget.on_hover(&mut view, false);
        assert_eq!(style(&view, "transform").as_deref(), Some("translateY(100px)"));
    }

    #[test]
    fn click_is_tracked() {
        let (_, widget) = setup();
        let tracker = RecordingTracker::new();
        widget.on_click(&tracker);
        assert_eq!(
            tracker.events(),
            vec![TrackedEvent::new("WhatsApp", "Button Click", "Floating Button")]
        );
    }
}
