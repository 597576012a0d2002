//! One-shot scroll reveal animations and lazy image activation.

use std::collections::HashSet;

use crate::config::SiteConfig;
use crate::core::{ElementRef, View};

pub const FADE_IN: &str = "fade-in";
pub const VISIBLE: &str = "visible";
pub const LAZY_IMAGES: &str = r#"img[loading="lazy"]"#;

/// Visibility observer configuration: an element counts as visible once
/// `ratio` of it lies inside the viewport shrunk by `bottom_margin_px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealThreshold {
    pub ratio: f64,
    pub bottom_margin_px: f64,
}

impl Default for RevealThreshold {
    fn default() -> Self {
        Self {
            ratio: 0.1,
            bottom_margin_px: 50.0,
        }
    }
}

impl RevealThreshold {
    /// CSS margin string for `IntersectionObserverInit.rootMargin`.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

    /// `top` is relative to the viewport, as from `getBoundingClientRect`.
    pub fn crosses(&self, top: f64, height: f64, viewport_height: f64) -> bool {
        if height <= 0.0 {
            return false;
        }
        let bottom = viewport_height - self.bottom_margin_px;
        let shown = (top + height).min(bottom) - top.max(0.0);
        shown > 0.0 && shown / height >= self.ratio
    }
}

#[derive(Debug)]
pub struct RevealController {
    selector: String,
    threshold: RevealThreshold,
    revealed: HashSet<ElementRef>,
}

impl RevealController {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            selector: config.reveal_selector.clone(),
            threshold: RevealThreshold::default(),
            revealed: HashSet::new(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn threshold(&self) -> RevealThreshold {
        self.threshold
    }

    /// Marks every animated element with `fade-in` and returns them for
    /// observation.
    pub fn register(&self, view: &mut dyn View) -> Vec<ElementRef> {
        let targets = view.select_all(&self.selector);
        for el in &targets {
            view.set_class(el, FADE_IN, true);
        }
        targets
    }

    /// Adds `visible` the first time `el` enters the viewport. Returns
    /// whether this call revealed it.
    pub fn on_intersect(&mut self, view: &mut dyn View, el: &ElementRef) -> bool {
        if !self.revealed.insert(el.clone()) {
            return false;
        }
        view.set_class(el, VISIBLE, true);
        true
    }

    pub fn is_revealed(&self, el: &ElementRef) -> bool {
        self.revealed.contains(el)
    }
}

/// `img[loading="lazy"]` activation.
#[derive(Debug, Default, Clone, Copy)]
pub struct LazyImages;

impl LazyImages {
    /// Re-assigns `src` and drops the `lazy` class. The image never needs
    /// observing again, so this always returns `true`.
    pub fn on_intersect(&self, view: &mut dyn View, img: &ElementRef) -> bool {
        if let Some(src) = view.attr(img, "src") {
            view.set_attr(img, "src", &src);
        }
        view.set_class(img, "lazy", false);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::{ElementState, MemoryView};

    #[test]
    fn register_marks_and_reveal_is_one_shot() {
        let config = SiteConfig::default();
        let mut view = MemoryView::new();
        let card = view.push(&config.reveal_selector, ElementState::default());
        let mut reveal = RevealController::new(&config);

        assert_eq!(reveal.register(&mut view), vec![card.clone()]);
        assert!(view.has_class(&card, FADE_IN));
        assert!(!view.has_class(&card, VISIBLE));

        assert!(reveal.on_intersect(&mut view, &card));
        assert!(!reveal.on_intersect(&mut view, &card));
        assert!(view.has_class(&card, VISIBLE));
        assert!(reveal.is_revealed(&card));
    }

    #[test]
    fn threshold_needs_ten_percent_above_margin() {
        let t = RevealThreshold::default();
        assert_eq!(t.root_margin(), "0px 0px -50px 0px");
        // Viewport 800 tall, effective bottom at 750.
        assert!(!t.crosses(745.0, 100.0, 800.0));
        assert!(t.crosses(740.0, 100.0, 800.0));
        assert!(t.crosses(-50.0, 100.0, 800.0));
        assert!(!t.crosses(-95.0, 100.0, 800.0));
        assert!(!t.crosses(900.0, 100.0, 800.0));
        assert!(!t.crosses(10.0, 0.0, 800.0));
    }

    #[test]
    fn lazy_image_is_activated() {
        let mut view = MemoryView::new();
        let img = view.push(
            LAZY_IMAGES,
            ElementState::default()
                .with_class("lazy")
                .with_attr("src", "pool.jpg"),
        );
        assert!(LazyImages.on_intersect(&mut view, &img));
        assert!(!view.has_class(&img, "lazy"));
        assert_eq!(view.attr(&img, "src").as_deref(), Some("pool.jpg"));
    }
}
