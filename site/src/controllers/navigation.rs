//! Navbar state, the three menu surfaces, and in-page anchor scrolling.

use crate::config::SiteConfig;
use crate::core::{ElementRef, View};

const ACTIVE: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    /// Desktop language dropdown.
    Language,
    MobileLanguage,
    /// Hamburger menu.
    Mobile,
}

impl Menu {
    pub const ALL: [Menu; 3] = [Self::Language, Self::MobileLanguage, Self::Mobile];

    pub fn trigger_id(self) -> &'static str {
        match self {
            Self::Language => "language-btn",
            Self::MobileLanguage => "mobile-language-btn",
            Self::Mobile => "hamburger",
        }
    }

    pub fn surface_id(self) -> &'static str {
        match self {
            Self::Language => "language-menu",
            Self::MobileLanguage => "mobile-language-menu",
            Self::Mobile => "mobile-menu",
        }
    }
}

/// Open/closed state for every menu surface. Holding a single
/// `Option<Menu>` keeps at most one surface open.
#[derive(Debug, Default)]
pub struct MenuController {
    open: Option<Menu>,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_menu(&self) -> Option<Menu> {
        self.open
    }

    pub fn is_open(&self, menu: Menu) -> bool {
        self.open == Some(menu)
    }

    /// Trigger click. Returns whether `menu` ends up open.
    pub fn toggle(&mut self, view: &mut dyn View, menu: Menu) -> bool {
        if self.is_open(menu) {
            self.close(view, menu);
            false
        } else {
            self.open(view, menu);
            true
        }
    }

    pub fn open(&mut self, view: &mut dyn View, menu: Menu) {
        for other in Menu::ALL.into_iter().filter(|m| *m != menu) {
            render(view, other, false);
        }
        self.open = Some(menu);
        render(view, menu, true);
    }

    pub fn close(&mut self, view: &mut dyn View, menu: Menu) {
        if self.open == Some(menu) {
            self.open = None;
        }
        render(view, menu, false);
    }

    pub fn close_all(&mut self, view: &mut dyn View) {
        for menu in Menu::ALL {
            self.close(view, menu);
        }
    }

    /// Document click. `inside(menu)` reports whether the click landed in
    /// that menu's trigger or surface.
    pub fn on_document_click(&mut self, view: &mut dyn View, inside: impl Fn(Menu) -> bool) {
        if let Some(menu) = self.open {
            if !inside(menu) {
                self.close(view, menu);
            }
        }
    }

    pub fn on_nav_link_click(&mut self, view: &mut dyn View) {
        self.close(view, Menu::Mobile);
    }
}

fn render(view: &mut dyn View, menu: Menu, open: bool) {
    view.set_class(&ElementRef::id(menu.surface_id()), ACTIVE, open);
    if menu == Menu::Mobile {
        view.set_class(&ElementRef::id(menu.trigger_id()), ACTIVE, open);
        view.set_class(&ElementRef::Body, "menu-open", open);
    }
}

/// Condensed navbar and active-section highlight.
#[derive(Debug)]
pub struct NavbarController {
    condense_px: f64,
    lookahead_px: f64,
    condensed: bool,
    active: Option<String>,
}

impl NavbarController {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            condense_px: config.navbar_condense_px,
            lookahead_px: config.section_lookahead_px,
            condensed: false,
            active: None,
        }
    }

    pub fn is_condensed(&self) -> bool {
        self.condensed
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn on_scroll(&mut self, view: &mut dyn View, scroll_y: f64) {
        self.condensed = scroll_y > self.condense_px;
        view.set_class(&ElementRef::id("navbar"), "scrolled", self.condensed);

        self.active = current_section(view, scroll_y, self.lookahead_px);
        let target = self.active.as_ref().map(|id| format!("#{id}"));
        for link in view.select_all(".nav-link") {
            let on = target.is_some() && view.attr(&link, "href") == target;
            view.set_class(&link, ACTIVE, on);
        }
    }
}

/// Id of the last `section` whose top, less the lookahead, is at or above
/// `scroll_y`. A matching section without an id clears the highlight.
fn current_section(view: &dyn View, scroll_y: f64, lookahead_px: f64) -> Option<String> {
    let mut current = None;
    for section in view.select_all("section") {
        let Some(top) = view.offset_top(&section) else {
            continue;
        };
        if scroll_y >= top - lookahead_px {
            current = view.attr(&section, "id");
        }
    }
    current
}

/// `a[href^="#"]` click handling.
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    navbar_offset_px: f64,
}

impl SmoothScroll {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            navbar_offset_px: config.navbar_offset_px,
        }
    }

    /// Scrolls to the anchor target under the fixed navbar. Returns `false`
    /// when the href names no element.
    pub fn on_anchor_click(&self, view: &mut dyn View, href: &str) -> bool {
        let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return false;
        };
        let Some(top) = view.offset_top(&ElementRef::id(id)) else {
            return false;
        };
        view.scroll_to(top - self.navbar_offset_px);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::{ElementState, MemoryView, ScrollRecord};

    fn menu_view() -> MemoryView {
        let mut view = MemoryView::new();
        for menu in Menu::ALL {
            view.insert_id(menu.trigger_id(), ElementState::default());
            view.insert_id(menu.surface_id(), ElementState::default());
        }
        view
    }

    fn surface_open(view: &MemoryView, menu: Menu) -> bool {
        view.has_class(&ElementRef::id(menu.surface_id()), ACTIVE)
    }

    #[test]
    fn opening_one_menu_closes_the_others() {
        let mut view = menu_view();
        let mut menus = MenuController::new();

        assert!(menus.toggle(&mut view, Menu::Mobile));
        assert!(view.has_class(&ElementRef::Body, "menu-open"));
        assert!(view.has_class(&ElementRef::id("hamburger"), ACTIVE));

        assert!(menus.toggle(&mut view, Menu::Language));
        assert!(surface_open(&view, Menu::Language));
        assert!(!surface_open(&view, Menu::Mobile));
        assert!(!view.has_class(&ElementRef::Body, "menu-open"));

        assert!(menus.toggle(&mut view, Menu::MobileLanguage));
        let open: Vec<_> = Menu::ALL
            .into_iter()
            .filter(|m| surface_open(&view, *m))
            .collect();
        assert_eq!(open, vec![Menu::MobileLanguage]);
        assert_eq!(menus.open_menu(), Some(Menu::MobileLanguage));
    }

    #[test]
    fn toggle_twice_closes() {
        let mut view = menu_view();
        let mut menus = MenuController::new();
        menus.toggle(&mut view, Menu::Language);
        assert!(!menus.toggle(&mut view, Menu::Language));
        assert!(!surface_open(&view, Menu::Language));
        assert_eq!(menus.open_menu(), None);
    }

    #[test]
    fn outside_click_closes_only_when_outside() {
        let mut view = menu_view();
        let mut menus = MenuController::new();
        menus.open(&mut view, Menu::Mobile);

        menus.on_document_click(&mut view, |m| m == Menu::Mobile);
        assert!(menus.is_open(Menu::Mobile));

        menus.on_document_click(&mut view, |_| false);
        assert!(!menus.is_open(Menu::Mobile));
        assert!(!surface_open(&view, Menu::Mobile));
    }

    #[test]
    fn nav_link_closes_mobile_menu() {
        let mut view = menu_view();
        let mut menus = MenuController::new();
        menus.open(&mut view, Menu::Mobile);
        menus.on_nav_link_click(&mut view);
        assert!(!view.has_class(&ElementRef::id("hamburger"), ACTIVE));
        assert_eq!(menus.open_menu(), None);
    }

    fn page_view() -> MemoryView {
        let mut view = MemoryView::new();
        view.insert_id("navbar", ElementState::default());
        for (id, top) in [("home", 0.0), ("about", 800.0), ("rooms", 1600.0)] {
            view.push("section", ElementState::default().with_attr("id", id).at_offset(top));
            view.push(".nav-link", ElementState::default().with_attr("href", &format!("#{id}")));
        }
        view
    }

    fn active_links(view: &MemoryView) -> Vec<String> {
        view.select_all(".nav-link")
            .into_iter()
            .filter(|l| view.has_class(l, ACTIVE))
            .filter_map(|l| view.attr(&l, "href"))
            .collect()
    }

    #[test]
    fn navbar_condenses_past_threshold() {
        let mut view = page_view();
        let mut navbar = NavbarController::new(&SiteConfig::default());

        navbar.on_scroll(&mut view, 100.0);
        assert!(!view.has_class(&ElementRef::id("navbar"), "scrolled"));
        navbar.on_scroll(&mut view, 101.0);
        assert!(view.has_class(&ElementRef::id("navbar"), "scrolled"));
        navbar.on_scroll(&mut view, 20.0);
        assert!(!navbar.is_condensed());
    }

    #[test]
    fn active_section_uses_lookahead() {
        let mut view = page_view();
        let mut navbar = NavbarController::new(&SiteConfig::default());

        navbar.on_scroll(&mut view, 599.0);
        assert_eq!(navbar.active_section(), Some("home"));
        assert_eq!(active_links(&view), vec!["#home"]);

        navbar.on_scroll(&mut view, 600.0);
        assert_eq!(navbar.active_section(), Some("about"));
        assert_eq!(active_links(&view), vec!["#about"]);

        navbar.on_scroll(&mut view, 5000.0);
        assert_eq!(active_links(&view), vec!["#rooms"]);
    }

    #[test]
    fn anchor_click_scrolls_below_navbar() {
        let mut view = page_view();
        view.insert_id("contact", ElementState::default().at_offset(2400.0));
        let scroll = SmoothScroll::new(&SiteConfig::default());

        assert!(scroll.on_anchor_click(&mut view, "#contact"));
        assert!(!scroll.on_anchor_click(&mut view, "#"));
        assert!(!scroll.on_anchor_click(&mut view, "#missing"));
        assert_eq!(view.scrolls, vec![ScrollRecord::Window(2320.0)]);
    }
}
