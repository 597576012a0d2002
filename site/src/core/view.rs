//! Minimal DOM capability surface used by every controller.
//!
//! Controllers never touch `web_sys` directly; they receive a `&mut dyn View`
//! and address elements through [`ElementRef`]. The browser binding lives in
//! `crate::dom::DomView`; [`MemoryView`] is the headless binding used by tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Address of an element on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementRef {
    Body,
    /// `document.getElementById(..)`
    Id(String),
    /// The `index`-th match of `document.querySelectorAll(selector)`.
    Nth { selector: String, index: usize },
}

impl ElementRef {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn nth(selector: impl Into<String>, index: usize) -> Self {
        Self::Nth {
            selector: selector.into(),
            index,
        }
    }
}

/// Vertical alignment for `scroll_into_view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "notification-success",
            Self::Error => "notification-error",
            Self::Info => "notification-info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#4CAF50",
            Self::Error => "#f44336",
            Self::Info => "#2196F3",
        }
    }
}

/// Operations on an element that does not exist are silent no-ops, and
/// queries on it return `None`/`false`. Partially rendered pages are normal.
pub trait View {
    fn select_all(&self, selector: &str) -> Vec<ElementRef>;
    fn exists(&self, el: &ElementRef) -> bool;

    fn text(&self, el: &ElementRef) -> Option<String>;
    fn set_text(&mut self, el: &ElementRef, text: &str);

    fn has_class(&self, el: &ElementRef, class: &str) -> bool;
    fn set_class(&mut self, el: &ElementRef, class: &str, on: bool);

    fn attr(&self, el: &ElementRef, name: &str) -> Option<String>;
    fn set_attr(&mut self, el: &ElementRef, name: &str, value: &str);
    /// Sets the live `value` of a form control (not its attribute).
    fn set_value(&mut self, el: &ElementRef, value: &str);

    /// Current value of the named control inside `form`.
    fn form_value(&self, form: &ElementRef, name: &str) -> Option<String>;
    fn reset_form(&mut self, form: &ElementRef);

    fn set_style(&mut self, el: &ElementRef, property: &str, value: &str);

    fn offset_top(&self, el: &ElementRef) -> Option<f64>;
    fn scroll_to(&mut self, top: f64);
    fn scroll_into_view(&mut self, el: &ElementRef, block: ScrollBlock);

    /// Inserts a notification node. Does not remove existing ones.
    fn show_notification(&mut self, message: &str, kind: NotificationKind);
    /// Removes the first notification node, returning whether one existed.
    fn remove_notification(&mut self) -> bool;

    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&mut self, el: &ElementRef, class: &str) -> bool {
        let on = !self.has_class(el, class);
        self.set_class(el, class, on);
        self.has_class(el, class)
    }
}

/// Recorded state of one element in a [`MemoryView`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub text: String,
    pub classes: BTreeSet<String>,
    pub attrs: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub value: Option<String>,
    /// Named controls when the element is a form.
    pub fields: BTreeMap<String, String>,
    pub offset_top: f64,
}

impl ElementState {
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    pub fn at_offset(mut self, top: f64) -> Self {
        self.offset_top = top;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollRecord {
    Window(f64),
    IntoView(ElementRef, ScrollBlock),
}

/// Headless view: a flat arena of elements reachable by id, by selector
/// group, or both.
///
/// ```ignore
/// let mut view = MemoryView::new();
/// view.insert_id("navbar", ElementState::default());
/// view.push("section", ElementState::default().with_attr("id", "about"));
/// view.alias(".room-details-expanded", "room-details-1");
/// ```
#[derive(Debug, Default)]
pub struct MemoryView {
    elements: Vec<ElementState>,
    ids: HashMap<String, usize>,
    groups: HashMap<String, Vec<usize>>,
    body: ElementState,
    pub notifications: Vec<Notice>,
    pub scrolls: Vec<ScrollRecord>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element reachable through `ElementRef::Id(id)`.
    pub fn insert_id(&mut self, id: &str, state: ElementState) -> ElementRef {
        let idx = self.elements.len();
        self.elements.push(state);
        self.ids.insert(id.to_string(), idx);
        ElementRef::id(id)
    }

    /// Appends an element to the `selector` group.
    pub fn push(&mut self, selector: &str, state: ElementState) -> ElementRef {
        let idx = self.elements.len();
        self.elements.push(state);
        let group = self.groups.entry(selector.to_string()).or_default();
        group.push(idx);
        ElementRef::nth(selector, group.len() - 1)
    }

    /// Makes an already registered id element also match `selector`.
    pub fn alias(&mut self, selector: &str, id: &str) -> Option<ElementRef> {
        let idx = *self.ids.get(id)?;
        let group = self.groups.entry(selector.to_string()).or_default();
        group.push(idx);
        Some(ElementRef::nth(selector, group.len() - 1))
    }

    pub fn get(&self, el: &ElementRef) -> Option<&ElementState> {
        match el {
            ElementRef::Body => Some(&self.body),
            _ => self.index_of(el).map(|idx| &self.elements[idx]),
        }
    }

    fn get_mut(&mut self, el: &ElementRef) -> Option<&mut ElementState> {
        match el {
            ElementRef::Body => Some(&mut self.body),
            _ => self.index_of(el).map(|idx| &mut self.elements[idx]),
        }
    }

    fn index_of(&self, el: &ElementRef) -> Option<usize> {
        match el {
            ElementRef::Body => None,
            ElementRef::Id(id) => self.ids.get(id).copied(),
            ElementRef::Nth { selector, index } => {
                self.groups.get(selector).and_then(|g| g.get(*index)).copied()
            }
        }
    }
}

impl View for MemoryView {
    fn select_all(&self, selector: &str) -> Vec<ElementRef> {
        let len = self.groups.get(selector).map_or(0, Vec::len);
        (0..len).map(|i| ElementRef::nth(selector, i)).collect()
    }

    fn exists(&self, el: &ElementRef) -> bool {
        self.get(el).is_some()
    }

    fn text(&self, el: &ElementRef) -> Option<String> {
        self.get(el).map(|s| s.text.clone())
    }

    fn set_text(&mut self, el: &ElementRef, text: &str) {
        if let Some(state) = self.get_mut(el) {
            state.text = text.to_string();
        }
    }

    fn has_class(&self, el: &ElementRef, class: &str) -> bool {
        self.get(el).is_some_and(|s| s.has_class(class))
    }

    fn set_class(&mut self, el: &ElementRef, class: &str, on: bool) {
        if let Some(state) = self.get_mut(el) {
            if on {
                state.classes.insert(class.to_string());
            } else {
                state.classes.remove(class);
            }
        }
    }

    fn attr(&self, el: &ElementRef, name: &str) -> Option<String> {
        self.get(el).and_then(|s| s.attrs.get(name).cloned())
    }

    fn set_attr(&mut self, el: &ElementRef, name: &str, value: &str) {
        if let Some(state) = self.get_mut(el) {
            state.attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn set_value(&mut self, el: &ElementRef, value: &str) {
        if let Some(state) = self.get_mut(el) {
            state.value = Some(value.to_string());
        }
    }

    fn form_value(&self, form: &ElementRef, name: &str) -> Option<String> {
        self.get(form).and_then(|s| s.fields.get(name).cloned())
    }

    fn reset_form(&mut self, form: &ElementRef) {
        if let Some(state) = self.get_mut(form) {
            state.fields.values_mut().for_each(String::clear);
        }
    }

    fn set_style(&mut self, el: &ElementRef, property: &str, value: &str) {
        if let Some(state) = self.get_mut(el) {
            state.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn offset_top(&self, el: &ElementRef) -> Option<f64> {
        self.get(el).map(|s| s.offset_top)
    }

    fn scroll_to(&mut self, top: f64) {
        self.scrolls.push(ScrollRecord::Window(top));
    }

    fn scroll_into_view(&mut self, el: &ElementRef, block: ScrollBlock) {
        if self.exists(el) {
            self.scrolls.push(ScrollRecord::IntoView(el.clone(), block));
        }
    }

    fn show_notification(&mut self, message: &str, kind: NotificationKind) {
        self.notifications.push(Notice {
            message: message.to_string(),
            kind,
        });
    }

    fn remove_notification(&mut self) -> bool {
        if self.notifications.is_empty() {
            false
        } else {
            self.notifications.remove(0);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliased_element_shares_state() {
        let mut view = MemoryView::new();
        view.insert_id("room-details-1", ElementState::default());
        let grouped = view
            .alias(".room-details-expanded", "room-details-1")
            .expect("id registered");

        view.set_class(&grouped, "active", true);
        assert!(view.has_class(&ElementRef::id("room-details-1"), "active"));
        assert_eq!(view.select_all(".room-details-expanded"), vec![grouped]);
    }

    #[test]
    fn missing_elements_are_no_ops() {
        let mut view = MemoryView::new();
        let ghost = ElementRef::id("ghost");
        view.set_text(&ghost, "boo");
        view.set_class(&ghost, "active", true);
        assert!(!view.exists(&ghost));
        assert!(!view.toggle_class(&ghost, "active"));
        assert!(view.text(&ghost).is_none());
        view.scroll_into_view(&ghost, ScrollBlock::Start);
        assert!(view.scrolls.is_empty());
    }

    #[test]
    fn reset_form_clears_fields() {
        let mut view = MemoryView::new();
        let form = view.push(
            ".contact-form",
            ElementState::default().with_field("name", "Jo"),
        );
        view.reset_form(&form);
        assert_eq!(view.form_value(&form, "name").as_deref(), Some(""));
    }
}
