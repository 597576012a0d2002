//! `web_sys` implementation of [`View`].

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, FormData, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Node, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::core::{ElementRef, NotificationKind, ScrollBlock, View};
use crate::error::{Result, SiteError};

const NOTIFICATION: &str = ".notification";
/// Close button inside a notification; clicks are routed by `bind.rs`.
pub const NOTIFICATION_CLOSE: &str = ".notification-close";

/// The live document. Holds no state of its own, so a fresh one can be made
/// inside every callback.
#[derive(Debug, Clone)]
pub struct DomView {
    window: Window,
    document: Document,
}

impl DomView {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| SiteError::Dom("window unavailable".into()))?;
        let document = window
            .document()
            .ok_or_else(|| SiteError::Dom("document unavailable".into()))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn element(&self, el: &ElementRef) -> Option<Element> {
        match el {
            ElementRef::Body => self.document.body().map(Into::into),
            ElementRef::Id(id) => self.document.get_element_by_id(id),
            ElementRef::Nth { selector, index } => self
                .document
                .query_selector_all(selector)
                .ok()?
                .item(u32::try_from(*index).ok()?)?
                .dyn_into::<Element>()
                .ok(),
        }
    }

    fn html(&self, el: &ElementRef) -> Option<HtmlElement> {
        self.element(el)?.dyn_into().ok()
    }

    /// Position of `target` among the matches of `selector`, as an
    /// [`ElementRef::Nth`].
    pub fn locate(&self, selector: &str, target: &Element) -> Option<ElementRef> {
        let list = self.document.query_selector_all(selector).ok()?;
        let target: &Node = target.as_ref();
        (0..list.length())
            .find(|i| list.item(*i).is_some_and(|node| node.is_same_node(Some(target))))
            .and_then(|i| usize::try_from(i).ok())
            .map(|index| ElementRef::nth(selector, index))
    }

    fn build_notification(&self, message: &str, kind: NotificationKind) -> Option<Element> {
        let doc = &self.document;
        let root: HtmlElement = doc.create_element("div").ok()?.dyn_into().ok()?;
        root.set_class_name(&format!("notification {}", kind.class_name()));

        let content = doc.create_element("div").ok()?;
        content.set_class_name("notification-content");
        let text = doc.create_element("span").ok()?;
        text.set_class_name("notification-message");
        text.set_text_content(Some(message));
        let close = doc.create_element("button").ok()?;
        close.set_class_name(&NOTIFICATION_CLOSE[1..]);
        close.set_text_content(Some("\u{00d7}"));

        content.append_child(&text).ok()?;
        content.append_child(&close).ok()?;
        root.append_child(&content).ok()?;

        let style = root.style();
        for (property, value) in [
            ("position", "fixed"),
            ("top", "100px"),
            ("right", "20px"),
            ("background", kind.background()),
            ("color", "white"),
            ("padding", "1rem 1.5rem"),
            ("border-radius", "8px"),
            ("box-shadow", "0 4px 12px rgba(0,0,0,0.15)"),
            ("z-index", "3000"),
            ("max-width", "400px"),
            ("animation", "slideInRight 0.3s ease"),
        ] {
            style.set_property(property, value).ok();
        }

        Some(root.into())
    }
}

impl View for DomView {
    fn select_all(&self, selector: &str) -> Vec<ElementRef> {
        let len = match self.document.query_selector_all(selector) {
            Ok(list) => list.length() as usize,
            Err(err) => {
                tracing::warn!(selector, ?err, "invalid selector");
                0
            }
        };
        (0..len).map(|i| ElementRef::nth(selector, i)).collect()
    }

    fn exists(&self, el: &ElementRef) -> bool {
        self.element(el).is_some()
    }

    fn text(&self, el: &ElementRef) -> Option<String> {
        self.element(el)?.text_content()
    }

    fn set_text(&mut self, el: &ElementRef, text: &str) {
        if let Some(element) = self.element(el) {
            element.set_text_content(Some(text));
        }
    }

    fn has_class(&self, el: &ElementRef, class: &str) -> bool {
        self.element(el)
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn set_class(&mut self, el: &ElementRef, class: &str, on: bool) {
        if let Some(element) = self.element(el) {
            element.class_list().toggle_with_force(class, on).ok();
        }
    }

    fn attr(&self, el: &ElementRef, name: &str) -> Option<String> {
        self.element(el)?.get_attribute(name)
    }

    fn set_attr(&mut self, el: &ElementRef, name: &str, value: &str) {
        if let Some(element) = self.element(el) {
            element.set_attribute(name, value).ok();
        }
    }

    fn set_value(&mut self, el: &ElementRef, value: &str) {
        let Some(element) = self.element(el) else {
            return;
        };
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else {
            tracing::debug!(?el, "set_value on a non-form control");
        }
    }

    fn form_value(&self, form: &ElementRef, name: &str) -> Option<String> {
        let form: HtmlFormElement = self.element(form)?.dyn_into().ok()?;
        FormData::new_with_form(&form).ok()?.get(name).as_string()
    }

    fn reset_form(&mut self, form: &ElementRef) {
        if let Some(form) = self
            .element(form)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    fn set_style(&mut self, el: &ElementRef, property: &str, value: &str) {
        if let Some(element) = self.html(el) {
            element.style().set_property(property, value).ok();
        }
    }

    fn offset_top(&self, el: &ElementRef) -> Option<f64> {
        self.html(el).map(|element| f64::from(element.offset_top()))
    }

    fn scroll_to(&mut self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    fn scroll_into_view(&mut self, el: &ElementRef, block: ScrollBlock) {
        let Some(element) = self.element(el) else {
            return;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(match block {
            ScrollBlock::Start => ScrollLogicalPosition::Start,
            ScrollBlock::Nearest => ScrollLogicalPosition::Nearest,
        });
        element.scroll_into_view_with_scroll_into_view_options(&opts);
    }

    fn show_notification(&mut self, message: &str, kind: NotificationKind) {
        let Some(body) = self.document.body() else {
            return;
        };
        match self.build_notification(message, kind) {
            Some(node) => {
                body.append_child(&node).ok();
            }
            None => tracing::warn!(message, "could not build notification"),
        }
    }

    fn remove_notification(&mut self) -> bool {
        match self.document.query_selector(NOTIFICATION) {
            Ok(Some(node)) => {
                node.remove();
                true
            }
            _ => false,
        }
    }
}
