//! Connects the controllers to browser events.
//!
//! [`install`] runs once, after the page markup is mounted. Every listener
//! lives for the rest of the page, so they are all forgotten after being
//! attached. Callbacks build a fresh [`DomView`] and borrow the controller
//! they drive for the duration of the event only.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_events::{EventListener, EventListenerOptions};
use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Element, ErrorEvent, Event, EventTarget, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Node,
};

use super::scheduler::GlooScheduler;
use super::view::{DomView, NOTIFICATION_CLOSE};
use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
use crate::controllers::contact::FORM_SELECTOR;
use crate::controllers::reveal::LAZY_IMAGES;
use crate::controllers::widget::LINK_SELECTOR;
use crate::controllers::{
    ContactForm, FloatingWidget, LanguageController, LazyImages, Menu, MenuController,
    NavbarController, Notifier, RevealController, RoomPanels, SmoothScroll,
};
use crate::core::platform::{spawn_future, Platform};
use crate::core::storage::LocalStorage;
use crate::core::tracker::GtagTracker;
use crate::core::{ElementRef, EventTracker, Interaction, Scheduler, View};
use crate::error::Result;
use crate::i18n::{LanguageCode, TranslationStore};

static INSTALLED: AtomicBool = AtomicBool::new(false);

type IntersectionCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Reads the page configuration and attaches every behaviour. Calling it a
/// second time is a no-op.
pub fn install() -> Result<()> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        tracing::debug!("site behaviour already installed");
        return Ok(());
    }

    let mut view = DomView::current()?;
    let config = load_config(&view);

    let translations = Rc::new(TranslationStore::embedded());
    for lang in LanguageCode::ALL {
        let missing = translations.missing_keys(lang);
        if !missing.is_empty() {
            tracing::warn!(%lang, ?missing, "translation table incomplete");
        }
    }

    let tracker: Rc<dyn EventTracker> = Rc::new(GtagTracker);
    let scheduler: Rc<dyn Scheduler> = Rc::new(GlooScheduler);
    let notifier = Rc::new(Notifier::new(scheduler.clone(), config.notification_ms));

    let site = Site {
        menus: Rc::new(RefCell::new(MenuController::new())),
        language: Rc::new(RefCell::new(LanguageController::new(
            translations,
            Rc::new(LocalStorage::new(config.storage_key.clone())),
            tracker.clone(),
        ))),
        navbar: Rc::new(RefCell::new(NavbarController::new(&config))),
        widget: Rc::new(RefCell::new(FloatingWidget::new(&config))),
        reveal: Rc::new(RefCell::new(RevealController::new(&config))),
        contact: Rc::new(ContactForm::new(notifier.clone())),
        notifier,
        rooms: Rc::new(RoomPanels::new(&config, scheduler, tracker.clone())),
        scroll: SmoothScroll::new(&config),
        tracker,
    };

    site.language.borrow().init(&mut view);
    site.widget.borrow().init(&mut view);
    let y = scroll_y(&view);
    site.navbar.borrow_mut().on_scroll(&mut view, y);

    site.bind_scroll(&view);
    site.bind_menus(&view);
    site.bind_document_clicks(&view);
    site.bind_language_options(&view);
    site.bind_anchors(&view);
    site.bind_contact_form(&view);
    site.bind_notification_close(&view);
    site.bind_rooms(&view);
    site.bind_widget(&view);
    site.observe_reveal(&mut view);
    observe_lazy_images(&view);

    bind_error_log(&view);
    preload_images(&config.preload_images);
    if let Some(path) = &config.service_worker {
        register_service_worker(&view, path);
    }

    tracing::info!(platform = ?Platform::current(), "site behaviour installed");
    Ok(())
}

/// Defaults overlaid with the optional JSON block in `#site-config`.
pub fn load_config(view: &DomView) -> SiteConfig {
    let raw = view
        .text(&ElementRef::id(CONFIG_ELEMENT_ID))
        .unwrap_or_default();
    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring malformed site config");
        SiteConfig::default()
    })
}

struct Site {
    tracker: Rc<dyn EventTracker>,
    menus: Rc<RefCell<MenuController>>,
    language: Rc<RefCell<LanguageController>>,
    navbar: Rc<RefCell<NavbarController>>,
    widget: Rc<RefCell<FloatingWidget>>,
    reveal: Rc<RefCell<RevealController>>,
    contact: Rc<ContactForm>,
    notifier: Rc<Notifier>,
    rooms: Rc<RoomPanels>,
    scroll: SmoothScroll,
}

impl Site {
    fn bind_scroll(&self, view: &DomView) {
        let navbar = self.navbar.clone();
        let widget = self.widget.clone();
        EventListener::new(view.window(), "scroll", move |_| {
            with_view(|view| {
                let y = scroll_y(view);
                navbar.borrow_mut().on_scroll(view, y);
                widget.borrow_mut().on_scroll(view, y);
            });
        })
        .forget();
    }

    fn bind_menus(&self, view: &DomView) {
        for menu in Menu::ALL {
            let Some(trigger) = view.element(&ElementRef::id(menu.trigger_id())) else {
                tracing::debug!(trigger = menu.trigger_id(), "menu trigger not found");
                continue;
            };
            let menus = self.menus.clone();
            on_click(&trigger, menu != Menu::Mobile, move |event| {
                if menu != Menu::Mobile {
                    event.stop_propagation();
                }
                with_view(|view| {
                    menus.borrow_mut().toggle(view, menu);
                });
            });
        }

        for link in elements(view, ".nav-link, .mobile-nav-link") {
            let menus = self.menus.clone();
            on_click(&link, false, move |_| {
                with_view(|view| menus.borrow_mut().on_nav_link_click(view));
            });
        }
    }

    fn bind_document_clicks(&self, view: &DomView) {
        let menus = self.menus.clone();
        let tracker = self.tracker.clone();
        EventListener::new(view.document(), "click", move |event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok());
            with_view(|view| {
                let inside: Vec<Menu> = Menu::ALL
                    .into_iter()
                    .filter(|menu| click_inside(view, *menu, target.as_ref()))
                    .collect();
                menus
                    .borrow_mut()
                    .on_document_click(view, |menu| inside.contains(&menu));
            });

            if let Some(element) = target.and_then(|node| node.dyn_into::<Element>().ok()) {
                for interaction in interactions(&element) {
                    interaction.track(tracker.as_ref());
                }
            }
        })
        .forget();
    }

    fn bind_language_options(&self, view: &DomView) {
        for (selector, origin) in [
            (".language-option", Menu::Language),
            (".mobile-language-option", Menu::MobileLanguage),
        ] {
            for option in elements(view, selector) {
                let language = self.language.clone();
                let menus = self.menus.clone();
                let code = option.get_attribute("data-lang").unwrap_or_default();
                on_click(&option, true, move |_| {
                    with_view(|view| {
                        language.borrow_mut().select_language(
                            view,
                            &mut menus.borrow_mut(),
                            origin,
                            &code,
                        );
                    });
                });
            }
        }
    }

    fn bind_anchors(&self, view: &DomView) {
        for anchor in elements(view, r##"a[href^="#"]"##) {
            let scroll = self.scroll;
            let href = anchor.get_attribute("href").unwrap_or_default();
            on_click(&anchor, true, move |_| {
                with_view(|view| {
                    scroll.on_anchor_click(view, &href);
                });
            });
        }
    }

    fn bind_contact_form(&self, view: &DomView) {
        let Some(form) = view.element(&ElementRef::nth(FORM_SELECTOR, 0)) else {
            tracing::debug!("no contact form on page");
            return;
        };
        let contact = self.contact.clone();
        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                with_view(|view| {
                    let _ = contact.submit(view);
                });
            },
        )
        .forget();
    }

    /// Notifications are created on demand, so their close button is
    /// handled by one delegated listener on the document.
    fn bind_notification_close(&self, view: &DomView) {
        let notifier = self.notifier.clone();
        EventListener::new(view.document(), "click", move |event| {
            let on_close = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(NOTIFICATION_CLOSE).ok().flatten())
                .is_some();
            if on_close {
                with_view(|view| notifier.dismiss(view));
            }
        })
        .forget();
    }

    fn bind_rooms(&self, view: &DomView) {
        for button in elements(view, ".view-details-btn") {
            let rooms = self.rooms.clone();
            let room = button.get_attribute("data-room").unwrap_or_default();
            on_click(&button, true, move |_| {
                with_view(|view| {
                    rooms.toggle_details(view, &room);
                });
            });
        }

        for button in elements(view, ".close-details-btn") {
            let rooms = self.rooms.clone();
            let room = button.get_attribute("data-room").unwrap_or_default();
            on_click(&button, true, move |_| {
                with_view(|view| rooms.close_details(view, &room));
            });
        }

        for button in elements(view, ".book-room-btn") {
            let rooms = self.rooms.clone();
            let room = button.get_attribute("data-room").unwrap_or_default();
            on_click(&button, true, move |_| {
                with_view(|view| rooms.book(view, &room));
            });
        }

        for thumb in elements(view, ".thumbnail") {
            let rooms = self.rooms.clone();
            let room = thumb.get_attribute("data-room").unwrap_or_default();
            let image = thumb.get_attribute("data-image").unwrap_or_default();
            let alt = thumb.get_attribute("alt").unwrap_or_default();
            let element = thumb.clone();
            on_click(&thumb, true, move |_| {
                let src = image_src(&element);
                with_view(|view| rooms.select_thumbnail(view, &room, &image, &src, &alt));
            });
        }
    }

    fn bind_widget(&self, view: &DomView) {
        let Some(link) = view.element(&ElementRef::nth(LINK_SELECTOR, 0)) else {
            tracing::warn!("floating widget link not found");
            return;
        };

        for (kind, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let widget = self.widget.clone();
            EventListener::new(&link, kind, move |_| {
                with_view(|view| widget.borrow().on_hover(view, entering));
            })
            .forget();
        }

        let widget = self.widget.clone();
        let tracker = self.tracker.clone();
        EventListener::new(&link, "click", move |_| {
            widget.borrow().on_click(tracker.as_ref());
        })
        .forget();
    }

    /// Marks the animated elements and reveals each the first time it
    /// crosses the viewport. Without `IntersectionObserver` the same
    /// threshold is checked on every scroll.
    fn observe_reveal(&self, view: &mut DomView) {
        let targets = self.reveal.borrow().register(view);
        let (selector, threshold) = {
            let reveal = self.reveal.borrow();
            (reveal.selector().to_string(), reveal.threshold())
        };

        let reveal = self.reveal.clone();
        let callback: IntersectionCallback = Closure::new(
            move |entries: Array, observer: IntersectionObserver| {
                with_view(|view| {
                    for entry in intersecting(&entries) {
                        let target = entry.target();
                        if let Some(el) = view.locate(&selector, &target) {
                            reveal.borrow_mut().on_intersect(view, &el);
                        }
                        observer.unobserve(&target);
                    }
                });
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.ratio));
        init.set_root_margin(&threshold.root_margin());
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                for el in &targets {
                    if let Some(element) = view.element(el) {
                        observer.observe(&element);
                    }
                }
                callback.forget();
            }
            Err(err) => {
                tracing::warn!(?err, "IntersectionObserver unavailable; revealing on scroll");
                reveal_in_viewport(view, &self.reveal, &targets);
                let reveal = self.reveal.clone();
                EventListener::new(view.window(), "scroll", move |_| {
                    with_view(|view| reveal_in_viewport(view, &reveal, &targets));
                })
                .forget();
            }
        }
    }
}

fn reveal_in_viewport(view: &mut DomView, reveal: &RefCell<RevealController>, targets: &[ElementRef]) {
    let viewport = view
        .window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let threshold = reveal.borrow().threshold();
    for el in targets {
        if reveal.borrow().is_revealed(el) {
            continue;
        }
        let Some(rect) = view.element(el).map(|e| e.get_bounding_client_rect()) else {
            continue;
        };
        if threshold.crosses(rect.top(), rect.height(), viewport) {
            reveal.borrow_mut().on_intersect(view, el);
        }
    }
}

/// Lazy images are only activated where the observer exists; elsewhere the
/// browser's native `loading="lazy"` handles them.
fn observe_lazy_images(view: &DomView) {
    let callback: IntersectionCallback = Closure::new(
        move |entries: Array, observer: IntersectionObserver| {
            with_view(|view| {
                for entry in intersecting(&entries) {
                    let target = entry.target();
                    let done = view
                        .locate(LAZY_IMAGES, &target)
                        .map_or(true, |img| LazyImages.on_intersect(view, &img));
                    if done {
                        observer.unobserve(&target);
                    }
                }
            });
        },
    );

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            for img in elements(view, LAZY_IMAGES) {
                observer.observe(&img);
            }
            callback.forget();
        }
        Err(err) => tracing::debug!(?err, "lazy image observer unavailable"),
    }
}

fn intersecting(entries: &Array) -> Vec<IntersectionObserverEntry> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(IntersectionObserverEntry::is_intersecting)
        .collect()
}

fn bind_error_log(view: &DomView) {
    EventListener::new(view.window(), "error", |event| {
        let Some(error) = event.dyn_ref::<ErrorEvent>() else {
            tracing::error!("uncaught script error");
            return;
        };
        tracing::error!(
            message = %error.message(),
            file = %error.filename(),
            line = error.lineno(),
            "uncaught script error"
        );
    })
    .forget();
}

fn preload_images(sources: &[String]) {
    for src in sources {
        match HtmlImageElement::new() {
            Ok(img) => img.set_src(src),
            Err(err) => tracing::debug!(?err, %src, "could not preload image"),
        }
    }
}

/// Background worker registration; the outcome is only logged.
fn register_service_worker(view: &DomView, path: &str) {
    let navigator = view.window().navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        tracing::debug!("service workers unsupported");
        return;
    }

    let registration = navigator.service_worker().register(path);
    let path = path.to_string();
    spawn_future(async move {
        match JsFuture::from(registration).await {
            Ok(_) => tracing::info!(%path, "service worker registered"),
            Err(err) => tracing::warn!(%path, ?err, "service worker registration failed"),
        }
    });
}

/// Clicks tracked for analytics regardless of which control handles them.
fn interactions(target: &Element) -> Vec<Interaction> {
    let mut found = Vec::new();
    if target.matches(".gallery-item img").unwrap_or(false) {
        found.push(Interaction::GalleryImage {
            src: image_src(target),
        });
    }
    if target.matches(".btn-primary").unwrap_or(false) {
        found.push(Interaction::PrimaryButton {
            text: target.text_content().unwrap_or_default(),
        });
    }
    if target.matches(".view-details-btn").unwrap_or(false) {
        found.push(Interaction::ViewDetails {
            room: target.get_attribute("data-room").unwrap_or_default(),
        });
    }
    found
}

fn click_inside(view: &DomView, menu: Menu, target: Option<&Node>) -> bool {
    [menu.trigger_id(), menu.surface_id()].into_iter().any(|id| {
        view.element(&ElementRef::id(id))
            .is_some_and(|el| el.contains(target))
    })
}

/// Resolved `src` of an image, falling back to the raw attribute.
fn image_src(element: &Element) -> String {
    element
        .dyn_ref::<HtmlImageElement>()
        .map(HtmlImageElement::src)
        .or_else(|| element.get_attribute("src"))
        .unwrap_or_default()
}

fn scroll_y(view: &DomView) -> f64 {
    view.window().scroll_y().unwrap_or_default()
}

fn elements(view: &DomView, selector: &str) -> Vec<Element> {
    let Ok(list) = view.document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Click listener; `prevent` suppresses the default action first.
fn on_click(target: &EventTarget, prevent: bool, mut handler: impl FnMut(&Event) + 'static) {
    let options = if prevent {
        EventListenerOptions::enable_prevent_default()
    } else {
        EventListenerOptions::default()
    };
    EventListener::new_with_options(target, "click", options, move |event| {
        if prevent {
            event.prevent_default();
        }
        handler(event);
    })
    .forget();
}

fn with_view(f: impl FnOnce(&mut DomView)) {
    match DomView::current() {
        Ok(mut view) => f(&mut view),
        Err(err) => tracing::error!(%err, "document unavailable in event handler"),
    }
}
