//! Active language: persisted preference, DOM text substitution, indicator.

use std::rc::Rc;

use crate::controllers::navigation::{Menu, MenuController};
use crate::controllers::widget::TOOLTIP_SELECTOR;
use crate::core::{ElementRef, EventTracker, PreferenceStore, View};
use crate::i18n::{LanguageCode, TranslationStore};

pub const TRANSLATABLE: &str = "[data-translate]";
pub const TRANSLATE_ATTR: &str = "data-translate";
pub const INDICATOR_IDS: [&str; 2] = ["current-lang", "mobile-current-lang"];
const TOOLTIP_KEY: &str = "whatsapp.tooltip";

/// Outcome of a user language pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Changed(LanguageCode),
    /// Already active; only the menu was closed.
    Unchanged,
    /// Not one of the four site languages; only the menu was closed.
    Unsupported,
}

/// Persisted language, or English when absent, unknown or unreadable.
pub fn persisted_language(prefs: &dyn PreferenceStore) -> LanguageCode {
    match prefs.load() {
        Ok(value) => LanguageCode::parse_or_default(value.as_deref()),
        Err(err) => {
            tracing::warn!(%err, "could not read language preference");
            LanguageCode::default()
        }
    }
}

pub struct LanguageController {
    translations: Rc<TranslationStore>,
    prefs: Rc<dyn PreferenceStore>,
    tracker: Rc<dyn EventTracker>,
    active: LanguageCode,
}

impl LanguageController {
    pub fn new(
        translations: Rc<TranslationStore>,
        prefs: Rc<dyn PreferenceStore>,
        tracker: Rc<dyn EventTracker>,
    ) -> Self {
        let active = persisted_language(prefs.as_ref());
        Self {
            translations,
            prefs,
            tracker,
            active,
        }
    }

    pub fn active_language(&self) -> LanguageCode {
        self.active
    }

    /// Page load: render the persisted language.
    pub fn init(&self, view: &mut dyn View) {
        let updated = self.apply_language(view, self.active);
        update_indicator(view, self.active);
        tracing::info!(lang = %self.active, updated, "language applied");
    }

    /// Rewrites every translatable element that has an entry for `lang`.
    /// Elements without one keep their current text. Returns how many
    /// elements were written.
    pub fn apply_language(&self, view: &mut dyn View, lang: LanguageCode) -> usize {
        let mut updated = 0;
        for el in view.select_all(TRANSLATABLE) {
            let Some(key) = view.attr(&el, TRANSLATE_ATTR) else {
                continue;
            };
            if let Some(text) = self.translations.lookup(lang, &key) {
                view.set_text(&el, &text);
                updated += 1;
            }
        }

        if let Some(text) = self.translations.lookup(lang, TOOLTIP_KEY) {
            view.set_text(&ElementRef::nth(TOOLTIP_SELECTOR, 0), &text);
        }
        updated
    }

    /// Option click in a language menu. Same-language and unknown picks only
    /// close `origin`; a real change also persists and reports it.
    pub fn select_language(
        &mut self,
        view: &mut dyn View,
        menus: &mut MenuController,
        origin: Menu,
        raw: &str,
    ) -> Selection {
        let selection = match LanguageCode::parse(raw) {
            None => {
                tracing::debug!(raw, "ignoring unsupported language");
                Selection::Unsupported
            }
            Some(lang) if lang == self.active => Selection::Unchanged,
            Some(lang) => {
                self.active = lang;
                self.apply_language(view, lang);
                update_indicator(view, lang);
                if let Err(err) = self.prefs.save(lang.code()) {
                    tracing::warn!(%err, %lang, "could not persist language preference");
                }
                self.tracker.track("Language", "Change", lang.code());
                Selection::Changed(lang)
            }
        };
        menus.close(view, origin);
        selection
    }
}

/// Writes `EN`/`ES`/`DE`/`FR` into whichever indicators exist.
pub fn update_indicator(view: &mut dyn View, lang: LanguageCode) {
    for id in INDICATOR_IDS {
        view.set_text(&ElementRef::id(id), lang.indicator());
    }
}
