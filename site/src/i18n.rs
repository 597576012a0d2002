//! Translation tables for the four site languages.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `fluent` (message parsing and formatting)
//! - `unic-langid` (bundle locale identifiers)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en/casa-villa.ftl   (default language, reference key set)
//!   es/casa-villa.ftl
//!   de/casa-villa.ftl
//!   fr/casa-villa.ftl
//! ```
//!
//! Markup keys are dotted (`data-translate="nav.home"`); Fluent ids cannot
//! contain dots, so each key is stored as `nav-home`. See [`message_id`].
//!
//! Lookups never fall back across languages: a key missing from the active
//! table yields `None` and the element keeps whatever text it already shows.
//! A table that fails to load is dropped with a warning and behaves the
//! same way; the other languages are unaffected.
//! Parity between tables is reported by [`TranslationStore::missing_keys`]
//! and checked by `tests/i18n_missing_keys.rs`, not enforced here.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use fluent::{FluentBundle, FluentResource};
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::error::{Result, SiteError};

/// Canonical `.ftl` filename (without extension) in every locale folder.
const DOMAIN: &str = "casa-villa";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LanguageCode {
    #[default]
    En,
    Es,
    De,
    Fr,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 4] = [Self::En, Self::Es, Self::De, Self::Fr];

    /// Lowercase code as persisted and as used in `data-lang`.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::De => "de",
            Self::Fr => "fr",
        }
    }

    /// Label shown in the current-language indicator.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Es => "ES",
            Self::De => "DE",
            Self::Fr => "FR",
        }
    }

    /// Exact lowercase match; `"DE"` or `" fr"` are not language codes.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "de" => Some(Self::De),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// Unknown or absent codes resolve to English.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    fn langid(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fluent message id for a markup translation key.
///
/// The mapping is one-way: markup keys use dots only, so a key that already
/// contains `-` has no id and never aliases a dotted key.
pub fn message_id(key: &str) -> Option<String> {
    if key.is_empty() || key.contains('-') {
        return None;
    }
    Some(key.replace('.', "-"))
}

struct Table {
    bundle: FluentBundle<FluentResource>,
    ids: BTreeSet<String>,
}

impl Table {
    fn parse(lang: LanguageCode, source: String) -> Result<Self> {
        let malformed = |reason: String| SiteError::Translations {
            lang: lang.code().to_string(),
            reason,
        };
        let ids = message_ids(&source);
        let resource = FluentResource::try_new(source)
            .map_err(|(_, errors)| malformed(format!("{errors:?}")))?;

        let mut bundle = FluentBundle::new(vec![lang.langid()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| malformed(format!("{errors:?}")))?;
        Ok(Self { bundle, ids })
    }
}

fn embedded_source(lang: LanguageCode) -> Result<String> {
    let path = format!("{}/{DOMAIN}.ftl", lang.code());
    let file =
        Localizations::get(&path).ok_or_else(|| SiteError::MissingTable(lang.code().to_string()))?;
    String::from_utf8(file.data.into_owned()).map_err(|err| SiteError::Translations {
        lang: lang.code().to_string(),
        reason: err.to_string(),
    })
}

/// Immutable key -> string tables, one per language.
pub struct TranslationStore {
    tables: HashMap<LanguageCode, Table>,
}

impl TranslationStore {
    /// Load the tables compiled into the binary. A missing or unreadable
    /// file only costs that language its table.
    pub fn embedded() -> Self {
        let mut sources = Vec::with_capacity(LanguageCode::ALL.len());
        for lang in LanguageCode::ALL {
            match embedded_source(lang) {
                Ok(source) => sources.push((lang, source)),
                Err(err) => tracing::warn!(%lang, %err, "translation table skipped"),
            }
        }
        Self::from_sources(sources)
    }

    /// Build from in-memory Fluent sources. Languages not supplied, or whose
    /// source does not parse, simply have no table.
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = (LanguageCode, S)>,
        S: Into<String>,
    {
        let mut tables = HashMap::new();
        for (lang, source) in sources {
            match Table::parse(lang, source.into()) {
                Ok(table) => {
                    tables.insert(lang, table);
                }
                Err(err) => tracing::warn!(%lang, %err, "translation table skipped"),
            }
        }
        Self { tables }
    }

    /// Localized string for a dotted markup key, if `lang` has one.
    pub fn lookup(&self, lang: LanguageCode, key: &str) -> Option<String> {
        let table = self.tables.get(&lang)?;
        let message = table.bundle.get_message(&message_id(key)?)?;
        let pattern = message.value()?;

        let mut errors = Vec::new();
        let value = table.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(%lang, key, ?errors, "translation formatted with errors");
        }
        Some(value.into_owned())
    }

    pub fn has_table(&self, lang: LanguageCode) -> bool {
        self.tables.contains_key(&lang)
    }

    /// Message ids defined for `lang` (empty when it has no table).
    pub fn ids(&self, lang: LanguageCode) -> BTreeSet<String> {
        self.tables
            .get(&lang)
            .map(|t| t.ids.clone())
            .unwrap_or_default()
    }

    /// Ids the default language defines but `lang` lacks.
    pub fn missing_keys(&self, lang: LanguageCode) -> Vec<String> {
        let reference = self.ids(LanguageCode::default());
        let present = self.ids(lang);
        reference.difference(&present).cloned().collect()
    }
}

impl fmt::Debug for TranslationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut langs: Vec<_> = self.tables.keys().map(|l| l.code()).collect();
        langs.sort_unstable();
        f.debug_struct("TranslationStore")
            .field("languages", &langs)
            .finish()
    }
}

/// Message ids in a Fluent source: any `id =` line that is not a comment,
/// term, attribute or continuation.
fn message_ids(source: &str) -> BTreeSet<String> {
    source
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter(|line| !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| {
            !id.is_empty()
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
        .map(str::to_string)
        .collect()
}
