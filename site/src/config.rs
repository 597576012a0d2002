//! Tunables for the site controllers.
//!
//! Every field has a default matching the shipped markup. A page may override
//! any subset by embedding a JSON object:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "notification_ms": 8000, "service_worker": null }
//! </script>
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` key holding the selected language code.
    pub storage_key: String,
    /// Scroll offset past which the navbar is condensed.
    pub navbar_condense_px: f64,
    /// Early-trigger margin for the active section highlight.
    pub section_lookahead_px: f64,
    /// Fixed navbar height subtracted from smooth-scroll targets.
    pub navbar_offset_px: f64,
    /// Scroll offset below which the floating widget is always shown.
    pub widget_threshold_px: f64,
    pub notification_ms: u32,
    pub details_scroll_delay_ms: u32,
    /// Script registered as background worker; `None` skips registration.
    pub service_worker: Option<String>,
    /// Room id -> value of the `#room-type` option pre-selected by "book".
    pub room_types: BTreeMap<String, String>,
    pub reveal_selector: String,
    pub preload_images: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let room_types = [
            ("1", "executive"),
            ("2", "deluxe"),
            ("3", "presidential"),
            ("4", "royal"),
        ]
        .into_iter()
        .map(|(id, kind)| (id.to_string(), kind.to_string()))
        .collect();

        Self {
            storage_key: "selectedLanguage".to_string(),
            navbar_condense_px: 100.0,
            section_lookahead_px: 200.0,
            navbar_offset_px: 80.0,
            widget_threshold_px: 200.0,
            notification_ms: 5_000,
            details_scroll_delay_ms: 300,
            service_worker: Some("/sw.js".to_string()),
            room_types,
            reveal_selector: ".room-card, .gallery-item, .feature, .about-text, .about-image"
                .to_string(),
            preload_images: vec![
                "casa assets/images/hero images/hero 1.JPG".to_string(),
                "casa assets/images/casa logo.png".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn room_type(&self, room: &str) -> Option<&str> {
        self.room_types.get(room).map(String::as_str)
    }
}
