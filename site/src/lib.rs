//! Shared crate for the Casa Ans Villa site: page markup, translation
//! tables and the controllers that make the page interactive.

pub mod config;
pub mod controllers;
pub mod core;
pub mod error;
pub mod i18n;
pub mod views;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use i18n::{LanguageCode, TranslationStore};
