//! Page behaviour, one controller per interactive surface. Each controller
//! works against `&mut dyn View`, so all of them run headless under test.

pub mod contact;
pub mod language;
pub mod navigation;
pub mod notify;
pub mod reveal;
pub mod rooms;
pub mod widget;

pub use contact::{ContactForm, ContactSubmission, ValidationError};
pub use language::{LanguageController, Selection};
pub use navigation::{Menu, MenuController, NavbarController, SmoothScroll};
pub use notify::Notifier;
pub use reveal::{LazyImages, RevealController, RevealThreshold};
pub use rooms::RoomPanels;
pub use widget::{FloatingWidget, WidgetVisibility};
