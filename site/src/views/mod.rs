//! Static page markup.
//!
//! These components only render structure and English defaults. Ids,
//! classes and `data-*` attributes are the contract the controllers bind to
//! after mount; nothing here holds state.

mod chrome;
mod rooms;
mod sections;

use dioxus::prelude::*;

pub use chrome::{MobileMenu, Navbar, WhatsAppFloat};
pub use rooms::{RoomInfo, Rooms, ROOMS};
pub use sections::{About, Contact, Gallery, Hero, Services};

#[component]
pub fn Page() -> Element {
    rsx! {
        Navbar {}
        MobileMenu {}
        main {
            Hero {}
            About {}
            Services {}
            Rooms {}
            Gallery {}
            Contact {}
        }
        footer { class: "footer",
            p { "© Casa Ans Villa" }
        }
        WhatsAppFloat {}
    }
}
