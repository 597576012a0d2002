use dioxus::prelude::*;

use crate::i18n::LanguageCode;

const WHATSAPP_URL: &str = "https://wa.me/";

/// Anchor, translation key and English label for each navbar entry.
const NAV_LINKS: [(&str, &str, &str); 7] = [
    ("#home", "nav.home", "Home"),
    ("#about", "nav.about", "About"),
    ("#services", "nav.services", "Services"),
    ("#rooms", "nav.rooms", "Rooms"),
    ("#gallery", "nav.gallery", "Gallery"),
    ("#contact", "nav.contact", "Contact"),
    ("#location", "nav.location", "Location"),
];

fn language_name(lang: LanguageCode) -> &'static str {
    match lang {
        LanguageCode::En => "English",
        LanguageCode::Es => "Español",
        LanguageCode::De => "Deutsch",
        LanguageCode::Fr => "Français",
    }
}

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { id: "navbar", class: "navbar",
            div { class: "nav-container",
                a { class: "nav-logo", href: "#home",
                    img { src: "casa assets/images/casa logo.png", alt: "Casa Ans Villa" }
                }
                ul { id: "nav-menu", class: "nav-menu",
                    for (href, key, label) in NAV_LINKS {
                        li {
                            a { class: "nav-link", href: href, "data-translate": key, {label} }
                        }
                    }
                }
                div { class: "language-selector",
                    button { id: "language-btn", class: "language-btn", r#type: "button",
                        span { id: "current-lang", "EN" }
                    }
                    LanguageMenu { id: "language-menu", option_class: "language-option" }
                }
                div { class: "mobile-language-selector",
                    button { id: "mobile-language-btn", class: "mobile-language-btn", r#type: "button",
                        span { id: "mobile-current-lang", "EN" }
                    }
                    LanguageMenu { id: "mobile-language-menu", option_class: "mobile-language-option" }
                }
                button { id: "hamburger", class: "hamburger", r#type: "button",
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}

#[component]
fn LanguageMenu(id: &'static str, option_class: &'static str) -> Element {
    rsx! {
        div { id: id, class: "language-menu",
            for lang in LanguageCode::ALL {
                a { class: option_class, href: "#", "data-lang": lang.code(),
                    {language_name(lang)}
                }
            }
        }
    }
}

#[component]
pub fn MobileMenu() -> Element {
    rsx! {
        div { id: "mobile-menu", class: "mobile-menu",
            ul {
                for (href, key, label) in NAV_LINKS {
                    li {
                        a { class: "mobile-nav-link", href: href, "data-translate": key, {label} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn WhatsAppFloat() -> Element {
    rsx! {
        div { id: "whatsapp-float", class: "whatsapp-float",
            a {
                class: "whatsapp-link",
                href: WHATSAPP_URL,
                target: "_blank",
                rel: "noopener",
                span { class: "whatsapp-icon", "💬" }
                span { class: "whatsapp-tooltip", "Chat with us on WhatsApp" }
            }
        }
    }
}
