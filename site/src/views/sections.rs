use dioxus::prelude::*;

/// `(key, English)` pairs for the services grid, title first.
const SERVICES: [(&str, &str, &str, &str); 6] = [
    ("services.minibar_title", "Built-in Minibar", "services.minibar_desc", "Fully stocked minibar with premium beverages and snacks for your convenience"),
    ("services.parking_title", "Free Parking", "services.parking_desc", "Complimentary secure parking space for your vehicle during your stay"),
    ("services.airport_title", "Airport Pickup", "services.airport_desc", "Arranged and paid airport pickup service for a seamless arrival experience"),
    ("services.kitchen_title", "Fully Equipped Kitchen", "services.kitchen_desc", "Complete kitchen with modern appliances - cook yourself or request our paid chef service"),
    ("services.wifi_title", "Free High-Speed WiFi", "services.wifi_desc", "Fiber-fast internet connection throughout the villa for all your digital needs"),
    ("services.concierge_title", "24/7 Concierge", "services.concierge_desc", "Round-the-clock assistance for any requests or special arrangements"),
];

const FEATURES: [(&str, &str, &str, &str); 3] = [
    ("about.feature1_title", "Premium Amenities", "about.feature1_desc", "World-class facilities and services"),
    ("about.feature2_title", "Breathtaking Views", "about.feature2_desc", "Stunning vistas from every room"),
    ("about.feature3_title", "24/7 Concierge", "about.feature3_desc", "Personalized service at your fingertips"),
];

const GALLERY: [&str; 6] = [
    "casa assets/images/gallery/pool.jpg",
    "casa assets/images/gallery/terrace.jpg",
    "casa assets/images/gallery/living.jpg",
    "casa assets/images/gallery/garden.jpg",
    "casa assets/images/gallery/dining.jpg",
    "casa assets/images/gallery/sunset.jpg",
];

/// `#room-type` options; values match the room-type map in the config.
const ROOM_TYPES: [(&str, &str); 4] = [
    ("executive", "Executive Suite"),
    ("deluxe", "Deluxe Room"),
    ("presidential", "Presidential Suite"),
    ("royal", "Royal Villa"),
];

#[component]
fn SectionHeader(title_key: &'static str, title: &'static str, subtitle_key: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title", "data-translate": title_key, {title} }
            p { class: "section-subtitle", "data-translate": subtitle_key, {subtitle} }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-title",
                    span { "data-translate": "hero.luxury", "Luxury" }
                    " "
                    span { class: "highlight", "data-translate": "hero.redefined", "Redefined" }
                }
                p { class: "hero-subtitle", "data-translate": "hero.subtitle",
                    "Experience unparalleled elegance and comfort at Casa Ans Villa"
                }
                div { class: "hero-buttons",
                    a { class: "btn btn-primary", href: "#rooms", "data-translate": "hero.explore_rooms", "Explore Rooms" }
                    a { class: "btn btn-secondary", href: "#contact", "data-translate": "hero.book_now", "Book Now" }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "about",
            div { class: "container",
                SectionHeader {
                    title_key: "about.title",
                    title: "About Casa Ans Villa",
                    subtitle_key: "about.subtitle",
                    subtitle: "Where luxury meets comfort in perfect harmony",
                }
                div { class: "about-content",
                    div { class: "about-text",
                        h3 { "data-translate": "about.experience_title", "Exceptional Living Experience" }
                        p { "data-translate": "about.description1",
                            "At Casa Ans Villa, we believe that luxury is not just about opulence, but about creating meaningful experiences that stay with you forever. Our meticulously designed villas offer the perfect blend of modern sophistication and timeless elegance."
                        }
                        p { "data-translate": "about.description2",
                            "Each space has been carefully curated to provide our guests with an unparalleled level of comfort and style, ensuring every moment spent with us is truly memorable."
                        }
                        div { class: "features",
                            for (title_key, title, desc_key, desc) in FEATURES {
                                div { class: "feature",
                                    h4 { "data-translate": title_key, {title} }
                                    p { "data-translate": desc_key, {desc} }
                                }
                            }
                        }
                    }
                    div { class: "about-image",
                        img {
                            src: "casa assets/images/hero images/hero 2.JPG",
                            alt: "Casa Ans Villa terrace",
                            loading: "lazy",
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Services() -> Element {
    rsx! {
        section { id: "services", class: "services",
            div { class: "container",
                SectionHeader {
                    title_key: "services.title",
                    title: "Our Premium Services",
                    subtitle_key: "services.subtitle",
                    subtitle: "Everything you need for the perfect luxury stay",
                }
                div { class: "services-grid",
                    for (title_key, title, desc_key, desc) in SERVICES {
                        div { class: "service-card",
                            h3 { "data-translate": title_key, {title} }
                            p { "data-translate": desc_key, {desc} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    rsx! {
        section { id: "gallery", class: "gallery",
            div { class: "container",
                SectionHeader {
                    title_key: "gallery.title",
                    title: "Gallery",
                    subtitle_key: "gallery.subtitle",
                    subtitle: "A visual journey through our luxury spaces",
                }
                div { class: "gallery-grid",
                    for src in GALLERY {
                        div { class: "gallery-item",
                            img { src: src, alt: "Casa Ans Villa", loading: "lazy" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "contact",
            div { class: "container",
                SectionHeader {
                    title_key: "contact.title",
                    title: "Contact Us",
                    subtitle_key: "contact.subtitle",
                    subtitle: "Ready to experience luxury? Get in touch with us today",
                }
                form { class: "contact-form", novalidate: true,
                    div { class: "form-row",
                        input { r#type: "text", name: "name", placeholder: "Full name *" }
                        input { r#type: "email", name: "email", placeholder: "Email *" }
                    }
                    div { class: "form-row",
                        input { r#type: "tel", name: "phone", placeholder: "Phone" }
                        select { id: "room-type", name: "room-type",
                            option { value: "", "Select a room" }
                            for (value, label) in ROOM_TYPES {
                                option { value: value, {label} }
                            }
                        }
                    }
                    div { class: "form-row",
                        input { r#type: "date", name: "check-in" }
                        input { r#type: "date", name: "check-out" }
                        input { r#type: "number", name: "guests", min: "1", placeholder: "Guests" }
                    }
                    textarea { name: "message", rows: "5", placeholder: "Message" }
                    button { class: "btn btn-primary", r#type: "submit", "Send Inquiry" }
                }
            }
        }
        section { id: "location", class: "location",
            div { class: "container",
                iframe {
                    title: "Casa Ans Villa location",
                    src: "https://www.google.com/maps?q=Casa+Ans+Villa&output=embed",
                    "loading": "lazy",
                }
            }
        }
    }
}
