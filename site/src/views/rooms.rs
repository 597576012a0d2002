use dioxus::prelude::*;

#[derive(Debug, PartialEq)]
pub struct RoomInfo {
    /// Value of every `data-room` attribute belonging to this room.
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub summary: &'static str,
    pub amenities: &'static [&'static str],
    pub images: [&'static str; 3],
}

pub static ROOMS: [RoomInfo; 4] = [
    RoomInfo {
        id: "1",
        name: "Executive Suite",
        price: "$250 / night",
        summary: "A calm suite with a king bed and a private balcony over the garden.",
        amenities: &["King bed", "Private balcony", "Rain shower", "Work desk"],
        images: [
            "casa assets/images/rooms/room 1/1.jpg",
            "casa assets/images/rooms/room 1/2.jpg",
            "casa assets/images/rooms/room 1/3.jpg",
        ],
    },
    RoomInfo {
        id: "2",
        name: "Deluxe Room",
        price: "$180 / night",
        summary: "Bright double room with pool views and a walk-in shower.",
        amenities: &["Queen bed", "Pool view", "Walk-in shower"],
        images: [
            "casa assets/images/rooms/room 2/1.jpg",
            "casa assets/images/rooms/room 2/2.jpg",
            "casa assets/images/rooms/room 2/3.jpg",
        ],
    },
    RoomInfo {
        id: "3",
        name: "Presidential Suite",
        price: "$420 / night",
        summary: "Top-floor suite with a separate lounge and panoramic terrace.",
        amenities: &["King bed", "Lounge", "Panoramic terrace", "Soaking tub"],
        images: [
            "casa assets/images/rooms/room 3/1.jpg",
            "casa assets/images/rooms/room 3/2.jpg",
            "casa assets/images/rooms/room 3/3.jpg",
        ],
    },
    RoomInfo {
        id: "4",
        name: "Royal Villa",
        price: "$650 / night",
        summary: "The whole east wing: two bedrooms, a private plunge pool and kitchen.",
        amenities: &["Two bedrooms", "Plunge pool", "Private kitchen", "Butler on call"],
        images: [
            "casa assets/images/rooms/room 4/1.jpg",
            "casa assets/images/rooms/room 4/2.jpg",
            "casa assets/images/rooms/room 4/3.jpg",
        ],
    },
];

#[component]
pub fn Rooms() -> Element {
    rsx! {
        section { id: "rooms", class: "rooms",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "data-translate": "rooms.title", "Our Rooms" }
                    p { class: "section-subtitle", "data-translate": "rooms.subtitle",
                        "Luxurious accommodations designed for your comfort"
                    }
                }
                div { class: "rooms-grid",
                    for room in ROOMS.iter() {
                        RoomCard { room }
                    }
                }
            }
        }
    }
}

#[component]
fn RoomCard(room: &'static RoomInfo) -> Element {
    let details_id = format!("room-details-{}", room.id);
    let main_id = format!("main-image-{}", room.id);

    rsx! {
        div { class: "room-card",
            img { class: "room-image", src: room.images[0], alt: room.name, loading: "lazy" }
            div { class: "room-info",
                h3 { {room.name} }
                p { class: "room-price", {room.price} }
                button { class: "view-details-btn", r#type: "button", "data-room": room.id, "View Details" }
            }
            div { id: details_id, class: "room-details-expanded",
                div { class: "room-gallery",
                    img { id: main_id, class: "main-image", src: room.images[0], alt: room.name }
                    div { class: "thumbnails",
                        for (index, src) in room.images.iter().enumerate() {
                            img {
                                class: if index == 0 { "thumbnail active" } else { "thumbnail" },
                                src: *src,
                                alt: room.name,
                                "data-room": room.id,
                                "data-image": (index + 1).to_string(),
                            }
                        }
                    }
                }
                div { class: "room-details-text",
                    p { {room.summary} }
                    ul { class: "room-amenities",
                        for amenity in room.amenities.iter() {
                            li { {*amenity} }
                        }
                    }
                    div { class: "room-actions",
                        button { class: "btn btn-primary book-room-btn", r#type: "button", "data-room": room.id, "Book Now" }
                        button { class: "close-details-btn", r#type: "button", "data-room": room.id, "Close" }
                    }
                }
            }
        }
    }
}
