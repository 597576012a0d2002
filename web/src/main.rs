use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use site::views::Page;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Behaviour is attached once the static markup is in the document.
    use_effect(install_behaviour);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Casa Ans Villa" }
        Page {}
    }
}

#[cfg(target_arch = "wasm32")]
fn install_behaviour() {
    if let Err(err) = site::dom::install() {
        tracing::error!(%err, "site behaviour not installed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install_behaviour() {
    tracing::debug!("no browser document; page stays static");
}
