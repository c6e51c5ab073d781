//! Header component — the fixed greeting band.

use dioxus::prelude::*;

use snakkis_core::ui_text;

pub fn Header() -> Element {
    rsx! {
        div { class: "header",
            h1 { "{ui_text::HEADER_TITLE}" }
            span { class: "award", "🏆" }
        }
    }
}
