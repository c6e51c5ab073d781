//! Chat feed component — displays messages.

use dioxus::prelude::*;

use snakkis_core::types::Message;
use snakkis_core::ui_text;

#[derive(Clone, PartialEq, Props)]
pub struct ChatFeedProps {
    messages: Vec<Message>,
    pending: usize,
}

pub fn ChatFeed(props: ChatFeedProps) -> Element {
    rsx! {
        div { class: "messages",
            for (i, msg) in props.messages.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "msg {msg.origin}",
                    "{msg.text}"
                }
            }
            if props.pending > 0 {
                div { class: "msg bot typing", "{ui_text::TYPING_INDICATOR}" }
            }
            div { id: "chat-bottom" }
        }
    }
}
