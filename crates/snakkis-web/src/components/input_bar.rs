//! Input bar component — text input + send button.

use dioxus::prelude::*;

use snakkis_core::ui_text;

#[derive(Clone, PartialEq, Props)]
pub struct InputBarProps {
    draft: String,
    on_draft: EventHandler<String>,
    on_send: EventHandler<()>,
}

pub fn InputBar(props: InputBarProps) -> Element {
    rsx! {
        div { class: "input-bar",
            input {
                r#type: "text",
                placeholder: "{ui_text::INPUT_PLACEHOLDER}",
                value: "{props.draft}",
                oninput: move |e| props.on_draft.call(e.value()),
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        props.on_send.call(());
                    }
                },
            }
            button {
                onclick: move |_| props.on_send.call(()),
                "Send"
            }
        }
    }
}
