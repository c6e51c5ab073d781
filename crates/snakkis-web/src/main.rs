//! snakkis WASM frontend — Dioxus app root.
//!
//! The whole widget is client-local: the conversation state object
//! lives in a signal and the canned reply is a browser timer redeeming
//! its ticket against the current epoch.

mod components;

use dioxus::prelude::*;

use snakkis_core::config::Config;
use snakkis_core::conversation::Conversation;
use snakkis_core::types::{builtin_topics, Topic};
use snakkis_core::ui_text;

fn main() {
    tracing::info!("snakkis frontend starting");
    dioxus::launch(App);
}

fn App() -> Element {
    let config = use_hook(Config::default);
    let topics: Vec<Topic> = use_hook(builtin_topics);
    let mut conversation = use_signal(Conversation::new);

    let reply_delay_ms = config.reply_delay_ms as u32;

    let send = move |_| {
        let ticket = conversation.write().submit();
        if let Some(ticket) = ticket {
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(reply_delay_ms).await;
                // A stale ticket (conversation reset meanwhile) is a no-op.
                conversation.write().deliver_reply(ticket);
            });
        }
    };

    let messages = conversation.read().messages().to_vec();
    let pending = conversation.read().pending_replies();
    let draft = conversation.read().draft().to_string();
    let selected = conversation.read().selected_topic().map(str::to_string);

    rsx! {
        div { id: "main",
            components::character::Character {}

            components::header::Header {}

            components::topic_cards::TopicCards {
                topics: topics.clone(),
                selected,
                on_select: move |id: String| {
                    conversation.write().select_topic(id);
                },
            }

            div { class: "chat-panel",
                components::chat_feed::ChatFeed {
                    messages,
                    pending,
                }

                components::input_bar::InputBar {
                    draft,
                    on_draft: move |text: String| {
                        conversation.write().update_draft(text);
                    },
                    on_send: send,
                }
            }

            div { class: "footer",
                p { "{ui_text::FOOTER_PRIMARY}" }
                p { class: "small", "{ui_text::FOOTER_SECONDARY}" }
            }
        }
    }
}
