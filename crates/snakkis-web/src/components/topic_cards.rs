//! Topic card row — one selectable card per topic.

use dioxus::prelude::*;

use snakkis_core::types::{Topic, TopicTag};

#[derive(Clone, PartialEq, Props)]
pub struct TopicCardsProps {
    topics: Vec<Topic>,
    selected: Option<String>,
    on_select: EventHandler<String>,
}

fn tag_icon(tag: TopicTag) -> &'static str {
    match tag {
        TopicTag::Math => "🧠",
        TopicTag::Nature => "📖",
        TopicTag::Music => "🎵",
    }
}

pub fn TopicCards(props: TopicCardsProps) -> Element {
    rsx! {
        div { class: "topics",
            for topic in &props.topics {
                button {
                    class: if props.selected.as_deref() == Some(topic.id.as_str()) {
                        "topic-card active"
                    } else {
                        "topic-card"
                    },
                    onclick: {
                        let id = topic.id.clone();
                        let on_select = props.on_select.clone();
                        move |_| on_select.call(id.clone())
                    },
                    span { class: "icon {topic.tag}", "{tag_icon(topic.tag)}" }
                    span { class: "label", "{topic.display_name}" }
                }
            }
        }
    }
}
