pub mod character;
pub mod chat_feed;
pub mod header;
pub mod input_bar;
pub mod topic_cards;
