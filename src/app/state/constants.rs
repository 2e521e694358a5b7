use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
pub(crate) static TRANSCRIPT_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("chat-transcript"));

/// Shown in the chat panel when no document id was supplied.
pub(crate) const CHAT_UNAVAILABLE: &str =
    "Chat is unavailable: start docchat with a document id to enable it.";
pub(crate) const LOADING_LABEL: &str = "Loading...";
