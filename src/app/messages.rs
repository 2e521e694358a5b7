use super::state::Panel;
use docchat_core::{ChatError, EntryId, PdfDocument, RenderedPage, ViewerError};
use iced::keyboard::{Key, Modifiers};
use std::sync::Arc;

/// Messages emitted by the UI and by completed background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    DocumentLoaded(Result<Arc<PdfDocument>, ViewerError>),
    PreviousPage,
    NextPage,
    ZoomIn,
    ZoomOut,
    PageRendered {
        page: usize,
        result: Result<RenderedPage, ViewerError>,
    },
    PanelToggled(Panel),
    ChatInputChanged(String),
    ChatSubmitted,
    ChatReplyReceived {
        entry: EntryId,
        result: Result<String, ChatError>,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
}
