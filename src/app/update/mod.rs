use docchat_core::{ChatEffect, EntryId, ViewerEffect};

mod chat;
mod core;
mod navigation;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    LoadDocument,
    RenderPage { page: usize, scale: f32 },
    SendChat { entry: EntryId, message: String },
    ScrollTranscriptToEnd,
    ScrollPageToTop,
}

impl From<ViewerEffect> for Effect {
    fn from(effect: ViewerEffect) -> Self {
        match effect {
            ViewerEffect::Render { page, scale } => Effect::RenderPage { page, scale },
        }
    }
}

impl From<ChatEffect> for Effect {
    fn from(effect: ChatEffect) -> Self {
        match effect {
            ChatEffect::Send { entry, message } => Effect::SendChat { entry, message },
            ChatEffect::ScrollToEnd => Effect::ScrollTranscriptToEnd,
        }
    }
}
