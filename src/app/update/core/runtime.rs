use super::super::super::messages::Message;
use super::super::super::state::{App, PAGE_SCROLL_ID, TRANSCRIPT_SCROLL_ID};
use super::super::Effect;
use docchat_core::{ChatError, PdfDocument, ViewerError};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, RelativeOffset};
use iced::window;
use std::sync::Arc;
use tracing::{info, warn};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadDocument => {
                let Some(source) = self.source.clone() else {
                    warn!("Load requested without a document source");
                    return Task::none();
                };
                let http = self.http.clone();
                info!(%source, "Dispatching document load task");
                Task::perform(
                    async move { PdfDocument::load(&source, &http).await.map(Arc::new) },
                    Message::DocumentLoaded,
                )
            }
            Effect::RenderPage { page, scale } => {
                let Some(document) = self.document.clone() else {
                    return Task::done(Message::PageRendered {
                        page,
                        result: Err(ViewerError::PageRenderFailure {
                            page,
                            reason: "no document loaded".to_string(),
                        }),
                    });
                };
                Task::perform(
                    async move { document.render_page(page, scale).await },
                    move |result| Message::PageRendered { page, result },
                )
            }
            Effect::SendChat { entry, message } => {
                let (Some(chat), Some(client)) = (self.chat.as_ref(), self.chat_client.clone())
                else {
                    return Task::done(Message::ChatReplyReceived {
                        entry,
                        result: Err(ChatError::NetworkFailure(
                            "chat backend is not configured".to_string(),
                        )),
                    });
                };
                let document_id = chat.document_id().to_string();
                Task::perform(
                    async move { client.send(&document_id, &message).await },
                    move |result| Message::ChatReplyReceived { entry, result },
                )
            }
            Effect::ScrollTranscriptToEnd => {
                scrollable::snap_to(TRANSCRIPT_SCROLL_ID.clone(), RelativeOffset::END)
            }
            Effect::ScrollPageToTop => {
                scrollable::snap_to(PAGE_SCROLL_ID.clone(), RelativeOffset::START)
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
