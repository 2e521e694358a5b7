use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::DocumentLoaded(result) => self.handle_document_loaded(result, &mut effects),
            Message::PreviousPage => self.handle_previous_page(&mut effects),
            Message::NextPage => self.handle_next_page(&mut effects),
            Message::ZoomIn => self.handle_zoom_in(&mut effects),
            Message::ZoomOut => self.handle_zoom_out(&mut effects),
            Message::PageRendered { page, result } => {
                self.handle_page_rendered(page, result, &mut effects)
            }
            Message::PanelToggled(panel) => self.handle_panel_toggled(panel),
            Message::ChatInputChanged(value) => self.handle_chat_input_changed(value),
            Message::ChatSubmitted => self.handle_chat_submitted(&mut effects),
            Message::ChatReplyReceived { entry, result } => {
                self.handle_chat_reply_received(entry, result)
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = Self::shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Launch, Panel};
    use crate::config::AppConfig;
    use docchat_core::{ChatError, PdfDocument, RenderedPage, ViewerError};
    use iced::keyboard::{Key, Modifiers, key};
    use std::sync::Arc;

    fn build_test_app(document_id: Option<&str>) -> App {
        let launch = Launch {
            document: format!("/tmp/docchat-reducer-test-{}.pdf", std::process::id()),
            document_id: document_id.map(str::to_string),
        };
        let (app, _task) = App::bootstrap(launch, AppConfig::default());
        app
    }

    fn loaded_app(pages: usize) -> App {
        let mut app = build_test_app(Some("3"));
        let document = PdfDocument::from_page_texts(
            "sample.pdf",
            (1..=pages).map(|page| format!("text of page {page}")).collect(),
        );
        let effects = app.reduce(Message::DocumentLoaded(Ok(Arc::new(document))));
        assert_eq!(effects, vec![Effect::RenderPage { page: 1, scale: 1.0 }]);
        app.reduce(Message::PageRendered {
            page: 1,
            result: Ok(page(1, 1.0)),
        });
        app
    }

    fn page(page: usize, scale: f32) -> RenderedPage {
        RenderedPage {
            page,
            scale,
            font_size: 12.0 * scale,
            width: 612.0 * scale,
            lines: vec![format!("text of page {page}")],
        }
    }

    fn sent_entry(effects: &[Effect]) -> docchat_core::EntryId {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::SendChat { entry, .. } => Some(*entry),
                _ => None,
            })
            .expect("send effect")
    }

    #[test]
    fn rapid_navigation_renders_only_latest_page_after_current() {
        let mut app = loaded_app(6);
        assert_eq!(
            app.reduce(Message::NextPage),
            vec![Effect::RenderPage { page: 2, scale: 1.0 }]
        );
        assert!(app.reduce(Message::NextPage).is_empty());
        assert!(app.reduce(Message::NextPage).is_empty());
        assert!(app.reduce(Message::ZoomIn).is_empty());

        let effects = app.reduce(Message::PageRendered {
            page: 2,
            result: Ok(page(2, 1.0)),
        });
        assert!(effects.contains(&Effect::RenderPage {
            page: 4,
            scale: 1.25
        }));

        let effects = app.reduce(Message::PageRendered {
            page: 4,
            result: Ok(page(4, 1.25)),
        });
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::RenderPage { .. }))
        );
        assert_eq!(app.viewer.page_label(), 4);
    }

    #[test]
    fn new_page_scrolls_view_to_top() {
        let mut app = loaded_app(3);
        app.reduce(Message::NextPage);
        let effects = app.reduce(Message::PageRendered {
            page: 2,
            result: Ok(page(2, 1.0)),
        });
        assert!(effects.contains(&Effect::ScrollPageToTop));

        app.reduce(Message::ZoomIn);
        let effects = app.reduce(Message::PageRendered {
            page: 2,
            result: Ok(page(2, 1.25)),
        });
        assert!(!effects.contains(&Effect::ScrollPageToTop));
    }

    #[test]
    fn load_failure_shows_notice() {
        let mut app = build_test_app(None);
        let effects = app.reduce(Message::DocumentLoaded(Err(
            ViewerError::DocumentLoadFailure("bad header".to_string()),
        )));
        assert!(effects.is_empty());
        assert!(!app.viewer.surface().spinner_visible);
        assert!(app.reduce(Message::NextPage).is_empty());
    }

    #[test]
    fn empty_location_fails_at_bootstrap() {
        let launch = Launch {
            document: "  ".to_string(),
            document_id: None,
        };
        let (app, _task) = App::bootstrap(launch, AppConfig::default());
        assert!(app.source.is_none());
        assert!(!app.viewer.is_ready());
        assert!(!app.viewer.surface().spinner_visible);
    }

    #[test]
    fn chat_round_trip_through_reducer() {
        let mut app = build_test_app(Some("3"));
        app.reduce(Message::ChatInputChanged("Hi".to_string()));
        let effects = app.reduce(Message::ChatSubmitted);
        assert_eq!(
            effects
                .iter()
                .filter(|effect| matches!(effect, Effect::ScrollTranscriptToEnd))
                .count(),
            2
        );
        let entry = sent_entry(&effects);

        app.reduce(Message::ChatReplyReceived {
            entry,
            result: Ok("Hello".to_string()),
        });
        let chat = app.chat.as_ref().expect("chat panel");
        let texts: Vec<_> = chat.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Hi", "Hello"]);
    }

    #[test]
    fn chat_error_reply_is_shown_in_transcript() {
        let mut app = build_test_app(Some("3"));
        app.reduce(Message::ChatInputChanged("Hi".to_string()));
        let entry = sent_entry(&app.reduce(Message::ChatSubmitted));
        app.reduce(Message::ChatReplyReceived {
            entry,
            result: Err(ChatError::ServerError("rate limited".to_string())),
        });
        let chat = app.chat.as_ref().expect("chat panel");
        assert_eq!(
            chat.entries()[1].text,
            "Sorry, an error occurred: rate limited"
        );
    }

    #[test]
    fn whitespace_submission_does_nothing() {
        let mut app = build_test_app(Some("3"));
        app.reduce(Message::ChatInputChanged("   ".to_string()));
        assert!(app.reduce(Message::ChatSubmitted).is_empty());
        assert!(app.chat.as_ref().unwrap().entries().is_empty());
    }

    #[test]
    fn without_document_id_chat_is_unbound() {
        let mut app = build_test_app(None);
        assert!(app.chat.is_none());
        app.reduce(Message::ChatInputChanged("Hi".to_string()));
        assert!(app.reduce(Message::ChatSubmitted).is_empty());
    }

    #[test]
    fn panels_are_mutually_exclusive() {
        let mut app = build_test_app(Some("3"));
        assert!(app.panels.is_open(Panel::Chat));
        app.reduce(Message::PanelToggled(Panel::Summary));
        assert!(app.panels.is_open(Panel::Summary));
        assert!(!app.panels.is_open(Panel::Chat));
        app.reduce(Message::PanelToggled(Panel::Chat));
        assert!(!app.panels.is_open(Panel::Summary));
        assert!(app.panels.is_open(Panel::Chat));
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut app = loaded_app(2);
        let effects = app.reduce(Message::KeyPressed {
            key: Key::Named(key::Named::ArrowRight),
            modifiers: Modifiers::default(),
        });
        assert_eq!(effects, vec![Effect::RenderPage { page: 2, scale: 1.0 }]);
    }
}
