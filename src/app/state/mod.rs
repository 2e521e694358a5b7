mod constants;

use super::messages::Message;
use crate::config::{AppConfig, PanelChoice};
use docchat_core::{
    AccordionGroup, ChatClient, ChatPanel, DocumentSource, PdfDocument, ViewerController,
};
use iced::Task;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) use constants::*;

/// Side panels; only one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Summary,
    Chat,
}

impl Panel {
    pub(crate) const ALL: [Panel; 2] = [Panel::Summary, Panel::Chat];
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Panel::Summary => "Summary",
            Panel::Chat => "Chat",
        };
        write!(f, "{}", label)
    }
}

/// What the command line asked for.
#[derive(Debug, Clone)]
pub struct Launch {
    pub document: String,
    pub document_id: Option<String>,
}

/// Core application state composed of the three controllers.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) source: Option<DocumentSource>,
    pub(super) http: reqwest::Client,
    pub(super) document: Option<Arc<PdfDocument>>,
    pub(super) viewer: ViewerController,
    pub(super) chat: Option<ChatPanel>,
    pub(super) chat_client: Option<ChatClient>,
    pub(super) panels: AccordionGroup<Panel>,
}

impl App {
    pub(super) fn bootstrap(launch: Launch, config: AppConfig) -> (App, Task<Message>) {
        let panels = match config.open_panel {
            PanelChoice::Summary => AccordionGroup::new(Panel::ALL).with_open(Panel::Summary),
            PanelChoice::Chat => AccordionGroup::new(Panel::ALL).with_open(Panel::Chat),
            PanelChoice::None => AccordionGroup::new(Panel::ALL),
        };

        let chat = launch.document_id.map(ChatPanel::new);
        let chat_client = if chat.is_some() {
            match ChatClient::new(&config.backend_url, config.request_timeout()) {
                Ok(client) => Some(client),
                Err(err) => {
                    warn!(backend = %config.backend_url, "Chat backend disabled: {err}");
                    None
                }
            }
        } else {
            info!("No document id supplied; chat panel is not bound");
            None
        };

        let mut app = App {
            config,
            source: None,
            http: reqwest::Client::new(),
            document: None,
            viewer: ViewerController::new(),
            chat,
            chat_client,
            panels,
        };

        let task = match DocumentSource::parse(&launch.document) {
            Ok(source) => {
                app.source = Some(source);
                app.run_effect(super::update::Effect::LoadDocument)
            }
            Err(err) => {
                app.viewer.document_failed(&err);
                Task::none()
            }
        };
        (app, task)
    }

    pub fn title(&self) -> String {
        match &self.document {
            Some(document) => format!("{} - docchat", document.name()),
            None => "docchat".to_string(),
        }
    }
}
