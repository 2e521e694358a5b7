use super::super::state::{App, Panel};
use super::Effect;
use docchat_core::{ChatError, EntryId};
use tracing::debug;

impl App {
    pub(super) fn handle_panel_toggled(&mut self, panel: Panel) {
        self.panels.toggle(panel);
    }

    pub(super) fn handle_chat_input_changed(&mut self, value: String) {
        if let Some(chat) = self.chat.as_mut() {
            chat.set_input(value);
        }
    }

    pub(super) fn handle_chat_submitted(&mut self, effects: &mut Vec<Effect>) {
        let Some(chat) = self.chat.as_mut() else {
            debug!("Chat submission ignored; panel is not bound");
            return;
        };
        effects.extend(chat.submit().into_iter().map(Effect::from));
    }

    pub(super) fn handle_chat_reply_received(
        &mut self,
        entry: EntryId,
        result: Result<String, ChatError>,
    ) {
        if let Some(chat) = self.chat.as_mut() {
            chat.resolve(entry, result);
        }
    }
}
