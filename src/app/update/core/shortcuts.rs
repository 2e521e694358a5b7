use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    /// Arrow/Page keys turn pages, `+`/`-` zoom. Chorded keys are left alone.
    pub(super) fn shortcut_message_for_key(key: Key, modifiers: Modifiers) -> Option<Message> {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }
        match key.as_ref() {
            Key::Named(key::Named::ArrowLeft | key::Named::PageUp) => Some(Message::PreviousPage),
            Key::Named(key::Named::ArrowRight | key::Named::PageDown) => Some(Message::NextPage),
            Key::Character("+" | "=") => Some(Message::ZoomIn),
            Key::Character("-" | "_") => Some(Message::ZoomOut),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_and_minus_zoom() {
        assert!(matches!(
            App::shortcut_message_for_key(Key::Character("+".into()), Modifiers::SHIFT),
            Some(Message::ZoomIn)
        ));
        assert!(matches!(
            App::shortcut_message_for_key(Key::Character("-".into()), Modifiers::default()),
            Some(Message::ZoomOut)
        ));
    }

    #[test]
    fn page_keys_navigate() {
        assert!(matches!(
            App::shortcut_message_for_key(Key::Named(key::Named::PageUp), Modifiers::default()),
            Some(Message::PreviousPage)
        ));
        assert!(matches!(
            App::shortcut_message_for_key(
                Key::Named(key::Named::ArrowRight),
                Modifiers::default()
            ),
            Some(Message::NextPage)
        ));
    }

    #[test]
    fn ignores_chorded_and_unbound_keys() {
        assert!(
            App::shortcut_message_for_key(Key::Character("+".into()), Modifiers::CTRL).is_none()
        );
        assert!(
            App::shortcut_message_for_key(Key::Character("q".into()), Modifiers::default())
                .is_none()
        );
    }
}
