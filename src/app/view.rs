use super::messages::Message;
use super::state::{
    App, CHAT_UNAVAILABLE, LOADING_LABEL, PAGE_SCROLL_ID, Panel, TRANSCRIPT_SCROLL_ID,
};
use docchat_core::{ChatEntry, ChatPanel, LoadPhase, RenderedPage, Sender};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, button, column, container, horizontal_space, row, scrollable, text, text_input,
};
use iced::{Color, Element, Font, Length, font};

const SIDE_PANEL_WIDTH: f32 = 360.0;
const PENDING_TEXT_COLOR: Color = Color::from_rgb(0.55, 0.55, 0.55);

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let viewer = column![self.viewer_controls(), self.viewer_region()]
            .spacing(12)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill);

        row![
            container(viewer).width(Length::Fill),
            self.side_panels()
        ]
        .spacing(16)
        .into()
    }

    fn viewer_controls(&self) -> Element<'_, Message> {
        let viewer = &self.viewer;
        let page_label = format!(
            "Page {} of {}",
            viewer.page_label(),
            viewer.total_pages()
        );

        let prev_button = button("Previous")
            .on_press_maybe(viewer.can_go_previous().then_some(Message::PreviousPage));
        let next_button =
            button("Next").on_press_maybe(viewer.can_go_next().then_some(Message::NextPage));

        let zoom_out = button("-").on_press_maybe(
            (viewer.is_ready() && viewer.can_zoom_out()).then_some(Message::ZoomOut),
        );
        let zoom_in = button("+").on_press_maybe(
            (viewer.is_ready() && viewer.can_zoom_in()).then_some(Message::ZoomIn),
        );

        row![
            prev_button,
            next_button,
            text(page_label),
            horizontal_space(),
            zoom_out,
            text(format!("{}%", viewer.zoom_percent())),
            zoom_in,
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
    }

    fn viewer_region(&self) -> Element<'_, Message> {
        if let LoadPhase::Failed { notice } = self.viewer.phase() {
            return centered(text(notice.as_str()));
        }

        let surface = self.viewer.surface();
        if surface.spinner_visible {
            return centered(text(LOADING_LABEL));
        }

        match self.viewer.canvas().filter(|_| surface.canvas_visible) {
            Some(page) => page_canvas(page),
            None => centered(text("")),
        }
    }

    fn side_panels(&self) -> Element<'_, Message> {
        let mut panels: Column<'_, Message> = column![].spacing(8).padding(16);

        for entry in self.panels.panels() {
            let (panel, open) = (entry.key, entry.is_open);
            let marker = if open { "v" } else { ">" };
            panels = panels.push(
                button(text(format!("{marker} {panel}")))
                    .width(Length::Fill)
                    .on_press(Message::PanelToggled(panel)),
            );
            if open {
                let body = match panel {
                    Panel::Summary => self.summary_panel(),
                    Panel::Chat => match &self.chat {
                        Some(chat) => chat_panel(chat),
                        None => text(CHAT_UNAVAILABLE).into(),
                    },
                };
                panels = panels.push(container(body).height(Length::Fill));
            }
        }

        container(panels)
            .width(Length::Fixed(SIDE_PANEL_WIDTH))
            .height(Length::Fill)
            .into()
    }

    fn summary_panel(&self) -> Element<'_, Message> {
        let source = self
            .source
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "(none)".to_string());
        let name = self
            .document
            .as_ref()
            .map(|document| document.name().to_string())
            .unwrap_or_else(|| LOADING_LABEL.to_string());
        let pages = match self.viewer.phase() {
            LoadPhase::Ready => self.viewer.total_pages().to_string(),
            LoadPhase::Loading => "-".to_string(),
            LoadPhase::Failed { .. } => "unavailable".to_string(),
        };

        column![
            text(format!("Document: {name}")),
            text(format!("Source: {source}")),
            text(format!("Pages: {pages}")),
            text(format!("Backend: {}", self.config.backend_url)),
        ]
        .spacing(6)
        .into()
    }
}

fn page_canvas(page: &RenderedPage) -> Element<'_, Message> {
    let lines = page.lines.iter().fold(column![], |column, line| {
        column.push(
            text(line.as_str())
                .size(page.font_size)
                .font(Font::MONOSPACE),
        )
    });

    scrollable(
        container(lines)
            .width(Length::Fixed(page.width))
            .padding(page.font_size),
    )
    .id(PAGE_SCROLL_ID.clone())
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn chat_panel(chat: &ChatPanel) -> Element<'_, Message> {
    let transcript = chat.entries().iter().fold(
        column![].spacing(8).width(Length::Fill),
        |column, entry| {
            let (speaker, align) = match entry.sender {
                Sender::User => ("You", Horizontal::Right),
                Sender::Bot => ("Assistant", Horizontal::Left),
            };
            let mut line = text(format!("{speaker}: {}", entry.text)).font(transcript_font(entry));
            if entry.is_pending {
                line = line.color(PENDING_TEXT_COLOR);
            }
            column.push(container(line).width(Length::Fill).align_x(align))
        },
    );

    let input = text_input("Ask about this document...", chat.input())
        .on_input(Message::ChatInputChanged)
        .on_submit(Message::ChatSubmitted);

    column![
        scrollable(transcript)
            .id(TRANSCRIPT_SCROLL_ID.clone())
            .height(Length::Fill),
        row![input, button("Send").on_press(Message::ChatSubmitted)]
            .spacing(6)
            .align_y(Vertical::Center),
    ]
    .spacing(8)
    .height(Length::Fill)
    .into()
}

/// Placeholders awaiting a reply are set in a light italic face.
fn transcript_font(entry: &ChatEntry) -> Font {
    if entry.is_pending {
        Font {
            style: font::Style::Italic,
            weight: font::Weight::Light,
            ..Font::DEFAULT
        }
    } else {
        Font::DEFAULT
    }
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_placeholder_is_italic_until_resolved() {
        let mut chat = ChatPanel::new("3");
        chat.set_input("Hi".to_string());
        chat.submit();
        let placeholder = chat.entries()[1].clone();
        assert_eq!(transcript_font(&chat.entries()[0]), Font::DEFAULT);
        assert_eq!(transcript_font(&placeholder).style, font::Style::Italic);

        chat.resolve(placeholder.id, Ok("Hello".to_string()));
        assert_eq!(transcript_font(&chat.entries()[1]), Font::DEFAULT);
    }
}
