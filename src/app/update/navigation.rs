use super::super::state::App;
use super::Effect;
use docchat_core::{PdfDocument, RenderedPage, ViewerError};
use std::sync::Arc;
use tracing::info;

impl App {
    pub(super) fn handle_document_loaded(
        &mut self,
        result: Result<Arc<PdfDocument>, ViewerError>,
        effects: &mut Vec<Effect>,
    ) {
        match result {
            Ok(document) => {
                let total_pages = document.page_count();
                info!(name = document.name(), total_pages, "Document loaded");
                self.document = Some(document);
                effects.extend(self.viewer.document_loaded(total_pages).map(Effect::from));
            }
            Err(err) => self.viewer.document_failed(&err),
        }
    }

    pub(super) fn handle_next_page(&mut self, effects: &mut Vec<Effect>) {
        effects.extend(self.viewer.next_page().map(Effect::from));
    }

    pub(super) fn handle_previous_page(&mut self, effects: &mut Vec<Effect>) {
        effects.extend(self.viewer.previous_page().map(Effect::from));
    }

    pub(super) fn handle_zoom_in(&mut self, effects: &mut Vec<Effect>) {
        effects.extend(self.viewer.zoom_in().map(Effect::from));
    }

    pub(super) fn handle_zoom_out(&mut self, effects: &mut Vec<Effect>) {
        effects.extend(self.viewer.zoom_out().map(Effect::from));
    }

    pub(super) fn handle_page_rendered(
        &mut self,
        page: usize,
        result: Result<RenderedPage, ViewerError>,
        effects: &mut Vec<Effect>,
    ) {
        let previous_label = self.viewer.page_label();
        let succeeded = result.is_ok();
        let follow_up = self.viewer.render_finished(page, result);
        if succeeded && page != previous_label {
            effects.push(Effect::ScrollPageToTop);
        }
        effects.extend(follow_up.map(Effect::from));
    }
}
