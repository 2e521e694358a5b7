//! Document viewer controller.
//!
//! Tracks the current page, the zoom scale and whether a render is in flight.
//! Navigation and zoom events that arrive while a page is rendering are
//! coalesced through a [`RenderLatch`]: only the latest request is rendered
//! once the current one finishes.

pub mod latch;

use crate::document::RenderedPage;
use crate::error::ViewerError;
use latch::RenderLatch;
use tracing::{debug, error, info, warn};

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 3.0;
pub const SCALE_STEP: f32 = 0.25;
pub const DEFAULT_SCALE: f32 = 1.0;

/// Text that replaces the viewer region when the document cannot be opened.
pub const LOAD_ERROR_NOTICE: &str = "Error: Failed to load PDF document.";

const SCALE_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed { notice: String },
}

/// Work the host must perform for the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEffect {
    Render { page: usize, scale: f32 },
}

/// What the view should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerSurface {
    pub spinner_visible: bool,
    pub canvas_visible: bool,
}

#[derive(Debug, Clone)]
pub struct ViewerController {
    current_page: usize,
    total_pages: usize,
    scale: f32,
    latch: RenderLatch<usize>,
    phase: LoadPhase,
    page_label: usize,
    canvas: Option<RenderedPage>,
}

impl Default for ViewerController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerController {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            scale: DEFAULT_SCALE,
            latch: RenderLatch::new(),
            phase: LoadPhase::Loading,
            page_label: 1,
            canvas: None,
        }
    }

    /// The document opened; render the first page.
    pub fn document_loaded(&mut self, total_pages: usize) -> Option<ViewerEffect> {
        if self.phase != LoadPhase::Loading {
            warn!(total_pages, "Ignoring duplicate document load");
            return None;
        }
        if total_pages == 0 {
            self.document_failed(&ViewerError::DocumentLoadFailure(
                "document has no pages".to_string(),
            ));
            return None;
        }
        self.total_pages = total_pages;
        self.current_page = 1;
        self.phase = LoadPhase::Ready;
        info!(total_pages, "Document ready");
        self.request_render(self.current_page)
    }

    /// The document could not be opened. No further interaction is possible.
    pub fn document_failed(&mut self, err: &ViewerError) {
        error!("Error loading PDF: {err}");
        self.phase = LoadPhase::Failed {
            notice: LOAD_ERROR_NOTICE.to_string(),
        };
    }

    pub fn next_page(&mut self) -> Option<ViewerEffect> {
        self.go_to_page(1)
    }

    pub fn previous_page(&mut self) -> Option<ViewerEffect> {
        self.go_to_page(-1)
    }

    /// Move by `delta` pages. Out-of-range targets are rejected.
    pub fn go_to_page(&mut self, delta: isize) -> Option<ViewerEffect> {
        if !self.is_ready() {
            return None;
        }
        let target = self.current_page.checked_add_signed(delta)?;
        if target < 1 || target > self.total_pages {
            debug!(target, total = self.total_pages, "Page navigation out of range");
            return None;
        }
        self.current_page = target;
        self.request_render(target)
    }

    pub fn zoom_in(&mut self) -> Option<ViewerEffect> {
        self.zoom_by(SCALE_STEP)
    }

    pub fn zoom_out(&mut self) -> Option<ViewerEffect> {
        self.zoom_by(-SCALE_STEP)
    }

    fn zoom_by(&mut self, step: f32) -> Option<ViewerEffect> {
        if !self.is_ready() {
            return None;
        }
        let next = self.scale + step;
        if next > MAX_SCALE + SCALE_EPSILON || next < MIN_SCALE - SCALE_EPSILON {
            debug!(scale = self.scale, step, "Zoom request outside limits");
            return None;
        }
        self.scale = next.clamp(MIN_SCALE, MAX_SCALE);
        debug!(percent = self.zoom_percent(), "Zoom changed");
        self.request_render(self.current_page)
    }

    /// Start rendering `page` now, or park it as the pending target when a
    /// render is already running.
    pub fn request_render(&mut self, page: usize) -> Option<ViewerEffect> {
        match self.latch.request(page) {
            Some(page) => Some(self.begin_render(page)),
            None => {
                debug!(page, "Render in flight; page queued as pending");
                None
            }
        }
    }

    /// A render finished, successfully or not. Starts the pending target if
    /// one arrived in the meantime.
    pub fn render_finished(
        &mut self,
        page: usize,
        result: Result<RenderedPage, ViewerError>,
    ) -> Option<ViewerEffect> {
        if !self.latch.is_in_flight() {
            warn!(page, "Render completion without a render in flight");
            return None;
        }
        match result {
            Ok(rendered) => self.canvas = Some(rendered),
            Err(err) => error!("Error during page rendering: {err}"),
        }
        self.page_label = page;
        self.latch.complete().map(|next| self.begin_render(next))
    }

    fn begin_render(&self, page: usize) -> ViewerEffect {
        debug!(page, scale = self.scale, "Rendering page");
        ViewerEffect::Render {
            page,
            scale: self.scale,
        }
    }

    pub fn surface(&self) -> ViewerSurface {
        match self.phase {
            LoadPhase::Loading => ViewerSurface {
                spinner_visible: true,
                canvas_visible: false,
            },
            LoadPhase::Failed { .. } => ViewerSurface {
                spinner_visible: false,
                canvas_visible: false,
            },
            LoadPhase::Ready => {
                let rendering = self.latch.is_in_flight();
                ViewerSurface {
                    spinner_visible: rendering,
                    canvas_visible: !rendering,
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn is_rendering(&self) -> bool {
        self.latch.is_in_flight()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn pending_page(&self) -> Option<usize> {
        self.latch.pending().copied()
    }

    /// Page number shown next to the page count; updated when a render ends.
    pub fn page_label(&self) -> usize {
        self.page_label
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale < MAX_SCALE - SCALE_EPSILON
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > MIN_SCALE + SCALE_EPSILON
    }

    pub fn can_go_previous(&self) -> bool {
        self.is_ready() && self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.is_ready() && self.current_page < self.total_pages
    }

    pub fn canvas(&self) -> Option<&RenderedPage> {
        self.canvas.as_ref()
    }
}
