//! PDF collaborator used by the viewer.
//!
//! Loading fetches the bytes (HTTP for URLs, the filesystem otherwise) and
//! extracts the text of every page with `pdf-extract`. Rendering lays one
//! page out at a zoom scale: the column count is fixed, so zooming scales the
//! font and page width without reflowing the text.

use crate::error::ViewerError;
use std::any::Any;
use std::fmt;
use std::panic;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Width of a US Letter page in points, the layout width at 100%.
pub const BASE_PAGE_WIDTH: f32 = 612.0;
pub const BASE_FONT_SIZE: f32 = 12.0;
/// Characters per rendered line.
pub const LINE_COLUMNS: usize = 90;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Path(PathBuf),
    Url(reqwest::Url),
}

impl DocumentSource {
    /// Interpret a CLI argument: http(s) URLs are fetched, everything else is
    /// a local path. An empty argument is a load failure.
    pub fn parse(raw: &str) -> Result<Self, ViewerError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ViewerError::DocumentLoadFailure(
                "document location is empty".to_string(),
            ));
        }
        let lowered = raw.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            let url = reqwest::Url::parse(raw).map_err(|err| {
                ViewerError::DocumentLoadFailure(format!("invalid document URL {raw}: {err}"))
            })?;
            return Ok(DocumentSource::Url(url));
        }
        Ok(DocumentSource::Path(PathBuf::from(raw)))
    }

    /// Short name for titles and the summary panel.
    pub fn display_name(&self) -> String {
        match self {
            DocumentSource::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            DocumentSource::Url(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| url.to_string()),
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Path(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// A loaded document: its name and the plain text of each page.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    name: String,
    pages: Vec<String>,
}

/// One page laid out at a given scale.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub page: usize,
    pub scale: f32,
    pub font_size: f32,
    pub width: f32,
    pub lines: Vec<String>,
}

impl PdfDocument {
    pub async fn load(
        source: &DocumentSource,
        http: &reqwest::Client,
    ) -> Result<Self, ViewerError> {
        info!(%source, "Loading document");
        let bytes = match source {
            DocumentSource::Path(path) => tokio::fs::read(path).await.map_err(|err| {
                ViewerError::DocumentLoadFailure(format!("{}: {err}", path.display()))
            })?,
            DocumentSource::Url(url) => fetch_bytes(http, url).await?,
        };
        let name = source.display_name();
        tokio::task::spawn_blocking(move || Self::from_bytes(name, &bytes))
            .await
            .map_err(|err| {
                ViewerError::DocumentLoadFailure(format!("text extraction did not finish: {err}"))
            })?
    }

    /// Extract every page's text. The extractor panics on some documents it
    /// cannot interpret; those panics become load failures.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, ViewerError> {
        let name = name.into();
        let extracted =
            panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));
        let pages = match extracted {
            Ok(Ok(pages)) => pages,
            Ok(Err(err)) => {
                return Err(ViewerError::DocumentLoadFailure(format!("{name}: {err}")));
            }
            Err(payload) => {
                let reason = panic_reason(payload.as_ref());
                warn!(name = %name, "Text extraction panicked: {reason}");
                return Err(ViewerError::DocumentLoadFailure(format!(
                    "{name}: unsupported PDF ({reason})"
                )));
            }
        };
        info!(name = %name, pages = pages.len(), "Extracted document text");
        Ok(Self { name, pages })
    }

    /// Build a document from already extracted page text.
    pub fn from_page_texts(name: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lay out the 1-based `page` at `scale`.
    pub async fn render_page(&self, page: usize, scale: f32) -> Result<RenderedPage, ViewerError> {
        let text = page
            .checked_sub(1)
            .and_then(|idx| self.pages.get(idx))
            .ok_or_else(|| ViewerError::PageRenderFailure {
                page,
                reason: format!("document has {} pages", self.pages.len()),
            })?;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewerError::PageRenderFailure {
                page,
                reason: format!("invalid scale {scale}"),
            });
        }
        let lines = wrap_lines(text, LINE_COLUMNS);
        debug!(page, scale, lines = lines.len(), "Laid out page");
        Ok(RenderedPage {
            page,
            scale,
            font_size: BASE_FONT_SIZE * scale,
            width: BASE_PAGE_WIDTH * scale,
            lines,
        })
    }
}

async fn fetch_bytes(http: &reqwest::Client, url: &reqwest::Url) -> Result<Vec<u8>, ViewerError> {
    let response = http
        .get(url.clone())
        .send()
        .await
        .map_err(|err| ViewerError::DocumentLoadFailure(err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ViewerError::DocumentLoadFailure(format!(
            "{url} returned {status}"
        )));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|err| ViewerError::DocumentLoadFailure(err.to_string()))?;
    Ok(bytes.to_vec())
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Word-wrap `text` to at most `columns` characters per line. Paragraph
/// breaks (blank lines) are kept; words longer than a line are split.
pub fn wrap_lines(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();

    for source_line in text.lines() {
        if source_line.trim().is_empty() {
            if lines.last().is_some_and(|last: &String| !last.is_empty()) {
                lines.push(String::new());
            }
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0usize;
        for word in source_line.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > columns {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(columns);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let word_len = word.len();
            let separator = usize::from(!current.is_empty());
            if current_len + separator + word_len > columns {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word);
            current_len += word_len;
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines
}
