//! Core controllers for the docchat reader.
//!
//! Nothing in here knows about a GUI toolkit. The host application feeds user
//! events into the controllers, runs the effects they hand back (render a
//! page, POST a chat message, scroll the transcript) and reports completions.
//!
//! - `viewer`: page navigation, zoom bounds and render coalescing
//! - `chat`: the chat transcript and its HTTP client
//! - `accordion`: mutually exclusive sibling panels
//! - `document`: the PDF collaborator that loads and lays out pages
//! - `error`: error kinds surfaced by the above

pub mod accordion;
pub mod chat;
pub mod document;
pub mod error;
pub mod viewer;

pub use accordion::{AccordionGroup, AccordionPanel};
pub use chat::client::ChatClient;
pub use chat::{ChatEffect, ChatEntry, ChatPanel, EntryId, Sender};
pub use document::{DocumentSource, PdfDocument, RenderedPage};
pub use error::{ChatError, ViewerError};
pub use viewer::latch::RenderLatch;
pub use viewer::{LoadPhase, ViewerController, ViewerEffect, ViewerSurface};
