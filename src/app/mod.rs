//! Application layer.
//!
//! # Structure
//!
//! - `state` - main coordinator: session state + one handler per message
//! - `styles` - named style tags rendered over the document buffer
//! - `text_ops` - pure text helpers (counts, replace, spell scan)
//! - `document` - file I/O glue
//! - `settings` / `error` - persisted preferences and error taxonomy

pub mod document;
pub mod error;
pub mod messages;
pub mod settings;
pub mod state;
pub mod styles;
pub mod text_ops;

// Re-exports for convenient external access
pub use error::{AppError, Result};
pub use messages::Message;
pub use settings::{AppSettings, FontFamily, Theme};
pub use state::AppState;
