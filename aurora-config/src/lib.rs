//! Editor settings for aurora
//!
//! Display preferences (font, theme, indentation) persisted as a JSON
//! blob in the user's config directory. The session core consumes these
//! read-only; nothing here touches the document/session model.

mod loader;
mod schema;

pub use loader::{load_settings, load_settings_from, save_settings, save_settings_to};
pub use schema::EditorSettings;
