//! Platform-agnostic core for the draft post form.
//!
//! Holds the draft model, its validation schema, the form state that tracks
//! edits, the preview layout toggle, and the submit payload. Nothing here
//! depends on a UI framework; `postform-app` drives it from Dioxus signals.

pub mod config;
pub mod draft;
pub mod error;
pub mod form;
pub mod preview;
pub mod render;
pub mod schema;
pub mod submit;

#[cfg(test)]
mod tests;

pub use config::FormConfig;
pub use draft::{DraftPost, Field, FieldValue};
pub use error::{FieldError, PostFormError, ValidationErrors};
pub use form::FormState;
pub use preview::{FieldKind, FieldLayout, ViewMode};
pub use render::render_markdown;
pub use schema::Schema;
pub use submit::{SubmitNotice, Submission};
