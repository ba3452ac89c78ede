//! Components for the draft post form.

mod draft_form;
mod preview;
mod toolbar;

pub use draft_form::DraftPostForm;
pub use preview::{ImagePreview, MarkdownPreview};
pub use toolbar::{DraftToolbar, FlagSwitch};
