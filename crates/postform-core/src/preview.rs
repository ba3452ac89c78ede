//! Edit/preview toggle and the layout classes it selects.
//!
//! The toggle never touches the draft. It only decides, per field row, which
//! of the two columns (input or rendered output) gets the width.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Editing,
    Previewing,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Editing => ViewMode::Previewing,
            ViewMode::Previewing => ViewMode::Editing,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
        tracing::debug!("view mode now {}", self);
    }

    pub fn is_previewing(self) -> bool {
        self == ViewMode::Previewing
    }

    /// Label for the toggle button, naming the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ViewMode::Editing => "Preview",
            ViewMode::Previewing => "Edit",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Editing => f.write_str("editing"),
            ViewMode::Previewing => f.write_str("previewing"),
        }
    }
}

/// Which kind of output a field row previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Title, previewed as a heading.
    Heading,
    /// Image URL, previewed as the image itself.
    Image,
    /// Markdown content, previewed as rendered HTML.
    Body,
}

/// CSS classes for one field row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub row: String,
    pub input: String,
    pub preview: String,
}

impl FieldLayout {
    pub fn for_mode(mode: ViewMode, kind: FieldKind) -> Self {
        let previewing = mode.is_previewing();

        let mut row = vec!["draft-row"];
        row.push(if previewing { "draft-row-single" } else { "draft-row-split" });
        if kind == FieldKind::Body && !previewing {
            row.push("draft-row-tall");
        }

        let mut input = vec!["draft-input"];
        if kind == FieldKind::Body {
            input.push("draft-input-body");
        }
        input.push(if previewing { "draft-input-collapsed" } else { "draft-input-half" });

        let mut preview = vec!["draft-preview"];
        if kind == FieldKind::Body {
            preview.push("draft-preview-scroll");
        }
        preview.push(if previewing { "draft-preview-full" } else { "draft-preview-side" });

        Self {
            row: row.join(" "),
            input: input.join(" "),
            preview: preview.join(" "),
        }
    }
}
