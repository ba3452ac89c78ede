//! Error types for the draft post form

use miette::Diagnostic;

use crate::draft::Field;

/// A single field that failed validation.
///
/// The `Display` output is the message shown under the field.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Title must be at least {min} characters.")]
    #[diagnostic(code(postform::schema::title))]
    TitleTooShort { min: usize },

    /// The image URL could not be parsed at all.
    #[error("Invalid URL")]
    #[diagnostic(code(postform::schema::image_url))]
    MalformedUrl,

    /// The image URL parsed, but its host is not the allowed image host.
    #[error("Invalid image URL. Please use an image from Unsplash.")]
    #[diagnostic(
        code(postform::schema::image_host),
        help("only images served from the allowed image host can be used")
    )]
    DisallowedHost {
        host: Option<String>,
        allowed: String,
    },

    #[error("Content must be at least {min} characters.")]
    #[diagnostic(code(postform::schema::content))]
    ContentTooShort { min: usize },
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldError::TitleTooShort { .. } => Field::Title,
            FieldError::MalformedUrl | FieldError::DisallowedHost { .. } => Field::ImageUrl,
            FieldError::ContentTooShort { .. } => Field::Content,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Every field error produced by one validation pass.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, Default, PartialEq, Eq)]
#[error("{} field(s) failed validation", .errors.len())]
#[diagnostic(code(postform::schema))]
pub struct ValidationErrors {
    #[related]
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Ok when nothing failed, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Main error type for postform operations
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum PostFormError {
    /// Form configuration could not be read
    #[error("invalid form configuration: {0}")]
    #[diagnostic(code(postform::config))]
    Config(String),

    /// Draft could not be serialized for display
    #[error(transparent)]
    #[diagnostic(code(postform::serialize))]
    Serialize(#[from] serde_json::Error),

    /// Draft failed validation
    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] ValidationErrors),
}
