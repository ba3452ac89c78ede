//! The in-progress post record and its field identities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A blog post being authored.
///
/// Serializes with the same keys the form reports on submit:
/// `title`, `image_url`, `content`, `isPremium`, `isPublished`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPost {
    pub title: String,
    pub image_url: String,
    pub content: String,
    #[serde(rename = "isPremium")]
    pub is_premium: bool,
    #[serde(rename = "isPublished")]
    pub is_published: bool,
}

impl DraftPost {
    /// Current value of a field.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Title => FieldValue::Text(self.title.clone()),
            Field::ImageUrl => FieldValue::Text(self.image_url.clone()),
            Field::Content => FieldValue::Text(self.content.clone()),
            Field::IsPremium => FieldValue::Flag(self.is_premium),
            Field::IsPublished => FieldValue::Flag(self.is_published),
        }
    }

    /// Text of a text field, `None` for the boolean toggles.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => Some(&self.title),
            Field::ImageUrl => Some(&self.image_url),
            Field::Content => Some(&self.content),
            Field::IsPremium | Field::IsPublished => None,
        }
    }

    /// Whether a field holds its empty value.
    ///
    /// Toggles are never considered empty.
    pub fn is_empty(&self, field: Field) -> bool {
        self.text(field).is_some_and(str::is_empty)
    }
}

/// Identifies one of the five draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    ImageUrl,
    Content,
    IsPremium,
    IsPublished,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::ImageUrl,
        Field::Content,
        Field::IsPremium,
        Field::IsPublished,
    ];

    /// Key used for this field in the serialized record.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::ImageUrl => "image_url",
            Field::Content => "content",
            Field::IsPremium => "isPremium",
            Field::IsPublished => "isPublished",
        }
    }

    pub fn is_toggle(self) -> bool {
        matches!(self, Field::IsPremium | Field::IsPublished)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value written into a field from an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}
