//! Declarative validation rules for a [`DraftPost`].
//!
//! Each field is checked on its own, so a draft reports at most one error per
//! field no matter how many other fields fail. The toggles always pass.

use url::Url;

use crate::config::FormConfig;
use crate::draft::{DraftPost, Field};
use crate::error::{FieldError, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    config: FormConfig,
}

impl Schema {
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Validate every field of `draft`.
    pub fn validate(&self, draft: &DraftPost) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for field in Field::ALL {
            if let Some(error) = self.validate_field(draft, field) {
                errors.push(error);
            }
        }
        errors.into_result()
    }

    /// Validate a single field, returning its error if it fails.
    pub fn validate_field(&self, draft: &DraftPost, field: Field) -> Option<FieldError> {
        match field {
            Field::Title => {
                let min = self.config.min_title_len;
                (utf16_len(&draft.title) < min).then_some(FieldError::TitleTooShort { min })
            }
            Field::ImageUrl => self.check_image_url(&draft.image_url).err(),
            Field::Content => {
                let min = self.config.min_content_len;
                (utf16_len(&draft.content) < min)
                    .then_some(FieldError::ContentTooShort { min })
            }
            Field::IsPremium | Field::IsPublished => None,
        }
    }

    /// Parse `raw` and require its host to be the allowed image host.
    pub fn check_image_url(&self, raw: &str) -> Result<Url, FieldError> {
        let url = Url::parse(raw).map_err(|_| FieldError::MalformedUrl)?;
        let allowed = self.config.allowed_image_host.as_str();
        match url.host_str() {
            Some(host) if host.eq_ignore_ascii_case(allowed) => Ok(url),
            host => Err(FieldError::DisallowedHost {
                host: host.map(str::to_string),
                allowed: allowed.to_string(),
            }),
        }
    }
}

/// Length as the browser measures it, in UTF-16 code units.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
