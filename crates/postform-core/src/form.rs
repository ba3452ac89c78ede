//! Form state for a draft being edited.
//!
//! Every mutation re-runs the [`Schema`], so `errors` always describes the
//! current values. Submit is only reachable through [`FormState::submit`],
//! which refuses an invalid draft.

use std::collections::BTreeSet;

use crate::config::FormConfig;
use crate::draft::{DraftPost, Field, FieldValue};
use crate::error::{FieldError, PostFormError, ValidationErrors};
use crate::schema::Schema;
use crate::submit::Submission;

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    schema: Schema,
    defaults: DraftPost,
    values: DraftPost,
    touched: BTreeSet<Field>,
    errors: ValidationErrors,
}

impl FormState {
    /// A form with empty text fields and both toggles off.
    pub fn new(config: FormConfig) -> Self {
        Self::with_values(config, DraftPost::default())
    }

    /// A form whose defaults (and starting values) are `defaults`.
    pub fn with_values(config: FormConfig, defaults: DraftPost) -> Self {
        let schema = Schema::new(config);
        let errors = schema.validate(&defaults).err().unwrap_or_default();
        Self {
            schema,
            values: defaults.clone(),
            defaults,
            touched: BTreeSet::new(),
            errors,
        }
    }

    pub fn values(&self) -> &DraftPost {
        &self.values
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.values.title = title.into();
        self.changed(Field::Title);
    }

    pub fn set_image_url(&mut self, image_url: impl Into<String>) {
        self.values.image_url = image_url.into();
        self.changed(Field::ImageUrl);
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.values.content = content.into();
        self.changed(Field::Content);
    }

    pub fn set_premium(&mut self, is_premium: bool) {
        self.values.is_premium = is_premium;
        self.changed(Field::IsPremium);
    }

    pub fn set_published(&mut self, is_published: bool) {
        self.values.is_published = is_published;
        self.changed(Field::IsPublished);
    }

    /// Write `value` into `field`.
    ///
    /// A value of the wrong shape for the field is ignored.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        match (field, value) {
            (Field::Title, FieldValue::Text(v)) => self.set_title(v),
            (Field::ImageUrl, FieldValue::Text(v)) => self.set_image_url(v),
            (Field::Content, FieldValue::Text(v)) => self.set_content(v),
            (Field::IsPremium, FieldValue::Flag(v)) => self.set_premium(v),
            (Field::IsPublished, FieldValue::Flag(v)) => self.set_published(v),
            (field, value) => {
                tracing::warn!("ignoring {:?} written to {}", value, field);
            }
        }
    }

    /// Mark a field as having lost focus, re-validating like a change does.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate();
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Whether the field differs from its default.
    pub fn is_dirty(&self, field: Field) -> bool {
        self.values.get(field) != self.defaults.get(field)
    }

    pub fn is_any_dirty(&self) -> bool {
        Field::ALL.into_iter().any(|f| self.is_dirty(f))
    }

    /// The current validation error for a field.
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// The error to show under a field.
    ///
    /// Empty fields stay quiet so a fresh form is not covered in red text,
    /// even though they still keep submit disabled.
    pub fn visible_error(&self, field: Field) -> Option<&FieldError> {
        if self.values.is_empty(field) {
            return None;
        }
        self.error(field)
    }

    /// Restore the defaults and forget which fields were touched.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.touched.clear();
        self.revalidate();
    }

    /// Validate and package the draft for display.
    pub fn submit(&self) -> Result<Submission, PostFormError> {
        self.schema.validate(&self.values)?;
        let submission = Submission::new(self.values.clone())?;
        tracing::info!(
            "draft submitted: premium={} published={}",
            self.values.is_premium,
            self.values.is_published
        );
        Ok(submission)
    }

    fn changed(&mut self, field: Field) {
        self.revalidate();
        tracing::debug!(
            "{} changed, valid={} error={:?}",
            field,
            self.is_valid(),
            self.error(field).map(FieldError::message)
        );
    }

    fn revalidate(&mut self) {
        self.errors = self.schema.validate(&self.values).err().unwrap_or_default();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::default();
        form.set_title("Hi");
        form.set_image_url("https://image.unsplash.com/x.jpg");
        form.set_content("0123456789");
        form
    }

    #[test]
    fn fresh_form_is_invalid_but_quiet() {
        let form = FormState::default();
        assert!(!form.is_valid());
        for field in Field::ALL {
            assert_eq!(form.visible_error(field), None, "{field}");
        }
        assert!(form.error(Field::Title).is_some());
    }

    #[test]
    fn empty_title_shows_nothing_and_blocks_submit() {
        let mut form = filled();
        form.set_title("");
        assert_eq!(form.visible_error(Field::Title), None);
        assert!(form.error(Field::Title).is_some());
        assert!(!form.is_valid());
        assert!(matches!(form.submit(), Err(PostFormError::Invalid(_))));
    }

    #[test]
    fn non_empty_invalid_field_shows_its_error() {
        let mut form = filled();
        form.set_title("H");
        assert_eq!(
            form.visible_error(Field::Title).map(FieldError::message).as_deref(),
            Some("Title must be at least 2 characters.")
        );
    }

    #[test]
    fn foreign_image_host_shows_error_and_blocks_submit() {
        let mut form = filled();
        form.set_image_url("https://example.com/x.jpg");
        assert!(!form.is_valid());
        assert_eq!(
            form.visible_error(Field::ImageUrl).map(FieldError::message).as_deref(),
            Some("Invalid image URL. Please use an image from Unsplash.")
        );
    }

    #[test]
    fn validity_tracks_every_change() {
        let mut form = filled();
        assert!(form.is_valid());
        form.set_content("short");
        assert!(!form.is_valid());
        form.set_content("long enough now");
        assert!(form.is_valid());
    }

    #[test]
    fn toggles_never_affect_validity() {
        let mut form = filled();
        form.set_premium(true);
        form.set_published(true);
        assert!(form.is_valid());
        assert!(form.values().is_premium);
        assert!(form.values().is_published);
    }

    #[test]
    fn set_routes_values_and_ignores_mismatched_shapes() {
        let mut form = FormState::default();
        form.set(Field::Title, "Hello".into());
        form.set(Field::IsPremium, true.into());
        form.set(Field::Content, FieldValue::Flag(true));
        form.set(Field::IsPublished, "yes".into());
        assert_eq!(form.values().title, "Hello");
        assert!(form.values().is_premium);
        assert_eq!(form.values().content, "");
        assert!(!form.values().is_published);
    }

    #[test]
    fn dirty_and_touched_are_tracked_per_field() {
        let mut form = FormState::default();
        assert!(!form.is_any_dirty());
        form.set_title("Hello");
        assert!(form.is_dirty(Field::Title));
        assert!(!form.is_dirty(Field::Content));
        assert!(!form.is_touched(Field::Title));
        form.blur(Field::Title);
        assert!(form.is_touched(Field::Title));

        form.set_title("");
        assert!(!form.is_dirty(Field::Title));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = filled();
        form.blur(Field::Content);
        form.reset();
        assert_eq!(form.values(), &DraftPost::default());
        assert!(!form.is_touched(Field::Content));
        assert!(!form.is_valid());
    }

    #[test]
    fn prefilled_defaults_are_validated() {
        let form = FormState::with_values(
            FormConfig::default(),
            DraftPost {
                title: "Hi".into(),
                image_url: "https://image.unsplash.com/x.jpg".into(),
                content: "0123456789".into(),
                ..DraftPost::default()
            },
        );
        assert!(form.is_valid());
        assert!(!form.is_any_dirty());
    }

    #[test]
    fn submit_carries_the_current_values() {
        let mut form = filled();
        form.set_published(true);
        let submission = form.submit().unwrap();
        assert_eq!(submission.draft(), form.values());
    }
}
