//! The draft post form.
//!
//! All state lives in a single `Signal<FormState>`; inputs write through it
//! and the rows re-render from it. The preview toggle only swaps layout
//! classes, the values stay where they are.

use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};
use postform_core::{Field, FieldError, FieldKind, FieldLayout, FieldValue, FormState, ViewMode};

use super::preview::{ImagePreview, MarkdownPreview};
use super::toolbar::DraftToolbar;
use crate::CONFIG;

#[component]
pub fn DraftPostForm() -> Element {
    let form = use_signal(|| FormState::new(CONFIG.clone()));
    let mode = use_signal(ViewMode::default);
    let toast = use_toast();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().submit() {
            Ok(submission) => {
                let notice = submission.notice();
                toast.info(notice.title, ToastOptions::new().description(notice.body));
            }
            Err(e) => {
                tracing::warn!("submit rejected: {}", e);
            }
        }
    };

    let values = form.read().values().clone();
    let previewing = mode().is_previewing();

    rsx! {
        form {
            class: "draft-form",
            onsubmit: on_submit,

            DraftToolbar { form, mode }

            FieldRow {
                form,
                mode,
                field: Field::Title,
                kind: FieldKind::Heading,
                placeholder: "title",
                h1 { class: "draft-preview-title", "{values.title}" }
            }

            FieldRow {
                form,
                mode,
                field: Field::ImageUrl,
                kind: FieldKind::Image,
                placeholder: "image url",
                ImagePreview { url: values.image_url.clone(), previewing }
            }

            FieldRow {
                form,
                mode,
                field: Field::Content,
                kind: FieldKind::Body,
                placeholder: "content",
                MarkdownPreview { content: values.content.clone() }
            }
        }
    }
}

/// One text field laid out as an input column and a preview column.
///
/// `children` is the rendered preview for the field.
#[component]
fn FieldRow(
    mut form: Signal<FormState>,
    mode: Signal<ViewMode>,
    field: Field,
    kind: FieldKind,
    placeholder: String,
    children: Element,
) -> Element {
    let layout = FieldLayout::for_mode(mode(), kind);
    let value = form
        .read()
        .values()
        .text(field)
        .unwrap_or_default()
        .to_string();

    let on_input = move |e: FormEvent| form.write().set(field, FieldValue::Text(e.value()));
    let on_blur = move |_: FocusEvent| form.write().blur(field);

    rsx! {
        div { class: "draft-field",
            div { class: "{layout.row}",
                if kind == FieldKind::Body {
                    textarea {
                        class: "{layout.input}",
                        name: field.name(),
                        placeholder: "{placeholder}",
                        value: "{value}",
                        oninput: on_input,
                        onblur: on_blur,
                    }
                } else {
                    input {
                        class: "{layout.input}",
                        r#type: "text",
                        name: field.name(),
                        placeholder: "{placeholder}",
                        value: "{value}",
                        oninput: on_input,
                        onblur: on_blur,
                    }
                }
                div { class: "{layout.preview}", {children} }
            }
            FieldMessage { form, field }
        }
    }
}

/// Validation message under a field, hidden while the field is empty.
#[component]
fn FieldMessage(form: Signal<FormState>, field: Field) -> Element {
    let message = form.read().visible_error(field).map(FieldError::message);

    rsx! {
        if let Some(message) = message {
            p { class: "draft-field-message", role: "alert", "{message}" }
        }
    }
}
