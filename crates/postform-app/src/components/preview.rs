//! Rendered output shown next to (or instead of) the inputs.

use dioxus::prelude::*;
use postform_core::render_markdown;

/// Draft content rendered as markdown.
#[component]
pub fn MarkdownPreview(content: String) -> Element {
    let html = render_markdown(&content);

    rsx! {
        div {
            class: "draft-markdown",
            dangerous_inner_html: "{html}"
        }
    }
}

/// The draft image, only mounted while previewing.
///
/// While editing, a hint stands in for the image so nothing is fetched for
/// half-typed URLs.
#[component]
pub fn ImagePreview(url: String, previewing: bool) -> Element {
    if !previewing {
        return rsx! {
            p { class: "draft-image-hint", "Click on Preview to see" }
        };
    }

    rsx! {
        div { class: "draft-image-frame",
            img {
                class: "draft-image",
                src: "{url}",
                alt: "preview",
            }
        }
    }
}
