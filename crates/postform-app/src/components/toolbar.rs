//! Header bar for the draft form: preview toggle, flags, and save.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaFloppyDisk, FaPencil, FaRocket, FaStar};
use postform_core::{FormState, ViewMode};

/// Draft toolbar.
///
/// The save button submits the surrounding form and stays disabled until
/// every field is valid.
#[component]
pub fn DraftToolbar(mut form: Signal<FormState>, mut mode: Signal<ViewMode>) -> Element {
    let is_valid = form.read().is_valid();
    let is_premium = form.read().values().is_premium;
    let is_published = form.read().values().is_published;
    let label = mode().toggle_label();

    rsx! {
        div { class: "draft-toolbar",
            div { class: "draft-toolbar-group",
                button {
                    class: "draft-chip",
                    r#type: "button",
                    onclick: move |_| mode.write().toggle(),
                    if mode().is_previewing() {
                        Icon { width: 14, height: 14, fill: "currentColor", icon: FaPencil }
                    } else {
                        Icon { width: 14, height: 14, fill: "currentColor", icon: FaEye }
                    }
                    "{label}"
                }

                FlagSwitch {
                    label: "Premium",
                    checked: is_premium,
                    on_change: move |v| form.write().set_premium(v),
                    Icon { width: 14, height: 14, fill: "currentColor", icon: FaStar }
                }

                FlagSwitch {
                    label: "Publish",
                    checked: is_published,
                    on_change: move |v| form.write().set_published(v),
                    Icon { width: 14, height: 14, fill: "currentColor", icon: FaRocket }
                }
            }

            button {
                class: "draft-save",
                r#type: "submit",
                disabled: !is_valid,
                title: if is_valid { "Save draft" } else { "Fix the highlighted fields to save" },
                Icon { width: 14, height: 14, fill: "currentColor", icon: FaFloppyDisk }
                "Save"
            }
        }
    }
}

/// A labelled on/off switch for one of the draft flags.
#[component]
pub fn FlagSwitch(
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
    children: Element,
) -> Element {
    rsx! {
        label { class: "draft-chip draft-switch",
            {children}
            span { "{label}" }
            input {
                r#type: "checkbox",
                role: "switch",
                aria_checked: if checked { "true" } else { "false" },
                checked,
                onchange: move |e| on_change.call(e.checked()),
            }
        }
    }
}
