//! Draft post form app.

use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;
use postform_core::FormConfig;
use std::sync::LazyLock;

pub mod components;

use components::DraftPostForm;

pub static CONFIG: LazyLock<FormConfig> = LazyLock::new(FormConfig::from_env);

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const DRAFT_CSS: Asset = asset!("/assets/styling/draft.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: DRAFT_CSS }
        ToastProvider {
            main { class: "draft-page",
                DraftPostForm {}
            }
        }
    }
}
