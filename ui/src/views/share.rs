use dioxus::prelude::*;

use crate::share::SharePage;

#[component]
pub fn Share() -> Element {
    rsx! {
        section { class: "page page-share",
            h1 { "Share your progress" }
            p {
                "Choose a date range and a data type, tick the sub-types you want "
                "to include, and check the preview before sending."
            }

            SharePage {}
        }
    }
}
