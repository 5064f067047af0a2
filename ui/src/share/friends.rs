//! Friend search for picking a share recipient.

use dioxus::prelude::*;
use tracing::warn;

use crate::share::fetch::{self, FriendHit};

#[component]
pub fn FriendSearch() -> Element {
    let mut results = use_signal(Vec::<FriendHit>::new);
    let mut receiver = use_signal(|| None::<i64>);

    let on_search = move |evt: FormEvent| {
        let query = evt.value().trim().to_string();
        results.set(Vec::new());
        receiver.set(None);
        if query.is_empty() {
            return;
        }
        spawn(async move {
            match fetch::search_friends(&query).await {
                Ok(hits) => results.set(hits),
                Err(err) => warn!("friend search failed: {err}"),
            }
        });
    };

    let receiver_value = receiver()
        .map(|id| id.to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "share-friends",
            label { class: "share-filter__field",
                span { "Find a friend" }
                input {
                    r#type: "search",
                    placeholder: "Username",
                    oninput: on_search,
                }
            }

            label { class: "share-filter__field",
                span { "Send to" }
                select {
                    onchange: move |evt: FormEvent| {
                        receiver.set(evt.value().parse().ok());
                    },
                    for hit in results().into_iter() {
                        option { value: "{hit.id}", "{hit.display()}" }
                    }
                }
            }

            input {
                r#type: "hidden",
                name: "receiver_id",
                value: "{receiver_value}",
            }
        }
    }
}
