//! Cards for shares already sent or received.

use dioxus::prelude::*;
use serde::Deserialize;

use crate::core::filter::ScopeSelection;
use crate::core::format;
use crate::share::controller::PreviewController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareRole {
    Sent,
    Received,
}

/// A share record as the page context supplies it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShareSummary {
    pub id: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub receiver: String,
    #[serde(default)]
    pub scope: ScopeSelection,
    #[serde(default)]
    pub created_at: String,
}

impl ShareSummary {
    /// The other party: receiver on a sent share, sender on a received one.
    pub fn counterpart(&self, role: ShareRole) -> &str {
        match role {
            ShareRole::Sent => &self.receiver,
            ShareRole::Received => &self.sender,
        }
    }
}

/// Non-empty scope categories with display labels, ready for badges.
pub fn scope_badges(scope: &ScopeSelection) -> Vec<(String, Vec<String>)> {
    let categories = [
        ("exercise_types", &scope.exercise_types),
        ("body_measurement_types", &scope.body_measurement_types),
        ("achievements", &scope.achievements),
    ];

    categories
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(category, items)| {
            (
                format::format_name(category),
                items.iter().map(|item| format::format_name(item)).collect(),
            )
        })
        .collect()
}

#[component]
pub fn SharesPanel(
    title: String,
    role: ShareRole,
    records: Vec<ShareSummary>,
    controller: PreviewController,
) -> Element {
    rsx! {
        section { class: "share-card share-list",
            div { class: "share-card__header",
                h2 { "{title}" }
                if !records.is_empty() {
                    span { class: "share-card__meta", "{records.len()} total" }
                }
            }

            if records.is_empty() {
                p { class: "share-card__placeholder", "Nothing here yet." }
            } else {
                ul { class: "share-list__items",
                    for record in records.into_iter() {
                        {render_share(record, role, controller)}
                    }
                }
            }
        }
    }
}

fn render_share(record: ShareSummary, role: ShareRole, controller: PreviewController) -> Element {
    let counterpart = record.counterpart(role).to_string();
    let badges = scope_badges(&record.scope);
    let created = format::localize_timestamp(&record.created_at);
    let view_href = format!("/share/{}", record.id);
    let delete_id = record.id.clone();

    rsx! {
        li { class: "share-list__item",
            div { class: "share-list__heading",
                h3 { "{counterpart}" }
                div { class: "share-list__actions",
                    a { class: "button button--ghost", href: "{view_href}", "View" }
                    button {
                        r#type: "button",
                        class: "button button--danger",
                        onclick: move |_| controller.delete_share(delete_id.clone()),
                        "Delete"
                    }
                }
            }

            for (category, items) in badges.iter() {
                div { class: "share-list__scope",
                    span { class: "share-list__scope-label", "{category}:" }
                    for item in items.iter() {
                        span { class: "share-list__badge", "{item}" }
                    }
                }
            }

            span { class: "share-list__timestamp", "{created}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterpart_depends_on_the_role() {
        let record = ShareSummary {
            id: "abc".into(),
            sender: "maya".into(),
            receiver: "jo".into(),
            ..ShareSummary::default()
        };
        assert_eq!(record.counterpart(ShareRole::Sent), "jo");
        assert_eq!(record.counterpart(ShareRole::Received), "maya");
    }

    #[test]
    fn scope_badges_skip_empty_categories() {
        let scope = ScopeSelection {
            exercise_types: vec!["RUNNING".into(), "WEIGHTLIFTING".into()],
            body_measurement_types: vec![],
            achievements: vec!["YOGA".into()],
        };

        let badges = scope_badges(&scope);
        assert_eq!(
            badges,
            vec![
                (
                    "Exercise Types".to_string(),
                    vec!["Running".to_string(), "Weightlifting".to_string()]
                ),
                ("Achievements".to_string(), vec!["Yoga".to_string()]),
            ]
        );
    }

    #[test]
    fn empty_scope_has_no_badges() {
        assert!(scope_badges(&ScopeSelection::default()).is_empty());
    }
}
