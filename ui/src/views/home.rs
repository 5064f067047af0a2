use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Stridelog" }
            p { "Track workouts, body measurements, and milestones in one place." }
            p {
                "Log sessions as you go, watch your trends build up, and share a "
                "filtered window of your progress with a friend when you're ready."
            }

            ul { class: "page-home__features",
                li { "Exercises with per-type metrics: distance, duration, sets, reps" }
                li { "Body measurements with sensible units" }
                li { "Milestone achievements for every discipline" }
            }
            p { class: "page-home__cta",
                "Head to the share view to pick a date range and preview exactly what goes out."
            }
        }
    }
}
