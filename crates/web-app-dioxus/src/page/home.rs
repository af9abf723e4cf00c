use dioxus::prelude::*;

use stilla_domain::{self as domain, Property};

use crate::{
    Route,
    component::element::Tag,
};

#[component]
pub fn Home(filter: String) -> Element {
    let bucket = domain::DurationBucket::from_key(&filter);
    let exercises = domain::ExerciseFilter { duration: bucket }.exercises();
    let count = exercises.len();

    rsx! {
        {view_filter_bar(bucket)}
        main {
            role: "main",
            aria_label: "Övningslista",
            h2 {
                class: "is-size-6 has-text-weight-bold has-text-grey px-4 py-2",
                "{count} ÖVNINGAR"
            }
            if exercises.is_empty() {
                p {
                    class: "has-text-centered has-text-grey my-6",
                    "Inga övningar i denna kategori"
                }
            }
            for exercise in exercises {
                {view_exercise_card(exercise)}
            }
        }
    }
}

fn view_filter_bar(current: domain::DurationBucket) -> Element {
    rsx! {
        nav {
            class: "field is-grouped px-4",
            role: "navigation",
            aria_label: "Filtrera övningar",
            label {
                class: "label mt-2 mr-2",
                r#for: "duration-filter",
                "Tid:"
            }
            div {
                class: "select",
                select {
                    id: "duration-filter",
                    aria_label: "Filtrera efter varaktighet",
                    onchange: move |event: FormEvent| {
                        navigator().replace(Route::Home { filter: event.value() });
                    },
                    for bucket in domain::DurationBucket::iter() {
                        {view_filter_option(*bucket, current)}
                    }
                }
            }
        }
    }
}

fn view_filter_option(bucket: domain::DurationBucket, current: domain::DurationBucket) -> Element {
    let key = bucket.key();
    let name = bucket.name();
    rsx! {
        option {
            value: "{key}",
            selected: bucket == current,
            "{name}"
        }
    }
}

fn view_exercise_card(exercise: &'static domain::Exercise) -> Element {
    let competency = exercise.competency.name();
    rsx! {
        article {
            div {
                class: "box mx-2 my-3 is-clickable",
                role: "button",
                aria_label: "Öppna {exercise.title}, {exercise.duration}, {competency}",
                onclick: move |_| {
                    navigator().push(Route::Exercise { id: exercise.id });
                },
                div {
                    class: "tags mb-1",
                    Tag { text: "⏱️ {exercise.duration}" }
                }
                h2 { class: "title is-5 mb-1", "{exercise.title}" }
                p { class: "is-size-7 has-text-grey mb-2", "{competency}" }
                p { class: "mb-2", "{exercise.one_liner}" }
                p { class: "has-text-link has-text-weight-bold is-size-7", "Läs mer" }
            }
        }
    }
}
