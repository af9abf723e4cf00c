use std::rc::Rc;

use dioxus::prelude::*;
use log::error;
use wasm_bindgen::{JsCast, prelude::Closure};

use stilla_domain::{self as domain, LineKind, Property};
use stilla_web_app::{
    detail::{Action, DetailView},
    page_meta::PageMetadata,
};

use crate::component::{
    element::{CollapsibleSection, FloatingActionButton, Icon, IconText, NotFound, Tag, Title},
    share::ShareDialog,
};

const SCRIPT_SECTION_ID: &str = "script-section";

#[component]
pub fn Exercise(id: domain::ExerciseID) -> Element {
    if domain::catalog::exercise_by_id(id).is_none() {
        return rsx! { NotFound { element: "Övningen" } };
    }
    rsx! {
        // keyed so that all view state resets when the exercise changes
        Detail { key: "{id}", id }
    }
}

#[component]
fn Detail(id: domain::ExerciseID) -> Element {
    let Some(exercise) = domain::catalog::exercise_by_id(id) else {
        return rsx! { NotFound { element: "Övningen" } };
    };
    let view = use_signal(|| DetailView::new(exercise.duration));
    let mut share_dialog_shown = use_signal(|| false);

    use_effect(move || {
        if let Some(page_metadata) = PageMetadata::from_window() {
            page_metadata.set(exercise);
        }
    });
    use_drop(move || {
        if let Some(page_metadata) = PageMetadata::from_window() {
            page_metadata.reset();
        }
    });
    use_keyboard_shortcuts(view);

    let script_mode = view.read().script_mode();
    let lines = domain::parse_instructions(exercise.instructions);

    rsx! {
        main {
            role: "main",
            aria_label: "Detaljer för {exercise.title}",
            {view_header(view, share_dialog_shown)}
            {view_meta(exercise, view)}
            Title { title: "{exercise.title}", x_padding: 2 }
            {view_mode_toggles(view)}
            if !script_mode {
                {view_overview(exercise)}
                {view_why_use(exercise, view)}
                {view_research(exercise, view)}
                {view_facilitation(exercise, view)}
            }
            {view_instructions(&lines, view)}
            if !script_mode {
                {view_when_to_use(exercise, view)}
            }
            if !script_mode && !view.read().script_expanded {
                FloatingActionButton {
                    icon: "file-lines",
                    text: "Visa skript",
                    onclick: move |_| expand_script(view),
                }
            }
            if share_dialog_shown() {
                ShareDialog {
                    id,
                    close_event: move |()| *share_dialog_shown.write() = false,
                }
            }
        }
    }
}

fn view_header(mut view: Signal<DetailView>, mut share_dialog_shown: Signal<bool>) -> Element {
    let has_variable_duration = view.read().has_variable_duration();
    let selected = view.read().selected_duration().to_string();
    let next = view.read().next_duration().to_string();
    let cycle_label =
        format!("Ändra varaktighet. Nuvarande: {selected}. Klicka för att växla till {next}");
    rsx! {
        div {
            class: "field is-grouped is-justify-content-flex-end px-4",
            if has_variable_duration {
                button {
                    class: "button is-small",
                    aria_label: cycle_label,
                    onclick: move |_| view.write().cycle_duration(),
                    IconText { icon: "clock", text: "{selected}" }
                }
            }
            button {
                class: "button is-small",
                aria_label: "Dela övning",
                title: "Dela övning",
                onclick: move |_| *share_dialog_shown.write() = true,
                Icon { name: "share-nodes" }
            }
        }
    }
}

fn view_meta(exercise: &'static domain::Exercise, view: Signal<DetailView>) -> Element {
    let selected = view.read().selected_duration().to_string();
    let competency = exercise.competency.name();
    rsx! {
        div {
            class: "tags is-centered",
            role: "contentinfo",
            aria_label: "Övningsinformation",
            Tag { text: "⏱️ {selected}" }
            Tag { text: "{competency}" }
        }
    }
}

fn view_mode_toggles(mut view: Signal<DetailView>) -> Element {
    let script_mode = view.read().script_mode();
    let all_expanded = view.read().all_expanded();
    rsx! {
        div {
            class: "field is-grouped is-grouped-centered",
            role: "toolbar",
            aria_label: "Vylägesalternativ",
            button {
                class: "button",
                class: if script_mode { "is-primary" },
                title: "Tryck S för att växla",
                onclick: move |_| view.write().toggle_script_mode(),
                if script_mode {
                    IconText { icon: "clipboard", text: "Detaljerad vy" }
                } else {
                    IconText { icon: "file-lines", text: "Skriptläge" }
                }
            }
            if !script_mode {
                button {
                    class: "button",
                    title: "Tryck E för att växla",
                    onclick: move |_| view.write().toggle_all(),
                    if all_expanded {
                        IconText { icon: "angles-up", text: "Dölj alla" }
                    } else {
                        IconText { icon: "angles-down", text: "Visa alla" }
                    }
                }
            }
        }
    }
}

fn view_overview(exercise: &'static domain::Exercise) -> Element {
    rsx! {
        section {
            class: "block px-2",
            h2 {
                class: "is-size-6 has-text-weight-bold",
                IconText { icon: "bullseye", text: "VAD ÄR DETTA?" }
            }
            p { "{exercise.one_liner}" }
        }
    }
}

fn view_why_use(exercise: &'static domain::Exercise, mut view: Signal<DetailView>) -> Element {
    let items = domain::bulletize(exercise.why_use);
    let as_paragraph = domain::prefers_paragraph(exercise.why_use, &items);
    let expanded = view.read().why_use_expanded;
    let hidden = items.len().saturating_sub(3);
    let visible = if expanded || hidden == 0 {
        items.clone()
    } else {
        items[..3].to_vec()
    };
    rsx! {
        section {
            class: "block px-2",
            h2 {
                class: "is-size-6 has-text-weight-bold",
                IconText { icon: "compass", text: "VARFÖR DENNA ÖVNING?" }
            }
            if as_paragraph {
                p { "{exercise.why_use}" }
            } else {
                ul {
                    for (i, item) in visible.iter().enumerate() {
                        li { key: "{i}", "{item}" }
                    }
                }
                if hidden > 0 {
                    button {
                        class: "button is-small is-ghost",
                        onclick: move |_| {
                            let mut view = view.write();
                            view.why_use_expanded = !view.why_use_expanded;
                        },
                        if expanded {
                            "Visa färre"
                        } else {
                            "Visa {hidden} fler"
                        }
                    }
                }
            }
        }
    }
}

fn view_research(exercise: &'static domain::Exercise, mut view: Signal<DetailView>) -> Element {
    let research = &exercise.research;
    let (source_text, source_url) = domain::split_research_source(research.source);
    let href = source_url.map(|url| {
        if url.starts_with("http") {
            url
        } else {
            format!("https://{url}")
        }
    });
    let level = research.level.to_string();
    rsx! {
        CollapsibleSection {
            title: "FORSKNINGSBAKGRUND",
            icon: "flask",
            expanded: view.read().research_expanded,
            toggle_event: move |_| {
                let mut view = view.write();
                view.research_expanded = !view.research_expanded;
            },
            p {
                class: "has-text-weight-bold",
                "{level} {research.summary}"
            }
            h3 { IconText { icon: "plus", text: "POSITIVA FYND:" } }
            ul {
                for (i, finding) in research.findings.iter().enumerate() {
                    li { key: "{i}", "{finding}" }
                }
            }
            if let Some(limitations) = research.limitations {
                h3 { IconText { icon: "minus", text: "BEGRÄNSNINGAR:" } }
                p { "{limitations}" }
            }
            h3 { IconText { icon: "book", text: "KÄLLA:" } }
            p {
                if let Some(href) = &href {
                    a {
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "{source_text} (öppnas i ny flik)",
                        "{source_text}"
                    }
                } else {
                    "{source_text}"
                }
            }
        }
    }
}

fn view_facilitation(exercise: &'static domain::Exercise, mut view: Signal<DetailView>) -> Element {
    rsx! {
        CollapsibleSection {
            title: "HUR FACILITERA?",
            icon: "chalkboard-user",
            expanded: view.read().facilitation_expanded,
            toggle_event: move |_| {
                let mut view = view.write();
                view.facilitation_expanded = !view.facilitation_expanded;
            },
            h3 { "Förberedelse:" }
            p { "{exercise.facilitation.setup}" }
            h3 { "Tips:" }
            p { "{exercise.facilitation.guidance}" }
        }
    }
}

fn view_instructions(lines: &[domain::ScriptLine<'static>], mut view: Signal<DetailView>) -> Element {
    let script_mode = view.read().script_mode();
    let count = domain::script_line_count(lines);
    let preview = domain::script_preview(lines);
    let has_breathing = lines.iter().any(|line| line.breathing);
    rsx! {
        section {
            id: "{SCRIPT_SECTION_ID}",
            if script_mode {
                div {
                    class: "px-2",
                    if has_breathing {
                        div {
                            class: "has-text-centered my-2",
                            Icon { name: "wind" }
                        }
                    }
                    {view_lines(lines, true)}
                }
            } else {
                CollapsibleSection {
                    title: "SKRIPT",
                    icon: "file-lines",
                    count: format!("{count} rader"),
                    preview,
                    expanded: view.read().script_expanded,
                    toggle_event: move |_| {
                        let mut view = view.write();
                        view.script_expanded = !view.script_expanded;
                    },
                    {view_lines(lines, false)}
                }
            }
        }
    }
}

fn view_lines(lines: &[domain::ScriptLine<'static>], script_mode: bool) -> Element {
    let content_class = if script_mode {
        "content is-size-4"
    } else {
        "content"
    };
    rsx! {
        div {
            class: "{content_class}",
            for (i, line) in lines.iter().enumerate() {
                {view_line(i, line)}
            }
        }
    }
}

fn view_line(index: usize, line: &domain::ScriptLine<'static>) -> Element {
    match line.kind {
        LineKind::TimingCue => rsx! {
            p {
                key: "{index}",
                class: "has-text-info",
                IconText { icon: "pause", text: "{line.text}" }
            }
        },
        LineKind::PractitionerNote => rsx! {
            p {
                key: "{index}",
                class: "has-text-grey has-text-weight-semibold",
                "{line.text}"
            }
        },
        LineKind::Script => rsx! {
            p {
                key: "{index}",
                class: if line.breathing { "has-breathing" },
                "{line.text}"
            }
        },
    }
}

fn view_when_to_use(exercise: &'static domain::Exercise, mut view: Signal<DetailView>) -> Element {
    rsx! {
        CollapsibleSection {
            title: "NÄR ANVÄNDA",
            icon: "lightbulb",
            count: format!("{} scenarier", exercise.when_to_use.len()),
            expanded: view.read().when_to_use_expanded,
            toggle_event: move |_| {
                let mut view = view.write();
                view.when_to_use_expanded = !view.when_to_use_expanded;
            },
            ul {
                for (i, scenario) in exercise.when_to_use.iter().enumerate() {
                    li { key: "{i}", "{scenario}" }
                }
            }
        }
    }
}

fn use_keyboard_shortcuts(view: Signal<DetailView>) {
    let listener = use_hook(|| {
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                if event.ctrl_key() || event.meta_key() || event.alt_key() {
                    return;
                }
                if is_text_input(event.target()) {
                    return;
                }
                let script_mode = view.peek().script_mode();
                if let Some(action) = Action::for_key(&event.key(), script_mode) {
                    event.prevent_default();
                    apply_action(view, action);
                }
            },
        );
        if let Some(window) = web_sys::window() {
            if let Err(err) =
                window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            {
                error!("failed to add keydown listener: {err:?}");
            }
        }
        Rc::new(closure)
    });
    use_drop(move || {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "keydown",
                listener.as_ref().as_ref().unchecked_ref(),
            );
        }
    });
}

fn is_text_input(target: Option<web_sys::EventTarget>) -> bool {
    target.is_some_and(|target| {
        target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
    })
}

fn apply_action(mut view: Signal<DetailView>, action: Action) {
    view.write().apply(action);
    if action == Action::ToggleScript && view.peek().script_expanded {
        scroll_to_script();
    }
}

fn expand_script(mut view: Signal<DetailView>) {
    view.write().script_expanded = true;
    scroll_to_script();
}

fn scroll_to_script() {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(SCRIPT_SECTION_ID))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
