use dioxus::prelude::*;
use strum::Display;

#[allow(dead_code)]
#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "text")]
    Text,
    #[strum(to_string = "link")]
    Link,
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "danger")]
    Danger,
}

#[component]
pub fn CenteredBlock(children: Element) -> Element {
    rsx! {
        div { class: "block has-text-centered", {children} }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2",
            div {
                class: "message-body has-text-dark",
                div {
                    class: "title has-text-danger is-size-4",
                    "{message}"
                }
            }
        }
    }
}

#[component]
pub fn NotFound(element: String) -> Element {
    rsx! {
        ErrorMessage { message: "{element} hittades inte" }
    }
}

#[component]
pub fn Icon(
    name: String,
    is_small: Option<bool>,
    px: Option<u8>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_small.unwrap_or_default() { "is-small" },
            class: if let Some(px) = px { "px-{px}" },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn IconText(
    icon: String,
    text: String,
    color: Option<Color>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon-text",
            class: if let Some(color) = color { "has-text-{color}" },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            Icon { name: icon }
            span { {text} }
        }
    }
}

#[component]
pub fn Title(title: String, class: Option<String>, x_padding: Option<u8>) -> Element {
    rsx! {
        CenteredBlock {
            div {
                class: "container",
                class: if let Some(value) = x_padding { "px-{value}" },
                h1 {
                    class: "title is-5",
                    class: if let Some(c) = &class { "{c}" },
                    "{title}"
                }
            }
        }
    }
}

#[component]
pub fn Tag(text: String, color: Option<Color>) -> Element {
    rsx! {
        span {
            class: "tag",
            class: if let Some(color) = color { "is-{color}" },
            {text}
        }
    }
}

#[component]
pub fn FloatingActionButton(icon: String, text: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "button is-fab is-medium is-link",
            onclick,
            IconText { icon, text }
        }
    }
}

#[component]
pub fn Dialog(
    children: Element,
    title: Option<Element>,
    close_event: EventHandler<MouseEvent>,
    color: Option<Color>,
) -> Element {
    let color = color.unwrap_or(Color::Primary);
    rsx! {
        div {
            class: "modal is-active",
            div {
                class: "modal-background",
                onclick: close_event
            }
            div {
                class: "modal-content",
                div {
                    class: "message is-{color} mx-2",
                    div {
                        class: "message-body has-text-text-bold has-background-scheme-main",
                        if let Some(title) = title {
                            div {
                                class: "title has-text-{color}",
                                {title}
                            }
                        }
                        {children}
                    }
                }
            }
            button {
                aria_label: "close",
                class: "modal-close",
                onclick: close_event,
            }
        }
    }
}

/// Section with a toggle header, an optional item count in the header and an
/// optional one-line preview shown while collapsed.
#[component]
pub fn CollapsibleSection(
    children: Element,
    title: String,
    icon: String,
    count: Option<String>,
    preview: Option<String>,
    expanded: bool,
    toggle_event: EventHandler<MouseEvent>,
) -> Element {
    let heading = match &count {
        Some(count) => format!("{title} ({count})"),
        None => title.clone(),
    };
    let toggle_label = format!("{} {title}", if expanded { "Dölj" } else { "Visa" });
    let chevron = if expanded { "angle-up" } else { "angle-down" };
    rsx! {
        section {
            class: "block",
            button {
                class: "button is-fullwidth is-justify-content-space-between",
                aria_expanded: expanded,
                aria_label: toggle_label,
                onclick: move |evt| toggle_event.call(evt),
                IconText { icon, text: heading }
                Icon { name: "{chevron}" }
            }
            if !expanded {
                if let Some(preview) = &preview {
                    p {
                        class: "is-size-7 has-text-grey px-2 py-1",
                        "{preview}"
                    }
                }
            }
            if expanded {
                div {
                    class: "content px-2 py-2",
                    {children}
                }
            }
        }
    }
}
