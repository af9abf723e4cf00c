use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::error;

use stilla_domain::{self as domain, Property};
use stilla_web_app::{self as web_app, page_meta::PageMetadata, share::ShareError};

use crate::component::element::{Dialog, IconText, Tag};

const STATUS_RESET_MS: u32 = 2000;

#[derive(Clone, Copy, PartialEq)]
enum ShareStatus {
    Idle,
    LinkCopied,
    MessageCopied,
}

#[component]
pub fn ShareDialog(id: domain::ExerciseID, close_event: EventHandler<()>) -> Element {
    let Some(exercise) = domain::catalog::exercise_by_id(id) else {
        return rsx! {};
    };
    let payload = share_payload(exercise);
    let competency = exercise.competency.name();
    // status value plus a generation counter, so that a second share before
    // the timer elapses restarts it instead of being cut short
    let status = use_signal(|| (ShareStatus::Idle, 0u32));
    let native_share_available = web_app::share::native_share_available();

    let native_payload = payload.clone();
    let colleague_payload = payload.clone();

    rsx! {
        Dialog {
            title: rsx! { "Dela övning" },
            close_event: move |_| close_event.call(()),
            div {
                class: "block",
                p { class: "has-text-weight-bold", "{exercise.title}" }
                div {
                    class: "tags my-1",
                    Tag { text: "⏱️ {exercise.duration}" }
                    Tag { text: "{competency}" }
                }
                p { "{exercise.one_liner}" }
            }
            div {
                class: "buttons",
                role: "group",
                aria_label: "Delningsalternativ",
                if native_share_available {
                    button {
                        class: "button is-fullwidth is-primary is-justify-content-flex-start",
                        onclick: move |_| {
                            let payload = native_payload.clone();
                            spawn(async move {
                                match web_app::share::native_share(&payload).await {
                                    Ok(()) => close_event.call(()),
                                    Err(ShareError::Cancelled) => {}
                                    Err(ShareError::Unavailable(err)) => {
                                        error!("failed to share exercise: {err}");
                                    }
                                }
                            });
                        },
                        IconText { icon: "share-nodes", text: "Dela via..." }
                    }
                }
                button {
                    class: "button is-fullwidth is-justify-content-flex-start",
                    onclick: move |_| {
                        let payload = colleague_payload.clone();
                        spawn(async move {
                            share_with_colleague(&payload, status, close_event).await;
                        });
                    },
                    IconText { icon: "user-group", text: "Dela med en kollega" }
                }
                button {
                    class: "button is-fullwidth is-justify-content-flex-start",
                    aria_live: "polite",
                    onclick: move |_| {
                        let url = payload.url.clone();
                        spawn(async move {
                            match web_app::share::copy_text(&url).await {
                                Ok(()) => show_status(status, ShareStatus::LinkCopied),
                                Err(err) => error!("failed to copy link: {err}"),
                            }
                        });
                    },
                    IconText { icon: "link", text: "Kopiera länk" }
                }
            }
            match status.read().0 {
                ShareStatus::LinkCopied => rsx! {
                    p { class: "has-text-success", "✓ Länk kopierad till urklipp!" }
                },
                ShareStatus::MessageCopied => rsx! {
                    p {
                        class: "has-text-success",
                        "✓ Meddelande kopierat! Klistra in det i ditt meddelandeprogram."
                    }
                },
                ShareStatus::Idle => rsx! {},
            }
        }
    }
}

fn share_payload(exercise: &domain::Exercise) -> domain::SharePayload {
    let (origin, path) = PageMetadata::from_window()
        .map(|meta| (meta.origin().to_string(), meta.path().to_string()))
        .unwrap_or_default();
    domain::SharePayload::new(exercise, &origin, &path)
}

/// Opens the share sheet with the pre-filled colleague message, falling back
/// to copying the message when the share surface is unavailable.
async fn share_with_colleague(
    payload: &domain::SharePayload,
    status: Signal<(ShareStatus, u32)>,
    close_event: EventHandler<()>,
) {
    let title = format!("Dela: {}", payload.title);
    let message = payload.colleague_message();
    match web_app::share::native_share_message(&title, &message).await {
        Ok(()) => close_event.call(()),
        Err(ShareError::Cancelled) => {}
        Err(ShareError::Unavailable(_)) => match web_app::share::copy_text(&message).await {
            Ok(()) => show_status(status, ShareStatus::MessageCopied),
            Err(err) => error!("failed to copy colleague message: {err}"),
        },
    }
}

fn show_status(mut status: Signal<(ShareStatus, u32)>, value: ShareStatus) {
    let generation = {
        let mut status = status.write();
        status.0 = value;
        status.1 = status.1.wrapping_add(1);
        status.1
    };
    spawn(async move {
        TimeoutFuture::new(STATUS_RESET_MS).await;
        let mut status = status.write();
        if status.1 == generation {
            status.0 = ShareStatus::Idle;
        }
    });
}
