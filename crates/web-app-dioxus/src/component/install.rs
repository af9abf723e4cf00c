use dioxus::prelude::*;
use log::error;

use stilla_web_app as web_app;

use crate::{
    WEB_APP_SERVICE,
    component::element::{Dialog, Icon},
};

/// Suggests installing the app on desktop viewports. Hidden when the app
/// already runs standalone or after the user has dismissed it once (the
/// dismissal is persisted).
#[component]
pub fn DesktopInstallBanner() -> Element {
    let mut dismissed =
        use_resource(|| async { WEB_APP_SERVICE.read().install_banner_dismissed().await });

    let shown = matches!(&*dismissed.read(), Some(Ok(false)))
        && !web_app::install::standalone()
        && web_app::install::desktop_viewport();

    rsx! {
        if shown {
            div {
                class: "notification is-info is-light mb-0",
                role: "note",
                button {
                    class: "delete",
                    aria_label: "Stäng installationsförslaget",
                    onclick: move |_| {
                        spawn(async move {
                            if let Err(err) = WEB_APP_SERVICE.read().dismiss_install_banner().await {
                                error!("failed to store install banner dismissal: {err}");
                            }
                            dismissed.restart();
                        });
                    },
                }
                Icon { name: "circle-down", px: 2 }
                "Den här appen kan installeras på din dator för snabb åtkomst under facilitering."
            }
        }
    }
}

/// Generic install instructions, shown from the navbar install button.
#[component]
pub fn InstallDialog(close_event: EventHandler<MouseEvent>) -> Element {
    rsx! {
        Dialog {
            title: rsx! { "Ladda ned app" },
            close_event: move |evt| close_event.call(evt),
            div {
                class: "block",
                "Appen kan installeras som en fristående app och fungerar sedan utan webbläsarfönster."
            }
            div {
                class: "block",
                ol {
                    li { "Öppna webbläsarens meny." }
                    li { "Välj \"Installera app\" (eller \"Lägg till på hemskärmen\")." }
                    li { "Starta appen från hemskärmen eller programlistan." }
                }
            }
            div {
                class: "field is-grouped is-grouped-centered",
                div {
                    class: "control",
                    button {
                        class: "button is-primary",
                        onclick: move |evt| close_event.call(evt),
                        "Stäng"
                    }
                }
            }
        }
    }
}
