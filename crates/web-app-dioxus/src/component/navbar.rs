use dioxus::prelude::*;

use stilla_domain as domain;
use stilla_web_app as web_app;

use crate::{
    Route,
    component::{
        element::Icon,
        install::{DesktopInstallBanner, InstallDialog},
    },
};

#[component]
pub fn Navbar() -> Element {
    let mut install_dialog_shown = use_signal(|| false);
    let navigator = use_navigator();

    let page_title = match use_route::<Route>() {
        Route::Home { .. } => "Mindfulnessguiden Verktygslåda".to_string(),
        Route::Exercise { id } => domain::catalog::exercise_by_id(id)
            .map(|e| e.title.to_string())
            .unwrap_or_default(),
        Route::NotFound { .. } => String::new(),
    };
    let go_up_target = match use_route::<Route>() {
        Route::Home { .. } => None,
        Route::Exercise { .. } | Route::NotFound { .. } => Some(Route::Home {
            filter: String::new(),
        }),
    };
    let show_install_button = !web_app::install::standalone();

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            aria_label: "Navigering",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    a {
                        class: "navbar-item is-size-5",
                        class: if go_up_target.is_none() { "has-text-primary" },
                        aria_label: "Tillbaka till övningslistan",
                        Icon {
                            name: "chevron-left",
                            onclick: {
                                let go_up_target = go_up_target.clone();
                                move |_| {
                                    if let Some(go_up_target) = &go_up_target {
                                        navigator.push(go_up_target.clone());
                                    }
                                }
                            },
                        }
                    }
                    div { class: "navbar-item is-size-5", "{page_title}" }
                    div { class: "mx-auto" }
                    if show_install_button {
                        a {
                            class: "navbar-item is-size-5 mx-1",
                            aria_label: "Ladda ned app",
                            onclick: move |_| *install_dialog_shown.write() = true,
                            Icon { name: "download" }
                        }
                    }
                }
            }
        }
        DesktopInstallBanner {}
        if install_dialog_shown() {
            InstallDialog {
                close_event: move |_| *install_dialog_shown.write() = false,
            }
        }
        Outlet::<Route> {}
    }
}
