#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use log::{debug, error};

use stilla_domain as domain;
use stilla_storage as storage;
use stilla_web_app as web_app;

use component::navbar::Navbar;
use page::{exercise::Exercise, home::Home, not_found::NotFound};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/?:filter")]
    Home { filter: String },
    #[route("/exercise#:id")]
    Exercise { id: domain::ExerciseID },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

static WEB_APP_SERVICE: GlobalSignal<web_app::Service<storage::local_storage::LocalStorage>> =
    Signal::global(|| web_app::Service::new(storage::local_storage::LocalStorage));

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(Arc::new(Mutex::new(storage::local_storage::LocalStorage)));
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        let _ = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(
                    "
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Något gick fel</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        Ett oväntat fel uppstod och appen kan inte fortsätta.
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Ladda om sidan</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                ",
                );
            });
    }));

    use_effect(|| {
        if let Err(err) = web_app::service_worker::post(&web_app::service_worker::Message::UpdateCache)
        {
            debug!("failed to request cache update: {err}");
        }
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4",
            Router::<Route> {},
        }
    }
}
