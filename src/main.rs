use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;
use media_selection::Confirmed;

mod components;
mod config;
mod error;
mod filesystem;
mod i18n;
mod media;

use components::{ComposeScreen, SelectMediaScreen};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("media-post"),
    );

    #[cfg(not(target_os = "android"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Screen navigation for the app
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Compose,
    SelectMedia,
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);

    let loaded = use_hook(|| {
        let result = config::load_config();
        if let Err(e) = &result {
            log::warn!("{}", e);
        }
        let warning = components::config_warning(&result);
        (result.unwrap_or_default(), warning)
    });
    let (app_config, config_warning) = loaded;
    use_context_provider({
        let app_config = app_config.clone();
        move || media::media_source(&app_config)
    });

    let mut current_screen = use_signal(|| Screen::Compose);
    let mut attachments = use_signal(|| None::<Confirmed>);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",
            match current_screen() {
                Screen::Compose => rsx! {
                    ComposeScreen {
                        attachments: attachments(),
                        config_warning: config_warning.clone(),
                        on_navigate: move |s| current_screen.set(s),
                        on_clear: move |_| attachments.set(None),
                    }
                },
                Screen::SelectMedia => rsx! {
                    SelectMediaScreen {
                        config: app_config.picker.clone(),
                        on_navigate: move |s| current_screen.set(s),
                        on_confirm: move |confirmed| attachments.set(Some(confirmed)),
                    }
                },
            }
        }
    }
}
