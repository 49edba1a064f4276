use crate::i18n::picker_labels;
use crate::Screen;
use dioxus::prelude::*;
use media_selection::{Confirmed, MediaSelection, PickerConfig};

/// Full-screen picker; confirmed media goes back to the composer
#[component]
pub fn SelectMediaScreen(
    config: PickerConfig,
    on_navigate: EventHandler<Screen>,
    on_confirm: EventHandler<Confirmed>,
) -> Element {
    let labels = picker_labels();

    rsx! {
        div { style: "height: 100vh;",
            MediaSelection {
                config,
                labels: Some(labels),
                on_next: move |confirmed: Confirmed| {
                    on_confirm.call(confirmed);
                    on_navigate.call(Screen::Compose);
                },
                on_back: move |_| on_navigate.call(Screen::Compose),
                on_error: move |message: String| log::warn!("Picker: {}", message),
            }
        }
    }
}
