use crate::error::AppError;
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;
use media_library::{AssetInfo, MediaType};
use media_selection::{format_duration, Confirmed};

/// One line per attached item: file name followed by size or duration
pub fn attachment_summary(confirmed: &Confirmed) -> Vec<String> {
    match confirmed {
        Confirmed::Images(images) => images.iter().map(describe).collect(),
        Confirmed::Video(video) => vec![describe(video)],
    }
}

fn describe(info: &AssetInfo) -> String {
    match info.media_type() {
        MediaType::Video => format!(
            "{} · {}",
            info.filename(),
            format_duration(info.asset.duration)
        ),
        _ if info.asset.width > 0 && info.asset.height > 0 => format!(
            "{} · {}×{}",
            info.filename(),
            info.asset.width,
            info.asset.height
        ),
        _ => info.filename().to_string(),
    }
}

#[component]
pub fn ComposeScreen(
    attachments: Option<Confirmed>,
    config_warning: Option<String>,
    on_navigate: EventHandler<Screen>,
    on_clear: EventHandler<()>,
) -> Element {
    let mut text = use_signal(String::new);

    let headline = match &attachments {
        Some(Confirmed::Images(images)) => t!("compose-images-attached", count: images.len()),
        Some(Confirmed::Video(_)) => t!("compose-video-attached"),
        None => t!("compose-no-media"),
    };
    let lines = attachments.as_ref().map(attachment_summary).unwrap_or_default();
    let previews: Vec<(String, String)> = match &attachments {
        Some(Confirmed::Images(images)) => images
            .iter()
            .map(|info| (info.id().to_string(), info.asset.uri.clone()))
            .collect(),
        _ => Vec::new(),
    };
    let pick_label = if attachments.is_some() {
        t!("compose-change-media")
    } else {
        t!("compose-add-media")
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",
            h1 { style: "color: #0066cc; text-align: center; margin: 24px 0; font-size: 28px; font-weight: 700;",
                {t!("app-title")}
            }

            if let Some(warning) = config_warning {
                div { style: "background: #fff3cd; color: #856404; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                    "⚠️ {warning}"
                }
            }

            textarea {
                style: "width: 100%; min-height: 120px; padding: 12px; box-sizing: border-box; border: 1px solid #ddd; border-radius: 8px;",
                placeholder: t!("compose-placeholder"),
                value: "{text}",
                oninput: move |e| text.set(e.value()),
            }

            div { style: "background: white; padding: 16px; margin: 16px 0; border-radius: 8px; border: 1px solid #e0e0e0;",
                h2 { style: "margin: 0 0 12px 0; font-size: 16px; color: #333;", "{headline}" }
                if !previews.is_empty() {
                    div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 4px; margin-bottom: 12px;",
                        for (id, uri) in previews {
                            img {
                                key: "{id}",
                                src: "{uri}",
                                style: "width: 100%; aspect-ratio: 1 / 1; object-fit: cover; border-radius: 4px;",
                            }
                        }
                    }
                }
                for (i, line) in lines.into_iter().enumerate() {
                    p { key: "{i}", style: "font-size: 13px; color: #555; margin: 4px 0;", "{line}" }
                }
            }

            div { style: "display: flex; flex-direction: column; gap: 12px;",
                button {
                    style: "padding: 16px; font-size: 16px; background: #0066cc; color: white; border: none; border-radius: 8px; cursor: pointer;",
                    onclick: move |_| on_navigate.call(Screen::SelectMedia),
                    "🖼️ {pick_label}"
                }
                if attachments.is_some() {
                    button {
                        style: "padding: 12px; font-size: 14px; background: #e0e0e0; color: #333; border: none; border-radius: 8px; cursor: pointer;",
                        onclick: move |_| on_clear.call(()),
                        {t!("compose-clear-media")}
                    }
                }
            }
        }
    }
}

/// Message shown when the settings file could not be used
pub fn config_warning(result: &Result<crate::config::AppConfig, AppError>) -> Option<String> {
    result.as_ref().err().map(AppError::user_message)
}
