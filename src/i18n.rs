use dioxus_i18n::prelude::*;
use dioxus_i18n::t;
use media_selection::PickerLabels;

/// Initialize i18n configuration with English as default language
pub fn init_i18n() -> I18nConfig {
    I18nConfig::new(unic_langid::langid!("en-US"))
        .with_locale(Locale::new_static(
            unic_langid::langid!("en-US"),
            include_str!("../locales/en-US.ftl"),
        ))
        .with_locale(Locale::new_static(
            unic_langid::langid!("de-DE"),
            include_str!("../locales/de-DE.ftl"),
        ))
}

/// Picker labels in the active language
pub fn picker_labels() -> PickerLabels {
    PickerLabels {
        title: t!("picker-title"),
        next: t!("picker-next"),
        photo_tab: t!("picker-tab-photo"),
        video_tab: t!("picker-tab-video"),
        loading: t!("picker-loading"),
        empty_photos: t!("picker-empty-photos"),
        empty_videos: t!("picker-empty-videos"),
        permission_denied: t!("picker-permission-denied"),
        load_error: t!("picker-load-error"),
        confirm_error: t!("picker-confirm-error"),
    }
}
