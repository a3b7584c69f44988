use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;
use crate::config::CONFIG;
use crate::utils::i18n::Language;

#[derive(Clone)]
pub struct UseLanguageHandle {
    pub language: UseStateHandle<Language>,
    pub set_language: Callback<Language>,
}

/// Preferencia guardada o idioma por defecto de CONFIG
pub fn initial_language(saved: Option<&str>, default: Language) -> Language {
    saved.map_or(default, Language::parse_lossy)
}

#[hook]
pub fn use_language() -> UseLanguageHandle {
    let language = use_state(|| {
        let saved = LocalStorage::get::<String>(&CONFIG.language_storage_key).ok();
        initial_language(saved.as_deref(), CONFIG.default_language())
    });

    let set_language = {
        let language = language.clone();
        Callback::from(move |lang: Language| {
            if let Err(e) = LocalStorage::set(&CONFIG.language_storage_key, lang.as_str()) {
                log::warn!("⚠️ [I18N] No se pudo guardar el idioma: {}", e);
            }
            language.set(lang);
        })
    };

    UseLanguageHandle {
        language,
        set_language,
    }
}
