use web_sys::Storage;
use yew::prelude::*;

use super::{translate, Language};
use crate::error::{Result, SiteError};

const STORAGE_KEY: &str = "language";

/// What components get from [`use_language`].
#[derive(Clone, PartialEq)]
pub struct LanguageHandle {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl LanguageHandle {
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }

    pub fn toggle(&self) {
        self.set_language.emit(self.language.other());
    }
}

fn storage() -> Result<Storage> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    window
        .local_storage()
        .map_err(|err| SiteError::Storage(format!("{:?}", err)))?
        .ok_or_else(|| SiteError::Storage("not provided by this browser".to_string()))
}

fn load_language() -> Option<Language> {
    let stored = storage().ok()?.get_item(STORAGE_KEY).ok()??;
    Language::from_code(&stored)
}

fn save_language(language: Language) -> Result<()> {
    storage()?
        .set_item(STORAGE_KEY, language.code())
        .map_err(|err| SiteError::Storage(format!("{:?}", err)))
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state(Language::default);

    // Restore the saved choice after mount, like a first client render.
    {
        let language = language.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(saved) = load_language() {
                    language.set(saved);
                }
                || ()
            },
            (),
        );
    }

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            language.set(next);
            if let Err(e) = save_language(next) {
                log::warn!("Failed to persist language: {}", e);
            }
        })
    };

    let handle = LanguageHandle {
        language: *language,
        set_language,
    };

    html! {
        <ContextProvider<LanguageHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<LanguageHandle>>
    }
}

/// Current language and setter. Outside a [`LanguageProvider`] this falls
/// back to English with a setter that only logs.
#[hook]
pub fn use_language() -> LanguageHandle {
    use_context::<LanguageHandle>().unwrap_or_else(|| LanguageHandle {
        language: Language::default(),
        set_language: Callback::from(|_: Language| log::warn!("use_language called outside LanguageProvider")),
    })
}
