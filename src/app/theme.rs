use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::icons::Glyph;
#[cfg(feature = "hydrate")]
use crate::config::THEME_STORAGE_KEY;
use crate::{content::Icon, theme::Theme};

#[derive(Debug, Clone, Copy)]
struct ThemeContext(RwSignal<Theme>);

/// Creates the page-wide theme signal and shares it with descendants.
pub fn provide_theme() -> RwSignal<Theme> {
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| theme.set(stored.get_untracked()),
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |current, _, _| set_stored.set(*current),
            false,
        );
    }

    Effect::new(move |_| {
        let href = theme.get().favicon_href();
        if let Some(link) = document().get_element_by_id("favicon") {
            if let Err(e) = link.set_attribute("href", href) {
                log::warn!("couldn't update favicon: {e:?}");
            }
        }
    });

    provide_context(ThemeContext(theme));
    theme
}

pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<ThemeContext>().0
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let is_dark = move || theme.get().is_dark();

    view! {
        <button
            type="button"
            role="switch"
            aria-checked=move || is_dark().to_string()
            aria-label="Basculer le thème"
            on:click=move |_| theme.update(|t| *t = t.toggled())
            class="relative inline-flex h-9 w-16 items-center rounded-full transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-cyan-500 bg-gray-200 hover:bg-gray-300 dark:bg-[#1a1f3a] dark:hover:bg-[#252b4a]"
        >
            <span class="sr-only">"Basculer le thème"</span>
            <span class=move || {
                format!(
                    "{} inline-flex h-7 w-7 items-center justify-center rounded-full bg-cyan-500 text-white transition-transform duration-200 shadow-md",
                    if is_dark() { "translate-x-8" } else { "translate-x-1" },
                )
            }>
                {move || {
                    let icon = if is_dark() { Icon::Moon } else { Icon::Sun };
                    view! { <Glyph icon class="text-sm" /> }
                }}
            </span>
        </button>
    }
}
