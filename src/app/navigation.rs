use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::{icons::Glyph, theme::ThemeToggle};
use crate::{
    content::{Icon, PROFILE},
    navigation::{MobileMenu, NavBarStyle, Section},
};

/// Smoothly scrolls the section into view. Returns false when the
/// section isn't on the page.
pub fn scroll_to_section(section: Section) -> bool {
    let el = if let Some(el) = document().get_element_by_id(section.id()) {
        el
    } else {
        log::debug!("no element with id {}", section.id());
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let bar_style = Memo::new(move |_| NavBarStyle::for_offset(scroll_y.get()));
    let menu = RwSignal::new(MobileMenu::default());

    let go_to = move |section: Section| {
        let found = scroll_to_section(section);
        menu.update(|m| m.after_navigation(found));
    };

    let link_class = "text-gray-700 hover:text-cyan-700 dark:text-gray-300 dark:hover:text-cyan-400 transition-colors";

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                bar_style.get().class(),
            )
        }>
            <nav class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <a
                        href=Section::Hero.href()
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to(Section::Hero);
                        }
                        class="text-2xl font-bold text-cyan-600 dark:text-cyan-400 hover:text-cyan-500 transition-colors"
                    >
                        {PROFILE.initials}
                    </a>
                    <div class="hidden md:flex items-center gap-8">
                        {Section::NAV
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| go_to(section)
                                        class=link_class
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center gap-4">
                        <ThemeToggle />
                        <a
                            href=PROFILE.github
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub"
                            class=link_class
                        >
                            <Glyph icon=Icon::Github class="text-xl" />
                        </a>
                        <a
                            href=PROFILE.linkedin
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn"
                            class=link_class
                        >
                            <Glyph icon=Icon::Linkedin class="text-xl" />
                        </a>
                        <button
                            type="button"
                            class="md:hidden p-2 rounded-md hover:bg-gray-200 dark:hover:bg-[#1a1f3a]"
                            aria-label="Menu"
                            aria-expanded=move || menu.get().is_open().to_string()
                            on:click=move |_| menu.update(|m| m.toggle())
                        >
                            {move || {
                                let icon = if menu.get().is_open() { Icon::Close } else { Icon::Menu };
                                view! { <Glyph icon class="text-xl" /> }
                            }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu.get().is_open()>
                    <div class="md:hidden mt-4 flex flex-col gap-4 pb-4">
                        {Section::NAV
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| go_to(section)
                                        class=format!("text-left py-2 {link_class}")
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </nav>
        </header>
    }
}
