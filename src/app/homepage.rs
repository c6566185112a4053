use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    contact::Contact,
    icons::Glyph,
    navigation::scroll_to_section,
    projects::{FeaturedProject, FrontendProjects},
    skills::{CloudSection, Skills},
};
use crate::{
    content::{Icon, ABOUT, PROFILE},
    navigation::Section,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=PROFILE.role />
        <Hero />
        <About />
        <FeaturedProject />
        <FrontendProjects />
        <CloudSection />
        <Skills />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Hero.id() class="min-h-screen flex items-center justify-center px-6 pt-24">
            <div class="container mx-auto max-w-6xl">
                <div class="flex flex-col md:flex-row items-center gap-12">
                    <div class="flex-shrink-0">
                        <Avatar />
                    </div>
                    <div class="flex-1 text-center md:text-left space-y-6">
                        <span class="inline-block px-4 py-1 rounded-full text-sm font-medium bg-cyan-500/10 text-cyan-600 dark:text-cyan-400 border border-cyan-500/30">
                            {PROFILE.availability}
                        </span>
                        <h1 class="text-5xl md:text-7xl font-bold bg-gradient-to-r from-cyan-500 to-blue-600 bg-clip-text text-transparent">
                            {PROFILE.name}
                        </h1>
                        <h2 class="text-2xl md:text-3xl font-semibold text-gray-700 dark:text-gray-300">
                            {PROFILE.role}
                        </h2>
                        <p class="text-lg leading-relaxed max-w-2xl text-gray-600 dark:text-gray-400">
                            {PROFILE.tagline}
                        </p>
                        <div class="flex flex-wrap items-center justify-center md:justify-start gap-4 pt-2">
                            <button
                                type="button"
                                on:click=move |_| {
                                    scroll_to_section(Section::Projects);
                                }
                                class="px-6 py-3 rounded-md font-medium bg-cyan-500 hover:bg-cyan-600 text-white transition-colors"
                            >
                                "Voir mes projets"
                            </button>
                            <button
                                type="button"
                                on:click=move |_| {
                                    scroll_to_section(Section::Contact);
                                }
                                class="px-6 py-3 rounded-md font-medium border border-cyan-500 text-cyan-600 dark:text-cyan-400 hover:bg-cyan-500/10 transition-colors"
                            >
                                "Me contacter"
                            </button>
                        </div>
                        <div class="flex items-center justify-center md:justify-start gap-2 text-gray-600 dark:text-gray-400">
                            <Glyph icon=Icon::MapPin class="text-cyan-500" />
                            <span>{PROFILE.location}</span>
                        </div>
                    </div>
                </div>
                <div class="hidden md:flex justify-center mt-16 animate-bounce text-gray-500">
                    <Glyph icon=Icon::ArrowDown class="text-2xl" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Avatar() -> impl IntoView {
    view! {
        <div class="relative w-56 h-56 md:w-72 md:h-72 rounded-full p-1 bg-gradient-to-br from-cyan-400 to-blue-600 shadow-2xl shadow-cyan-500/20">
            <img
                src=PROFILE.avatar
                alt=PROFILE.name
                class="w-full h-full rounded-full object-cover bg-gray-200 dark:bg-[#1a1f3a]"
            />
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 px-6">
            <div class="container mx-auto max-w-4xl">
                <h2 class="text-3xl md:text-4xl font-bold mb-12 text-center">"À propos de moi"</h2>
                <div class="p-8 md:p-12 rounded-xl border bg-white/80 border-gray-200 dark:bg-[#1a1f3a]/50 dark:border-cyan-500/20">
                    <div class="space-y-6">
                        {ABOUT
                            .iter()
                            .map(|paragraph| {
                                view! {
                                    <p class="text-lg leading-relaxed text-gray-600 dark:text-gray-400">
                                        {*paragraph}
                                    </p>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
