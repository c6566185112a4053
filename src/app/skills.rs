use leptos::prelude::*;

use super::icons::Glyph;
use crate::{
    content::{Icon, SkillCategory, CLOUD_CERTIFICATION, CLOUD_GOALS, CLOUD_PITCH, SKILL_CATEGORIES},
    navigation::Section,
};

#[component]
pub fn CloudSection() -> impl IntoView {
    view! {
        <section id=Section::Cloud.id() class="py-20 px-6">
            <div class="container mx-auto max-w-5xl">
                <div class="text-center mb-12">
                    <span class="inline-block mb-4 px-3 py-1 rounded-full text-xs font-semibold uppercase tracking-wide bg-blue-500/10 text-blue-600 dark:text-blue-400 border border-blue-500/30">
                        "Évolution"
                    </span>
                    <h2 class="text-3xl md:text-4xl font-bold">"Objectif Cloud & DevOps"</h2>
                </div>
                <div class="p-8 md:p-12 rounded-xl border bg-gradient-to-br from-white to-blue-50 border-gray-200 dark:from-[#1a1f3a]/60 dark:to-[#0f1419]/60 dark:border-blue-500/20">
                    <div class="flex flex-col md:flex-row gap-8 items-start">
                        <div class="flex-shrink-0 p-4 rounded-2xl bg-blue-500/10">
                            <Glyph icon=Icon::Cloud class="text-5xl text-blue-500" />
                        </div>
                        <div class="space-y-6">
                            <h3 class="text-2xl font-bold">"La double compétence Dev & Ops"</h3>
                            <p class="leading-relaxed text-gray-600 dark:text-gray-400">{CLOUD_PITCH}</p>
                            <div class="space-y-3">
                                {CLOUD_GOALS
                                    .iter()
                                    .map(|goal| {
                                        view! {
                                            <div class="flex items-start gap-3">
                                                <div class="mt-2 w-2 h-2 rounded-full bg-blue-500 flex-shrink-0"></div>
                                                <p class="text-gray-600 dark:text-gray-400">
                                                    <strong class="text-gray-900 dark:text-white">{goal.label}</strong>
                                                    " "
                                                    {goal.text}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <span class="inline-flex items-center gap-2 px-4 py-2 rounded-full text-sm font-medium bg-orange-500/10 text-orange-600 dark:text-orange-400 border border-orange-500/30">
                                <Glyph icon=Icon::Award />
                                {CLOUD_CERTIFICATION}
                            </span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-6 bg-gray-100/60 dark:bg-[#0f1419]/60">
            <div class="container mx-auto max-w-6xl">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Compétences Techniques"</h2>
                    <p class="text-gray-600 dark:text-gray-400">
                        "Stack complète pour développer des applications modernes et performantes"
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-6">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <SkillCard category=*category /> })
                        .collect_view()}
                </div>
                <div class="mt-10 max-w-3xl mx-auto p-6 text-center rounded-xl border bg-white/80 border-gray-200 dark:bg-[#1a1f3a]/50 dark:border-cyan-500/20">
                    <p class="text-gray-600 dark:text-gray-400">
                        <strong class="text-cyan-600 dark:text-cyan-400">"Profil :"</strong>
                        " En cours de Bachelor SI, "
                        <strong class="text-gray-900 dark:text-white">"Confirmé par la pratique"</strong>
                        " grâce à un projet d'envergure en alternance"
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl border bg-white/80 border-gray-200 dark:bg-[#1a1f3a]/50 dark:border-cyan-500/20 hover:border-cyan-500/50 transition-colors">
            <h3 class="flex items-center gap-2 text-xl font-semibold mb-4 text-cyan-600 dark:text-cyan-400">
                <Glyph icon=category.icon />
                {category.title}
            </h3>
            <ul class="space-y-2">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <li class="flex items-center gap-2 p-2 rounded-md text-gray-700 dark:text-gray-300 hover:bg-cyan-500/5">
                                <Glyph icon=skill.icon class="text-cyan-500" />
                                <span>{skill.name}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
