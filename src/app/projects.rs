use leptos::prelude::*;

use super::icons::Glyph;
use crate::{
    content::{Icon, Project, FEATURED_PROJECT, PROFILE, PROJECTS},
    navigation::Section,
};

const CARD: &str = "rounded-xl border bg-white/80 border-gray-200 dark:bg-[#1a1f3a]/50 dark:border-cyan-500/20";
const MUTED: &str = "text-gray-600 dark:text-gray-400";

#[component]
fn SectionBadge(text: &'static str) -> impl IntoView {
    view! {
        <span class="inline-block mb-4 px-3 py-1 rounded-full text-xs font-semibold uppercase tracking-wide bg-cyan-500/10 text-cyan-600 dark:text-cyan-400 border border-cyan-500/30">
            {text}
        </span>
    }
}

#[component]
pub fn FeaturedProject() -> impl IntoView {
    let project = FEATURED_PROJECT;
    view! {
        <section id=Section::Projects.id() class="py-20 px-6">
            <div class="container mx-auto max-w-5xl">
                <div class="text-center mb-12">
                    <SectionBadge text="Projet Principal" />
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Projet Phare"</h2>
                    <p class=MUTED>"La preuve de ma compétence niveau confirmé"</p>
                </div>
                <article class=format!("relative overflow-hidden shadow-2xl {CARD}")>
                    <div class="absolute -top-24 -right-24 w-64 h-64 rounded-full blur-3xl bg-cyan-500/10"></div>
                    <header class="relative p-8 pb-4">
                        <div class="flex flex-wrap items-center justify-between gap-4">
                            <h3 class="text-2xl md:text-3xl font-bold">{project.title}</h3>
                            <span class="px-3 py-1 rounded-full text-xs font-semibold bg-green-500/10 text-green-600 dark:text-green-400 border border-green-500/30">
                                {project.status}
                            </span>
                        </div>
                        <p class=format!("mt-2 text-lg {MUTED}")>{project.subtitle}</p>
                    </header>
                    <div class="relative p-8 pt-4 space-y-6">
                        <div>
                            <h4 class="text-xl font-semibold mb-3">"Contexte & Enjeux"</h4>
                            <p class=format!("leading-relaxed {MUTED}")>{project.context}</p>
                        </div>
                        <div>
                            <h4 class="text-xl font-semibold mb-3">"Architecture & Responsabilités"</h4>
                            <ul class=format!("space-y-3 list-disc pl-5 {MUTED}")>
                                {project
                                    .responsibilities
                                    .iter()
                                    .map(|r| {
                                        view! {
                                            <li>
                                                <strong class="text-cyan-600 dark:text-cyan-400">
                                                    {r.heading}
                                                </strong>
                                                " "
                                                {r.body}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h4 class="text-lg font-semibold mb-3">"Stack Technique"</h4>
                            <TagList tags=project.stack />
                        </div>
                        <div class="p-4 rounded-lg border-l-4 border-cyan-500 bg-cyan-500/5">
                            <p class=MUTED>"💡 " <strong>"Impact :"</strong> " " {project.impact}</p>
                        </div>
                        <a
                            href=project.brief.href
                            target="_blank"
                            rel="noopener noreferrer"
                            download=project.brief.file_name
                            class="inline-flex items-center gap-2 px-6 py-3 rounded-md font-medium bg-cyan-500 hover:bg-cyan-600 text-white transition-colors"
                        >
                            <Glyph icon=Icon::Download />
                            "Télécharger la fiche de poste"
                        </a>
                    </div>
                </article>
            </div>
        </section>
    }
}

#[component]
fn TagList(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .iter()
                .map(|tag| {
                    view! {
                        <span class="px-3 py-1 text-xs rounded-full bg-cyan-500/10 text-cyan-700 dark:text-cyan-300">
                            {*tag}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn FrontendProjects() -> impl IntoView {
    view! {
        <section class="py-20 px-6 bg-gray-100/60 dark:bg-[#0f1419]/60">
            <div class="container mx-auto max-w-6xl">
                <div class="text-center mb-12">
                    <SectionBadge text="Intégration & UI" />
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Maîtrise Frontend Mentor"</h2>
                    <p class=MUTED>
                        "Capable de transformer n'importe quelle maquette en code propre et maintenable"
                    </p>
                </div>
                <div class=format!("p-6 mb-10 flex gap-4 items-start {CARD}")>
                    <Glyph icon=Icon::Code class="text-3xl text-cyan-500" />
                    <div>
                        <h3 class="text-xl font-semibold mb-2">
                            "Développement de compétences Frontend"
                        </h3>
                        <p class=format!("leading-relaxed {MUTED}")>
                            "Frontend Mentor me permet d'affiner mes compétences en responsive design et architecture modulaire. Chaque projet démontre ma capacité à respecter fidèlement les maquettes avec un code maintenable et performant. Je compte poursuivre ces défis pour rester aligné avec les standards du développement frontend moderne."
                        </p>
                    </div>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PROJECTS.iter().map(|p| view! { <ProjectCard project=*p /> }).collect_view()}
                </div>
                <div class="text-center mt-10">
                    <a
                        href=PROFILE.frontend_mentor
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-6 py-3 rounded-md font-medium border border-cyan-500 text-cyan-600 dark:text-cyan-400 hover:bg-cyan-500/10 transition-colors"
                    >
                        "Voir mon profil Frontend Mentor"
                        <Glyph icon=Icon::ExternalLink />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class=format!(
            "flex flex-col overflow-hidden hover:shadow-lg hover:border-cyan-500/50 transition-all duration-300 {CARD}",
        )>
            {project
                .image
                .map(|src| {
                    view! {
                        <div class="aspect-video overflow-hidden bg-gray-200 dark:bg-[#0f1419]">
                            <img src=src alt=project.title class="w-full h-full object-cover" />
                        </div>
                    }
                })}
            <div class="flex flex-col flex-grow p-6 gap-4">
                <h3 class="text-xl font-semibold">{project.title}</h3>
                <p class=format!("leading-relaxed flex-grow {MUTED}")>{project.description}</p>
                <TagList tags=project.tags />
                <div class="flex gap-3">
                    {project
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center gap-2 px-3 py-1.5 text-sm rounded-md border border-gray-300 dark:border-cyan-500/30 hover:border-cyan-500 hover:text-cyan-500 transition-colors"
                                >
                                    <Glyph icon=link.kind.icon() />
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
