use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use super::{icons::Glyph, toaster::use_toasts};
use crate::{
    config::BACKEND_URL,
    contact::{ContactClient, ContactForm, Field},
    content::{Icon, PROFILE},
    navigation::Section,
};

const CARD: &str = "rounded-xl border bg-white/80 border-gray-200 dark:bg-[#1a1f3a]/50 dark:border-cyan-500/20";
const INPUT: &str = "w-full px-4 py-2 rounded-md border bg-white border-gray-300 text-gray-900 placeholder-gray-400 dark:bg-[#0f1419] dark:border-cyan-500/30 dark:text-gray-100 dark:placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-cyan-500";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 px-6">
            <div class="container mx-auto max-w-4xl space-y-8">
                <div class="text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Restons en Contact"</h2>
                    <p class="text-gray-600 dark:text-gray-400">
                        "Disponible pour discuter de vos projets et opportunités"
                    </p>
                </div>
                <ContactDetails />
                <MessageForm />
            </div>
        </section>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    let row = "flex items-center gap-4 p-4 rounded-lg bg-gray-50 dark:bg-[#0f1419]/60";
    view! {
        <div class=format!("p-8 space-y-4 {CARD}")>
            <div class=row>
                <Glyph icon=Icon::Mail class="text-2xl text-cyan-500" />
                <div>
                    <p class="text-sm text-gray-500">"Email"</p>
                    <a href=PROFILE.mailto() class="font-medium hover:text-cyan-500 transition-colors">
                        {PROFILE.email}
                    </a>
                </div>
            </div>
            <div class=row>
                <Glyph icon=Icon::Phone class="text-2xl text-cyan-500" />
                <div>
                    <p class="text-sm text-gray-500">"Téléphone"</p>
                    <a href=PROFILE.phone_uri class="font-medium hover:text-cyan-500 transition-colors">
                        {PROFILE.phone_display}
                    </a>
                </div>
            </div>
            <div class="pt-4 text-center">
                <p class="mb-4 text-gray-600 dark:text-gray-400">"Retrouvez-moi également sur"</p>
                <div class="flex justify-center gap-4">
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 px-4 py-2 rounded-md bg-gray-100 dark:bg-[#0f1419] hover:text-cyan-500 transition-colors"
                    >
                        <Glyph icon=Icon::Github class="text-xl" />
                        <span>"GitHub"</span>
                    </a>
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 px-4 py-2 rounded-md bg-blue-600 text-white hover:bg-blue-700 transition-colors"
                    >
                        <Glyph icon=Icon::Linkedin class="text-xl" />
                        <span>"LinkedIn"</span>
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let toasts = use_toasts();
    let submitting = move || form.with(|f| f.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = if let Some(payload) = form.try_update(|f| f.begin_submit()).flatten() {
            payload
        } else {
            return;
        };
        spawn_local(async move {
            let client = ContactClient::new(BACKEND_URL);
            let outcome = client.send(&payload).await;
            if let Some(toast) = form.try_update(|f| f.finish(outcome)) {
                toasts.notify(toast);
            }
        });
    };

    view! {
        <div class=format!("p-8 {CARD}")>
            <h3 class="flex items-center gap-2 text-2xl font-bold mb-2">
                <Glyph icon=Icon::Send class="text-cyan-500" />
                "Envoyez-moi un message"
            </h3>
            <p class="mb-6 text-gray-600 dark:text-gray-400">
                "Remplissez le formulaire ci-dessous et je vous répondrai dans les plus brefs délais"
            </p>
            <form on:submit=on_submit class="space-y-4">
                <div class="grid md:grid-cols-2 gap-4">
                    <InputField
                        form
                        field=Field::Name
                        label="Nom complet"
                        input_type="text"
                        placeholder="Votre nom"
                    />
                    <InputField
                        form
                        field=Field::Email
                        label="Email"
                        input_type="email"
                        placeholder="votre.email@exemple.com"
                    />
                </div>
                <div class="space-y-2">
                    <FieldLabel field=Field::Message label="Message" />
                    <textarea
                        id=Field::Message.name()
                        name=Field::Message.name()
                        placeholder="Votre message ici..."
                        required
                        rows="6"
                        class=INPUT
                        prop:value=move || form.with(|f| f.get(Field::Message).to_string())
                        on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    disabled=submitting
                    class="w-full inline-flex items-center justify-center gap-2 px-6 py-3 rounded-md font-medium bg-cyan-500 hover:bg-cyan-600 text-white transition-colors disabled:opacity-60 disabled:cursor-not-allowed"
                >
                    {move || {
                        if submitting() {
                            Either::Left(
                                view! {
                                    <svg
                                        class="animate-spin h-5 w-5"
                                        xmlns="http://www.w3.org/2000/svg"
                                        fill="none"
                                        viewBox="0 0 24 24"
                                    >
                                        <circle
                                            class="opacity-25"
                                            cx="12"
                                            cy="12"
                                            r="10"
                                            stroke="currentColor"
                                            stroke-width="4"
                                        ></circle>
                                        <path
                                            class="opacity-75"
                                            fill="currentColor"
                                            d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
                                        ></path>
                                    </svg>
                                    "Envoi en cours..."
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <Glyph icon=Icon::Send />
                                    "Envoyer le message"
                                },
                            )
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FieldLabel(field: Field, label: &'static str) -> impl IntoView {
    view! {
        <label for=field.name() class="block text-sm font-medium text-gray-700 dark:text-gray-300">
            {label}
            " "
            <span class="text-red-500">"*"</span>
        </label>
    }
}

#[component]
fn InputField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <FieldLabel field label />
            <input
                id=field.name()
                name=field.name()
                type=input_type
                placeholder=placeholder
                required
                class=INPUT
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}
