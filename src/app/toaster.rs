use leptos::prelude::*;

use super::icons::Glyph;
use crate::{
    content::Icon,
    toast::{Toast, ToastId, ToastQueue, ToastVariant},
};

/// Handle to the page-wide notification queue.
#[derive(Debug, Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    /// Shows `toast` and removes it once its duration has elapsed.
    pub fn notify(self, toast: Toast) {
        let duration = toast.duration;
        let queue = self.0;
        if let Some(id) = queue.try_update(|q| q.push(toast)) {
            set_timeout(move || self.dismiss(id), duration);
        }
    }

    pub fn dismiss(self, id: ToastId) {
        // the queue may already be gone if the page was torn down
        self.0.try_update(|q| q.dismiss(id));
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts(RwSignal::new(ToastQueue::default()));
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <ol
            aria-live="polite"
            class="fixed bottom-0 right-0 z-[100] flex w-full flex-col gap-2 p-4 sm:max-w-sm"
        >
            <For
                each=move || toasts.0.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast toasts /> }
            />
        </ol>
    }
}

#[component]
fn ToastCard(toast: Toast, toasts: Toasts) -> impl IntoView {
    let class = match toast.variant {
        ToastVariant::Success => {
            "border-cyan-500/30 bg-white text-gray-900 dark:bg-[#1a1f3a] dark:text-gray-100"
        }
        ToastVariant::Destructive => "border-red-600 bg-red-600 text-white",
    };
    let id = toast.id;
    view! {
        <li
            role="status"
            class=format!(
                "relative flex items-start justify-between gap-4 rounded-md border p-4 pr-8 shadow-lg {class}",
            )
        >
            <div class="grid gap-1">
                <div class="text-sm font-semibold">{toast.title}</div>
                {toast.description.map(|d| view! { <div class="text-sm opacity-90">{d}</div> })}
            </div>
            <button
                type="button"
                aria-label="Fermer"
                class="absolute right-2 top-2 rounded-md p-1 opacity-70 hover:opacity-100"
                on:click=move |_| toasts.dismiss(id)
            >
                <Glyph icon=Icon::Close />
            </button>
        </li>
    }
}
