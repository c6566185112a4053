use leptos::prelude::*;

use crate::{config::BUILD_YEAR, content::PROFILE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 mt-20 border-t border-gray-200 dark:border-cyan-500/10">
            <div class="container mx-auto px-6 text-center">
                <p class="text-gray-600 dark:text-gray-400">
                    {format!("© {BUILD_YEAR} {}. Tous droits réservés.", PROFILE.name)}
                </p>
            </div>
        </footer>
    }
}
