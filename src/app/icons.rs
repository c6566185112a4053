use leptos::prelude::*;

use crate::content::Icon;

/// Decorative icon-font glyph.
#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class()) aria-hidden="true"></i> }
}
