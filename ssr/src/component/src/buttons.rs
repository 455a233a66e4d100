use leptos::prelude::*;

/// Primary call-to-action button. Renders as `type="button"` so it never
/// submits an enclosing form on its own.
#[component]
pub fn HighlightedButton(
    children: Children,
    on_click: impl Fn() + 'static,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] classes: String,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| on_click()
            disabled=move || disabled.get()
            class=format!(
                "px-6 py-2 rounded-full bg-gradient-to-r from-pink-300 to-pink-500 text-white font-medium transition disabled:opacity-60 disabled:cursor-not-allowed {classes}"
            )
        >
            {children()}
        </button>
    }
}

/// Low-emphasis counterpart of [`HighlightedButton`].
#[component]
pub fn SecondaryButton(
    children: Children,
    on_click: impl Fn() + 'static,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] classes: String,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| on_click()
            disabled=move || disabled.get()
            class=format!(
                "px-6 py-2 rounded-full bg-neutral-800 text-neutral-200 font-medium transition hover:bg-neutral-700 disabled:opacity-60 disabled:cursor-not-allowed {classes}"
            )
        >
            {children()}
        </button>
    }
}
