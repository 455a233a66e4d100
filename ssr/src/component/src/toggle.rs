use leptos::prelude::*;

/// Labelled checkbox bound to a boolean signal.
#[component]
pub fn Toggle(#[prop(into)] label: String, checked: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 cursor-pointer select-none">
            <input
                type="checkbox"
                class="w-4 h-4 rounded border-neutral-700 bg-neutral-900 text-pink-500 focus:ring-pink-400"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span class="text-sm text-neutral-300">{label}</span>
        </label>
    }
}
