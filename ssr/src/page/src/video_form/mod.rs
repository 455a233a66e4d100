mod advanced;
mod progress;

pub use advanced::{AdvancedFields, AdvancedOptions};
pub use progress::ProgressMonitor;

use component::buttons::HighlightedButton;
use leptos::ev::SubmitEvent;
use leptos::html::Textarea;
use leptos::prelude::*;
use leptos_icons::Icon;
use state::generation::{cancel_generation, GenerationState};
use utils::videogen::{GenerationRequest, VideoGenClient};

/// The submission form: owns the generating flag, the advanced-panel
/// visibility and the active generation identifier (via
/// [`GenerationState`]), and wires a returned identifier into the
/// progress monitor.
#[component]
pub fn VideoForm() -> impl IntoView {
    let client: VideoGenClient = expect_context();
    let gen_state = GenerationState::get();

    let show_advanced = RwSignal::new(false);
    let submit_error = RwSignal::new(None::<String>);
    let fields = AdvancedFields::new();

    let subject_ref = NodeRef::<Textarea>::new();

    let generate_client = client.clone();
    let generate_action: Action<GenerationRequest, ()> =
        Action::new_local(move |request: &GenerationRequest| {
            let request = request.clone();
            let client = generate_client.clone();
            async move {
                match client.generate(&request).await {
                    Ok(id) => gen_state.active_id.set(Some(id)),
                    Err(e) => {
                        leptos::logging::error!("video generation request failed: {e}");
                        submit_error.set(Some(e.to_string()));
                        gen_state.generating.set(false);
                    }
                }
            }
        });

    let cancel_action: Action<(), ()> = Action::new_local(move |&()| {
        let client = client.clone();
        // Local state resets before the remote outcome is known;
        // cancellation is best-effort.
        async move { cancel_generation(gen_state, client.cancel()).await }
    });

    // The browser's required-field check blocks submission with an empty
    // subject before this handler ever runs.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let subject = subject_ref.get().map(|el| el.value()).unwrap_or_default();

        // A new submission supersedes any previous generation.
        gen_state.active_id.set(None);
        submit_error.set(None);
        gen_state.generating.set(true);
        generate_action.dispatch(fields.to_request(subject));
    };

    view! {
        <form on:submit=on_submit class="max-w-3xl mx-auto space-y-8">
            <div class="bg-neutral-900 rounded-lg shadow-sm p-6">
                <label class="block">
                    <span class="block text-neutral-200 font-medium mb-2">"Video Subject"</span>
                    <textarea
                        name="videoSubject"
                        node_ref=subject_ref
                        rows=3
                        required
                        placeholder="Enter your video subject here..."
                        class="w-full rounded-md border border-neutral-800 bg-neutral-950 px-4 py-2 text-white shadow-sm outline-none transition focus:border-pink-400 focus:ring-2 focus:ring-pink-400/20"
                    ></textarea>
                </label>
            </div>

            <div class="flex items-center justify-between">
                <button
                    type="button"
                    on:click=move |_| show_advanced.update(|v| *v = !*v)
                    class="text-neutral-300 hover:text-white font-medium flex items-center gap-2"
                >
                    <span>
                        {move || {
                            if show_advanced.get() {
                                "Hide Advanced Options"
                            } else {
                                "Show Advanced Options"
                            }
                        }}
                    </span>
                    {move || {
                        if show_advanced.get() {
                            view! { <Icon icon=icondata::AiUpOutlined /> }
                        } else {
                            view! { <Icon icon=icondata::AiDownOutlined /> }
                        }
                    }}
                </button>

                // Generate and Cancel share one slot, so no second
                // creation request can be dispatched mid-generation.
                <Show
                    when=move || gen_state.generating.get()
                    fallback=move || {
                        view! {
                            <button
                                type="submit"
                                class="px-6 py-2 rounded-full bg-gradient-to-r from-pink-300 to-pink-500 text-white font-medium transition hover:opacity-90"
                            >
                                "Generate Video"
                            </button>
                        }
                    }
                >
                    <HighlightedButton on_click=move || {
                        cancel_action.dispatch(());
                    }>"Cancel"</HighlightedButton>
                </Show>
            </div>

            <Show when=move || submit_error.get().is_some()>
                <div class="p-3 bg-red-900/20 border border-red-500/30 rounded-lg text-red-400 text-sm">
                    {move || submit_error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || show_advanced.get()>
                <AdvancedOptions fields voices=consts::VOICES />
            </Show>

            {move || {
                gen_state
                    .active_id
                    .get()
                    .map(|id| view! { <ProgressMonitor generation_id=id /> })
            }}
        </form>
    }
}
