use leptos::prelude::*;
use leptos_meta::Title;

use crate::video_form::VideoForm;

/// Composition root: static header and footer around the form.
#[component]
pub fn RootPage() -> impl IntoView {
    view! {
        <Title text="MoneyPrinter" />
        <main class="min-h-screen bg-neutral-950 py-12">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center mb-12">
                    <h1 class="text-4xl font-bold text-white mb-4">MoneyPrinter</h1>
                    <p class="text-neutral-400">
                        "This application is intended to automate the creation and uploads of YouTube Shorts."
                    </p>
                </div>

                <VideoForm />

                <footer class="mt-12 text-center text-neutral-500 text-sm">
                    <p>"Videos are generated remotely; keep this tab open while a generation is running."</p>
                </footer>
            </div>
        </main>
    }
}
