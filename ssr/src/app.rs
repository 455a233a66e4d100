use consts::VIDEOGEN_API_URL;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use page::root::RootPage;
use state::generation::GenerationState;
use utils::videogen::VideoGenClient;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-neutral-950">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The backend base URL is resolved once here and threaded through
    // context; components never read it from a global.
    provide_context(VideoGenClient::new(VIDEOGEN_API_URL.clone()));
    provide_context(GenerationState::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/money-printer-leptos-ssr.css" />
        <Title text="MoneyPrinter" />
        <Router>
            <Routes fallback=|| {
                view! { <p class="p-8 text-white">"Page not found."</p> }
            }>
                <Route path=path!("/") view=RootPage />
            </Routes>
        </Router>
    }
}
