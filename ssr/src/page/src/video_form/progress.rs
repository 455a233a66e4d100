use component::buttons::{HighlightedButton, SecondaryButton};
use component::spinner::Spinner;
use leptos::prelude::*;
use utils::videogen::{
    DownloadKind, GenerationId, ProgressSnapshot, VideoGenClient, VideoGenError,
};

/// Polls the backend for one generation until a terminal status and
/// renders the latest snapshot. The component's lifetime is the
/// identifier's lifetime: a new identifier mounts a fresh monitor and the
/// old one cancels its poll token on cleanup.
#[component]
pub fn ProgressMonitor(generation_id: GenerationId) -> impl IntoView {
    let client: VideoGenClient = expect_context();
    let snapshot = RwSignal::new(ProgressSnapshot::starting());
    let download_error = RwSignal::new(None::<String>);

    let id_label = generation_id.to_string();

    #[cfg(feature = "hydrate")]
    {
        use gloo::timers::future::TimeoutFuture;
        use leptos::task::spawn_local;
        use utils::poll::{poll_until_terminal, PollToken};

        let token = PollToken::new();
        on_cleanup({
            let token = token.clone();
            move || token.cancel()
        });

        let poll_client = client.clone();
        spawn_local(async move {
            poll_until_terminal(
                token,
                move || {
                    let client = poll_client.clone();
                    let id = generation_id.clone();
                    async move { client.progress(&id).await }
                },
                || TimeoutFuture::new(consts::PROGRESS_POLL_INTERVAL_MS),
                move |snap| snapshot.set(snap),
                |e| leptos::logging::warn!("progress poll failed: {e}"),
            )
            .await;
        });
    }

    let download_action: Action<DownloadKind, ()> =
        Action::new_local(move |kind: &DownloadKind| {
            let kind = *kind;
            let client = client.clone();
            async move {
                #[cfg(feature = "hydrate")]
                {
                    let url = snapshot
                        .get_untracked()
                        .download_url(kind)
                        .map(str::to_owned);
                    let Some(url) = url else {
                        download_error
                            .set(Some(VideoGenError::MissingUrl(kind).to_string()));
                        return;
                    };

                    let saved = client
                        .fetch_file(&url)
                        .await
                        .map_err(|e| e.to_string())
                        .and_then(|bytes| {
                            utils::web::save_blob(&bytes, kind.mime(), kind.file_name())
                        });
                    match saved {
                        Ok(()) => download_error.set(None),
                        Err(e) => {
                            leptos::logging::error!("failed to download {}: {e}", kind.label());
                            download_error.set(Some(format!(
                                "Failed to download {}. Please try again.",
                                kind.label()
                            )));
                        }
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = (kind, client);
            }
        });

    view! {
        <div class="bg-neutral-900 rounded-lg shadow-sm p-6 space-y-4">
            <div class="h-2 bg-neutral-800 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-pink-300 to-pink-500 transition-all duration-500"
                    style=move || format!("width: {}%", snapshot.get().progress.min(100))
                ></div>
            </div>

            <div class="text-center space-y-2">
                <p class="text-lg font-medium text-white capitalize">
                    {move || snapshot.get().status}
                </p>
                <p class="text-neutral-400">{move || snapshot.get().message}</p>
                <p class="text-neutral-200 font-medium">
                    {move || format!("{}%", snapshot.get().progress)}
                </p>
            </div>

            <Show when=move || !snapshot.get().is_terminal()>
                <div class="flex justify-center">
                    <Spinner />
                </div>
            </Show>

            <Show when=move || snapshot.get().is_completed()>
                <div class="bg-green-900/10 border border-green-900/30 rounded-lg p-4 space-y-4">
                    <div class="text-center">
                        <h3 class="text-green-300 font-medium">"Video Generated Successfully!"</h3>
                        <p class="text-green-400/80 mt-1">"Your files are ready to download"</p>
                    </div>
                    <div class="flex justify-center gap-4">
                        <HighlightedButton on_click=move || {
                            download_action.dispatch(DownloadKind::Video);
                        }>"Download Video"</HighlightedButton>
                        <SecondaryButton on_click=move || {
                            download_action.dispatch(DownloadKind::Script);
                        }>"Download Script"</SecondaryButton>
                    </div>
                </div>
            </Show>

            <Show when=move || snapshot.get().is_error()>
                <div class="bg-red-900/10 border border-red-900/30 rounded-lg p-4 text-center">
                    <h3 class="text-red-300 font-medium">"Error Generating Video"</h3>
                    <p class="text-red-400">{move || snapshot.get().message}</p>
                </div>
            </Show>

            <Show when=move || download_error.get().is_some()>
                <div class="text-center text-red-400 text-sm">
                    {move || download_error.get().unwrap_or_default()}
                </div>
            </Show>

            <p class="text-center text-xs text-neutral-600">{format!("Generation {id_label}")}</p>
        </div>
    }
}
