#[cfg(feature = "ssr")]
async fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use money_printer_web_leptos_ssr::app::{shell, App};
    use money_printer_web_leptos_ssr::fallback::file_and_error_handler;
    use state::server::AppState;

    dotenv::dotenv().ok();
    simple_logger::init_with_level(log::Level::Info)?;

    // Setting get_configuration(None) means we'll be using cargo-leptos's
    // env values; a file such as Some("Cargo.toml") can be passed instead
    // when deploying without the toolchain.
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app_state = AppState {
        leptos_options: leptos_options.clone(),
        routes: routes.clone(),
    };

    let terminate = {
        use tokio::signal;

        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            use tokio::signal;
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        async {
            tokio::select! {
                _ = ctrl_c => {},
                _ = terminate => {},
            }
            log::info!("stopping...");
        }
    };

    let app = Router::new()
        .leptos_routes(&app_state, routes, move || shell(leptos_options.clone()))
        .fallback(file_and_error_handler)
        .with_state(app_state);

    log::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(terminate)
        .await?;

    Ok(())
}

#[cfg(feature = "ssr")]
fn main() {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
        .block_on(async {
            if let Err(e) = main_impl().await {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        });
}

// The cdylib entry point lives in lib.rs; this bin target only exists
// with the ssr feature enabled.
#[cfg(not(feature = "ssr"))]
fn main() {}
