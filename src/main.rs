#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use bookchat::app::App;
    use bookchat::server::config::ServerConfig;
    use bookchat::server::routes::api_routes;
    use bookchat::server::state::AppState;
    use clap::Parser;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bookchat=info,tower_http=info")),
        )
        .init();

    let leptos_options = leptos::config::LeptosOptions::builder()
        .output_name(std::sync::Arc::<str>::from("bookchat"))
        .site_root(std::sync::Arc::<str>::from(config.site_root.as_str()))
        .site_pkg_dir(std::sync::Arc::<str>::from("pkg"))
        .env(leptos::config::Env::PROD)
        .site_addr(config.site_addr)
        .reload_port(3001)
        .build();
    let addr = leptos_options.site_addr;

    let state = AppState::new(&config, leptos_options.clone())?;
    tracing::info!(backend = %state.backend.base_url(), "proxying to search backend");

    let routes = generate_route_list(App);

    let app = Router::new()
        .merge(api_routes::<AppState>(config.upload_limit))
        .leptos_routes_with_context(
            &state,
            routes,
            {
                let state = state.clone();
                move || bookchat::server::state::provide_server_context(state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || {
                    use bookchat::app::shell;
                    shell(leptos_options.clone())
                }
            },
        )
        .fallback_service(ServeDir::new(leptos_options.site_root.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {}
