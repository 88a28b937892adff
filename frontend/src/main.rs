//! Venue catalog application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use backend::{config::CatalogConfig, server_extra::venues_endpoint::{VENUES_ENDPOINT_PATH, list_venues_endpoint}};
        use dioxus::logger::tracing;
        use dioxus::server::axum;

        let catalog_config = CatalogConfig::from_env();
        tracing::info!("Serving venues from {}", catalog_config.venues_data_path.display());

        Ok(dioxus::server::router(App)
            .route(VENUES_ENDPOINT_PATH, axum::routing::get(list_venues_endpoint).with_state(catalog_config))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    tracing::debug!("{} {} -> {}", method, path, res.status());
                    res
                },
            )))
    });
}
