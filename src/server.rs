//! Asset and demo server.
//!
//! Serves the embedded console assets at the paths the rendered fragment
//! references, plus a demo page that runs the whole pipeline end to end.
//! Intended for local development; production hosts serve the assets
//! themselves.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::assets::{CONSOLE_CSS, CONSOLE_JS};
use crate::handler::ConsoleHandler;
use crate::hooks::Hooks;
use crate::http::{Request, Response};
use crate::level::Level;
use crate::logger::{Handler, Logger};
use crate::record::Context;

/// Start the asset server on the default address.
pub async fn start_asset_server() -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    start_asset_server_on("127.0.0.1:3030".parse()?).await
}

/// Start the asset server on a specific address.
///
/// Binding to port 0 picks a free port; the actual address is returned,
/// which is what tests use.
pub async fn start_asset_server_on(
    addr: SocketAddr,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    // CORS so a page served by the host application can load the assets
    // from this process during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(demo_handler))
        .route("/css/glimpse.css", get(css_handler))
        .route("/js/glimpse.js", get(js_handler))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("glimpse asset server listening on http://{}", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("asset server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

/// Handler for the stylesheet.
async fn css_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], CONSOLE_CSS)
}

/// Handler for the widget script.
async fn js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        CONSOLE_JS,
    )
}

/// Handler for the demo page: a page rendered through the full pipeline,
/// with the console injected on the way out.
async fn demo_handler() -> impl IntoResponse {
    Html(render_demo_page())
}

fn render_demo_page() -> String {
    let handler = Arc::new(ConsoleHandler::new(Level::Debug));
    let mut hooks = Hooks::new();
    handler.bind(&mut hooks);

    let mut logger = Logger::new("demo");
    logger.push_handler(Arc::clone(&handler) as Arc<dyn Handler>);

    let request = Request::new()
        .query_param("page", "demo")
        .cookie("session", "local-dev")
        .server_param_entry("REQUEST_METHOD", "GET");

    hooks.fire_before_handle(&request);

    logger.debug("demo request received");
    logger.info("rendering demo page");
    let mut context = Context::new();
    context.insert("retries".into(), serde_json::json!(2));
    logger.log(Level::Warning, "upstream slow, retrying", context);

    let mut response = Response::html();
    response.set_body(
        "<!DOCTYPE html>\n<html>\n<head><title>glimpse demo</title></head>\n<body>\n\
         <h1>glimpse demo page</h1>\n\
         <p>Click a tab in the bar below to open the diagnostic console.</p>\n",
    );

    hooks.fire_before_send(&request, &mut response);

    let mut body = response.into_body();
    body.push_str("</body>\n</html>\n");
    body
}
