use axum::routing::get;
use axum::Router;

const PONG: &str = "pong";

pub fn router() -> Router {
    Router::new().route("/ping", get(|| async { PONG }))
}
