pub mod readings;
pub mod response;

use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, service::AppState};

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new()
        .route("/", get(readings::index))
        .route("/temp", get(readings::indoor_temp))
        .route("/outdoor", get(readings::outdoor_temp))
        .route("/humidity", get(readings::humidity))
        .route("/water", get(readings::water))
        .route("/energy", get(readings::energy))
        .route("/datetime", get(readings::datetime))
        .with_state(state);

    if cfg.server.enable_cors {
        use tower_http::cors::{Any, CorsLayer};
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([axum::http::Method::GET]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(
                cfg.server.request_timeout_secs,
            ))),
        )
        .layer(TraceLayer::new_for_http())
}
