//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::configure;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the listener and start serving.
///
/// Marks `health_state` ready once the socket is bound.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        host,
        port,
        db_pool,
    } = config;
    let http_state = build_http_state(db_pool);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind((host.as_str(), port))?
        .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use actix_web::http::StatusCode;
    use actix_web::test;
    use backend::config::FeedbackSettings;
    use env_lock::lock_env;
    use ortho_config::OrthoConfig;
    use serde_json::{Value, json};

    fn settings_from_empty_env() -> FeedbackSettings {
        let _guard = lock_env([
            ("FEEDBACK_HOST", None::<String>),
            ("FEEDBACK_PORT", None),
            ("FEEDBACK_DATABASE_URL", None),
            ("FEEDBACK_POOL_MAX_SIZE", None),
        ]);
        FeedbackSettings::load_from_iter([OsString::from("feedback-backend")])
            .expect("config should load")
    }

    #[actix_web::test]
    async fn default_settings_serve_feedback_from_memory() {
        let settings = settings_from_empty_env();
        assert_eq!(settings.port(), 8080);
        assert!(settings.pool_config().is_none());

        let http_state = build_http_state(None);
        let app = test::init_service(build_app(
            web::Data::new(HealthState::new()),
            http_state,
        ))
        .await;

        let live_req = test::TestRequest::get().uri("/health/live").to_request();
        assert_eq!(test::call_service(&app, live_req).await.status(), StatusCode::OK);

        let create = test::TestRequest::post()
            .uri("/api/feedback")
            .set_json(json!({"message": "hi"}))
            .to_request();
        let res = test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["message"], "hi");
    }
}
