use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::AllowOrigin;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login::login;
use super::handlers::auth::register::register;
use super::handlers::bookings::create_booking::create_booking;
use super::handlers::bookings::list_bookings::list_bookings;
use super::handlers::clients::add_client::add_client;
use super::handlers::clients::edit_client::edit_client;
use super::handlers::clients::list_clients::list_clients;
use super::handlers::rooms::edit_room_status::edit_room_status;
use super::handlers::rooms::get_room::get_room;
use super::handlers::rooms::list_rooms::list_rooms;
use super::middleware::authenticate as auth_middleware;
use crate::config::CorsConfig;
use crate::domain::auth::service::AuthService;
use crate::domain::booking::service::BookingService;
use crate::domain::client::service::ClientService;
use crate::domain::room::service::RoomService;
use crate::outbound::repositories::PostgresBookingRepository;
use crate::outbound::repositories::PostgresClientRepository;
use crate::outbound::repositories::PostgresCredentialRepository;
use crate::outbound::repositories::PostgresRoomRepository;

const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresCredentialRepository>>,
    pub client_service: Arc<ClientService<PostgresClientRepository>>,
    pub room_service: Arc<RoomService<PostgresRoomRepository>>,
    pub booking_service: Arc<BookingService<PostgresBookingRepository>>,
}

/// Transport settings applied around every route.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl HttpSettings {
    pub fn new(cors: &CorsConfig, request_timeout: Duration) -> Self {
        Self {
            allowed_origins: cors.allowed_origins.clone(),
            request_timeout,
        }
    }
}

pub fn create_router(state: AppState, settings: &HttpSettings) -> Router {
    let public_routes = Router::new()
        .route("/user/create-acc", post(register))
        .route("/user/enter-acc", post(login));

    let protected_routes = Router::new()
        .route("/clients/add-client", post(add_client))
        .route("/clients/edit-client", put(edit_client))
        .route("/clients/get-clients-list", get(list_clients))
        .route("/rooms/edit-room-status", post(edit_room_status))
        .route("/rooms/get-rooms", get(list_rooms))
        .route("/rooms/:room_id", get(get_room))
        .route("/booking/book", post(create_booking))
        .route("/booking/book-list", get(list_bookings))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer(&settings.allowed_origins))
                .layer(TimeoutLayer::new(settings.request_timeout)),
        )
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}
