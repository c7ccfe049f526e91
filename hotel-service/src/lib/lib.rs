pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod telemetry;

pub use domain::auth::service::AuthService;
pub use domain::booking::service::BookingService;
pub use domain::client::service::ClientService;
pub use domain::room::service::RoomService;
