pub mod booking;
pub mod client;
pub mod credential;
pub mod room;

pub use booking::PostgresBookingRepository;
pub use client::PostgresClientRepository;
pub use credential::PostgresCredentialRepository;
pub use room::PostgresRoomRepository;
