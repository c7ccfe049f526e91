pub mod auth;
pub mod booking;
pub mod client;
pub mod room;
