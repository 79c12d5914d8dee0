pub mod auth;
pub mod client;
pub mod transport;
pub mod webdav;
