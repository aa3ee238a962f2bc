//! Backend transport layer

pub mod backend;
pub mod client;
pub mod types;

pub use backend::{Backend, TransportError};
pub use client::HttpBackend;
pub use types::{ChatReply, ConnectInfo, QueryOutcome, Row};
