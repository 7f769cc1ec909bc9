pub mod client;
pub mod models;
pub mod response;

pub use client::{ChatClient, Completion};
pub use models::{Reply, RequestBody, TEMPERATURE};
