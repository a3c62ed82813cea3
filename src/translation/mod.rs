mod client;
mod record;
pub mod xliff;

pub use client::WeblateClient;
pub use record::{Component, Translation};
