//! # weblate-sync - Translation Resource Client
//!
//! `weblate-sync` is a cache-and-fetch layer over a Weblate-style
//! translation-management HTTP API. It resolves, creates, uploads, and
//! downloads per-language translation resources for a component, and converts
//! key/value JSON into XLIFF 1.2 when the server does not serve XML directly.
//!
//! ## Features
//!
//! - **Caching**: a three-state cache (unknown / queried-but-absent / present)
//!   avoids redundant listing calls per component
//! - **Create-on-demand**: resolving a locale that does not exist upstream
//!   provisions it instead of failing
//! - **Format conversion**: key/value JSON downloads are converted to XLIFF 1.2
//!   with proper XML escaping
//! - **Pluggable transport**: all network traffic goes through the
//!   [`http::HttpClient`] trait, so tests run against a scripted mock
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use weblate_sync::http::ApiHttpClient;
//! use weblate_sync::translation::{Component, WeblateClient};
//!
//! # async fn run() -> weblate_sync::error::Result<()> {
//! let http = Arc::new(ApiHttpClient::new(Some("api-key".into())));
//! let client = WeblateClient::new(http);
//!
//! let component = Component {
//!     slug: "app/messages".into(),
//!     translations_url: "https://weblate.example/api/components/app/messages/translations/".into(),
//! };
//!
//! let translation = client.get_translation(&component, "de").await?;
//! let xliff = client.download_translation(&translation, "json").await?;
//! # Ok(())
//! # }
//! ```

/// In-memory translation cache with explicit three-state lookups.
pub mod cache;

/// Error types shared across the crate.
pub mod error;

/// HTTP transport trait and the reqwest-backed implementation.
pub mod http;

/// Translation records, resolver/transfer client, and XLIFF conversion.
pub mod translation;
