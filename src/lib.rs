//! Wellboard: operator console shell for the well telemetry platform
//!
//! Client-side plumbing shared by the operator console views:
//!
//! - **Route table**: declarative URL-path → named-view mapping for the console shell
//! - **API client**: one request-builder method per backend endpoint, with bearer
//!   auth injected at a single choke point
//! - **Token store**: durable access-token storage shared by the login flow and
//!   the client's per-request auth decorator
//!
//! The crate stops at the HTTP boundary on purpose: endpoint methods hand back
//! the raw [`reqwest::Response`] so each view decides how (and whether) to parse
//! it, and a served non-2xx status is an ordinary response, not an error.

pub mod client;
pub mod config;
pub mod routes;
pub mod token;
pub mod types;

// Re-export the client surface
pub use client::{ApiClient, ApiClientBuilder, ApiError, BearerAuth};

// Re-export routing
pub use routes::{operator_routes, OperatorViews, RouteEntry, RouteError, RouteTable};

// Re-export token providers
pub use token::{Anonymous, FileTokenStore, StaticToken, TokenProvider};

// Re-export configuration
pub use config::{ApiSettings, AuthSettings, ConfigError, ConsoleConfig};
