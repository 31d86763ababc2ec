//! Client core for the food records service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO). A host supplies a `Transport` for the
//! round-trip and a `Prompt` for alerts and confirmations; everything else,
//! from list rendering to the create/edit form, lives here and is testable
//! without a server.
//!
//! # Design
//! - `FoodClient` is stateless and holds only the resource URL.
//! - `FoodApi` runs one `build_*` / `execute` / `parse_*` cycle per operation.
//! - `ListView` is declarative: items carry `Action`s keyed by record id.
//! - `FoodForm` owns the field values and the `Create | Edit(id)` mode.
//! - `App` contains every failure; none propagates to the host.

pub mod api;
pub mod app;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod prompt;
pub mod types;
pub mod view;

pub use api::{FoodApi, Transport};
pub use app::{App, DeleteOutcome};
pub use client::FoodClient;
pub use error::{ApiError, ValidationError};
pub use form::{Field, FoodForm, FormFields, FormMode, SubmitOutcome};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use prompt::Prompt;
pub use types::{Food, FoodId, FoodInput};
pub use view::{Action, Control, FoodItem, ListView};
