//! eeum - client core for a story + music sharing service.
//!
//! Users share short stories paired with a song; others comment, optionally
//! attaching a song of their own, and like posts. This crate holds the
//! layer between a presentation frontend and the REST backend:
//!
//! - [`repository`] - one typed repository per resource, the only layer
//!   doing network I/O
//! - [`usecase`] - thin orchestration over repositories
//! - [`view_model`] - stateful list and detail holders publishing their
//!   state through `watch` channels
//! - [`events`] - post mutation broadcast keeping lists consistent
//! - [`services`] - wiring of all of the above

pub mod adapters;
pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod repository;
pub mod services;
pub mod traits;
pub mod usecase;
pub mod view_model;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use events::{PostEventBus, PostUpdateAction, PostUpdateEvent};
pub use services::Services;
