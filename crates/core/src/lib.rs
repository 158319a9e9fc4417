//! actionhub_core - Core library for fetching action-recognition models
//!
//! This crate provides:
//! - The model catalog (MoViNet A0, I3D) and their hub URLs
//! - A `ModelHub` abstraction with a TF-Hub compressed-archive client
//! - The `ModelFetcher` that drives a single fetch and reports progress
//! - The sample of Kinetics action labels

pub mod config;
pub mod error;
pub mod fetcher;
pub mod hub;
pub mod labels;
pub mod models;

pub use config::{Config, HubConfig};
pub use error::{FetchError, HubError, UnknownModel};
pub use fetcher::ModelFetcher;
pub use hub::{ModelHub, TfHubClient};
pub use models::{ModelChoice, ModelHandle};
