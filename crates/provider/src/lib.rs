//! Service description lookup for cloud SDK models
//!
//! This crate resolves API descriptions, paginator configs and waiter configs
//! from a directory of versioned JSON files.
//!
//! ## Directory layout
//!
//! Every file in the model directory is named `<service>-<version><suffix>`:
//! - `<service>-<version>.normal.json` or `.normal.min.json` → API description
//! - `<service>-<version>.paginators.json` → pagination config
//! - `<service>-<version>.waiters.json` → waiter config
//!
//! The first hyphen-delimited token of a file name is the service id and the
//! remainder (up to the suffix) is the version.
//!
//! ## Usage
//! ```rust,no_run
//! use cloud_api_models_provider::{ApiProvider, FilesystemApiProvider};
//!
//! let provider = FilesystemApiProvider::new("./models").minified(true);
//! if let Some(s3) = provider.get_service("s3", "latest")? {
//!     println!("{:?}", s3.api_version());
//! }
//! # Ok::<(), cloud_api_models_common::ApiError>(())
//! ```

mod bundle;
mod filesystem;
mod json;
mod naming;

pub use bundle::{load_bundle, ServiceBundle};
pub use filesystem::FilesystemApiProvider;
pub use json::parse_json;

pub use cloud_api_models_common::{ApiError, DescriptionKind, JsonMap, Result, Service};

use std::collections::BTreeSet;

/// Version sentinel resolved to a concrete version at lookup time
pub const LATEST: &str = "latest";

/// Source of service descriptions
///
/// Absence is never an error: a missing description is `Ok(None)` and a
/// missing paginator or waiter config is an empty map.
#[cfg_attr(test, mockall::automock)]
pub trait ApiProvider {
    /// Load the API description for a service version (or [`LATEST`])
    fn get_service(&self, service: &str, version: &str) -> Result<Option<Service>>;

    /// Distinct service ids with at least one API description
    fn get_service_names(&self) -> Result<BTreeSet<String>>;

    /// Versions available for a service
    fn get_service_versions(&self, service: &str) -> Result<Vec<String>>;

    /// Pagination config for a service version
    fn get_service_paginator_config(&self, service: &str, version: &str) -> Result<JsonMap>;

    /// Waiter config for a service version
    fn get_service_waiter_config(&self, service: &str, version: &str) -> Result<JsonMap>;
}

/// Resolve [`LATEST`] to a concrete version
///
/// Picks the first of the known versions in plain lexicographic order. Any
/// other version string is returned unchanged, as is [`LATEST`] itself when
/// the service has no versions.
pub fn resolve_version<P>(provider: &P, service: &str, version: &str) -> Result<String>
where
    P: ApiProvider + ?Sized,
{
    if version != LATEST {
        return Ok(version.to_string());
    }

    let mut versions = provider.get_service_versions(service)?;
    versions.sort();

    match versions.into_iter().next() {
        Some(resolved) => {
            tracing::debug!(service, version = %resolved, "resolved latest version");
            Ok(resolved)
        }
        None => Ok(version.to_string()),
    }
}
