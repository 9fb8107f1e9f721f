//! Model directory lookup

use crate::json::{into_mapping, parse_json};
use crate::naming;
use crate::{resolve_version, ApiProvider};
use cloud_api_models_common::{ApiError, DescriptionKind, JsonMap, Result, Service};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Provides service descriptions from a directory of JSON model files
///
/// Holds only the root path and the active API suffix. Every call rescans the
/// directory or rereads the file it needs; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesystemApiProvider {
    /// Root directory with trailing separators removed
    root: PathBuf,

    /// Directory to scan (differs from `root` only when the path was all separators)
    scan_dir: PathBuf,

    /// Which API description variant is read
    api_kind: DescriptionKind,
}

impl FilesystemApiProvider {
    /// Create a provider reading normal (non-minified) descriptions
    ///
    /// # Example
    /// ```rust,no_run
    /// use cloud_api_models_provider::FilesystemApiProvider;
    ///
    /// let provider = FilesystemApiProvider::new("vendor/models/");
    /// assert_eq!(provider.root(), std::path::Path::new("vendor/models"));
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_mode(path, false)
    }

    /// Create a provider, choosing minified or normal descriptions
    ///
    /// Trailing `/` and `\` separators are stripped from `path`. A path that
    /// is not valid UTF-8 is kept as-is apart from its trailing `/`
    /// separators, which are dropped by path normalisation.
    pub fn with_mode<P: AsRef<Path>>(path: P, minified: bool) -> Self {
        let raw = path.as_ref();
        let root = trim_separators(raw);
        let scan_dir = if root.as_os_str().is_empty() && !raw.as_os_str().is_empty() {
            PathBuf::from("/")
        } else {
            root.clone()
        };

        Self {
            root,
            scan_dir,
            api_kind: DescriptionKind::api(minified),
        }
    }

    /// Read minified (`.normal.min.json`) descriptions instead of normal ones
    pub fn minified(mut self, minified: bool) -> Self {
        self.api_kind = DescriptionKind::api(minified);
        self
    }

    /// Root directory of the model files
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_minified(&self) -> bool {
        self.api_kind == DescriptionKind::MinifiedApi
    }

    /// Suffix of the API description files this provider reads
    pub fn api_suffix(&self) -> &'static str {
        self.api_kind.extension()
    }

    fn path_for(&self, service: &str, version: &str, kind: DescriptionKind) -> PathBuf {
        naming::build_path(self.root.as_os_str(), service, version, kind.extension())
    }

    /// File names in the root directory ending with `suffix`, in name order
    ///
    /// A missing root directory lists as empty. Names that are not valid
    /// UTF-8 cannot follow the naming convention and are skipped.
    fn list_matching_files(&self, suffix: &str) -> Result<Vec<String>> {
        let dir = self.scan_dir.as_path();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "model directory does not exist");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ApiError::io(dir, e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ApiError::io(dir, e))?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::trace!(name = ?file_name, "skipping non UTF-8 file name");
                continue;
            };

            if name.ends_with(suffix) {
                files.push(name.to_string());
            }
        }
        files.sort();

        tracing::debug!(
            dir = %dir.display(),
            suffix,
            matched = files.len(),
            "scanned model directory"
        );

        Ok(files)
    }

    /// Read and decode a description file as a mapping, `None` if it does not exist
    fn read_description(&self, path: &Path) -> Result<Option<JsonMap>> {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "description file not found");
                return Ok(None);
            }
            Err(e) => return Err(ApiError::io(path, e)),
        };

        tracing::debug!(path = %path.display(), bytes = content.len(), "read description file");
        let document = parse_json(path, content)?;
        into_mapping(path, document).map(Some)
    }

    fn read_config(
        &self,
        service: &str,
        version: &str,
        kind: DescriptionKind,
    ) -> Result<JsonMap> {
        let path = self.path_for(service, version, kind);
        Ok(self.read_description(&path)?.unwrap_or_default())
    }
}

fn trim_separators(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(s.trim_end_matches(['/', '\\'])),
        None => path.components().collect(),
    }
}

impl ApiProvider for FilesystemApiProvider {
    fn get_service(&self, service: &str, version: &str) -> Result<Option<Service>> {
        let version = resolve_version(self, service, version)?;
        let path = self.path_for(service, &version, self.api_kind);

        Ok(self.read_description(&path)?.map(Service::new))
    }

    fn get_service_names(&self) -> Result<BTreeSet<String>> {
        let suffix = self.api_suffix();
        let files = self.list_matching_files(suffix)?;

        Ok(files
            .iter()
            .map(|f| naming::service_id(f, suffix).to_string())
            .collect())
    }

    // Matches on the raw file name prefix, so "s3" also picks up "s3control-*".
    fn get_service_versions(&self, service: &str) -> Result<Vec<String>> {
        let suffix = self.api_suffix();
        let files = self.list_matching_files(suffix)?;

        Ok(files
            .iter()
            .filter(|f| f.starts_with(service))
            .filter_map(|f| naming::version(f, suffix))
            .map(str::to_string)
            .collect())
    }

    fn get_service_paginator_config(&self, service: &str, version: &str) -> Result<JsonMap> {
        self.read_config(service, version, DescriptionKind::Paginators)
    }

    fn get_service_waiter_config(&self, service: &str, version: &str) -> Result<JsonMap> {
        self.read_config(service, version, DescriptionKind::Waiters)
    }
}
