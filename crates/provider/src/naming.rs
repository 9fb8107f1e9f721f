//! Model file naming convention: `<service>-<version><suffix>`

use std::ffi::OsStr;
use std::path::PathBuf;

/// Path of a description file under `root`
pub(crate) fn build_path(root: &OsStr, service: &str, version: &str, extension: &str) -> PathBuf {
    let mut path = root.to_os_string();
    path.push("/");
    path.push(format!("{service}-{version}{extension}"));
    PathBuf::from(path)
}

/// Service id of a matching file name (first hyphen-delimited token)
pub(crate) fn service_id<'a>(file_name: &'a str, suffix: &str) -> &'a str {
    let stem = strip_suffix(file_name, suffix);
    stem.split('-').next().unwrap_or(stem)
}

/// Version of a matching file name (everything after the first hyphen)
pub(crate) fn version<'a>(file_name: &'a str, suffix: &str) -> Option<&'a str> {
    strip_suffix(file_name, suffix)
        .split_once('-')
        .map(|(_, version)| version)
}

fn strip_suffix<'a>(file_name: &'a str, suffix: &str) -> &'a str {
    file_name.strip_suffix(suffix).unwrap_or(file_name)
}
