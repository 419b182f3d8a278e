//! Classification of config reference strings

use std::path::{Path, PathBuf};

/// How a config reference string should be resolved.
///
/// Classification is purely syntactic; no file system access happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigReference {
    /// An absolute path, checked for existence directly
    Absolute(PathBuf),
    /// A `./` or `../` path, resolved against the referencing file's directory
    Relative(String),
    /// A bare package specifier, resolved through `node_modules`
    Package {
        /// Package name, including the scope for `@scope/name` specifiers
        name: String,
        /// Path segments following the package name
        subpath: Vec<String>,
    },
}

impl ConfigReference {
    /// Classify a reference string from an `extends` field.
    pub fn classify(reference: &str) -> Self {
        if Path::new(reference).is_absolute() {
            return Self::Absolute(PathBuf::from(reference));
        }
        if reference.starts_with('.') {
            return Self::Relative(reference.to_string());
        }
        let segments: Vec<&str> = reference.split('/').collect();
        if reference.starts_with('@') && segments.len() >= 2 {
            Self::Package {
                name: format!("{}/{}", segments[0], segments[1]),
                subpath: segments[2..].iter().map(ToString::to_string).collect(),
            }
        } else {
            Self::Package {
                name: segments[0].to_string(),
                subpath: segments[1..].iter().map(ToString::to_string).collect(),
            }
        }
    }
}
