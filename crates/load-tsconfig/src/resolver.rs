//! Package specifier resolution through `node_modules`
//!
//! An `extends` target like `"tsconfig-pkg-a"` or `"@acme/tsconfig/node18"`
//! points into an installed package. A package may publish its config under
//! its manifest `main` field, under a manifest-declared `tsconfig` field, or
//! inside a subdirectory holding an implicit `tsconfig.json` — the reference
//! alone does not say which convention the package follows, so all three are
//! tried in order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TsconfigError};
use crate::loader::DEFAULT_CONFIG_NAME;
use crate::paths;
use crate::reference::ConfigReference;

/// Outcome of a low-level module resolution attempt.
///
/// `NotFound` is ordinary control flow: it drives the fallback chain and
/// ultimately degrades to an absent result. The other variants are fatal.
#[derive(Debug)]
pub(crate) enum ResolveError {
    NotFound,
    InvalidSpecifier { specifier: String, message: String },
    Io { path: PathBuf, source: io::Error },
}

/// The slice of a package manifest this crate cares about.
#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    main: Option<String>,
    tsconfig: Option<String>,
}

impl PackageManifest {
    /// Read a `package.json`, tolerating absence and malformed content.
    fn read(path: &Path) -> std::result::Result<Self, ResolveError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ResolveError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Ok(serde_json::from_str(&text).unwrap_or_else(|err| {
            tracing::debug!("malformed manifest at {}: {err}", path.display());
            Self::default()
        }))
    }
}

/// Resolve a package reference from an `extends` field to a config file.
///
/// Fallback chain, each step attempted only when the previous one misses:
/// 1. direct module resolution of the full reference;
/// 2. for a bare package name: the manifest's `tsconfig` field, defaulting
///    to `tsconfig.json` at the package root;
/// 3. for a reference with a subpath: `<subpath>/tsconfig.json` inside the
///    package.
///
/// `Ok(None)` means the chain was exhausted without a hit; fatal resolution
/// faults propagate as errors.
pub(crate) fn resolve_package_reference(
    name: &str,
    subpath: &[String],
    from_dir: &Path,
) -> Result<Option<PathBuf>> {
    let full = if subpath.is_empty() {
        name.to_string()
    } else {
        format!("{name}/{}", subpath.join("/"))
    };

    if let Some(path) = check(resolve_module(&full, from_dir))? {
        return Ok(Some(path));
    }

    let fallback = if subpath.is_empty() {
        let Some(manifest_path) =
            check(resolve_module(&format!("{name}/package.json"), from_dir))?
        else {
            tracing::debug!("package '{name}' is not installed");
            return Ok(None);
        };
        let Some(manifest) = check(PackageManifest::read(&manifest_path))? else {
            return Ok(None);
        };
        // explicit manifest `tsconfig` field, or the implicit
        // `<pkgroot>/tsconfig.json`
        let config_name = manifest
            .tsconfig
            .unwrap_or_else(|| DEFAULT_CONFIG_NAME.to_string());
        format!("{name}/{config_name}")
    } else {
        // treat the subpath as a directory holding an implicit config
        format!("{full}/{DEFAULT_CONFIG_NAME}")
    };

    check(resolve_module(&fallback, from_dir))
}

/// Minimal Node-style module resolution for file specifiers.
///
/// Walks `node_modules` directories upward from `from_dir` until the
/// specifier maps onto an existing file. A bare package name resolves
/// through its manifest `main` field; a subpath resolves as a file inside
/// the package, also trying a `.json` suffix.
pub(crate) fn resolve_module(
    specifier: &str,
    from_dir: &Path,
) -> std::result::Result<PathBuf, ResolveError> {
    let (name, subpath) = split_specifier(specifier)?;

    for dir in from_dir.ancestors() {
        let package_root = dir.join("node_modules").join(&name);
        if !package_root.is_dir() {
            continue;
        }
        if let Some(path) = resolve_in_package(&package_root, &subpath)? {
            return Ok(path);
        }
    }
    Err(ResolveError::NotFound)
}

/// Validate and decompose a bare specifier into package name and subpath.
fn split_specifier(specifier: &str) -> std::result::Result<(String, Vec<String>), ResolveError> {
    let invalid = |message: &str| ResolveError::InvalidSpecifier {
        specifier: specifier.to_string(),
        message: message.to_string(),
    };

    if specifier.is_empty() {
        return Err(invalid("empty specifier"));
    }
    if Path::new(specifier).is_absolute() || specifier.starts_with('.') {
        return Err(invalid("not a bare specifier"));
    }
    if specifier.split('/').any(str::is_empty) {
        return Err(invalid("empty path segment"));
    }
    if specifier.starts_with('@') && !specifier.contains('/') {
        return Err(invalid("scope without a package name"));
    }

    match ConfigReference::classify(specifier) {
        ConfigReference::Package { name, subpath } => Ok((name, subpath)),
        _ => Err(invalid("not a bare specifier")),
    }
}

fn resolve_in_package(
    package_root: &Path,
    subpath: &[String],
) -> std::result::Result<Option<PathBuf>, ResolveError> {
    if subpath.is_empty() {
        // the manifest `main` field is the only entry point honored here
        let manifest = PackageManifest::read(&package_root.join("package.json"))?;
        let Some(main) = manifest.main else {
            return Ok(None);
        };
        let candidate = paths::join_normalized(package_root, &main);
        return Ok(candidate.is_file().then_some(candidate));
    }

    let candidate = paths::join_normalized(package_root, subpath.join("/"));
    if candidate.is_file() {
        return Ok(Some(candidate));
    }
    if let Some(last) = subpath.last() {
        if !last.ends_with(".json") {
            let with_ext = candidate.with_file_name(format!("{last}.json"));
            if with_ext.is_file() {
                return Ok(Some(with_ext));
            }
        }
    }
    Ok(None)
}

/// Fold a resolution outcome into the loader's silent-miss policy:
/// `NotFound` becomes `Ok(None)`, fatal faults become errors.
fn check<T>(result: std::result::Result<T, ResolveError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ResolveError::NotFound) => Ok(None),
        Err(ResolveError::InvalidSpecifier { specifier, message }) => {
            Err(TsconfigError::InvalidSpecifier { specifier, message })
        }
        Err(ResolveError::Io { path, source }) => Err(TsconfigError::Io { path, source }),
    }
}
