//! Config loading, `extends` resolution, and merging

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Result, TsconfigError};
use crate::find_up::find_up;
use crate::jsonc;
use crate::merge::apply_overlay;
use crate::paths;
use crate::reference::ConfigReference;
use crate::resolver::resolve_package_reference;

/// Config filename searched for when no explicit name is given.
pub const DEFAULT_CONFIG_NAME: &str = "tsconfig.json";

/// A fully resolved and merged configuration.
///
/// Built fresh per call; nothing is shared between invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    /// Path of the originally requested config file
    pub path: PathBuf,
    /// Merged config data, with `extends` already applied and removed
    pub data: Map<String, Value>,
    /// Every config file that contributed, ancestors before descendants
    pub files: Vec<PathBuf>,
}

/// Locate and load a tsconfig file, following its `extends` chain.
///
/// Searches upward from `dir` for `name` (default `tsconfig.json`), then
/// recursively resolves and merges every config the file extends.
/// `Ok(None)` means no config file was found, which is not an error; see
/// [`TsconfigError`] for the faults that are.
pub fn load_tsconfig(dir: impl AsRef<Path>, name: Option<&str>) -> Result<Option<Loaded>> {
    let dir = absolutize(dir.as_ref())?;
    let mut visiting = Vec::new();
    load_internal(
        &dir,
        name.unwrap_or(DEFAULT_CONFIG_NAME),
        false,
        &mut visiting,
    )
}

fn load_internal(
    dir: &Path,
    reference: &str,
    is_extends: bool,
    visiting: &mut Vec<PathBuf>,
) -> Result<Option<Loaded>> {
    let Some(path) = resolve_reference(dir, reference, is_extends)? else {
        if is_extends {
            tracing::debug!("extends target '{reference}' did not resolve, skipping");
        }
        return Ok(None);
    };

    if visiting.contains(&path) {
        let mut chain: Vec<String> = visiting.iter().map(|p| p.display().to_string()).collect();
        chain.push(path.display().to_string());
        return Err(TsconfigError::CyclicExtends {
            chain: chain.join(" -> "),
        });
    }

    tracing::debug!("loading config: {}", path.display());
    let text = fs::read_to_string(&path).map_err(|source| TsconfigError::Io {
        path: path.clone(),
        source,
    })?;
    let mut data = jsonc::parse(&text);

    let config_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"));

    absolutize_base_url(&mut data, &config_dir);

    let mut merged = Map::new();
    let mut files: Vec<PathBuf> = Vec::new();

    let parents = take_extends(&mut data);
    if !parents.is_empty() {
        visiting.push(path.clone());
        for parent_reference in &parents {
            if let Some(parent) = load_internal(&config_dir, parent_reference, true, visiting)? {
                apply_overlay(&mut merged, parent.data);
                files.extend(parent.files);
            }
        }
        visiting.pop();
    }

    apply_overlay(&mut merged, data);
    files.push(path.clone());

    Ok(Some(Loaded {
        path,
        data: merged,
        files,
    }))
}

/// Resolve a reference to an absolute config file, or report absence.
///
/// The initial lookup only ever searches upward for a literal filename;
/// `extends` targets dispatch on the reference's classification.
fn resolve_reference(dir: &Path, reference: &str, is_extends: bool) -> Result<Option<PathBuf>> {
    if !is_extends {
        let candidate = Path::new(reference);
        if candidate.is_absolute() {
            return Ok(candidate.is_file().then(|| paths::normalize(candidate)));
        }
        return Ok(find_up(reference, dir, None));
    }

    match ConfigReference::classify(reference) {
        ConfigReference::Absolute(path) => Ok(path.is_file().then(|| paths::normalize(&path))),
        ConfigReference::Relative(name) => Ok(find_up(&name, dir, None)),
        ConfigReference::Package { name, subpath } => {
            resolve_package_reference(&name, &subpath, dir)
        }
    }
}

/// Pull the `extends` field out of a parsed config, normalized to a list.
///
/// The field is removed unconditionally; merged results never carry it.
/// Non-string entries are ignored.
fn take_extends(data: &mut Map<String, Value>) -> Vec<String> {
    match data.remove("extends") {
        Some(Value::String(reference)) => vec![reference],
        Some(Value::Array(values)) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(reference) => Some(reference),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Rewrite `compilerOptions.baseUrl` against the directory of the file that
/// declares it. This happens before any merging, so a merged baseUrl is
/// always absolute.
fn absolutize_base_url(data: &mut Map<String, Value>, config_dir: &Path) {
    let Some(Value::Object(options)) = data.get_mut("compilerOptions") else {
        return;
    };
    let Some(Value::String(base_url)) = options.get_mut("baseUrl") else {
        return;
    };
    let absolute = paths::join_normalized(config_dir, base_url.as_str());
    *base_url = absolute.to_string_lossy().into_owned();
}

fn absolutize(dir: &Path) -> Result<PathBuf> {
    std::path::absolute(dir)
        .map(|path| paths::normalize(&path))
        .map_err(|source| TsconfigError::Io {
            path: dir.to_path_buf(),
            source,
        })
}
