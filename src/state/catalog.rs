use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

use super::data::{CardData, CardRecord};

/// Catalog shipped with the binary; its images live next to it in `assets/`
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("card \"{title}\" has a malformed icon at position {position}: {found}")]
    MalformedIcon {
        title: String,
        position: usize,
        found: String,
    },
    #[error("card \"{title}\" is invalid: {reason}")]
    InvalidCard { title: String, reason: String },
    #[error("more than one {list} card has a navigation target (\"{first}\" and \"{second}\")")]
    DuplicateNavigation {
        list: &'static str,
        first: String,
        second: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<CardRecord>,
    #[serde(default)]
    workflows: Vec<CardRecord>,
}

/// The Catalog holds every card shown by the application,
/// split by the page that lists them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub projects: Vec<CardData>,
    pub workflows: Vec<CardData>,
}

impl Catalog {
    /// Load the catalog at `path`. Relative image paths resolve against
    /// the directory containing the file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));

        let catalog = Self::from_json(&json, base)?;
        info!(
            "📁 Catalog loaded from {}: {} projects, {} workflows",
            path.display(),
            catalog.projects.len(),
            catalog.workflows.len()
        );
        Ok(catalog)
    }

    /// Parse and validate catalog JSON
    pub fn from_json(json: &str, base: &Path) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let projects = convert("projects", file.projects, base)?;
        let workflows = convert("workflows", file.workflows, base)?;

        Ok(Catalog { projects, workflows })
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG, &builtin_assets_dir())
    }

    /// Resolve the catalog to use at startup.
    ///
    /// Order: an explicit path, then the user's catalog in the data
    /// directory, then the built-in one. A broken user catalog is logged
    /// and replaced by the built-in catalog.
    ///
    /// - Linux: ~/.local/share/project-showcase/catalog.json
    /// - macOS: ~/Library/Application Support/project-showcase/catalog.json
    /// - Windows: %APPDATA%\project-showcase\catalog.json
    pub fn discover(explicit: Option<&Path>) -> Result<Self, CatalogError> {
        let candidate = explicit
            .map(Path::to_path_buf)
            .or_else(|| Self::default_path().filter(|path| path.exists()));

        match candidate {
            Some(path) => Self::load(&path).or_else(|err| {
                error!("⚠️  Could not load {}: {}", path.display(), err);
                info!("Falling back to the built-in catalog");
                Self::builtin()
            }),
            None => Self::builtin(),
        }
    }

    /// Where a user catalog is looked up when none is given
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::data_dir().or_else(dirs::home_dir)?;
        path.push("project-showcase");
        path.push("catalog.json");
        Some(path)
    }
}

/// Directory holding the built-in catalog's images: `assets/` next to the
/// executable when it exists, otherwise the one in the source checkout.
pub fn builtin_assets_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")));

    resolve_assets_dir(beside_exe, Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"))
}

fn resolve_assets_dir(beside_exe: Option<PathBuf>, checkout: PathBuf) -> PathBuf {
    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => checkout,
    }
}

fn convert(list: &'static str, records: Vec<CardRecord>, base: &Path) -> Result<Vec<CardData>, CatalogError> {
    let cards = records
        .into_iter()
        .map(|record| CardData::from_record(record, base))
        .collect::<Result<Vec<_>, _>>()?;

    // Only one card per page may double as a navigation link
    let mut designated = cards.iter().filter(|card| card.navigation.is_some());
    if let (Some(first), Some(second)) = (designated.next(), designated.next()) {
        return Err(CatalogError::DuplicateNavigation {
            list,
            first: first.title.clone(),
            second: second.title.clone(),
        });
    }

    Ok(cards)
}
