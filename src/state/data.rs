/// Shared data structures for the card catalog
///
/// These structs represent the immutable props that flow from the
/// catalog layer into each card. Raw records are deserialized first and
/// then checked, so malformed input is rejected at the boundary.

use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::catalog::CatalogError;
use super::navigation::NavigationTarget;

/// Where an icon's artwork comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// Symbolic name in `collection:name` form (e.g. "logos:react")
    Symbol(String),
    /// Path to a bitmap
    Image(PathBuf),
}

/// One entry in a card's "Made with" row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechIcon {
    pub label: Option<String>,
    pub source: IconSource,
}

impl TechIcon {
    /// Short text shown for the icon: the label, else the symbol's name part
    pub fn caption(&self) -> &str {
        if let Some(label) = &self.label {
            return label;
        }
        match &self.source {
            IconSource::Symbol(symbol) => symbol.rsplit(':').next().unwrap_or(symbol),
            IconSource::Image(path) => path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default(),
        }
    }

    /// Parse one raw icon entry. Accepted shapes:
    /// - `"collection:name"`
    /// - `{ "name": "..", "icon": "collection:name" }`
    /// - `{ "name": "..", "image": "path" }`
    fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::String(symbol) => Some(TechIcon {
                label: None,
                source: IconSource::Symbol(valid_symbol(symbol)?),
            }),
            Value::Object(map) => {
                let label = match map.get("name") {
                    Some(Value::String(name)) if !name.trim().is_empty() => Some(name.clone()),
                    None => None,
                    _ => return None,
                };
                if map.keys().any(|key| !matches!(key.as_str(), "name" | "icon" | "image")) {
                    return None;
                }

                let source = match (map.get("icon"), map.get("image")) {
                    (Some(Value::String(symbol)), None) => IconSource::Symbol(valid_symbol(symbol)?),
                    (None, Some(Value::String(path))) if !path.is_empty() => {
                        IconSource::Image(PathBuf::from(path))
                    }
                    _ => return None,
                };

                Some(TechIcon { label, source })
            }
            _ => None,
        }
    }
}

fn valid_symbol(symbol: &str) -> Option<String> {
    let (collection, name) = symbol.split_once(':')?;
    if collection.is_empty() || name.is_empty() {
        return None;
    }
    Some(symbol.to_string())
}

/// Outbound links; each is rendered only when present
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Links {
    pub live: Option<String>,
    pub demo: Option<String>,
    pub source: Option<String>,
}

/// Which outbound link was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Live,
    Demo,
    Source,
}

impl Links {
    pub fn get(&self, kind: LinkKind) -> Option<&str> {
        match kind {
            LinkKind::Live => self.live.as_deref(),
            LinkKind::Demo => self.demo.as_deref(),
            LinkKind::Source => self.source.as_deref(),
        }
    }

    /// Present links in display order
    pub fn present(&self) -> Vec<LinkKind> {
        [LinkKind::Live, LinkKind::Demo, LinkKind::Source]
            .into_iter()
            .filter(|kind| self.get(*kind).is_some())
            .collect()
    }
}

/// A card record as it appears in the catalog file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardRecord {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub icons: Vec<Value>,
    pub image: PathBuf,
    #[serde(default)]
    pub images: Vec<PathBuf>,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub navigation: Option<NavigationTarget>,
}

/// Validated props for one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardData {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub icons: Vec<TechIcon>,
    /// Primary image, always present
    pub image: PathBuf,
    /// Secondary images; may be empty
    pub images: Vec<PathBuf>,
    pub links: Links,
    /// Set only on the designated card
    pub navigation: Option<NavigationTarget>,
}

impl CardData {
    /// Check a raw record and resolve its relative paths against `base`
    pub fn from_record(record: CardRecord, base: &Path) -> Result<Self, CatalogError> {
        if record.title.trim().is_empty() {
            return Err(CatalogError::InvalidCard {
                title: record.title,
                reason: "title is empty".to_string(),
            });
        }
        if record.image.as_os_str().is_empty() {
            return Err(CatalogError::InvalidCard {
                title: record.title,
                reason: "primary image is missing".to_string(),
            });
        }

        let mut icons = Vec::with_capacity(record.icons.len());
        for (position, value) in record.icons.iter().enumerate() {
            let mut icon = TechIcon::parse(value).ok_or_else(|| CatalogError::MalformedIcon {
                title: record.title.clone(),
                position,
                found: value.to_string(),
            })?;
            if let IconSource::Image(path) = &icon.source {
                icon.source = IconSource::Image(resolve(base, path));
            }
            icons.push(icon);
        }

        Ok(CardData {
            title: record.title,
            description: record.description,
            features: record.features,
            tags: record.tags,
            icons,
            image: resolve(base, &record.image),
            images: record.images.iter().map(|path| resolve(base, path)).collect(),
            links: record.links,
            navigation: record.navigation,
        })
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
