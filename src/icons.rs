//! Icon assets keyed by operator identifier.
//!
//! Icons come from `icons/**/<id>.svg` inside a data package. Lookups never
//! fail: an identifier without an asset resolves to [`IconSet::placeholder`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;

use crate::source::ContentSource;

/// Identifier used for the placeholder asset.
pub const PLACEHOLDER_ID: &str = "placeholder";

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64" width="64" height="64">
  <rect x="4" y="4" width="56" height="56" rx="8" fill="none" stroke="#888" stroke-width="3" stroke-dasharray="6 4"/>
  <text x="32" y="42" font-family="sans-serif" font-size="28" text-anchor="middle" fill="#888">?</text>
</svg>
"##;

/// A single SVG icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAsset {
    pub id: String,
    pub svg: Arc<[u8]>,
}

impl IconAsset {
    pub fn new(id: impl Into<String>, svg: impl Into<Arc<[u8]>>) -> Self {
        Self {
            id: id.into(),
            svg: svg.into(),
        }
    }

    /// The SVG markup as text (lossy for invalid UTF-8).
    pub fn svg_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.svg)
    }

    /// URI under which the asset is handed to image loaders. The `.svg`
    /// suffix lets loaders pick the SVG decoder.
    pub fn uri(&self) -> String {
        format!("bytes://opgrid/icons/{}.svg", self.id)
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }
}

/// Icons of one data package.
#[derive(Debug, Clone)]
pub struct IconSet {
    icons: BTreeMap<String, IconAsset>,
    placeholder: IconAsset,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            icons: BTreeMap::new(),
            placeholder: IconAsset::new(PLACEHOLDER_ID, PLACEHOLDER_SVG.as_bytes()),
        }
    }
}

fn icon_id(path: &Utf8Path) -> Option<&str> {
    if path.extension()? != "svg" {
        return None;
    }
    path.file_stem()
}

impl IconSet {
    /// Load every `*.svg` below `dir` of the given source.
    ///
    /// When the source is a plain directory the files are read in parallel.
    /// If two files share a stem, the one listed last wins.
    pub fn load<S: ContentSource>(source: &mut S, dir: &Utf8Path) -> Result<Self> {
        let paths: Vec<Utf8PathBuf> = source
            .list_dir(dir)?
            .into_iter()
            .filter(|p| icon_id(p).is_some())
            .collect();

        let assets: Vec<IconAsset> = if let Some(root) = source.fs_root() {
            let root = root.to_path_buf();
            paths
                .par_iter()
                .map(|p| -> Result<IconAsset> {
                    let full = root.join(p);
                    let bytes = std::fs::read(full.as_std_path())
                        .with_context(|| format!("Failed to read icon {}", full))?;
                    Ok(IconAsset::new(icon_id(p).unwrap_or_default(), bytes))
                })
                .collect::<Result<_>>()?
        } else {
            let mut out = Vec::with_capacity(paths.len());
            for p in &paths {
                let bytes = source.read_bytes(p)?;
                out.push(IconAsset::new(icon_id(p).unwrap_or_default(), bytes));
            }
            out
        };

        let mut set = Self::default();
        for asset in assets {
            set.insert(asset);
        }
        tracing::debug!(count = set.len(), dir = %dir, "loaded icons");
        Ok(set)
    }

    pub fn insert(&mut self, asset: IconAsset) {
        self.icons.insert(asset.id.clone(), asset);
    }

    pub fn get(&self, id: &str) -> Option<&IconAsset> {
        self.icons.get(id)
    }

    /// Look up the icon for `id`, falling back to the placeholder.
    pub fn resolve(&self, id: &str) -> &IconAsset {
        match self.get(id) {
            Some(asset) => asset,
            None => {
                tracing::debug!(id, "no icon for operator, using placeholder");
                &self.placeholder
            }
        }
    }

    pub fn placeholder(&self) -> &IconAsset {
        &self.placeholder
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_icon_resolves_to_placeholder() {
        let mut set = IconSet::default();
        set.insert(IconAsset::new("ash", b"<svg/>".to_vec()));
        assert_eq!(set.resolve("ash").id, "ash");
        assert!(set.resolve("nobody").is_placeholder());
        assert!(set.get("nobody").is_none());
        assert_eq!(set.get("ash").map(|a| a.svg_text().into_owned()).as_deref(), Some("<svg/>"));
        assert!(set.placeholder().svg_text().contains("<svg"));
    }

    #[test]
    fn icon_id_requires_svg_extension() {
        assert_eq!(icon_id(Utf8Path::new("icons/ash.svg")), Some("ash"));
        assert_eq!(icon_id(Utf8Path::new("icons/sub/iq.svg")), Some("iq"));
        assert_eq!(icon_id(Utf8Path::new("icons/readme.txt")), None);
    }
}
