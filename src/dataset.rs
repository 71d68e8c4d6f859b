//! Data package loading.
//!
//! A package is an `operators.json` object keyed by identifier plus an
//! optional `icons/` directory holding one `<id>.svg` per operator. It can be
//! read from a directory ([`FsSource`]), a ZIP archive ([`ZipSource`]) or the
//! copy compiled into the binary ([`EmbeddedSource`]).

use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use once_cell::sync::Lazy;

use crate::catalog::Catalog;
use crate::icons::IconSet;
use crate::model::Dataset;
use crate::source::{ContentSource, EmbeddedSource, FsSource, ZipSource};

/// Logical path of the operator records inside a package.
pub const OPERATORS_FILE: &str = "operators.json";

/// Logical path of the icon directory inside a package.
pub const ICONS_DIR: &str = "icons";

/// A loaded data package.
#[derive(Debug, Clone)]
pub struct Package {
    pub dataset: Dataset,
    pub catalog: Catalog,
    pub icons: IconSet,
}

/// Loads a [`Package`] from any [`ContentSource`].
pub struct DatasetLoader<S: ContentSource> {
    source: S,
    label: String,
}

impl<S: ContentSource> DatasetLoader<S> {
    /// `label` names the package in log output and error messages.
    pub fn new(source: S, label: impl Into<String>) -> Self {
        Self {
            source,
            label: label.into(),
        }
    }

    /// Parse only the operator records.
    pub fn load_dataset(&mut self) -> Result<Dataset> {
        let path = Utf8Path::new(OPERATORS_FILE);
        let text = self
            .source
            .read_to_string(path)
            .with_context(|| format!("Failed to read {} from {}", OPERATORS_FILE, self.label))?;
        let dataset = Dataset::from_json(&text)
            .with_context(|| format!("Failed to parse {} in {}", OPERATORS_FILE, self.label))?;
        if dataset.is_empty() {
            bail!("{} in {} contains no operators", OPERATORS_FILE, self.label);
        }
        Ok(dataset)
    }

    /// Parse the operator records and the icon directory, and build the catalog.
    pub fn load(&mut self) -> Result<Package> {
        let dataset = self.load_dataset()?;
        let icons = IconSet::load(&mut self.source, Utf8Path::new(ICONS_DIR))
            .with_context(|| format!("Failed to load icons from {}", self.label))?;
        let catalog = Catalog::from_dataset(&dataset);
        tracing::info!(
            package = %self.label,
            operators = dataset.len(),
            roles = catalog.roles().len(),
            units = catalog.units().len(),
            icons = icons.len(),
            "loaded data package"
        );
        Ok(Package {
            dataset,
            catalog,
            icons,
        })
    }
}

/// Open a package from disk: `.zip` files are read as archives, anything else
/// as a directory.
pub fn open_package(path: impl AsRef<Utf8Path>) -> Result<Package> {
    let path = path.as_ref();
    if path.extension() == Some("zip") {
        let file = std::fs::File::open(path).with_context(|| format!("Open {}", path))?;
        let reader = std::io::BufReader::new(file);
        DatasetLoader::new(ZipSource::new(reader)?, path.as_str()).load()
    } else {
        if !path.is_dir() {
            bail!("{} is neither a directory nor a .zip archive", path);
        }
        DatasetLoader::new(FsSource::new(path), path.as_str()).load()
    }
}

/// Open the package at `path`, or the bundled one when `path` is `None`.
pub fn open_package_or_bundled(path: Option<&Utf8PathBuf>) -> Result<Package> {
    match path {
        Some(p) => open_package(p),
        None => Ok(bundled_package().clone()),
    }
}

/// The package compiled into the binary, loaded on first access.
pub fn bundled_package() -> &'static Package {
    static BUNDLED: Lazy<Package> = Lazy::new(|| {
        DatasetLoader::new(EmbeddedSource, "bundled package")
            .load()
            .unwrap_or_else(|e| panic!("bundled data package is invalid: {e:#}"))
    });
    &BUNDLED
}

/// Icons of the bundled package.
pub fn bundled_icons() -> &'static IconSet {
    &bundled_package().icons
}
