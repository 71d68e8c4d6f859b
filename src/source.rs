//! Content source abstraction for reading a data package from the filesystem,
//! a ZIP archive, or the package compiled into the binary.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use std::io::Read;

/// Trait for abstracting package file I/O.
///
/// Paths are logical: relative to the package root, `/`-separated.
pub trait ContentSource {
    /// Read a file at the given logical path and return its raw bytes.
    fn read_bytes(&mut self, path: &Utf8Path) -> Result<Vec<u8>>;
    /// List files below a directory path (recursively), returning full logical paths.
    /// A missing directory yields an empty list.
    fn list_dir(&mut self, path: &Utf8Path) -> Result<Vec<Utf8PathBuf>>;

    /// Read a file at the given logical path as UTF-8 text.
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path))
    }

    /// Filesystem root of the package, when it has one. Lets loaders take
    /// faster paths (parallel reads) for plain directories.
    fn fs_root(&self) -> Option<&Utf8Path> {
        None
    }
}

/// Reads a package laid out as a plain directory.
pub struct FsSource {
    root: Utf8PathBuf,
}

impl FsSource {
    pub fn new(root: impl AsRef<Utf8Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ContentSource for FsSource {
    fn read_bytes(&mut self, path: &Utf8Path) -> Result<Vec<u8>> {
        let full = self.root.join(path);
        std::fs::read(full.as_std_path()).with_context(|| format!("Failed to read {}", full))
    }

    fn list_dir(&mut self, path: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
        let dir = self.root.join(path);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(dir.as_std_path()).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Read dir {}", dir))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let full = Utf8PathBuf::from_path_buf(entry.into_path())
                .map_err(|p| anyhow::anyhow!("Non-UTF8 path {}", p.display()))?;
            let rel = full
                .strip_prefix(&self.root)
                .map(|p| p.to_path_buf())
                .unwrap_or(full);
            files.push(rel);
        }
        Ok(files)
    }

    fn fs_root(&self) -> Option<&Utf8Path> {
        Some(self.root.as_path())
    }
}

/// Reads a package from a ZIP archive.
pub struct ZipSource<R: Read + std::io::Seek> {
    zip: zip::ZipArchive<R>,
}

impl<R: Read + std::io::Seek> ZipSource<R> {
    pub fn new(reader: R) -> Result<Self> {
        let zip = zip::ZipArchive::new(reader).context("Failed to open zip archive")?;
        Ok(Self { zip })
    }
}

fn normalize_logical(path: &Utf8Path) -> String {
    path.as_str()
        .trim_start_matches("./")
        .trim_start_matches('/')
        .to_string()
}

fn dir_prefix(path: &Utf8Path) -> String {
    let mut prefix = normalize_logical(path);
    if !prefix.is_empty() && !prefix.ends_with('/') {
        prefix.push('/');
    }
    prefix
}

impl<R: Read + std::io::Seek> ContentSource for ZipSource<R> {
    fn read_bytes(&mut self, path: &Utf8Path) -> Result<Vec<u8>> {
        let p = normalize_logical(path);
        let mut f = self
            .zip
            .by_name(&p)
            .with_context(|| format!("File {} not found in zip", p))?;
        let mut buf = Vec::new();
        f.read_to_end(&mut buf)
            .with_context(|| format!("Failed to read {} from zip", p))?;
        Ok(buf)
    }

    fn list_dir(&mut self, path: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
        let prefix = dir_prefix(path);
        let mut files = Vec::new();
        for i in 0..self.zip.len() {
            let name = self.zip.by_index(i)?.name().to_string();
            if name.starts_with(&prefix) && !name.ends_with('/') {
                files.push(Utf8PathBuf::from(name));
            }
        }
        files.sort();
        Ok(files)
    }
}

#[derive(RustEmbed)]
#[folder = "assets/"]
struct BundledAssets;

/// Reads the data package compiled into the binary from `assets/`.
#[derive(Default)]
pub struct EmbeddedSource;

impl ContentSource for EmbeddedSource {
    fn read_bytes(&mut self, path: &Utf8Path) -> Result<Vec<u8>> {
        let p = normalize_logical(path);
        let file = BundledAssets::get(&p)
            .with_context(|| format!("File {} not found in bundled package", p))?;
        Ok(file.data.into_owned())
    }

    fn list_dir(&mut self, path: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
        let prefix = dir_prefix(path);
        let mut files: Vec<Utf8PathBuf> = BundledAssets::iter()
            .filter(|name| name.starts_with(&prefix))
            .map(|name| Utf8PathBuf::from(name.as_ref()))
            .collect();
        files.sort();
        Ok(files)
    }
}
