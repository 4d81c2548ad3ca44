use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use thiserror::Error;

/// A destination for rendered output.
pub trait Store {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Stores a rendered page under its route (e.g., `/articles/hello`).
    fn store_rendered_page(&self, path: &str, rendered_html: String) -> Result<(), Self::Error>;

    /// Stores a file at the given path relative to the output root.
    fn store_static_file(&self, path: &Path, contents: Vec<u8>) -> Result<(), Self::Error>;
}

pub struct DiskStorage {
    output_path: PathBuf,
}

impl DiskStorage {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl Store for DiskStorage {
    type Error = io::Error;

    fn store_rendered_page(&self, path: &str, rendered_html: String) -> Result<(), Self::Error> {
        let output_dir = self.output_path.join(path.trim_start_matches('/'));

        fs::create_dir_all(&output_dir)?;
        fs::write(output_dir.join("index.html"), rendered_html)?;

        log::debug!("wrote {path}");

        Ok(())
    }

    fn store_static_file(&self, path: &Path, contents: Vec<u8>) -> Result<(), Self::Error> {
        let output_path = self.output_path.join(path);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&output_path, contents)?;

        log::debug!("wrote {}", path.display());

        Ok(())
    }
}

/// Keeps rendered output in memory, keyed by its URL path.
#[derive(Default, Clone)]
pub struct InMemoryStorage {
    storage: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored contents at the given URL path as UTF-8 text.
    pub fn get(&self, path: &str) -> Option<String> {
        let storage = self.storage.read().ok()?;
        let contents = storage.get(path)?;

        Some(String::from_utf8_lossy(contents).into_owned())
    }

    /// Returns the URL paths of everything stored, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths = self
            .storage
            .read()
            .map(|storage| storage.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        paths.sort();
        paths
    }

    /// Returns a copy of everything stored.
    pub fn snapshot(&self) -> HashMap<String, Vec<u8>> {
        self.storage
            .read()
            .map(|storage| (*storage).clone())
            .unwrap_or_default()
    }
}

#[derive(Error, Debug)]
pub enum InMemoryStorageError {
    #[error("poisoned")]
    Poisoned,
}

impl Store for InMemoryStorage {
    type Error = InMemoryStorageError;

    fn store_rendered_page(&self, path: &str, rendered_html: String) -> Result<(), Self::Error> {
        self.storage
            .write()
            .map_err(|_| InMemoryStorageError::Poisoned)?
            .insert(path.to_string(), rendered_html.into_bytes());

        Ok(())
    }

    fn store_static_file(&self, path: &Path, contents: Vec<u8>) -> Result<(), Self::Error> {
        let path = path
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        self.storage
            .write()
            .map_err(|_| InMemoryStorageError::Poisoned)?
            .insert(format!("/{path}"), contents);

        Ok(())
    }
}
