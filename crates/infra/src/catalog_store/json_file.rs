use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stockroom_products::Catalog;

use super::r#trait::{CatalogError, CatalogStore};

/// Catalog stored as a single pretty-printed JSON document.
///
/// A missing file is an empty catalog. Saves go through a sibling temporary
/// file that is renamed over the target once fully written.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> CatalogError {
        CatalogError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<(), CatalogError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| self.write_error(e))?;

        let file_name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("catalog");
        let tmp = parent.join(format!(".{file_name}.tmp.{}", std::process::id()));

        if let Err(e) = write_synced(&tmp, bytes) {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_error(e));
        }

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_error(e));
        }

        if let Ok(dir) = File::open(&parent) {
            let _ = dir.sync_all();
        }
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}

impl CatalogStore for JsonFileCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "catalog file missing; starting empty");
                return Ok(Catalog::new());
            }
            Err(source) => {
                return Err(CatalogError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let catalog: Catalog = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> Result<(), CatalogError> {
        let mut bytes = serde_json::to_vec_pretty(catalog)?;
        bytes.push(b'\n');
        self.write_atomic(&bytes)?;

        tracing::debug!(path = %self.path.display(), records = catalog.len(), "catalog saved");
        Ok(())
    }
}
