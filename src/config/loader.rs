//! Load model definitions from a directory of JSON files (one model, or a list of models, per file).

use crate::config::{resolve, ModelDef, ModelFile, ModelRegistry};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read every `*.json` file in `dir`, in file-name order. Other entries (README, hidden files, subdirectories) are skipped.
pub async fn load_model_dir(dir: impl AsRef<Path>) -> Result<Vec<ModelDef>, ConfigError> {
    let dir = dir.as_ref();
    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_err(dir))?;

    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_err(dir))? {
        let path = entry.path();
        let is_json = path.extension().map(|e| e == "json").unwrap_or(false);
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !is_json || hidden {
            continue;
        }
        if entry.file_type().await.map_err(io_err(&path))?.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut defs = Vec::new();
    for path in files {
        let raw = tokio::fs::read_to_string(&path).await.map_err(io_err(&path))?;
        let file: ModelFile = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        let found = file.into_defs();
        tracing::debug!(path = %path.display(), models = found.len(), "loaded model file");
        defs.extend(found);
    }
    Ok(defs)
}

/// Load and resolve in one step.
pub async fn load_registry_from_dir(dir: impl AsRef<Path>) -> Result<ModelRegistry, ConfigError> {
    let defs = load_model_dir(dir).await?;
    resolve(&defs)
}
