//! JSON-file recipe store.
//!
//! # Responsibility
//! - Persist the whole collection as one pretty-printed JSON array.
//! - Serialize appends within the process.
//!
//! # Invariants
//! - Writes go to a sibling temp file and are renamed over the target, so
//!   readers observe either the previous or the next complete collection.
//! - The append lock is held across the full read-modify-write cycle.
//! - An existing file that cannot be read or decoded is never overwritten.
//! - Two processes sharing one file are not coordinated.

use super::{RecipeStore, StoreError, StoreResult};
use crate::model::candidate::RecipeCandidate;
use crate::model::recipe::{Recipe, RecipeId};
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Collection file used when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "data/recipes.json";

/// Recipe store backed by a single JSON file.
pub struct JsonFileRecipeStore {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl JsonFileRecipeStore {
    /// Creates a store over `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append_lock: Mutex::new(()),
        }
    }

    /// Location of the collection file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tolerant read used by `list`: every failure reads as empty.
    fn read_collection(&self) -> Vec<Recipe> {
        match self.load_collection() {
            Ok(recipes) => recipes,
            Err(err) => {
                warn!(
                    "event=store_read module=store status=error error_code={} path={} error={}",
                    read_error_code(&err),
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Strict read used by `append`. Only a missing file reads as empty, so
    /// an undecodable catalog is never replaced.
    fn load_collection(&self) -> StoreResult<Vec<Recipe>> {
        let started_at = Instant::now();
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("event=store_read module=store status=ok outcome=missing_file count=0");
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        let recipes =
            serde_json::from_str::<Vec<Recipe>>(&raw).map_err(StoreError::Malformed)?;
        debug!(
            "event=store_read module=store status=ok count={} duration_ms={}",
            recipes.len(),
            started_at.elapsed().as_millis()
        );
        Ok(recipes)
    }

    fn write_collection(&self, recipes: &[Recipe]) -> StoreResult<()> {
        let encoded = serde_json::to_vec_pretty(recipes)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        replace_file(dir, &self.path, &encoded)?;
        Ok(())
    }
}

/// Stages `contents` in `staging_dir`, then renames it over `target`.
///
/// On any error `target` keeps its previous contents and the staged file is
/// removed.
fn replace_file(staging_dir: &Path, target: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut staged = NamedTempFile::new_in(staging_dir)?;
    if let Ok(metadata) = fs::metadata(target) {
        staged.as_file().set_permissions(metadata.permissions())?;
    }
    staged.write_all(contents)?;
    staged.as_file().sync_all()?;
    staged.persist(target).map_err(|err| err.error)?;
    Ok(())
}

fn read_error_code(err: &StoreError) -> &'static str {
    match err {
        StoreError::Malformed(_) => "malformed_content",
        _ => "read_failed",
    }
}

impl RecipeStore for JsonFileRecipeStore {
    fn list(&self) -> Vec<Recipe> {
        self.read_collection()
    }

    fn append(&self, candidate: &RecipeCandidate) -> StoreResult<Recipe> {
        let new_recipe = candidate.validate()?;
        let started_at = Instant::now();

        let _guard = self.append_lock.lock();
        let mut recipes = match self.load_collection() {
            Ok(recipes) => recipes,
            Err(err) => {
                error!(
                    "event=store_write module=store status=error error_code={} path={} error={}",
                    read_error_code(&err),
                    self.path.display(),
                    err
                );
                return Err(err);
            }
        };
        let recipe = new_recipe.into_recipe(unique_id(&recipes));
        recipes.push(recipe.clone());

        if let Err(err) = self.write_collection(&recipes) {
            error!(
                "event=store_write module=store status=error error_code=write_failed path={} duration_ms={} error={}",
                self.path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }

        info!(
            "event=store_write module=store status=ok count={} duration_ms={}",
            recipes.len(),
            started_at.elapsed().as_millis()
        );
        Ok(recipe)
    }
}

fn unique_id(existing: &[Recipe]) -> RecipeId {
    loop {
        let candidate = RecipeId::generate();
        if existing.iter().all(|recipe| recipe.id != candidate) {
            return candidate;
        }
    }
}
