//! Builder for creating and configuring PlanStore instances.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{
    seed::{ensure_unique_ids, first_free_id, load_seed_file, sample_plans},
    PlanStore,
};
use crate::{error::Result, models::Plan};

/// Where the initial collection comes from.
#[derive(Debug, Clone)]
enum Seed {
    /// XDG seed file when present, otherwise the sample data
    Default,
    File(PathBuf),
    Plans(Vec<Plan>),
    Empty,
}

/// Builder for creating and configuring PlanStore instances.
#[derive(Debug, Clone)]
pub struct PlanStoreBuilder {
    seed: Seed,
}

impl PlanStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { seed: Seed::Default }
    }

    /// Sets a JSON seed file to load the initial plans from.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/wayfarer/seed.json` when that
    /// file exists and the built-in sample plans otherwise.
    pub fn with_seed_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.seed = Seed::File(path.as_ref().to_path_buf());
        }
        self
    }

    /// Seeds the store with the given plans.
    pub fn with_plans(mut self, plans: Vec<Plan>) -> Self {
        self.seed = Seed::Plans(plans);
        self
    }

    /// Starts with an empty collection.
    pub fn empty(mut self) -> Self {
        self.seed = Seed::Empty;
        self
    }

    /// Builds the configured store.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::FileSystem` if a seed file cannot be read,
    /// `WayfarerError::Serialization` if it is malformed, and
    /// `WayfarerError::InvalidInput` if seeded plans share an id.
    pub fn build(self) -> Result<PlanStore> {
        let plans = match self.seed {
            Seed::Default => match Self::default_seed_path() {
                Some(path) => {
                    info!("Loading seed plans from {}", path.display());
                    load_seed_file(&path)?
                }
                None => {
                    debug!("No seed file configured, using sample plans");
                    sample_plans()
                }
            },
            Seed::File(path) => {
                info!("Loading seed plans from {}", path.display());
                load_seed_file(&path)?
            }
            Seed::Plans(plans) => {
                ensure_unique_ids(&plans)?;
                plans
            }
            Seed::Empty => Vec::new(),
        };

        let next_id = first_free_id(&plans);
        debug!("Store seeded with {} plans, next id {next_id}", plans.len());
        Ok(PlanStore::new(plans, next_id))
    }

    /// Returns the XDG seed file path if such a file exists.
    fn default_seed_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfarer").find_config_file("seed.json")
    }
}

impl Default for PlanStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
