//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use turbo_cache::Cache;
use turbo_cart::{CartStore, HttpInventory};
use turbo_data::FetchClient;

use crate::config::CartConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
const CONFIG_NAMES: [&str; 3] = ["cart.toml", ".cart.toml", "cart.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CartConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CartConfig::load(path)?,
            None => match find_config(&cwd) {
                Some(path) => {
                    output.debug(&format!("Using config {}", path.display()));
                    CartConfig::load(&path)?
                }
                None => CartConfig::default(),
            },
        }
        .with_env_overrides();

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Open the cart store described by the config.
    pub fn open_store(&self) -> Result<CartStore> {
        let storage_path = self.resolve_path(&self.config.storage.path);
        let cache = Cache::open_file(&storage_path)
            .with_context(|| format!("Failed to open cart storage: {}", storage_path.display()))?;

        let mut client = FetchClient::new().with_base_url(self.config.api.base_url.clone());
        if let Some(timeout) = self.config.api.timeout() {
            client = client.with_timeout(timeout);
        }
        let inventory = Arc::new(HttpInventory::with_client(client));

        self.output.debug(&format!(
            "Cart storage {} (key {}), API {}",
            storage_path.display(),
            self.config.storage.key,
            self.config.api.base_url
        ));

        Ok(
            CartStore::builder(inventory.clone(), inventory, cache)
                .storage_key(self.config.storage.key.clone())
                .build(),
        )
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find the nearest config file from `start` upwards.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}
