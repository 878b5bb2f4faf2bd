//! Cart persistence in a local JSON file

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use storefront_models::Cart;

pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<data dir>/storefront/cart.json`
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().context("Could not determine user data directory")?;
        Ok(data_dir.join("storefront").join("cart.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cart; a missing file is an empty cart.
    pub fn load(&self) -> Result<Cart> {
        if !self.path.exists() {
            return Ok(Cart::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read cart file {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cart file {}", self.path.display()))
    }

    pub fn save(&self, cart: &Cart) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(cart).context("Failed to serialize cart")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write cart file {}", self.path.display()))
    }
}
