use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::io;
use crate::io::ext_repr::ExtYard;
use crate::supply::YardSupplier;

/// Reads a yard from a JSON file in the [`ExtYard`] format.
#[derive(Clone, Debug)]
pub struct JsonYardSupplier {
    pub path: PathBuf,
}

impl JsonYardSupplier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl YardSupplier for JsonYardSupplier {
    fn extract(&mut self) -> Result<ExtYard> {
        let yard = io::read_yard(&self.path)?;
        info!(
            "[SUPPLY] read yard with {} region vertices and {} obstacles from {}",
            yard.region.0.len(),
            yard.obstacles.len(),
            self.path.display()
        );
        Ok(yard)
    }
}
