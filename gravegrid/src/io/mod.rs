use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::io::ext_repr::ExtYard;

/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// All logic for rendering placement results as SVG
pub mod svg;

pub fn read_yard(path: &Path) -> Result<ExtYard> {
    let file = File::open(path)
        .with_context(|| format!("could not open yard file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse yard file: {}", path.display()))
}
