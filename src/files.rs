use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use uuid::Uuid;

use crate::document::node_kind;
use crate::error::{MigrateError, Result};

/// Read and parse the legacy config, enforcing a mapping root.
pub fn read_legacy(path: &Path) -> Result<Mapping> {
    let data = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&data)?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(MigrateError::RootNotAMapping(node_kind(&other))),
    }
}

/// Serialize the migrated config to a staging file beside the
/// destination, then rename it into place to avoid partial writes.
pub fn write_migrated(path: &Path, config: &Mapping) -> Result<()> {
    let yaml = serde_yaml::to_string(config)?;

    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return Err(MigrateError::InvalidDestination(path.display().to_string()));
    };

    let nonce = Uuid::new_v4();
    let staging = path.with_file_name(format!("{file_name}.migrate.{nonce}.staging"));

    fs::write(&staging, yaml)?;
    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }

    Ok(())
}
