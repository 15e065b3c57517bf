//! Content loaders for reading editor data from files.
//!
//! The editor exports everything as JSON: scripts as arrays of
//! `{"kind", "params"}` steps, stages as one document of spawn points,
//! entities, and triggers.

pub mod scripts;
pub mod stage;

pub use scripts::{RawAction, decode_action, decode_script, encode_action, encode_script};
pub use stage::{EntityData, StageData, StageLoader, TriggerData};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
