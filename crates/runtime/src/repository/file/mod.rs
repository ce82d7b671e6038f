//! File-based repository implementations.

mod ledger;
mod turn_order;

use std::fs;
use std::path::Path;

pub use ledger::FileLedgerRepository;
pub use turn_order::FileTurnOrderRepository;

use crate::repository::{RepositoryError, Result};

/// Writes `contents` next to `path` and renames it into place.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, contents).map_err(RepositoryError::Io)?;
    fs::rename(&temp_path, path).map_err(RepositoryError::Io)?;
    Ok(())
}
