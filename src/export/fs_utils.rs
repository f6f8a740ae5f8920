use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Output files must be absolute and are only overwritten with `force`.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {}",
            path.display()
        )));
    }

    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "The file '{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Ok(())
}
