//! OS-specific data root resolution.

use std::path::PathBuf;

use super::error::PathError;

/// Root directory for prodcat user data.
///
/// Resolves to the platform data directory (e.g. `~/.local/share/prodcat`
/// on Linux, `~/Library/Application Support/prodcat` on macOS).
pub fn data_root() -> Result<PathBuf, PathError> {
    dirs::data_dir()
        .map(|dir| dir.join("prodcat"))
        .ok_or(PathError::NoDataDir)
}
