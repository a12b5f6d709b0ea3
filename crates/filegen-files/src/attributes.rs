//! Permission attributes applied to written files

use std::fs::{self, Permissions};
use std::path::Path;

use filegen_config::WriteConfig;

use crate::error::FileError;

/// Attributes applied to a file after it has been written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileAttributes {
    /// Mark the file read-only (or writable again)
    pub read_only: Option<bool>,
    /// Unix permission bits; ignored on other platforms
    pub mode: Option<u32>,
}

impl FileAttributes {
    /// Attributes that lock the file against writes
    pub fn read_only() -> Self {
        Self {
            read_only: Some(true),
            mode: None,
        }
    }

    /// Set the Unix permission bits
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Attributes configured in `config`, if any
    pub fn from_config(config: &WriteConfig) -> Option<Self> {
        if config.read_only.is_none() && config.mode.is_none() {
            return None;
        }
        Some(Self {
            read_only: config.read_only,
            mode: config.mode,
        })
    }

    /// Whether no attribute is requested
    pub fn is_empty(&self) -> bool {
        self.read_only.is_none() && self.mode.is_none()
    }

    /// Apply these attributes to the file at `path`
    ///
    /// The mode is applied first so an explicit `read_only` wins.
    pub fn apply(&self, path: &Path) -> Result<(), FileError> {
        if self.is_empty() {
            return Ok(());
        }

        let permissions = fs::metadata(path)
            .map_err(|source| FileError::AttributesFailed {
                path: path.to_path_buf(),
                source,
            })?
            .permissions();

        fs::set_permissions(path, self.applied_to(permissions)).map_err(|source| {
            FileError::AttributesFailed {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// `permissions` with these attributes applied on top
    pub(crate) fn applied_to(&self, mut permissions: Permissions) -> Permissions {
        if let Some(mode) = self.mode {
            set_mode(&mut permissions, mode);
        }
        match self.read_only {
            Some(true) => permissions.set_readonly(true),
            Some(false) => permissions = writable(&permissions),
            None => {}
        }
        permissions
    }
}

/// Permissions equal to `permissions` with owner write access granted
#[cfg(unix)]
pub(crate) fn writable(permissions: &Permissions) -> Permissions {
    use std::os::unix::fs::PermissionsExt;

    Permissions::from_mode(permissions.mode() | 0o200)
}

/// Permissions equal to `permissions` with the read-only flag cleared
#[cfg(not(unix))]
pub(crate) fn writable(permissions: &Permissions) -> Permissions {
    let mut permissions = permissions.clone();
    permissions.set_readonly(false);
    permissions
}

#[cfg(unix)]
fn set_mode(permissions: &mut Permissions, mode: u32) {
    use std::os::unix::fs::PermissionsExt;

    permissions.set_mode(mode);
}

#[cfg(not(unix))]
fn set_mode(_permissions: &mut Permissions, _mode: u32) {}
