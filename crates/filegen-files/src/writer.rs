//! Writing documents to disk
//!
//! A write never leaves a partially written destination: contents go to a
//! temporary file next to the destination, which is then renamed over it.
//! The temporary file receives its final permissions (the destination's
//! previous ones plus any requested attributes) before the rename, so an
//! error never leaves new contents behind. When the destination is
//! read-only and unlocking is enabled, it is made writable for the write and
//! its permissions are put back if the write fails.

use std::fs::{self, Permissions};
use std::io;
use std::path::{Path, PathBuf};

use filegen_config::WriteConfig;
use filegen_generation::Document;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::attributes::{self, FileAttributes};
use crate::error::FileError;

/// Options controlling how documents are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Attributes applied after a successful write
    pub attributes: Option<FileAttributes>,
    /// Temporarily clear read-only destinations instead of failing
    pub unlock: bool,
    /// Create missing parent directories instead of failing
    pub create_parent_directories: bool,
    /// Resolve destinations without touching the filesystem
    pub dry_run: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            attributes: None,
            unlock: true,
            create_parent_directories: false,
            dry_run: false,
        }
    }
}

impl From<&WriteConfig> for WriteOptions {
    fn from(config: &WriteConfig) -> Self {
        Self {
            attributes: FileAttributes::from_config(config),
            unlock: config.unlock,
            create_parent_directories: config.create_parent_directories,
            dry_run: config.dry_run,
        }
    }
}

/// Result of writing a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWriteResult {
    /// Destination path
    pub path: PathBuf,
    /// Whether bytes were persisted
    pub written: bool,
    /// Whether a read-only destination was unlocked and relocked
    pub unlocked: bool,
    /// Whether this was a dry-run
    pub dry_run: bool,
}

/// Result of writing several documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Results for each document, in order
    pub files: Vec<FileWriteResult>,
    /// Number of documents persisted
    pub files_written: usize,
    /// Number of read-only destinations that were unlocked
    pub files_unlocked: usize,
    /// Whether this was a dry-run
    pub dry_run: bool,
}

impl WriteReport {
    /// One-line summary of the report
    pub fn summary(&self) -> String {
        format!(
            "Files written: {}, Files unlocked: {}{}",
            self.files_written,
            self.files_unlocked,
            if self.dry_run { " (dry-run)" } else { "" }
        )
    }
}

/// Persists documents according to [`WriteOptions`]
#[derive(Debug, Clone, Default)]
pub struct DocumentWriter {
    options: WriteOptions,
}

impl DocumentWriter {
    /// Create a writer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Options this writer uses
    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Write `document` into `directory`, using the document's name as file name
    pub fn write_into(
        &self,
        document: &Document,
        directory: &Path,
    ) -> Result<FileWriteResult, FileError> {
        self.write_to(document, &directory.join(document.name()))
    }

    /// Write `document` to exactly `path`
    pub fn write_to(&self, document: &Document, path: &Path) -> Result<FileWriteResult, FileError> {
        if self.options.dry_run {
            debug!(path = %path.display(), "Dry-run: skipping write");
            return Ok(FileWriteResult {
                path: path.to_path_buf(),
                written: false,
                unlocked: false,
                dry_run: true,
            });
        }

        if self.options.create_parent_directories {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|source| FileError::WriteFailed {
                        path: path.to_path_buf(),
                        source,
                    })?;
                }
            }
        }

        let attributes = self.options.attributes.filter(|attributes| !attributes.is_empty());
        let unlocked = self.locked_write(path, |path, existing| {
            write_atomic(path, document.contents(), existing, attributes)
        })?;

        debug!(
            document = document.name(),
            path = %path.display(),
            bytes = document.contents().len(),
            unlocked,
            "Wrote document"
        );

        Ok(FileWriteResult {
            path: path.to_path_buf(),
            written: true,
            unlocked,
            dry_run: false,
        })
    }

    /// Write every document into `directory`, in order
    ///
    /// Stops at the first failure and returns it; documents written before
    /// the failure stay written.
    pub fn write_all(
        &self,
        documents: &[Document],
        directory: &Path,
    ) -> Result<WriteReport, FileError> {
        let mut report = WriteReport {
            dry_run: self.options.dry_run,
            ..Default::default()
        };

        for document in documents {
            let result = self.write_into(document, directory)?;
            if result.written {
                report.files_written += 1;
            }
            if result.unlocked {
                report.files_unlocked += 1;
            }
            report.files.push(result);
        }

        debug!(summary = %report.summary(), "Finished writing documents");
        Ok(report)
    }

    /// Run `write` against `path`, unlocking a read-only destination first
    ///
    /// Existing permissions are captured and handed to `write`, which must
    /// carry them over to the new file. When `write` fails they are put back
    /// on the untouched destination. Returns whether the destination had to
    /// be unlocked.
    fn locked_write<F>(&self, path: &Path, write: F) -> Result<bool, FileError>
    where
        F: FnOnce(&Path, Option<&Permissions>) -> Result<(), FileError>,
    {
        let existing = existing_permissions(path)?;

        let unlocked = match &existing {
            Some(permissions) if permissions.readonly() => {
                if !self.options.unlock {
                    return Err(FileError::NotWritable(path.to_path_buf()));
                }
                fs::set_permissions(path, attributes::writable(permissions)).map_err(
                    |source| FileError::AttributesFailed {
                        path: path.to_path_buf(),
                        source,
                    },
                )?;
                debug!(path = %path.display(), "Unlocked read-only destination");
                true
            }
            _ => false,
        };

        let error = match write(path, existing.as_ref()) {
            Ok(()) => return Ok(unlocked),
            Err(error) => error,
        };

        if unlocked {
            if let Some(permissions) = existing {
                if let Err(source) = fs::set_permissions(path, permissions) {
                    let restore_error = FileError::RestoreFailed {
                        path: path.to_path_buf(),
                        source,
                    };
                    warn!(error = %restore_error, "Failed to restore attributes after failed write");
                }
            }
        }
        Err(error)
    }
}

/// Convenience methods for writing a document directly
pub trait DocumentWriteExt {
    /// Write to exactly `path`
    fn write_to(&self, path: impl AsRef<Path>, options: &WriteOptions)
        -> Result<FileWriteResult, FileError>;

    /// Write into `directory` under the document's name
    fn write_into(
        &self,
        directory: impl AsRef<Path>,
        options: &WriteOptions,
    ) -> Result<FileWriteResult, FileError>;
}

impl DocumentWriteExt for Document {
    fn write_to(
        &self,
        path: impl AsRef<Path>,
        options: &WriteOptions,
    ) -> Result<FileWriteResult, FileError> {
        DocumentWriter::with_options(options.clone()).write_to(self, path.as_ref())
    }

    fn write_into(
        &self,
        directory: impl AsRef<Path>,
        options: &WriteOptions,
    ) -> Result<FileWriteResult, FileError> {
        DocumentWriter::with_options(options.clone()).write_into(self, directory.as_ref())
    }
}

/// Permissions of the destination, or `None` when it does not exist yet
fn existing_permissions(path: &Path) -> Result<Option<Permissions>, FileError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(FileError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write to a sibling temporary file and rename it over `path`
///
/// The temporary file gets `existing` permissions with `attributes` applied
/// on top before the rename, so `path` only ever changes in one step.
fn write_atomic(
    path: &Path,
    contents: &str,
    existing: Option<&Permissions>,
    attributes: Option<FileAttributes>,
) -> Result<(), FileError> {
    let temp_path = temp_path(path);
    let write_failed = |source| FileError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let result = fs::write(&temp_path, contents)
        .map_err(write_failed)
        .and_then(|()| {
            let base = match existing {
                Some(permissions) => Some(permissions.clone()),
                None if attributes.is_some() => Some(
                    fs::metadata(&temp_path)
                        .map_err(|source| FileError::AttributesFailed {
                            path: path.to_path_buf(),
                            source,
                        })?
                        .permissions(),
                ),
                None => None,
            };
            match base {
                Some(base) => {
                    let permissions = match attributes {
                        Some(attributes) => attributes.applied_to(base),
                        None => base,
                    };
                    fs::set_permissions(&temp_path, permissions).map_err(|source| {
                        FileError::AttributesFailed {
                            path: path.to_path_buf(),
                            source,
                        }
                    })
                }
                None => Ok(()),
            }
        })
        .and_then(|()| fs::rename(&temp_path, path).map_err(write_failed));

    if result.is_err() {
        // The temp file may not exist if the first write failed
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = format!(
        ".tmp-{}-{}",
        Uuid::new_v4(),
        path.file_name().and_then(|n| n.to_str()).unwrap_or("file")
    );
    path.with_file_name(file_name)
}
