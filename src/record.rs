//! JSON records carrying a `version` field.
//!
//! Only `version` is ever touched. Every other field is kept as-is, in its
//! original order, when a record is written back.

use crate::error::{Result, VersionizeError};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Identifies a record on disk that a bump wrote to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordHandle {
    path: PathBuf,
}

impl RecordHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordHandle { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file name, for diagnostics
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// An immutable JSON object read from (or destined for) a file
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    handle: RecordHandle,
    fields: Map<String, Value>,
}

impl Record {
    /// An empty record that does not exist on disk yet
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Record {
            handle: RecordHandle::new(path),
            fields: Map::new(),
        }
    }

    /// Read a record, `Ok(None)` if the file does not exist.
    pub fn read(path: impl Into<PathBuf>) -> Result<Option<Self>> {
        let handle = RecordHandle::new(path);

        let content = match fs::read_to_string(handle.path()) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value: Value =
            serde_json::from_str(&content).map_err(|source| VersionizeError::MalformedRecord {
                file: handle.name(),
                source,
            })?;

        match value {
            Value::Object(fields) => Ok(Some(Record { handle, fields })),
            _ => Err(VersionizeError::NotAnObject {
                file: handle.name(),
            }),
        }
    }

    /// Read a record, falling back to an empty one if the file is absent.
    pub fn read_or_empty(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        Ok(Record::read(&path)?.unwrap_or_else(|| Record::empty(path)))
    }

    pub fn handle(&self) -> &RecordHandle {
        &self.handle
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The raw `version` value.
    ///
    /// Missing, `null` and `""` are all absent. Non-string values are
    /// rendered as JSON text so they fail validation instead of vanishing.
    pub fn version(&self) -> Option<String> {
        match self.fields.get("version") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// A copy of this record with `version` replaced
    pub fn with_version(&self, version: &impl ToString) -> Self {
        let mut fields = self.fields.clone();
        fields.insert("version".to_string(), Value::String(version.to_string()));
        Record {
            handle: self.handle.clone(),
            fields,
        }
    }

    /// Serialized form: 2-space indented JSON and one trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut content = serde_json::to_string_pretty(&self.fields).map_err(|source| {
            VersionizeError::MalformedRecord {
                file: self.handle.name(),
                source,
            }
        })?;
        content.push('\n');
        Ok(content)
    }

    /// Write this record to disk.
    ///
    /// An existing file is replaced through a temporary file next to it
    /// that is renamed over the target, keeping the original permissions,
    /// so readers never see a half-written record.
    pub fn write(&self) -> Result<()> {
        let content = self.to_json()?;
        let path = self.handle.path();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let permissions = match fs::metadata(path) {
            Ok(metadata) => metadata.permissions(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // nothing to replace, and a temp file would be created 0600
                fs::write(path, content)?;
                tracing::debug!(path = %path.display(), "created record");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        file.as_file().set_permissions(permissions)?;
        file.persist(path).map_err(|e| VersionizeError::Io(e.error))?;

        tracing::debug!(path = %path.display(), "wrote record");
        Ok(())
    }
}
