//! Atomic JSON writes: serialize into a temp file next to the target, then rename over it.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::error::StorageError;

/// Writes `value` as 4-space indented JSON to `path`. The target is either fully replaced or untouched.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let mut ser =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        value.serialize(&mut ser)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    tmp.persist(path)
        .map_err(|e| StorageError::Persist(format!("{}: {}", path.display(), e)))?;
    Ok(())
}
