// File: src/persistence.rs
use crate::core::table::ClassTable;
use crate::error::Result;
use log::info;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a built table as a bincode snapshot.
///
/// The snapshot goes to a temporary file in the target directory first and
/// is then renamed over `path`, so readers never see a half-written file.
pub fn save_snapshot(table: &ClassTable, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    bincode::serialize_into(&mut writer, table)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path).map_err(|e| e.error)?;
    info!("class table snapshot written to {}", path.display());
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<ClassTable> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let table: ClassTable = bincode::deserialize_from(reader)?;
    Ok(table)
}
