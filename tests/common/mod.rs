use std::fs::File;
use std::io::Error;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes an events CSV with the standard header into `dir`.
pub fn write_events(dir: &TempDir, rows: &[[&str; 3]]) -> Result<PathBuf, Error> {
    let path = dir.path().join("events.csv");
    let mut wtr = csv::WriterBuilder::new().from_writer(File::create(&path)?);

    wtr.write_record(["type", "payment", "amount"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(path)
}

/// Creates `count` payments of `amount` each, moved into escrow and released.
pub fn generate_released_payments(path: &Path, count: u32, amount: &str) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_writer(File::create(path)?);
    wtr.write_record(["type", "payment", "amount"])?;

    for id in 1..=count {
        let id = id.to_string();
        wtr.write_record(["create", &id, amount])?;
        wtr.write_record(["hold", &id, ""])?;
        wtr.write_record(["release", &id, ""])?;
    }

    wtr.flush()?;
    Ok(())
}
