use std::{fs::File, io::Write, path::Path};

use anyhow::Context;

use crate::measurement::Measurement;

pub const DATA_FILE: &str = "./smart_office_data.csv";
pub const HEADER: [&str; 3] = ["timestamp", "sensor_id", "value"];

#[derive(Debug)]
pub struct DataFile<W: Write> {
    writer: csv::Writer<W>,
}

impl DataFile<File> {
    /// Creates (or truncates) the CSV file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create data file {}", path.display()))?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> DataFile<W> {
    pub fn from_writer(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        Self { writer }
    }

    pub fn init(&mut self) -> Result<(), anyhow::Error> {
        self.writer
            .write_record(HEADER)
            .context("Failed to write header row")?;
        Ok(())
    }

    pub fn insert(&mut self, data: &Measurement) -> Result<(), anyhow::Error> {
        self.writer
            .serialize(data)
            .context("Failed to write row to data file")?;
        Ok(())
    }

    pub fn finish(self) -> Result<W, anyhow::Error> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush data file: {}", e.error()))
    }
}

/// Writes header plus every measurement to `path`, replacing any previous contents.
pub fn write_all(
    path: impl AsRef<Path>,
    measurements: &[Measurement],
) -> Result<(), anyhow::Error> {
    let mut data_file = DataFile::create(path)?;
    data_file.init()?;
    for m in measurements {
        data_file.insert(m)?;
    }
    data_file.finish()?;
    Ok(())
}
