//! Table sinks — where assembled tables are persisted.
//!
//! A sink accepts a named table (fixed header plus ordered rows) and
//! durably writes it. A write failure is fatal for the run; there is
//! no retry or partial-failure recovery.

use crate::error::FixtureResult;
use std::fs;
use std::path::PathBuf;

/// A flattened tabular view ready for persistence.
pub struct TableView {
    pub name: &'static str,
    pub header: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// The contract every sink must fulfill: persist one table, header
/// first, rows in the order given, flushed before returning.
pub trait TableSink {
    fn write_table(&mut self, table: &TableView) -> FixtureResult<()>;
}

/// Writes each table as `<name>.csv` under one output directory.
pub struct CsvFileSink {
    out_dir: PathBuf,
}

impl CsvFileSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

impl TableSink for CsvFileSink {
    fn write_table(&mut self, table: &TableView) -> FixtureResult<()> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(format!("{}.csv", table.name));
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(table.header)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        log::info!("wrote {} rows to {}", table.row_count(), path.display());
        Ok(())
    }
}

/// Renders each table to an in-memory CSV buffer. Used by tests to
/// compare runs byte for byte, and by callers that embed the tables.
#[derive(Default)]
pub struct MemorySink {
    tables: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_bytes(&self, name: &str) -> Option<&[u8]> {
        self.tables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, bytes)| bytes.as_slice())
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(n, _)| n.as_str())
    }
}

impl TableSink for MemorySink {
    fn write_table(&mut self, table: &TableView) -> FixtureResult<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(table.header)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("CSV buffer flush failed: {e}"))?;
        self.tables.push((table.name.to_string(), bytes));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TableView {
        TableView {
            name: "sample",
            header: &["a", "b"],
            rows: vec![
                vec!["1".into(), "x".into()],
                vec!["2".into(), String::new()],
            ],
        }
    }

    #[test]
    fn memory_sink_renders_header_and_rows() {
        let mut sink = MemorySink::new();
        sink.write_table(&sample_table()).unwrap();
        let bytes = sink.table_bytes("sample").unwrap();
        assert_eq!(std::str::from_utf8(bytes).unwrap(), "a,b\n1,x\n2,\n");
    }

    #[test]
    fn csv_file_sink_writes_one_file_per_table() {
        let dir = std::env::temp_dir().join(format!("funnel-sink-{}", std::process::id()));
        let mut sink = CsvFileSink::new(&dir);
        sink.write_table(&sample_table()).unwrap();
        let written = std::fs::read_to_string(dir.join("sample.csv")).unwrap();
        assert_eq!(written, "a,b\n1,x\n2,\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
