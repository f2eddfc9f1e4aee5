use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::BenchResult;

pub const HEADER: &str = "TotalSize,CycleType,CyclePos,StepK,AvgTime,AccessCount";

/// One measured (size, scenario, k) trial.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub total_size: usize,
    pub cycle_type: &'static str,
    /// Resolved entry index; `None` is written as `-1`.
    pub cycle_pos: Option<usize>,
    pub step_k: usize,
    pub avg_time_ms: f64,
    pub access_count: u64,
}

impl ResultRow {
    pub fn to_line(&self) -> String {
        let cycle_pos = self
            .cycle_pos
            .map_or_else(|| "-1".to_string(), |pos| pos.to_string());

        format!(
            "{},{},{},{},{},{}",
            self.total_size,
            self.cycle_type,
            cycle_pos,
            self.step_k,
            self.avg_time_ms,
            self.access_count
        )
    }
}

/// Destination for result rows.
pub trait RowSink {
    fn write_row(&mut self, row: &ResultRow) -> BenchResult<()>;

    fn finish(&mut self) -> BenchResult<()> {
        Ok(())
    }
}

impl RowSink for Vec<ResultRow> {
    fn write_row(&mut self, row: &ResultRow) -> BenchResult<()> {
        self.push(row.clone());
        Ok(())
    }
}

/// Comma-separated table with a fixed header line.
pub struct CsvExporter<W: Write> {
    writer: W,
    rows: usize,
}

impl CsvExporter<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> BenchResult<Self> {
        let file = File::create(path)?;
        CsvExporter::new(BufWriter::new(file))
    }
}

impl<W: Write> CsvExporter<W> {
    pub fn new(mut writer: W) -> BenchResult<Self> {
        writeln!(writer, "{HEADER}")?;
        Ok(CsvExporter { writer, rows: 0 })
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RowSink for CsvExporter<W> {
    fn write_row(&mut self, row: &ResultRow) -> BenchResult<()> {
        writeln!(self.writer, "{}", row.to_line())?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> BenchResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ResultRow {
        ResultRow {
            total_size: 1000,
            cycle_type: "Mod(30%)",
            cycle_pos: Some(700),
            step_k: 3,
            avg_time_ms: 0.0125,
            access_count: 1809,
        }
    }

    #[test]
    fn header_comes_first() {
        let exporter = CsvExporter::new(Vec::<u8>::new()).unwrap();
        let output = String::from_utf8(exporter.into_inner()).unwrap();
        assert_eq!(output, format!("{HEADER}\n"));
    }

    #[test]
    fn row_formatting() {
        assert_eq!(sample_row().to_line(), "1000,Mod(30%),700,3,0.0125,1809");

        let acyclic = ResultRow {
            cycle_type: "NoCycle",
            cycle_pos: None,
            ..sample_row()
        };
        assert_eq!(acyclic.to_line(), "1000,NoCycle,-1,3,0.0125,1809");
    }

    #[test]
    fn rows_follow_header() {
        let mut exporter = CsvExporter::new(Vec::<u8>::new()).unwrap();
        exporter.write_row(&sample_row()).unwrap();
        exporter.write_row(&sample_row()).unwrap();
        exporter.finish().unwrap();
        assert_eq!(exporter.rows_written(), 2);

        let output = String::from_utf8(exporter.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[2], "1000,Mod(30%),700,3,0.0125,1809");
    }

    #[test]
    fn vec_sink_collects_rows() {
        let mut rows: Vec<ResultRow> = Vec::new();
        rows.write_row(&sample_row()).unwrap();
        assert_eq!(rows, vec![sample_row()]);
    }
}
