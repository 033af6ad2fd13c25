//! Plain-text inputs and outputs around the engines.
//!
//! - Flow tables: whitespace-delimited, one header line naming at least
//!   `YR MNTH DY MOD_RUN OBS_RUN` (any order, extra columns ignored).
//! - Sweep tables: one trial per line, tab-separated floats, every line the
//!   same width.
//! - Result tables: tab-separated, one header line naming at least
//!   `lat lon GOF_stat score`, one score per catchment and statistic.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::series::SeriesPair;

/// Header names of the flow-table columns read into a [`FlowRecord`].
pub const FLOW_COLUMNS: [&str; 5] = ["YR", "MNTH", "DY", "MOD_RUN", "OBS_RUN"];

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("input is empty, expected a header line")]
    MissingHeader,
    #[error("header is missing column {0}")]
    MissingColumn(&'static str),
    #[error("line {line}: expected at least {expected} fields, got {found}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: cannot parse {field:?} as a number")]
    BadValue { line: usize, field: String },
    #[error("line {line}: expected {expected} values, got {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Header names of the result-table columns read into a [`ResultRecord`].
pub const RESULT_COLUMNS: [&str; 4] = ["lat", "lon", "GOF_stat", "score"];

/// One row of a flow table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub sim: f64,
    pub obs: f64,
}

/// A parsed flow table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowTable {
    pub records: Vec<FlowRecord>,
}

impl FlowTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The simulated/observed columns as a series pair.
    pub fn series_pair(&self) -> SeriesPair {
        let (sim, obs) = self.records.iter().map(|r| (r.sim, r.obs)).unzip();
        SeriesPair { sim, obs }
    }
}

/// One row of a result table: a goodness-of-fit score at a catchment outlet.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub lat: f64,
    pub lon: f64,
    pub gof_stat: String,
    pub score: f64,
}

/// A parsed result table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub records: Vec<ResultRecord>,
}

impl ResultTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows reporting the statistic named `gof_stat` (`MFM`, `KGE`, ...).
    pub fn for_stat<'a>(&'a self, gof_stat: &'a str) -> impl Iterator<Item = &'a ResultRecord> {
        self.records.iter().filter(move |r| r.gof_stat == gof_stat)
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, line: usize) -> Result<T, RecordError> {
    field.parse().map_err(|_| RecordError::BadValue {
        line,
        field: field.to_string(),
    })
}

/// Parse a flow table. Line numbers in errors are 1-based. Blank lines are
/// skipped. Missing-value markers such as `NaN` parse to NaN and are left
/// for the fidelity engine to mask.
pub fn read_flow_table<R: BufRead>(reader: R) -> Result<FlowTable, RecordError> {
    let mut lines = reader.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(RecordError::MissingHeader),
        }
    };
    let names: Vec<&str> = header.split_whitespace().collect();
    let mut positions = [0usize; 5];
    for (slot, column) in positions.iter_mut().zip(FLOW_COLUMNS) {
        *slot = names
            .iter()
            .position(|&n| n == column)
            .ok_or(RecordError::MissingColumn(column))?;
    }
    let width = positions.iter().max().map_or(0, |&m| m + 1);

    let mut records = Vec::new();
    for (i, line) in lines {
        let line = line?;
        let line_no = i + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < width {
            return Err(RecordError::ShortRow {
                line: line_no,
                expected: width,
                found: fields.len(),
            });
        }
        let [yr, mnth, dy, sim, obs] = positions;
        records.push(FlowRecord {
            year: parse_number(fields[yr], line_no)?,
            month: parse_number(fields[mnth], line_no)?,
            day: parse_number(fields[dy], line_no)?,
            sim: parse_number(fields[sim], line_no)?,
            obs: parse_number(fields[obs], line_no)?,
        });
    }

    debug!(rows = records.len(), "parsed flow table");
    Ok(FlowTable { records })
}

/// Read a flow table from a file.
pub fn read_flow_file<P: AsRef<Path>>(path: P) -> Result<FlowTable, RecordError> {
    let file = File::open(path)?;
    read_flow_table(BufReader::new(file))
}

/// Parse a tab-separated result table. Columns are located by header name,
/// extra columns are ignored. An empty `lat`, `lon` or `score` field reads
/// as NaN.
pub fn read_result_table<R: BufRead>(reader: R) -> Result<ResultTable, RecordError> {
    let mut lines = reader.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(RecordError::MissingHeader),
        }
    };
    let names: Vec<&str> = header.split('\t').map(str::trim).collect();
    let mut positions = [0usize; 4];
    for (slot, column) in positions.iter_mut().zip(RESULT_COLUMNS) {
        *slot = names
            .iter()
            .position(|&n| n == column)
            .ok_or(RecordError::MissingColumn(column))?;
    }
    let width = positions.iter().max().map_or(0, |&m| m + 1);

    let mut records = Vec::new();
    for (i, line) in lines {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() < width {
            return Err(RecordError::ShortRow {
                line: line_no,
                expected: width,
                found: fields.len(),
            });
        }
        let [lat, lon, gof_stat, score] = positions;
        records.push(ResultRecord {
            lat: parse_score_field(fields[lat], line_no)?,
            lon: parse_score_field(fields[lon], line_no)?,
            gof_stat: fields[gof_stat].to_string(),
            score: parse_score_field(fields[score], line_no)?,
        });
    }

    debug!(rows = records.len(), "parsed result table");
    Ok(ResultTable { records })
}

fn parse_score_field(field: &str, line: usize) -> Result<f64, RecordError> {
    if field.is_empty() {
        return Ok(f64::NAN);
    }
    parse_number(field, line)
}

/// Read a result table from a file.
pub fn read_result_file<P: AsRef<Path>>(path: P) -> Result<ResultTable, RecordError> {
    let file = File::open(path)?;
    read_result_table(BufReader::new(file))
}

/// Parse a sweep table into rows. Rows must all have the same width.
pub fn read_sweep_table<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>, RecordError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split('\t')
            .map(|f| parse_number(f.trim(), i + 1))
            .collect::<Result<Vec<f64>, _>>()?;
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(RecordError::RaggedRow {
                    line: i + 1,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Write rows as tab-separated values, one row per line.
pub fn write_sweep_table<W: Write>(mut writer: W, rows: &[Vec<f64>]) -> Result<(), RecordError> {
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", line.join("\t"))?;
    }
    writer.flush()?;
    Ok(())
}
