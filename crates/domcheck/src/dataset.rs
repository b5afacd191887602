//! In-memory table loaded from CSV or an Excel workbook

use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use tracing::{debug, warn};

use crate::error::{BatchError, BatchResult};

/// Header row plus string cells. Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build from headers and rows, padding short rows with empty cells and
    /// dropping cells beyond the last header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, mut row)| {
                if row.len() > width {
                    warn!(
                        row = idx + 1,
                        cells = row.len(),
                        width,
                        "dropping cells beyond the header row"
                    );
                }
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Read a headered CSV table
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> BatchResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(columns = headers.len(), rows = rows.len(), "loaded CSV");
        Ok(Self::new(headers, rows))
    }

    /// Open and read a table file.
    ///
    /// `.xlsx`, `.xlsm`, `.xlsb`, `.xls` and `.ods` are read as workbooks;
    /// anything else is read as CSV with `delimiter`.
    pub fn open(path: impl AsRef<Path>, delimiter: u8) -> BatchResult<Self> {
        let path = path.as_ref();
        if is_spreadsheet(path) {
            return Self::open_spreadsheet(path);
        }
        let file = File::open(path)?;
        Self::from_reader(file, delimiter)
    }

    /// Read the first sheet of a workbook, using its first row as headers
    pub fn open_spreadsheet(path: impl AsRef<Path>) -> BatchResult<Self> {
        let path = path.as_ref();
        let mut workbook: Sheets<_> = open_workbook_auto(path)?;

        let Some(sheet) = workbook.sheet_names().first().cloned() else {
            warn!(path = %path.display(), "workbook has no sheets");
            return Ok(Self::default());
        };
        let range = workbook.worksheet_range(&sheet)?;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header) => header
                .iter()
                .map(|cell| cell_text(cell).trim().to_string())
                .collect(),
            None => Vec::new(),
        };
        let rows: Vec<Vec<String>> = rows
            .map(|row| row.iter().map(cell_text).collect())
            .collect();

        debug!(
            sheet = %sheet,
            columns = headers.len(),
            rows = rows.len(),
            "loaded worksheet"
        );
        Ok(Self::new(headers, rows))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column with this exact header
    pub fn column_index(&self, name: &str) -> BatchResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| BatchError::MissingColumn {
                column: name.to_string(),
                available: self.headers.clone(),
            })
    }

    /// Index of `name`, appending an empty column first if it does not exist
    pub(crate) fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.headers.iter().position(|h| h == name) {
            return idx;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows
    }

    /// Keep only the listed columns (in that order) and the first `limit` rows
    pub fn select(&self, columns: &[usize], limit: usize) -> Self {
        let headers = columns.iter().map(|&c| self.headers[c].clone()).collect();
        let rows = self
            .rows
            .iter()
            .take(limit)
            .map(|row| columns.iter().map(|&c| row[c].clone()).collect())
            .collect();
        Self { headers, rows }
    }
}

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Cell value as text. Whole floats lose their ".0" so scores and IDs read
/// back the way they were typed.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
        Data::Float(n) => format!("{n}"),
        Data::Int(n) => format!("{n}"),
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}
