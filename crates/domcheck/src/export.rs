//! Writing annotated tables

use std::io::Write;

use rust_xlsxwriter::Workbook as XlsxWorkbook;
use serde_json::{Map, Value};

use crate::config::ExportFormat;
use crate::dataset::Dataset;
use crate::error::{BatchError, BatchResult};

/// Name of the only worksheet in Excel exports
pub const RESULTS_SHEET: &str = "Results";

// Excel's per-worksheet limits, header row included
const MAX_SHEET_ROWS: usize = 1_048_576;
const MAX_SHEET_COLUMNS: usize = 16_384;

/// Write the table as CSV with a header row
pub fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> BatchResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(dataset.headers())?;
    for row in dataset.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the table as a JSON array of objects keyed by header.
///
/// Integer-looking cells in `numeric_columns` are emitted as numbers.
/// With duplicate headers the last column wins.
pub fn write_json<W: Write>(
    dataset: &Dataset,
    numeric_columns: &[&str],
    writer: W,
) -> BatchResult<()> {
    let records: Vec<Value> = dataset
        .rows()
        .iter()
        .map(|row| {
            let object: Map<String, Value> = dataset
                .headers()
                .iter()
                .zip(row)
                .map(|(header, cell)| {
                    let value = match cell.parse::<i64>() {
                        Ok(n) if numeric_columns.contains(&header.as_str()) => Value::from(n),
                        _ => Value::String(cell.clone()),
                    };
                    (header.clone(), value)
                })
                .collect();
            Value::Object(object)
        })
        .collect();

    serde_json::to_writer_pretty(writer, &records)?;
    Ok(())
}

/// Write the table as an `.xlsx` workbook with a single [`RESULTS_SHEET`].
///
/// Integer-looking cells in `numeric_columns` are written as numbers; empty
/// cells are left blank.
pub fn write_xlsx<W: Write>(
    dataset: &Dataset,
    numeric_columns: &[&str],
    mut writer: W,
) -> BatchResult<()> {
    let rows = dataset.len() + 1;
    let columns = dataset.headers().len();
    if rows > MAX_SHEET_ROWS || columns > MAX_SHEET_COLUMNS {
        return Err(BatchError::SheetLimit { rows, columns });
    }

    let mut workbook = XlsxWorkbook::new();
    let worksheet = workbook.add_worksheet().set_name(RESULTS_SHEET)?;

    // rust_xlsxwriter uses 0-based row/col as u32/u16; bounds checked above
    for (col, header) in dataset.headers().iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }
    for (idx, row) in dataset.rows().iter().enumerate() {
        let row_num = idx as u32 + 1;
        for (col, (header, cell)) in dataset.headers().iter().zip(row).enumerate() {
            if cell.is_empty() {
                continue;
            }
            match cell.parse::<i64>() {
                Ok(n) if numeric_columns.contains(&header.as_str()) => {
                    worksheet.write_number(row_num, col as u16, n as f64)?
                }
                _ => worksheet.write_string(row_num, col as u16, cell)?,
            };
        }
    }

    let buffer = workbook.save_to_buffer()?;
    writer.write_all(&buffer)?;
    Ok(())
}

/// Write in the selected format
pub fn write_dataset<W: Write>(
    dataset: &Dataset,
    format: ExportFormat,
    numeric_columns: &[&str],
    writer: W,
) -> BatchResult<()> {
    match format {
        ExportFormat::Csv => write_csv(dataset, writer),
        ExportFormat::Json => write_json(dataset, numeric_columns, writer),
        ExportFormat::Xlsx => write_xlsx(dataset, numeric_columns, writer),
    }
}

/// Plain-text table with padded columns, for terminal previews
pub fn render_table(dataset: &Dataset) -> String {
    let mut widths: Vec<usize> = dataset.headers().iter().map(|h| h.chars().count()).collect();
    for row in dataset.rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(dataset.headers())];
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(dataset.rows().iter().map(|row| format_row(row)));
    lines.join("\n")
}
