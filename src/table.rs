/*!
 * In-memory tabular data model backed by CSV files.
 *
 * The translation core only constrains the in-memory shape: ordered column
 * names and ordered text values per column. This module supplies that shape
 * from CSV input and writes the augmented table back out. Missing cells are
 * coerced to empty strings so every column exposes one value per row.
 */

use std::io::{Read, Write};
use std::path::Path;

use crate::errors::TableError;
use crate::language_utils;

/// One selected column: name plus ordered cell values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header name of the column
    pub name: String,

    /// Cell values in row order, missing cells coerced to ""
    pub values: Vec<String>,
}

/// A parsed table: ordered headers and rows of text cells
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows. Ragged rows are padded with
    /// empty strings; cells beyond the header width are dropped.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Read a table from a CSV file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Read a table from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(Self::new(headers, rows))
    }

    /// Ordered column headers
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Extract one column by name, cloning its cells in row order
    pub fn column(&self, name: &str) -> Option<Column> {
        let idx = self.headers.iter().position(|h| h == name)?;
        let values = self.rows.iter().map(|row| row[idx].clone()).collect();
        Some(Column {
            name: name.to_string(),
            values,
        })
    }

    /// Extract the given columns in selection order
    pub fn select_columns(&self, names: &[String]) -> Result<Vec<Column>, TableError> {
        names
            .iter()
            .map(|name| {
                self.column(name)
                    .ok_or_else(|| TableError::ColumnNotFound(name.clone()))
            })
            .collect()
    }

    /// Append a new column; `values` must match the row count
    pub fn append_column(&mut self, name: &str, values: Vec<String>) -> Result<(), TableError> {
        if self.headers.iter().any(|h| h == name) {
            return Err(TableError::DuplicateColumn(name.to_string()));
        }
        if values.len() != self.rows.len() {
            return Err(TableError::LengthMismatch {
                expected: self.rows.len(),
                got: values.len(),
            });
        }

        self.headers.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// Write the table to a CSV file
    pub fn write_csv_path<P: AsRef<Path>>(&self, path: P) -> Result<(), TableError> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }

    /// Write the table to any writer as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), TableError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Output column name for a translated column: `<column>_<SUFFIX>` with the
/// uppercased language code (e.g. `description_JA`).
pub fn output_column_name(column: &str, target_language: &str) -> String {
    format!(
        "{}_{}",
        column,
        language_utils::column_suffix(target_language)
    )
}
