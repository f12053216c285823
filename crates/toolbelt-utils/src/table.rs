//! Fixed-size text tables

use std::fmt;

use crate::{Align, Error, Result};

/// Presentation options for [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    pub align: Align,
    /// Width every cell is padded to
    pub width: usize,
    /// Prefix each row with its 0-based index
    pub show_index: bool,
    /// Header cell above the index column
    pub index_header: String,
    /// Written between the header row and the first data row
    pub header_separator: String,
    /// Show empty cells as `None`; otherwise they render blank
    pub show_nulls: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            align: Align::Left,
            width: 15,
            show_index: false,
            index_header: String::new(),
            header_separator: "\n".to_string(),
            show_nulls: true,
        }
    }
}

/// A rows × columns grid of optional text cells with optional headers.
///
/// ```
/// use toolbelt_utils::Table;
///
/// let mut table = Table::new(2, 2).unwrap();
/// table.set_row(0, vec!["a", "b"]).unwrap();
/// assert_eq!(table.get(0, 1), Some("b"));
/// assert_eq!(table.get(1, 1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Option<String>>>,
    headers: Option<Vec<String>>,
    style: TableStyle,
}

impl Table {
    /// Create an empty table. Both dimensions must be at least 1.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 {
            return Err(Error::table_shape("number of rows must be greater than 0"));
        }
        if cols == 0 {
            return Err(Error::table_shape(
                "number of columns must be greater than 0",
            ));
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![vec![None; cols]; rows],
            headers: None,
            style: TableStyle::default(),
        })
    }

    /// Replace the presentation options (builder pattern).
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    /// Cell value, or `None` when empty or out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col)?.as_deref()
    }

    /// All cells of one row.
    pub fn row(&self, index: usize) -> Result<&[Option<String>]> {
        self.cells
            .get(index)
            .map(Vec::as_slice)
            .ok_or(Error::RowOutOfRange {
                index,
                rows: self.rows,
            })
    }

    /// Set a single cell.
    pub fn set(&mut self, row: usize, col: usize, value: impl ToString) -> Result<()> {
        let rows = self.rows;
        let cols = self.cols;
        let cells = self
            .cells
            .get_mut(row)
            .ok_or(Error::RowOutOfRange { index: row, rows })?;
        let cell = cells.get_mut(col).ok_or_else(|| {
            Error::table_shape(format!("column {col} out of range (table has {cols} columns)"))
        })?;
        *cell = Some(value.to_string());
        Ok(())
    }

    /// Replace one row. `values` must have exactly one entry per column.
    pub fn set_row<T: ToString>(&mut self, index: usize, values: Vec<T>) -> Result<()> {
        if values.len() != self.cols {
            return Err(Error::table_shape(format!(
                "row must contain {} values, got {}",
                self.cols,
                values.len()
            )));
        }
        let rows = self.rows;
        let row = self
            .cells
            .get_mut(index)
            .ok_or(Error::RowOutOfRange { index, rows })?;
        *row = values.iter().map(|v| Some(v.to_string())).collect();
        Ok(())
    }

    /// Replace every row at once.
    pub fn set_rows<T: ToString>(&mut self, rows: Vec<Vec<T>>) -> Result<()> {
        if rows.len() != self.rows || rows.iter().any(|r| r.len() != self.cols) {
            return Err(Error::table_shape(format!(
                "rows must be {} lists of {} values",
                self.rows, self.cols
            )));
        }
        self.cells = rows
            .iter()
            .map(|row| row.iter().map(|v| Some(v.to_string())).collect())
            .collect();
        Ok(())
    }

    /// Set the header row. Must have one entry per column.
    pub fn set_headers<T: ToString>(&mut self, headers: Vec<T>) -> Result<()> {
        if headers.len() != self.cols {
            return Err(Error::table_shape(format!(
                "headers must contain {} values, got {}",
                self.cols,
                headers.len()
            )));
        }
        self.headers = Some(headers.iter().map(ToString::to_string).collect());
        Ok(())
    }

    pub fn clear_rows(&mut self) {
        self.cells = vec![vec![None; self.cols]; self.rows];
    }

    pub fn clear_headers(&mut self) {
        self.headers = None;
    }

    fn cell_text<'a>(&self, cell: &'a Option<String>) -> &'a str {
        match cell {
            Some(value) => value.as_str(),
            None if self.style.show_nulls => "None",
            None => "",
        }
    }

    fn pad(&self, text: &str) -> String {
        self.style.align.pad(text, self.style.width, ' ')
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(headers) = &self.headers {
            if self.style.show_index {
                f.write_str(&self.pad(&self.style.index_header))?;
            }
            for header in headers {
                f.write_str(&self.pad(header))?;
            }
            f.write_str(&self.style.header_separator)?;
        }

        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            if self.style.show_index {
                f.write_str(&self.pad(&index.to_string()))?;
            }
            for cell in row {
                f.write_str(&self.pad(self.cell_text(cell)))?;
            }
        }
        Ok(())
    }
}
