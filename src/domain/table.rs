//! Dense numeric table.

use serde::Serialize;

/// A rows x columns grid of `f64` values stored row-major.
///
/// Missing cells (empty, unparseable, or past the end of a short row) hold
/// `NaN`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NumericTable {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column_names: Option<Vec<String>>,
}

impl NumericTable {
    /// Build a table from parsed records, padding short rows with `NaN`.
    pub fn from_rows(records: Vec<Vec<f64>>) -> Self {
        let columns = records.iter().map(Vec::len).max().unwrap_or(0);
        let rows = records.len();
        let mut values = Vec::with_capacity(rows * columns);
        for mut record in records {
            record.resize(columns, f64::NAN);
            values.extend(record);
        }
        Self { rows, columns, values, column_names: None }
    }

    pub fn with_column_names(mut self, names: Vec<String>) -> Self {
        self.column_names = Some(names);
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn column_names(&self) -> Option<&[String]> {
        self.column_names.as_deref()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.values.get(row * self.columns + column).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.values[start..start + self.columns])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks() panics on zero, and a table with rows but no columns has no values anyway
        self.values.chunks(self.columns.max(1))
    }

    /// Number of cells holding the missing-value sentinel.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }

    /// Copy out as nested rows.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }
}

/// Tables compare equal when their shapes match and every cell is equal,
/// with `NaN` equal to `NaN` so that missing cells line up.
impl PartialEq for NumericTable {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.column_names == other.column_names
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
    }
}
