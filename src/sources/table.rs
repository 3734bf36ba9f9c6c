//! Delimited table reading on top of the Arrow CSV reader
//!
//! Column types are inferred from the data, except for key columns which
//! are forced to `Utf8`: district codes such as `03159` must never pass
//! through a numeric type.

use std::io::Seek;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{Float64Type, Int64Type};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::display::array_value_to_string;
use arrow_schema::{DataType, Field, Schema, SchemaRef};
use serde_json::{Number, Value};

use crate::error::util::safe_open_file;
use crate::error::{Result, VerbundError};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// A CSV file read into record batches
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub schema: SchemaRef,
    pub batches: Vec<RecordBatch>,
}

impl CsvTable {
    /// Index of a column that has to be present
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.schema
            .index_of(name)
            .map_err(|_| VerbundError::Schema(format!("Missing required column '{name}'")))
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }
}

/// Read a CSV file with a header row
///
/// # Arguments
/// * `path` - The CSV file
/// * `string_columns` - Columns read as text regardless of their content
pub fn read_csv_table(path: &Path, string_columns: &[&str]) -> Result<CsvTable> {
    log_operation_start("Reading table", path);
    let start = Instant::now();

    let mut file = safe_open_file(path, "reading CSV table")?;
    let (inferred, _) = Format::default()
        .with_header(true)
        .infer_schema(&mut file, None)?;
    file.rewind()
        .map_err(|e| VerbundError::io(path, "Failed to rewind CSV table", e))?;

    let schema = Arc::new(with_string_columns(&inferred, string_columns));
    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_header(true)
        .build(file)?;
    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;

    let table = CsvTable { schema, batches };
    log_operation_complete("read", path, table.num_rows(), Some(start.elapsed()));
    Ok(table)
}

/// Copy of `schema` with the named columns, and any column inference could
/// not type, switched to nullable `Utf8`
#[must_use]
pub fn with_string_columns(schema: &Schema, string_columns: &[&str]) -> Schema {
    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .map(|field| {
            if string_columns.contains(&field.name().as_str())
                || field.data_type() == &DataType::Null
            {
                Field::new(field.name(), DataType::Utf8, true)
            } else {
                field.as_ref().clone()
            }
        })
        .collect();
    Schema::new(fields)
}

/// Text of a cell, `None` for null or empty cells
#[must_use]
pub fn string_cell(column: &ArrayRef, row: usize) -> Option<String> {
    if column.is_null(row) {
        return None;
    }
    match column.data_type() {
        DataType::Utf8 => {
            let value = column.as_string::<i32>().value(row).trim();
            (!value.is_empty()).then(|| value.to_string())
        }
        _ => array_value_to_string(column.as_ref(), row).ok(),
    }
}

/// JSON value of a cell, keeping the inferred column type
pub fn json_cell(column: &ArrayRef, row: usize) -> Result<Value> {
    if column.is_null(row) {
        return Ok(Value::Null);
    }
    let value = match column.data_type() {
        DataType::Utf8 => string_cell(column, row).map_or(Value::Null, Value::String),
        DataType::Int64 => Value::from(column.as_primitive::<Int64Type>().value(row)),
        DataType::Float64 => Number::from_f64(column.as_primitive::<Float64Type>().value(row))
            .map_or(Value::Null, Value::Number),
        DataType::Boolean => Value::Bool(column.as_boolean().value(row)),
        _ => Value::String(array_value_to_string(column.as_ref(), row)?),
    };
    Ok(value)
}
