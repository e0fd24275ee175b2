//! Typed access to tabular data records.
//!
//! The host reads schedule rows from a database driver and hands them over
//! as [`Record`]s: ordered, named columns holding optional [`Value`]s
//! (`None` is a database null). The accessors here convert cells to the
//! requested type with a configurable default-or-error policy:
//!
//! - with a default supplied, a missing or null column degrades to it;
//! - without one, the accessor fails loudly, naming the column;
//! - a value of the wrong type always fails, naming column and type.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::datetime;
use crate::error::{Result, SupportError};
use crate::text;

/// A single column value as delivered by the database driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Human-readable type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::DateTime(_) => "datetime",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// An ordered set of named columns with optional values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    columns: Vec<String>,
    cells: Vec<Option<Value>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. `None` represents a database null.
    pub fn push(&mut self, column: impl Into<String>, value: Option<Value>) {
        self.columns.push(column.into());
        self.cells.push(value);
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Ordinal of a column by name: exact match first, then
    /// ASCII-case-insensitive.
    pub fn ordinal(&self, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .or_else(|| {
                self.columns
                    .iter()
                    .position(|c| c.eq_ignore_ascii_case(column))
            })
    }

    /// Column name at an ordinal.
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    /// Whether the named column is null. Fails if the column is missing.
    pub fn is_null(&self, column: &str) -> Result<bool> {
        let index = self
            .ordinal(column)
            .ok_or_else(|| SupportError::ColumnNotFound(column.to_string()))?;
        Ok(self.cells.get(index).map_or(true, |cell| cell.is_none()))
    }

    /// Display strings for all cells; nulls come out empty.
    pub fn fields(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|cell| cell.as_ref().map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    /// Whether every cell in the record displays as blank.
    pub fn is_blank_row(&self) -> bool {
        self.fields().iter().all(|f| text::is_blank(f))
    }

    /// Label for error messages: the column name, or `#index` when the
    /// ordinal has no column.
    fn label(&self, index: usize) -> String {
        self.column_name(index)
            .map_or_else(|| format!("#{index}"), str::to_string)
    }

    // =========================================================================
    // Typed getters by ordinal
    // =========================================================================

    /// String value of a column. Nulls come out as an empty string; a
    /// missing column degrades to the default or fails.
    pub fn get_string(&self, index: usize, default: Option<&str>) -> Result<String> {
        match self.cells.get(index) {
            None => default
                .map(str::to_string)
                .ok_or_else(|| SupportError::ColumnNotFound(self.label(index))),
            Some(None) => Ok(String::new()),
            Some(Some(Value::Text(s))) => Ok(s.clone()),
            Some(Some(other)) => Err(self.type_mismatch(index, other)),
        }
    }

    /// Integer value of a column.
    pub fn get_int(&self, index: usize, default: Option<i64>) -> Result<i64> {
        match self.cells.get(index) {
            None => default.ok_or_else(|| SupportError::ColumnNotFound(self.label(index))),
            Some(None) => default.ok_or_else(|| SupportError::NullColumn(self.label(index))),
            Some(Some(Value::Int(v))) => Ok(*v),
            Some(Some(other)) => Err(self.type_mismatch(index, other)),
        }
    }

    /// Integer value of a column, with null mapped to `None` (or the
    /// default) instead of an error.
    pub fn get_int_or_null(&self, index: usize, default: Option<i64>) -> Result<Option<i64>> {
        match self.cells.get(index) {
            None | Some(None) => Ok(default),
            Some(Some(Value::Int(v))) => Ok(Some(*v)),
            Some(Some(other)) => Err(self.type_mismatch(index, other)),
        }
    }

    /// Float value of a column.
    pub fn get_double(&self, index: usize, default: Option<f64>) -> Result<f64> {
        match self.cells.get(index) {
            None => default.ok_or_else(|| SupportError::ColumnNotFound(self.label(index))),
            Some(None) => default.ok_or_else(|| SupportError::NullColumn(self.label(index))),
            Some(Some(Value::Float(v))) => Ok(*v),
            Some(Some(other)) => Err(self.type_mismatch(index, other)),
        }
    }

    /// Byte value of a column, saturated to `max`. Missing and null columns
    /// come out as zero; numeric values above the cap are clamped to it.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn get_byte(&self, index: usize, max: u8) -> Result<u8> {
        match self.cells.get(index) {
            None | Some(None) => Ok(0),
            Some(Some(Value::Int(v))) => {
                Ok(u8::try_from((*v).clamp(0, i64::from(max))).unwrap_or(max))
            }
            Some(Some(Value::Float(v))) => Ok(v.clamp(0.0, f64::from(max)) as u8),
            Some(Some(other)) => Err(self.type_mismatch(index, other)),
        }
    }

    /// Boolean value of a column. Numeric values count as true when
    /// nonzero; any other type degrades to the default or fails.
    pub fn get_bool(&self, index: usize, default: Option<bool>) -> Result<bool> {
        match self.cells.get(index) {
            None => default.ok_or_else(|| SupportError::ColumnNotFound(self.label(index))),
            Some(None) => default.ok_or_else(|| SupportError::NullColumn(self.label(index))),
            Some(Some(Value::Bool(v))) => Ok(*v),
            Some(Some(Value::Int(v))) => Ok(*v != 0),
            Some(Some(Value::Float(v))) => Ok(v.abs() > f64::EPSILON),
            Some(Some(other)) => match default {
                Some(d) => Ok(d),
                None => Err(self.type_mismatch(index, other)),
            },
        }
    }

    /// Date part of a datetime column.
    pub fn get_date(&self, index: usize, default: Option<NaiveDate>) -> Result<NaiveDate> {
        match self.cells.get(index) {
            None => default.ok_or_else(|| SupportError::ColumnNotFound(self.label(index))),
            Some(None) => default.ok_or_else(|| SupportError::NullColumn(self.label(index))),
            Some(Some(Value::DateTime(v))) => Ok(v.date()),
            Some(Some(other)) => Err(self.type_mismatch(index, other)),
        }
    }

    /// Time part of a datetime column.
    pub fn get_time(&self, index: usize, default: Option<NaiveTime>) -> Result<NaiveTime> {
        match self.cells.get(index) {
            None => default.ok_or_else(|| SupportError::ColumnNotFound(self.label(index))),
            Some(None) => default.ok_or_else(|| SupportError::NullColumn(self.label(index))),
            Some(Some(Value::DateTime(v))) => Ok(v.time()),
            Some(Some(other)) => Err(self.type_mismatch(index, other)),
        }
    }

    /// Datetime column encoded as day-of-year plus fractional time-of-day.
    ///
    /// See [`datetime::day_fraction`] for the encoding.
    pub fn get_time_fraction(&self, index: usize, default: Option<f64>) -> Result<f64> {
        match self.cells.get(index) {
            None => default.ok_or_else(|| SupportError::ColumnNotFound(self.label(index))),
            Some(None) => default.ok_or_else(|| SupportError::NullColumn(self.label(index))),
            Some(Some(Value::DateTime(v))) => Ok(datetime::day_fraction(*v)),
            Some(Some(other)) => Err(self.type_mismatch(index, other)),
        }
    }

    // =========================================================================
    // Typed getters by column name
    // =========================================================================

    pub fn get_string_by_name(&self, column: &str, default: Option<&str>) -> Result<String> {
        match self.ordinal(column) {
            Some(i) => self.get_string(i, default),
            None => default
                .map(str::to_string)
                .ok_or_else(|| SupportError::ColumnNotFound(column.to_string())),
        }
    }

    pub fn get_int_by_name(&self, column: &str, default: Option<i64>) -> Result<i64> {
        match self.ordinal(column) {
            Some(i) => self.get_int(i, default),
            None => default.ok_or_else(|| SupportError::ColumnNotFound(column.to_string())),
        }
    }

    pub fn get_int_or_null_by_name(
        &self,
        column: &str,
        default: Option<i64>,
    ) -> Result<Option<i64>> {
        match self.ordinal(column) {
            Some(i) => self.get_int_or_null(i, default),
            None => Ok(default),
        }
    }

    pub fn get_double_by_name(&self, column: &str, default: Option<f64>) -> Result<f64> {
        match self.ordinal(column) {
            Some(i) => self.get_double(i, default),
            None => default.ok_or_else(|| SupportError::ColumnNotFound(column.to_string())),
        }
    }

    pub fn get_byte_by_name(&self, column: &str, max: u8) -> Result<u8> {
        match self.ordinal(column) {
            Some(i) => self.get_byte(i, max),
            None => Err(SupportError::ColumnNotFound(column.to_string())),
        }
    }

    pub fn get_bool_by_name(&self, column: &str, default: Option<bool>) -> Result<bool> {
        match self.ordinal(column) {
            Some(i) => self.get_bool(i, default),
            None => default.ok_or_else(|| SupportError::ColumnNotFound(column.to_string())),
        }
    }

    pub fn get_date_by_name(&self, column: &str, default: Option<NaiveDate>) -> Result<NaiveDate> {
        match self.ordinal(column) {
            Some(i) => self.get_date(i, default),
            None => default.ok_or_else(|| SupportError::ColumnNotFound(column.to_string())),
        }
    }

    pub fn get_time_by_name(&self, column: &str, default: Option<NaiveTime>) -> Result<NaiveTime> {
        match self.ordinal(column) {
            Some(i) => self.get_time(i, default),
            None => default.ok_or_else(|| SupportError::ColumnNotFound(column.to_string())),
        }
    }

    pub fn get_time_fraction_by_name(&self, column: &str, default: Option<f64>) -> Result<f64> {
        match self.ordinal(column) {
            Some(i) => self.get_time_fraction(i, default),
            None => default.ok_or_else(|| SupportError::ColumnNotFound(column.to_string())),
        }
    }

    fn type_mismatch(&self, index: usize, value: &Value) -> SupportError {
        SupportError::TypeMismatch {
            column: self.label(index),
            found: value.type_name(),
        }
    }
}

/// Upfront name-to-ordinal map over a required column set.
///
/// Building fails loudly when any required column is missing, so a schema
/// drift surfaces once, at setup, instead of per-row.
#[derive(Debug, Clone)]
pub struct Columns {
    ordinals: HashMap<String, usize>,
}

impl Columns {
    pub fn new(record: &Record, columns: &[&str]) -> Result<Self> {
        let mut ordinals = HashMap::with_capacity(columns.len());
        for &column in columns {
            let index = record
                .ordinal(column)
                .ok_or_else(|| SupportError::ColumnNotFound(column.to_string()))?;
            ordinals.insert(column.to_string(), index);
        }
        Ok(Self { ordinals })
    }

    pub fn ordinal(&self, column: &str) -> Option<usize> {
        self.ordinals.get(column).copied()
    }
}
