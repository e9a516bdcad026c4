//! In-memory grid that report steps mutate.
//!
//! A [`Workspace`] holds named [`Table`]s, a table holds ordered [`Row`]s and
//! a row maps column names to scalar [`Value`]s. Rows are schema'd
//! independently: after a transform two rows of the same table may carry
//! different columns, and every lookup treats a missing column as absent
//! rather than as an error.
//!
//! # Column groups
//!
//! A column named `#group.name` (or just `#group`) belongs to `group`. Any
//! other column forms a group of its own name, so `remove_group("memory")`
//! removes a plain `memory` column as well as `#memory.*` columns.

use std::fmt;

use benchview_core::{ParamValue, ParameterSet};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Scalar cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&ParamValue> for Value {
    fn from(value: &ParamValue) -> Self {
        match value {
            ParamValue::Null => Value::Null,
            ParamValue::Bool(b) => Value::Bool(*b),
            ParamValue::Int(i) => Value::Int(*i),
            ParamValue::Float(x) => Value::Float(*x),
            ParamValue::Str(s) => Value::Str(s.clone()),
        }
    }
}

/// Returns the group a column name belongs to.
///
/// # Example
///
/// ```
/// use benchview_report::group_of;
///
/// assert_eq!(group_of("#time.mean"), "time");
/// assert_eq!(group_of("#time"), "time");
/// assert_eq!(group_of("memory"), "memory");
/// ```
pub fn group_of(column: &str) -> &str {
    match column.strip_prefix('#') {
        Some(rest) => rest.split_once('.').map_or(rest, |(group, _)| group),
        None => column,
    }
}

/// One row: ordered column → value cells plus the raw parameter set the row
/// was built from. The parameter set is row metadata, never a display column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: IndexMap<String, Value>,
    parameters: ParameterSet,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell, returning the row for chaining.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    pub fn with_parameters(mut self, parameters: ParameterSet) -> Self {
        self.parameters = parameters;
        self
    }

    /// Sets a cell. An existing column keeps its position.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Removes a cell without reordering the remaining columns.
    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.cells.shift_remove(column)
    }

    /// Column names belonging to `group`, in row order.
    pub fn group_columns(&self, group: &str) -> Vec<&str> {
        self.cells
            .keys()
            .map(String::as_str)
            .filter(|column| group_of(column) == group)
            .collect()
    }

    /// Removes every column of `group`. Returns how many cells were removed.
    pub fn remove_group(&mut self, group: &str) -> usize {
        let before = self.cells.len();
        self.cells.retain(|column, _| group_of(column) != group);
        before - self.cells.len()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn cells(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Named, ordered sequence of rows.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Table {
    name: String,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Mutable access to the row sequence. Steps may replace, drop or
    /// rebuild rows through this.
    pub fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn for_each_row<F: FnMut(&mut Row)>(&mut self, mut f: F) {
        for row in &mut self.rows {
            f(row);
        }
    }

    /// Removes `group` from every row. Group membership is resolved per row.
    pub fn remove_column_group(&mut self, group: &str) {
        self.for_each_row(|row| {
            row.remove_group(group);
        });
    }

    /// Union of all row columns, in first-seen order.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: IndexMap<&str, ()> = IndexMap::new();
        for row in &self.rows {
            for column in row.columns() {
                columns.insert(column, ());
            }
        }
        columns.into_keys().map(str::to_string).collect()
    }

    /// Whether every row has exactly the same columns in the same order.
    pub fn is_uniform(&self) -> bool {
        let mut rows = self.rows.iter();
        let Some(first) = rows.next() else {
            return true;
        };
        rows.all(|row| row.columns().eq(first.columns()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Ordered collection of named tables; the unit every step receives.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Workspace {
    tables: Vec<Table>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.name == name)
    }

    pub fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.name.clone()).collect()
    }

    /// Visits tables in workspace order. The visitor may mutate rows but
    /// cannot add or remove tables.
    pub fn for_each_table<F: FnMut(&mut Table)>(&mut self, mut f: F) {
        for table in &mut self.tables {
            f(table);
        }
    }

    /// Visits every row: table order, then row order.
    pub fn for_each_row<F: FnMut(&mut Row)>(&mut self, mut f: F) {
        for table in &mut self.tables {
            table.for_each_row(&mut f);
        }
    }

    /// Removes `group` from every row of every table.
    pub fn remove_column_group(&mut self, group: &str) {
        self.for_each_table(|table| table.remove_column_group(group));
    }

    pub fn row_count(&self) -> usize {
        self.tables.iter().map(Table::len).sum()
    }

    pub fn into_tables(self) -> Vec<Table> {
        self.tables
    }
}
