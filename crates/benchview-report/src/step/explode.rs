//! Parameter pivot ("explode").

use std::collections::{HashMap, HashSet};

use benchview_core::ParameterSet;
use indexmap::IndexSet;

use super::Step;
use crate::workspace::{Row, Value, Workspace};

/// Column whose value is spread across the pivot columns.
pub const TIME_COLUMN: &str = "time";

/// Serializes `parameters` without `exclude`.
///
/// The encoding follows insertion order, so the same pairs inserted in a
/// different order give a different fingerprint.
///
/// # Example
///
/// ```
/// use benchview_core::ParameterSet;
/// use benchview_report::step::fingerprint;
///
/// let a = ParameterSet::new().with("size", 10).with("batch", 1);
/// let b = ParameterSet::new().with("size", 10).with("batch", 2);
/// assert_eq!(fingerprint(&a, "batch"), fingerprint(&b, "batch"));
/// assert_ne!(fingerprint(&a, "size"), fingerprint(&b, "size"));
/// ```
pub fn fingerprint(parameters: &ParameterSet, exclude: &str) -> String {
    let remaining = parameters.without(exclude);
    serde_json::to_string(&remaining).unwrap_or_else(|_| format!("{:?}", remaining))
}

enum Entry {
    Passthrough(Row),
    Pivot { row: Row, fingerprint: String },
}

/// Pivots the distinct values of one parameter into `param-<value>` columns.
///
/// Rows whose parameters are identical once `param` is ignored share a
/// fingerprint; only the first of them is kept and receives one column per
/// distinct value, holding the `time` of the row with that fingerprint and
/// value (first seen wins, missing combinations are `Null`). The pivot
/// columns replace `time` in place and the `param` column is dropped. Rows
/// without a `param` cell pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplodeParamStep {
    param: String,
    value_column: String,
}

impl ExplodeParamStep {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            value_column: TIME_COLUMN.to_string(),
        }
    }

    /// Spreads a column other than `time`.
    pub fn with_value_column(mut self, column: impl Into<String>) -> Self {
        self.value_column = column.into();
        self
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    fn explode(&self, rows: Vec<Row>) -> Vec<Row> {
        let mut series: IndexSet<String> = IndexSet::new();
        let mut cells: HashMap<(String, String), Value> = HashMap::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::with_capacity(rows.len());

        for row in rows {
            let value = match row.get(&self.param) {
                None | Some(Value::Null) => {
                    entries.push(Entry::Passthrough(row));
                    continue;
                }
                Some(value) => value,
            };
            let label = value.to_string();
            series.insert(label.clone());

            let fingerprint = fingerprint(row.parameters(), &self.param);
            let cell = row.get(&self.value_column).cloned().unwrap_or(Value::Null);
            cells.entry((fingerprint.clone(), label)).or_insert(cell);

            if seen.insert(fingerprint.clone()) {
                entries.push(Entry::Pivot { row, fingerprint });
            }
        }

        entries
            .into_iter()
            .map(|entry| match entry {
                Entry::Passthrough(row) => row,
                Entry::Pivot { row, fingerprint } => {
                    self.pivot(row, &fingerprint, &series, &cells)
                }
            })
            .collect()
    }

    fn pivot(
        &self,
        row: Row,
        fingerprint: &str,
        series: &IndexSet<String>,
        cells: &HashMap<(String, String), Value>,
    ) -> Row {
        let mut pivoted = Row::new().with_parameters(row.parameters().clone());
        let mut placed = false;

        for (column, value) in row.cells() {
            if column == self.param {
                continue;
            }
            if column == self.value_column {
                self.place_series(&mut pivoted, fingerprint, series, cells);
                placed = true;
            } else {
                pivoted.set(column, value.clone());
            }
        }
        if !placed {
            self.place_series(&mut pivoted, fingerprint, series, cells);
        }
        pivoted
    }

    fn place_series(
        &self,
        row: &mut Row,
        fingerprint: &str,
        series: &IndexSet<String>,
        cells: &HashMap<(String, String), Value>,
    ) {
        for label in series {
            let value = cells
                .get(&(fingerprint.to_string(), label.clone()))
                .cloned()
                .unwrap_or(Value::Null);
            row.set(format!("{}-{}", self.param, label), value);
        }
    }
}

impl Step for ExplodeParamStep {
    fn step(&self, workspace: &mut Workspace) {
        workspace.for_each_table(|table| {
            let rows = std::mem::take(table.rows_mut());
            *table.rows_mut() = self.explode(rows);
        });
    }

    fn step_type_name(&self) -> &'static str {
        "ExplodeParam"
    }
}
