//! Run collapsing.

use indexmap::IndexMap;

use super::Step;
use crate::workspace::{Row, Workspace};

/// Column identifying the run a row belongs to.
pub const RUN_COLUMN: &str = "run";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum RunKey {
    Run(String),
    // Rows without a run cell keep their own slot.
    Unkeyed(usize),
}

/// Collapses rows sharing a run into a single row.
///
/// The last row of each run replaces the earlier ones (last write wins);
/// the collapsed row sits where the run first appeared. No statistics are
/// computed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateIterationsStep {
    key: String,
}

impl AggregateIterationsStep {
    /// Collapses on the `run` column.
    pub fn new() -> Self {
        Self::by(RUN_COLUMN)
    }

    /// Collapses on an arbitrary column.
    pub fn by(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn collapse(&self, rows: Vec<Row>) -> Vec<Row> {
        let mut collapsed: IndexMap<RunKey, Row> = IndexMap::with_capacity(rows.len());
        for (position, row) in rows.into_iter().enumerate() {
            let key = match row.get(&self.key) {
                Some(value) => RunKey::Run(value.to_string()),
                None => RunKey::Unkeyed(position),
            };
            collapsed.insert(key, row);
        }
        collapsed.into_values().collect()
    }
}

impl Default for AggregateIterationsStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for AggregateIterationsStep {
    fn step(&self, workspace: &mut Workspace) {
        workspace.for_each_table(|table| {
            let rows = std::mem::take(table.rows_mut());
            *table.rows_mut() = self.collapse(rows);
        });
    }

    fn step_type_name(&self) -> &'static str {
        "AggregateIterations"
    }
}
