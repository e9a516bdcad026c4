//! Display schema normalization.

use super::Step;
use crate::workspace::{Row, Value, Workspace};

/// Gives every row of a table the union of the table's columns, in
/// first-seen order. Missing cells become [`Value::Null`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformColumnsStep;

impl Step for UniformColumnsStep {
    fn step(&self, workspace: &mut Workspace) {
        workspace.for_each_table(|table| {
            let columns = table.columns();
            table.for_each_row(|row| {
                let mut uniform = Row::new().with_parameters(row.parameters().clone());
                for column in &columns {
                    let value = row.get(column).cloned().unwrap_or(Value::Null);
                    uniform.set(column.as_str(), value);
                }
                *row = uniform;
            });
        });
    }

    fn step_type_name(&self) -> &'static str {
        "UniformColumns"
    }
}
