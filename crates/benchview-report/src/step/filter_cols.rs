//! Column group removal.

use super::Step;
use crate::workspace::Workspace;

/// Removes named column groups from every row of every table.
///
/// Groups are matched rather than exact names, so a column renamed into
/// `#time.mean` by an earlier step is still removed by `"time"`. Names that
/// match nothing are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterColsStep {
    remove_cols: Vec<String>,
}

impl FilterColsStep {
    pub fn new<I, S>(remove_cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            remove_cols: remove_cols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remove_cols(&self) -> &[String] {
        &self.remove_cols
    }
}

impl Step for FilterColsStep {
    fn step(&self, workspace: &mut Workspace) {
        for col in &self.remove_cols {
            workspace.remove_column_group(col);
        }
    }

    fn step_type_name(&self) -> &'static str {
        "FilterCols"
    }
}
