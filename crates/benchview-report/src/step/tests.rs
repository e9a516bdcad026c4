//! Tests for transform steps and pipeline composition.

use benchview_core::ParameterSet;

use super::*;
use crate::workspace::{Row, Table, Value};

fn workspace_of(rows: Vec<Row>) -> Workspace {
    Workspace::new().with_table(Table::new("bench").with_rows(rows))
}

fn rows_of(workspace: &Workspace) -> &[Row] {
    workspace.tables()[0].rows()
}

fn param_row(size: i64, batch: i64, time: &str) -> Row {
    Row::new()
        .with_parameters(ParameterSet::new().with("size", size).with("batch", batch))
        .with("size", size)
        .with("batch", batch)
        .with("time", time)
}

#[test]
fn test_filter_cols_removes_groups_everywhere() {
    let mut workspace = Workspace::new()
        .with_table(Table::new("a").with_row(Row::new().with("#time.mean", 1.0).with("subject", "x")))
        .with_table(Table::new("b").with_row(Row::new().with("time", 2.0).with("memory", "10")));

    FilterColsStep::new(["time", "nothing"]).step(&mut workspace);

    assert_eq!(workspace.tables()[0].rows()[0].columns().collect::<Vec<_>>(), vec!["subject"]);
    assert_eq!(workspace.tables()[1].rows()[0].columns().collect::<Vec<_>>(), vec!["memory"]);
}

#[test]
fn test_aggregate_is_last_write_wins_per_run() {
    let mut workspace = workspace_of(vec![
        Row::new().with("run", 1).with("iter", 1).with("time", "1.0"),
        Row::new().with("run", 1).with("iter", 2).with("time", "2.0"),
        Row::new().with("run", 2).with("iter", 1).with("time", "5.0"),
        Row::new().with("run", 1).with("iter", 3).with("time", "3.0"),
    ]);

    AggregateIterationsStep::new().step(&mut workspace);

    let rows = rows_of(&workspace);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("run"), Some(&Value::Int(1)));
    assert_eq!(rows[0].get("time"), Some(&Value::Str("3.0".to_string())));
    assert_eq!(rows[0].get("iter"), Some(&Value::Int(3)));
    assert_eq!(rows[1].get("time"), Some(&Value::Str("5.0".to_string())));
}

#[test]
fn test_aggregate_keeps_rows_without_run() {
    let mut workspace = workspace_of(vec![
        Row::new().with("time", "1.0"),
        Row::new().with("run", 1).with("time", "2.0"),
        Row::new().with("time", "3.0"),
    ]);

    AggregateIterationsStep::new().step(&mut workspace);

    assert_eq!(rows_of(&workspace).len(), 3);
}

#[test]
fn test_explode_dedups_by_fingerprint() {
    let mut workspace = workspace_of(vec![
        param_row(1, 10, "a"),
        param_row(1, 20, "b"),
        param_row(2, 10, "c"),
        param_row(2, 20, "d"),
        param_row(1, 10, "ignored"),
    ]);

    ExplodeParamStep::new("batch").step(&mut workspace);

    let rows = rows_of(&workspace);
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].columns().collect::<Vec<_>>(),
        vec!["size", "batch-10", "batch-20"]
    );
    assert_eq!(rows[0].get("batch-10"), Some(&Value::from("a")));
    assert_eq!(rows[0].get("batch-20"), Some(&Value::from("b")));
    assert_eq!(rows[1].get("size"), Some(&Value::Int(2)));
    assert_eq!(rows[1].get("batch-10"), Some(&Value::from("c")));
    assert_eq!(rows[1].get("batch-20"), Some(&Value::from("d")));
}

#[test]
fn test_explode_missing_combination_is_null() {
    let mut workspace = workspace_of(vec![
        param_row(1, 10, "a"),
        param_row(2, 20, "b"),
    ]);

    ExplodeParamStep::new("batch").step(&mut workspace);

    let rows = rows_of(&workspace);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("batch-20"), Some(&Value::Null));
    assert_eq!(rows[1].get("batch-10"), Some(&Value::Null));
}

#[test]
fn test_explode_passes_through_rows_without_param() {
    let plain = Row::new().with("size", 3).with("time", "z");
    let mut workspace = workspace_of(vec![param_row(1, 10, "a"), plain.clone()]);

    ExplodeParamStep::new("batch").step(&mut workspace);

    let rows = rows_of(&workspace);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], plain);
}

#[test]
fn test_explode_passes_through_null_param_cell() {
    let blank = Row::new()
        .with_parameters(ParameterSet::new().with("size", 2))
        .with("size", 2)
        .with("batch", Value::Null)
        .with("time", "n");
    let mut workspace = workspace_of(vec![param_row(1, 10, "a"), blank.clone()]);

    ExplodeParamStep::new("batch").step(&mut workspace);

    let rows = rows_of(&workspace);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec!["size", "batch-10"]);
    assert_eq!(rows[1], blank);
}

#[test]
fn test_explode_without_time_column_appends_series() {
    let row = Row::new()
        .with_parameters(ParameterSet::new().with("batch", 1))
        .with("batch", 1)
        .with("label", "x");
    let mut workspace = workspace_of(vec![row]);

    ExplodeParamStep::new("batch").step(&mut workspace);

    let rows = rows_of(&workspace);
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec!["label", "batch-1"]);
    assert_eq!(rows[0].get("batch-1"), Some(&Value::Null));
}

#[test]
fn test_fingerprint_is_order_sensitive() {
    let a = ParameterSet::new().with("x", 1).with("y", 2).with("batch", 3);
    let b = ParameterSet::new().with("y", 2).with("x", 1).with("batch", 3);
    assert_ne!(fingerprint(&a, "batch"), fingerprint(&b, "batch"));

    let int = ParameterSet::new().with("x", 1);
    let string = ParameterSet::new().with("x", "1");
    assert_ne!(fingerprint(&int, "batch"), fingerprint(&string, "batch"));
}

#[test]
fn test_uniform_columns() {
    let mut workspace = workspace_of(vec![
        Row::new().with("a", 1),
        Row::new().with("b", 2).with("a", 3),
    ]);

    UniformColumnsStep.step(&mut workspace);

    let table = &workspace.tables()[0];
    assert!(table.is_uniform());
    assert_eq!(table.rows()[0].get("b"), Some(&Value::Null));
    assert_eq!(table.rows()[1].columns().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_pipeline_runs_steps_in_order() {
    let mut workspace = workspace_of(vec![
        Row::new().with("run", 1).with("time", "1.0").with("iter", 1),
        Row::new().with("run", 1).with("time", "2.0").with("iter", 2),
    ]);

    let pipeline = Pipeline::new()
        .with_step(AggregateIterationsStep::new())
        .with_step(FilterColsStep::new(["run", "iter"]));

    assert_eq!(pipeline.step_names(), vec!["AggregateIterations", "FilterCols"]);
    pipeline.run(&mut workspace).unwrap();

    let rows = rows_of(&workspace);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec!["time"]);
    assert_eq!(rows[0].get("time"), Some(&Value::from("2.0")));
}

#[derive(Debug)]
struct AddTableStep;

impl Step for AddTableStep {
    fn step(&self, workspace: &mut Workspace) {
        workspace.add_table(Table::new("extra"));
    }

    fn step_type_name(&self) -> &'static str {
        "AddTable"
    }
}

#[test]
fn test_pipeline_rejects_table_changes() {
    let mut workspace = workspace_of(vec![Row::new().with("x", 1)]);

    let result = Pipeline::new()
        .with_step(AddTableStep)
        .with_step(FilterColsStep::new(["x"]))
        .run(&mut workspace);

    match result {
        Err(crate::ReportError::SchemaViolation { step, expected, actual }) => {
            assert_eq!(step, "AddTable");
            assert_eq!(expected, vec!["bench"]);
            assert_eq!(actual, vec!["bench", "extra"]);
        }
        other => panic!("expected schema violation, got {:?}", other),
    }
    // The step after the violation never ran.
    assert!(rows_of(&workspace)[0].contains("x"));
}
