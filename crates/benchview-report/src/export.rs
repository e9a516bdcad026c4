//! Export of report tables.

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::workspace::{Table, Workspace};

/// CSV exporter for report tables.
///
/// The header is the union of the table's columns; a row missing a column
/// gets an empty field.
///
/// # Example
///
/// ```
/// use benchview_report::{CsvExporter, Row, Table};
///
/// let table = Table::new("bench")
///     .with_row(Row::new().with("iter", 1).with("time", "1.50"))
///     .with_row(Row::new().with("iter", 2));
///
/// let csv = CsvExporter::to_string(&table).unwrap();
/// assert_eq!(csv, "iter,time\n1,1.50\n2,\n");
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports a table to a CSV string.
    pub fn to_string(table: &Table) -> Result<String> {
        let mut buffer = Vec::new();
        Self::write(table, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Exports a table to a CSV file.
    pub fn to_file(table: &Table, path: impl AsRef<Path>) -> Result<()> {
        let csv = Self::to_string(table)?;
        fs::write(path, csv)?;
        Ok(())
    }

    /// Writes a table as CSV to a writer.
    pub fn write<W: Write>(table: &Table, writer: W) -> Result<()> {
        let columns = table.columns();
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(&columns)?;
        for row in table.rows() {
            csv.write_record(
                columns
                    .iter()
                    .map(|column| row.get(column).map(ToString::to_string).unwrap_or_default()),
            )?;
        }
        csv.flush()?;
        Ok(())
    }
}

/// Markdown report generator.
///
/// Renders each table as a heading followed by a pipe table.
///
/// # Example
///
/// ```
/// use benchview_report::{MarkdownReport, Row, Table, Workspace};
///
/// let workspace = Workspace::new().with_table(
///     Table::new("Sort::benchQuick").with_row(Row::new().with("size", 10).with("time", "0.25")),
/// );
///
/// let md = MarkdownReport::to_string(&workspace);
/// assert!(md.contains("## Sort::benchQuick"));
/// assert!(md.contains("| size | time |"));
/// assert!(md.contains("| 10 | 0.25 |"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string for every table.
    pub fn to_string(workspace: &Workspace) -> String {
        let mut output = String::new();
        for table in workspace.tables() {
            output.push_str(&Self::table(table));
            output.push('\n');
        }
        output
    }

    /// Renders a single table.
    pub fn table(table: &Table) -> String {
        let mut output = String::new();
        let columns = table.columns();

        let _ = writeln!(output, "## {}", table.name());
        let _ = writeln!(output);

        if columns.is_empty() {
            let _ = writeln!(output, "*No rows.*");
            return output;
        }

        let _ = writeln!(output, "| {} |", columns.join(" | "));
        let separators: Vec<String> = columns.iter().map(|c| "-".repeat(c.len().max(3))).collect();
        let _ = writeln!(output, "|{}|", separators.join("|"));

        for row in table.rows() {
            let cells: Vec<String> = columns
                .iter()
                .map(|column| row.get(column).map(ToString::to_string).unwrap_or_default())
                .collect();
            let _ = writeln!(output, "| {} |", cells.join(" | "));
        }

        output
    }

    /// Writes Markdown report to a file.
    pub fn to_file(workspace: &Workspace, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, Self::to_string(workspace))?;
        Ok(())
    }

    /// Writes Markdown report to a writer.
    pub fn write<W: Write>(workspace: &Workspace, mut writer: W) -> Result<()> {
        writer.write_all(Self::to_string(workspace).as_bytes())?;
        Ok(())
    }
}

/// JSON exporter: `{"tables": [{"name": ..., "rows": [{column: value}]}]}`.
pub struct JsonExporter;

impl JsonExporter {
    /// Generates prettified JSON for the whole workspace.
    pub fn to_string(workspace: &Workspace) -> Result<String> {
        Ok(serde_json::to_string_pretty(workspace)?)
    }

    pub fn write<W: Write>(workspace: &Workspace, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, workspace)?;
        Ok(())
    }
}
