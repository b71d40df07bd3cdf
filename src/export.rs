//! CSV export of assignments

use crate::core::{Assignment, ItemKind};

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Default output filename for the given item source
pub fn default_path(kind: ItemKind) -> &'static Path {
    match kind {
        ItemKind::Teams => Path::new("team_assignments.csv"),
        ItemKind::Students => Path::new("student_ta_assignments.csv"),
    }
}

fn header(kind: ItemKind) -> [&'static str; 2] {
    match kind {
        ItemKind::Teams => ["Team Number", "Assigned To"],
        ItemKind::Students => ["Student Number", "Assigned TA"],
    }
}

/// Write the assignment as CSV, one record per item in ascending item order
pub fn write_csv<W: io::Write>(
    assignment: &Assignment,
    kind: ItemKind,
    headers: bool,
    writer: W,
) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    if headers {
        csv_writer.write_record(header(kind))?;
    }
    for (item, assignee) in assignment.iter() {
        csv_writer.write_record([item.to_string(), assignee.to_string()])?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write the assignment to a CSV file, defaulting the filename by item kind
pub fn write_csv_file(
    assignment: &Assignment,
    kind: ItemKind,
    headers: bool,
    path: Option<&Path>,
) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_path(kind).to_path_buf(),
    };
    let file =
        File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
    write_csv(assignment, kind, headers, file)?;

    Ok(path)
}
