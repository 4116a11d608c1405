pub const EXPORT_FILENAME: &str = "export.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// A file handed to the host for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: String,
    pub contents: String,
}

/// Joins cell texts with `,` and rows with `\n`. Cells are written verbatim:
/// embedded commas, quotes and newlines are not escaped.
pub fn rows_to_csv<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_ref())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_csv_export<S: AsRef<str>>(rows: &[Vec<S>]) -> ExportFile {
    ExportFile {
        filename: EXPORT_FILENAME.to_string(),
        mime_type: CSV_MIME_TYPE.to_string(),
        contents: rows_to_csv(rows),
    }
}
