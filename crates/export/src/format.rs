//! Rendering a [`ProjectionTable`] as CSV, JSON, or a fixed-width text report.

use serde::Serialize;
use simulation::{ProjectionTable, TableValue};

use crate::export_error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Text];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Text => "Text",
        }
    }

    /// Parse a CLI value such as `csv` or `TXT`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "txt" | "text" => Some(ExportFormat::Text),
            _ => None,
        }
    }
}

/// Render `table` in `format`. `title` is used by the JSON and text outputs.
pub fn render(format: ExportFormat, title: &str, table: &ProjectionTable) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => Ok(to_csv(table)),
        ExportFormat::Json => to_json(title, table),
        ExportFormat::Text => Ok(to_text_summary(title, table)),
    }
}

// =============================================================================
// Cell formatting
// =============================================================================

/// Numbers keep at most four decimals with trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn cell_text(value: &TableValue) -> String {
    match value {
        TableValue::Integer(i) => i.to_string(),
        TableValue::Number(n) => format_number(*n),
        TableValue::Text(s) => s.clone(),
    }
}

// =============================================================================
// CSV
// =============================================================================

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

fn csv_line(fields: impl Iterator<Item = String>) -> String {
    fields.map(|f| csv_field(&f)).collect::<Vec<_>>().join(",")
}

pub fn to_csv(table: &ProjectionTable) -> String {
    let mut out = csv_line(table.columns.iter().cloned());
    out.push('\n');
    for row in &table.rows {
        out.push_str(&csv_line(row.iter().map(cell_text)));
        out.push('\n');
    }
    out
}

// =============================================================================
// JSON
// =============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    title: &'a str,
    #[serde(flatten)]
    table: &'a ProjectionTable,
}

pub fn to_json(title: &str, table: &ProjectionTable) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&JsonDocument { title, table })?)
}

// =============================================================================
// Plain text
// =============================================================================

pub fn to_text_summary(title: &str, table: &ProjectionTable) -> String {
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .fold(name.chars().count(), usize::max)
        })
        .collect();

    let pad_line = |fields: &[String]| -> String {
        fields
            .iter()
            .zip(&widths)
            .map(|(f, &w)| format!("{f:>w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push('\n');
    out.push_str(&pad_line(&table.columns));
    out.push('\n');
    for row in &cells {
        out.push_str(&pad_line(row));
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{} rows. Illustrative scenario output, not a forecast.\n",
        cells.len()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ProjectionTable {
        ProjectionTable {
            columns: vec!["year".into(), "quality".into(), "note".into()],
            rows: vec![
                vec![
                    TableValue::Integer(2025),
                    TableValue::Number(100.0),
                    TableValue::Text("baseline".into()),
                ],
                vec![
                    TableValue::Integer(2026),
                    TableValue::Number(96.123456),
                    TableValue::Text("says \"hi\", twice".into()),
                ],
            ],
        }
    }

    #[test]
    fn test_format_number_trims() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(65.5), "65.5");
        assert_eq!(format_number(96.123456), "96.1235");
        assert_eq!(format_number(-0.00001), "0");
        assert_eq!(format_number(-2840.0), "-2840");
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = to_csv(&sample_table());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "year,quality,note");
        assert_eq!(lines[1], "2025,100,baseline");
        assert_eq!(lines[2], "2026,96.1235,\"says \"\"hi\"\", twice\"");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_json_preserves_column_order() {
        let json = to_json("infrastructure: Neglect", &sample_table()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "infrastructure: Neglect");
        assert_eq!(value["columns"][1], "quality");
        assert_eq!(value["rows"][0][0], 2025);
        assert_eq!(value["rows"][1][2], "says \"hi\", twice");
    }

    #[test]
    fn test_text_summary_alignment() {
        let text = to_text_summary("Demo", &sample_table());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Demo");
        assert_eq!(lines[1], "====");
        // Right-aligned numeric columns line up under their headers
        assert!(lines[2].starts_with("year  quality"), "got: {}", lines[2]);
        assert!(lines[3].starts_with("2025      100"), "got: {}", lines[3]);
        assert!(text.contains("2 rows"));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(ExportFormat::parse("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::parse("text"), Some(ExportFormat::Text));
        assert_eq!(ExportFormat::parse("txt"), Some(ExportFormat::Text));
        assert_eq!(ExportFormat::parse("xlsx"), None);
    }

    #[test]
    fn test_render_dispatch() {
        let table = sample_table();
        let csv = render(ExportFormat::Csv, "t", &table).unwrap();
        assert!(csv.starts_with("year,"));
        let txt = render(ExportFormat::Text, "t", &table).unwrap();
        assert!(txt.starts_with("t\n"));
    }
}
