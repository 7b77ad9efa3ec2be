//! Output formatting utilities

use crate::calendar::decompose;
use crate::types::{Instant, OutputFormat};
use crate::zone::TimeZoneId;
use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// One labelled line of command output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub label: String,
    /// Epoch milliseconds, when the row describes an instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub millis: Option<i64>,
    pub value: String,
}

impl ReportRow {
    /// Row for an instant, shown on the wall clock of `zone`
    pub fn instant(label: impl Into<String>, instant: Instant, zone: TimeZoneId) -> Self {
        Self {
            label: label.into(),
            millis: Some(instant.as_millis()),
            value: format!("{} ({})", decompose(instant, zone), zone),
        }
    }

    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            millis: None,
            value: value.into(),
        }
    }
}

/// Table row for display
#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Epoch ms")]
    millis: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render rows in the requested format
pub fn render(rows: &[ReportRow], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format_table(rows),
        OutputFormat::Json => format_json(rows),
        OutputFormat::Csv => format_csv(rows),
    }
}

/// Format rows as a table
pub fn format_table(rows: &[ReportRow]) -> String {
    let rows = rows.iter().map(|row| TableRow {
        label: row.label.clone(),
        millis: row.millis.map_or_else(|| "-".to_string(), |m| m.to_string()),
        value: row.value.clone(),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(0)).with(Alignment::left()))
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string()
}

/// Format rows as JSON
pub fn format_json(rows: &[ReportRow]) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string())
}

/// Format rows as CSV
pub fn format_csv(rows: &[ReportRow]) -> String {
    let mut output = String::from("Label,Epoch Ms,Value\n");

    for row in rows {
        output.push_str(&format!(
            "{},{},{}\n",
            csv_field(&row.label),
            row.millis.map(|m| m.to_string()).unwrap_or_default(),
            csv_field(&row.value)
        ));
    }

    output
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// Print banner
pub fn print_banner() {
    println!();
    println!("{}", "  calbucket - calendar buckets for chart axes".cyan().bold());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ReportRow> {
        vec![
            ReportRow::instant("start", Instant::from_millis(0).unwrap(), TimeZoneId::Utc),
            ReportRow::text("tags", "a,b \"c\""),
        ]
    }

    #[test]
    fn instant_row_shows_wall_clock() {
        let zone = TimeZoneId::hours(1).unwrap();
        let row = ReportRow::instant("t", Instant::from_millis(0).unwrap(), zone);
        assert_eq!(row.millis, Some(0));
        assert_eq!(row.value, "1970-01-01 01:00:00.000 (+01:00)");
    }

    #[test]
    fn csv_escapes_values() {
        assert_eq!(
            format_csv(&rows()),
            "Label,Epoch Ms,Value\n\
             start,0,1970-01-01 00:00:00.000 (UTC)\n\
             tags,,\"a,b \"\"c\"\"\"\n"
        );
    }

    #[test]
    fn json_omits_missing_millis() {
        let json: serde_json::Value = serde_json::from_str(&format_json(&rows())).unwrap();
        assert_eq!(json[0]["millis"], 0);
        assert!(json[1].get("millis").is_none());
    }

    #[test]
    fn table_lists_every_row() {
        let table = format_table(&rows());
        assert!(table.contains("Epoch ms"));
        assert!(table.contains("start"));
        assert!(table.contains("tags"));
    }
}
