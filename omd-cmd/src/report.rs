//! Plain-text rendering of chart specs and dropdown options.

use omd_db::charts::ChartSpec;
use omd_db::models::{DropdownOptions, SelectOption};
use serde_json::Value;
use std::fmt::Write;

/// Print a spec as pretty JSON or as a text table.
pub fn print_spec(spec: &ChartSpec, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(spec)?);
    } else {
        print!("{}", format_spec(spec));
    }
    Ok(())
}

/// Columns shown for a spec: series field first, then x and y.
fn columns(spec: &ChartSpec) -> Vec<&str> {
    let mut cols: Vec<&str> = Vec::new();
    let fields = [
        spec.color_field.as_deref(),
        Some(spec.x_field.as_str()),
        Some(spec.y_field.as_str()),
    ];
    for field in fields.into_iter().flatten() {
        if !cols.contains(&field) {
            cols.push(field);
        }
    }
    cols
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Title, underline, then one aligned row per data point. Placeholders
/// print their annotation instead of a table.
pub fn format_spec(spec: &ChartSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", spec.title);
    let _ = writeln!(out, "{}", "=".repeat(spec.title.chars().count()));

    let rows = match spec.data.as_array() {
        Some(rows) if !rows.is_empty() => rows,
        _ => {
            let note = spec.annotation.as_deref().unwrap_or("No data available");
            let _ = writeln!(out, "{}", note);
            return out;
        }
    };

    let cols = columns(spec);
    let headers: Vec<String> = cols
        .iter()
        .map(|c| spec.labels.get(*c).cloned().unwrap_or_else(|| c.to_string()))
        .collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| cols.iter().map(|c| cell(&row[*c])).collect())
        .collect();

    let widths: Vec<usize> = (0..cols.len())
        .map(|i| {
            body.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(headers[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let _ = writeln!(out, "{}", format_row(&headers));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", format_row(&rule));
    for row in &body {
        let _ = writeln!(out, "{}", format_row(row));
    }
    out
}

fn write_option_list(out: &mut String, heading: &str, options: &[SelectOption]) {
    let _ = writeln!(out, "{} ({})", heading, options.len());
    for option in options {
        if option.value == option.label {
            let _ = writeln!(out, "  {}", option.label);
        } else {
            let _ = writeln!(out, "  {:<14} {}", option.value, option.label);
        }
    }
}

/// The three option lists, one section each.
pub fn format_options(options: &DropdownOptions) -> String {
    let mut out = String::new();
    write_option_list(&mut out, "Countries", &options.countries);
    out.push('\n');
    write_option_list(&mut out, "Medal types", &options.medal_types);
    out.push('\n');
    write_option_list(&mut out, "Years", &options.years);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use omd_db::WorkingTable;
    use omd_medals::metric::MedalMetric;
    use omd_medals::year::YearSelection;

    const CSV: &str = "\
Year,Host_country,Host_city,Country_Name,Country_Code,Gold,Silver,Bronze
2012,Great Britain,London,United States,USA,46,29,29
2012,Great Britain,London,China,CHN,38,27,23
2016,Brazil,Rio de Janeiro,United States,USA,46,37,38
2016,Brazil,Rio de Janeiro,Kenya,KEN,6,6,1
";

    fn table() -> WorkingTable {
        WorkingTable::from_csv(CSV).unwrap()
    }

    #[test]
    fn bar_table_is_aligned_and_ordered() {
        let spec = table()
            .bar_chart(MedalMetric::Gold, YearSelection::All)
            .unwrap();
        let text = format_spec(&spec);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Top 10 Countries by Gold in All Years (1992-2020)");
        assert!(lines[1].chars().all(|c| c == '='));
        assert!(lines[2].starts_with("Country"));
        assert!(lines[2].ends_with("Gold"));
        assert!(lines[4].starts_with("United States of America"));
        assert!(lines[4].ends_with("92"));
        assert!(lines[5].starts_with("China"));
        assert!(lines[6].starts_with("Kenya"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn area_table_leads_with_country() {
        let spec = table().area_chart(MedalMetric::TotalMedals).unwrap();
        let text = format_spec(&spec);
        let header = text.lines().nth(2).unwrap();
        let fields: Vec<&str> = header.split_whitespace().collect();
        assert_eq!(fields, vec!["country", "Year", "Total", "Medals", "Won"]);
    }

    #[test]
    fn placeholder_prints_annotation() {
        let spec = table().pie_chart(Some("Atlantis")).unwrap();
        let text = format_spec(&spec);
        assert_eq!(
            text,
            "No data for Atlantis (1992-2020)\n================================\nNo data available\n"
        );
    }

    #[test]
    fn options_list_every_section() {
        let options = table().query_dropdown_options().unwrap();
        let text = format_options(&options);
        assert!(text.starts_with("Countries (3)\n"));
        assert!(text.contains("Medal types (4)"));
        assert!(text.contains("Years (3)"));
        assert!(text.contains("2012 - London, Great Britain"));
        assert!(text.contains("  Kenya\n"));
    }
}
