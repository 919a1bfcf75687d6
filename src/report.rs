//! Console rendering of policy reports.

use crate::check::Report;
use crate::config::Translations;

/// Render the report as console text.
///
/// Each non-empty list becomes an aligned table headed by its translation
/// message, followed by the error statement. Returns an empty string for a
/// clean report.
pub fn render_report(report: &Report, translations: &Translations) -> String {
    if report.is_clean() {
        return String::new();
    }

    let mut out = String::new();

    if !report.missing_required.is_empty() {
        out.push_str(&translations.missing_required);
        out.push('\n');
        let rows: Vec<Vec<String>> = report
            .missing_required
            .iter()
            .map(|entry| vec![entry.name.clone()])
            .collect();
        out.push_str(&render_table(&["NAME"], &rows));
        out.push('\n');
    }

    if !report.found_excluded.is_empty() {
        out.push_str(&translations.found_excluded);
        out.push('\n');
        let rows: Vec<Vec<String>> = report
            .found_excluded
            .iter()
            .map(|entry| vec![entry.name.clone(), entry.value.clone()])
            .collect();
        out.push_str(&render_table(&["NAME", "VALUE"], &rows));
        out.push('\n');
    }

    out.push_str(&translations.error_statement);
    out.push('\n');
    out
}

/// Render rows as a plain table with left-aligned columns and a dashed rule
/// under the header.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&render_row(
        &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
        &widths,
    ));
    out.push_str(&render_row(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));
    for row in rows {
        out.push_str(&render_row(row, &widths));
    }
    out
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<width$}", cell, width = widths[i]));
    }
    let mut line = line.trim_end().to_string();
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{FoundExcluded, MissingRequired};

    #[test]
    fn test_clean_report_renders_nothing() {
        let rendered = render_report(&Report::default(), &Translations::default());
        assert!(rendered.is_empty());
    }

    #[test]
    fn test_missing_table_lists_names_in_order() {
        let report = Report {
            missing_required: vec![
                MissingRequired { name: "B".into() },
                MissingRequired { name: "A".into() },
            ],
            found_excluded: vec![],
        };
        let translations = Translations::default();

        let rendered = render_report(&report, &translations);
        assert!(rendered.starts_with(&translations.missing_required));
        let b_pos = rendered.find("\nB").unwrap();
        let a_pos = rendered.find("\nA").unwrap();
        assert!(b_pos < a_pos);
        assert!(rendered.ends_with(&format!("{}\n", translations.error_statement)));
    }

    #[test]
    fn test_excluded_table_has_name_and_value_columns() {
        let report = Report {
            missing_required: vec![],
            found_excluded: vec![FoundExcluded {
                name: "AWS_SECRET_ACCESS_KEY".into(),
                value: "abc123".into(),
            }],
        };

        let rendered = render_report(&report, &Translations::default());
        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("VALUE"));
        assert!(rendered.contains("AWS_SECRET_ACCESS_KEY  abc123"));
    }

    #[test]
    fn test_columns_align_to_widest_cell() {
        let rows = vec![
            vec!["SHORT".to_string(), "x".to_string()],
            vec!["A_MUCH_LONGER_NAME".to_string(), "y".to_string()],
        ];
        let table = render_table(&["NAME", "VALUE"], &rows);
        let lines: Vec<&str> = table.lines().collect();

        // VALUE column starts at the same offset on every line
        let offset = lines[0].find("VALUE").unwrap();
        assert_eq!(lines[2].find('x').unwrap(), offset);
        assert_eq!(lines[3].find('y').unwrap(), offset);
    }

    #[test]
    fn test_custom_translations_are_used() {
        let report = Report {
            missing_required: vec![MissingRequired { name: "A".into() }],
            found_excluded: vec![],
        };
        let translations = Translations {
            missing_required: "Fehlende Variablen:".into(),
            error_statement: "Umgebung ist nicht sauber.".into(),
            ..Translations::default()
        };

        let rendered = render_report(&report, &translations);
        assert!(rendered.contains("Fehlende Variablen:"));
        assert!(rendered.contains("Umgebung ist nicht sauber."));
    }
}
