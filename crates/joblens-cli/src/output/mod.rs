use joblens_core::Job;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Message shown when the filter matches nothing.
pub const NO_RESULTS: &str = "No jobs match your search or filters.";

/// Render a serializable response to a string in the requested format.
///
/// # Errors
///
/// Returns an error if the value fails to serialize.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
///
/// # Errors
///
/// Returns an error if the value fails to serialize.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a filtered job list.
///
/// Table format shows the four board columns and highlights search matches
/// when color is on; an empty list renders the empty-state message.
/// JSON and raw formats emit the records themselves (an empty list is `[]`,
/// so scripted callers see valid JSON rather than prose).
///
/// # Errors
///
/// Returns an error if the jobs fail to serialize.
pub fn render_jobs(
    jobs: &[Job],
    search: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&jobs, format);
    }

    if jobs.is_empty() {
        return Ok(NO_RESULTS.to_string());
    }

    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };
    let term = search.unwrap_or("");

    let decorate = |text: &str| -> String {
        if options.color {
            table::highlight_matches(text, term)
        } else {
            text.to_string()
        }
    };

    let headers = ["company", "location", "title", "apply"];
    let rows: Vec<Vec<String>> = jobs
        .iter()
        .map(|job| {
            vec![
                decorate(job.company_text()),
                decorate(job.location_text()),
                decorate(job.title_text()),
                job.url_text().to_string(),
            ]
        })
        .collect();

    Ok(table::render_table(&headers, &rows, options))
}

/// Print a filtered job list.
///
/// # Errors
///
/// Returns an error if the jobs fail to serialize.
pub fn output_jobs(jobs: &[Job], search: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_jobs(jobs, search, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_value_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            let headers = ["value"];
            let rows = items
                .iter()
                .map(|item| vec![value_to_cell(item)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&headers, &rows, options))
        }
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut rows = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                rows.push(vec![key, value_to_cell(&value)]);
            }
            Ok(table::render_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_table(&headers, &rows, options))
        }
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_cell)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn job(company: &str, title: &str) -> Job {
        Job {
            company: Some(company.to_string()),
            location: Some("Berlin".to_string()),
            title: Some(title.to_string()),
            url: Some("https://boards.example/1".to_string()),
            ..Job::default()
        }
    }

    #[test]
    fn empty_jobs_render_empty_state_in_table_format() {
        let rendered = render_jobs(&[], None, OutputFormat::Table).unwrap();
        assert_eq!(rendered, NO_RESULTS);
    }

    #[test]
    fn empty_jobs_render_empty_array_in_json_format() {
        let rendered = render_jobs(&[], None, OutputFormat::Raw).unwrap();
        assert_eq!(rendered, "[]");
    }

    #[test]
    fn table_format_shows_board_columns() {
        let jobs = vec![job("Acme", "Senior Rust Engineer")];
        let rendered = render_jobs(&jobs, None, OutputFormat::Table).unwrap();
        let header = rendered.lines().next().unwrap();
        assert!(header.contains("company"));
        assert!(header.contains("location"));
        assert!(header.contains("title"));
        assert!(header.contains("apply"));
        assert!(rendered.contains("https://boards.example/1"));
    }

    #[test]
    fn json_format_keeps_full_records() {
        let jobs = vec![job("Acme", "Engineer")];
        let rendered = render_jobs(&jobs, Some("acme"), OutputFormat::Json).unwrap();
        let parsed: Vec<Job> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, jobs);
    }

    #[test]
    fn string_list_renders_one_row_per_value() {
        let companies = vec!["Acme".to_string(), "Globex".to_string()];
        let rendered = render(&companies, OutputFormat::Table).unwrap();
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.contains("Globex"));
    }

    #[test]
    fn object_renders_sorted_key_value_rows() {
        let value = serde_json::json!({
            "work_types": ["Hybrid", "Remote"],
            "companies": ["Acme"],
        });
        let rendered = render(&value, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[2].starts_with("companies"));
        assert!(lines[3].starts_with("work_types"));
        assert!(lines[3].contains("Hybrid, Remote"));
    }
}
