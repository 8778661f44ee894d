// crates/cli/src/presentation.rs
use crate::config::RenderOptions;
use crate::error::Result;
use crate::options::{OutputFormat, SortKey};
use bool_tally_engine::report::Report;
use bool_tally_engine::{CountMap, CountMode};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use std::fmt::Write;

/// Render `report` in the requested format.
///
/// The result always ends with a newline.
///
/// # Errors
/// Returns an error if JSON or YAML serialization fails.
pub fn render(report: &Report, options: &RenderOptions) -> Result<String> {
    let text = match options.format {
        OutputFormat::Text => render_text(report, options),
        OutputFormat::Table => render_table(report, options),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    };
    Ok(text)
}

fn render_text(report: &Report, options: &RenderOptions) -> String {
    let mut out = String::new();
    match report.tally.mode {
        CountMode::Combination => {
            out.push_str("Boolean Value Counts:\n");
            for (key, count) in sorted_entries(&report.tally.counts, options) {
                let _ = writeln!(out, "{key} -> {count}");
            }
        }
        CountMode::Flat => {
            let (trues, falses) = report.tally.flat_totals();
            let _ = writeln!(out, "True Count: {trues}");
            let _ = writeln!(out, "False Count: {falses}");
            let _ = writeln!(out, "Total Booleans: {}", trues + falses);
        }
    }
    out
}

fn render_table(report: &Report, options: &RenderOptions) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    match report.tally.mode {
        CountMode::Combination => {
            table.set_header(vec!["Combination", "Count"]);
            for (key, count) in sorted_entries(&report.tally.counts, options) {
                table.add_row(vec![key.to_string(), count.to_string()]);
            }
        }
        CountMode::Flat => {
            let (trues, falses) = report.tally.flat_totals();
            table.set_header(vec!["Value", "Count"]);
            table.add_row(vec!["true".to_string(), trues.to_string()]);
            table.add_row(vec!["false".to_string(), falses.to_string()]);
        }
    }
    table.add_row(vec!["TOTAL".to_string(), report.tally.total().to_string()]);

    format!("{}\n{table}\n", report.file_name)
}

fn sorted_entries<'a>(counts: &'a CountMap, options: &RenderOptions) -> Vec<(&'a str, usize)> {
    let mut entries: Vec<_> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    if options.sort == SortKey::Count {
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    }
    if options.desc {
        entries.reverse();
    }
    entries
}
