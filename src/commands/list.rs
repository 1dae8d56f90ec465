//! Implementation of the `testgen list` command.
//!
//! Exports the key catalog so a caller can pick a prompt by key or name.

use super::output::write_stdout;
use crate::cli::ListArgs;
use crate::error::{PromptError, Result};
use crate::prompt::{CatalogEntry, catalog};

/// Execute the `testgen list` command.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    let entries = catalog();
    let output = if args.json {
        format_json(&entries)?
    } else {
        format_table(&entries)
    };
    write_stdout(&output)
}

/// One line per entry: key, display name, and placeholders, column-aligned.
fn format_table(entries: &[CatalogEntry]) -> String {
    let key_width = entries
        .iter()
        .map(|e| e.key.as_str().len())
        .max()
        .unwrap_or(0);
    let name_width = entries
        .iter()
        .map(|e| e.display_name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let placeholders = entry
            .placeholders
            .iter()
            .map(|p| format!("${{{}}}", p))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "{:<kw$}  {:<nw$}  {}\n",
            entry.key.as_str(),
            entry.display_name,
            placeholders,
            kw = key_width,
            nw = name_width
        ));
    }
    out
}

fn format_json(entries: &[CatalogEntry]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(entries)
        .map_err(|e| PromptError::UserError(format!("failed to serialize catalog: {}", e)))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_line_per_entry() {
        let table = format_table(&catalog());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("SELENIUM_JAVA_PAGE_ONLY "));
        assert!(lines[0].contains("Selenium-Java-Page-Only"));
        assert!(lines[0].ends_with("${domContent}"));

        let steps = lines
            .iter()
            .find(|l| l.starts_with("CUCUMBER_WITH_SELENIUM_JAVA_STEPS "))
            .unwrap();
        assert!(steps.ends_with("${domContent} ${pageUrl}"));
    }

    #[test]
    fn table_columns_are_aligned() {
        let table = format_table(&catalog());
        let offsets: Vec<usize> = table
            .lines()
            .map(|l| l.find(char::is_whitespace).unwrap())
            .collect();
        let name_offsets: Vec<usize> = table
            .lines()
            .zip(catalog())
            .map(|(l, e)| l.find(e.display_name).unwrap())
            .collect();
        assert!(offsets.iter().all(|&o| o <= name_offsets[0]));
        assert!(name_offsets.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn json_is_parseable() {
        let json = format_json(&catalog()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[4]["key"], "TESTDATA_JSON_ONLY");
        assert_eq!(entries[4]["display_name"], "TestData-JSON-Only");
    }
}
