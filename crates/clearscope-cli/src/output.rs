//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use clearscope_domain::CatalogEntry;
use clearscope_engine::{Severity, ValidationResult};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a validation result.
    pub fn format_result(&self, result: &ValidationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => self.format_result_table(result),
            OutputFormat::Quiet => Ok(format!(
                "{} {}",
                result.score,
                if result.valid { "valid" } else { "invalid" }
            )),
        }
    }

    fn format_result_table(&self, result: &ValidationResult) -> Result<String> {
        let verdict = if result.valid {
            self.colorize("VALID", "green")
        } else {
            self.colorize("INVALID", "red")
        };
        let mut out = format!(
            "{} (score {}/100, {} finding(s))\n",
            verdict,
            result.score,
            result.issue_count()
        );

        if result.issue_count() == 0 {
            out.push_str("Scope is consistent.\n");
            return Ok(out);
        }

        let mut builder = Builder::default();
        builder.push_record(["Severity", "Category", "Finding"]);
        let findings = result
            .errors
            .iter()
            .chain(&result.warnings)
            .chain(&result.suggestions);
        for issue in findings {
            builder.push_record([
                self.severity_label(issue.severity),
                issue.category.to_string(),
                issue.message.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        out.push_str(&table.to_string());
        out.push('\n');
        Ok(out)
    }

    fn severity_label(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::Error => "red",
            Severity::Warning => "yellow",
            Severity::Suggestion => "blue",
        };
        self.colorize(severity.as_str(), color)
    }

    /// Format catalog entries.
    pub fn format_catalog(&self, entries: &[CatalogEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Quiet => Ok(entries
                .iter()
                .map(|entry| entry.code.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => self.format_catalog_table(entries),
        }
    }

    fn format_catalog_table(&self, entries: &[CatalogEntry]) -> Result<String> {
        if entries.is_empty() {
            return Ok(self.colorize("Catalog is empty.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Code", "Description", "Requires"]);
        for entry in entries {
            builder.push_record([
                entry.code.clone(),
                entry.description.clone(),
                entry.required_companions().join(", "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}
