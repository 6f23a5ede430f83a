//! Output formatter implementations.

use crate::{Error, Result};

use super::{OutputFormatter, PathReport};

/// Formatter for pretty-printed JSON.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Formatter for YAML.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        serde_yaml::to_string(report).map_err(Error::YamlOutput)
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl OutputFormatter for HumanFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        let class = &report.classification;
        let rows: [(&str, &str); 17] = [
            ("raw", report.raw.as_str()),
            ("full_path", report.full_path.as_str()),
            ("file_path_no_ext", report.file_path_no_ext.as_str()),
            ("directory", report.directory.as_str()),
            ("file_name", report.file_name.as_str()),
            ("file_name_no_ext", report.file_name_no_ext.as_str()),
            ("extension", report.extension.as_str()),
            ("empty", yes_no(report.is_empty)),
            ("root", yes_no(report.is_root)),
            ("spaces", yes_no(report.contains_spaces)),
            ("anchor", yes_no(report.contains_anchor)),
            ("remote", yes_no(class.remote)),
            ("absolute", yes_no(class.absolute)),
            ("local", yes_no(class.local)),
            ("image", yes_no(report.is_image)),
            ("markdown", yes_no(report.is_markdown)),
            ("url_encoded", report.url_encoded.as_str()),
        ];

        let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        let lines: Vec<String> = rows
            .iter()
            .map(|(key, value)| format!("{key:<width$}  {value}"))
            .collect();

        Ok(lines.join("\n"))
    }
}
