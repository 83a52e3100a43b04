use crate::domain::model::MenuItem;
use crate::utils::error::{MenuError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!(
                "Unsupported format '{}'. Valid formats: csv, tsv, json",
                other
            )),
        }
    }
}

/// Renders items as text with the columns id, name, description, course, price.
pub fn export_items(items: &[&MenuItem], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => delimited(items, b','),
        ExportFormat::Tsv => delimited(items, b'\t'),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(items)?),
    }
}

fn delimited(items: &[&MenuItem], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    if items.is_empty() {
        writer.write_record(["id", "name", "description", "course", "price"])?;
    }
    for item in items {
        writer.serialize(item)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MenuError::IoError(e.into_error()))?;
    tracing::debug!("Exported {} items ({} bytes)", items.len(), bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
