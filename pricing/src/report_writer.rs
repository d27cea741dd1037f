use std::path::{Path, PathBuf};

use common::result::base::Price;
use tracing::info;

use crate::{build_report::BuildReport, errors::PricingError};

const PRICE_COLUMN: &str = "Price";
const TOTAL_ROW: &str = "Total";

/// Renders the report as a two column CSV: product name, price.
/// Unknown prices are left blank and the last row holds the total.
pub fn render_csv(report: &BuildReport) -> String {
    let mut csv = format!(",{PRICE_COLUMN}\n");

    for (name, price) in &report.items {
        let cell = match price {
            Price::Resolved(dollars) => format!("{dollars:.2}"),
            Price::Unknown => String::new(),
        };

        csv.push_str(&format!("{},{}\n", escape_field(name), cell));
    }

    csv.push_str(&format!("{TOTAL_ROW},{:.2}\n", report.total));

    csv
}

/// Writes `<output_dir>/<build file name>` and returns the path
pub async fn write_report(
    report: &BuildReport,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf, PricingError> {
    let path = output_dir.as_ref().join(report.file_name());

    tokio::fs::write(&path, render_csv(report))
        .await
        .map_err(|source| PricingError::ReportWriteFailed {
            path: path.display().to_string(),
            source,
        })?;

    info!("Wrote {} report to {}", report.name, path.display());

    Ok(path)
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
