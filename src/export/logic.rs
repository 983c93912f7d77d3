use crate::core::confirm::Confirmer;
use crate::core::range::DateRange;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::report_rows;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::WorkEntry;
use crate::ui::messages::warning;
use crate::utils::date::report_stamp;
use crate::utils::path::{expand_tilde, in_dir};
use chrono::NaiveDate;
use std::path::PathBuf;

pub const NO_DATA: &str = "No data available to export.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    /// Nothing to write; no file was touched.
    Skipped,
}

/// `Work_Report_20251231.pdf`
pub fn report_file_name(format: &ExportFormat, today: NaiveDate) -> String {
    format!("Work_Report_{}.{}", report_stamp(today), format.as_str())
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the already filtered works as a report into `dir`.
    ///
    /// - `pdf`: always produces a file, header-only when `works` is empty
    /// - `xlsx` / `csv` / `json`: an empty selection is skipped with a notice
    pub fn export(
        works: &[&WorkEntry],
        range: &DateRange,
        format: ExportFormat,
        dir: &str,
        today: NaiveDate,
        force: bool,
        confirmer: &mut dyn Confirmer,
    ) -> AppResult<ExportOutcome> {
        let rows = report_rows(works.iter().copied());

        if rows.is_empty() && format != ExportFormat::Pdf {
            warning(NO_DATA);
            return Ok(ExportOutcome::Skipped);
        }

        ensure_dir(&expand_tilde(dir))?;
        let path = in_dir(dir, &report_file_name(&format, today));
        ensure_writable(&path, force, confirmer)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
            ExportFormat::Pdf => export_pdf(&rows, &path, &range.label())?,
        }

        Ok(ExportOutcome::Written(path))
    }
}
