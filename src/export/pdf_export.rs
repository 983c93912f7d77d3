use crate::errors::{AppError, AppResult};
use crate::export::model::{PDF_HEADERS, ReportRow, row_cells};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

pub(crate) const REPORT_TITLE: &str = "Daily Work Report";

/// Always writes a file; an empty report is the title band plus the
/// table header.
pub(crate) fn export_pdf(rows: &[ReportRow], path: &Path, period: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let table: Vec<Vec<String>> = rows.iter().map(row_cells).collect();

    let mut pdf = PdfManager::new();
    pdf.write_report(
        REPORT_TITLE,
        &format!("Period: {period}"),
        &PDF_HEADERS,
        &table,
    );

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
