use crate::errors::{AppError, AppResult};
use crate::export::model::{ReportRow, SHEET_HEADERS};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub(crate) const SHEET_NAME: &str = "DailyWorks";

/// Widest the description column is allowed to grow before it wraps.
const MAX_DESCRIPTION_WIDTH: usize = 80;

/// One sheet, header row plus one row per report line. Callers skip the
/// export entirely when there is nothing to write.
pub(crate) fn export_xlsx(rows: &[ReportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x6366F1))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in SHEET_HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = SHEET_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    for (i, r) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        write_row(worksheet, row, r)?;

        col_widths[0] = col_widths[0].max(r.seq.to_string().len());
        col_widths[1] = col_widths[1].max(UnicodeWidthStr::width(r.date.as_str()));
        col_widths[2] = col_widths[2]
            .max(UnicodeWidthStr::width(r.description.as_str()))
            .min(MAX_DESCRIPTION_WIDTH);
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_row(worksheet: &mut Worksheet, row: u32, r: &ReportRow) -> AppResult<()> {
    let border = Format::new().set_border(FormatBorder::Thin);
    let seq_format = border.clone().set_align(FormatAlign::Right);
    let text_format = border.clone().set_text_wrap();

    worksheet
        .write_with_format(row, 0, r.seq as u32, &seq_format)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(row, 1, r.date.as_str(), &border)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(row, 2, r.description.as_str(), &text_format)
        .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
