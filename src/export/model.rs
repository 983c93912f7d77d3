use crate::models::WorkEntry;
use crate::utils::date::display_date;
use serde::Serialize;

/// One line of a work report. Serialized field names double as the CSV
/// and JSON column names.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    #[serde(rename = "S.No")]
    pub seq: usize,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Task Description")]
    pub description: String,
}

/// PDF table header.
pub(crate) const PDF_HEADERS: [&str; 3] = ["#", "Date", "Task / Description"];

/// Spreadsheet header, same order as `ReportRow`.
pub(crate) const SHEET_HEADERS: [&str; 3] = ["S.No", "Date", "Task Description"];

/// Number the filtered entries from 1, keeping their order.
pub fn report_rows<'a>(works: impl IntoIterator<Item = &'a WorkEntry>) -> Vec<ReportRow> {
    works
        .into_iter()
        .enumerate()
        .map(|(i, w)| ReportRow {
            seq: i + 1,
            date: display_date(w.date),
            description: w.description.clone(),
        })
        .collect()
}

pub(crate) fn row_cells(r: &ReportRow) -> Vec<String> {
    vec![r.seq.to_string(), r.date.clone(), r.description.clone()]
}
