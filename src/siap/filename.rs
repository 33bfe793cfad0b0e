use chrono::{NaiveDate, NaiveDateTime};

use crate::core::ReportType;

/// Export file name: `SIAP_TOP20_<CLIENTES|PROVEEDORES>_<YYYYMMDD>_<HHMMSS>.txt`.
///
/// The date is the report cutoff, the time is taken from `generated_at`.
pub fn export_file_name(
    report_type: ReportType,
    cutoff_date: NaiveDate,
    generated_at: NaiveDateTime,
) -> String {
    format!(
        "SIAP_TOP20_{}_{}_{}.txt",
        report_type.file_label(),
        cutoff_date.format("%Y%m%d"),
        generated_at.format("%H%M%S")
    )
}
