//! Rendering and the one-call export path.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use super::filename::export_file_name;
use super::footer::{Footer, write_footer};
use super::store::{ExportStore, StoredFile};
use super::{delimited, fixed};
use crate::core::{
    ErrorKind, Ledger, OutputFormat, PartnerDirectory, RankedEntry, ReportRequest, SiapConfig,
    SiapError, ensure_valid, rank_top_partners,
};

/// A finished SIAP file. Built once per request and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportResult {
    file_name: String,
    content: Vec<u8>,
    record_count: usize,
    total_amount: Decimal,
}

impl ExportResult {
    /// `SIAP_TOP20_...txt`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File content, UTF-8 encoded.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Number of data records (footer excluded).
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Sum of the rounded amounts of all records.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Consume the result, keeping only the bytes.
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}

/// Rendered records plus the figures printed in the footer.
struct Rendered {
    text: String,
    record_count: usize,
    total: Decimal,
}

fn render(
    entries: &[RankedEntry],
    format: OutputFormat,
    footer: &Footer,
    config: &SiapConfig,
) -> Result<Rendered, SiapError> {
    let mut text = String::new();
    let mut total = Decimal::ZERO;

    for entry in entries {
        let amount = match format {
            OutputFormat::Fixed => fixed::write_record(&mut text, entry, config)?,
            OutputFormat::Delimited => delimited::write_record(&mut text, entry, config),
        };
        total = total.checked_add(amount).ok_or_else(|| {
            SiapError::Format(format!("report total overflows at record {}", entry.rank))
        })?;
    }
    write_footer(&mut text, entries.len(), total, footer, config.rounding);

    Ok(Rendered {
        text,
        record_count: entries.len(),
        total,
    })
}

/// Render ranked entries as SIAP text: one record per entry, then the summary
/// footer. Fails when an amount does not fit the fixed-width field or the
/// total leaves the `Decimal` range.
pub fn format_report(
    entries: &[RankedEntry],
    format: OutputFormat,
    footer: &Footer,
    config: &SiapConfig,
) -> Result<Vec<u8>, SiapError> {
    render(entries, format, footer, config).map(|r| r.text.into_bytes())
}

/// Log and wrap anything that is not a user-facing condition.
pub(crate) fn surface(err: SiapError) -> SiapError {
    let err = err.into_export_failure();
    if err.kind() == ErrorKind::Failure {
        tracing::error!(error = %err, "SIAP export failed");
    }
    err
}

/// Build the [`ExportResult`] for already ranked entries.
pub(crate) fn build_result(
    request: &ReportRequest,
    entries: &[RankedEntry],
    config: &SiapConfig,
    now: NaiveDateTime,
) -> Result<ExportResult, SiapError> {
    if entries.is_empty() {
        tracing::warn!(
            report_type = %request.report_type,
            cutoff_date = %request.cutoff_date,
            company = request.company.id,
            "no partners qualify for SIAP export"
        );
        return Err(SiapError::NoData(format!(
            "no {} partner has a positive balance as of {}",
            request.report_type, request.cutoff_date
        )));
    }

    let footer = Footer::new(request.company.name.clone(), now);
    let rendered = render(entries, request.format, &footer, config).map_err(surface)?;
    let file_name = export_file_name(request.report_type, request.cutoff_date, now);

    tracing::info!(
        file_name = %file_name,
        records = rendered.record_count,
        total = %rendered.total,
        "SIAP export completed"
    );

    Ok(ExportResult {
        file_name,
        content: rendered.text.into_bytes(),
        record_count: rendered.record_count,
        total_amount: rendered.total,
    })
}

/// Validate the request and rank partners without rendering anything.
///
/// An empty vector means nothing would be exported.
pub fn preview<S>(
    request: &ReportRequest,
    source: &S,
    config: &SiapConfig,
    now: NaiveDateTime,
) -> Result<Vec<RankedEntry>, SiapError>
where
    S: Ledger + PartnerDirectory + ?Sized,
{
    ensure_valid(request, now.date())?;
    rank_top_partners(
        source,
        request.report_type,
        request.cutoff_date,
        &request.company,
        config,
    )
    .map_err(surface)
}

/// Run a complete export: validate, rank, render, and name the file.
///
/// `now` is the generation timestamp; its date is "today" for validation.
///
/// # Errors
///
/// - [`SiapError::Validation`] if the cutoff is in the future (nothing is
///   queried);
/// - [`SiapError::NoData`] if no partner qualifies;
/// - [`SiapError::ExportFailed`] wrapping any other failure.
pub fn export_report<S>(
    request: &ReportRequest,
    source: &S,
    config: &SiapConfig,
    now: NaiveDateTime,
) -> Result<ExportResult, SiapError>
where
    S: Ledger + PartnerDirectory + ?Sized,
{
    let entries = preview(request, source, config, now)?;
    build_result(request, &entries, config, now)
}

/// [`export_report`] stamped with the local wall clock.
pub fn export_report_now<S>(
    request: &ReportRequest,
    source: &S,
    config: &SiapConfig,
) -> Result<ExportResult, SiapError>
where
    S: Ledger + PartnerDirectory + ?Sized,
{
    export_report(request, source, config, chrono::Local::now().naive_local())
}

/// [`export_report`], then hand the file to `store`.
pub fn export_to_store<S, T>(
    request: &ReportRequest,
    source: &S,
    store: &mut T,
    config: &SiapConfig,
    now: NaiveDateTime,
) -> Result<(ExportResult, StoredFile), SiapError>
where
    S: Ledger + PartnerDirectory + ?Sized,
    T: ExportStore + ?Sized,
{
    let result = export_report(request, source, config, now)?;
    let stored = store.store(&result).map_err(surface)?;
    Ok((result, stored))
}
