//! Preview-then-export workflow with a draft/exported state.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::export::{ExportResult, build_result, preview, surface};
use super::store::{ExportStore, StoredFile};
use crate::core::{
    Ledger, PartnerDirectory, RankedEntry, ReportRequest, SiapConfig, SiapError, ensure_valid,
};

/// Lifecycle state of an [`ExportSession`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Draft,
    Exported,
}

/// One export request, previewed and then exported exactly once.
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use siap_export::core::*;
/// use siap_export::siap::{ExportSession, MemoryStore, SessionState};
///
/// let mut ledger = MemoryLedger::new();
/// ledger.add_partner(Partner::company(1, "ACME SA", None));
/// let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// ledger.post_invoice(ReportType::Receivable, PartnerId(1), 1, day, dec!(10));
///
/// let request = ReportRequest::new(ReportType::Receivable, day, Company::new(1, "Mi Empresa"));
/// let now = day.and_hms_opt(12, 0, 0).unwrap();
/// let mut session = ExportSession::new(request, SiapConfig::default());
/// session.preview(&ledger, now).unwrap();
/// let mut store = MemoryStore::new();
/// session.export(&mut store, now).unwrap();
/// assert_eq!(session.state(), SessionState::Exported);
/// ```
#[derive(Debug, Clone)]
pub struct ExportSession {
    request: ReportRequest,
    config: SiapConfig,
    state: SessionState,
    entries: Vec<RankedEntry>,
    result: Option<ExportResult>,
}

impl ExportSession {
    pub fn new(request: ReportRequest, config: SiapConfig) -> Self {
        Self {
            request,
            config,
            state: SessionState::Draft,
            entries: Vec::new(),
            result: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn request(&self) -> &ReportRequest {
        &self.request
    }

    /// Entries of the last preview.
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Preview labels (`"01. ACME SA - 1,234.50"`) of the last preview.
    pub fn preview_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.display_name(self.config.rounding))
            .collect()
    }

    /// The exported file, once [`export`](Self::export) has succeeded.
    pub fn result(&self) -> Option<&ExportResult> {
        self.result.as_ref()
    }

    /// Rank partners and replace the preview. Only allowed while in draft.
    pub fn preview<S>(&mut self, source: &S, now: NaiveDateTime) -> Result<&[RankedEntry], SiapError>
    where
        S: Ledger + PartnerDirectory + ?Sized,
    {
        self.ensure_draft()?;
        self.entries.clear();
        self.entries = preview(&self.request, source, &self.config, now)?;
        Ok(&self.entries)
    }

    /// Render the previewed entries, store the file and mark the session
    /// exported.
    ///
    /// Fails with [`SiapError::NoData`] if the preview is empty or was never
    /// generated.
    pub fn export<T>(&mut self, store: &mut T, now: NaiveDateTime) -> Result<StoredFile, SiapError>
    where
        T: ExportStore + ?Sized,
    {
        self.ensure_draft()?;
        ensure_valid(&self.request, now.date())?;
        if self.entries.is_empty() {
            return Err(SiapError::NoData(
                "no data to export, generate the preview first".into(),
            ));
        }

        let result = build_result(&self.request, &self.entries, &self.config, now)?;
        let stored = store.store(&result).map_err(surface)?;

        self.result = Some(result);
        self.state = SessionState::Exported;
        Ok(stored)
    }

    fn ensure_draft(&self) -> Result<(), SiapError> {
        match self.state {
            SessionState::Draft => Ok(()),
            SessionState::Exported => Err(SiapError::Validation(
                "export session has already been exported".into(),
            )),
        }
    }
}
