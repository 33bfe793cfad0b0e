//! SIAP top-20 text file generation.
//!
//! Renders ranked partners as fixed-width or pipe-delimited records, appends
//! a `#` summary footer, names the file, and hands it to an [`ExportStore`].
//!
//! # Example
//!
//! ```ignore
//! use siap_export::siap::*;
//!
//! let result = export_report(&request, &ledger, &SiapConfig::default(), now)?;
//! // result.file_name(): SIAP_TOP20_CLIENTES_20240315_143000.txt
//! // result.content():   CRLF-terminated records + footer
//! ```

mod delimited;
mod export;
mod filename;
mod fixed;
mod footer;
mod session;
mod store;
mod text;

pub use delimited::SEPARATOR;
pub use export::{
    ExportResult, export_report, export_report_now, export_to_store, format_report, preview,
};
pub use filename::export_file_name;
pub use fixed::{AMOUNT_WIDTH, NAME_WIDTH, RECORD_LEN, TAX_ID_WIDTH};
pub use footer::Footer;
pub use session::{ExportSession, SessionState};
pub use store::{DirectoryStore, ExportStore, MemoryStore, StoredFile};
