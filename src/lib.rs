//! # siap-export
//!
//! Top-20 accounts receivable / payable reports for the SIAP government
//! reporting system, rendered as fixed-width or pipe-delimited text files.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Ledger and partner data come in through the [`Ledger`](crate::core::Ledger) and
//! [`PartnerDirectory`](crate::core::PartnerDirectory) traits, so the crate has no database of its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use siap_export::core::*;
//! use siap_export::siap::export_report;
//!
//! let mut ledger = MemoryLedger::new();
//! ledger.add_partner(Partner::company(1, "ACME SA", Some("20123456789")));
//! ledger.post_invoice(
//!     ReportType::Receivable,
//!     PartnerId(1),
//!     1,
//!     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//!     dec!(1234.50),
//! );
//!
//! let request = ReportRequest::new(
//!     ReportType::Receivable,
//!     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
//!     Company::new(1, "Mi Empresa SA"),
//! );
//! let now = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(14, 30, 0).unwrap();
//!
//! let result = export_report(&request, &ledger, &SiapConfig::default(), now).unwrap();
//! assert_eq!(result.file_name(), "SIAP_TOP20_CLIENTES_20240315_143000.txt");
//! assert_eq!(result.record_count(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, ledger traits, ranking, validation |
//! | `siap` (default) | Fixed/delimited writers, file naming, export, storage |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "siap")]
pub mod siap;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
