use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{Rounding, format_grouped};

/// Which side of the ledger a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// Accounts receivable: amounts customers owe the company.
    Receivable,
    /// Accounts payable: amounts the company owes suppliers.
    Payable,
}

impl ReportType {
    /// Ledger account class summed for this report.
    pub fn account_class(&self) -> AccountClass {
        match self {
            Self::Receivable => AccountClass::Receivable,
            Self::Payable => AccountClass::Payable,
        }
    }

    /// Document types that contribute to the balance: the invoice type first,
    /// then its reversing type.
    pub fn move_types(&self) -> [MoveType; 2] {
        match self {
            Self::Receivable => [MoveType::CustomerInvoice, MoveType::CustomerRefund],
            Self::Payable => [MoveType::VendorBill, MoveType::VendorRefund],
        }
    }

    /// Label used in the export file name.
    pub fn file_label(&self) -> &'static str {
        match self {
            Self::Receivable => "CLIENTES",
            Self::Payable => "PROVEEDORES",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Receivable => f.write_str("receivable"),
            Self::Payable => f.write_str("payable"),
        }
    }
}

/// Output file layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Fixed-width SIAP records (11 + 50 + 15 characters).
    #[default]
    Fixed,
    /// Pipe-delimited records.
    Delimited,
}

/// Identifier of a company in the accounting database.
pub type CompanyId = u32;

/// Identifier of a partner (customer or supplier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartnerId(pub u64);

impl std::fmt::Display for PartnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The reporting entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    /// Printed in the summary footer.
    pub name: String,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Parameters of a single export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub report_type: ReportType,
    /// Only postings dated on or before this day are included. Must not be in
    /// the future.
    pub cutoff_date: NaiveDate,
    pub company: Company,
    pub format: OutputFormat,
}

impl ReportRequest {
    pub fn new(report_type: ReportType, cutoff_date: NaiveDate, company: Company) -> Self {
        Self {
            report_type,
            cutoff_date,
            company,
            format: OutputFormat::default(),
        }
    }

    /// Set the output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Partner record as provided by the partner directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    /// Tax identification number (CUIT), if known.
    pub tax_id: Option<String>,
    /// Legal entity rather than an individual contact.
    pub is_company: bool,
}

impl Partner {
    /// A company partner.
    pub fn company(id: u64, name: impl Into<String>, tax_id: Option<&str>) -> Self {
        Self {
            id: PartnerId(id),
            name: name.into(),
            tax_id: tax_id.map(str::to_string),
            is_company: true,
        }
    }

    /// An individual contact.
    pub fn individual(id: u64, name: impl Into<String>, tax_id: Option<&str>) -> Self {
        Self {
            is_company: false,
            ..Self::company(id, name, tax_id)
        }
    }
}

/// Ledger account class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountClass {
    Receivable,
    Payable,
    /// Any other account (revenue, expense, bank, ...).
    Other,
}

impl AccountClass {
    /// Balance of a line on this account's natural side: debit-side for
    /// receivables, credit-side for payables.
    pub fn natural_balance(&self, debit: Decimal, credit: Decimal) -> Option<Decimal> {
        match self {
            Self::Payable => credit.checked_sub(debit),
            Self::Receivable | Self::Other => debit.checked_sub(credit),
        }
    }
}

/// Type of the accounting document a ledger line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    /// Customer invoice.
    CustomerInvoice,
    /// Customer credit note.
    CustomerRefund,
    /// Vendor bill.
    VendorBill,
    /// Vendor refund.
    VendorRefund,
    /// Journal entry, payment, or anything else.
    Entry,
}

impl MoveType {
    /// Whether this document reverses an invoice.
    pub fn is_refund(&self) -> bool {
        matches!(self, Self::CustomerRefund | Self::VendorRefund)
    }
}

/// Posting state of an accounting document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveState {
    #[default]
    Draft,
    Posted,
    Cancelled,
}

/// A single journal item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    pub partner_id: Option<PartnerId>,
    pub company_id: CompanyId,
    pub account_class: AccountClass,
    pub move_type: MoveType,
    pub state: MoveState,
    pub date: NaiveDate,
    pub debit: Decimal,
    pub credit: Decimal,
}

impl LedgerLine {
    /// Contribution of this line to the outstanding balance of `class`.
    /// `None` if the difference is outside the `Decimal` range.
    pub fn signed_balance(&self, class: AccountClass) -> Option<Decimal> {
        class.natural_balance(self.debit, self.credit)
    }
}

/// One row of a top-N report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position, contiguous.
    pub rank: u32,
    pub partner_id: PartnerId,
    pub partner_name: String,
    pub tax_id: Option<String>,
    /// Outstanding balance, always strictly positive when produced by ranking.
    pub amount: Decimal,
}

impl RankedEntry {
    /// Preview label, e.g. `"01. ACME SA - 1,234.50"`.
    pub fn display_name(&self, rounding: Rounding) -> String {
        format!(
            "{:02}. {} - {}",
            self.rank,
            self.partner_name,
            format_grouped(self.amount, rounding)
        )
    }
}
