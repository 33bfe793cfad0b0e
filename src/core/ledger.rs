//! Read-only data access to the accounting ledger and partner directory.
//!
//! Ranking never talks to a database directly; it is handed something that
//! implements [`Ledger`] and [`PartnerDirectory`]. [`MemoryLedger`] implements
//! both and is what tests and small embedders use.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::SiapError;
use super::types::*;

/// Selection of ledger lines for one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineQuery {
    pub company_id: CompanyId,
    pub account_class: AccountClass,
    pub move_types: Vec<MoveType>,
    /// Inclusive upper bound on the line date.
    pub cutoff_date: NaiveDate,
}

impl LineQuery {
    /// Query for the invoice and refund lines of a report.
    pub fn for_report(report_type: ReportType, cutoff_date: NaiveDate, company_id: CompanyId) -> Self {
        Self {
            company_id,
            account_class: report_type.account_class(),
            move_types: report_type.move_types().to_vec(),
            cutoff_date,
        }
    }

    /// Whether a posted line falls inside this query.
    pub fn matches(&self, line: &LedgerLine) -> bool {
        line.state == MoveState::Posted
            && line.company_id == self.company_id
            && line.account_class == self.account_class
            && self.move_types.contains(&line.move_type)
            && line.date <= self.cutoff_date
    }
}

/// Source of posted journal items.
pub trait Ledger {
    /// All posted lines matching the query, in posting order.
    fn move_lines(&self, query: &LineQuery) -> Result<Vec<LedgerLine>, SiapError>;
}

/// Partner lookup by identifier.
pub trait PartnerDirectory {
    /// The partner, or `None` if the id does not resolve.
    fn partner(&self, id: PartnerId) -> Result<Option<Partner>, SiapError>;
}

/// In-memory ledger and partner directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    partners: BTreeMap<PartnerId, Partner>,
    lines: Vec<LedgerLine>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a partner.
    pub fn add_partner(&mut self, partner: Partner) -> &mut Self {
        self.partners.insert(partner.id, partner);
        self
    }

    /// Append a journal item.
    pub fn add_line(&mut self, line: LedgerLine) -> &mut Self {
        self.lines.push(line);
        self
    }

    /// Post an invoice for `amount` on the report's account class.
    pub fn post_invoice(
        &mut self,
        report_type: ReportType,
        partner: PartnerId,
        company_id: CompanyId,
        date: NaiveDate,
        amount: Decimal,
    ) -> &mut Self {
        let [invoice, _] = report_type.move_types();
        self.post_document(report_type, invoice, partner, company_id, date, amount)
    }

    /// Post a credit note / refund for `amount` on the report's account class.
    pub fn post_refund(
        &mut self,
        report_type: ReportType,
        partner: PartnerId,
        company_id: CompanyId,
        date: NaiveDate,
        amount: Decimal,
    ) -> &mut Self {
        let [_, refund] = report_type.move_types();
        self.post_document(report_type, refund, partner, company_id, date, amount)
    }

    fn post_document(
        &mut self,
        report_type: ReportType,
        move_type: MoveType,
        partner: PartnerId,
        company_id: CompanyId,
        date: NaiveDate,
        amount: Decimal,
    ) -> &mut Self {
        let account_class = report_type.account_class();
        let natural_amount = if move_type.is_refund() { -amount } else { amount };
        // Natural side of receivables is debit, of payables credit.
        let (on_side, off_side) = if natural_amount.is_sign_negative() {
            (Decimal::ZERO, -natural_amount)
        } else {
            (natural_amount, Decimal::ZERO)
        };
        let (debit, credit) = match account_class {
            AccountClass::Payable => (off_side, on_side),
            AccountClass::Receivable | AccountClass::Other => (on_side, off_side),
        };
        self.add_line(LedgerLine {
            partner_id: Some(partner),
            company_id,
            account_class,
            move_type,
            state: MoveState::Posted,
            date,
            debit,
            credit,
        })
    }

    /// Number of stored lines, posted or not.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl Ledger for MemoryLedger {
    fn move_lines(&self, query: &LineQuery) -> Result<Vec<LedgerLine>, SiapError> {
        Ok(self
            .lines
            .iter()
            .filter(|line| query.matches(line))
            .cloned()
            .collect())
    }
}

impl PartnerDirectory for MemoryLedger {
    fn partner(&self, id: PartnerId) -> Result<Option<Partner>, SiapError> {
        Ok(self.partners.get(&id).cloned())
    }
}
