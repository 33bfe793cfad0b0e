//! Top-N partner ranking by outstanding balance.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::config::SiapConfig;
use super::error::SiapError;
use super::ledger::{Ledger, LineQuery, PartnerDirectory};
use super::types::*;

/// Net balance per partner, in order of the partner's first line.
///
/// Lines without a partner are skipped. Each line contributes its balance on
/// the natural side of `class`, so invoices add and refunds subtract. A sum
/// outside the `Decimal` range is a [`SiapError::DataSource`].
pub fn aggregate_balances(
    lines: &[LedgerLine],
    class: AccountClass,
) -> Result<Vec<(PartnerId, Decimal)>, SiapError> {
    let mut index: HashMap<PartnerId, usize> = HashMap::new();
    let mut totals: Vec<(PartnerId, Decimal)> = Vec::new();

    for line in lines {
        let Some(partner_id) = line.partner_id else {
            continue;
        };
        let slot = *index.entry(partner_id).or_insert_with(|| {
            totals.push((partner_id, Decimal::ZERO));
            totals.len() - 1
        });
        let (_, total) = &mut totals[slot];
        let sum = line
            .signed_balance(class)
            .and_then(|balance| total.checked_add(balance))
            .ok_or_else(|| {
                SiapError::DataSource(format!("balance of partner {partner_id} overflows"))
            })?;
        *total = sum;
    }

    Ok(totals)
}

/// Select the partners with the largest positive outstanding balance as of
/// `cutoff_date`, best first.
///
/// At most [`SiapConfig::entry_limit`] entries are returned. Partners with a zero or
/// negative net, partners the directory cannot resolve and (with
/// `companies_only`) individuals are left out. Equal balances keep their ledger
/// order. An empty result is not an error here.
pub fn rank_top_partners<S>(
    source: &S,
    report_type: ReportType,
    cutoff_date: NaiveDate,
    company: &Company,
    config: &SiapConfig,
) -> Result<Vec<RankedEntry>, SiapError>
where
    S: Ledger + PartnerDirectory + ?Sized,
{
    let query = LineQuery::for_report(report_type, cutoff_date, company.id);
    let lines = source.move_lines(&query)?;
    let balances = aggregate_balances(&lines, query.account_class)?;

    let mut qualified: Vec<(Partner, Decimal)> = Vec::new();
    for (partner_id, total) in balances {
        if total <= Decimal::ZERO {
            continue;
        }
        let Some(partner) = source.partner(partner_id)? else {
            tracing::debug!(%partner_id, "skipping unresolvable partner");
            continue;
        };
        if config.companies_only && !partner.is_company {
            continue;
        }
        qualified.push((partner, total));
    }

    // Stable sort: ties keep ledger order.
    qualified.sort_by(|a, b| b.1.cmp(&a.1));
    qualified.truncate(config.entry_limit());

    tracing::debug!(
        %report_type,
        company = company.id,
        %cutoff_date,
        lines = lines.len(),
        ranked = qualified.len(),
        "ranked partners"
    );

    Ok(qualified
        .into_iter()
        .zip(1u32..)
        .map(|((partner, amount), rank)| RankedEntry {
            rank,
            partner_id: partner.id,
            partner_name: partner.name,
            tax_id: partner.tax_id,
            amount,
        })
        .collect())
}
