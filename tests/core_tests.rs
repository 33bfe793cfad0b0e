use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use siap_export::core::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn company() -> Company {
    Company::new(1, "Mi Empresa SA")
}

fn rank(ledger: &MemoryLedger, report_type: ReportType, cutoff: NaiveDate) -> Vec<RankedEntry> {
    rank_top_partners(ledger, report_type, cutoff, &company(), &SiapConfig::default()).unwrap()
}

/// Ledger with three customers and two suppliers, all in company 1.
fn sample_ledger() -> MemoryLedger {
    let mut ledger = MemoryLedger::new();
    ledger
        .add_partner(Partner::company(1, "ACME SA", Some("20-12345678-9")))
        .add_partner(Partner::company(2, "BETA SRL", None))
        .add_partner(Partner::company(3, "GAMMA SA", Some("30-11111111-1")))
        .add_partner(Partner::company(10, "Proveedor Uno SA", Some("30-22222222-2")))
        .add_partner(Partner::company(11, "Proveedor Dos SRL", None));

    let rec = ReportType::Receivable;
    ledger
        .post_invoice(rec, PartnerId(1), 1, date(2024, 1, 10), dec!(1000))
        .post_invoice(rec, PartnerId(1), 1, date(2024, 2, 10), dec!(234.50))
        .post_invoice(rec, PartnerId(2), 1, date(2024, 1, 20), dec!(1500))
        .post_refund(rec, PartnerId(2), 1, date(2024, 2, 1), dec!(501))
        .post_invoice(rec, PartnerId(3), 1, date(2024, 2, 5), dec!(200))
        .post_refund(rec, PartnerId(3), 1, date(2024, 2, 6), dec!(200));

    let pay = ReportType::Payable;
    ledger
        .post_invoice(pay, PartnerId(10), 1, date(2024, 1, 5), dec!(300))
        .post_invoice(pay, PartnerId(11), 1, date(2024, 1, 6), dec!(700))
        .post_refund(pay, PartnerId(11), 1, date(2024, 1, 7), dec!(50));

    ledger
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[test]
fn receivables_ranked_descending() {
    let ranked = rank(&sample_ledger(), ReportType::Receivable, date(2024, 3, 1));

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].partner_name, "ACME SA");
    assert_eq!(ranked[0].amount, dec!(1234.50));
    assert_eq!(ranked[0].tax_id.as_deref(), Some("20-12345678-9"));
    assert_eq!(ranked[1].partner_name, "BETA SRL");
    assert_eq!(ranked[1].amount, dec!(999));
    assert_eq!(ranked[1].tax_id, None);
    assert_eq!(ranked.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn fully_refunded_partner_is_excluded() {
    let ranked = rank(&sample_ledger(), ReportType::Receivable, date(2024, 3, 1));
    assert!(ranked.iter().all(|e| e.partner_name != "GAMMA SA"));
}

#[test]
fn payables_use_credit_side() {
    let ranked = rank(&sample_ledger(), ReportType::Payable, date(2024, 3, 1));

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].partner_name, "Proveedor Dos SRL");
    assert_eq!(ranked[0].amount, dec!(650));
    assert_eq!(ranked[1].partner_name, "Proveedor Uno SA");
    assert_eq!(ranked[1].amount, dec!(300));
}

#[test]
fn receivable_and_payable_do_not_mix() {
    let receivable = rank(&sample_ledger(), ReportType::Receivable, date(2024, 3, 1));
    assert!(receivable.iter().all(|e| e.partner_id.0 < 10));
    let payable = rank(&sample_ledger(), ReportType::Payable, date(2024, 3, 1));
    assert!(payable.iter().all(|e| e.partner_id.0 >= 10));
}

#[test]
fn cutoff_excludes_later_postings() {
    // Before BETA's refund and ACME's second invoice.
    let ranked = rank(&sample_ledger(), ReportType::Receivable, date(2024, 1, 31));

    assert_eq!(ranked[0].partner_name, "BETA SRL");
    assert_eq!(ranked[0].amount, dec!(1500));
    assert_eq!(ranked[1].partner_name, "ACME SA");
    assert_eq!(ranked[1].amount, dec!(1000));
}

#[test]
fn cutoff_before_any_posting_is_empty() {
    let ranked = rank(&sample_ledger(), ReportType::Receivable, date(2023, 12, 31));
    assert!(ranked.is_empty());
}

#[test]
fn other_company_is_ignored() {
    let ranked = rank_top_partners(
        &sample_ledger(),
        ReportType::Receivable,
        date(2024, 3, 1),
        &Company::new(2, "Otra SA"),
        &SiapConfig::default(),
    )
    .unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn truncates_to_twenty() {
    let mut ledger = MemoryLedger::new();
    for id in 1..=25u64 {
        ledger.add_partner(Partner::company(id, format!("Cliente {id:02}"), None));
        ledger.post_invoice(
            ReportType::Receivable,
            PartnerId(id),
            1,
            date(2024, 1, 1),
            Decimal::from(id * 100),
        );
    }

    let ranked = rank(&ledger, ReportType::Receivable, date(2024, 1, 31));

    assert_eq!(ranked.len(), 20);
    assert_eq!(ranked[0].partner_name, "Cliente 25");
    assert_eq!(ranked[19].partner_name, "Cliente 06");
    assert_eq!(ranked.last().unwrap().rank, 20);
}

#[test]
fn custom_limit() {
    let config = SiapConfigBuilder::new().max_entries(1).build();
    let ranked = rank_top_partners(
        &sample_ledger(),
        ReportType::Receivable,
        date(2024, 3, 1),
        &company(),
        &config,
    )
    .unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].partner_name, "ACME SA");
}

#[test]
fn lines_without_partner_are_skipped() {
    let mut ledger = sample_ledger();
    ledger.add_line(LedgerLine {
        partner_id: None,
        company_id: 1,
        account_class: AccountClass::Receivable,
        move_type: MoveType::CustomerInvoice,
        state: MoveState::Posted,
        date: date(2024, 1, 1),
        debit: dec!(99999),
        credit: dec!(0),
    });
    let ranked = rank(&ledger, ReportType::Receivable, date(2024, 3, 1));
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].partner_name, "ACME SA");
}

#[test]
fn unknown_partner_is_skipped_without_rank_gap() {
    let mut ledger = sample_ledger();
    // Biggest balance, but not in the directory.
    ledger.post_invoice(ReportType::Receivable, PartnerId(99), 1, date(2024, 1, 1), dec!(50000));
    let ranked = rank(&ledger, ReportType::Receivable, date(2024, 3, 1));
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[0].partner_name, "ACME SA");
}

#[test]
fn draft_and_non_invoice_lines_are_ignored() {
    let mut ledger = sample_ledger();
    let base = LedgerLine {
        partner_id: Some(PartnerId(3)),
        company_id: 1,
        account_class: AccountClass::Receivable,
        move_type: MoveType::CustomerInvoice,
        state: MoveState::Draft,
        date: date(2024, 1, 1),
        debit: dec!(5000),
        credit: dec!(0),
    };
    ledger.add_line(base.clone());
    ledger.add_line(LedgerLine {
        state: MoveState::Posted,
        move_type: MoveType::Entry,
        ..base
    });
    let ranked = rank(&ledger, ReportType::Receivable, date(2024, 3, 1));
    assert!(ranked.iter().all(|e| e.partner_name != "GAMMA SA"));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn cutoff_today_is_valid() {
    let request = ReportRequest::new(ReportType::Receivable, date(2024, 3, 15), company());
    assert!(validate_request(&request, date(2024, 3, 15)).is_empty());
    assert!(ensure_valid(&request, date(2024, 3, 15)).is_ok());
}

#[test]
fn cutoff_tomorrow_is_invalid() {
    let request = ReportRequest::new(ReportType::Receivable, date(2024, 3, 16), company());
    let err = ensure_valid(&request, date(2024, 3, 15)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("cannot be in the future"));
}

#[test]
fn config_roundtrips_through_json() {
    let config = SiapConfigBuilder::new()
        .rounding(Rounding::HalfUp)
        .missing_tax_id("00000000000")
        .build();
    let json = serde_json::to_string(&config).unwrap();
    let back: SiapConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
