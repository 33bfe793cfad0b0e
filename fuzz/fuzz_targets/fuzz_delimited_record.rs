#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;
use siap_export::core::*;
use siap_export::siap::{Footer, SEPARATOR, format_report};

fuzz_target!(|input: (&str, Option<&str>, i64)| {
    let (name, tax_id, units) = input;
    let entry = RankedEntry {
        rank: 1,
        partner_id: PartnerId(1),
        partner_name: name.to_string(),
        tax_id: tax_id.map(str::to_string),
        amount: Decimal::new(units, 2),
    };
    let now = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let bytes = format_report(&[entry], OutputFormat::Delimited, &Footer::new("F", now), &SiapConfig::default())
        .unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let record = text.split("\r\n").next().unwrap();
    assert_eq!(record.matches(SEPARATOR).count(), 2);
});
