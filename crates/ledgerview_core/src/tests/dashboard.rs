//! End-to-end tests from a transaction set to the overview
//!
//! These tests verify:
//! - The worked example of groceries, transport and salary
//! - Empty input produces an all-zero report
//! - Backend records flow through validation into the same figures
//! - Querying before aggregating narrows the report

use jiff::civil::date;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::aggregate::{aggregate, aggregate_records};
use crate::model::{
    CategoryAggregate, StatementSource, SummaryReport, Transaction, TransactionRecord,
};
use crate::present::{NO_DATA_LABEL, Overview, date_range};
use crate::query::TransactionQuery;

fn groceries_example() -> Vec<Transaction> {
    vec![
        Transaction::new(date(2024, 3, 2), dec!(-45.00), "Groceries"),
        Transaction::new(date(2024, 3, 9), dec!(-20.00), "Groceries"),
        Transaction::new(date(2024, 3, 12), dec!(-10.00), "Transport"),
        Transaction::new(date(2024, 3, 1), dec!(1200.00), "Salary"),
    ]
}

/// Worked example: two grocery runs, one bus fare and a salary
#[test]
fn test_groceries_transport_salary() {
    let transactions = groceries_example();
    let report = aggregate(&transactions).unwrap();

    assert_eq!(report.total_spending, dec!(75.00));
    assert_eq!(report.total_income, dec!(1200.00));
    assert_eq!(report.net, dec!(1125.00));
    assert_eq!(report.transaction_count, 4);
    assert_eq!(
        report.category_breakdown,
        vec![
            CategoryAggregate {
                category: "Groceries".into(),
                amount: dec!(65.00),
            },
            CategoryAggregate {
                category: "Transport".into(),
                amount: dec!(10.00),
            },
        ]
    );

    let overview = Overview::build(&report, &transactions);
    let labels: Vec<(&str, String)> = overview
        .categories
        .iter()
        .map(|c| (c.category.as_str(), c.percentage_label()))
        .collect();
    assert_eq!(
        labels,
        [
            ("Groceries", "86.7%".to_string()),
            ("Transport", "13.3%".to_string())
        ]
    );
    assert_eq!(overview.date_range, "Mar 2024");
}

/// Empty input yields zeros, no breakdown and the no-data label
#[test]
fn test_empty_input() {
    let report = aggregate(&[]).unwrap();

    assert_eq!(report, SummaryReport::default());
    assert_eq!(report.total_spending, Decimal::ZERO);
    assert_eq!(report.total_income, Decimal::ZERO);
    assert_eq!(report.net, Decimal::ZERO);
    assert!(report.category_breakdown.is_empty());
    assert_eq!(report.transaction_count, 0);
    assert_eq!(date_range(&[]), NO_DATA_LABEL);
    assert_eq!(date_range(&[]), "No data");

    let overview = Overview::build(&report, &[]);
    assert!(overview.categories.is_empty());
}

/// Backend records produce the same report as hand-built transactions
#[test]
fn test_records_match_transactions() {
    let json = r#"{
        "count": 4,
        "transactions": [
            {"id": 1, "transaction_date": "2024-03-02", "description": "WHOLE FOODS", "merchant": null, "amount": -45.0, "category": "Groceries", "source": "boa_credit", "created_at": null},
            {"id": 2, "transaction_date": "2024-03-09", "description": "WHOLE FOODS", "merchant": null, "amount": -20.0, "category": "Groceries", "source": "boa_credit", "created_at": null},
            {"id": 3, "transaction_date": "2024-03-12", "description": "MTA", "merchant": "MTA", "amount": -10.0, "category": "Transport", "source": "apple_card", "created_at": null},
            {"id": 4, "transaction_date": "2024-03-01", "description": "PAYROLL", "merchant": null, "amount": 1200.0, "category": "Salary", "source": "boa_credit", "created_at": null}
        ]
    }"#;

    #[derive(serde::Deserialize)]
    struct Listing {
        transactions: Vec<TransactionRecord>,
    }

    let listing: Listing = serde_json::from_str(json).unwrap();
    let from_records = aggregate_records(&listing.transactions).unwrap();
    let from_transactions = aggregate(&groceries_example()).unwrap();

    assert_eq!(from_records.total_spending, from_transactions.total_spending);
    assert_eq!(from_records.total_income, from_transactions.total_income);
    assert_eq!(from_records.net, from_transactions.net);
    assert_eq!(
        from_records.category_breakdown,
        from_transactions.category_breakdown
    );
}

/// Narrowing the set by source before aggregating
#[test]
fn test_query_then_aggregate() {
    let transactions = vec![
        Transaction::new(date(2024, 1, 3), dec!(-30), "Shopping")
            .with_source(StatementSource::AppleCard),
        Transaction::new(date(2024, 1, 4), dec!(-70), "Shopping")
            .with_source(StatementSource::BoaCredit),
        Transaction::new(date(2024, 2, 1), dec!(100), "Bills & Utilities")
            .with_source(StatementSource::AppleCard),
    ];

    let apple = TransactionQuery::new()
        .source(StatementSource::AppleCard)
        .apply(&transactions);
    let report = aggregate(&apple).unwrap();

    assert_eq!(report.transaction_count, 2);
    assert_eq!(report.total_spending, dec!(30));
    assert_eq!(report.total_income, dec!(100));
    assert_eq!(report.net, dec!(70));
    assert_eq!(date_range(&apple), "Jan 2024 - Feb 2024");
}

/// Cents add up exactly where binary floats would drift
#[test]
fn test_no_float_drift() {
    let transactions: Vec<Transaction> = (0..10)
        .map(|day| Transaction::new(date(2024, 5, day + 1), dec!(-0.10), "Coffee"))
        .collect();
    let report = aggregate(&transactions).unwrap();

    assert_eq!(report.total_spending, dec!(1.00));
    assert_eq!(report.net, dec!(-1.00));
}
