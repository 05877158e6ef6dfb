//! Demo ledger seeder for Neraca development and testing.
//!
//! Writes a small service business's first month of books: chart of
//! accounts, evidence records and balanced journal entries.
//!
//! Usage: cargo run --bin seeder [-- <snapshot path>]

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use neraca_core::ledger::{Account, AccountGroup, EvidenceInput, JournalEntryInput};
use neraca_shared::AppConfig;
use neraca_store::MemoryStore;

/// Chart of accounts: number, name, group.
const CHART: [(&str, &str, AccountGroup); 10] = [
    ("101", "Kas", AccountGroup::CurrentAsset),
    ("102", "Piutang Usaha", AccountGroup::CurrentAsset),
    ("151", "Peralatan", AccountGroup::FixedAsset),
    ("201", "Utang Usaha", AccountGroup::CurrentLiability),
    ("251", "Utang Bank", AccountGroup::LongTermLiability),
    ("301", "Modal Pemilik", AccountGroup::Equity),
    ("401", "Pendapatan Jasa", AccountGroup::Revenue),
    ("501", "Beban Sewa", AccountGroup::Expense),
    ("502", "Beban Gaji", AccountGroup::Expense),
    ("503", "Beban Listrik", AccountGroup::Expense),
];

/// One balanced two-line transaction.
struct Transaction {
    evidence: &'static str,
    day: u32,
    description: &'static str,
    debit: &'static str,
    credit: &'static str,
    amount: Decimal,
}

fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            evidence: "BKM-001",
            day: 2,
            description: "Setoran modal awal",
            debit: "101",
            credit: "301",
            amount: dec!(50000000),
        },
        Transaction {
            evidence: "BKM-002",
            day: 3,
            description: "Pinjaman bank lima tahun",
            debit: "101",
            credit: "251",
            amount: dec!(20000000),
        },
        Transaction {
            evidence: "FB-001",
            day: 5,
            description: "Pembelian peralatan secara kredit",
            debit: "151",
            credit: "201",
            amount: dec!(15000000),
        },
        Transaction {
            evidence: "BKK-001",
            day: 6,
            description: "Sewa kantor bulan ini",
            debit: "501",
            credit: "101",
            amount: dec!(2500000),
        },
        Transaction {
            evidence: "BKM-003",
            day: 12,
            description: "Jasa konsultasi tunai",
            debit: "101",
            credit: "401",
            amount: dec!(12000000),
        },
        Transaction {
            evidence: "INV-001",
            day: 20,
            description: "Jasa konsultasi ditagih",
            debit: "102",
            credit: "401",
            amount: dec!(3000000),
        },
        Transaction {
            evidence: "BKK-002",
            day: 25,
            description: "Gaji karyawan",
            debit: "502",
            credit: "101",
            amount: dec!(4000000),
        },
        Transaction {
            evidence: "BKK-003",
            day: 28,
            description: "Tagihan listrik",
            debit: "503",
            credit: "101",
            amount: dec!(750000),
        },
        Transaction {
            evidence: "BKK-004",
            day: 30,
            description: "Cicilan utang usaha",
            debit: "201",
            credit: "101",
            amount: dec!(5000000),
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("loading configuration")?;
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.store.snapshot_path.clone());

    let store = MemoryStore::new(&config.store);

    println!("Seeding chart of accounts...");
    seed_accounts(&store).await?;

    println!("Seeding evidence and journal entries...");
    seed_transactions(&store).await?;

    store
        .save(&path)
        .await
        .with_context(|| format!("writing snapshot {path}"))?;
    println!("Seeding complete! Snapshot written to {path}");

    Ok(())
}

/// Seeds the chart of accounts with each group's usual normal side.
async fn seed_accounts(store: &MemoryStore) -> Result<()> {
    for (number, name, group) in CHART {
        let side = group.default_normal_balance();
        store
            .create_account(Account::new(number, name, group, side))
            .await?;
        println!("  {number} {name} ({group}, {side:?})");
    }
    Ok(())
}

/// Seeds one evidence record and a debit/credit pair per transaction.
async fn seed_transactions(store: &MemoryStore) -> Result<()> {
    let transactions = transactions();

    for tx in &transactions {
        let date = NaiveDate::from_ymd_opt(2024, 1, tx.day)
            .with_context(|| format!("invalid day {}", tx.day))?;

        store
            .create_evidence(EvidenceInput {
                evidence_number: tx.evidence.to_string(),
                transaction_date: Some(date),
                description: tx.description.to_string(),
                reference: String::new(),
            })
            .await?;

        for line in [
            JournalEntryInput::debit(tx.debit, tx.amount),
            JournalEntryInput::credit(tx.credit, tx.amount),
        ] {
            store
                .create_journal_entry(
                    line.on(date)
                        .described(tx.description)
                        .evidence(tx.evidence),
                )
                .await?;
        }
    }

    println!("  Recorded {} transactions", transactions.len());
    Ok(())
}
