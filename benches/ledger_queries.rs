use budget_ledger::{
    utils::persistence::{load_ledger_from_file, save_ledger_to_file},
    Budget, Direction, FixedClock, UserLedger,
};
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;

fn build_sample_ledger(txn_count: usize) -> UserLedger {
    let mut ledger = UserLedger::new();
    ledger.set_bank_amount(1_000_000_000.0);
    ledger
        .add_budget(Budget::new("Groceries", 500_000_000.0))
        .expect("seed budget");

    let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    for idx in 0..txn_count {
        let clock = FixedClock::new(start + Duration::hours(idx as i64 * 7));
        let direction = if idx % 5 == 0 {
            Direction::Credit
        } else {
            Direction::Debit
        };
        ledger
            .carry_transaction("Groceries", 10.0 + (idx % 90) as f64, direction, &clock)
            .expect("seed transaction");
    }
    ledger
}

fn bench_queries(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

    c.bench_function("month_spend_10k", |b| {
        b.iter(|| black_box(ledger.month_spend(black_box(now))))
    });
    c.bench_function("year_earn_10k", |b| {
        b.iter(|| black_box(ledger.year_earn(black_box(now))))
    });
}

fn bench_snapshot_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("ledger.json");

    c.bench_function("ledger_save_10k", |b| {
        b.iter(|| {
            save_ledger_to_file(&ledger, &file_path).expect("save ledger");
        })
    });

    save_ledger_to_file(&ledger, &file_path).expect("seed");

    c.bench_function("ledger_load_10k", |b| {
        b.iter(|| {
            let loaded = load_ledger_from_file(&file_path).expect("load ledger");
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_queries, bench_snapshot_io);
criterion_main!(benches);
