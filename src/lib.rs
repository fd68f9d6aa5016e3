#![doc(test(attr(deny(warnings))))]

//! Budget Ledger keeps a user's bank balance, spending budgets and transaction history
//! consistent with one another, and answers day, month and year spend/earn queries.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod time;
pub mod utils;

pub use errors::LedgerError;
pub use ledger::{Budget, CalendarField, Direction, Transaction, UserLedger};
pub use time::{Clock, FixedClock, SystemClock};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Ledger tracing initialized.");
    });
}
