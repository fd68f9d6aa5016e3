//! Spend and earn totals over the calendar period containing a caller-supplied instant.

use chrono::{DateTime, Datelike, Utc};

use super::{ledger::UserLedger, transaction::Direction};

/// Calendar field a transaction timestamp must share with `now` to be counted.
///
/// Only the named field is compared: `DayOfMonth` matches the 15th of any month and year,
/// and `Month` matches March of any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarField {
    DayOfMonth,
    Month,
    Year,
}

impl CalendarField {
    pub fn matches(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            CalendarField::DayOfMonth => timestamp.day() == now.day(),
            CalendarField::Month => timestamp.month() == now.month(),
            CalendarField::Year => timestamp.year() == now.year(),
        }
    }
}

impl UserLedger {
    /// Sums transactions in `direction` whose timestamp shares `field` with `now`.
    pub fn total(&self, direction: Direction, field: CalendarField, now: DateTime<Utc>) -> f64 {
        self.transactions()
            .iter()
            .filter(|txn| txn.direction == direction && field.matches(txn.timestamp, now))
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn day_spend(&self, now: DateTime<Utc>) -> f64 {
        self.total(Direction::Debit, CalendarField::DayOfMonth, now)
    }

    pub fn month_spend(&self, now: DateTime<Utc>) -> f64 {
        self.total(Direction::Debit, CalendarField::Month, now)
    }

    pub fn year_spend(&self, now: DateTime<Utc>) -> f64 {
        self.total(Direction::Debit, CalendarField::Year, now)
    }

    pub fn year_earn(&self, now: DateTime<Utc>) -> f64 {
        self.total(Direction::Credit, CalendarField::Year, now)
    }
}
