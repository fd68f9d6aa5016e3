//! Ledger domain models and the consistency rules binding them together.

pub mod budget;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use budget::Budget;
pub use ledger::UserLedger;
pub use summary::CalendarField;
pub use transaction::{Direction, Transaction};
