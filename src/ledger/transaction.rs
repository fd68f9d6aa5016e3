use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::budget::Budget;

/// Whether money entered (credit) or left (debit) the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Credit,
    Debit,
}

impl Direction {
    pub fn is_credit(self) -> bool {
        matches!(self, Direction::Credit)
    }

    pub fn from_credit_flag(credit: bool) -> Self {
        if credit {
            Direction::Credit
        } else {
            Direction::Debit
        }
    }
}

/// An append-only record of money moving through a budget.
///
/// The budget is referenced by id. `budget_name` is the label the budget carried when the
/// transaction was recorded and is not updated on rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub direction: Direction,
    pub amount: f64,
    pub budget_id: Uuid,
    pub budget_name: String,
}

impl Transaction {
    pub fn new(
        timestamp: DateTime<Utc>,
        direction: Direction,
        amount: f64,
        budget: &Budget,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            direction,
            amount,
            budget_id: budget.id,
            budget_name: budget.name.clone(),
        }
    }

    pub fn is_credit(&self) -> bool {
        self.direction.is_credit()
    }
}
