use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    budget::Budget,
    transaction::{Direction, Transaction},
};
use crate::{
    config::{LedgerConfig, DEFAULT_LOW_BANK_WARNING, DEFAULT_TARGET_SAVING},
    errors::LedgerError,
    time::Clock,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// A user's bank balance together with the budgets and transactions drawn against it.
///
/// `projected_spend` is the money already committed to budgets but not yet spent. It is
/// adjusted incrementally by every mutation and never recomputed from the budget list, so
/// all mutations go through the methods below. Each one validates first and only then
/// writes, leaving the ledger untouched on error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLedger {
    bank_amount: f64,
    projected_spend: f64,
    target_saving: f64,
    low_bank_warning: f64,
    #[serde(default)]
    budgets: Vec<Budget>,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default = "UserLedger::schema_version_default")]
    schema_version: u8,
}

impl Default for UserLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl UserLedger {
    /// Empty ledger with a zero bank balance and the stock saving thresholds.
    pub fn new() -> Self {
        Self {
            bank_amount: 0.0,
            projected_spend: 0.0,
            target_saving: DEFAULT_TARGET_SAVING,
            low_bank_warning: DEFAULT_LOW_BANK_WARNING,
            budgets: Vec::new(),
            transactions: Vec::new(),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Empty ledger whose thresholds come from user configuration.
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self {
            target_saving: config.default_target_saving,
            low_bank_warning: config.default_low_bank_warning,
            ..Self::new()
        }
    }

    /// Adds `budget` to the ledger and commits its allocation.
    ///
    /// The funds check runs first and uses the budget's remaining amount; the allocation is
    /// then checked for positivity and the name for uniqueness.
    pub fn add_budget(&mut self, budget: Budget) -> Result<Uuid, LedgerError> {
        self.ensure_funds(budget.remaining)?;
        ensure_positive(budget.allocated)?;
        if self.find_budget(&budget.name).is_some() {
            tracing::warn!(budget = %budget.name, "rejected duplicate budget name");
            return Err(LedgerError::DuplicateName(budget.name));
        }

        let id = budget.id;
        self.projected_spend += budget.allocated;
        tracing::debug!(
            budget = %budget.name,
            allocated = budget.allocated,
            projected_spend = self.projected_spend,
            "budget added"
        );
        self.budgets.push(budget);
        Ok(id)
    }

    /// Renames and re-allocates the budget called `name`, keeping what was already spent.
    pub fn update_budget(
        &mut self,
        name: &str,
        new_name: &str,
        new_allocated: f64,
    ) -> Result<(), LedgerError> {
        let index = self
            .budget_index(name)
            .ok_or_else(|| LedgerError::NotFound(name.to_string()))?;
        let delta = new_allocated - self.budgets[index].allocated;
        self.ensure_funds(delta)?;
        let clash = self
            .budgets
            .iter()
            .enumerate()
            .any(|(idx, other)| idx != index && other.name == new_name);
        if clash {
            tracing::warn!(budget = name, new_name, "rejected rename to an existing budget");
            return Err(LedgerError::DuplicateName(new_name.to_string()));
        }

        let budget = &mut self.budgets[index];
        budget.remaining = new_allocated - budget.spent();
        budget.allocated = new_allocated;
        budget.name = new_name.to_string();
        self.projected_spend += delta;
        tracing::debug!(
            budget = name,
            new_name,
            new_allocated,
            projected_spend = self.projected_spend,
            "budget updated"
        );
        Ok(())
    }

    /// Refills the budget called `name` to its full allocation.
    ///
    /// An unknown name is silently ignored, unlike [`UserLedger::update_budget`].
    pub fn reset_budget(&mut self, name: &str) -> Result<(), LedgerError> {
        let Some(index) = self.budget_index(name) else {
            tracing::debug!(budget = name, "reset skipped, budget not found");
            return Ok(());
        };
        let spent = self.budgets[index].spent();
        self.ensure_funds(spent)?;

        self.projected_spend += spent;
        let budget = &mut self.budgets[index];
        budget.remaining = budget.allocated;
        tracing::debug!(
            budget = name,
            refilled = spent,
            projected_spend = self.projected_spend,
            "budget reset"
        );
        Ok(())
    }

    /// Removes the budget called `name`, releasing its remaining amount.
    ///
    /// Removal is never rejected. Recorded transactions keep their reference to the removed
    /// budget's id.
    pub fn remove_budget(&mut self, name: &str) -> Option<Budget> {
        let index = self.budget_index(name)?;
        let budget = self.budgets.remove(index);
        self.projected_spend -= budget.remaining;
        tracing::debug!(
            budget = name,
            released = budget.remaining,
            projected_spend = self.projected_spend,
            "budget removed"
        );
        Some(budget)
    }

    /// Records a transaction of `amount` against the budget called `budget_name`.
    ///
    /// A debit draws down the budget, the projected spend and the bank balance together. A
    /// credit only raises the bank balance; the budget is kept purely as a reference.
    pub fn carry_transaction(
        &mut self,
        budget_name: &str,
        amount: f64,
        direction: Direction,
        clock: &dyn Clock,
    ) -> Result<Uuid, LedgerError> {
        ensure_positive(amount)?;
        let index = self
            .budget_index(budget_name)
            .ok_or_else(|| LedgerError::NotFound(budget_name.to_string()))?;
        let budget = &self.budgets[index];
        let left_over = budget.remaining - amount;
        if direction == Direction::Debit && (left_over.is_nan() || left_over < 0.0) {
            tracing::warn!(
                budget = budget_name,
                remaining = budget.remaining,
                requested = amount,
                "rejected debit beyond budget"
            );
            return Err(LedgerError::InsufficientBudget {
                budget: budget.name.clone(),
                remaining: budget.remaining,
                requested: amount,
            });
        }

        let transaction = Transaction::new(clock.now(), direction, amount, budget);
        let id = transaction.id;
        self.transactions.push(transaction);

        match direction {
            Direction::Debit => {
                self.projected_spend -= amount;
                self.budgets[index].remaining -= amount;
                self.bank_amount -= amount;
            }
            Direction::Credit => {
                self.bank_amount += amount;
            }
        }
        tracing::debug!(
            budget = budget_name,
            amount,
            ?direction,
            bank_amount = self.bank_amount,
            "transaction recorded"
        );
        Ok(id)
    }

    pub fn find_budget(&self, name: &str) -> Option<&Budget> {
        self.budgets.iter().find(|budget| budget.name == name)
    }

    pub fn budget_by_id(&self, id: Uuid) -> Option<&Budget> {
        self.budgets.iter().find(|budget| budget.id == id)
    }

    /// Transactions recorded against the budget with `budget_id`, oldest first.
    pub fn transactions_for(&self, budget_id: Uuid) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(move |txn| txn.budget_id == budget_id)
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn bank_amount(&self) -> f64 {
        self.bank_amount
    }

    pub fn set_bank_amount(&mut self, bank_amount: f64) {
        self.bank_amount = bank_amount;
    }

    pub fn projected_spend(&self) -> f64 {
        self.projected_spend
    }

    pub fn target_saving(&self) -> f64 {
        self.target_saving
    }

    pub fn set_target_saving(&mut self, target_saving: f64) {
        self.target_saving = target_saving;
    }

    pub fn low_bank_warning(&self) -> f64 {
        self.low_bank_warning
    }

    pub fn set_low_bank_warning(&mut self, low_bank_warning: f64) {
        self.low_bank_warning = low_bank_warning;
    }

    /// Bank money not yet committed to any budget.
    pub fn uncommitted_funds(&self) -> f64 {
        self.bank_amount - self.projected_spend
    }

    pub fn is_bank_low(&self) -> bool {
        self.bank_amount < self.low_bank_warning
    }

    pub fn meets_saving_target(&self) -> bool {
        self.uncommitted_funds() >= self.target_saving
    }

    pub fn schema_version(&self) -> u8 {
        self.schema_version
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }

    fn budget_index(&self, name: &str) -> Option<usize> {
        self.budgets.iter().position(|budget| budget.name == name)
    }

    /// Rejects a commitment the uncommitted funds cannot cover. NaN anywhere fails the check.
    fn ensure_funds(&self, commitment: f64) -> Result<(), LedgerError> {
        let headroom = self.bank_amount - (commitment + self.projected_spend);
        if headroom.is_nan() || headroom < 0.0 {
            tracing::warn!(
                commitment,
                bank_amount = self.bank_amount,
                projected_spend = self.projected_spend,
                "rejected commitment beyond uncommitted funds"
            );
            return Err(LedgerError::InsufficientFunds {
                required: commitment,
                available: self.uncommitted_funds(),
            });
        }
        Ok(())
    }
}

fn ensure_positive(amount: f64) -> Result<(), LedgerError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::InvalidAmount(amount));
    }
    Ok(())
}
