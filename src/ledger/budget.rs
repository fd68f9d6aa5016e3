use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named allocation of money to one spending category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub name: String,
    pub allocated: f64,
    pub remaining: f64,
}

impl Budget {
    /// Creates an untouched budget whose remaining amount equals its allocation.
    pub fn new(name: impl Into<String>, allocated: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            allocated,
            remaining: allocated,
        }
    }

    pub fn with_remaining(mut self, remaining: f64) -> Self {
        self.remaining = remaining;
        self
    }

    /// Portion of the allocation already spent.
    pub fn spent(&self) -> f64 {
        self.allocated - self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0.0
    }
}
