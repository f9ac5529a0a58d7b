//! Distance budgets in kilometres.

use thiserror::Error;

/// Upper bound on the total distance of a route, in kilometres.
///
/// A budget is non-negative and finite. Callers express "no budget" with
/// `Option::<Budget>::None`; an explicit `0.0` is a real, zero-length budget.
///
/// # Examples
/// ```
/// use wayfinder_core::Budget;
///
/// let budget = Budget::new(5.0)?;
/// assert!(budget.allows(4.5));
/// assert!(!budget.allows(5.5));
/// assert!(Budget::new(-1.0).is_err());
/// # Ok::<(), wayfinder_core::BudgetError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Budget(f64);

/// Errors returned by [`Budget::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BudgetError {
    /// The value was below zero.
    #[error("distance budget must not be negative, got {0} km")]
    Negative(f64),
    /// The value was NaN or infinite.
    #[error("distance budget must be a finite number")]
    NotFinite,
}

impl Budget {
    /// Validate and construct a budget.
    ///
    /// # Errors
    /// Returns [`BudgetError::NotFinite`] for NaN or infinite values and
    /// [`BudgetError::Negative`] for values below zero.
    pub fn new(kilometres: f64) -> Result<Self, BudgetError> {
        if !kilometres.is_finite() {
            return Err(BudgetError::NotFinite);
        }
        if kilometres < 0.0 {
            return Err(BudgetError::Negative(kilometres));
        }
        Ok(Self(kilometres))
    }

    /// The budget in kilometres.
    #[must_use]
    pub const fn kilometres(self) -> f64 {
        self.0
    }

    /// Whether `distance_km` fits inside the budget.
    #[must_use]
    pub const fn allows(self, distance_km: f64) -> bool {
        distance_km <= self.0
    }
}

impl TryFrom<f64> for Budget {
    type Error = BudgetError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Budget> for f64 {
    fn from(value: Budget) -> Self {
        value.0
    }
}
