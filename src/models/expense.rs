//! Expense model
//!
//! A single spending entry: date, category, non-negative amount and an
//! optional description.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Date format used for input and persistence
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Spending category label
    pub category: String,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh ID
    ///
    /// The category and description are normalized; call [`Expense::validate`]
    /// before storing.
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            date,
            category: normalize_category(&category.into()),
            amount,
            description: normalize_description(description),
            created_at: now,
            updated_at: now,
        }
    }

    /// Description or an empty string
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        let category_len = self.category.chars().count();
        if category_len > 64 {
            return Err(ExpenseValidationError::CategoryTooLong(category_len));
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount
        )?;
        if let Some(description) = &self.description {
            write!(f, " | {}", description)?;
        }
        Ok(())
    }
}

/// Changes to apply to an existing expense; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub amount: Option<Money>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }

    /// Apply the provided fields to an expense
    pub fn apply_to(&self, expense: &mut Expense) {
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(category) = &self.category {
            expense.category = normalize_category(category);
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(description) = &self.description {
            expense.description = normalize_description(description.clone());
        }
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, ExpenseValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ExpenseValidationError::InvalidDate(s.trim().to_string()))
}

fn normalize_category(category: &str) -> String {
    category.trim().to_string()
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    CategoryTooLong(usize),
    NegativeAmount(Money),
    InvalidDate(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::CategoryTooLong(len) => {
                write!(f, "Category too long ({} chars, max 64)", len)
            }
            Self::NegativeAmount(amount) => {
                write!(f, "Amount must not be negative (got {})", amount)
            }
            Self::InvalidDate(s) => write!(f, "Invalid date '{}': expected YYYY-MM-DD", s),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
