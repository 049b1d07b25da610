//! Expense store backed by expenses.json
//!
//! Holds the authoritative in-memory list of expenses in insertion order and
//! flushes it to disk after every mutation. If a flush fails the mutation is
//! undone, so memory and disk never diverge.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpenseUpdate, Granularity, Money, Period};
use crate::reports::{summary, SpendingReport};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of the expenses file
#[derive(Debug, Clone, Default, Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

#[derive(Serialize)]
struct ExpenseDataRef<'a> {
    expenses: &'a [Expense],
}

/// Ordering for listed expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Order in which expenses were added
    #[default]
    Insertion,
    /// Chronological by expense date; same-day expenses keep insertion order
    Date,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insertion => write!(f, "insertion"),
            Self::Date => write!(f, "date"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insertion" | "added" => Ok(Self::Insertion),
            "date" => Ok(Self::Date),
            other => Err(format!(
                "unknown sort key '{}' (expected insertion or date)",
                other
            )),
        }
    }
}

/// Options for filtering listed expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Category name, matched case-insensitively
    pub category: Option<String>,
    /// Inclusive start date
    pub start_date: Option<NaiveDate>,
    /// Inclusive end date
    pub end_date: Option<NaiveDate>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category {
            if !expense.category.eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        true
    }
}

/// In-memory collection of expenses plus its persistence
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
    audit: Option<AuditLogger>,
}

impl ExpenseStore {
    /// Create an empty store bound to a file; nothing is read until [`load`](Self::load)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expenses: Vec::new(),
            audit: None,
        }
    }

    /// Create a store and load its file
    pub fn open(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Record every successful mutation in an audit log
    pub fn with_audit_log(mut self, log_path: PathBuf) -> Self {
        self.audit = Some(AuditLogger::new(log_path));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load expenses from disk
    ///
    /// An absent or empty file yields an empty store. Content that does not
    /// parse, or any record that breaks an invariant, rejects the whole file
    /// with [`ExpenseError::CorruptData`] and leaves the store untouched.
    pub fn load(&mut self) -> ExpenseResult<()> {
        let data: ExpenseData = read_json(&self.path)?;
        validate_records(&data.expenses)?;

        debug!(
            path = %self.path.display(),
            count = data.expenses.len(),
            "loaded expenses"
        );
        self.expenses = data.expenses;
        Ok(())
    }

    /// Write all expenses to disk atomically
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(
            &self.path,
            &ExpenseDataRef {
                expenses: &self.expenses,
            },
        )?;
        debug!(
            path = %self.path.display(),
            count = self.expenses.len(),
            "saved expenses"
        );
        Ok(())
    }

    /// Add a new expense and persist it
    pub fn add(
        &mut self,
        date: NaiveDate,
        category: &str,
        amount: Money,
        description: Option<&str>,
    ) -> ExpenseResult<Expense> {
        let mut expense = Expense::new(date, category, amount, description.map(str::to_string));
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        while self.index_of(expense.id).is_some() {
            expense.id = ExpenseId::new();
        }

        let amounts = self.expenses.iter().map(|e| e.amount);
        ensure_total_fits(amounts.chain(std::iter::once(expense.amount)))?;

        self.expenses.push(expense.clone());
        if let Err(e) = self.save() {
            self.expenses.pop();
            return Err(e);
        }

        info!(id = %expense.id, category = %expense.category, amount = %expense.amount, "added expense");
        self.record_audit(AuditEntry::create(&expense));
        Ok(expense)
    }

    /// Apply the provided fields to an existing expense and persist it
    ///
    /// The id, position and creation time are preserved.
    pub fn edit(&mut self, id: ExpenseId, update: &ExpenseUpdate) -> ExpenseResult<Expense> {
        let index = self
            .index_of(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let before = self.expenses[index].clone();
        let mut updated = before.clone();
        update.apply_to(&mut updated);
        updated
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        if updated == before {
            return Ok(before);
        }
        updated.updated_at = Utc::now();

        let amounts = self
            .expenses
            .iter()
            .enumerate()
            .map(|(i, e)| if i == index { updated.amount } else { e.amount });
        ensure_total_fits(amounts)?;

        let previous = std::mem::replace(&mut self.expenses[index], updated.clone());
        if let Err(e) = self.save() {
            self.expenses[index] = previous;
            return Err(e);
        }

        info!(id = %updated.id, "edited expense");
        self.record_audit(AuditEntry::update(&before, &updated));
        Ok(updated)
    }

    /// Remove an expense and persist the change, returning the removed record
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let index = self
            .index_of(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let removed = self.expenses.remove(index);
        if let Err(e) = self.save() {
            self.expenses.insert(index, removed);
            return Err(e);
        }

        info!(id = %removed.id, "deleted expense");
        self.record_audit(AuditEntry::delete(&removed));
        Ok(removed)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by full UUID or a short `exp-` prefix
    pub fn find(&self, identifier: &str) -> ExpenseResult<&Expense> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self
                .get(id)
                .ok_or_else(|| ExpenseError::expense_not_found(identifier));
        }

        let mut matches = self.expenses.iter().filter(|e| e.id.matches_short(identifier));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (None, _) => Err(ExpenseError::expense_not_found(identifier)),
            (Some(_), Some(_)) => Err(ExpenseError::Validation(format!(
                "Identifier '{}' matches more than one expense; use more characters",
                identifier
            ))),
        }
    }

    /// All expenses in the requested order
    pub fn list(&self, sort: SortKey) -> Vec<Expense> {
        let mut expenses = self.expenses.clone();
        if sort == SortKey::Date {
            expenses.sort_by_key(|e| e.date);
        }
        expenses
    }

    /// Expenses matching a filter, sorted, then limited
    pub fn list_filtered(&self, sort: SortKey, filter: &ExpenseFilter) -> Vec<Expense> {
        let mut expenses = self.list(sort);
        expenses.retain(|e| filter.matches(e));
        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }
        expenses
    }

    /// Borrow the expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum per category, alphabetical by category
    pub fn summarize_by_category(&self) -> BTreeMap<String, Money> {
        summary::by_category(&self.expenses)
    }

    /// Sum per calendar period, chronological
    pub fn summarize_by_period(&self, granularity: Granularity) -> BTreeMap<Period, Money> {
        summary::by_period(&self.expenses, granularity)
    }

    /// Sum of all amounts
    pub fn total(&self) -> Money {
        summary::total(&self.expenses)
    }

    pub fn spending_report(&self) -> SpendingReport {
        SpendingReport::generate(&self.expenses)
    }

    /// Distinct category names, alphabetical
    pub fn categories(&self) -> Vec<String> {
        self.expenses
            .iter()
            .map(|e| e.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn index_of(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    fn record_audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}

/// Check loaded records: unique ids, valid fields, representable total
fn validate_records(expenses: &[Expense]) -> ExpenseResult<()> {
    let mut seen = HashSet::with_capacity(expenses.len());

    for (index, expense) in expenses.iter().enumerate() {
        if !seen.insert(expense.id) {
            return Err(ExpenseError::CorruptData(format!(
                "Duplicate expense id {} (record {})",
                expense.id.as_uuid(),
                index + 1
            )));
        }
        expense.validate().map_err(|e| {
            ExpenseError::CorruptData(format!("Invalid expense (record {}): {}", index + 1, e))
        })?;
    }

    ensure_total_fits(expenses.iter().map(|e| e.amount))
        .map_err(|_| ExpenseError::CorruptData("Expense total is out of range".into()))
}

fn ensure_total_fits(mut amounts: impl Iterator<Item = Money>) -> ExpenseResult<()> {
    amounts
        .try_fold(Money::zero(), Money::checked_add)
        .map(|_| ())
        .ok_or_else(|| ExpenseError::Validation("Amount too large: total would overflow".into()))
}
