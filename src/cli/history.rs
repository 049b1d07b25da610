//! Audit history command

use crate::audit::AuditLogger;
use crate::config::ExpensePaths;
use crate::error::ExpenseResult;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(paths: &ExpensePaths, limit: usize) -> ExpenseResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
