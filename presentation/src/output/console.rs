//! Console output formatter for session data and summaries

use colored::Colorize;
use resolver_domain::{ErrorKind, SessionCode, Statement};

/// Formats session data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the active session code
    pub fn code(code: &SessionCode) -> String {
        format!(
            "{} {}\n{}",
            "Session code:".cyan().bold(),
            code.as_str().yellow().bold(),
            "Share it with the other participant.".dimmed()
        )
    }

    /// Shown when no session code has been generated or joined yet
    pub fn no_code() -> String {
        format!(
            "{} Run `new` or `join <CODE>` first.",
            "No session code yet.".yellow()
        )
    }

    /// Format every statement in the ledger, oldest first
    pub fn statements(code: &SessionCode, statements: &[Statement]) -> String {
        if statements.is_empty() {
            return "No values to display".dimmed().to_string();
        }

        let mut output = String::new();
        output.push_str(&Self::header(&format!("Statements for {}", code)));
        output.push('\n');
        for (i, statement) in statements.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                format!("{:>2}.", i + 1).dimmed(),
                statement.participant.label().yellow().bold(),
                statement.text
            ));
        }
        output
    }

    /// Confirmation after a statement was stored
    pub fn statement_saved(code: &SessionCode, total: usize) -> String {
        format!(
            "{} Statement saved ({} in ledger for {})",
            "v".green(),
            total,
            code.as_str().bold()
        )
    }

    /// Whether the summarize action is available
    pub fn readiness(ready: bool) -> String {
        if ready {
            format!(
                "{} Both participants have spoken. Run `summarize`.",
                "->".cyan()
            )
        } else {
            format!(
                "{} Waiting for both participants to submit a statement.",
                "..".dimmed()
            )
        }
    }

    /// Format the summary returned by the service
    pub fn summary(ai_response: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Summary"));
        output.push_str("\n\n");
        output.push_str(ai_response);
        output.push('\n');
        output.push_str(&Self::footer());
        output
    }

    /// Format an error for display
    pub fn error(kind: ErrorKind, message: &str) -> String {
        let label = match kind {
            ErrorKind::Validation => "Invalid input:",
            ErrorKind::Storage => "Storage error:",
            ErrorKind::Network => "Network error:",
            ErrorKind::Protocol => "Service error:",
        };
        format!("{} {}", label.red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
