//! Output formatting for CLI responses.

use aicatch_console::{Notice, Severity};
use aicatch_types::{DiagnosticError, Tool};

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("[OK] {message}");
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

/// Prints a warning to stderr.
pub fn print_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Prints an informational message.
pub fn print_info(message: &str) {
    println!("[INFO] {message}");
}

/// Prints a view-model notice with the matching prefix.
pub fn print_notice(notice: &Notice) {
    match notice.severity {
        Severity::Success => print_success(&notice.message),
        Severity::Info => print_info(&notice.message),
        Severity::Warning => print_warning(&notice.message),
        Severity::Error => print_error(&notice.message),
    }
}

/// Prints the cause and fix of an error, when it has any.
pub fn print_diagnostic(err: &dyn DiagnosticError) {
    if let Some(hint) = err.hint() {
        eprintln!("\n  Cause: {hint}");
    }
    if let Some(fix) = err.fix() {
        eprintln!("  Fix:   {fix}\n");
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// One line per tool: id, name, category, link.
pub fn format_tool_row(tool: &Tool) -> String {
    format!(
        "  {:<36}  {:<24}  {:<16}  {}",
        tool.id.as_str(),
        truncate(&tool.name, 24),
        truncate(&tool.category, 16),
        tool.link
    )
}

pub fn print_tool_table<'a>(tools: impl IntoIterator<Item = &'a Tool>) {
    println!("  {:<36}  {:<24}  {:<16}  LINK", "ID", "NAME", "CATEGORY");
    for tool in tools {
        println!("{}", format_tool_row(tool));
    }
}

/// Full record, one field per line.
pub fn print_tool(tool: &Tool) {
    println!("{}", tool.name);
    println!("{}", "─".repeat(40));
    println!("  ID          : {}", tool.id);
    println!("  Category    : {}", tool.category);
    println!("  Description : {}", tool.description);
    println!("  Link        : {}", tool.link);
    println!("  Created     : {}", tool.created_at);
    println!("  Updated     : {}", tool.updated_at);
}

/// A browse card: name with category, then description and link.
pub fn print_card(tool: &Tool) {
    println!("{} [{}]", tool.name, tool.category);
    println!("  {}", tool.description);
    println!("  Visit: {}", tool.link);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn row_contains_fields() {
        let tool = Tool {
            id: aicatch_types::ToolId::new("id-1").expect("id"),
            name: "Alpha".into(),
            category: "Text".into(),
            description: "d".into(),
            link: "https://a.example".into(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        let row = format_tool_row(&tool);
        assert!(row.contains("id-1"));
        assert!(row.contains("Alpha"));
        assert!(row.ends_with("https://a.example"));
    }
}
