use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::evaluation::EvaluationResult;
use crate::report::ReportSummary;
use crate::scoring::RiskTier;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a customer name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format results as a table with columns: Index, Score, Tier, Name, Id
/// No headers; rows arrive already sorted by the evaluator.
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column: right-aligned, 5 chars wide
/// Tier column: left-aligned, 9 chars ("High Risk" is the widest literal)
pub fn format_result_table(results: &[EvaluationResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No customers evaluated.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 5;
    let tier_width = 9;
    let separator = "  ";

    results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", result.credit_score, width = score_width);
            let tier_padded = format!("{:<width$}", result.risk_tier.as_str(), width = tier_width);
            let id_str = format!("#{}", result.customer_id);

            // Leave whatever the fixed columns don't claim to the name
            let fixed_width =
                index_width + 1 + score_width + tier_width + separator.len() * 3 + id_str.len();
            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&result.name, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_name(&result.name, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                result.name.clone()
            };

            if use_colors {
                let tier_colored = match result.risk_tier {
                    RiskTier::HighRisk => tier_padded.red().to_string(),
                    RiskTier::LowRisk => tier_padded.green().to_string(),
                };
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    tier_colored,
                    separator,
                    name,
                    separator,
                    id_str.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_padded, separator, tier_padded, separator, name, separator,
                    id_str
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the aggregate summary block. The mean is shown with two decimals;
/// the underlying value stays at full precision.
pub fn format_summary(summary: &ReportSummary, use_colors: bool) -> String {
    if use_colors {
        format!(
            "Customers evaluated: {}\nHigh risk: {}\nLow risk: {}\nAverage score: {:.2}",
            summary.total.bold(),
            summary.high_risk.red(),
            summary.low_risk.green(),
            summary.average_score.bold()
        )
    } else {
        format!(
            "Customers evaluated: {}\nHigh risk: {}\nLow risk: {}\nAverage score: {:.2}",
            summary.total, summary.high_risk, summary.low_risk, summary.average_score
        )
    }
}

/// Format results as tab-separated values for scripting
/// Columns: customer_id, name, score, tier (no headers, no colors)
pub fn format_tsv(results: &[EvaluationResult]) -> String {
    results
        .iter()
        .map(|result| {
            format!(
                "{}\t{}\t{}\t{}",
                result.customer_id,
                result.name,
                result.credit_score,
                result.risk_tier.as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
