//! Coaching prompt sent to the completion service.

use super::UsageRecord;

/// One prompt line: `"<domain> → <time> minutes"`.
#[must_use]
pub fn format_usage_line(record: &UsageRecord) -> String {
    format!("{} → {} minutes", record.domain, record.time)
}

/// All usage lines in input order, newline separated.
#[must_use]
pub fn usage_text(records: &[UsageRecord]) -> String {
    records.iter().map(format_usage_line).collect::<Vec<_>>().join("\n")
}

/// Wraps the usage lines in the fixed coaching instructions.
///
/// The text must stay byte-for-byte, including the leading and trailing newline.
#[must_use]
pub fn build_prompt(records: &[UsageRecord]) -> String {
    let lines = usage_text(records);
    format!(
        "
You are an AI Productivity Coach. Analyze the following website usage for a student:

{lines}

Give:
1. Productivity score (0–100)
2. Short analysis
3. Actionable improvements (3 bullet points)
Keep it under 120 words.
"
    )
}
