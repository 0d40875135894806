//! Categorization statistics display

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::engine::{CategorizationStats, SourceCounts};

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Auto")]
    auto: usize,
    #[tabled(rename = "Manual")]
    manual: usize,
    #[tabled(rename = "Auto %")]
    share: String,
}

impl StatsRow {
    fn new(category: impl Into<String>, counts: &SourceCounts) -> Self {
        Self {
            category: category.into(),
            auto: counts.auto,
            manual: counts.manual,
            share: format_share(counts),
        }
    }
}

fn format_share(counts: &SourceCounts) -> String {
    counts
        .auto_share()
        .map(|share| format!("{:.1}%", share))
        .unwrap_or_else(|| "-".to_string())
}

/// Format auto/manual counts per category with an overall total row
pub fn format_stats(stats: &CategorizationStats) -> String {
    if stats.overall.total() == 0 {
        return "No transactions found.".to_string();
    }

    let mut rows: Vec<StatsRow> = stats
        .by_category
        .iter()
        .map(|(category, counts)| StatsRow::new(category.as_str(), counts))
        .collect();
    rows.push(StatsRow::new("TOTAL", &stats.overall));

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right());

    format!(
        "Categorization accuracy\n{}\n\n{} of {} transactions kept the predicted category",
        table,
        stats.overall.auto,
        stats.overall.total()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_stats() {
        assert_eq!(
            format_stats(&CategorizationStats::default()),
            "No transactions found."
        );
    }

    #[test]
    fn test_format_stats_includes_total() {
        let mut stats = CategorizationStats::default();
        stats.overall = SourceCounts { auto: 3, manual: 1 };
        stats
            .by_category
            .insert("Transport".into(), SourceCounts { auto: 3, manual: 1 });

        let output = format_stats(&stats);
        assert!(output.contains("TOTAL"));
        assert!(output.contains("75.0%"));
        assert!(output.contains("3 of 4 transactions"));
    }
}
