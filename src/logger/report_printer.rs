use terminal_size::{terminal_size, Width};
use crate::config::constants::{DASHBOARD_HEADLINE, DASHBOARD_SUBHEADLINE};
use crate::enums::panel_status::PanelStatus;
use crate::structs::category_panel::CategoryPanel;

const FALLBACK_WIDTH: usize = 80;
const LABEL_WIDTH: usize = 32;
const VALUE_WIDTH: usize = 6;

/// Terminal rendering of dashboard panels as horizontal bar charts.
pub struct ReportPrinter;

impl ReportPrinter {
    pub fn print_report(panels: &[CategoryPanel]) {
        let width = Self::terminal_width();

        println!("\n📊 {}", DASHBOARD_HEADLINE);
        println!("   {}", DASHBOARD_SUBHEADLINE);
        println!("{}", "═".repeat(width.min(60)));

        for panel in panels {
            print!("{}", Self::render_panel(panel, width));
        }
    }

    /// Renders one card. Bars are scaled so the top entry fills the space
    /// left after the label and value columns.
    pub fn render_panel(panel: &CategoryPanel, width: usize) -> String {
        let mut out = format!("\n🏷️ {} ({})\n   {}\n", panel.title, panel.slug, panel.description);
        out.push_str(&"━".repeat(width.min(60)));
        out.push('\n');

        match &panel.status {
            PanelStatus::Loading => {
                out.push_str("   ⏳ Loading...\n");
                return out;
            }
            PanelStatus::NoData { reason } => {
                out.push_str("   📭 No data\n");
                if let Some(reason) = reason {
                    out.push_str(&format!("      {}\n", reason));
                }
                return out;
            }
            PanelStatus::Ready => {}
        }

        let bar_space = width.saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 6).max(10);
        let max_value = panel.chart.values.iter().copied().max().unwrap_or(0).max(1);

        for (label, value) in panel.chart.labels.iter().zip(&panel.chart.values) {
            let bar_len = usize::try_from(u128::from(*value) * bar_space as u128 / u128::from(max_value))
                .unwrap_or(bar_space);
            out.push_str(&format!(
                "   {} {} {:>width$}\n",
                Self::fit_label(label),
                "█".repeat(bar_len.max(1)),
                value,
                width = VALUE_WIDTH
            ));
        }

        if let Some(words) = &panel.word_cloud {
            out.push_str("\n   ☁️ Word cloud\n");
            for word in words {
                out.push_str(&format!("      {:<20} size {:>5.1}  rotate {:>2}°\n", word.text, word.font_size, word.rotate));
            }
        }

        out
    }

    fn fit_label(label: &str) -> String {
        let count = label.chars().count();
        if count <= LABEL_WIDTH {
            format!("{}{}", label, " ".repeat(LABEL_WIDTH - count))
        } else {
            let truncated: String = label.chars().take(LABEL_WIDTH - 1).collect();
            format!("{}…", truncated)
        }
    }

    fn terminal_width() -> usize {
        terminal_size()
            .map(|(Width(w), _)| usize::from(w))
            .unwrap_or(FALLBACK_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::category::Category;
    use crate::services::ranked_aggregator::RankedAggregator;
    use crate::structs::aggregate_options::AggregateOptions;
    use crate::structs::config::chart_config::ChartConfig;

    #[test]
    fn empty_panel_renders_placeholder() {
        let panel = CategoryPanel::from_series(
            Category::CompanySize,
            &Default::default(),
            None,
            None,
            &ChartConfig::default(),
        );
        let text = ReportPrinter::render_panel(&panel, 80);
        assert!(text.contains("No data"));
        assert!(text.contains("회사 규모"));
    }

    #[test]
    fn top_entry_gets_longest_bar() {
        let raw = serde_json::json!({"SQL": 10, "Go": 5});
        let series = RankedAggregator::aggregate_value(&raw, &AggregateOptions::new()).unwrap();
        let panel = CategoryPanel::from_series(Category::TechStack, &series, None, None, &ChartConfig::default());
        let text = ReportPrinter::render_panel(&panel, 80);
        let bars: Vec<usize> = text
            .lines()
            .filter(|l| l.contains('█'))
            .map(|l| l.chars().filter(|c| *c == '█').count())
            .collect();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0], 2 * bars[1]);
    }
}
