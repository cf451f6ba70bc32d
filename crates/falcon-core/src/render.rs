//! Result card rendering
//!
//! Turns a [`ResultView`] into a [`ResultCard`] view model (what the API
//! returns) and into plain text for the terminal.

use std::fmt::Write as _;

use serde::Serialize;

use crate::catalog;
use crate::chart::ChartSeries;
use crate::dashboard::ResultView;

/// Card headline
pub const HEADLINE: &str = "AI Analysis Complete!";

/// Shown in place of chips when nothing was selected
pub const NO_SELECTION_PLACEHOLDER: &str = "No commodities selected";

/// Attribution footer sources
pub const DATA_SOURCES: [&str; 3] = ["S&P Global", "Bloomberg", "Thomson Reuters"];

/// Rows in the text chart
const CHART_HEIGHT: usize = 8;

/// Width of one month column in the text chart
const COLUMN_WIDTH: usize = 4;

/// One selected commodity tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub id: String,
    pub label: String,
}

/// Everything the result card displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    pub headline: &'static str,
    pub chart: ChartSeries,
    /// Chips in selection (insertion) order
    pub chips: Vec<Chip>,
    /// Set when `chips` is empty
    pub placeholder: Option<&'static str>,
    pub data_sources: Vec<&'static str>,
}

/// Render the card for a result. Hidden or absent results render nothing.
pub fn render_card(result: Option<&ResultView>) -> Option<ResultCard> {
    let result = result.filter(|r| r.visible)?;

    let chips: Vec<Chip> = result
        .selections
        .iter()
        .map(|id| Chip {
            id: id.to_string(),
            label: catalog::label_for(id).to_string(),
        })
        .collect();
    let placeholder = chips.is_empty().then_some(NO_SELECTION_PLACEHOLDER);

    Some(ResultCard {
        headline: HEADLINE,
        chart: result.series.clone(),
        chips,
        placeholder,
        data_sources: DATA_SOURCES.to_vec(),
    })
}

impl ResultCard {
    /// Footer line, e.g. "Data Sources: S&P Global, Bloomberg, Thomson Reuters"
    pub fn footer(&self) -> String {
        format!("Data Sources: {}", self.data_sources.join(", "))
    }

    /// Plain-text rendering for terminals
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.headline);
        let _ = writeln!(out);
        for line in line_chart(&self.chart) {
            let _ = writeln!(out, "{}", line);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Analyzed Commodities:");
        match self.placeholder {
            Some(placeholder) => {
                let _ = writeln!(out, "  {}", placeholder);
            }
            None => {
                let chips: Vec<String> =
                    self.chips.iter().map(|c| format!("[{}]", c.label)).collect();
                let _ = writeln!(out, "  {}", chips.join(" "));
            }
        }
        let _ = writeln!(out);
        let _ = write!(out, "{}", self.footer());
        out
    }
}

/// Draw the series as an ASCII line chart, highest row first
fn line_chart(series: &ChartSeries) -> Vec<String> {
    let points = series.points();
    if points.is_empty() {
        return vec![];
    }

    let lo = series.values().min().unwrap_or(0);
    let hi = series.values().max().unwrap_or(0);
    let span = (hi - lo).max(1) as usize;
    let steps = CHART_HEIGHT - 1;

    // Row index each point lands on (0 = bottom)
    let rows: Vec<usize> = series
        .values()
        .map(|v| ((v - lo) as usize * steps + span / 2) / span)
        .collect();

    let mut lines = Vec::with_capacity(CHART_HEIGHT + 2);
    for row in (0..CHART_HEIGHT).rev() {
        let level = lo as usize + span * row / steps;
        let mut line = format!("{:>4} |", level);
        for &r in &rows {
            let mark = if r == row { '*' } else { ' ' };
            let _ = write!(line, "{:^width$}", mark, width = COLUMN_WIDTH);
        }
        lines.push(line.trim_end().to_string());
    }

    lines.push(format!("     +{}", "-".repeat(points.len() * COLUMN_WIDTH)));
    let mut labels = String::from("      ");
    for p in points {
        let _ = write!(labels, "{:^width$}", p.month.as_str(), width = COLUMN_WIDTH);
    }
    lines.push(labels.trim_end().to_string());
    lines
}
