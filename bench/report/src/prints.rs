use crate::summary_row::SummaryRow;
use colored::{Color, ColoredString, Colorize};
use tracing::info;

impl SummaryRow {
    pub fn formatted_string(&self) -> ColoredString {
        let color = match self.variable.as_str() {
            "latency_ms" => Color::Green,
            "server_ms" => Color::Blue,
            _ => Color::Yellow,
        };
        let std = self
            .std
            .map(|std| format!("{std:.3}"))
            .unwrap_or_else(|| "n/a".to_string());

        format!(
            "{} ({} items) {}: mean: {:.3}, std: {}, IQR: {:.3}, min: {:.3}, max: {:.3}, count: {}",
            self.protocol,
            self.size,
            self.variable,
            self.mean,
            std,
            self.iqr,
            self.min,
            self.max,
            self.count,
        )
        .color(color)
    }
}

pub fn print_summary(summary: &[SummaryRow]) {
    for row in summary {
        info!("{}", row.formatted_string());
    }
}
