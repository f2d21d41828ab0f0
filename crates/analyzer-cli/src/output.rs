//! Plain-text output for one-shot rendering.

use analyzer_view::{DashboardViewModel, MetricField, MetricStatus};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Renders the view model as aligned plain-text lines.
#[must_use]
pub fn render_text(model: &DashboardViewModel) -> String {
    let mut out = String::new();
    out.push_str(&format!("{BOLD}Analyzer{RESET} {DIM}dashboard{RESET}\n\n"));
    out.push_str(&card_line("CPU Usage", &model.cpu));
    out.push_str(&card_line("GPU Usage", &model.gpu));
    out.push_str(&card_line("Temperature", &model.temperature));
    out
}

fn card_line(title: &str, field: &MetricField) -> String {
    let (color, tag) = match field.status {
        MetricStatus::Normal => ("", ""),
        MetricStatus::Warning => (YELLOW, "  [warning]"),
        MetricStatus::Critical => (RED, "  [critical]"),
    };
    format!("  {title:<14}{color}{BOLD}{}{RESET}{tag}\n", field.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str, status: MetricStatus) -> MetricField {
        MetricField {
            text: text.to_owned(),
            status,
        }
    }

    #[test]
    fn render_text_contains_all_card_values() {
        let model = DashboardViewModel {
            cpu: field("45%", MetricStatus::Normal),
            gpu: field("60%", MetricStatus::Normal),
            temperature: field("65°C", MetricStatus::Warning),
            cpu_series: vec![45],
            gpu_series: vec![60],
        };

        let text = render_text(&model);
        assert!(text.contains("45%"));
        assert!(text.contains("60%"));
        assert!(text.contains("65°C"));
        assert!(text.contains("[warning]"));
    }

    #[test]
    fn placeholder_model_renders_dashes() {
        let text = render_text(&DashboardViewModel::default());
        assert_eq!(text.matches('—').count(), 3);
        assert!(!text.contains("[warning]"));
    }

    #[test]
    fn critical_status_is_tagged() {
        let model = DashboardViewModel {
            temperature: field("85°C", MetricStatus::Critical),
            ..DashboardViewModel::default()
        };
        assert!(render_text(&model).contains("[critical]"));
    }
}
