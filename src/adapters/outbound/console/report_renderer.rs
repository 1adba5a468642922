use crate::fabric_health::domain::{HealthReport, Severity};
use chrono::Local;
use owo_colors::{AnsiColors, OwoColorize};

const BANNER: &str = "====== InfiniBand Fabric Health Check (Paired View) ======";
const LEGEND: &str = "[Legend] Format: DeviceName(p=Physical port/v=Virtual port)";
const HEALTHY_LINE: &str = "All mapped ports are Active! System Healthy.";
const FOOTER: &str = "Issues detected! Please check the devices listed above.";
const RULE_WIDTH: usize = 100;

/// Renders a health report as terminal text
///
/// Severity is classified upstream; this layer only decides how a row
/// looks. The legend, column header and rules appear only when at least
/// one issue exists; a clean scan produces the single healthy line. With
/// color disabled the output is plain text with no escape codes.
pub struct ReportRenderer {
    use_color: bool,
}

impl ReportRenderer {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn render(&self, report: &HealthReport) -> String {
        let mut out = String::new();
        out.push_str(&self.paint(BANNER, AnsiColors::BrightMagenta));
        out.push('\n');
        out.push_str(&format!(
            "Time: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        out.push('\n');

        if report.is_healthy() {
            out.push_str(&self.paint(HEALTHY_LINE, AnsiColors::BrightGreen));
            out.push('\n');
            return out;
        }

        out.push_str(&self.paint(LEGEND, AnsiColors::BrightCyan));
        out.push('\n');
        out.push_str(&format!(
            "{:<10} | {:<35} | {:<15} | {}\n",
            "Severity", "Source Device", "State", "Target Device"
        ));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');

        for issue in &report.issues {
            let severity_cell = self.paint(
                &format!("{:<10}", issue.severity.label()),
                severity_color(issue.severity),
            );
            out.push_str(&format!(
                "{} | {:<35} | {:<15} | {} {}\n",
                severity_cell,
                issue.source,
                issue.state,
                issue.direction.arrow(),
                issue.target
            ));
        }

        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out.push('\n');
        out.push_str(&self.paint(FOOTER, AnsiColors::BrightRed));
        out.push('\n');
        out
    }

    fn paint(&self, text: &str, color: AnsiColors) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn severity_color(severity: Severity) -> AnsiColors {
    match severity {
        Severity::Critical => AnsiColors::BrightRed,
        Severity::Warning => AnsiColors::BrightYellow,
    }
}
