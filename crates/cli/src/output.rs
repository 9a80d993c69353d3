//! Terminal rendering of operation results

use colored::Colorize;
use riakctl_core::domain::{MemberStatusReport, OperationOutcome, StatusReport};
use tabled::{Table, Tabled};

/// Result of one CLI subcommand, independent of where it ran
#[derive(Debug)]
pub enum Output {
    Available(bool),
    Outcome(OperationOutcome),
    Plan(bool),
    MemberStatus(MemberStatusReport),
    Status(StatusReport),
}

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "Node")]
    node: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Ring")]
    ring: String,
    #[tabled(rename = "Pending")]
    pending: String,
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl Output {
    /// Drives the process exit code
    pub fn is_success(&self) -> bool {
        match self {
            Output::Available(available) => *available,
            Output::Outcome(outcome) => outcome.success,
            Output::Plan(success) => *success,
            Output::MemberStatus(_) | Output::Status(_) => true,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Output::Available(true) => format!("{}", "✓ riak is available".green().bold()),
            Output::Available(false) => {
                format!("{}", "✗ riak executable not found".red().bold())
            }
            Output::Outcome(outcome) => {
                let header = if outcome.success {
                    "✓ Success".green().bold()
                } else {
                    "✗ Failed".red().bold()
                };
                let comment = outcome.comment.trim_end();
                if comment.is_empty() {
                    header.to_string()
                } else {
                    format!("{}\n{}", header, comment)
                }
            }
            Output::Plan(true) => format!("{}", "✓ Cluster plan is valid".green().bold()),
            Output::Plan(false) => format!("{}", "✗ Cluster plan failed".red().bold()),
            Output::MemberStatus(report) => render_member_status(report),
            Output::Status(report) => render_status(report),
        }
    }
}

fn render_member_status(report: &MemberStatusReport) -> String {
    let rows: Vec<MemberRow> = report
        .membership
        .iter()
        .map(|(node, info)| MemberRow {
            node: node.clone(),
            status: info.status.clone(),
            ring: info.ring.clone(),
            pending: info.pending.clone(),
        })
        .collect();

    let summary = report
        .summary
        .iter()
        .map(|(state, count)| format!("{}: {}", state.bold(), count))
        .collect::<Vec<_>>()
        .join("  ");

    format!(
        "{}\n{}\n\n{}",
        "Membership".cyan().bold(),
        Table::new(rows),
        summary
    )
}

fn render_status(report: &StatusReport) -> String {
    if report.is_empty() {
        return format!("{}", "No status available".yellow());
    }

    let rows: Vec<StatRow> = report
        .iter()
        .map(|(key, value)| StatRow {
            key: key.clone(),
            value: value.clone(),
        })
        .collect();

    Table::new(rows).to_string()
}
