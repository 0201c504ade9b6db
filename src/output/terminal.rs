//! Rich terminal presenter
//!
//! Spinner while the scan is in flight, comfy-table report on completion,
//! console-styled advisory box on failure.

use super::Present;
use crate::format::Tier;
use crate::models::{Advisory, Severity, Snapshot};
use crate::report::{CertRow, EndpointRow, ReportView};
use crate::session::FailureKind;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Presenter for interactive terminal use
pub struct TerminalPresenter {
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl TerminalPresenter {
    pub fn new(quiet: bool) -> Self {
        Self {
            spinner: None,
            quiet,
        }
    }

    fn finish_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl Present for TerminalPresenter {
    fn scan_started(&mut self, domain: &str) {
        if self.quiet {
            return;
        }
        let pb = create_spinner(&format!("Starting analysis of {}...", domain));
        self.spinner = Some(pb);
    }

    fn progress(&mut self, view: &ReportView) {
        if let Some(pb) = &self.spinner {
            let mut msg = view.banner.message.clone();
            if let Some(detail) = &view.banner.detail {
                msg.push_str(": ");
                msg.push_str(detail);
            }
            pb.set_message(msg);
        }
    }

    fn advisory(&mut self, advisory: &Advisory, kind: FailureKind) {
        self.finish_spinner();
        if kind == FailureKind::Api {
            println!();
            println!("  Status: {}", style("FAILED").red().bold());
        }
        print_advisory(advisory);
    }

    fn completed(&mut self, view: &ReportView, _snapshot: &Snapshot, download_hint: &str) {
        self.finish_spinner();

        print_header(&view.host_line);
        println!("  Status:        {}", style(&view.status_line).green().bold());
        println!("  Testing date:  {}", view.test_date);
        println!("  Test duration: {}", view.test_duration);

        for endpoint in &view.endpoints {
            print_endpoint(endpoint);
        }

        if !self.quiet {
            println!();
            println!(
                "  {} {}",
                style("⬇").cyan(),
                style(format!("Full report available: {}", download_hint)).dim()
            );
        }
    }
}

/// Create a spinner for the polling phase
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

/// Print a styled advisory box
pub fn print_advisory(advisory: &Advisory) {
    let painted = match advisory.severity {
        Severity::Info => style(&advisory.title).cyan().bold(),
        Severity::Warning => style(&advisory.title).yellow().bold(),
        Severity::Danger => style(&advisory.title).red().bold(),
    };
    println!();
    println!("  {} {}", painted, advisory.body);
}

fn print_endpoint(endpoint: &EndpointRow) {
    print_header(&format!(
        "Endpoint {} ({})",
        endpoint.ip_address, endpoint.server_name
    ));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    if let Ok((cols, _)) = crossterm::terminal::size() {
        table.set_width(cols.saturating_sub(4));
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(header_cells(&[
        "Grade",
        "Progress",
        "Duration",
        "Protocols",
        "Vulnerabilities",
        "Certs",
    ]));

    let protocols = if endpoint.protocols.is_empty() {
        "---".to_string()
    } else {
        endpoint
            .protocols
            .iter()
            .map(|p| p.label.clone())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let vulns = format!(
        "{} Heartbleed  {} BEAST  {} FS",
        check_mark(endpoint.heartbleed_ok),
        check_mark(endpoint.beast_ok),
        check_mark(endpoint.forward_secrecy)
    );

    table.add_row(vec![
        Cell::new(&endpoint.grade)
            .fg(tier_color(endpoint.grade_tier))
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{}%", endpoint.progress)),
        Cell::new(format!("{} ms", endpoint.duration_ms)),
        Cell::new(protocols).fg(protocols_color(endpoint)),
        Cell::new(vulns),
        Cell::new(endpoint.certs.len().to_string()),
    ]);

    print_indented(&table);

    if !endpoint.certs.is_empty() {
        println!();
        println!("    {}", style("Certificate chain").bold());
        print_cert_table(&endpoint.certs);
    }
}

fn print_cert_table(certs: &[CertRow]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    if let Ok((cols, _)) = crossterm::terminal::size() {
        table.set_width(cols.saturating_sub(4));
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header_cells(&[
        "",
        "Subject",
        "Cryptography",
        "Revocation",
        "Valid",
    ]));

    for cert in certs {
        let kind = if cert.is_leaf { "Leaf" } else { "Intermediate" };
        let revocation_cell = match cert.revocation.as_str() {
            "Valid" => Cell::new(&cert.revocation).fg(Color::Green),
            "REVOKED" | "Internal error" => Cell::new(&cert.revocation).fg(Color::Red),
            _ => Cell::new(&cert.revocation).fg(Color::Grey),
        };

        table.add_row(vec![
            Cell::new(kind).add_attribute(Attribute::Bold),
            Cell::new(&cert.subject),
            Cell::new(&cert.key_summary),
            revocation_cell,
            Cell::new(format!("{} → {}", cert.valid_from, cert.valid_until)),
        ]);
    }

    print_indented(&table);
}

fn header_cells(headers: &[&str]) -> Vec<Cell> {
    headers
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect()
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

fn check_mark(ok: bool) -> String {
    if ok {
        style("✓").green().to_string()
    } else {
        style("✗").red().to_string()
    }
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Best => Color::Green,
        Tier::Good => Color::Cyan,
        Tier::Legacy => Color::Yellow,
        Tier::Critical => Color::Red,
        Tier::Unknown => Color::Grey,
    }
}

/// Color the protocol cell by the worst tier present
fn protocols_color(endpoint: &EndpointRow) -> Color {
    let worst = endpoint
        .protocols
        .iter()
        .map(|p| p.tier)
        .max_by_key(|t| match t {
            Tier::Best => 0,
            Tier::Good => 1,
            Tier::Unknown => 2,
            Tier::Legacy => 3,
            Tier::Critical => 4,
        });

    match worst {
        Some(tier) => tier_color(tier),
        None => Color::Grey,
    }
}
