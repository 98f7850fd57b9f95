//! Human and JSON rendering of plans and results.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use orgsync_core::{Login, OrgName, SyncPlan, SyncResult};

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "members")]
    label: &'static str,
    #[tabled(rename = "organization")]
    org: String,
    #[tabled(rename = "count")]
    count: usize,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    source: &'a OrgName,
    target: &'a OrgName,
    counts: CountsJson,
    missing: &'a [Login],
    result: Option<SyncResult>,
    dry_run: bool,
    finished_at: String,
}

#[derive(Serialize)]
struct CountsJson {
    source: usize,
    target: usize,
    missing: usize,
}

/// Counts at level 1, full listings at level 2.
pub fn print_plan(plan: &SyncPlan, verbose: u8) {
    if verbose >= 1 {
        let rows = vec![
            CountRow {
                label: "source",
                org: plan.source.to_string(),
                count: plan.source_members.len(),
            },
            CountRow {
                label: "target",
                org: plan.target.to_string(),
                count: plan.target_members.len(),
            },
            CountRow {
                label: "missing",
                org: plan.target.to_string(),
                count: plan.missing.len(),
            },
        ];
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }

    if verbose >= 2 {
        print_listing("Source members", &plan.source_members);
        print_listing("Target members", &plan.target_members);
        print_listing("Missing members", &plan.missing);
    }
}

fn print_listing(title: &str, logins: &[Login]) {
    println!("{title} ({}):", logins.len());
    for login in logins {
        println!("  {login}");
    }
}

pub fn print_dry_run(plan: &SyncPlan) {
    for login in &plan.missing {
        println!("[dry-run] would add {login} to '{}'", plan.target);
    }
    println!(
        "[dry-run] {} members missing from '{}'",
        plan.missing.len(),
        plan.target
    );
}

pub fn print_summary(result: &SyncResult) {
    println!();
    println!(
        "{}",
        format!("Successfully added {} members", result.added).green()
    );
    let failed = format!("Failed to add {} members", result.failed);
    if result.failed > 0 {
        println!("{}", failed.red());
    } else {
        println!("{failed}");
    }
}

pub fn print_json(plan: &SyncPlan, result: Option<SyncResult>, dry_run: bool) -> Result<()> {
    let payload = ReportJson {
        source: &plan.source,
        target: &plan.target,
        counts: CountsJson {
            source: plan.source_members.len(),
            target: plan.target_members.len(),
            missing: plan.missing.len(),
        },
        missing: &plan.missing,
        result,
        dry_run,
        finished_at: chrono::Utc::now().to_rfc3339(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize sync report")?
    );
    Ok(())
}
