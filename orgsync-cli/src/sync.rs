//! `orgsync --source <org> --target <org>`: list, diff, and grant.

use anyhow::{Context, Result};
use clap::Args;

use orgsync_core::{pipeline, OrgName, DEFAULT_PAGE_SIZE};
use orgsync_github::{GithubClient, DEFAULT_API_URL};

use crate::progress::BarProgress;
use crate::report;

/// Arguments for a sync run.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Source GitHub organization name (pulls users from this org).
    #[arg(long, short = 's', value_name = "ORG")]
    pub source: Option<String>,

    /// Target GitHub organization name (pushes users to this org).
    #[arg(long, short = 't', value_name = "ORG")]
    pub target: Option<String>,

    /// GitHub API base URL.
    #[arg(long, short = 'u', value_name = "API_URL", default_value = DEFAULT_API_URL)]
    pub url: String,

    /// Verbosity: 0 summary only, 1 counts and per-member results,
    /// 2 full member listings and raw grant responses.
    #[arg(
        long,
        short = 'v',
        value_name = "LEVEL",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=2),
    )]
    pub verbose: u8,

    /// GitHub token with org admin and user access.
    #[arg(long, env = "GH_USER_SYNC_TOKEN", hide_env_values = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Members requested per listing page (GitHub allows at most 100).
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=100),
    )]
    pub page_size: u32,

    /// Show which members would be added without granting anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit a machine-readable JSON report instead of the text summary.
    #[arg(long)]
    pub json: bool,
}

impl SyncArgs {
    /// Both organizations, or `None` when either flag is missing.
    pub fn orgs(&self) -> Option<(OrgName, OrgName)> {
        let source = self.source.clone()?;
        let target = self.target.clone()?;
        Some((OrgName::from(source), OrgName::from(target)))
    }

    pub fn run(self, source: OrgName, target: OrgName) -> Result<()> {
        let client = GithubClient::new(&self.url, self.token.clone());
        tracing::debug!(url = client.base_url(), "using GitHub API");

        let plan = pipeline::plan(&client, &source, &target, self.page_size)
            .with_context(|| format!("failed to compare '{source}' with '{target}'"))?;

        if !self.json {
            report::print_plan(&plan, self.verbose);
        }

        if self.dry_run {
            if self.json {
                return report::print_json(&plan, None, true);
            }
            report::print_dry_run(&plan);
            return Ok(());
        }

        let echo = if self.json { 0 } else { self.verbose };
        let mut progress = BarProgress::new(echo);
        let result = match pipeline::apply(&client, &plan, &mut progress) {
            Ok(result) => result,
            Err(err) => {
                progress.abandon();
                return Err(err).with_context(|| format!("sync into '{target}' aborted"));
            }
        };

        if self.json {
            return report::print_json(&plan, Some(result), false);
        }
        report::print_summary(&result);
        Ok(())
    }
}
