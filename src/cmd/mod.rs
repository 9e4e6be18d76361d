use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use standard_error::{Interpolate, StandardError};

use crate::{
    conf::settings,
    pkg::{
        internal::{
            adaptors::jobs::{
                selectors::{Facets, JobPage},
                spec::{EmploymentType, FilterPatch, JobFilters, JobStatus},
            },
            dashboard::{Dashboard, Header},
        },
        store::{Action, Store},
    },
    prelude::Result,
};

mod requests;

#[derive(Parser)]
#[command(about = "recruiting dashboard over an in-memory session")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Dashboard,
    Jobs(JobsArgs),
    Notifications {
        #[arg(long = "read")]
        read: Vec<String>,
        #[arg(long)]
        read_all: bool,
    },
    Profile,
    Settings,
    Security,
    /// Applies a JSON array of requests and prints the resulting state.
    Replay { file: PathBuf },
}

#[derive(Args)]
struct JobsArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    status: Option<JobStatus>,
    #[arg(long = "type")]
    employment_type: Option<EmploymentType>,
    #[arg(long)]
    page: Option<usize>,
    #[arg(long)]
    per_page: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JobsView<'a> {
    filters: &'a JobFilters,
    facets: Facets<'a>,
    #[serde(flatten)]
    page: JobPage<'a>,
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| StandardError::new("ERR-OUT-001").interpolate_err(e.to_string()))?;
    println!("{}", out);
    Ok(())
}

fn jobs(store: &mut Store, args: JobsArgs) -> Result<()> {
    if let Some(n) = args.per_page {
        store.dispatch(Action::SetItemsPerPage(n));
    }
    let patch = FilterPatch {
        search: args.search,
        department: args.department,
        status: args.status.map(Some),
        employment_type: args.employment_type.map(Some),
    };
    if patch != FilterPatch::default() {
        store.dispatch(Action::SetFilters(patch));
    }
    if let Some(page) = args.page {
        store.dispatch(Action::SetCurrentPage(page));
    }
    let selector = store.jobs();
    print(&JobsView {
        filters: selector.filters(),
        facets: selector.facets(),
        page: selector.page(),
    })
}

fn replay(store: &mut Store, file: PathBuf) -> Result<()> {
    let raw = std::fs::read_to_string(&file)
        .map_err(|e| StandardError::new("ERR-IO-001").interpolate_err(e.to_string()))?;
    let script: Vec<requests::Request> = serde_json::from_str(&raw)
        .map_err(|e| StandardError::new("ERR-REQ-001").interpolate_err(e.to_string()))?;
    tracing::info!("replaying {} requests from {}", script.len(), file.display());
    for request in script {
        requests::apply(store, request)?;
    }
    print(&store.snapshot())
}

pub fn run() -> Result<()> {
    let args = Cmd::parse();
    let mut store = Store::seeded(settings.items_per_page);
    tracing::debug!("{} session seeded", &settings.service_name);
    match args.command {
        Some(SubCommandType::Dashboard) => {
            print(&Dashboard::build(&store, settings.recent_jobs_limit))?;
        }
        Some(SubCommandType::Jobs(jobs_args)) => {
            jobs(&mut store, jobs_args)?;
        }
        Some(SubCommandType::Notifications { read, read_all }) => {
            for id in read {
                store.dispatch(Action::MarkAsRead(id));
            }
            if read_all {
                store.dispatch(Action::MarkAllAsRead);
            }
            print(&Header::build(&store, settings.notification_preview_limit, Utc::now()))?;
        }
        Some(SubCommandType::Profile) => {
            print(&store.user().profile())?;
        }
        Some(SubCommandType::Settings) => {
            print(store.company())?;
        }
        Some(SubCommandType::Security) => {
            print(store.security())?;
        }
        Some(SubCommandType::Replay { file }) => {
            replay(&mut store, file)?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
