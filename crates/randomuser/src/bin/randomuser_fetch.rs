//! Fetch generated identities and print one JSON summary per record.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use randomuser::{ClientSettings, FetchRequest, ResultSet, UserSource};

/// `randomuser-fetch` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "randomuser-fetch",
    about = "Fetch fake identities from randomuser.me and print their summaries",
    version
)]
struct CliArgs {
    /// Nationality filter passed as `nat`. Falls back to `RANDOMUSER_NATIONALITY`.
    #[arg(long = "nat", value_name = "code")]
    nationality: Option<String>,
    /// Number of records to request. Falls back to `RANDOMUSER_RESULTS`.
    #[arg(long = "results", value_name = "count")]
    results: Option<u32>,
    /// Base endpoint override. Falls back to `RANDOMUSER_ENDPOINT`.
    #[arg(long = "endpoint", value_name = "url")]
    endpoint: Option<String>,
}

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> io::Result<()> {
    let args = CliArgs::parse();
    let loaded = ClientSettings::load_from_iter([OsString::from("randomuser-fetch")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let settings = apply_overrides(loaded, &args);

    let source = settings
        .build_source()
        .map_err(|error| io::Error::other(format!("build client: {error}")))?;
    let request = settings.fetch_request();
    let users = fetch_users(&source, &request)?;
    info!(
        nationality = %request.nationality,
        requested = request.results,
        returned = users.len(),
        "fetched randomuser results"
    );

    write_summaries(io::stdout().lock(), &users)
}

fn apply_overrides(mut settings: ClientSettings, args: &CliArgs) -> ClientSettings {
    if let Some(nationality) = &args.nationality {
        settings.nationality = Some(nationality.clone());
    }
    if let Some(results) = args.results {
        settings.results = Some(results);
    }
    if let Some(endpoint) = &args.endpoint {
        settings.endpoint = Some(endpoint.clone());
    }
    settings
}

fn fetch_users(source: &dyn UserSource, request: &FetchRequest) -> io::Result<ResultSet> {
    source
        .fetch(request)
        .map_err(|error| io::Error::other(format!("fetch failed: {error}")))
}

fn write_summaries(mut out: impl Write, users: &ResultSet) -> io::Result<()> {
    for record in users {
        let line = serde_json::to_string(&record.summary()).map_err(io::Error::other)?;
        writeln!(out, "{line}")?;
    }
    out.flush()
}
