use super::print::{print_messages, print_output};
use super::setup::Cli;
use awsid::api::AwsidApi;
use awsid::config::AwsidConfig;
use awsid::directory::aws_cli::AwsCliDirectory;
use awsid::error::Result;
use awsid::options::{resolve_format, resolve_sort};
use awsid::render::render;
use clap::Parser;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Flag conflicts are reported before any network or file access.
    let format = resolve_format(cli.format.as_deref(), cli.json, cli.table, cli.csv)?;
    let sort = resolve_sort(cli.sort.as_deref(), cli.sort_desc.as_deref())?;

    let config = AwsidConfig::load()?.with_overrides(cli.profile.clone(), cli.region.clone());
    tracing::debug!(version = config.version, cache = %config.cache_file.display(), "starting");
    let api = init_api(config);

    match api.refresh() {
        Ok(result) => print_messages(&result.messages, cli.verbose),
        Err(e) => tracing::warn!("Failed to refresh account info, using cached file: {}", e),
    }

    let result = match cli.alias.as_deref() {
        Some(term) => api.lookup(term, sort)?,
        None => api.list(sort)?,
    };
    let rendered = render(&result.accounts, format, result.exact_match)?;
    print_output(&rendered);
    Ok(())
}

fn init_api(config: AwsidConfig) -> AwsidApi<AwsCliDirectory> {
    let directory = AwsCliDirectory::new(config.aws_bin.clone())
        .with_profile(config.profile.clone())
        .with_region(config.region.clone());
    AwsidApi::new(directory, config)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}
