use clap::Parser;
use directories::ProjectDirs;
use poolpass::api::{CmdResult, ConfigAction, PassportApi, PassportPaths};
use poolpass::catalog::Catalog;
use poolpass::config::PassportConfig;
use poolpass::date::SystemClock;
use poolpass::error::{PassportError, Result};
use poolpass::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::args::{Cli, Commands};
use cli::print::{
    print_config, print_detail, print_messages, print_passport, print_pools, print_summary,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = data_dir()?;

    // An unreadable config falls back to defaults
    let config = PassportConfig::load(&data_dir).unwrap_or_default();
    init_logging(&config, cli.verbose);

    let paths = PassportPaths {
        data: data_dir.clone(),
    };

    let catalog = match (load_catalog(&config), &cli.command) {
        (Ok(catalog), _) => catalog,
        // Config stays reachable so a broken catalog path can be fixed
        (Err(e), Some(Commands::Config { .. })) => {
            warn!(error = %e, "configured catalog unusable, using the built-in one");
            Catalog::builtin()?
        }
        (Err(e), _) => return Err(e),
    };

    let (mut api, loaded) = PassportApi::open(
        FsBackend::new(data_dir),
        catalog,
        Box::new(SystemClock),
        paths,
    );
    print_messages(&loaded.messages);

    match cli.command {
        Some(Commands::Status) | None => handle_status(&api),
        Some(Commands::List { visited }) => handle_list(&api, visited),
        Some(Commands::Show { pool }) => handle_show(&mut api, pool),
        Some(Commands::Next) => handle_result(api.next_pool()?),
        Some(Commands::Prev) => handle_result(api.prev_pool()?),
        Some(Commands::Toggle { pool }) => handle_result(api.toggle(pool.as_deref())?),
        Some(Commands::Passport { page, next, prev }) => {
            handle_passport(&mut api, page, next, prev)
        }
        Some(Commands::Reset { yes }) => handle_reset(&mut api, yes),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
    }
}

fn load_catalog(config: &PassportConfig) -> Result<Catalog> {
    match &config.catalog {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("POOLPASS_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "poolpass", "poolpass")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PassportError::Store("Could not determine data directory".to_string()))
}

fn init_logging(config: &PassportConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("poolpass=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_status(api: &PassportApi<FsBackend>) -> Result<()> {
    handle_result(api.status())
}

fn handle_list(api: &PassportApi<FsBackend>, visited: bool) -> Result<()> {
    let result = api.list_pools(visited);
    if let Some(summary) = &result.summary {
        print_summary(summary);
        println!();
    }
    print_pools(&result.pools);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(api: &mut PassportApi<FsBackend>, pool: Option<String>) -> Result<()> {
    let result = match pool {
        Some(selector) => api.select(&selector)?,
        None => api.status(),
    };
    handle_result(result)
}

fn handle_passport(
    api: &mut PassportApi<FsBackend>,
    page: Option<usize>,
    next: bool,
    prev: bool,
) -> Result<()> {
    let result = if next {
        api.next_page()
    } else if prev {
        api.prev_page()
    } else {
        match page {
            Some(0) => return Err(PassportError::Api("Pages start at 1".into())),
            Some(n) => api.passport(Some(n - 1)),
            None => api.passport(None),
        }
    };
    handle_result(result)
}

fn handle_reset(api: &mut PassportApi<FsBackend>, yes: bool) -> Result<()> {
    if !yes {
        return Err(PassportError::Api(
            "Reset clears every stamp; run `poolpass reset --yes` to confirm".into(),
        ));
    }
    handle_result(api.reset())
}

fn handle_config(
    api: &PassportApi<FsBackend>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Print whatever a command produced, in a fixed order.
fn handle_result(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    if let Some(summary) = &result.summary {
        print_summary(summary);
    }
    if let Some(stamps) = &result.stamps {
        println!();
        print_passport(stamps);
    }
    if let Some(detail) = &result.detail {
        println!();
        print_detail(detail);
    }
    Ok(())
}
