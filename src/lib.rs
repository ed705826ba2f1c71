mod state;
pub mod commands;

use anyhow::{anyhow, Context};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use state::AppState;

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Groups,
    View {
        folder: Option<String>,
        query: Option<String>,
    },
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Invocation {
    let mut args = args.into_iter().filter(|value| !value.starts_with('-'));

    let first = args.next();
    if first.as_deref() == Some("groups") {
        return Invocation::Groups;
    }

    let folder = if first.as_deref() == Some("view") { args.next() } else { first };
    Invocation::View {
        folder,
        query: args.next(),
    }
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn run_with_args(invocation: Invocation) -> anyhow::Result<()> {
    let state = AppState::open_default().context("failed to open the dashboard config")?;

    let output = match invocation {
        Invocation::Groups => {
            let links = commands::get_links(&state).map_err(|err| anyhow!(err))?;
            let migration = commands::migration_state(&state).map_err(|err| anyhow!(err))?;
            tracing::debug!(?migration, grouped = links.is_grouped(), "links loaded");
            serde_json::to_string_pretty(&links)?
        }
        Invocation::View { folder, query } => {
            let view = commands::get_bookmark_view(&state, folder, query).map_err(|err| anyhow!(err))?;
            serde_json::to_string_pretty(&view)?
        }
    };

    println!("{output}");
    Ok(())
}

pub fn run() {
    init_logging();

    let invocation = parse_args(std::env::args().skip(1));
    if let Err(err) = run_with_args(invocation) {
        eprintln!("error while running tabdeck: {err:#}");
        std::process::exit(1);
    }
}
