mod cli;
mod commands;

use cli::{CheckParams, DefinitionParams, LangsParams, OutlineParams, TreeParams, build_cli};
use tracing_subscriber::EnvFilter;

/// Log filter variable, e.g. `TSQ_LOG=tsq_lib=debug`.
const LOG_ENV: &str = "TSQ_LOG";

fn main() {
    init_logging();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        Some(("outline", m)) => {
            let params = OutlineParams::from_matches(m);
            commands::outline::run(params.into());
        }
        Some(("definition", m)) => {
            let params = DefinitionParams::from_matches(m);
            commands::definition::run(params.into());
        }
        Some(("langs", m)) => {
            let params = LangsParams::from_matches(m);
            commands::langs::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr so stdout stays clean for tree and JSON output.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
