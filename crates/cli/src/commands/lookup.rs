use clap::Args;
use pokedex_ops::pokedex_core::LookupState;
use pokedex_ops::{Pokedex, SubmitOutcome};

use crate::OutputFormat;
use crate::render::{print_detail, print_state};

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Creature name or national dex number.
    pub query: String,
    /// Open the detail view for the result.
    #[arg(long)]
    pub detail: bool,
}

pub async fn run(
    pokedex: &Pokedex,
    args: &LookupArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    if matches!(format, OutputFormat::Text) && !args.query.trim().is_empty() {
        print_state(&LookupState::Loading, format)?;
    }

    if pokedex.submit(&args.query).await == SubmitOutcome::Ignored {
        tracing::debug!("empty query, nothing to look up");
        return Ok(());
    }

    let state = pokedex.state();
    print_state(&state, format)?;

    if state.error().is_some() {
        std::process::exit(1);
    }

    if args.detail
        && let Some(view) = pokedex.open_detail()
    {
        print_detail(&view, format)?;
    }

    Ok(())
}
