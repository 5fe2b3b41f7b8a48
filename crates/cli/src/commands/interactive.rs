use pokedex_ops::Pokedex;
use pokedex_ops::pokedex_core::LookupState;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinSet;

use crate::OutputFormat;
use crate::render::{print_detail, state_output};

const PROMPT: &str = "Search your Pokemon... > ";

/// Prompt-level commands; anything else is a search.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Detail,
    Help,
    Search(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        ":quit" | ":exit" | ":q" => Input::Quit,
        ":detail" | ":open" => Input::Detail,
        ":help" | ":h" => Input::Help,
        _ => Input::Search(line),
    }
}

fn print_help() {
    println!("Type a name or number and press enter to search.");
    println!("  :detail   open the detail view for the shown result");
    println!("  :quit     leave");
}

fn emit_state<E: FnMut(String)>(state: &LookupState, format: &OutputFormat, emit: &mut E) {
    match state_output(state, format) {
        Ok(lines) => lines.into_iter().for_each(&mut *emit),
        Err(e) => tracing::warn!(error = %e, "failed to render state"),
    }
}

/// Emit every state the session publishes until `stop` fires.
///
/// A state published before `stop` is always emitted.
async fn render_changes<E: FnMut(String)>(
    mut rx: watch::Receiver<LookupState>,
    format: OutputFormat,
    mut stop: oneshot::Receiver<()>,
    mut emit: E,
) {
    loop {
        tokio::select! {
            biased;
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                emit_state(&state, &format, &mut emit);
            }
            _ = &mut stop => {
                if rx.has_changed().unwrap_or(false) {
                    let state = rx.borrow_and_update().clone();
                    emit_state(&state, &format, &mut emit);
                }
                break;
            }
        }
    }
}

/// Read submissions from `input` until it ends or the user quits.
///
/// Searches run concurrently; all of them are awaited, and their final
/// state rendered through `emit`, before this returns.
async fn drive<R, W, E>(
    pokedex: &Pokedex,
    format: &OutputFormat,
    input: R,
    mut prompt: W,
    emit: E,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: FnMut(String) + Send + 'static,
{
    let (stop_tx, stop_rx) = oneshot::channel();
    let renderer = tokio::spawn(render_changes(
        pokedex.subscribe(),
        format.clone(),
        stop_rx,
        emit,
    ));

    let mut lines = input.lines();
    let mut searches = JoinSet::new();

    loop {
        prompt.write_all(PROMPT.as_bytes()).await?;
        prompt.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Help => print_help(),
            Input::Detail => match pokedex.open_detail() {
                Some(view) => print_detail(&view, format)?,
                None => tracing::debug!("no result to show"),
            },
            Input::Search(query) => {
                let pokedex = pokedex.clone();
                let query = query.to_string();
                searches.spawn(async move { pokedex.submit(&query).await });
            }
        }
    }

    if !searches.is_empty() {
        tracing::debug!(pending = searches.len(), "waiting for in-flight lookups");
    }
    while let Some(outcome) = searches.join_next().await {
        outcome?;
    }

    let _ = stop_tx.send(());
    renderer.await?;
    Ok(())
}

pub async fn run(pokedex: &Pokedex, format: &OutputFormat) -> anyhow::Result<()> {
    print_help();
    drive(
        pokedex,
        format,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        |line| println!("{line}"),
    )
    .await
}
