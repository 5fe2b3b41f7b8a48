//! Text and JSON rendering of the lookup state and the detail overlay.

use pokedex_ops::pokedex_core::{DetailView, LookupState, capitalize};

use crate::OutputFormat;

/// Lines shown for `state` in text mode.
///
/// `Idle` renders nothing. `Success` shows the capitalized name and the
/// sprite reference.
pub fn state_lines(state: &LookupState) -> Vec<String> {
    let mut lines: Vec<String> = state.status_text().into_iter().collect();
    if let Some(result) = state.result() {
        lines.push(capitalize(&result.name));
        if result.sprite_url.is_empty() {
            lines.push("  (no sprite)".to_string());
        } else {
            lines.push(format!("  sprite: {}", result.sprite_url));
        }
    }
    lines
}

/// Boxed overlay for the selected sprite.
pub fn detail_lines(view: &DetailView) -> Vec<String> {
    let body = [
        capitalize(&view.title),
        String::new(),
        view.text.replace(['\n', '\u{c}'], " "),
        String::new(),
        format!(
            "[{}] {}x{} {}",
            view.image_alt, view.image_width, view.image_height, view.image_url
        ),
    ];
    let width = body.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("+{}+", "-".repeat(width + 2)));
    for line in &body {
        let pad = width - line.chars().count();
        lines.push(format!("| {line}{} |", " ".repeat(pad)));
    }
    lines.push(format!("+{}+", "-".repeat(width + 2)));
    lines
}

/// Lines for `state` in the chosen format. JSON is a single line.
pub fn state_output(state: &LookupState, format: &OutputFormat) -> anyhow::Result<Vec<String>> {
    match format {
        OutputFormat::Json => Ok(vec![serde_json::to_string(state)?]),
        OutputFormat::Text => Ok(state_lines(state)),
    }
}

/// Print `state` in the chosen format.
pub fn print_state(state: &LookupState, format: &OutputFormat) -> anyhow::Result<()> {
    for line in state_output(state, format)? {
        println!("{line}");
    }
    Ok(())
}

/// Print the detail overlay in the chosen format.
pub fn print_detail(view: &DetailView, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
        OutputFormat::Text => {
            for line in detail_lines(view) {
                println!("{line}");
            }
        }
    }
    Ok(())
}
