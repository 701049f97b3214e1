//! tabact - render contextual table actions from the command line.
//!
//! Loads rows from a JSON array and action items from a Lua script, replays a
//! selection (and optionally a right click and a click), then prints the
//! resulting button list and context menu markup.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use parking_lot::Mutex;
use tabact_core::{Confirmation, ConfigError, SettingsOverlay};
use tabact_lua::ScriptError;
use tabact_plugin::{
    ActionOutcome, ConfirmationTicket, ContextualActions, MarkupSurface, MemoryTable, Options,
    PluginError, TableEvent,
};
use thiserror::Error;

#[derive(Debug, Parser)]
#[clap(author, version, about = "Render contextual table actions")]
struct Args {
    /// JSON file holding an array of rows.
    rows: PathBuf,

    /// Lua item script. Defaults to the script in the user config directory.
    script: Option<PathBuf>,

    /// JSON settings applied on top of the script's settings.
    #[clap(long)]
    settings: Option<PathBuf>,

    /// Row indexes to select, e.g. `--select 0,2`.
    #[clap(long, value_delimiter = ',')]
    select: Vec<usize>,

    /// Row index to right click after selecting.
    #[clap(long)]
    right_click: Option<usize>,

    /// Item index to click: in the context menu if open, else in the button list.
    #[clap(long)]
    click: Option<usize>,

    /// Accept confirmations instead of declining them.
    #[clap(long)]
    yes: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read rows from {path:?}: {message}")]
    Rows { path: PathBuf, message: String },

    #[error("No script given and no default script location is available")]
    NoScript,

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Plugin(#[from] PluginError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_rows(path: &Path) -> Result<Vec<serde_json::Value>, CliError> {
    let rows_error = |message: String| CliError::Rows {
        path: path.to_path_buf(),
        message,
    };
    let json = std::fs::read_to_string(path).map_err(|e| rows_error(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| rows_error(e.to_string()))
}

fn run(args: &Args) -> Result<String, CliError> {
    let rows = load_rows(&args.rows)?;

    let script = match &args.script {
        Some(path) => path.clone(),
        None => tabact_lua::default_script_path().ok_or(CliError::NoScript)?,
    };
    let lua = mlua::Lua::new();
    let definition = tabact_lua::load_script_file(&lua, &script)?;

    let mut settings = definition.settings();
    if let Some(path) = &args.settings {
        settings = settings.merge(SettingsOverlay::from_json_file(path)?);
    }

    let requests: Arc<Mutex<Vec<(ConfirmationTicket, Confirmation)>>> = Arc::default();
    let sink = Arc::clone(&requests);
    let options = Options::new(settings, definition.items).with_show_confirmation(
        move |ticket, confirmation| sink.lock().push((ticket, confirmation.clone())),
    );

    let table_id = args
        .rows
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string());
    let table = MemoryTable::new(table_id, rows);
    let mut actions = ContextualActions::new(options, table, MarkupSurface::new())?;

    for index in &args.select {
        if !actions.table_mut().select(*index) {
            tracing::warn!("Row {} does not exist, skipping", index);
        }
    }
    actions.handle_event(TableEvent::Selected);

    if let Some(row) = args.right_click {
        actions.handle_event(TableEvent::RightClick { row, x: 0.0, y: 0.0 });
    }

    let mut output = String::new();
    if let Some(index) = args.click {
        let outcome = if actions.context_menu().is_some() {
            actions.click_menu_item(index)
        } else {
            actions.click_button(index)
        };

        let outcome = match outcome {
            ActionOutcome::AwaitingConfirmation(ticket) => {
                if let Some((_, confirmation)) = requests.lock().last() {
                    output.push_str(&format!("confirm: {}\n", confirmation.message));
                }
                actions.resolve_confirmation(ticket, args.yes)?
            }
            other => other,
        };
        output.push_str(&format!("outcome: {:?}\n", outcome));
    }

    output.push_str(actions.surface().buttons_html());
    output.push('\n');
    if let Some(menu) = actions.surface().menu_html() {
        output.push_str(menu);
        output.push('\n');
    }
    Ok(output)
}
