//! `revsel`: headless script driver for the selection core.
//!
//! Replays a comma-separated event script against the app state machine and
//! prints the resulting state, so the whole pipeline (dispatch → filter →
//! clamp → scroll-sync) can be exercised end to end without a terminal UI.
//!
//! Example:
//! `revsel --script "type:app,down,ctrl+k,type:mobile,enter" --json`

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use review_select::harness::HeadlessRenderer;
use review_select::{App, Key, KeyEvent, Mode, SurfaceId, catalog};

#[derive(Parser, Debug)]
#[command(name = "revsel", about = "Project list + command palette core, scripted")]
struct Cli {
    /// JSON catalog file; defaults to the built-in demo projects.
    #[arg(long)]
    items: Option<PathBuf>,

    /// Comma-separated events: up, down, j, k, enter, esc, ctrl+k, meta+k,
    /// type:<text>, click:<row>.
    #[arg(long, default_value = "")]
    script: String,

    /// Visible rows per surface in the headless layout.
    #[arg(long, default_value_t = 10)]
    viewport_rows: u32,

    /// Emit the final state as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug)]
enum ScriptStep {
    Key(KeyEvent),
    Type(String),
    Click(usize),
}

fn parse_step(token: &str) -> Result<ScriptStep> {
    if let Some(text) = token.strip_prefix("type:") {
        return Ok(ScriptStep::Type(text.to_string()));
    }
    if let Some(row) = token.strip_prefix("click:") {
        let position = row
            .parse::<usize>()
            .with_context(|| format!("invalid click row {row:?}"))?;
        return Ok(ScriptStep::Click(position));
    }
    let event = match token {
        "up" => KeyEvent::new(Key::Up),
        "down" => KeyEvent::new(Key::Down),
        "j" => KeyEvent::new(Key::Char('j')),
        "k" => KeyEvent::new(Key::Char('k')),
        "enter" => KeyEvent::new(Key::Enter),
        "esc" | "escape" => KeyEvent::new(Key::Escape),
        "ctrl+k" => KeyEvent::ctrl(Key::Char('k')),
        "meta+k" | "cmd+k" => KeyEvent::meta(Key::Char('k')),
        other => bail!("unknown script token {other:?}"),
    };
    Ok(ScriptStep::Key(event))
}

fn run_script(app: &mut App, renderer: &mut HeadlessRenderer, script: &str) -> Result<()> {
    for token in script.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match parse_step(token)? {
            ScriptStep::Key(mut event) => app.handle_key(&mut event, renderer),
            ScriptStep::Type(text) => app.input_changed(text, renderer),
            ScriptStep::Click(position) => {
                let surface = app.active_surface();
                app.update(
                    review_select::AppMsg::ItemClicked { surface, position },
                    renderer,
                );
            }
        }
        // Redraw from the new snapshot, as a real renderer would.
        renderer.render(app);
    }
    Ok(())
}

fn print_state(app: &App, renderer: &HeadlessRenderer, json: bool) {
    if json {
        let visible: Vec<_> = app
            .list
            .filtered()
            .iter()
            .filter_map(|&idx| app.list.items().get(idx))
            .map(|item| item.name.clone())
            .collect();
        let mode = match app.mode() {
            Mode::Normal => "normal",
            Mode::PaletteOpen => "palette",
        };
        let payload = serde_json::json!({
            "mode": mode,
            "list": {
                "query": app.list.query.clone(),
                "selected": app.list.selected,
                "visible": visible,
                "selected_name": app.list.selected_item().map(|i| i.name.clone()),
                "scroll_offset": renderer.scroll_offset(SurfaceId::MainList),
            },
            "palette": {
                "open": app.palette.open,
                "query": app.palette.query.clone(),
                "selected": app.palette.selected,
                "visible_commands": app.palette.visible_count(),
            },
        });
        println!("{payload}");
        return;
    }

    println!("mode: {:?}", app.mode());
    println!(
        "list: query={:?} selected={} of {} (scroll {})",
        app.list.query,
        app.list.selected,
        app.list.visible_count(),
        renderer.scroll_offset(SurfaceId::MainList),
    );
    match app.list.selected_item() {
        Some(item) => println!("selected item: {} ({})", item.name, item.updated),
        None => println!("selected item: none (filter matches nothing)"),
    }
    if app.palette.open {
        println!(
            "palette: query={:?} selected={} of {}",
            app.palette.query,
            app.palette.selected,
            app.palette.visible_count(),
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let items = match &cli.items {
        Some(path) => catalog::load_catalog(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => catalog::demo_catalog(),
    };

    let mut app = App::new(items);
    let mut renderer = HeadlessRenderer::new(cli.viewport_rows);
    app.bootstrap(&mut renderer);
    renderer.render(&app);

    run_script(&mut app, &mut renderer, &cli.script)?;
    print_state(&app, &renderer, cli.json);
    Ok(())
}
