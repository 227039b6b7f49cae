use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::thread;

use chrono::Local;
use scalescope_core::{update, AppState, AppViewModel, Msg, ScreenView};
use scalescope_engine::{load_favorites, EngineHandle, FavoritesStorage, JsonFileStorage};
use scope_logging::{scope_info, scope_warn};

use super::config::{self, AppConfig, CONFIG_FILENAME};
use super::effects::{EffectRunner, InputSink};
use super::logging::{self, LOG_FILENAME};
use super::ui::commands::{self, Command, HELP_TEXT};
use super::ui::render;

/// Everything the dispatch loop reacts to.
pub enum Input {
    Msg(Msg),
    Line(String),
    /// Stdin closed.
    Eof,
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let (config, config_err) = match config::load(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    logging::initialize(
        config.log_destination,
        config.level_filter(),
        Path::new(LOG_FILENAME),
    );
    if let Some(err) = config_err {
        scope_warn!("Falling back to default config: {:#}", err);
    }
    scope_info!("Starting with endpoint {}", config.endpoint);

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let storage: Arc<dyn FavoritesStorage> =
        Arc::new(JsonFileStorage::new(config.state_dir.clone()));
    let engine = EngineHandle::new(
        config.fetch_settings(),
        Arc::new(InputSink::new(input_tx.clone())),
    );
    let runner = EffectRunner::new(
        engine,
        storage.clone(),
        config.endpoint.clone(),
        config.export_dir.clone(),
    );
    spawn_stdin_reader(input_tx);

    let mut session = Session::new(runner);
    let mut out = io::stdout().lock();
    session.dispatch(Msg::FavoritesRestored(load_favorites(storage.as_ref())));
    session.dispatch(Msg::Started);
    session.flush(&mut out)?;

    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Msg(msg) => session.dispatch(msg),
            Input::Line(line) => match commands::parse(&line) {
                Some(Command::Quit) => break,
                Some(command) => session.handle_command(command),
                None => {}
            },
            Input::Eof => break,
        }
        session.flush(&mut out)?;
    }

    scope_info!("Shutting down");
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    scope_warn!("Stopped reading stdin: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(Input::Eof);
    });
}

/// Owns the core state between messages and everything rendered alongside it.
struct Session {
    state: AppState,
    runner: EffectRunner,
    fetched_at: Option<String>,
    notices: Vec<String>,
    force_render: bool,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            fetched_at: None,
            notices: Vec::new(),
            force_render: false,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        if matches!(msg, Msg::ListingLoaded(_)) {
            self.fetched_at = Some(Local::now().format("%Y-%m-%d %H:%M").to_string());
        }
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        let notices = self.runner.run(effects);
        if !notices.is_empty() {
            self.force_render = true;
        }
        self.notices.extend(notices);
    }

    fn handle_command(&mut self, command: Command) {
        let view = self.state.view();
        let is_dashboard_command = !matches!(
            command,
            Command::Help | Command::Unknown(_) | Command::Quit
        );
        if is_dashboard_command {
            match view.screen {
                ScreenView::Dashboard => {}
                ScreenView::Loading => {
                    self.notice("Startups are still loading; try again shortly.".to_string());
                    return;
                }
                ScreenView::Error { .. } => {
                    self.notice("Nothing to act on; restart to try again.".to_string());
                    return;
                }
            }
        }
        match command {
            Command::Search(term) => self.dispatch(Msg::SearchChanged(term)),
            Command::Category(name) => {
                let name = resolve_category(&view, &name);
                self.dispatch(Msg::CategorySelected(name));
            }
            Command::ToggleFavoritesOnly => self.dispatch(Msg::FavoritesOnlyToggled),
            Command::ToggleFavorite(number) => match view.cards.get(number - 1) {
                Some(card) => self.dispatch(Msg::FavoriteToggled(card.entry.clone())),
                None => self.notice(format!("No card #{number} in the current view.")),
            },
            Command::Export => self.dispatch(Msg::ExportClicked),
            Command::Help => {
                for line in HELP_TEXT {
                    self.notices.push((*line).to_string());
                }
                self.force_render = true;
            }
            Command::Unknown(line) => {
                self.notice(format!("Unknown command {line:?}; type help."));
            }
            Command::Quit => {}
        }
    }

    fn notice(&mut self, text: String) {
        self.notices.push(text);
        self.force_render = true;
    }

    /// Prints the dashboard if the state changed or there is something to tell.
    fn flush(&mut self, out: &mut impl Write) -> io::Result<()> {
        let dirty = self.state.consume_dirty();
        let forced = std::mem::take(&mut self.force_render);
        if !dirty && !forced {
            return Ok(());
        }
        let view = self.state.view();
        for line in render::render(&view, self.fetched_at.as_deref(), &self.notices) {
            writeln!(out, "{line}")?;
        }
        self.notices.clear();
        write!(out, "> ")?;
        out.flush()
    }
}

/// Matches a typed category against the chips, ignoring case. Unknown names pass through.
fn resolve_category(view: &AppViewModel, typed: &str) -> String {
    view.categories
        .iter()
        .find(|chip| chip.name.eq_ignore_ascii_case(typed))
        .map(|chip| chip.name.clone())
        .unwrap_or_else(|| typed.to_string())
}
