use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use hub_core::{update, AppState, AppViewModel, Effect, Msg};
use hub_engine::ReqwestSearchBackend;
use hub_logging::{hub_info, hub_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{self, Command};
use super::logging;
use super::ui;

/// Everything the UI loop reacts to, in arrival order.
pub enum AppEvent {
    /// A line typed by the user.
    Input(String),
    /// A message produced off-thread, e.g. a search completion.
    Engine(Msg),
    /// Stdin reached end of file.
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading configuration")?;
    logging::initialize(config.log_destination, &config.log_path);
    hub_info!("Starting finance hub with {:?}", config.search);
    if config.keys.youtube.is_none() {
        hub_warn!("YOUTUBE_API_KEY is not set; video search will report a configuration error");
    }
    if config.keys.news.is_none() {
        hub_warn!("NEWS_API_KEY is not set; news search will report a configuration error");
    }

    let backend = ReqwestSearchBackend::new(config.search.clone(), config.keys.clone())
        .context("building HTTP client")?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner =
        EffectRunner::new(Arc::new(backend), event_tx.clone()).context("starting engine")?;

    spawn_stdin_reader(event_tx)?;

    let mut app = App::new(runner);
    println!("{}", input::USAGE);
    app.dispatch(Msg::Mounted);

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Engine(msg) => app.dispatch(msg),
            AppEvent::Input(line) => {
                if !app.handle_line(&line) {
                    break;
                }
            }
            AppEvent::InputClosed => break,
        }
    }

    app.dispatch(Msg::Unmounted);
    hub_info!("Finance hub stopped");
    Ok(())
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if event_tx.send(AppEvent::Input(line)).is_err() {
                    return;
                }
            }
            let _ = event_tx.send(AppEvent::InputClosed);
        })?;
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    /// Returns false when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        match input::parse_command(line) {
            Command::Messages(msgs) => self.dispatch_all(msgs),
            Command::Open { section, index } => {
                match input::resolve_open(&self.state.view(), section, index) {
                    Ok(msg) => self.dispatch(msg),
                    Err(hint) => println!("{hint}"),
                }
            }
            Command::Help => println!("{}", input::USAGE),
            Command::Invalid(hint) => println!("{hint}"),
            Command::Quit => return false,
        }
        true
    }

    fn dispatch(&mut self, msg: Msg) {
        self.dispatch_all(vec![msg]);
    }

    /// Applies every message in order, then renders at most once.
    fn dispatch_all(&mut self, msgs: Vec<Msg>) {
        let (state, effects, view) = apply_batch(std::mem::take(&mut self.state), msgs);
        self.state = state;

        self.runner.run(effects);
        if let Some(view) = view {
            print!("{}", ui::render::render(&view));
            let _ = io::stdout().flush();
        }
    }
}

/// Folds a batch of messages through `update`; yields a view only if something changed.
fn apply_batch(
    mut state: AppState,
    msgs: Vec<Msg>,
) -> (AppState, Vec<Effect>, Option<AppViewModel>) {
    let mut effects = Vec::new();
    for msg in msgs {
        let (next, produced) = update(state, msg);
        state = next;
        effects.extend(produced);
    }
    let view = state.consume_dirty().then(|| state.view());
    (state, effects, view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_command_renders_once_with_final_state() {
        let msgs = match input::parse_command("v ETF") {
            Command::Messages(msgs) => msgs,
            other => panic!("unexpected command: {other:?}"),
        };
        assert_eq!(msgs.len(), 2);

        let (mut state, effects, view) = apply_batch(AppState::new(), msgs);

        assert_eq!(
            effects,
            vec![Effect::SearchVideos {
                token: 1,
                query: "ETF".to_string(),
            }]
        );
        let view = view.expect("one render");
        assert_eq!(view.video.text, "ETF");
        assert!(view.video.loading);
        assert!(!state.consume_dirty());
    }

    #[test]
    fn unchanged_batch_does_not_render() {
        let (_state, effects, view) = apply_batch(AppState::new(), vec![Msg::Tick, Msg::NoOp]);

        assert!(effects.is_empty());
        assert!(view.is_none());
    }
}
