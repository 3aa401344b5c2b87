use anyhow::Result;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use numguess::{GameSession, NumguessConfig, SeededTargets, TargetSource};

use crate::config::ReplConfig;
use crate::render;
use crate::repl::{CommandRequest, ReplCommand, ReplInterface};

/// Owns the session; the REPL talks to it over channels
pub struct GameApp<S = SeededTargets> {
    session: GameSession<S>,
    config: NumguessConfig,
    command_receiver: mpsc::UnboundedReceiver<CommandRequest>,
    status_sender: watch::Sender<numguess::SessionSnapshot>,
    repl_handle: Option<JoinHandle<Result<()>>>,
}

impl GameApp<SeededTargets> {
    pub fn new(config: NumguessConfig, repl_config: ReplConfig) -> Result<Self> {
        let targets = SeededTargets::new(config.game.seed);
        let (command_sender, command_receiver) = mpsc::unbounded_channel();
        let mut app = Self::with_session(config, targets, command_receiver);

        // Start REPL on a blocking thread
        let mut repl = ReplInterface::new(command_sender, app.status_sender.subscribe(), repl_config)?;
        app.repl_handle = Some(tokio::task::spawn_blocking(move || repl.run()));

        Ok(app)
    }
}

impl<S: TargetSource> GameApp<S> {
    fn with_session(
        config: NumguessConfig,
        targets: S,
        command_receiver: mpsc::UnboundedReceiver<CommandRequest>,
    ) -> Self {
        let mut session = GameSession::with_config(&config.game, targets);
        session.start_round(config.game.default_difficulty);
        let (status_sender, _) = watch::channel(session.snapshot(Instant::now()));

        Self {
            session,
            config,
            command_receiver,
            status_sender,
            repl_handle: None,
        }
    }

    /// Serve commands and refresh the status on every tick until the REPL goes away
    pub async fn run(&mut self) -> Result<()> {
        info!(
            difficulty = self.session.difficulty().name(),
            tick_ms = self.config.display.tick_interval_ms,
            "Game loop started"
        );

        let mut ticker = tokio::time::interval(Duration::from_millis(self.config.display.tick_interval_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                request = self.command_receiver.recv() => {
                    let Some(request) = request else { break };
                    let lines = self.handle_command(request.command);
                    let _ = request.reply.send(lines);
                    self.publish_status();
                }
                _ = ticker.tick() => self.publish_status(),
            }
        }

        if let Some(handle) = self.repl_handle.take() {
            handle.await??;
        }

        info!(best = ?self.session.best_score(), "Game loop stopped");
        Ok(())
    }

    fn publish_status(&self) {
        self.status_sender.send_replace(self.session.snapshot(Instant::now()));
    }

    pub fn handle_command(&mut self, command: ReplCommand) -> Vec<String> {
        debug!(?command, "Handling command");

        match command {
            ReplCommand::Guess(text) => match self.session.submit_guess(&text) {
                Ok(report) => render::guess(&report, self.session.range_max()),
                Err(e) => render::error(&e),
            },
            ReplCommand::Hint => match self.session.request_hint() {
                Ok(outcome) => render::hint(&outcome),
                Err(e) => render::error(&e),
            },
            ReplCommand::Reset => {
                self.session.reset();
                vec![render::instruction(self.session.range_max())]
            }
            ReplCommand::Difficulty(difficulty) => {
                self.session.change_difficulty(difficulty);
                vec![
                    format!("Difficulty set to {}", difficulty),
                    render::instruction(self.session.range_max()),
                ]
            }
            ReplCommand::Status => render::status(&self.session.snapshot(Instant::now())),
            ReplCommand::History { page } => {
                let page_size = self.config.display.history_page_size;
                let history = self.session.history();
                let page = page.unwrap_or_else(|| history.page_count(page_size));
                render::history(history, page, page_size)
            }
            ReplCommand::Best => vec![render::best(self.session.best_score())],
            ReplCommand::Help => render::help(),
            ReplCommand::Quit => Vec::new(),
        }
    }
}
