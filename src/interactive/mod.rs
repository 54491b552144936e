use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::api::CatalogApi;

mod application;
pub mod constants;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod tests;

use self::application::{fetch_service::FetchService, history_service::HistoryService};
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS};
use self::domain::models::{FetchKind, FetchRequest, FetchResponse};
use self::ui::{
    app_state::{AppState, Surface},
    commands::Command,
    components::Component,
    events::Message,
    renderer::Renderer,
};

/// The interactive catalog session: one UI thread, one fetch worker, and
/// detached threads for history writes. All state lives in [`AppState`];
/// the worker only ever sees generation-tagged requests.
pub struct InteractiveCatalog {
    state: AppState,
    renderer: Renderer,
    fetch_service: Arc<FetchService>,
    history: HistoryService,
    fetch_sender: Option<Sender<FetchRequest>>,
    fetch_receiver: Option<Receiver<FetchResponse>>,
    last_ctrl_c_press: Option<std::time::Instant>,
    should_quit: bool,
}

impl InteractiveCatalog {
    pub fn new(api: Arc<dyn CatalogApi>, email: String) -> Self {
        Self {
            renderer: Renderer::new(&email),
            state: AppState::new(email),
            fetch_service: Arc::new(FetchService::new(Arc::clone(&api))),
            history: HistoryService::new(api),
            fetch_sender: None,
            fetch_receiver: None,
            last_ctrl_c_press: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        let (tx, rx) = self.start_fetch_worker();
        self.fetch_sender = Some(tx);
        self.fetch_receiver = Some(rx);

        // Populate the dashboard before the first keystroke.
        self.state.dashboard.is_loading = true;
        self.execute_command(Command::Fetch(FetchKind::Popular));

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Worker responses; stale generations are dropped inside
            // apply_fetch.
            loop {
                let Some(response) = self
                    .fetch_receiver
                    .as_ref()
                    .and_then(|receiver| receiver.try_recv().ok())
                else {
                    break;
                };
                let command = self.state.apply_fetch(response);
                self.execute_command(command);
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_input(key);
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        // Double Ctrl+C always exits, whatever is on screen.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.should_quit = true;
                    return;
                }
            }
            self.last_ctrl_c_press = Some(std::time::Instant::now());
            return;
        }

        // A pending alert swallows everything until dismissed.
        let message = if self.state.alert.is_some() {
            self.renderer.alert_dialog_mut().handle_key(key)
        } else {
            match self.state.topmost() {
                Some(Surface::Search) => self.renderer.search_modal_mut().handle_key(key),
                Some(Surface::Suggestions) => self.renderer.suggestion_list_mut().handle_key(key),
                Some(Surface::Detail) => self.renderer.book_detail_mut().handle_key(key),
                Some(Surface::Help) => self.renderer.help_dialog_mut().handle_key(key),
                None => self.renderer.dashboard_mut().handle_key(key),
            }
        };

        if let Some(message) = message {
            self.handle_message(message);
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Fetch(kind) => {
                if let Some(sender) = &self.fetch_sender {
                    let request = FetchRequest {
                        generation: self.state.generation,
                        kind,
                    };
                    let _ = sender.send(request);
                }
            }
            Command::RecordRead(book_id) => {
                // Detached; never awaited, never retried.
                let _ = self.history.record_read(&self.state.email, &book_id);
            }
            Command::RecordSearch(query) => {
                let _ = self.history.record_search(&self.state.email, &query);
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn start_fetch_worker(&self) -> (Sender<FetchRequest>, Receiver<FetchResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<FetchResponse>();
        let service = Arc::clone(&self.fetch_service);

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let response = service.execute(request);
                if response_tx.send(response).is_err() {
                    break;
                }
            }
        });

        (request_tx, response_rx)
    }
}
