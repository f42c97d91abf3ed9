use crate::api::Api;
use crate::config::Config;
use crate::error::AppError;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogBuffer};
use crate::state::State;
use crate::store::{AuthStore, ListModalStore, ListStore};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    log_buffer: LogBuffer,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let log_buffer = LogBuffer::default();
        let logger = CustomLogger::new();
        let sink = log_buffer.clone();
        logger.set_log_callback(Box::new(move |entry| sink.push(entry)));
        logger
            .init(LevelFilter::Debug)
            .map_err(|e| AppError::Logger(e.to_string()))?;

        info!("Starting application...");
        let theme = config.theme().map_err(AppError::from)?;
        let api = Api::new(&config.api_url).map_err(AppError::from)?;
        info!("Using API at {}.", config.api_url);

        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(
                tx,
                theme,
                AuthStore::default(),
                ListStore::default(),
                ListModalStore::default(),
            ))),
            log_buffer,
        };
        app.start_network(rx, api)?;
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations. Every event
    /// runs on its own task so responses can arrive in any order.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver, api: Api) -> Result<()> {
        debug!("Creating new thread for asynchronous networking...");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(AppError::from)?;
        let handler = NetworkEventHandler::new(Arc::clone(&self.state), Arc::new(api));
        std::thread::spawn(move || {
            while let Ok(network_event) = net_receiver.recv() {
                let handler = handler.clone();
                runtime.spawn(async move {
                    if let Err(e) = handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                });
            }
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored whether the
    /// loop ends with an exit request or an error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            state.check_identity().map_err(AppError::from)?;
            state.refresh_search();
        }

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            for entry in self.log_buffer.drain() {
                state.add_log_entry(entry);
            }
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            };
            terminal.draw(|frame| crate::ui::render(frame, &state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
