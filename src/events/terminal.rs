use crate::state::{ListsPanel, State, View};
use crate::store::StoreError;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(err) => error!("Failed to read terminal event: {}", err),
                },
                Ok(false) => (),
                Err(err) => error!("Failed to poll terminal events: {}", err),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match handle_key(state, event) {
                Ok(keep_running) => return Ok(keep_running),
                // Already logged by the store; the app keeps running.
                Err(err) => debug!("Key event '{:?}' left state unchanged: {}", event, err),
            },
            Event::Tick => {
                state.tick();
            }
        }
        Ok(true)
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
/// The list modal takes keys first, then whichever text input is active,
/// then the bindings of the current view.
///
pub fn handle_key(state: &mut State, event: KeyEvent) -> Result<bool, StoreError> {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = event
    {
        debug!("Processing exit terminal event '{:?}'...", event);
        return Ok(false);
    }

    if state.list_modal().visible {
        handle_modal_key(state, event)?;
        return Ok(true);
    }
    if state.is_text_input_active() {
        handle_input_key(state, event)?;
        return Ok(true);
    }
    handle_view_key(state, event)
}

fn handle_modal_key(state: &mut State, event: KeyEvent) -> Result<(), StoreError> {
    match event {
        KeyEvent { code: KeyCode::Esc, .. } => state.hide_modal()?,
        KeyEvent { code: KeyCode::Enter, .. } => state.submit_modal()?,
        _ if state.modal_needs_new_list() => {
            state.modal_form_mut().new_list_name.input(event);
        }
        KeyEvent {
            code: KeyCode::Tab | KeyCode::Down | KeyCode::Char('j'),
            ..
        } => {
            state.cycle_modal_target(true);
        }
        KeyEvent {
            code: KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k'),
            ..
        } => {
            state.cycle_modal_target(false);
        }
        _ => debug!("Skipping processing of modal event '{:?}'...", event),
    }
    Ok(())
}

fn handle_input_key(state: &mut State, event: KeyEvent) -> Result<(), StoreError> {
    match state.current_view().clone() {
        View::Search => match event.code {
            KeyCode::Enter => {
                debug!("Processing search submit event '{:?}'...", event);
                state.submit_search();
            }
            KeyCode::Esc | KeyCode::Down => {
                state.focus_results();
            }
            _ => {
                state.search_input_mut().input(event);
            }
        },
        View::Lists => match event.code {
            KeyCode::Enter => {
                state.submit_list_form();
            }
            KeyCode::Esc => state.go_back()?,
            _ => {
                if let Some(form) = state.list_form_mut() {
                    form.name.input(event);
                    form.error = None;
                }
            }
        },
        View::SignIn | View::Register | View::Account => match event {
            KeyEvent { code: KeyCode::Enter, .. } => {
                state.submit_auth_form();
            }
            KeyEvent { code: KeyCode::Esc, .. } => state.go_back()?,
            KeyEvent {
                code: KeyCode::Tab | KeyCode::Down,
                ..
            } => {
                if let Some(form) = state.auth_form_mut() {
                    form.next_field();
                }
            }
            KeyEvent {
                code: KeyCode::BackTab | KeyCode::Up,
                ..
            } => {
                if let Some(form) = state.auth_form_mut() {
                    form.previous_field();
                }
            }
            KeyEvent {
                code: KeyCode::Char('n'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => match state.current_view() {
                View::SignIn => {
                    state.open_register();
                }
                View::Register => {
                    state.open_sign_in();
                }
                _ => (),
            },
            KeyEvent {
                code: KeyCode::Char('d'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => {
                debug!("Processing delete account event '{:?}'...", event);
                state.delete_account();
            }
            KeyEvent {
                code: KeyCode::Char('o'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => {
                debug!("Processing sign out event '{:?}'...", event);
                state.sign_out();
            }
            _ => {
                if let Some(form) = state.auth_form_mut() {
                    form.handle_key(event);
                    form.confirm_delete = false;
                }
            }
        },
        View::Detail(_) => (),
    }
    Ok(())
}

fn handle_view_key(state: &mut State, event: KeyEvent) -> Result<bool, StoreError> {
    match event.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return Ok(false);
        }
        KeyCode::Esc => state.go_back()?,
        KeyCode::Char('`') => {
            state.toggle_log();
        }
        KeyCode::Char('1') => {
            state.open_search();
        }
        KeyCode::Char('2') => {
            state.open_lists();
        }
        KeyCode::Char('3') => {
            if state.is_authenticated() {
                state.open_account();
            } else {
                state.open_sign_in();
            }
        }
        KeyCode::Char('/') => {
            state.open_search().focus_search_input();
        }
        KeyCode::Char('x') if state.notification().is_some() => {
            state.dismiss_notification();
        }
        _ => match state.current_view().clone() {
            View::Search => handle_search_key(state, event)?,
            View::Detail(_) => handle_detail_key(state, event)?,
            View::Lists => handle_lists_key(state, event)?,
            View::SignIn | View::Register | View::Account => {
                // Forms closed by the viewer reopen on any key.
                match state.current_view() {
                    View::SignIn => state.open_sign_in(),
                    View::Register => state.open_register(),
                    _ => state.open_account(),
                };
            }
        },
    }
    Ok(true)
}

fn handle_search_key(state: &mut State, event: KeyEvent) -> Result<(), StoreError> {
    match event.code {
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_result();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_result();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            state.next_page();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            state.previous_page();
        }
        KeyCode::Tab => {
            state.next_tab();
        }
        KeyCode::BackTab => {
            state.previous_tab();
        }
        KeyCode::Enter => {
            state.open_selected_result();
        }
        KeyCode::Char('a') => state.add_selected_result_to_list()?,
        KeyCode::Char('i') => {
            state.focus_search_input();
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
    Ok(())
}

fn handle_detail_key(state: &mut State, event: KeyEvent) -> Result<(), StoreError> {
    match event.code {
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_credit();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_credit();
        }
        KeyCode::Enter => {
            state.open_selected_credit();
        }
        KeyCode::Char('a') => state.add_detail_to_list()?,
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
    Ok(())
}

fn handle_lists_key(state: &mut State, event: KeyEvent) -> Result<(), StoreError> {
    let panel = state.lists_panel();
    match event.code {
        KeyCode::Char('j') | KeyCode::Down => state.next_lists_entry()?,
        KeyCode::Char('k') | KeyCode::Up => state.previous_lists_entry()?,
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Char('h') | KeyCode::Left | KeyCode::Right => {
            state.toggle_lists_panel();
        }
        KeyCode::Enter => match panel {
            ListsPanel::Lists => {
                state.toggle_lists_panel();
            }
            ListsPanel::Items => {
                state.open_highlighted_item();
            }
        },
        KeyCode::Char('n') => {
            state.start_create_list();
        }
        KeyCode::Char('e') if panel == ListsPanel::Lists => {
            state.start_rename_list();
        }
        KeyCode::Char('d') => match panel {
            ListsPanel::Lists => {
                state.delete_highlighted_list();
            }
            ListsPanel::Items => state.remove_highlighted_item()?,
        },
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AuthUser, AuthenticatedUser};
    use crate::app::NetworkEventSender;
    use crate::events::network::Event as NetworkEvent;
    use crate::state::{DetailTarget, Focus};
    use crate::store::{AuthStore, ListModalStore, ListStore};
    use crate::ui::Theme;
    use fake::{Fake, Faker};
    use std::sync::mpsc::{channel, Receiver};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx): (NetworkEventSender, _) = channel();
        let state = State::new(
            tx,
            Theme::default(),
            AuthStore::default(),
            ListStore::default(),
            ListModalStore::default(),
        );
        (state, rx)
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            handle_key(state, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_exit_keys() {
        let (mut state, _rx) = state();
        assert!(!handle_key(&mut state, ctrl('c')).unwrap());
        assert!(!handle_key(&mut state, key(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_q_is_text_while_typing() {
        let (mut state, _rx) = state();
        handle_key(&mut state, key(KeyCode::Char('/'))).unwrap();
        assert_eq!(state.current_focus(), Focus::SearchInput);
        assert!(handle_key(&mut state, key(KeyCode::Char('q'))).unwrap());
        assert_eq!(state.search_input().lines()[0], "q");
    }

    #[test]
    fn test_search_submit() {
        let (mut state, rx) = state();
        handle_key(&mut state, key(KeyCode::Char('/'))).unwrap();
        type_text(&mut state, "heat");
        handle_key(&mut state, key(KeyCode::Enter)).unwrap();

        assert_eq!(state.current_focus(), Focus::Results);
        assert_eq!(state.search_view().query, "heat");
        assert!(matches!(
            rx.try_iter().last(),
            Some(NetworkEvent::Search { .. })
        ));
    }

    #[test]
    fn test_escape_leaves_detail() {
        let (mut state, _rx) = state();
        state.open_detail(DetailTarget::Movie(949));
        handle_key(&mut state, key(KeyCode::Esc)).unwrap();
        assert_eq!(state.current_view(), &View::Search);
    }

    #[test]
    fn test_sign_in_form_takes_text() {
        let (mut state, _rx) = state();
        state
            .complete_identity(Ok(AuthUser::Unauthenticated))
            .unwrap();
        handle_key(&mut state, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(state.current_view(), &View::SignIn);

        type_text(&mut state, "ada@example.com");
        handle_key(&mut state, key(KeyCode::Tab)).unwrap();
        type_text(&mut state, "secret");
        let form = state.auth_form().unwrap();
        assert_eq!(form.value(crate::state::FormField::Email), "ada@example.com");
        assert_eq!(form.value(crate::state::FormField::Password), "secret");

        handle_key(&mut state, ctrl('n')).unwrap();
        assert_eq!(state.current_view(), &View::Register);
    }

    #[test]
    fn test_x_dismisses_notification() {
        let (mut state, _rx) = state();
        state.notify(crate::state::Notification::success("List added"));
        assert!(state.notification().is_some());
        handle_key(&mut state, key(KeyCode::Char('x'))).unwrap();
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_lists_key_opens_lists_and_loads_them() {
        let (mut state, rx) = state();
        let user: AuthenticatedUser = Faker.fake();
        state
            .complete_identity(Ok(AuthUser::Authenticated(user)))
            .unwrap();
        while rx.try_recv().is_ok() {}

        assert!(handle_key(&mut state, key(KeyCode::Char('2'))).unwrap());
        assert_eq!(state.current_view(), &View::Lists);
        assert!(rx
            .try_iter()
            .any(|event| matches!(event, NetworkEvent::LoadLists { .. })));
    }
}
