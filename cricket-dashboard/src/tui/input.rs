// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into `UserCommand`s for the app
// orchestrator, or into local `ViewState` edits (typing into the search box
// or the prediction form, moving the selection).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{ResultsPanel, ViewState};
use crate::protocol::{Section, UserCommand};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should reach the app
/// orchestrator, `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // On Windows, crossterm emits both Press and Release for each keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    // Section navigation works everywhere
    let current = view_state.active_section.unwrap_or(Section::Home);
    match key_event.code {
        KeyCode::Tab => return Some(show(current.next())),
        KeyCode::BackTab => return Some(show(current.prev())),
        KeyCode::F(1) => return Some(show(Section::Home)),
        KeyCode::F(2) => return Some(show(Section::Players)),
        KeyCode::F(3) => return Some(show(Section::Predict)),
        KeyCode::Esc => {
            view_state.confirm_quit = true;
            return None;
        }
        _ => {}
    }

    match view_state.active_section {
        Some(Section::Home) => handle_home(key_event),
        Some(Section::Players) => handle_players(key_event, view_state),
        Some(Section::Predict) => handle_predict(key_event, view_state),
        None => None,
    }
}

fn show(section: Section) -> UserCommand {
    UserCommand::ShowSection(section.id().to_string())
}

/// A printable character without Ctrl/Alt held.
fn typed_char(key_event: &KeyEvent) -> Option<char> {
    match key_event.code {
        KeyCode::Char(c)
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// Handle key events while in quit confirmation mode.
///
/// - `y` or `q` confirms quit
/// - `n` or `Esc` cancels
/// - All other keys are blocked
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

fn handle_home(key_event: KeyEvent) -> Option<UserCommand> {
    match typed_char(&key_event) {
        Some('r') => Some(UserCommand::CheckHealth),
        _ => None,
    }
}

/// Players section: every edit of the search box triggers a search (the
/// controller decides whether the query is long enough). Up/Down move the
/// selection, Enter loads the selected player.
fn handle_players(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    if let Some(c) = typed_char(&key_event) {
        view_state.search_input.push(c);
        return Some(UserCommand::Search(view_state.search_input.clone()));
    }

    match key_event.code {
        KeyCode::Backspace => {
            view_state.search_input.pop()?;
            Some(UserCommand::Search(view_state.search_input.clone()))
        }
        KeyCode::Up => {
            view_state.selected_result = view_state.selected_result.saturating_sub(1);
            None
        }
        KeyCode::Down => {
            if let ResultsPanel::Players(players) = &view_state.results {
                if view_state.selected_result + 1 < players.len() {
                    view_state.selected_result += 1;
                }
            }
            None
        }
        KeyCode::Enter => view_state
            .selected_player()
            .map(|p| UserCommand::LoadPlayer {
                id: p.id,
                name: p.name.clone(),
            }),
        _ => None,
    }
}

/// Predict section: Up/Down move between fields, typing edits the focused
/// field, Enter submits the whole form.
fn handle_predict(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let focus = view_state.form_focus;

    if let Some(c) = typed_char(&key_event) {
        focus.value_mut(&mut view_state.form).push(c);
        return None;
    }

    match key_event.code {
        KeyCode::Backspace => {
            focus.value_mut(&mut view_state.form).pop();
            None
        }
        KeyCode::Up => {
            view_state.form_focus = focus.prev();
            None
        }
        KeyCode::Down => {
            view_state.form_focus = focus.next();
            None
        }
        KeyCode::Enter => Some(UserCommand::Predict(view_state.form.clone())),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
