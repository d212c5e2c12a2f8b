use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Player intent decoded from a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move { rows: isize, cols: isize },
    Reveal,
    Flag,
    Quit,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    use Command::*;

    if key.kind == KeyEventKind::Release {
        return None;
    }

    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Quit,
        KeyCode::Char('q') | KeyCode::Esc => Quit,
        KeyCode::Char('h') | KeyCode::Left => Move { rows: 0, cols: -1 },
        KeyCode::Char('j') | KeyCode::Down => Move { rows: 1, cols: 0 },
        KeyCode::Char('k') | KeyCode::Up => Move { rows: -1, cols: 0 },
        KeyCode::Char('l') | KeyCode::Right => Move { rows: 0, cols: 1 },
        KeyCode::Char('f') => Flag,
        KeyCode::Char('d') | KeyCode::Char(' ') | KeyCode::Enter => Reveal,
        _ => return None,
    };
    Some(command)
}
