//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Forward to the engine.
    Action(GameAction),
    /// Switch to the next colour theme (view only).
    CycleTheme,
}

/// Map a keyboard event to an input event.
///
/// Presses and repeats map through the key table. Releases only matter for the
/// soft-drop key, on terminals that report them.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return match key.code {
            KeyCode::Down => Some(InputEvent::Action(GameAction::SoftDropRelease)),
            _ => None,
        };
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Action(GameAction::Quit));
    }

    let action = match key.code {
        // Movement
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::SoftDrop,

        // Rotation
        KeyCode::Up | KeyCode::Char('z') | KeyCode::Char('Z') => GameAction::RotateCw,
        KeyCode::Char('x') | KeyCode::Char('X') => GameAction::RotateCcw,

        // Actions
        KeyCode::Char(' ') => GameAction::HardDrop,
        KeyCode::Char('p') | KeyCode::Char('P') => GameAction::Pause,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameAction::Quit,

        KeyCode::Char('t') | KeyCode::Char('T') => return Some(InputEvent::CycleTheme),
        _ => return None,
    };
    Some(InputEvent::Action(action))
}
