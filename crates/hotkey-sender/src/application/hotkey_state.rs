//! Hot-key activation state machine.
//!
//! Hot keys only make sense while the player is in a match and not typing
//! into chat or navigating a menu.  The host feeds game-context events into
//! [`HotKeyStateMachine`] and asks [`HotKeyStateMachine::keys_activated`]
//! before binding keys.
//!
//! The machine is pure bookkeeping.  It never submits input, and the
//! injection engine never consults it.

use hotkey_core::{HotKey, KeyAction};
use tracing::{debug, info};

/// Where the player is, as far as hot keys are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HotKeyState {
    #[default]
    NotInGame,
    InGame,
    Chat,
    Menu,
    InChatLog,
}

/// Game-context events that move the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    EnterGame,
    ExitGame,
    PressEnter,
    PressEscape,
    PressF10,
    PressF12,
}

impl GameEvent {
    /// The event an injected action produces, if any.
    ///
    /// Only momentary presses of Enter, Escape, F10 and F12 change context.
    pub fn from_action(action: KeyAction) -> Option<Self> {
        match action {
            KeyAction::Press(HotKey::Enter) => Some(Self::PressEnter),
            KeyAction::Press(HotKey::Escape) => Some(Self::PressEscape),
            KeyAction::Press(HotKey::F10) => Some(Self::PressF10),
            KeyAction::Press(HotKey::F12) => Some(Self::PressF12),
            _ => None,
        }
    }
}

impl HotKeyState {
    /// Transition table.  `EnterGame` and `ExitGame` win from every state.
    pub const fn next(self, event: GameEvent) -> Self {
        use GameEvent::*;
        use HotKeyState::*;
        match (self, event) {
            (_, EnterGame) => InGame,
            (_, ExitGame) => NotInGame,
            (NotInGame, _) => NotInGame,

            (InGame, PressEnter) => Chat,
            (InGame, PressEscape) => InGame,
            (InGame, PressF10) => Menu,
            (InGame, PressF12) => InChatLog,

            (Chat, PressEnter | PressEscape) => InGame,
            (Chat, PressF10 | PressF12) => Chat,

            (Menu, PressEscape | PressF10) => InGame,
            (Menu, PressEnter | PressF12) => Menu,

            (InChatLog, PressEnter | PressEscape | PressF12) => InGame,
            (InChatLog, PressF10) => InChatLog,
        }
    }

    pub const fn keys_activated(self) -> bool {
        matches!(self, HotKeyState::InGame)
    }
}

/// Tracks the current [`HotKeyState`].
#[derive(Debug, Default)]
pub struct HotKeyStateMachine {
    state: HotKeyState,
}

impl HotKeyStateMachine {
    /// Starts outside a game, with hot keys deactivated.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HotKeyState {
        self.state
    }

    pub fn keys_activated(&self) -> bool {
        self.state.keys_activated()
    }

    /// Applies `event` and returns the new state.
    pub fn handle(&mut self, event: GameEvent) -> HotKeyState {
        let next = self.state.next(event);
        debug!(from = ?self.state, to = ?next, ?event, "hot-key state transition");
        self.set(next);
        next
    }

    /// Manual override: deactivates if active, otherwise forces `InGame`.
    pub fn toggle(&mut self) -> HotKeyState {
        let next = if self.keys_activated() {
            HotKeyState::NotInGame
        } else {
            HotKeyState::InGame
        };
        self.set(next);
        next
    }

    fn set(&mut self, next: HotKeyState) {
        let was_active = self.keys_activated();
        self.state = next;
        if was_active != next.keys_activated() {
            info!(state = ?next, active = !was_active, "hot keys activation changed");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use hotkey_core::Modifier;
    use GameEvent::*;
    use HotKeyState::*;

    const EVENTS: [GameEvent; 6] = [
        EnterGame,
        ExitGame,
        PressEnter,
        PressEscape,
        PressF10,
        PressF12,
    ];

    /// Expected next state per row, in `EVENTS` column order.
    const TABLE: [(HotKeyState, [HotKeyState; 6]); 5] = [
        (NotInGame, [InGame, NotInGame, NotInGame, NotInGame, NotInGame, NotInGame]),
        (InGame, [InGame, NotInGame, Chat, InGame, Menu, InChatLog]),
        (Chat, [InGame, NotInGame, InGame, InGame, Chat, Chat]),
        (Menu, [InGame, NotInGame, Menu, InGame, InGame, Menu]),
        (InChatLog, [InGame, NotInGame, InGame, InGame, InChatLog, InGame]),
    ];

    #[test]
    fn test_transition_table_is_complete() {
        for (from, row) in TABLE {
            for (event, expected) in EVENTS.into_iter().zip(row) {
                assert_eq!(from.next(event), expected, "{from:?} --{event:?}-->");
            }
        }
    }

    #[test]
    fn test_new_machine_starts_deactivated() {
        let machine = HotKeyStateMachine::new();
        assert_eq!(machine.state(), NotInGame);
        assert!(!machine.keys_activated());
    }

    #[test]
    fn test_only_in_game_activates_keys() {
        for (state, _) in TABLE {
            assert_eq!(state.keys_activated(), state == InGame);
        }
    }

    #[test]
    fn test_chat_round_trip_reactivates() {
        // Arrange
        let mut machine = HotKeyStateMachine::new();
        machine.handle(EnterGame);

        // Act
        assert_eq!(machine.handle(PressEnter), Chat);
        assert!(!machine.keys_activated());
        let back = machine.handle(PressEnter);

        // Assert
        assert_eq!(back, InGame);
        assert!(machine.keys_activated());
    }

    #[test]
    fn test_toggle_flips_activation() {
        let mut machine = HotKeyStateMachine::new();
        assert_eq!(machine.toggle(), InGame);
        assert_eq!(machine.toggle(), NotInGame);

        machine.handle(EnterGame);
        machine.handle(PressF10);
        assert_eq!(machine.toggle(), InGame, "toggle from Menu forces InGame");
    }

    #[test]
    fn test_from_action_maps_context_keys_only() {
        assert_eq!(GameEvent::from_action(KeyAction::Press(HotKey::Enter)), Some(PressEnter));
        assert_eq!(GameEvent::from_action(KeyAction::Press(HotKey::Escape)), Some(PressEscape));
        assert_eq!(GameEvent::from_action(KeyAction::Press(HotKey::F10)), Some(PressF10));
        assert_eq!(GameEvent::from_action(KeyAction::Press(HotKey::F12)), Some(PressF12));
        assert_eq!(GameEvent::from_action(KeyAction::Press(HotKey::Num5)), None);
        assert_eq!(GameEvent::from_action(KeyAction::Hold(Modifier::Alt)), None);
    }
}
