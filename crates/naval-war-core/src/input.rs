//! Player input accepted by the engine.
//!
//! Hosts either forward discrete [`Command`]s as keys are pressed or build
//! an [`Intents`] set from the keys held this frame and hand it to
//! [`crate::Engine::step`].

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A single player action.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move the ship one step left.
    MoveLeft,
    /// Move the ship one step right.
    MoveRight,
    /// Drop a depth charge if the drop cooldown allows.
    DropBomb,
    /// Launch a homing missile if the launch cooldown allows.
    LaunchMissile,
}

bitflags! {
    /// Actions held during one frame.
    ///
    /// Applied in declaration order: movement, then bomb, then missile.
    ///
    /// # Example
    ///
    /// ```
    /// use naval_war_core::{Command, Intents};
    ///
    /// let held = Intents::MOVE_LEFT | Intents::DROP_BOMB;
    /// let commands: Vec<Command> = held.commands().collect();
    /// assert_eq!(commands, vec![Command::MoveLeft, Command::DropBomb]);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Intents: u8 {
        /// Left arrow held.
        const MOVE_LEFT = 1 << 0;
        /// Right arrow held.
        const MOVE_RIGHT = 1 << 1;
        /// Drop key pressed.
        const DROP_BOMB = 1 << 2;
        /// Missile key pressed.
        const LAUNCH_MISSILE = 1 << 3;
    }
}

impl Intents {
    /// The commands this set stands for, in application order.
    pub fn commands(self) -> impl Iterator<Item = Command> {
        [
            (Self::MOVE_LEFT, Command::MoveLeft),
            (Self::MOVE_RIGHT, Command::MoveRight),
            (Self::DROP_BOMB, Command::DropBomb),
            (Self::LAUNCH_MISSILE, Command::LaunchMissile),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, command)| command)
    }
}

impl From<Command> for Intents {
    fn from(command: Command) -> Self {
        match command {
            Command::MoveLeft => Self::MOVE_LEFT,
            Command::MoveRight => Self::MOVE_RIGHT,
            Command::DropBomb => Self::DROP_BOMB,
            Command::LaunchMissile => Self::LAUNCH_MISSILE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_commands() {
        assert_eq!(Intents::empty().commands().count(), 0);
    }

    #[test]
    fn commands_follow_application_order() {
        let all: Vec<Command> = Intents::all().commands().collect();
        assert_eq!(
            all,
            vec![
                Command::MoveLeft,
                Command::MoveRight,
                Command::DropBomb,
                Command::LaunchMissile
            ]
        );
    }

    #[test]
    fn command_converts_to_its_flag() {
        let held: Intents = Command::LaunchMissile.into();
        assert_eq!(held, Intents::LAUNCH_MISSILE);
        assert_eq!(Intents::from(Command::MoveRight).bits(), 0b10);
    }
}
