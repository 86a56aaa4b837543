//! Serializable per-frame snapshot for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

use super::animation::DisplayPosition;
use super::notification::Notification;
use super::session::{GameSession, PhaseKind};

/// One player as the presentation should draw it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub player: Player,
    pub display: DisplayPosition,
}

/// Everything the presentation polls each frame, in one value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub players: Vec<PlayerView>,
    pub current_player: PlayerId,
    pub phase: PhaseKind,
    pub dice_value: u8,
    pub dice_rolling: bool,
    pub notification: Option<Notification>,
    pub winner: Option<PlayerId>,
    pub turn_number: u32,
}

impl GameView {
    /// Capture the current state of `session`.
    #[must_use]
    pub fn capture(session: &GameSession) -> Self {
        let players = session
            .players()
            .map(|player| PlayerView {
                display: session
                    .display_position(player.id)
                    .unwrap_or_else(|| DisplayPosition::at(player.position)),
                player,
            })
            .collect();

        Self {
            players,
            current_player: session.current_player(),
            phase: session.phase().kind(),
            dice_value: session.dice_display_value(),
            dice_rolling: session.is_dice_rolling(),
            notification: session.active_notification().cloned(),
            winner: session.winner(),
            turn_number: session.turn_number(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, PlayerToken, Square};

    #[test]
    fn test_capture_fresh_session() {
        let session = GameSession::standard(2, EngineConfig::default()).unwrap();
        let view = GameView::capture(&session);

        assert_eq!(view.players.len(), 2);
        assert_eq!(view.players[1].player.token, PlayerToken::Green);
        assert_eq!(view.players[0].display, DisplayPosition::at(Square::FIRST));
        assert_eq!(view.phase, PhaseKind::AwaitingRoll);
        assert_eq!(view.winner, None);
        assert!(view.notification.is_none());
    }

    #[test]
    fn test_capture_mid_move() {
        let mut session = GameSession::standard(2, EngineConfig::default()).unwrap();
        session.request_move(4);
        session.tick();

        let view = GameView::capture(&session);
        assert_eq!(view.phase, PhaseKind::Animating);
        assert_eq!(view.players[0].player.position, Square::FIRST);
        assert!(view.players[0].display.progress > 0.0);
    }

    #[test]
    fn test_view_serializes() {
        let mut session = GameSession::standard(3, EngineConfig::default()).unwrap();
        session.request_roll();
        session.tick();

        let view = GameView::capture(&session);
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: GameView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
