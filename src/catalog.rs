//! Games offered by the platform and their display metadata.
//!
//! Only Omok has a rules engine; Chess and Janggi are listed so front ends
//! can show them, nothing more.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Game identifier, written in lowercase (`omok`, `chess`, `janggi`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Omok,
    Chess,
    Janggi,
}

/// Static display metadata for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub description: &'static str,
}

const OMOK: GameInfo = GameInfo {
    id: "omok",
    name: "Omok",
    native_name: "오목",
    description: "Place five stones in a row to win. Simple rules, deep strategy.",
};

const CHESS: GameInfo = GameInfo {
    id: "chess",
    name: "Chess",
    native_name: "체스",
    description: "Use each piece's unique movement to checkmate the opposing king.",
};

const JANGGI: GameInfo = GameInfo {
    id: "janggi",
    name: "Janggi",
    native_name: "장기",
    description: "Traditional Korean strategy game set in a palace. Capture the general to win.",
};

impl GameKind {
    pub fn info(self) -> &'static GameInfo {
        match self {
            GameKind::Omok => &OMOK,
            GameKind::Chess => &CHESS,
            GameKind::Janggi => &JANGGI,
        }
    }

    /// Whether a rules engine exists for this game
    pub fn is_playable(self) -> bool {
        matches!(self, GameKind::Omok)
    }
}

/// How a game is played.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Against the computer
    Single,
    /// Two players in a room
    Multi,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_and_display_agree() {
        for kind in GameKind::iter() {
            let text = kind.to_string();
            assert_eq!(text, kind.info().id);
            assert_eq!(GameKind::from_str(&text), Ok(kind));
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(GameKind::from_str("OMOK"), Ok(GameKind::Omok));
        assert_eq!(GameKind::from_str("Janggi"), Ok(GameKind::Janggi));
        assert!(GameKind::from_str("go").is_err());
    }

    #[test]
    fn test_only_omok_playable() {
        let playable: Vec<GameKind> = GameKind::iter().filter(|k| k.is_playable()).collect();
        assert_eq!(playable, vec![GameKind::Omok]);
    }

    #[test]
    fn test_static_str() {
        let id: &'static str = GameKind::Chess.into();
        assert_eq!(id, "chess");
        assert_eq!(GameKind::Omok.info().native_name, "오목");
    }

    #[test]
    fn test_play_mode_parse() {
        assert_eq!(PlayMode::from_str("single"), Ok(PlayMode::Single));
        assert_eq!(PlayMode::Multi.to_string(), "multi");
        assert_eq!(PlayMode::iter().count(), 2);
    }

    #[test]
    fn test_serde_ids() {
        assert_eq!(serde_json::to_string(&GameKind::Janggi).unwrap(), "\"janggi\"");
        let kind: GameKind = serde_json::from_str("\"omok\"").unwrap();
        assert_eq!(kind, GameKind::Omok);
    }
}
