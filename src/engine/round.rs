use serde::{Deserialize, Serialize};

use crate::domain::card::PromptCard;
use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Раундовый контекст: судья, тема, победитель.
///
/// В исходной версии это были переменные, захваченные замыканиями хуков;
/// здесь — явные поля, которые читает и сбрасывает `GameSession`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundContext {
    /// Номер раунда, 1-based. 0 — сессия ещё не запущена.
    pub round_no: u32,
    /// Судья текущего раунда. None только до первого раунда.
    pub judge: Option<PlayerId>,
    /// Тема текущего раунда (держим до setup следующего).
    pub prompt: Option<PromptCard>,
    /// Победитель раунда. Выставляется максимум один раз за раунд,
    /// сбрасывается на входе в следующий.
    pub winner: Option<PlayerId>,
}

impl RoundContext {
    pub fn new() -> Self {
        Self {
            round_no: 0,
            judge: None,
            prompt: None,
            winner: None,
        }
    }
}

impl Default for RoundContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Ротация судьи: следующий по кругу после текущего в порядке списка
/// игроков. Первый раунд (текущего судьи ещё нет) — судьёй становится
/// `first_judge`, ротация не применяется.
pub fn next_judge(
    players: &[Player],
    current: Option<PlayerId>,
    first_judge: PlayerId,
) -> PlayerId {
    match current {
        None => first_judge,
        Some(cur) => {
            // Судья всегда из списка; если его там вдруг нет — начинаем
            // круг заново с первого игрока.
            let last_index = players.iter().position(|p| p.id == cur).unwrap_or(0);
            let next_index = (last_index + 1) % players.len();
            players[next_index].id
        }
    }
}
