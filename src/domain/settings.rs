use serde::{Deserialize, Serialize};

/// Настройки сессии. Неизменяемы после создания `GameSession`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    /// До скольких карт добирается рука каждого игрока между раундами.
    pub hand_size: usize,
    /// Длительность фазы `PlayersChoose`, секунды.
    pub game_time_secs: u32,
    /// Длительность фазы `JudgeChoose`, секунды.
    pub judge_time_secs: u32,
    /// Сколько побед нужно для выигрыша сессии.
    /// Движок это условие НЕ проверяет — значение протаскивается для
    /// внешнего слоя, который решает, когда закончить сессию.
    pub winning_points: u32,
}

impl GameSettings {
    /// Строгий конструктор.
    pub const fn new(
        hand_size: usize,
        game_time_secs: u32,
        judge_time_secs: u32,
        winning_points: u32,
    ) -> Self {
        Self {
            hand_size,
            game_time_secs,
            judge_time_secs,
            winning_points,
        }
    }

    /// Стандартный профиль: рука 7 карт, 60 сек на выбор, 30 сек судье,
    /// 10 очков на победу.
    pub const fn standard() -> Self {
        Self {
            hand_size: 7,
            game_time_secs: 60,
            judge_time_secs: 30,
            winning_points: 10,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::standard()
    }
}
