use core::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Фаза сессии.
///
/// Цикл после старта: `PlayersChoose → JudgeChoose → ShowWinner →
/// PlayersChoose → ...`. Терминальной фазы нет: сессия живёт, пока её
/// не выбросил владеющий процесс.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Сессия создана, но не запущена.
    Entry,
    /// Не-судьи выбирают карту-ответ (таймер `game_time_secs`).
    PlayersChoose,
    /// Судья выбирает победителя из сданных карт (таймер `judge_time_secs`).
    JudgeChoose,
    /// Показ результата раунда; ждём внешний сигнал `Continue`.
    ShowWinner,
}

/// Событие, двигающее машину фаз.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PhaseEvent {
    /// Внешний запуск сессии.
    Start,
    /// Фаза завершилась досрочно (все выбрали / судья решил).
    Finish,
    /// Таймер фазы истёк.
    Timeout,
    /// Внешний сигнал "следующий раунд" из ShowWinner.
    Continue,
}

/// Таблица переходов. Чистая функция: никаких хуков, только граф.
/// Недопустимая пара (фаза, событие) — это ошибка программирования
/// вызывающего кода, она никогда не глотается молча.
pub fn next_phase(from: GamePhase, event: PhaseEvent) -> Result<GamePhase, EngineError> {
    use GamePhase::*;
    use PhaseEvent::*;

    match (from, event) {
        (Entry, Start) => Ok(PlayersChoose),
        (PlayersChoose, Finish) | (PlayersChoose, Timeout) => Ok(JudgeChoose),
        (JudgeChoose, Finish) | (JudgeChoose, Timeout) => Ok(ShowWinner),
        (ShowWinner, Continue) => Ok(PlayersChoose),
        _ => Err(EngineError::InvalidTransition { from, event }),
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GamePhase::Entry => "Entry",
            GamePhase::PlayersChoose => "PlayersChoose",
            GamePhase::JudgeChoose => "JudgeChoose",
            GamePhase::ShowWinner => "ShowWinner",
        };
        write!(f, "{s}")
    }
}
