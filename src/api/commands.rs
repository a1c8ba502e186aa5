use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::card::ResponseCard;
use crate::domain::PlayerId;
use crate::engine::clock::TimerEpoch;
use crate::engine::session::{GameSession, TimeoutOutcome};

/// Команда верхнего уровня: всё, чем транспортный слой двигает сессию.
///
/// `player_id` здесь уже аутентифицирован транспортом — движок проверяет
/// только членство в сессии и игровые правила.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Запустить сессию.
    Start,

    /// Игрок сдаёт карту-ответ.
    ChooseCard {
        player_id: PlayerId,
        card: ResponseCard,
    },

    /// Судья выбирает победившую карту.
    ChooseWinner { card: ResponseCard },

    /// Сигнал "следующий раунд" из ShowWinner.
    NextRound,

    /// Колбэк таймера фазы: хост проснулся по `TimerScheduled`.
    TimerFired { epoch: TimerEpoch },
}

/// Итог применения команды.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Команда применена, состояние продвинулось.
    Applied,
    /// `TimerFired` с устаревшей эпохой — законный no-op, не ошибка.
    TimerIgnored,
}

/// Применить команду к сессии. `now_ms` — wall-clock хоста (см.
/// `infra::time::now_unix_ms`), нужен для взвода таймеров фаз.
pub fn apply_command(
    session: &mut GameSession,
    command: Command,
    now_ms: u64,
) -> Result<CommandOutcome, ApiError> {
    match command {
        Command::Start => {
            session.start(now_ms)?;
            Ok(CommandOutcome::Applied)
        }
        Command::ChooseCard { player_id, card } => {
            session.choose_card(player_id, &card, now_ms)?;
            Ok(CommandOutcome::Applied)
        }
        Command::ChooseWinner { card } => {
            session.choose_winner(&card, now_ms)?;
            Ok(CommandOutcome::Applied)
        }
        Command::NextRound => {
            session.next_round(now_ms)?;
            Ok(CommandOutcome::Applied)
        }
        Command::TimerFired { epoch } => match session.handle_timeout(epoch, now_ms)? {
            TimeoutOutcome::Advanced => Ok(CommandOutcome::Applied),
            TimeoutOutcome::Stale => Ok(CommandOutcome::TimerIgnored),
        },
    }
}
