use thiserror::Error;

use crate::domain::PlayerId;
use crate::engine::phase::{GamePhase, PhaseEvent};

/// Ошибки движка сессии.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Сессия уже запущена")]
    AlreadyStarted,

    #[error("Недостаточно игроков для сессии: нужно минимум 2, есть {0}")]
    NotEnoughPlayers(usize),

    #[error("Игрок с id={0} встречается в составе дважды")]
    DuplicatePlayer(PlayerId),

    #[error("Игрок {0} не участвует в этой сессии")]
    PlayerNotInGame(PlayerId),

    #[error("В колоде осталось {remaining} карт, запрошено {requested}")]
    DeckExhausted { requested: usize, remaining: usize },

    #[error("Операция недоступна в фазе {actual:?} (нужна {expected:?})")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("Недопустимый переход: событие {event:?} в фазе {from:?}")]
    InvalidTransition { from: GamePhase, event: PhaseEvent },

    #[error("Судья (id={0}) не сдаёт карту в этом раунде")]
    JudgeCannotChoose(PlayerId),

    #[error("Игрок {0} уже сделал выбор в этом раунде")]
    ChoiceAlreadyMade(PlayerId),

    #[error("Такой карты нет в руке игрока {0}")]
    CardNotInHand(PlayerId),

    #[error("Карта не совпадает ни с одним сданным выбором")]
    NoMatchingChoice,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
