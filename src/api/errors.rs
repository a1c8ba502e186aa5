use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём транспорту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Игрок не найден в сессии.
    PlayerNotInGame(PlayerId),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка движка (фазы, выборы, колоды).
    EngineError(String),

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::EngineError(err.to_string())
    }
}
