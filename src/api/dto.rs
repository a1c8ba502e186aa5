use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::{PromptCard, ResponseCard};
use crate::domain::PlayerId;
use crate::engine::phase::GamePhase;

/// Публичная часть состояния игрока: без руки и без самого выбора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicDto {
    pub wins: u32,
    /// Сдал ли игрок карту в этом раунде (у судьи всегда false).
    pub done: bool,
}

/// Публичная вьюха раунда — то, что безопасно броадкастить всем.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub phase: GamePhase,
    pub round_no: u32,
    pub prompt: Option<PromptCard>,
    /// Имя судьи (None до первого раунда).
    pub judge: Option<String>,
    /// Имя победителя раунда (None, пока судья не решил / после таймаута).
    pub winner: Option<String>,
    /// Игроки по именам. BTreeMap — чтобы сериализация была стабильной.
    pub players: BTreeMap<String, PlayerPublicDto>,
    /// Unix-время (мс) истечения таймера текущей фазы, для отображения.
    pub timer_expires_ms: Option<u64>,
}

/// Приватный payload одного игрока — уходит только в его соединение.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPrivateDto {
    pub player_id: PlayerId,
    pub name: String,
    /// Полная рука игрока.
    pub hand: Vec<ResponseCard>,
    /// Только для судьи в фазе JudgeChoose: анонимизированный список
    /// сданных карт (в порядке списка игроков, без имён).
    pub choices: Option<Vec<ResponseCard>>,
}
