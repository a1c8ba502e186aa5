use serde::{Deserialize, Serialize};

use crate::domain::card::ResponseCard;
use crate::domain::PlayerId;

/// Базовый профиль игрока — то, что приходит извне при создании сессии.
/// Регистрация/аутентификация игроков — забота транспортного слоя.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerProfile {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Состояние игрока внутри сессии.
///
/// Живёт всю сессию: рука и счёт побед накапливаются, а `choice` и
/// `is_judge` — раундовые поля, которые engine сбрасывает при setup
/// следующего раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Рука: engine добирает её до `hand_size` на входе в каждый раунд.
    pub hand: Vec<ResponseCard>,
    /// Накопленные победы в раундах.
    pub wins: u32,
    /// Выбор в текущем раунде (у судьи всегда None).
    pub choice: Option<ResponseCard>,
    /// Судья ли игрок в текущем раунде.
    pub is_judge: bool,
}

impl Player {
    /// Игрок на старте сессии: пустая рука, ноль побед.
    pub fn from_profile(profile: PlayerProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            hand: Vec::new(),
            wins: 0,
            choice: None,
            is_judge: false,
        }
    }

    pub fn has_card(&self, card: &ResponseCard) -> bool {
        self.hand.contains(card)
    }

    /// Убрать карту из руки. `true`, если карта там была.
    pub fn remove_card(&mut self, card: &ResponseCard) -> bool {
        match self.hand.iter().position(|c| c == card) {
            Some(idx) => {
                self.hand.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Сброс раундовых полей (выбор и флаг судьи выставляет engine заново).
    pub fn reset_for_round(&mut self) {
        self.choice = None;
        self.is_judge = false;
    }
}
