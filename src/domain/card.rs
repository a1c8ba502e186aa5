use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::CardId;

/// Карта-тема ("чёрная" карта): судья зачитывает её в начале раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PromptCard {
    pub id: CardId,
    pub text: String,
}

impl PromptCard {
    pub fn new(id: CardId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}

/// Карта-ответ ("белая" карта): то, что игроки держат в руке и сдают судье.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ResponseCard {
    pub id: CardId,
    pub text: String,
}

impl ResponseCard {
    pub fn new(id: CardId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}

impl fmt::Display for PromptCard {
    /// Формат вида `#3 "Тема раунда"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} \"{}\"", self.id, self.text)
    }
}

impl fmt::Display for ResponseCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} \"{}\"", self.id, self.text)
    }
}
