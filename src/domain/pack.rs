use serde::{Deserialize, Serialize};

use crate::domain::card::{PromptCard, ResponseCard};
use crate::domain::deck::{PromptDeck, ResponseDeck};
use crate::domain::CardId;

/// Пак карт: тексты тем и ответов, из которых собираются обе колоды.
///
/// Генерация контента — не забота движка: тексты приходят снаружи
/// (файл, база, захардкоженный набор). Здесь только раздача id и
/// превращение текстов в колоды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardPack {
    pub prompts: Vec<String>,
    pub responses: Vec<String>,
}

impl CardPack {
    pub fn new<P, R>(prompts: P, responses: R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            prompts: prompts.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// Собрать обе колоды. Id сквозные внутри каждой колоды (0-based).
    /// Колоды выходят в порядке пака — перемешивает их engine при
    /// создании сессии.
    pub fn build_decks(&self) -> (PromptDeck, ResponseDeck) {
        let prompts = self
            .prompts
            .iter()
            .enumerate()
            .map(|(i, text)| PromptCard::new(i as CardId, text.clone()))
            .collect();
        let responses = self
            .responses
            .iter()
            .enumerate()
            .map(|(i, text)| ResponseCard::new(i as CardId, text.clone()))
            .collect();
        (PromptDeck::new(prompts), ResponseDeck::new(responses))
    }

    /// Маленький встроенный пак для dev CLI и тестов.
    /// `prompts` тем и `responses` ответов с генерёнными текстами.
    pub fn demo(prompts: usize, responses: usize) -> Self {
        Self {
            prompts: (0..prompts).map(|i| format!("Тема {i}")).collect(),
            responses: (0..responses).map(|i| format!("Ответ {i}")).collect(),
        }
    }
}
