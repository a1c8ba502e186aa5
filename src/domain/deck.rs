use serde::{Deserialize, Serialize};

use crate::domain::card::{PromptCard, ResponseCard};

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck<C> {
    pub cards: Vec<C>,
}

/// Колода тем (раздаётся по одной карте на раунд).
pub type PromptDeck = Deck<PromptCard>;
/// Колода ответов (из неё добираются руки игроков).
pub type ResponseDeck = Deck<ResponseCard>;

impl<C> Deck<C> {
    pub fn new(cards: Vec<C>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    /// `None`, если колода пуста — трактовку решает engine.
    pub fn draw_one(&mut self) -> Option<C> {
        self.cards.pop()
    }

    /// Взять n карт сверху, строго все-или-ничего:
    /// если карт меньше n, колода не трогается и возвращается `None`.
    /// Авто-перетасовки сброса здесь нет — политика пополнения решается
    /// при сборке колоды, а не в движке сессии.
    pub fn draw_n(&mut self, n: usize) -> Option<Vec<C>> {
        if self.cards.len() < n {
            return None;
        }
        let split_at = self.cards.len() - n;
        let mut taken = self.cards.split_off(split_at);
        // split_off отдаёт хвост в исходном порядке — разворачиваем,
        // чтобы порядок совпадал с n последовательными draw_one().
        taken.reverse();
        Some(taken)
    }
}
