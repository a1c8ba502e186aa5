//! Доменная модель сессии: карты, колоды, паки, игроки, настройки.

pub mod card;
pub mod deck;
pub mod pack;
pub mod player;
pub mod settings;

// Базовые идентификаторы.
pub type PlayerId = u64;
pub type CardId = u32;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Player и т.п.
pub use card::*;
pub use deck::*;
pub use pack::*;
pub use player::*;
pub use settings::*;
