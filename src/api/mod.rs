//! Внешний API движка сессии.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (старт, выбор карты, решение судьи, таймер);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — публичная вьюха и приватные payload'ы;
//! - события (events.rs) — исходящая очередь для транспортного слоя;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod events;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use events::*;
pub use queries::*;
