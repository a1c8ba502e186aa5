//! Движок одной игровой сессии "prompt + response" карточной игры
//! (судья задаёт тему, остальные отвечают картами с руки).
//!
//! Это библиотека без собственного транспорта: снаружи её дергает
//! транспортный слой (websocket-сервер, бот, CLI), а наружу она отдаёт
//! события через очередь `OutboundEvent` (см. `api::events`).
//!
//! Слои:
//! - `domain` — карты, колоды, игроки, настройки;
//! - `engine` — машина фаз, раундовый контекст, таймер, фасад `GameSession`;
//! - `api` — команды/запросы/DTO/события для транспортного слоя;
//! - `infra` — RNG-реализации и wall-clock хелпер.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use crate::domain::settings::GameSettings;
pub use crate::engine::session::GameSession;
