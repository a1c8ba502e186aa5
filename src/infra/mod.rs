//! Инфраструктурный слой вокруг движка сессии:
//! - RNG-реализации для перетасовки колод;
//! - wall-clock хелпер для хостов (сам движок часы не читает).

pub mod rng;
pub mod time;

pub use rng::*;
pub use time::now_unix_ms;
