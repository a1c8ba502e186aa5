//! Движок сессии: машина фаз, раундовый контекст, таймер, фасад.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `start` — запустить сессию (Entry → PlayersChoose)
//!   - `choose_card` — выбор игрока в фазе PlayersChoose
//!   - `choose_winner` — решение судьи в фазе JudgeChoose
//!   - `next_round` — переход ShowWinner → PlayersChoose
//!   - `handle_timeout` — колбэк таймера фазы (с защитой от устаревших)

pub mod clock;
pub mod errors;
pub mod phase;
pub mod round;
pub mod session;

pub use clock::{RoundClock, TimerEpoch};
pub use errors::EngineError;
pub use phase::{next_phase, GamePhase, PhaseEvent};
pub use round::{next_judge, RoundContext};
pub use session::{GameSession, TimeoutOutcome};

/// RNG интерфейс для engine.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
