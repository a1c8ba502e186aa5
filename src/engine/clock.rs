//! Таймер фазы: одна взводимая "стрелка" на сессию.
//!
//! Реального сна здесь нет: движок только фиксирует дедлайн и выдаёт
//! эпоху таймера. Транспортный слой сам спит до `fires_at_ms` и потом
//! зовёт `GameSession::handle_timeout(epoch, ...)`. Эпоха — защита от
//! гонки: колбэк уже отменённого или перевзведённого таймера приносит
//! устаревшую эпоху и отбрасывается.

use serde::{Deserialize, Serialize};

/// Номер взвода таймера. Растёт на каждом `arm()`.
pub type TimerEpoch = u64;

/// Состояние таймера текущей фазы.
///
/// Инвариант: в любой момент взведён максимум один дедлайн.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundClock {
    epoch: TimerEpoch,
    /// Unix-время (мс), когда таймер сработает. None — таймер не взведён.
    deadline_ms: Option<u64>,
}

impl RoundClock {
    pub fn new() -> Self {
        Self {
            epoch: 0,
            deadline_ms: None,
        }
    }

    /// Взвести таймер фазы. Возвращает (эпоха, момент срабатывания).
    pub fn arm(&mut self, now_ms: u64, duration_secs: u32) -> (TimerEpoch, u64) {
        let fires_at = now_ms + u64::from(duration_secs) * 1000;
        self.epoch += 1;
        self.deadline_ms = Some(fires_at);
        (self.epoch, fires_at)
    }

    /// Снять таймер (выход из фазы). Снимать можно и не взведённый —
    /// это no-op. Возвращает эпоху снятого таймера, если он был.
    pub fn clear(&mut self) -> Option<TimerEpoch> {
        self.deadline_ms.take().map(|_| self.epoch)
    }

    /// Принимается ли колбэк с такой эпохой: таймер взведён и это
    /// именно его эпоха. Всё остальное — устаревший колбэк.
    pub fn accepts(&self, epoch: TimerEpoch) -> bool {
        self.deadline_ms.is_some() && self.epoch == epoch
    }

    /// Текущий дедлайн для отображения (`timerExpires` во вьюхе).
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Эпоха последнего взвода (для тестов/отладки).
    pub fn current_epoch(&self) -> TimerEpoch {
        self.epoch
    }
}

impl Default for RoundClock {
    fn default() -> Self {
        Self::new()
    }
}
