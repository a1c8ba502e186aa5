use serde::{Deserialize, Serialize};

use crate::api::dto::{GameViewDto, PlayerPrivateDto};
use crate::domain::PlayerId;
use crate::engine::clock::TimerEpoch;

/// Тип исходящего события.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum OutboundEventKind {
    /// Сессия запущена.
    GameStarted,

    /// Свежая публичная вьюха раунда (на каждом входе в фазу и на
    /// каждом принятом выборе/решении).
    GameData(GameViewDto),

    /// Приватный payload игрока: рука, судье — ещё и сданные карты.
    PlayerData(PlayerPrivateDto),

    /// Хосту: взведён таймер фазы, усни до `fires_at_ms` и вернись
    /// с `handle_timeout(epoch, ...)`.
    TimerScheduled { epoch: TimerEpoch, fires_at_ms: u64 },

    /// Хосту: таймер снят, спящую задачу можно бросить (её колбэк всё
    /// равно отобьётся по эпохе).
    TimerCancelled { epoch: TimerEpoch },
}

/// Куда маршрутизировать событие.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Routing {
    /// Всем участникам сессии.
    Broadcast,
    /// Только в соединение одного игрока.
    Unicast(PlayerId),
    /// Не игрокам, а самому хосту (таймерный контракт).
    Host,
}

impl OutboundEventKind {
    /// Стабильный строковый тег — по нему транспорт узнаёт событие,
    /// не разбирая payload.
    pub fn kind_tag(&self) -> &'static str {
        match self {
            OutboundEventKind::GameStarted => "game_started",
            OutboundEventKind::GameData(_) => "game_data",
            OutboundEventKind::PlayerData(_) => "player_data",
            OutboundEventKind::TimerScheduled { .. } => "timer_scheduled",
            OutboundEventKind::TimerCancelled { .. } => "timer_cancelled",
        }
    }

    pub fn routing(&self) -> Routing {
        match self {
            OutboundEventKind::GameStarted | OutboundEventKind::GameData(_) => Routing::Broadcast,
            OutboundEventKind::PlayerData(dto) => Routing::Unicast(dto.player_id),
            OutboundEventKind::TimerScheduled { .. } | OutboundEventKind::TimerCancelled { .. } => {
                Routing::Host
            }
        }
    }
}

/// Исходящее событие с порядковым номером.
/// Номер сквозной на всю сессию — не сбрасывается при drain.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutboundEvent {
    pub index: u32,
    pub kind: OutboundEventKind,
}

/// Очередь исходящих событий сессии.
///
/// Замена event-emitter'а: движок пушит, транспортный слой забирает
/// через `drain()` после каждой операции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EventQueue {
    events: Vec<OutboundEvent>,
    next_index: u32,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_index: 0,
        }
    }

    pub fn push(&mut self, kind: OutboundEventKind) {
        self.events.push(OutboundEvent {
            index: self.next_index,
            kind,
        });
        self.next_index += 1;
    }

    /// Забрать всё накопленное, очередь остаётся пустой.
    pub fn drain(&mut self) -> Vec<OutboundEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
