use crate::api::events::{EventQueue, OutboundEvent, OutboundEventKind};
use crate::api::queries::{build_game_view, build_player_private};
use crate::domain::card::ResponseCard;
use crate::domain::deck::{PromptDeck, ResponseDeck};
use crate::domain::player::{Player, PlayerProfile};
use crate::domain::settings::GameSettings;
use crate::domain::PlayerId;
use crate::engine::clock::{RoundClock, TimerEpoch};
use crate::engine::errors::EngineError;
use crate::engine::phase::{next_phase, GamePhase, PhaseEvent};
use crate::engine::round::{next_judge, RoundContext};
use crate::engine::RandomSource;

/// Итог обработки таймерного колбэка.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeoutOutcome {
    /// Таймер был актуален, фаза продвинулась.
    Advanced,
    /// Колбэк устаревшего/снятого таймера — чистый no-op.
    Stale,
}

/// Фасад одной игровой сессии.
///
/// Вся мутация состояния идёт через операции этого объекта; между собой
/// сессии ничего не делят и могут жить в параллельных задачах. Таймеры
/// живут снаружи: сессия объявляет `TimerScheduled { epoch, fires_at_ms }`,
/// хост спит и возвращается с `handle_timeout(epoch, now)`.
#[derive(Debug)]
pub struct GameSession {
    settings: GameSettings,
    players: Vec<Player>,
    first_judge: PlayerId,
    prompt_deck: PromptDeck,
    response_deck: ResponseDeck,
    phase: GamePhase,
    round: RoundContext,
    clock: RoundClock,
    events: EventQueue,
}

impl GameSession {
    /// Создать сессию: состав и первый судья приходят уже готовыми,
    /// обе колоды перемешиваются здесь через `RandomSource`.
    /// Руки пустые — их доберёт setup первого раунда при `start()`.
    pub fn new<R: RandomSource>(
        settings: GameSettings,
        roster: Vec<PlayerProfile>,
        first_judge: PlayerId,
        mut prompt_deck: PromptDeck,
        mut response_deck: ResponseDeck,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        if roster.len() < 2 {
            return Err(EngineError::NotEnoughPlayers(roster.len()));
        }
        for (i, profile) in roster.iter().enumerate() {
            if roster[..i].iter().any(|p| p.id == profile.id) {
                return Err(EngineError::DuplicatePlayer(profile.id));
            }
        }
        if !roster.iter().any(|p| p.id == first_judge) {
            return Err(EngineError::PlayerNotInGame(first_judge));
        }

        rng.shuffle(&mut prompt_deck.cards);
        rng.shuffle(&mut response_deck.cards);

        Ok(Self {
            settings,
            players: roster.into_iter().map(Player::from_profile).collect(),
            first_judge,
            prompt_deck,
            response_deck,
            phase: GamePhase::Entry,
            round: RoundContext::new(),
            clock: RoundClock::new(),
            events: EventQueue::new(),
        })
    }

    // ----------------------
    // Операции фасада

    /// Запуск сессии: `Entry → PlayersChoose`. Повторный вызов — ошибка.
    pub fn start(&mut self, now_ms: u64) -> Result<(), EngineError> {
        if self.phase != GamePhase::Entry {
            return Err(EngineError::AlreadyStarted);
        }
        self.events.push(OutboundEventKind::GameStarted);
        self.apply(PhaseEvent::Start, now_ms)
    }

    /// Выбор карты игроком. Только в `PlayersChoose`.
    ///
    /// Отклонённый вызов не меняет состояние. Принятая карта сразу
    /// уходит из руки (рука доберётся на setup следующего раунда), и
    /// если это был последний недостающий выбор — фаза тут же
    /// переходит в `JudgeChoose`, не дожидаясь таймера.
    pub fn choose_card(
        &mut self,
        player_id: PlayerId,
        card: &ResponseCard,
        now_ms: u64,
    ) -> Result<(), EngineError> {
        self.expect_phase(GamePhase::PlayersChoose)?;

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(EngineError::PlayerNotInGame(player_id))?;
        if player.is_judge {
            return Err(EngineError::JudgeCannotChoose(player_id));
        }
        if player.choice.is_some() {
            return Err(EngineError::ChoiceAlreadyMade(player_id));
        }
        if !player.remove_card(card) {
            return Err(EngineError::CardNotInHand(player_id));
        }
        player.choice = Some(card.clone());

        self.emit_game_view();
        if self.all_players_chosen() {
            self.apply(PhaseEvent::Finish, now_ms)?;
        }
        Ok(())
    }

    /// Решение судьи. Только в `JudgeChoose`.
    ///
    /// Карта сверяется со сданными выборами; совпадение — победитель
    /// раунда, +1 победа, переход в `ShowWinner`. Несовпадение — ошибка
    /// без каких-либо изменений состояния.
    pub fn choose_winner(&mut self, card: &ResponseCard, now_ms: u64) -> Result<(), EngineError> {
        self.expect_phase(GamePhase::JudgeChoose)?;

        let winner = self
            .players
            .iter_mut()
            .find(|p| p.choice.as_ref() == Some(card))
            .ok_or(EngineError::NoMatchingChoice)?;
        winner.wins += 1;
        self.round.winner = Some(winner.id);

        self.apply(PhaseEvent::Finish, now_ms)
    }

    /// Внешний сигнал "следующий раунд": `ShowWinner → PlayersChoose`.
    pub fn next_round(&mut self, now_ms: u64) -> Result<(), EngineError> {
        self.expect_phase(GamePhase::ShowWinner)?;
        self.apply(PhaseEvent::Continue, now_ms)
    }

    /// Колбэк таймера фазы от хоста.
    ///
    /// Эпоха сверяется с текущим взводом: колбэк снятого или уже
    /// перевзведённого таймера возвращает `Stale` и ничего не трогает.
    /// Это закрывает гонку "таймер сработал после запроса отмены, но до
    /// её применения" — такой колбэк приносит устаревшую эпоху.
    pub fn handle_timeout(
        &mut self,
        epoch: TimerEpoch,
        now_ms: u64,
    ) -> Result<TimeoutOutcome, EngineError> {
        if !self.clock.accepts(epoch) {
            return Ok(TimeoutOutcome::Stale);
        }
        match self.phase {
            GamePhase::PlayersChoose | GamePhase::JudgeChoose => {
                self.apply(PhaseEvent::Timeout, now_ms)?;
                Ok(TimeoutOutcome::Advanced)
            }
            // accepts() пропускает только взведённый таймер, а взводим
            // мы его исключительно в таймерных фазах.
            _ => Err(EngineError::Internal("armed timer outside a timed phase")),
        }
    }

    /// Забрать накопленные исходящие события. Транспортный слой зовёт
    /// это после каждой операции и маршрутизирует по `routing()`.
    pub fn drain_events(&mut self) -> Vec<OutboundEvent> {
        self.events.drain()
    }

    // ----------------------
    // Доступ на чтение (для api::queries и тестов)

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn round(&self) -> &RoundContext {
        &self.round
    }

    pub fn timer_deadline_ms(&self) -> Option<u64> {
        self.clock.deadline_ms()
    }

    pub fn timer_epoch(&self) -> TimerEpoch {
        self.clock.current_epoch()
    }

    pub fn prompt_deck_len(&self) -> usize {
        self.prompt_deck.len()
    }

    pub fn response_deck_len(&self) -> usize {
        self.response_deck.len()
    }

    /// Сданные выборы в порядке списка игроков; судья и промолчавшие
    /// опущены. Именно этот список (без имён) видит судья.
    pub fn submitted_choices(&self) -> Vec<ResponseCard> {
        self.players
            .iter()
            .filter(|p| !p.is_judge)
            .filter_map(|p| p.choice.clone())
            .collect()
    }

    // ----------------------
    // Машина фаз: переход + хуки

    fn expect_phase(&self, expected: GamePhase) -> Result<(), EngineError> {
        if self.phase != expected {
            return Err(EngineError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn apply(&mut self, event: PhaseEvent, now_ms: u64) -> Result<(), EngineError> {
        let to = next_phase(self.phase, event)?;
        self.exit_phase();
        self.phase = to;
        self.enter_phase(now_ms)
    }

    /// Хуки выхода. У таймерных фаз ровно один: безусловно снять таймер —
    /// неважно, вышли мы по его срабатыванию или досрочно.
    fn exit_phase(&mut self) {
        match self.phase {
            GamePhase::PlayersChoose | GamePhase::JudgeChoose => {
                if let Some(epoch) = self.clock.clear() {
                    self.events.push(OutboundEventKind::TimerCancelled { epoch });
                }
            }
            GamePhase::Entry | GamePhase::ShowWinner => {}
        }
    }

    fn enter_phase(&mut self, now_ms: u64) -> Result<(), EngineError> {
        match self.phase {
            GamePhase::PlayersChoose => self.enter_players_choose(now_ms),
            GamePhase::JudgeChoose => {
                self.enter_judge_choose(now_ms);
                Ok(())
            }
            GamePhase::ShowWinner => {
                // Вьюха уже содержит победителя (или None после таймаута судьи).
                self.emit_game_view();
                Ok(())
            }
            GamePhase::Entry => Err(EngineError::Internal("re-entered Entry phase")),
        }
    }

    fn enter_players_choose(&mut self, now_ms: u64) -> Result<(), EngineError> {
        self.setup_next_round()?;

        // Приватные payload'ы: каждому — его рука.
        let ids: Vec<PlayerId> = self.players.iter().map(|p| p.id).collect();
        for id in ids {
            if let Some(dto) = build_player_private(self, id) {
                self.events.push(OutboundEventKind::PlayerData(dto));
            }
        }

        self.arm_timer(now_ms, self.settings.game_time_secs);
        self.emit_game_view();
        Ok(())
    }

    fn enter_judge_choose(&mut self, now_ms: u64) {
        // Судье — анонимизированный список сданных карт.
        if let Some(judge_id) = self.round.judge {
            if let Some(dto) = build_player_private(self, judge_id) {
                self.events.push(OutboundEventKind::PlayerData(dto));
            }
        }

        self.arm_timer(now_ms, self.settings.judge_time_secs);
        self.emit_game_view();
    }

    fn arm_timer(&mut self, now_ms: u64, duration_secs: u32) {
        let (epoch, fires_at_ms) = self.clock.arm(now_ms, duration_secs);
        self.events
            .push(OutboundEventKind::TimerScheduled { epoch, fires_at_ms });
    }

    fn emit_game_view(&mut self) {
        let view = build_game_view(self);
        self.events.push(OutboundEventKind::GameData(view));
    }

    // ----------------------
    // Setup раунда

    /// Подготовка нового раунда на входе в `PlayersChoose`:
    /// ротация судьи, новая тема, сброс победителя и выборов,
    /// добор всех рук до `hand_size`.
    ///
    /// `DeckExhausted` отсюда — фатальная ошибка конфигурации (колоды
    /// малы для состава/длительности); сессию после неё выбрасывают.
    fn setup_next_round(&mut self) -> Result<(), EngineError> {
        let judge = next_judge(&self.players, self.round.judge, self.first_judge);
        self.round.judge = Some(judge);

        let prompt = self
            .prompt_deck
            .draw_one()
            .ok_or(EngineError::DeckExhausted {
                requested: 1,
                remaining: 0,
            })?;
        self.round.prompt = Some(prompt);
        self.round.winner = None;
        self.round.round_no += 1;

        let hand_size = self.settings.hand_size;
        for i in 0..self.players.len() {
            let need = hand_size.saturating_sub(self.players[i].hand.len());
            if need > 0 {
                let remaining = self.response_deck.len();
                let drawn = self
                    .response_deck
                    .draw_n(need)
                    .ok_or(EngineError::DeckExhausted {
                        requested: need,
                        remaining,
                    })?;
                self.players[i].hand.extend(drawn);
            }
            self.players[i].reset_for_round();
            self.players[i].is_judge = self.players[i].id == judge;
        }
        Ok(())
    }

    /// Все ли не-судьи сделали выбор. Судья в подсчёте не участвует.
    fn all_players_chosen(&self) -> bool {
        self.players
            .iter()
            .filter(|p| !p.is_judge)
            .all(|p| p.choice.is_some())
    }
}
