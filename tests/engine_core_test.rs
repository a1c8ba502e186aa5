use cards_against_engine::domain::pack::CardPack;
use cards_against_engine::domain::player::{Player, PlayerProfile};
use cards_against_engine::domain::settings::GameSettings;
use cards_against_engine::engine::{
    next_judge, next_phase, EngineError, GamePhase, GameSession, PhaseEvent, RandomSource,
    RoundClock,
};

/// Перетасовка-заглушка: колоды остаются в порядке пака.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

fn roster_of_three() -> Vec<PlayerProfile> {
    vec![
        PlayerProfile::new(1, "Alice"),
        PlayerProfile::new(2, "Bob"),
        PlayerProfile::new(3, "Carol"),
    ]
}

fn make_session() -> GameSession {
    let (prompts, responses) = CardPack::demo(20, 60).build_decks();
    GameSession::new(
        GameSettings::standard(),
        roster_of_three(),
        1,
        prompts,
        responses,
        &mut DummyRng,
    )
    .expect("valid roster")
}

//
// phase.rs
//
#[test]
fn phase_table_allows_the_game_cycle() {
    use GamePhase::*;
    use PhaseEvent::*;

    assert_eq!(next_phase(Entry, Start).unwrap(), PlayersChoose);
    assert_eq!(next_phase(PlayersChoose, Finish).unwrap(), JudgeChoose);
    assert_eq!(next_phase(PlayersChoose, Timeout).unwrap(), JudgeChoose);
    assert_eq!(next_phase(JudgeChoose, Finish).unwrap(), ShowWinner);
    assert_eq!(next_phase(JudgeChoose, Timeout).unwrap(), ShowWinner);
    assert_eq!(next_phase(ShowWinner, Continue).unwrap(), PlayersChoose);
}

#[test]
fn phase_table_rejects_everything_else() {
    use GamePhase::*;
    use PhaseEvent::*;

    for (from, event) in [
        (Entry, Finish),
        (Entry, Timeout),
        (Entry, Continue),
        (PlayersChoose, Start),
        (PlayersChoose, Continue),
        (JudgeChoose, Start),
        (JudgeChoose, Continue),
        (ShowWinner, Start),
        (ShowWinner, Finish),
        (ShowWinner, Timeout),
    ] {
        assert_eq!(
            next_phase(from, event),
            Err(EngineError::InvalidTransition { from, event }),
            "({from:?}, {event:?}) должен быть отвергнут"
        );
    }
}

//
// clock.rs
//
#[test]
fn clock_arm_clear_and_epoch_guard() {
    let mut clock = RoundClock::new();
    assert!(clock.deadline_ms().is_none());
    assert!(!clock.accepts(0));

    let (epoch1, fires_at) = clock.arm(1_000, 60);
    assert_eq!(epoch1, 1);
    assert_eq!(fires_at, 61_000);
    assert_eq!(clock.deadline_ms(), Some(61_000));
    assert!(clock.accepts(epoch1));

    // Снятый таймер никого не принимает.
    assert_eq!(clock.clear(), Some(epoch1));
    assert!(!clock.accepts(epoch1));
    assert!(clock.deadline_ms().is_none());

    // Повторное снятие — no-op.
    assert_eq!(clock.clear(), None);

    // Перевзвод: старая эпоха мертва навсегда.
    let (epoch2, _) = clock.arm(70_000, 30);
    assert_eq!(epoch2, 2);
    assert!(clock.accepts(epoch2));
    assert!(!clock.accepts(epoch1));
}

//
// round.rs: ротация судьи
//
#[test]
fn judge_rotation_is_round_robin_from_list_order() {
    let players: Vec<Player> = roster_of_three()
        .into_iter()
        .map(Player::from_profile)
        .collect();

    // Первый раунд — заданный первый судья, без ротации.
    assert_eq!(next_judge(&players, None, 2), 2);

    // Дальше по кругу в порядке списка, с заворотом.
    assert_eq!(next_judge(&players, Some(1), 1), 2);
    assert_eq!(next_judge(&players, Some(2), 1), 3);
    assert_eq!(next_judge(&players, Some(3), 1), 1);
}

//
// session.rs: конструктор и старт
//
#[test]
fn session_rejects_bad_rosters() {
    let (prompts, responses) = CardPack::demo(20, 60).build_decks();
    let err = GameSession::new(
        GameSettings::standard(),
        vec![PlayerProfile::new(1, "Alice")],
        1,
        prompts,
        responses,
        &mut DummyRng,
    )
    .unwrap_err();
    assert_eq!(err, EngineError::NotEnoughPlayers(1));

    let (prompts, responses) = CardPack::demo(20, 60).build_decks();
    let err = GameSession::new(
        GameSettings::standard(),
        vec![PlayerProfile::new(1, "Alice"), PlayerProfile::new(1, "Bob")],
        1,
        prompts,
        responses,
        &mut DummyRng,
    )
    .unwrap_err();
    assert_eq!(err, EngineError::DuplicatePlayer(1));

    // Первый судья обязан входить в состав.
    let (prompts, responses) = CardPack::demo(20, 60).build_decks();
    let err = GameSession::new(
        GameSettings::standard(),
        roster_of_three(),
        99,
        prompts,
        responses,
        &mut DummyRng,
    )
    .unwrap_err();
    assert_eq!(err, EngineError::PlayerNotInGame(99));
}

#[test]
fn start_enters_players_choose_and_deals_hands() {
    let mut session = make_session();
    assert_eq!(session.phase(), GamePhase::Entry);

    session.start(1_000).unwrap();

    assert_eq!(session.phase(), GamePhase::PlayersChoose);
    assert_eq!(session.round().round_no, 1);
    assert_eq!(session.round().judge, Some(1));
    assert!(session.round().prompt.is_some());
    assert!(session.round().winner.is_none());

    for p in session.players() {
        assert_eq!(p.hand.len(), 7, "рука {} добрана до hand_size", p.name);
        assert_eq!(p.wins, 0);
        assert!(p.choice.is_none());
        assert_eq!(p.is_judge, p.id == 1);
    }

    // Таймер фазы взведён на game_time_secs.
    assert_eq!(session.timer_deadline_ms(), Some(1_000 + 60_000));

    // Колоды съели 1 тему и 3 × 7 ответов.
    assert_eq!(session.prompt_deck_len(), 19);
    assert_eq!(session.response_deck_len(), 60 - 21);
}

#[test]
fn start_twice_is_already_started() {
    let mut session = make_session();
    session.start(1_000).unwrap();
    assert_eq!(session.start(2_000), Err(EngineError::AlreadyStarted));
    // Сессия продолжает жить в той же фазе.
    assert_eq!(session.phase(), GamePhase::PlayersChoose);
}
