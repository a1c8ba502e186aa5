//! Сквозные сценарии сессии: полный раунд, переход к следующему,
//! ротация судьи на дистанции.

use cards_against_engine::api::events::OutboundEventKind;
use cards_against_engine::domain::card::ResponseCard;
use cards_against_engine::domain::pack::CardPack;
use cards_against_engine::domain::player::PlayerProfile;
use cards_against_engine::domain::settings::GameSettings;
use cards_against_engine::engine::{
    EngineError, GamePhase, GameSession, RandomSource, TimeoutOutcome,
};

#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

fn make_session() -> GameSession {
    let roster = vec![
        PlayerProfile::new(1, "Alice"),
        PlayerProfile::new(2, "Bob"),
        PlayerProfile::new(3, "Carol"),
    ];
    let (prompts, responses) = CardPack::demo(30, 200).build_decks();
    GameSession::new(
        GameSettings::standard(),
        roster,
        1,
        prompts,
        responses,
        &mut DummyRng,
    )
    .expect("valid roster")
}

fn hand_card(session: &GameSession, player_id: u64, idx: usize) -> ResponseCard {
    session.player(player_id).unwrap().hand[idx].clone()
}

/// Прокрутить текущий таймер фазы (эпоха берётся из сессии).
fn fire_timer(session: &mut GameSession, now_ms: u64) {
    let epoch = session.timer_epoch();
    assert_eq!(
        session.handle_timeout(epoch, now_ms).unwrap(),
        TimeoutOutcome::Advanced
    );
}

//
// Сценарий из трёх игроков: полный раунд с решением судьи.
//
#[test]
fn full_round_with_judge_decision() {
    let mut session = make_session();
    session.start(1_000).unwrap();
    session.drain_events();

    // Судья Алиса пытается сдать карту — отказ, рука не тронута.
    let alice_card = hand_card(&session, 1, 0);
    assert_eq!(
        session.choose_card(1, &alice_card, 2_000),
        Err(EngineError::JudgeCannotChoose(1))
    );
    assert_eq!(session.player(1).unwrap().hand.len(), 7);
    assert_eq!(session.phase(), GamePhase::PlayersChoose);

    // Боб сдаёт карту: фаза стоит (Кэрол ещё думает), карта ушла из руки.
    let bob_card = hand_card(&session, 2, 0);
    session.choose_card(2, &bob_card, 3_000).unwrap();
    assert_eq!(session.phase(), GamePhase::PlayersChoose);
    assert_eq!(session.player(2).unwrap().hand.len(), 6);
    assert!(!session.player(2).unwrap().has_card(&bob_card));

    // Кэрол сдаёт последнюю недостающую — мгновенный переход к судье.
    let carol_card = hand_card(&session, 3, 0);
    session.choose_card(3, &carol_card, 4_000).unwrap();
    assert_eq!(session.phase(), GamePhase::JudgeChoose);

    // Судья видит сданные карты в порядке списка игроков: Боб, Кэрол.
    assert_eq!(
        session.submitted_choices(),
        vec![bob_card.clone(), carol_card]
    );

    // Судья выбирает карту Боба.
    session.choose_winner(&bob_card, 5_000).unwrap();
    assert_eq!(session.phase(), GamePhase::ShowWinner);
    assert_eq!(session.round().winner, Some(2));
    assert_eq!(session.player(2).unwrap().wins, 1);
}

//
// Круг обратно в PlayersChoose: прошлый раунд вычищен, судья сместился.
//
#[test]
fn next_round_clears_context_and_rotates_judge() {
    let mut session = make_session();
    session.start(1_000).unwrap();

    let first_prompt = session.round().prompt.clone().unwrap();

    let bob_card = hand_card(&session, 2, 0);
    let carol_card = hand_card(&session, 3, 0);
    session.choose_card(2, &bob_card, 2_000).unwrap();
    session.choose_card(3, &carol_card, 3_000).unwrap();
    session.choose_winner(&bob_card, 4_000).unwrap();

    session.next_round(10_000).unwrap();

    assert_eq!(session.phase(), GamePhase::PlayersChoose);
    assert_eq!(session.round().round_no, 2);
    assert_eq!(session.round().judge, Some(2), "судья сместился на Боба");
    assert!(session.round().winner.is_none());
    assert_ne!(session.round().prompt.as_ref(), Some(&first_prompt));

    for p in session.players() {
        assert!(p.choice.is_none(), "выбор {} сброшен", p.name);
        assert_eq!(p.hand.len(), 7, "рука {} добрана обратно", p.name);
        assert_eq!(p.is_judge, p.id == 2);
    }

    // Победы переживают смену раунда.
    assert_eq!(session.player(2).unwrap().wins, 1);
}

//
// Ротация на дистанции: за N раундов при N игроках каждый судит ровно раз.
//
#[test]
fn judge_rotation_covers_every_player_once_per_cycle() {
    let mut session = make_session();
    let mut now = 1_000u64;
    session.start(now).unwrap();

    let mut judges = Vec::new();
    for _ in 0..3 {
        judges.push(session.round().judge.unwrap());

        // Раунд прокручиваем таймерами: PlayersChoose → JudgeChoose → ShowWinner.
        now += 61_000;
        fire_timer(&mut session, now);
        now += 31_000;
        fire_timer(&mut session, now);
        session.next_round(now).unwrap();
    }

    judges.sort_unstable();
    assert_eq!(judges, vec![1, 2, 3]);

    // Четвёртый раунд — круг замкнулся на первом судье.
    assert_eq!(session.round().judge, Some(1));
}

//
// Порядок событий на входе в раунд: приватные руки, таймер, публичная вьюха.
//
#[test]
fn round_entry_emits_hands_then_timer_then_view() {
    let mut session = make_session();
    session.start(1_000).unwrap();

    let tags: Vec<&'static str> = session
        .drain_events()
        .iter()
        .map(|e| e.kind.kind_tag())
        .collect();

    assert_eq!(
        tags,
        vec![
            "game_started",
            "player_data",
            "player_data",
            "player_data",
            "timer_scheduled",
            "game_data",
        ]
    );
}

//
// Принятый выбор даёт свежую публичную вьюху с выставленным done.
//
#[test]
fn accepted_choice_emits_updated_view() {
    let mut session = make_session();
    session.start(1_000).unwrap();
    session.drain_events();

    let bob_card = hand_card(&session, 2, 0);
    session.choose_card(2, &bob_card, 2_000).unwrap();

    let events = session.drain_events();
    let view = events
        .iter()
        .find_map(|e| match &e.kind {
            OutboundEventKind::GameData(view) => Some(view.clone()),
            _ => None,
        })
        .expect("есть публичная вьюха");

    assert!(view.players["Bob"].done);
    assert!(!view.players["Carol"].done);
    assert!(!view.players["Alice"].done, "судья всегда done=false");
}
