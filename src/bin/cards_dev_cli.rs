// src/bin/cards_dev_cli.rs

use cards_against_engine::api::{apply_command, build_game_view, Command, OutboundEvent};
use cards_against_engine::domain::pack::CardPack;
use cards_against_engine::domain::player::PlayerProfile;
use cards_against_engine::domain::settings::GameSettings;
use cards_against_engine::engine::session::GameSession;
use cards_against_engine::infra::{now_unix_ms, DeterministicRng};

/// Напечатать пачку исходящих событий сессии.
fn dump_events(events: &[OutboundEvent]) {
    for ev in events {
        let payload = serde_json::to_string(&ev.kind).unwrap_or_else(|e| format!("<{e}>"));
        println!(
            "  [{:>3}] {:<16} {:?} {}",
            ev.index,
            ev.kind.kind_tag(),
            ev.kind.routing(),
            payload
        );
    }
}

fn apply_and_dump(session: &mut GameSession, command: Command) {
    println!();
    println!("--- команда: {command:?}");
    match apply_command(session, command, now_unix_ms()) {
        Ok(outcome) => println!("--- итог: {outcome:?}"),
        Err(err) => println!("--- отклонено: {err:?}"),
    }
    dump_events(&session.drain_events());
}

fn main() {
    println!("cards_dev_cli: скриптованная сессия на троих…");

    // 1. Состав и настройки. Seed фиксированный, чтобы прогон был
    //    воспроизводимым.
    let roster = vec![
        PlayerProfile::new(1, "Alice"),
        PlayerProfile::new(2, "Bob"),
        PlayerProfile::new(3, "Carol"),
    ];
    let settings = GameSettings::standard();
    let (prompt_deck, response_deck) = CardPack::demo(20, 60).build_decks();
    let mut rng = DeterministicRng::from_seed(42);

    let mut session = GameSession::new(
        settings,
        roster,
        1, // первый судья — Alice
        prompt_deck,
        response_deck,
        &mut rng,
    )
    .expect("корректный состав");

    // 2. Старт: Entry → PlayersChoose, раздача рук, таймер.
    apply_and_dump(&mut session, Command::Start);

    // 3. Боб и Кэрол сдают по первой карте из руки (Алиса — судья).
    let bob_card = session.player(2).unwrap().hand[0].clone();
    apply_and_dump(
        &mut session,
        Command::ChooseCard {
            player_id: 2,
            card: bob_card.clone(),
        },
    );

    let carol_card = session.player(3).unwrap().hand[0].clone();
    apply_and_dump(
        &mut session,
        Command::ChooseCard {
            player_id: 3,
            card: carol_card,
        },
    );

    // 4. Судья выбирает карту Боба → ShowWinner.
    apply_and_dump(&mut session, Command::ChooseWinner { card: bob_card });

    // 5. Следующий раунд: судья уже Боб.
    apply_and_dump(&mut session, Command::NextRound);

    println!();
    println!("================ ИТОГОВАЯ ВЬЮХА =================");
    let view = build_game_view(&session);
    println!(
        "{}",
        serde_json::to_string_pretty(&view).expect("вьюха сериализуема")
    );
}
