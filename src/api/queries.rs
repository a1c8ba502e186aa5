use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::dto::{GameViewDto, PlayerPrivateDto, PlayerPublicDto};
use crate::api::errors::ApiError;
use crate::domain::PlayerId;
use crate::engine::phase::GamePhase;
use crate::engine::session::GameSession;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Публичная вьюха раунда.
    GetGameView,

    /// Приватный payload конкретного игрока.
    GetPlayerView { player_id: PlayerId },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    GameView(GameViewDto),
    PlayerView(PlayerPrivateDto),
}

pub fn run_query(session: &GameSession, query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetGameView => Ok(QueryResponse::GameView(build_game_view(session))),
        Query::GetPlayerView { player_id } => build_player_private(session, player_id)
            .map(QueryResponse::PlayerView)
            .ok_or(ApiError::PlayerNotInGame(player_id)),
    }
}

/// Собрать публичную вьюху раунда из состояния сессии.
/// Руки и содержимое выборов сюда не попадают — только флаг `done`.
pub fn build_game_view(session: &GameSession) -> GameViewDto {
    let round = session.round();

    let mut players = BTreeMap::new();
    for p in session.players() {
        players.insert(
            p.name.clone(),
            PlayerPublicDto {
                wins: p.wins,
                done: !p.is_judge && p.choice.is_some(),
            },
        );
    }

    GameViewDto {
        phase: session.phase(),
        round_no: round.round_no,
        prompt: round.prompt.clone(),
        judge: round
            .judge
            .and_then(|id| session.player(id).map(|p| p.name.clone())),
        winner: round
            .winner
            .and_then(|id| session.player(id).map(|p| p.name.clone())),
        players,
        timer_expires_ms: session.timer_deadline_ms(),
    }
}

/// Собрать приватный payload игрока. None — игрока нет в сессии.
/// Список сданных карт вкладывается только судье и только когда судья
/// его реально видит — в фазе `JudgeChoose`.
pub fn build_player_private(
    session: &GameSession,
    player_id: PlayerId,
) -> Option<PlayerPrivateDto> {
    let player = session.player(player_id)?;

    let choices = if player.is_judge && session.phase() == GamePhase::JudgeChoose {
        Some(session.submitted_choices())
    } else {
        None
    };

    Some(PlayerPrivateDto {
        player_id: player.id,
        name: player.name.clone(),
        hand: player.hand.clone(),
        choices,
    })
}
