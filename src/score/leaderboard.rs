use crate::model::{LeaderboardEntry, Player, TournamentPoints, TournamentResult};

/// Sums per-tournament points into one leaderboard row per player and
/// orders the rows by descending total. The sort is stable and has no
/// secondary key: players tied on points keep the order of the `players`
/// argument. A player with no points in any tournament still gets a row
/// (total 0, empty breakdown).
#[must_use]
pub fn aggregate_leaderboard(
    tournaments: &[TournamentPoints],
    players: &[Player],
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = players
        .iter()
        .map(|player| {
            let mut total_points = 0;
            let mut tournament_results = Vec::new();
            for tournament in tournaments {
                if let Some(&points) = tournament.points.get(&player.player_id) {
                    total_points += points;
                    tournament_results.push(TournamentResult {
                        tournament_id: tournament.tournament_id.clone(),
                        points,
                    });
                }
            }
            LeaderboardEntry {
                player_id: player.player_id.clone(),
                player_name: player.name.clone(),
                total_points,
                tournament_results,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    entries
}
