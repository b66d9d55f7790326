//! Adjacent pairing over rank-ordered standings.

use super::errors::{TournamentError, TournamentResult};
use super::models::{Pairing, Standing};

/// Partition rank-ordered standings into consecutive pairs
///
/// Positions 0-1 form the first pair, 2-3 the second, and so on, so each
/// player meets an opponent with an equal or nearly-equal win record. No
/// rematch avoidance is attempted.
///
/// # Errors
///
/// Returns [`TournamentError::OddPlayerCount`] when the standings hold an
/// odd number of rows; the trailing player is never dropped silently.
pub fn adjacent_pairs(standings: &[Standing]) -> TournamentResult<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let pairs = standings
        .chunks_exact(2)
        .map(|pair| Pairing::from_standings(&pair[0], &pair[1]))
        .collect();

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings_of(names: &[&str]) -> Vec<Standing> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Standing {
                id: i as i32 + 1,
                name: name.to_string(),
                wins: (names.len() - i) as i64,
                matches_played: names.len() as i64,
            })
            .collect()
    }

    #[test]
    fn test_empty_standings_yield_no_pairs() {
        let pairs = adjacent_pairs(&[]).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_two_players_form_one_pair() {
        let standings = standings_of(&["Ada", "Lin"]);
        let pairs = adjacent_pairs(&standings).unwrap();

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].player1_name, "Ada");
        assert_eq!(pairs[0].player2_name, "Lin");
    }

    #[test]
    fn test_four_players_pair_by_adjacency() {
        let standings = standings_of(&["Ada", "Lin", "Mia", "Raj"]);
        let pairs = adjacent_pairs(&standings).unwrap();

        assert_eq!(pairs.len(), 2);
        // Positions 0-1 and 2-3, in standings order.
        assert_eq!((pairs[0].player1_id, pairs[0].player2_id), (1, 2));
        assert_eq!((pairs[1].player1_id, pairs[1].player2_id), (3, 4));
    }

    #[test]
    fn test_odd_player_count_is_rejected() {
        let standings = standings_of(&["Ada", "Lin", "Mia"]);
        let err = adjacent_pairs(&standings).unwrap_err();

        assert!(matches!(err, TournamentError::OddPlayerCount(3)));
    }
}
