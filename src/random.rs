use cosmwasm_std::Env;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::state::Round;

/// Derives the draw seed from block-level entropy.
///
/// Everything mixed in here (block time, height, transaction index, the
/// round's own ticket total) is visible to block producers and to callers
/// who can influence transaction ordering, so the draw is predictable to
/// them. That is a known weakness of environment-derived entropy, inherited
/// from the original design. Deployments that care should plug a
/// VRF-or-oracle-backed [`WinnerSelector`] into settlement instead of
/// relying on this seed.
pub fn derive_seed(env: &Env, round: &Round) -> u64 {
    let tx_index = env
        .transaction
        .as_ref()
        .map(|tx| u64::from(tx.index))
        .unwrap_or_default();
    env.block
        .time
        .nanos()
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ env.block.height.rotate_left(17)
        ^ tx_index.rotate_left(31)
        ^ round.total_tickets.rotate_left(47)
}

/// Strategy seam for picking the winner of a full round.
pub trait WinnerSelector {
    /// Returns the index of the winning participant, in entry order, or
    /// `None` when the round has no tickets to draw from.
    fn pick(&self, seed: u64, round: &Round) -> Option<usize>;
}

/// Draws one ticket uniformly over all tickets sold this round, so the win
/// probability of a participant scales linearly with the tickets they hold.
pub struct TicketWeighted;

impl WinnerSelector for TicketWeighted {
    fn pick(&self, seed: u64, round: &Round) -> Option<usize> {
        if round.total_tickets == 0 {
            return None;
        }
        let mut rng = Pcg32::seed_from_u64(seed);
        let winning_ticket = rng.gen_range(0..round.total_tickets);

        // walk the cumulative ticket ranges in entry order
        let mut first_ticket = 0u64;
        for (index, player) in round.participants.iter().enumerate() {
            let next_first = first_ticket + player.tickets;
            if winning_ticket < next_first {
                return Some(index);
            }
            first_ticket = next_first;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{Addr, Timestamp, Uint128};

    use super::{TicketWeighted, WinnerSelector};
    use crate::state::Round;

    fn round_with_tickets(tickets: &[u64]) -> Round {
        let mut round = Round::open(1, Timestamp::from_seconds(0), 100);
        for (i, count) in tickets.iter().enumerate() {
            round
                .record_entry(
                    &Addr::unchecked(format!("player{}", i)),
                    *count,
                    Uint128::new(*count as u128 * 1_000),
                )
                .unwrap();
        }
        round
    }

    #[test]
    fn empty_round_has_no_winner() {
        let round = round_with_tickets(&[]);
        assert_eq!(TicketWeighted.pick(42, &round), None);
    }

    #[test]
    fn sole_participant_always_wins() {
        let round = round_with_tickets(&[3]);
        for seed in 0..64 {
            assert_eq!(TicketWeighted.pick(seed, &round), Some(0));
        }
    }

    #[test]
    fn same_seed_same_winner() {
        let round = round_with_tickets(&[1, 2, 3]);
        let first = TicketWeighted.pick(7, &round);
        for _ in 0..16 {
            assert_eq!(TicketWeighted.pick(7, &round), first);
        }
    }

    #[test]
    fn every_participant_is_reachable() {
        let round = round_with_tickets(&[1, 2, 3]);
        let mut seen = [false; 3];
        for seed in 0..256 {
            let index = TicketWeighted.pick(seed, &round).unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn picked_index_is_in_bounds() {
        let round = round_with_tickets(&[5, 1, 1, 10]);
        for seed in 0..256 {
            let index = TicketWeighted.pick(seed, &round).unwrap();
            assert!(index < round.participants.len());
        }
    }
}
