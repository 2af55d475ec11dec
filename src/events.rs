use cosmwasm_std::{Addr, Event, Uint128};

use crate::state::Round;

/*
Every state transition of the lottery lands in the event log under a stable
type so off-chain consumers can reconstruct round outcomes without reading
contract storage. The three identifiers below are part of the wire contract.
*/

pub fn lottery_entered(round: &Round, participant: &Addr, tickets: u64) -> Event {
    Event::new("lottery_entered")
        .add_attribute("round_id", round.id.to_string())
        .add_attribute("participant", participant.to_string())
        .add_attribute("tickets", tickets.to_string())
        .add_attribute("total_tickets", round.total_tickets.to_string())
        .add_attribute("total_bonded", round.total_bonded.to_string())
        .add_attribute("participants", round.participants.len().to_string())
}

pub fn round_settled(
    round_id: u64,
    winner: &Addr,
    pot: Uint128,
    payout: Uint128,
    fee: Uint128,
    total_tickets: u64,
) -> Event {
    Event::new("round_settled")
        .add_attribute("round_id", round_id.to_string())
        .add_attribute("winner", winner.to_string())
        .add_attribute("pot", pot.to_string())
        .add_attribute("payout", payout.to_string())
        .add_attribute("fee", fee.to_string())
        .add_attribute("total_tickets", total_tickets.to_string())
}

pub fn lottery_deactivated(round_id: u64, mode: &str, disbursed: Uint128) -> Event {
    Event::new("lottery_deactivated")
        .add_attribute("round_id", round_id.to_string())
        .add_attribute("mode", mode.to_string())
        .add_attribute("disbursed", disbursed.to_string())
}
