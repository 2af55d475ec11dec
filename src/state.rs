use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Timestamp, Uint128};
use cw_storage_plus::Item;

use crate::error::ContractError;

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROUND: Item<Round> = Item::new("round");
pub const TREASURY: Item<Treasury> = Item::new("treasury");

#[cw_serde]
pub struct Config {
    // one ticket, one entry per address per round
    pub strict: bool,
    // the native cost per ticket. the denom doubles as the denom all payouts
    // are made in; it is ignored when a cw20 rail is configured
    pub ticket_cost: Coin,
    pub max_participants: u32,
    // seconds from round start to the round deadline
    pub max_duration: u64,
    pub fee_bps: u64,
    pub manager: Addr,
    // None means entries are paid in the native denom of ticket_cost
    pub payment_token: Option<Addr>,
    // when set, entries past the deadline are rejected instead of ignored
    pub enforce_deadline: bool,
}

#[cw_serde]
pub enum RoundStatus {
    OPEN,
    DEACTIVATED,
}

impl RoundStatus {
    /// Numeric code surfaced through the info query. OPEN must stay 1, the
    /// legacy indexers match on it.
    pub fn code(&self) -> u8 {
        match self {
            RoundStatus::OPEN => 1,
            RoundStatus::DEACTIVATED => 2,
        }
    }
}

#[cw_serde]
pub struct Participant {
    pub addr: Addr,
    pub tickets: u64,
    pub bonded: Uint128,
}

#[cw_serde]
pub struct Round {
    pub id: u64,
    pub status: RoundStatus,
    pub started_at: Timestamp,
    pub deadline: Timestamp,
    pub total_tickets: u64,
    pub total_bonded: Uint128,
    // entry order; winner selection walks this front to back
    pub participants: Vec<Participant>,
}

impl Round {
    pub fn open(id: u64, started_at: Timestamp, max_duration: u64) -> Round {
        Round {
            id,
            status: RoundStatus::OPEN,
            started_at,
            deadline: started_at.plus_seconds(max_duration),
            total_tickets: 0,
            total_bonded: Uint128::zero(),
            participants: vec![],
        }
    }

    pub fn participant(&self, addr: &Addr) -> Option<&Participant> {
        self.participants.iter().find(|player| &player.addr == addr)
    }

    /// Books a purchase against the round, creating the participant record on
    /// first entry and accumulating onto it afterwards. Totals move through
    /// checked arithmetic; a would-be wrap aborts the whole call.
    pub fn record_entry(
        &mut self,
        addr: &Addr,
        tickets: u64,
        payment: Uint128,
    ) -> Result<(), ContractError> {
        self.total_tickets = self
            .total_tickets
            .checked_add(tickets)
            .ok_or(ContractError::ArithmeticOverflow {})?;
        self.total_bonded = self.total_bonded.checked_add(payment)?;

        match self.participants.iter_mut().find(|player| &player.addr == addr) {
            Some(player) => {
                player.tickets = player
                    .tickets
                    .checked_add(tickets)
                    .ok_or(ContractError::ArithmeticOverflow {})?;
                player.bonded = player.bonded.checked_add(payment)?;
            }
            None => self.participants.push(Participant {
                addr: addr.clone(),
                tickets,
                bonded: payment,
            }),
        }
        Ok(())
    }

    /// Terminal transition. The pool must already be scheduled for disbursal
    /// when this runs; the round only zeroes its books.
    pub fn deactivate(&mut self) {
        self.status = RoundStatus::DEACTIVATED;
        self.total_tickets = 0;
        self.total_bonded = Uint128::zero();
        self.participants.clear();
    }
}

#[cw_serde]
pub struct Treasury {
    // lifetime fees routed to the manager, monotone
    pub fees_collected: Uint128,
}
