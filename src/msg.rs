use cosmwasm_schema::cw_serde;
use cosmwasm_schema::QueryResponses;
use cosmwasm_std::{Addr, Coin, Timestamp, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub strict: bool,
    pub ticket_cost: Coin,
    pub max_participants: u32,
    /// Round duration in seconds.
    pub max_duration: u64,
    /// Manager cut in basis points, 250 = 2.5%.
    pub fee_bps: u64,
    pub manager: String,
    /// cw20 address to run entries and payouts over instead of the native
    /// denom of `ticket_cost`.
    pub payment_token: Option<String>,
    /// Reject entries past the round deadline. Defaults to off, matching the
    /// deployments where the deadline is informational only.
    pub enforce_deadline: Option<bool>,
}

#[cw_serde]
pub enum ExecuteMsg {
    Enter { num_tickets: u64 },
    /// Manager only. `force` refunds the open round; otherwise the round is
    /// settled one last time before the lottery goes dark.
    Terminate { force: bool },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(InfoResponse)]
    Info {},
    #[returns(TicketCountResponse)]
    TicketCount { addr: Addr },
    #[returns(TreasuryResponse)]
    Treasury {},
}

/// Full observable snapshot of the lottery. Field order mirrors the
/// positional tuple the pre-existing indexers address as 0..=11; do not
/// reorder.
#[cw_serde]
pub struct InfoResponse {
    /// 0: lifecycle status code, 1 = open, 2 = deactivated
    pub status: u8,
    /// 1: strict entry policy
    pub strict: bool,
    /// 2: price of a single ticket
    pub ticket_price: Uint128,
    /// 3: participants in the current round
    pub participants: u32,
    /// 4: participant count that triggers settlement
    pub max_participants: u32,
    /// 5: deadline of the current round
    pub deadline: Timestamp,
    /// 6: round duration in seconds
    pub max_duration: u64,
    /// 7: tickets sold this round
    pub total_tickets: u64,
    /// 8: funds bonded this round
    pub total_bonded: Uint128,
    /// 9: manager fee in basis points
    pub fee_bps: u64,
    /// 10: manager address
    pub manager: Addr,
    /// 11: cw20 payment rail, None when entries are paid natively
    pub payment_token: Option<Addr>,
}

#[cw_serde]
pub struct TicketCountResponse {
    pub tickets: Option<u64>,
}

#[cw_serde]
pub struct TreasuryResponse {
    pub fees_collected: Uint128,
}
