use cosmwasm_std::{Addr, Coin};

use crate::constants::MAX_FEE_BPS;
use crate::ContractError;
use crate::ContractError::Unauthorized;

pub fn validate_is_manager(sender: &Addr, manager: &Addr) -> Result<(), ContractError> {
    if sender != manager {
        Err(Unauthorized {})
    } else {
        Ok(())
    }
}

pub fn validate_fee_bps(fee_bps: u64) -> Result<u64, ContractError> {
    if fee_bps >= MAX_FEE_BPS {
        Err(ContractError::InvalidFeeRate {})
    } else {
        Ok(fee_bps)
    }
}

pub fn validate_ticket_cost(ticket_cost: &Coin) -> Result<(), ContractError> {
    if ticket_cost.amount.is_zero() {
        Err(ContractError::InvalidTicketPrice {})
    } else {
        Ok(())
    }
}

pub fn validate_max_participants(max_participants: u32) -> Result<u32, ContractError> {
    if max_participants == 0 {
        Err(ContractError::InvalidMaxParticipants {})
    } else {
        Ok(max_participants)
    }
}
