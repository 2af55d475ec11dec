use cosmwasm_std::{to_binary, Addr, BankMsg, Coin, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::state::Config;

/// Builds the message that moves `amount` from the contract to `to` over the
/// configured payment rail.
pub fn payout_msg(config: &Config, to: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    match &config.payment_token {
        Some(token) => Ok(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::Transfer {
                recipient: to.to_string(),
                amount,
            })?,
            funds: vec![],
        }
        .into()),
        None => Ok(BankMsg::Send {
            to_address: to.to_string(),
            amount: vec![Coin {
                denom: config.ticket_cost.denom.clone(),
                amount,
            }],
        }
        .into()),
    }
}

/// Builds the message that pulls an entry payment from `from` when a cw20
/// rail is configured. The caller must have granted the contract an
/// allowance beforehand; a short allowance fails the transfer and with it
/// the whole entry.
pub fn pull_payment_msg(
    token: &Addr,
    from: &Addr,
    contract: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: from.to_string(),
            recipient: contract.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into())
}
