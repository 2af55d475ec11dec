#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult, Storage, Uint128,
};
use cw2::set_contract_version;
use cw_utils::must_pay;

use crate::constants::{CONTRACT_NAME, CONTRACT_VERSION, FEE_DENOMINATOR};
use crate::error::ContractError;
use crate::events;
use crate::helpers::{payout_msg, pull_payment_msg};
use crate::msg::{
    ExecuteMsg, InfoResponse, InstantiateMsg, QueryMsg, TicketCountResponse, TreasuryResponse,
};
use crate::random::{derive_seed, TicketWeighted, WinnerSelector};
use crate::state::{Config, Round, RoundStatus, Treasury, CONFIG, ROUND, TREASURY};
use crate::util::{
    validate_fee_bps, validate_is_manager, validate_max_participants, validate_ticket_cost,
};

/*
A recurring pooled-stake lottery. Participants bond the exact cost of their
tickets; the moment the round hits its participant cap it settles in the same
call, pays the winner the pot minus the manager fee, and reopens for the next
round. The manager can shut the lottery down for good, either refunding the
open round or letting it finish with one last draw.

All accounting is finalized in storage before any transfer message is
emitted, so a stalled or reentrant transfer can never observe or corrupt a
half-settled round.
*/

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    validate_ticket_cost(&msg.ticket_cost)?;
    let fee_bps = validate_fee_bps(msg.fee_bps)?;
    let max_participants = validate_max_participants(msg.max_participants)?;

    let manager = deps.api.addr_validate(&msg.manager)?;
    let payment_token = msg
        .payment_token
        .map(|token| deps.api.addr_validate(&token))
        .transpose()?;

    let config = Config {
        strict: msg.strict,
        ticket_cost: msg.ticket_cost,
        max_participants,
        max_duration: msg.max_duration,
        fee_bps,
        manager,
        payment_token,
        enforce_deadline: msg.enforce_deadline.unwrap_or(false),
    };
    CONFIG.save(deps.storage, &config)?;
    TREASURY.save(
        deps.storage,
        &Treasury {
            fees_collected: Uint128::zero(),
        },
    )?;
    ROUND.save(
        deps.storage,
        &Round::open(1, env.block.time, config.max_duration),
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter { num_tickets } => execute_enter(deps, env, info, num_tickets),
        ExecuteMsg::Terminate { force } => execute_terminate(deps, env, info, force),
    }
}

fn execute_enter(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    num_tickets: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    if round.status != RoundStatus::OPEN {
        return Err(ContractError::RoundClosed {});
    }
    // A late entry is rejected outright; expiry never settles the round.
    if config.enforce_deadline && env.block.time >= round.deadline {
        return Err(ContractError::RoundClosed {});
    }

    if num_tickets == 0 || (config.strict && num_tickets != 1) {
        return Err(ContractError::InvalidTicketCount {});
    }

    let cost = config
        .ticket_cost
        .amount
        .checked_mul(Uint128::from(num_tickets))?;

    let mut msgs: Vec<CosmosMsg> = vec![];
    match &config.payment_token {
        None => {
            let paid = must_pay(&info, &config.ticket_cost.denom)?;
            if paid != cost {
                return Err(ContractError::InvalidPayment {});
            }
        }
        Some(token) => {
            // Token entries carry no native funds; the cost is pulled over
            // the rail once the round state is finalized.
            if !info.funds.is_empty() {
                return Err(ContractError::InvalidPayment {});
            }
            msgs.push(pull_payment_msg(
                token,
                &info.sender,
                &env.contract.address,
                cost,
            )?);
        }
    }

    if config.strict && round.participant(&info.sender).is_some() {
        return Err(ContractError::DuplicateEntry {});
    }

    round.record_entry(&info.sender, num_tickets, cost)?;

    let mut response = Response::new()
        .add_attribute("method", "enter")
        .add_event(events::lottery_entered(&round, &info.sender, num_tickets));

    if round.participants.len() as u32 == config.max_participants {
        // capacity reached: the triggering entry is part of the settled round
        let (settled, transfer_msgs) = settle_round(deps, &env, &config, round)?;
        response = response.add_event(settled);
        msgs.extend(transfer_msgs);
    } else {
        ROUND.save(deps.storage, &round)?;
    }

    Ok(response.add_messages(msgs))
}

/// Settles a full round and opens the next one. Given an open round with at
/// least one ticket this cannot fail: the arithmetic is checked and the
/// transfers are emitted only after the next round is committed to storage.
fn settle_round(
    deps: DepsMut,
    env: &Env,
    config: &Config,
    round: Round,
) -> Result<(Event, Vec<CosmosMsg>), ContractError> {
    let pot = round.total_bonded;
    let (fee, payout) = split_pot(config, pot)?;
    let winner = draw_winner(env, &round)?;

    accrue_fee(deps.storage, fee)?;
    ROUND.save(
        deps.storage,
        &Round::open(round.id + 1, env.block.time, config.max_duration),
    )?;

    let msgs = disburse_msgs(config, &winner, payout, fee)?;
    Ok((
        events::round_settled(round.id, &winner, pot, payout, fee, round.total_tickets),
        msgs,
    ))
}

fn execute_terminate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    force: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    validate_is_manager(&info.sender, &config.manager)?;

    let mut round = ROUND.load(deps.storage)?;
    if round.status == RoundStatus::DEACTIVATED {
        return Err(ContractError::AlreadyTerminated {});
    }

    let disbursed = round.total_bonded;
    let mut response = Response::new().add_attribute("method", "terminate");
    let mut msgs: Vec<CosmosMsg> = vec![];

    if force {
        // Refund path: every participant gets back exactly what they bonded.
        for player in &round.participants {
            if !player.bonded.is_zero() {
                msgs.push(payout_msg(&config, &player.addr, player.bonded)?);
            }
        }
        response = response.add_event(events::lottery_deactivated(round.id, "refund", disbursed));
    } else {
        // Graceful path: the open round still gets its draw.
        if !round.participants.is_empty() {
            let (fee, payout) = split_pot(&config, disbursed)?;
            let winner = draw_winner(&env, &round)?;
            accrue_fee(deps.storage, fee)?;
            msgs.extend(disburse_msgs(&config, &winner, payout, fee)?);
            response = response.add_event(events::round_settled(
                round.id,
                &winner,
                disbursed,
                payout,
                fee,
                round.total_tickets,
            ));
        }
        response = response.add_event(events::lottery_deactivated(round.id, "settle", disbursed));
    }

    round.deactivate();
    ROUND.save(deps.storage, &round)?;

    Ok(response.add_messages(msgs))
}

fn split_pot(config: &Config, pot: Uint128) -> Result<(Uint128, Uint128), ContractError> {
    let fee = pot.checked_multiply_ratio(config.fee_bps, FEE_DENOMINATOR)?;
    let payout = pot.checked_sub(fee)?;
    Ok((fee, payout))
}

fn draw_winner(env: &Env, round: &Round) -> Result<Addr, ContractError> {
    let seed = derive_seed(env, round);
    let index = TicketWeighted
        .pick(seed, round)
        .ok_or(ContractError::WinnerUnavailable {})?;
    Ok(round.participants[index].addr.clone())
}

fn accrue_fee(storage: &mut dyn Storage, fee: Uint128) -> Result<(), ContractError> {
    TREASURY.update(storage, |mut treasury| -> Result<_, ContractError> {
        treasury.fees_collected = treasury.fees_collected.checked_add(fee)?;
        Ok(treasury)
    })?;
    Ok(())
}

fn disburse_msgs(
    config: &Config,
    winner: &Addr,
    payout: Uint128,
    fee: Uint128,
) -> StdResult<Vec<CosmosMsg>> {
    // zero-amount sends are rejected by the bank module, skip them
    let mut msgs = vec![];
    if !fee.is_zero() {
        msgs.push(payout_msg(config, &config.manager, fee)?);
    }
    if !payout.is_zero() {
        msgs.push(payout_msg(config, winner, payout)?);
    }
    Ok(msgs)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Info {} => to_binary(&query_info(deps)?),
        QueryMsg::TicketCount { addr } => to_binary(&query_ticket_count(deps, addr)?),
        QueryMsg::Treasury {} => to_binary(&query_treasury(deps)?),
    }
}

pub fn query_info(deps: Deps) -> StdResult<InfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;
    Ok(InfoResponse {
        status: round.status.code(),
        strict: config.strict,
        ticket_price: config.ticket_cost.amount,
        participants: round.participants.len() as u32,
        max_participants: config.max_participants,
        deadline: round.deadline,
        max_duration: config.max_duration,
        total_tickets: round.total_tickets,
        total_bonded: round.total_bonded,
        fee_bps: config.fee_bps,
        manager: config.manager,
        payment_token: config.payment_token,
    })
}

pub fn query_ticket_count(deps: Deps, addr: Addr) -> StdResult<TicketCountResponse> {
    let round = ROUND.load(deps.storage)?;
    Ok(TicketCountResponse {
        tickets: round.participant(&addr).map(|player| player.tickets),
    })
}

pub fn query_treasury(deps: Deps) -> StdResult<TreasuryResponse> {
    let treasury = TREASURY.load(deps.storage)?;
    Ok(TreasuryResponse {
        fees_collected: treasury.fees_collected,
    })
}
