use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ContractError {
    #[error("{0}")]
    Std(cosmwasm_std::StdError),

    #[error("Caller is not the manager")]
    Unauthorized {},

    #[error("INCORRECT_TICKETS_AMOUNT")]
    InvalidTicketCount {},

    #[error("INCORRECT_TICKETS_COST")]
    InvalidPayment {},

    #[error("IMPOSSIBLE_TO_BUY_MORE")]
    DuplicateEntry {},

    #[error("The lottery is not accepting entries for this round.")]
    RoundClosed {},

    #[error("The lottery has already been deactivated.")]
    AlreadyTerminated {},

    #[error("ARITHMETIC_OVERFLOW")]
    ArithmeticOverflow {},

    #[error("The winner could not be determined for this round.")]
    WinnerUnavailable {},

    #[error("The ticket price must be greater than zero.")]
    InvalidTicketPrice {},

    #[error("The fee must be below 10000 basis points.")]
    InvalidFeeRate {},

    #[error("The lottery needs room for at least one participant.")]
    InvalidMaxParticipants {},
}

impl From<cosmwasm_std::StdError> for ContractError {
    fn from(err: cosmwasm_std::StdError) -> Self {
        ContractError::Std(err)
    }
}

impl From<cosmwasm_std::OverflowError> for ContractError {
    fn from(_err: cosmwasm_std::OverflowError) -> Self {
        ContractError::ArithmeticOverflow {}
    }
}

impl From<cosmwasm_std::CheckedMultiplyRatioError> for ContractError {
    fn from(_err: cosmwasm_std::CheckedMultiplyRatioError) -> Self {
        ContractError::ArithmeticOverflow {}
    }
}

impl From<cw_utils::PaymentError> for ContractError {
    fn from(err: cw_utils::PaymentError) -> Self {
        match err {
            cw_utils::PaymentError::MissingDenom(_) => ContractError::InvalidPayment {},
            cw_utils::PaymentError::ExtraDenom(_) => ContractError::InvalidPayment {},
            cw_utils::PaymentError::MultipleDenoms { .. } => ContractError::InvalidPayment {},
            cw_utils::PaymentError::NoFunds { .. } => ContractError::InvalidPayment {},
            cw_utils::PaymentError::NonPayable { .. } => ContractError::InvalidPayment {},
        }
    }
}
