#[cfg(test)]
pub mod tests {
    use cosmwasm_std::coin;

    use crate::msg::InstantiateMsg;

    pub const TESTING_NATIVE_DENOM: &str = "ulotto";
    pub const TESTING_TICKET_COST: u128 = 1_000_000_u128;
    pub const TESTING_MAX_PARTICIPANTS: u32 = 5;
    pub const TESTING_MAX_DURATION: u64 = 100_u64;
    pub const TESTING_FEE_BPS: u64 = 250_u64;

    pub const TEST_MANAGER: &str = "manager";
    pub const TEST_USER_1: &str = "user1";
    pub const TEST_USER_2: &str = "user2";
    pub const TEST_USER_3: &str = "user3";

    pub fn instantiate_msg(strict: bool) -> InstantiateMsg {
        InstantiateMsg {
            strict,
            ticket_cost: coin(TESTING_TICKET_COST, TESTING_NATIVE_DENOM),
            max_participants: TESTING_MAX_PARTICIPANTS,
            max_duration: TESTING_MAX_DURATION,
            fee_bps: TESTING_FEE_BPS,
            manager: TEST_MANAGER.to_string(),
            payment_token: None,
            enforce_deadline: None,
        }
    }
}
