//! Host bindings for the proxy capabilities
//!
//! Asset ids and account identities are canonical address bytes. Token
//! operations go to the CW20 contract at the asset's address; cross-chain
//! dispatches go to the configured manager contract. Writes are queued as
//! messages and run after `execute` returns, so a failing token or manager
//! contract aborts the whole transaction.

use cosmwasm_std::{
    to_json_binary, Addr, Api, Binary, CanonicalAddr, CosmosMsg, QuerierWrapper, StdResult,
    Uint128, Uint256, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::msg::CcmcExecuteMsg;
use crate::proxy::{CrossChainManager, TokenCapability};

/// Canonical bytes of a bech32 address
pub fn canonical_bytes(api: &dyn Api, addr: &Addr) -> StdResult<Binary> {
    Ok(Binary::from(api.addr_canonicalize(addr.as_str())?.as_slice()))
}

fn humanize(api: &dyn Api, bytes: &[u8]) -> StdResult<Addr> {
    api.addr_humanize(&CanonicalAddr::from(bytes))
}

// ============================================================================
// CW20 Tokens
// ============================================================================

pub struct Cw20Token<'a> {
    querier: QuerierWrapper<'a>,
    api: &'a dyn Api,
    this_contract: Binary,
    messages: Vec<CosmosMsg>,
}

impl<'a> Cw20Token<'a> {
    pub fn new(querier: QuerierWrapper<'a>, api: &'a dyn Api, this_contract: Binary) -> Self {
        Self {
            querier,
            api,
            this_contract,
            messages: vec![],
        }
    }

    /// Transfers queued by this binding, in call order
    pub fn into_messages(self) -> Vec<CosmosMsg> {
        self.messages
    }

    fn transfer_msg(
        &self,
        asset_id: &[u8],
        from: &[u8],
        to: &[u8],
        amount: Uint256,
    ) -> StdResult<CosmosMsg> {
        let token = humanize(self.api, asset_id)?;
        let recipient = humanize(self.api, to)?.to_string();
        let amount = Uint128::try_from(amount)?;

        // Custody leaves with a plain transfer; deposits use the allowance
        // granted to this contract by `from`.
        let msg = if from == self.this_contract.as_slice() {
            Cw20ExecuteMsg::Transfer { recipient, amount }
        } else {
            Cw20ExecuteMsg::TransferFrom {
                owner: humanize(self.api, from)?.to_string(),
                recipient,
                amount,
            }
        };

        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        }))
    }
}

impl TokenCapability for Cw20Token<'_> {
    fn balance_of(&self, asset_id: &[u8], holder: &[u8]) -> StdResult<Uint256> {
        let token = humanize(self.api, asset_id)?;
        let holder = humanize(self.api, holder)?;
        let response: BalanceResponse = self.querier.query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: holder.to_string(),
            },
        )?;
        Ok(Uint256::from(response.balance))
    }

    fn transfer(&mut self, asset_id: &[u8], from: &[u8], to: &[u8], amount: Uint256) -> bool {
        match self.transfer_msg(asset_id, from, to, amount) {
            Ok(msg) => {
                self.messages.push(msg);
                true
            }
            Err(_) => false,
        }
    }
}

// ============================================================================
// Cross-Chain Manager
// ============================================================================

pub struct CcmcRelay {
    manager: Addr,
    messages: Vec<CosmosMsg>,
}

impl CcmcRelay {
    pub fn new(manager: Addr) -> Self {
        Self {
            manager,
            messages: vec![],
        }
    }

    pub fn into_messages(self) -> Vec<CosmosMsg> {
        self.messages
    }
}

impl CrossChainManager for CcmcRelay {
    fn cross_chain(
        &mut self,
        to_chain_id: u64,
        to_proxy: &[u8],
        method: &str,
        args: &[u8],
    ) -> bool {
        let msg = CcmcExecuteMsg::CrossChain {
            to_chain_id,
            to_contract: Binary::from(to_proxy),
            method: method.to_string(),
            tx_data: Binary::from(args),
        };
        match to_json_binary(&msg) {
            Ok(msg) => {
                self.messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: self.manager.to_string(),
                    msg,
                    funds: vec![],
                }));
                true
            }
            Err(_) => false,
        }
    }
}
