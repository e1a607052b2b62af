#![allow(unexpected_cfgs, deprecated)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod state;
pub mod instructions;

use instructions::*;

declare_id!("DGNtkn6wPXkH2b1CzT8n6mMZq5Yd8gD2ytVRuGqgk9Fs");

#[program]
pub mod degen_token {
    use super::*;

    /// Create the ledger with the signer as owner and list the seed catalog
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    /// Identity allowed to mint and list items
    pub fn owner(ctx: Context<LedgerView>) -> Result<Pubkey> {
        Ok(ctx.accounts.owner())
    }

    pub fn total_supply(ctx: Context<LedgerView>) -> Result<u64> {
        Ok(ctx.accounts.total_supply())
    }

    pub fn token_metadata(_ctx: Context<LedgerView>) -> Result<TokenMetadata> {
        Ok(TokenMetadata::degen())
    }

    /// Balance of any identity; 0 if it never held tokens
    pub fn balance_of(ctx: Context<BalanceView>, account: Pubkey) -> Result<u64> {
        msg!("Balance lookup for {}", account);
        ctx.accounts.balance_of()
    }

    /// Owner only: create `amount` new tokens for `to`
    pub fn mint(ctx: Context<MintTokens>, to: Pubkey, amount: u64) -> Result<()> {
        ctx.accounts.mint_tokens(to, amount, &ctx.bumps)
    }

    /// Move tokens from the signer to `to`
    pub fn transfer(ctx: Context<TransferTokens>, to: Pubkey, amount: u64) -> Result<()> {
        ctx.accounts.transfer_tokens(to, amount, &ctx.bumps)
    }

    /// Destroy tokens held by the signer
    pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        ctx.accounts.burn_tokens(amount, &ctx.bumps)
    }

    /// Owner only: list a new item or overwrite an existing one
    pub fn add_item(
        ctx: Context<AddItem>,
        item_id: u64,
        name: String,
        price: u64,
        stock: u64,
    ) -> Result<()> {
        let listing = ItemListing {
            id: item_id,
            name,
            price,
            stock,
        };
        ctx.accounts.add_item(listing, &ctx.bumps)
    }

    /// Price of an item; 0 if the id was never listed
    pub fn item_price(ctx: Context<ItemView>, item_id: u64) -> Result<u64> {
        msg!("Price lookup for item {}", item_id);
        ctx.accounts.item_price()
    }

    /// Remaining stock of an item; 0 if the id was never listed
    pub fn item_stock(ctx: Context<ItemView>, item_id: u64) -> Result<u64> {
        msg!("Stock lookup for item {}", item_id);
        ctx.accounts.item_stock()
    }

    pub fn item_name(ctx: Context<ItemView>, item_id: u64) -> Result<String> {
        msg!("Name lookup for item {}", item_id);
        ctx.accounts.item_name()
    }

    /// Spend tokens on `quantity` units of an item; the tokens are burned
    pub fn redeem(ctx: Context<RedeemItem>, item_id: u64, quantity: u64) -> Result<()> {
        ctx.accounts.redeem_item(item_id, quantity, &ctx.bumps)
    }
}
