use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::DegenError;
use crate::state::*;

/// Redeem tokens for catalog items
///
/// This instruction exchanges a holder's tokens for units of an item:
/// 1. Validates the item id, quantity, stock and the buyer's balance
/// 2. Reduces the item's stock by the quantity
/// 3. Debits the buyer by price * quantity
/// 4. Burns the spent tokens (the total supply shrinks by the same amount)
///
/// Either every step applies or none does.
#[derive(Accounts)]
#[instruction(item_id: u64)]
pub struct RedeemItem<'info> {
    /// User redeeming the item
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Global ledger state (PDA)
    /// Updated because redeemed tokens leave circulation
    ///
    /// Seeds: ["ledger"]
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Buyer balance (PDA)
    /// An identity that never held tokens reads as an empty balance
    ///
    /// Seeds: ["holder", buyer.key()]
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, buyer.key().as_ref()],
        bump
    )]
    pub buyer_holder: Account<'info, Holder>,

    /// Item being redeemed (PDA)
    /// An id that was never listed reads as an item with no stock
    ///
    /// Seeds: ["item", item_id]
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Item::INIT_SPACE,
        seeds = [ITEM_SEED, item_id.to_le_bytes().as_ref()],
        bump
    )]
    pub item: Account<'info, Item>,

    pub system_program: Program<'info, System>,
}

/// Redemption event - emitted for off-chain fulfilment
#[event]
pub struct ItemRedeemed {
    pub buyer: Pubkey,
    pub item_id: u64,
    pub quantity: u64,
    pub tokens_spent: u64,
    pub remaining_stock: u64,
    pub timestamp: i64,
}

impl<'info> RedeemItem<'info> {
    pub fn redeem_item(
        &mut self,
        item_id: u64,
        quantity: u64,
        bumps: &RedeemItemBumps,
    ) -> Result<()> {
        let buyer = self.buyer.key();

        msg!("🎁 Processing redemption");
        msg!("   Buyer: {}", buyer);
        msg!("   Item ID: {}", item_id);
        msg!("   Quantity: {}", quantity);

        self.buyer_holder.open(buyer, bumps.buyer_holder);

        let tokens_spent = apply_redemption(
            &mut self.ledger,
            &mut self.buyer_holder,
            &mut self.item,
            item_id,
            quantity,
        )?;

        emit!(ItemRedeemed {
            buyer,
            item_id,
            quantity,
            tokens_spent,
            remaining_stock: self.item.stock,
            timestamp: Clock::get()?.unix_timestamp,
        });

        msg!("✅ Redeemed {} x {}", quantity, self.item.name);
        msg!("   Spent: {} {}", tokens_spent, TOKEN_SYMBOL);
        msg!("   New balance: {}", self.buyer_holder.balance);
        msg!("   Remaining stock: {}", self.item.stock);
        msg!("   Total supply: {}", self.ledger.total_supply);

        Ok(())
    }
}

/// Runs every redemption check, in order, without mutating anything
///
/// # Returns
/// * `u64` - the token cost of the redemption
pub fn redemption_cost(item_id: u64, quantity: u64, item: &Item, buyer: &Holder) -> Result<u64> {
    require!(is_valid_item_id(item_id), DegenError::InvalidItemId);
    require!(quantity > 0, DegenError::InvalidQuantity);
    require!(!item.is_out_of_stock(), DegenError::OutOfStock);
    require!(quantity <= item.stock, DegenError::InsufficientStock);

    let cost = item.cost_of(quantity)?;
    require!(buyer.has_at_least(cost), DegenError::InsufficientFunds);

    Ok(cost)
}

/// Validates, then takes stock, debits the buyer and burns the spent tokens
pub fn apply_redemption(
    ledger: &mut Ledger,
    buyer: &mut Holder,
    item: &mut Item,
    item_id: u64,
    quantity: u64,
) -> Result<u64> {
    let cost = redemption_cost(item_id, quantity, item, buyer)?;

    item.take_stock(quantity)?;
    buyer.debit(cost)?;
    ledger.record_burn(cost)?;

    Ok(cost)
}
