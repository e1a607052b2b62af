use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::DegenError;
use crate::state::*;

/// Add or replace an item in the store catalog
///
/// This instruction lets the ledger owner list items users can redeem:
/// 1. Checks the caller is the owner
/// 2. Validates the id, name and price
/// 3. Writes the Item account, creating it on first listing
///
/// Listing an existing id overwrites its name, price and stock.
#[derive(Accounts)]
#[instruction(item_id: u64)]
pub struct AddItem<'info> {
    /// Caller; must be the ledger owner
    /// Pays for the item account when the id is new
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global ledger state (PDA)
    /// Read for the owner key only
    ///
    /// Seeds: ["ledger"]
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Catalog entry (PDA)
    ///
    /// Seeds: ["item", item_id]
    /// Space: Item::INIT_SPACE
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Item::INIT_SPACE,
        seeds = [ITEM_SEED, item_id.to_le_bytes().as_ref()],
        bump
    )]
    pub item: Account<'info, Item>,

    pub system_program: Program<'info, System>,
}

/// Listing event - emitted whenever the catalog changes
#[event]
pub struct ItemListed {
    pub item_id: u64,
    pub name: String,
    pub price: u64,
    pub stock: u64,
    /// true when an existing item was overwritten
    pub relisted: bool,
}

/// Parameters of a catalog listing
#[derive(Clone, Debug, PartialEq)]
pub struct ItemListing {
    pub id: u64,
    pub name: String,
    pub price: u64,
    pub stock: u64,
}

impl<'info> AddItem<'info> {
    pub fn add_item(&mut self, listing: ItemListing, bumps: &AddItemBumps) -> Result<()> {
        msg!("📦 Listing item {}", listing.id);
        msg!("   Name: {}", listing.name);
        msg!("   Price: {} {}", listing.price, TOKEN_SYMBOL);
        msg!("   Stock: {}", listing.stock);

        let relisted = apply_listing(
            &self.ledger,
            &self.authority.key(),
            &mut self.item,
            listing,
            bumps.item,
        )?;

        emit!(ItemListed {
            item_id: self.item.id,
            name: self.item.name.clone(),
            price: self.item.price,
            stock: self.item.stock,
            relisted,
        });

        msg!("✅ Item listed");
        msg!("   Item Address: {}", self.item.key());
        msg!("   Replaced existing listing: {}", relisted);

        Ok(())
    }
}

/// Validates listing parameters in the order clients expect errors
pub fn validate_listing(listing: &ItemListing) -> Result<()> {
    require!(is_valid_item_id(listing.id), DegenError::InvalidListingId);
    require!(!listing.name.is_empty(), DegenError::InvalidItemName);
    require!(fits_item_name(&listing.name), DegenError::ItemNameTooLong);
    require!(listing.price > 0, DegenError::InvalidItemPrice);
    Ok(())
}

/// Owner-gated upsert of a catalog entry
///
/// # Returns
/// * `bool` - true if an already listed item was overwritten
pub fn apply_listing(
    ledger: &Ledger,
    caller: &Pubkey,
    item: &mut Item,
    listing: ItemListing,
    bump: u8,
) -> Result<bool> {
    ledger.require_owner(caller)?;
    validate_listing(&listing)?;

    let relisted = item.is_listed();
    item.set(listing, bump);

    Ok(relisted)
}

impl Item {
    fn set(&mut self, listing: ItemListing, bump: u8) {
        self.id = listing.id;
        self.name = listing.name;
        self.price = listing.price;
        self.stock = listing.stock;
        self.bump = bump;
    }
}
