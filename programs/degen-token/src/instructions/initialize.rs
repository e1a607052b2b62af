use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/// Initialize the ledger and open the store
///
/// This instruction sets up the whole program:
/// 1. Creates the global Ledger account and records the signer as owner
/// 2. Creates the three catalog items every store starts with
///
/// It can only succeed once, since the ledger PDA exists afterwards.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer; becomes the owner and pays for every account below
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Global ledger state (PDA)
    ///
    /// Seeds: ["ledger"]
    #[account(
        init,
        payer = owner,
        space = 8 + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Seed catalog entries (PDAs)
    ///
    /// Seeds: ["item", item_id]
    #[account(
        init,
        payer = owner,
        space = 8 + Item::INIT_SPACE,
        seeds = [ITEM_SEED, SEED_CATALOG[0].id.to_le_bytes().as_ref()],
        bump
    )]
    pub first_item: Account<'info, Item>,

    #[account(
        init,
        payer = owner,
        space = 8 + Item::INIT_SPACE,
        seeds = [ITEM_SEED, SEED_CATALOG[1].id.to_le_bytes().as_ref()],
        bump
    )]
    pub second_item: Account<'info, Item>,

    #[account(
        init,
        payer = owner,
        space = 8 + Item::INIT_SPACE,
        seeds = [ITEM_SEED, SEED_CATALOG[2].id.to_le_bytes().as_ref()],
        bump
    )]
    pub third_item: Account<'info, Item>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        msg!("🏗️ Initializing Degen ledger");

        self.ledger.set_inner(Ledger {
            owner: self.owner.key(),
            total_supply: 0,
            bump: bumps.ledger,
        });

        self.first_item.set_inner(seed_item(&SEED_CATALOG[0], bumps.first_item));
        self.second_item.set_inner(seed_item(&SEED_CATALOG[1], bumps.second_item));
        self.third_item.set_inner(seed_item(&SEED_CATALOG[2], bumps.third_item));

        msg!("✅ Ledger initialized");
        msg!("   Owner: {}", self.owner.key());
        msg!("   Token: {} ({})", TOKEN_NAME, TOKEN_SYMBOL);
        for entry in SEED_CATALOG.iter() {
            msg!(
                "   Item {}: {} - {} {} x{}",
                entry.id,
                entry.name,
                entry.price,
                TOKEN_SYMBOL,
                entry.stock
            );
        }

        Ok(())
    }
}

/// Builds the on-chain record for a seed catalog entry
pub fn seed_item(entry: &SeedItem, bump: u8) -> Item {
    Item {
        id: entry.id,
        name: entry.name.to_string(),
        price: entry.price,
        stock: entry.stock,
        bump,
    }
}
