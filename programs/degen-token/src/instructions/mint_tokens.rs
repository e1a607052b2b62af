use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/// Mint new tokens to any identity
///
/// Only the ledger owner can call this instruction. The recipient's holder
/// account is created on first use, paid for by the owner.
#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct MintTokens<'info> {
    /// Caller; must be the ledger owner
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global ledger state (PDA)
    ///
    /// Seeds: ["ledger"]
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Recipient balance (PDA)
    ///
    /// Seeds: ["holder", to]
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, to.as_ref()],
        bump
    )]
    pub recipient_holder: Account<'info, Holder>,

    pub system_program: Program<'info, System>,
}

/// Mint event - emitted for off-chain tracking
#[event]
pub struct TokensMinted {
    pub to: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}

impl<'info> MintTokens<'info> {
    pub fn mint_tokens(&mut self, to: Pubkey, amount: u64, bumps: &MintTokensBumps) -> Result<()> {
        msg!("🪙 Minting {} {} to {}", amount, TOKEN_SYMBOL, to);

        self.recipient_holder.open(to, bumps.recipient_holder);
        apply_mint(
            &mut self.ledger,
            &mut self.recipient_holder,
            &self.authority.key(),
            amount,
        )?;

        emit!(TokensMinted {
            to,
            amount,
            total_supply: self.ledger.total_supply,
        });

        msg!("✅ Minted");
        msg!("   Recipient balance: {}", self.recipient_holder.balance);
        msg!("   Total supply: {}", self.ledger.total_supply);

        Ok(())
    }
}

/// Owner-gated mint: grows the recipient balance and the total supply by `amount`
pub fn apply_mint(
    ledger: &mut Ledger,
    recipient: &mut Holder,
    caller: &Pubkey,
    amount: u64,
) -> Result<()> {
    ledger.require_owner(caller)?;

    // Supply bounds every balance, so crediting cannot overflow once this passes
    ledger.record_mint(amount)?;
    recipient.credit(amount)
}
