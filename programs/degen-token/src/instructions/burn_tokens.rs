use anchor_lang::prelude::*;
use crate::{
    constants::*,
    error::DegenError,
    state::{Holder, Ledger},
};

// Accounts needed to destroy tokens held by the signer
#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(mut)]
    pub burner: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    // Created empty for identities that never held tokens, so the amount checks still run
    #[account(
        init_if_needed,
        payer = burner,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, burner.key().as_ref()],
        bump
    )]
    pub burner_holder: Account<'info, Holder>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensBurned {
    pub from: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}

impl<'info> BurnTokens<'info> {
    pub fn burn_tokens(&mut self, amount: u64, bumps: &BurnTokensBumps) -> Result<()> {
        let from = self.burner.key();
        self.burner_holder.open(from, bumps.burner_holder);

        apply_burn(&mut self.ledger, &mut self.burner_holder, amount)?;

        emit!(TokensBurned {
            from,
            amount,
            total_supply: self.ledger.total_supply,
        });

        msg!("🔥 Burned {} {} from {}", amount, TOKEN_SYMBOL, from);
        msg!("   Remaining balance: {}", self.burner_holder.balance);
        msg!("   Total supply: {}", self.ledger.total_supply);

        Ok(())
    }
}

/// Destroys `amount` of the holder's tokens and shrinks the supply to match
pub fn apply_burn(ledger: &mut Ledger, holder: &mut Holder, amount: u64) -> Result<()> {
    require!(amount > 0, DegenError::InvalidBurnAmount);
    require!(holder.has_at_least(amount), DegenError::InsufficientBurnBalance);

    holder.debit(amount)?;
    ledger.record_burn(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_fails_with;

    fn setup(balance: u64) -> (Ledger, Holder) {
        let ledger = Ledger {
            owner: Pubkey::new_unique(),
            total_supply: balance,
            bump: 255,
        };
        let holder = Holder {
            owner: Pubkey::new_unique(),
            balance,
            is_open: true,
            bump: 255,
        };
        (ledger, holder)
    }

    #[test]
    fn test_burn_reduces_balance_and_supply() {
        let (mut ledger, mut addr1) = setup(100);

        apply_burn(&mut ledger, &mut addr1, 50).unwrap();

        assert_eq!(addr1.balance, 50);
        assert_eq!(ledger.total_supply, 50);
    }

    #[test]
    fn test_burn_of_zero_fails() {
        let (mut ledger, mut addr1) = setup(100);

        assert_fails_with(
            apply_burn(&mut ledger, &mut addr1, 0),
            DegenError::InvalidBurnAmount,
        );
        assert_eq!(addr1.balance, 100);
    }

    #[test]
    fn test_burn_more_than_balance_fails() {
        let (mut ledger, mut addr1) = setup(50);

        assert_fails_with(
            apply_burn(&mut ledger, &mut addr1, 100),
            DegenError::InsufficientBurnBalance,
        );
        assert_eq!(addr1.balance, 50);
        assert_eq!(ledger.total_supply, 50);
    }

    #[test]
    fn test_burn_entire_balance() {
        let (mut ledger, mut addr1) = setup(7);

        apply_burn(&mut ledger, &mut addr1, 7).unwrap();

        assert_eq!(addr1.balance, 0);
        assert_eq!(ledger.total_supply, 0);
    }
}
