use anchor_lang::prelude::*;
use crate::{constants::*, error::DegenError, state::Holder};

// Accounts needed to move tokens from the signer to another identity
#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct TransferTokens<'info> {
    // The sender (must sign the transaction)
    #[account(mut)]
    pub sender: Signer<'info>,

    // Sender balance; created empty if the sender was never credited
    #[account(
        init_if_needed,
        payer = sender,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, sender.key().as_ref()],
        bump
    )]
    pub sender_holder: Account<'info, Holder>,

    // Recipient balance; the sender pays for it on first transfer
    #[account(
        init_if_needed,
        payer = sender,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, to.as_ref()],
        bump
    )]
    pub recipient_holder: Account<'info, Holder>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

impl<'info> TransferTokens<'info> {
    pub fn transfer_tokens(
        &mut self,
        to: Pubkey,
        amount: u64,
        bumps: &TransferTokensBumps,
    ) -> Result<()> {
        let from = self.sender.key();

        self.sender_holder.open(from, bumps.sender_holder);
        self.recipient_holder.open(to, bumps.recipient_holder);

        settle_transfer(
            &from,
            &to,
            &mut self.sender_holder,
            &mut self.recipient_holder,
            amount,
        )?;

        emit!(TokensTransferred { from, to, amount });

        msg!("Transfer complete!");
        msg!("From: {}", from);
        msg!("To: {}", to);
        msg!("Amount: {} {}", amount, TOKEN_SYMBOL);
        msg!("Sender balance: {}", self.sender_holder.balance);

        Ok(())
    }
}

/// Checks a transfer without touching any balance
pub fn validate_transfer(sender: &Holder, amount: u64) -> Result<()> {
    require!(amount > 0, DegenError::InvalidAmount);
    require!(sender.has_at_least(amount), DegenError::InsufficientBalance);
    Ok(())
}

/// Settles a transfer from `from` to `to`
///
/// When both keys match, `sender` and `recipient` are two copies of the same
/// account: the transfer is validated and every balance is left as is.
pub fn settle_transfer(
    from: &Pubkey,
    to: &Pubkey,
    sender: &mut Holder,
    recipient: &mut Holder,
    amount: u64,
) -> Result<()> {
    if from == to {
        return validate_transfer(sender, amount);
    }

    apply_transfer(sender, recipient, amount)
}

/// Moves `amount` between two distinct holders
pub fn apply_transfer(sender: &mut Holder, recipient: &mut Holder, amount: u64) -> Result<()> {
    validate_transfer(sender, amount)?;

    sender.debit(amount)?;
    recipient.credit(amount)
}
