use anchor_lang::prelude::*;

use crate::error::{safe_add_u64, safe_mul_u64, safe_sub_u64, DegenError};

// Global program state: who may mint and list items, and how many tokens exist
#[account]
#[derive(InitSpace)]
pub struct Ledger {
    // Identity allowed to mint and manage the catalog
    pub owner: Pubkey,
    // Sum of every holder balance
    pub total_supply: u64,
    // Bump seed for PDA
    pub bump: u8,
}

impl Ledger {
    /// Guard for owner-only instructions
    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, DegenError::Unauthorized);
        Ok(())
    }

    pub fn record_mint(&mut self, amount: u64) -> Result<()> {
        self.total_supply = safe_add_u64(self.total_supply, amount)?;
        Ok(())
    }

    pub fn record_burn(&mut self, amount: u64) -> Result<()> {
        self.total_supply = safe_sub_u64(self.total_supply, amount)?;
        Ok(())
    }
}

// Token balance of a single identity
#[account]
#[derive(InitSpace)]
pub struct Holder {
    // Identity this balance belongs to
    pub owner: Pubkey,
    // Current token balance
    pub balance: u64,
    // Set on first use; the default key is a valid owner, so `owner` cannot mark this
    pub is_open: bool,
    // Bump seed for PDA
    pub bump: u8,
}

impl Holder {
    /// A freshly created holder account is all zeroes, so `is_open` reads false
    pub fn is_initialized(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self, owner: Pubkey, bump: u8) {
        if !self.is_initialized() {
            self.owner = owner;
            self.balance = 0;
            self.is_open = true;
            self.bump = bump;
        }
    }

    pub fn has_at_least(&self, amount: u64) -> bool {
        self.balance >= amount
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = safe_add_u64(self.balance, amount)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(self.has_at_least(amount), DegenError::InsufficientBalance);
        self.balance -= amount;
        Ok(())
    }
}

// Redeemable catalog entry
#[account]
#[derive(InitSpace)]
pub struct Item {
    // Item id (unique, never 0 once listed)
    pub id: u64,
    // Display name
    #[max_len(32)] // MAX_ITEM_NAME_LEN
    pub name: String,
    // Token cost per unit
    pub price: u64,
    // Units left to redeem
    pub stock: u64,
    // Bump seed for PDA
    pub bump: u8,
}

impl Item {
    /// Items that were never listed have id 0 and no stock
    pub fn is_listed(&self) -> bool {
        self.id != 0
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    pub fn cost_of(&self, quantity: u64) -> Result<u64> {
        safe_mul_u64(self.price, quantity)
    }

    pub fn take_stock(&mut self, quantity: u64) -> Result<()> {
        require!(quantity <= self.stock, DegenError::InsufficientStock);
        self.stock -= quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_fails_with;

    fn holder(balance: u64) -> Holder {
        Holder {
            owner: Pubkey::new_unique(),
            balance,
            is_open: true,
            bump: 255,
        }
    }

    #[test]
    fn test_require_owner() {
        let owner = Pubkey::new_unique();
        let ledger = Ledger {
            owner,
            total_supply: 0,
            bump: 255,
        };

        assert!(ledger.require_owner(&owner).is_ok());
        assert_fails_with(
            ledger.require_owner(&Pubkey::new_unique()),
            DegenError::Unauthorized,
        );
    }

    #[test]
    fn test_supply_bookkeeping() {
        let mut ledger = Ledger {
            owner: Pubkey::default(),
            total_supply: 10,
            bump: 0,
        };

        ledger.record_mint(5).unwrap();
        assert_eq!(ledger.total_supply, 15);
        ledger.record_burn(15).unwrap();
        assert_eq!(ledger.total_supply, 0);
        assert!(ledger.record_burn(1).is_err());

        ledger.total_supply = u64::MAX;
        assert_fails_with(ledger.record_mint(1), DegenError::MathOverflow);
    }

    #[test]
    fn test_holder_credit_and_debit() {
        let mut account = holder(50);

        account.credit(25).unwrap();
        assert_eq!(account.balance, 75);

        account.debit(75).unwrap();
        assert_eq!(account.balance, 0);

        assert_fails_with(account.debit(1), DegenError::InsufficientBalance);
        assert_eq!(account.balance, 0);
    }

    #[test]
    fn test_holder_open_only_once() {
        let mut account = Holder {
            owner: Pubkey::default(),
            balance: 0,
            is_open: false,
            bump: 0,
        };
        assert!(!account.is_initialized());

        let first = Pubkey::new_unique();
        account.open(first, 7);
        account.credit(10).unwrap();
        account.open(Pubkey::new_unique(), 9);

        assert_eq!(account.owner, first);
        assert_eq!(account.balance, 10);
        assert_eq!(account.bump, 7);
    }

    #[test]
    fn test_holder_for_default_key_opens_once() {
        let mut account = Holder {
            owner: Pubkey::default(),
            balance: 0,
            is_open: false,
            bump: 0,
        };

        account.open(Pubkey::default(), 3);
        account.credit(25).unwrap();
        account.open(Pubkey::default(), 3);

        assert!(account.is_initialized());
        assert_eq!(account.balance, 25);
    }

    #[test]
    fn test_item_stock_and_cost() {
        let mut item = Item {
            id: 2,
            name: "Mythril Sword".to_string(),
            price: 50,
            stock: 10,
            bump: 0,
        };

        assert!(item.is_listed());
        assert_eq!(item.cost_of(5).unwrap(), 250);

        item.take_stock(10).unwrap();
        assert!(item.is_out_of_stock());
        assert_fails_with(item.take_stock(1), DegenError::InsufficientStock);

        item.price = u64::MAX;
        assert!(item.cost_of(2).is_err());
    }
}
