use anchor_lang::prelude::*;
use anchor_lang::Owner;
use crate::{
    constants::*,
    state::{Holder, Item, Ledger},
};

// Read-only instructions. Results are returned through Anchor return data;
// none of these contexts mark an account as mutable.

#[derive(Accounts)]
pub struct LedgerView<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,
}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct BalanceView<'info> {
    /// CHECK: may not exist yet; an uninitialized holder reads as a zero balance
    #[account(
        seeds = [HOLDER_SEED, account.as_ref()],
        bump
    )]
    pub holder: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(item_id: u64)]
pub struct ItemView<'info> {
    /// CHECK: may not exist yet; an unlisted item reads as price 0, stock 0
    #[account(
        seeds = [ITEM_SEED, item_id.to_le_bytes().as_ref()],
        bump
    )]
    pub item: UncheckedAccount<'info>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenMetadata {
    pub fn degen() -> Self {
        TokenMetadata {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            decimals: TOKEN_DECIMALS,
        }
    }
}

impl<'info> LedgerView<'info> {
    pub fn owner(&self) -> Pubkey {
        self.ledger.owner
    }

    pub fn total_supply(&self) -> u64 {
        self.ledger.total_supply
    }
}

impl<'info> BalanceView<'info> {
    pub fn balance_of(&self) -> Result<u64> {
        let holder = load_if_exists::<Holder>(&self.holder)?;
        Ok(holder.map_or(0, |holder| holder.balance))
    }
}

impl<'info> ItemView<'info> {
    pub fn item_price(&self) -> Result<u64> {
        Ok(self.listed_item()?.map_or(0, |item| item.price))
    }

    pub fn item_stock(&self) -> Result<u64> {
        Ok(self.listed_item()?.map_or(0, |item| item.stock))
    }

    pub fn item_name(&self) -> Result<String> {
        Ok(self.listed_item()?.map(|item| item.name).unwrap_or_default())
    }

    fn listed_item(&self) -> Result<Option<Item>> {
        let item = load_if_exists::<Item>(&self.item)?;
        Ok(item.filter(Item::is_listed))
    }
}

/// Deserializes a program account, or returns None if it was never created
pub fn load_if_exists<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + Owner,
{
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    let mut bytes: &[u8] = &data;
    Ok(Some(T::try_deserialize(&mut bytes)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::system_program;

    fn serialized<T: AccountSerialize>(account: &T) -> Vec<u8> {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn test_existing_holder_is_loaded() {
        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 1_000_000;
        let mut data = serialized(&Holder {
            owner: Pubkey::new_unique(),
            balance: 42,
            is_open: true,
            bump: 253,
        });
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);

        let holder = load_if_exists::<Holder>(&info).unwrap().unwrap();
        assert_eq!(holder.balance, 42);
        assert_eq!(holder.bump, 253);
    }

    #[test]
    fn test_missing_accounts_read_as_none() {
        let key = Pubkey::new_unique();
        let mut lamports = 0;

        let system_owner = system_program::ID;
        let mut empty: Vec<u8> = Vec::new();
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut empty, &system_owner, false, 0);
        assert!(load_if_exists::<Holder>(&info).unwrap().is_none());
        assert!(load_if_exists::<Item>(&info).unwrap().is_none());
    }

    #[test]
    fn test_foreign_owned_account_is_ignored() {
        let key = Pubkey::new_unique();
        let foreign = Pubkey::new_unique();
        let mut lamports = 1;
        let mut data = serialized(&Holder {
            owner: Pubkey::new_unique(),
            balance: 9,
            is_open: true,
            bump: 1,
        });
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &foreign, false, 0);

        assert!(load_if_exists::<Holder>(&info).unwrap().is_none());
    }

    #[test]
    fn test_reads_do_not_mutate_account_data() {
        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 1;
        let original = serialized(&Item {
            id: 1,
            name: "Healing Potion".to_string(),
            price: 3,
            stock: 10,
            bump: 250,
        });
        let mut data = original.clone();
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);

        for _ in 0..3 {
            let item = load_if_exists::<Item>(&info).unwrap().unwrap();
            assert_eq!((item.price, item.stock), (3, 10));
        }
        drop(info);
        assert_eq!(data, original);
    }

    #[test]
    fn test_token_metadata() {
        let metadata = TokenMetadata::degen();
        assert_eq!(metadata.name, "Degen");
        assert_eq!(metadata.symbol, "DGN");
        assert_eq!(metadata.decimals, 0);
    }
}
