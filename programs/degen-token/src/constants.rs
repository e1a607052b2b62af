/// PDA SEEDS - deterministic seeds for every account the program owns

/// Global ledger PDA seed
/// A single account holding the owner key and the total supply
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Holder PDA seed - one balance account per identity
/// Combined with the holder's public key
pub const HOLDER_SEED: &[u8] = b"holder";

/// Catalog item PDA seed - one account per item id
/// Combined with the little-endian item id
pub const ITEM_SEED: &[u8] = b"item";

/// TOKEN METADATA

pub const TOKEN_NAME: &str = "Degen";
pub const TOKEN_SYMBOL: &str = "DGN";

/// Tokens are whole units only
pub const TOKEN_DECIMALS: u8 = 0;

/// CATALOG CONSTRAINTS

/// Maximum length for item names (in bytes)
/// Item accounts are sized for this many bytes of name
pub const MAX_ITEM_NAME_LEN: usize = 32;

/// Catalog entry created when the program is initialized
pub struct SeedItem {
    pub id: u64,
    pub name: &'static str,
    pub price: u64,
    pub stock: u64,
}

/// The store opens with these three items
pub const SEED_CATALOG: [SeedItem; 3] = [
    SeedItem { id: 1, name: "Healing Potion", price: 3, stock: 10 },
    SeedItem { id: 2, name: "Mythril Sword", price: 50, stock: 10 },
    SeedItem { id: 3, name: "Ice Tome", price: 35, stock: 10 },
];

/// VALIDATION FUNCTIONS

/// Item ids start at 1; zero is reserved as "no item"
pub fn is_valid_item_id(item_id: u64) -> bool {
    item_id > 0
}

/// Checks that an item name fits in the account
///
/// # Arguments
/// * `name` - The item name
///
/// # Returns
/// * `bool` - true if the name is at most `MAX_ITEM_NAME_LEN` bytes
pub fn fits_item_name(name: &str) -> bool {
    name.len() <= MAX_ITEM_NAME_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_ids_are_valid_and_unique() {
        for (index, item) in SEED_CATALOG.iter().enumerate() {
            assert!(is_valid_item_id(item.id));
            assert!(fits_item_name(item.name));
            assert!(item.price > 0);
            assert!(SEED_CATALOG[index + 1..].iter().all(|other| other.id != item.id));
        }
    }

    #[test]
    fn test_validation_functions() {
        assert!(!is_valid_item_id(0));
        assert!(is_valid_item_id(1));

        assert!(fits_item_name("Fire Tome"));
        assert!(fits_item_name(&"a".repeat(MAX_ITEM_NAME_LEN)));
        assert!(!fits_item_name(&"a".repeat(MAX_ITEM_NAME_LEN + 1)));
    }
}
