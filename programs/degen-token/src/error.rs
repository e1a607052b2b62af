use anchor_lang::prelude::*;

/// Errors surfaced by the ledger and the item store
/// Messages match what clients assert on, so keep them stable
#[error_code]
pub enum DegenError {
    // Access control
    #[msg("Ownable: caller is not the owner")]
    Unauthorized,

    // Ledger
    #[msg("Transfer of more than 0 DGN is required!")]
    InvalidAmount,

    #[msg("Insufficient DGN to transfer")]
    InsufficientBalance,

    #[msg("Burn amount of more than 0 DGN is required!")]
    InvalidBurnAmount,

    #[msg("Insufficient amount of DGN to burn")]
    InsufficientBurnBalance,

    // Catalog
    #[msg("Supply a valid Item ID")]
    InvalidItemId,

    #[msg("Item ID Register must be greater than 0")]
    InvalidListingId,

    #[msg("Item Name cannot be empty")]
    InvalidItemName,

    #[msg("Item Name cannot exceed 32 bytes")]
    ItemNameTooLong,

    #[msg("Item price must be greater than 0")]
    InvalidItemPrice,

    // Redemption
    #[msg("No. of Items to Purchase must be more than 0")]
    InvalidQuantity,

    #[msg("Item out of Stock")]
    OutOfStock,

    #[msg("Cannot purchase more than the current stock!")]
    InsufficientStock,

    #[msg("Insufficient DGN Tokens")]
    InsufficientFunds,

    // Math
    #[msg("Mathematical overflow in calculations")]
    MathOverflow,
}

/// Helper function to safely add two u64 values
pub fn safe_add_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(DegenError::MathOverflow.into())
}

/// Helper function to safely subtract two u64 values
pub fn safe_sub_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(DegenError::MathOverflow.into())
}

/// Helper function to safely multiply two u64 values
pub fn safe_mul_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b).ok_or(DegenError::MathOverflow.into())
}

/// Asserts that an operation failed with exactly `expected`
#[cfg(test)]
pub(crate) fn assert_fails_with<T: std::fmt::Debug>(result: Result<T>, expected: DegenError) {
    let expected: anchor_lang::error::Error = expected.into();
    assert_eq!(result.unwrap_err(), expected);
}
