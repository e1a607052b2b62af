/// Instructions module for the Degen program
///
/// Each instruction lives in its own file: the Accounts context, its handler,
/// and the plain functions that hold the business rules.

pub mod initialize;
pub mod mint_tokens;
pub mod transfer_tokens;
pub mod burn_tokens;
pub mod add_item;
pub mod redeem_item;
pub mod views;

// Re-export instruction handlers for use in lib.rs
pub use initialize::*;
pub use mint_tokens::*;
pub use transfer_tokens::*;
pub use burn_tokens::*;
pub use add_item::*;
pub use redeem_item::*;
pub use views::*;
