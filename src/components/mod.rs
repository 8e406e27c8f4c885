mod connect_button;
mod media_view;
mod nft_mint;
mod quantity_selector;
pub mod toast;

pub use nft_mint::NftMint;
pub use toast::{ToastHost, ToastStore};
