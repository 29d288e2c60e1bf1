pub mod initialize;
pub mod earn;
pub mod create_category;
pub mod configure;
pub mod mint_staked;
pub mod purchase;
pub mod publish_root;
pub mod claim;
pub mod create_collection;
pub mod resize_collection;
pub mod redeem;

pub use initialize::*;
pub use earn::*;
pub use create_category::*;
pub use configure::*;
pub use mint_staked::*;
pub use purchase::*;
pub use publish_root::*;
pub use claim::*;
pub use create_collection::*;
pub use resize_collection::*;
pub use redeem::*;
