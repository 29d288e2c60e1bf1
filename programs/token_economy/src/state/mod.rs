pub mod config_state;
pub mod category_state;
pub mod collection_state;
pub mod cooldown_state;
pub mod round_state;
pub mod claim_state;
pub mod nonce_state;

pub use config_state::*;
pub use category_state::*;
pub use collection_state::*;
pub use cooldown_state::*;
pub use round_state::*;
pub use claim_state::*;
pub use nonce_state::*;
