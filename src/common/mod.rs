pub mod bit_utils;
pub mod codec;
pub mod ec;
pub mod metadata;
pub mod utils;

pub use bit_utils::*;
pub use codec::*;
pub use ec::*;
pub use metadata::*;
pub use utils::*;
