//! Profile store implementations
//!
//! - [`SharedConfigProfileStore`]: reads `~/.aws/config` style files
//! - [`InMemoryProfileStore`]: profiles held by the host process

mod memory;
pub mod shared_config;

pub use memory::InMemoryProfileStore;
pub use shared_config::SharedConfigProfileStore;
