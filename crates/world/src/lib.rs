//! Death chests: keep a fallen actor's drops in a chest near where they
//! fell, and clear the chest away once it has been emptied.

mod block;
mod chest;
mod config;
mod effects;
mod error;
mod events;
mod lifecycle;
mod memory;
mod scheduler;
mod site;
mod system;
mod template;
pub mod transfer;
mod world;

pub use block::*;
pub use chest::*;
pub use config::*;
pub use effects::*;
pub use error::*;
pub use events::*;
pub use lifecycle::*;
pub use memory::*;
pub use scheduler::*;
pub use site::*;
pub use system::*;
pub use template::*;
pub use world::*;
