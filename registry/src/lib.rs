//! CMV Registry
//!
//! The registry indexes a set of modules for lookup by identifier and resolves
//! implementation inheritance. It is constructed once via `ModulesBuilder` (or
//! `Modules::from_modules`) and is immutable afterwards.

mod builder;
mod cycle;
mod modules;
mod resolve;

pub use builder::{ModulesBuilder, RegistryError, RegistryResult};
pub use cycle::find_cycle;
pub use modules::Modules;
pub use resolve::{collect, Contribution, Contributors, Inherited, Kind, Member};
