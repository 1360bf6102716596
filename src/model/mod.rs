//! Plain data types shared by the actors, clients and controller.

pub mod id;
pub mod kitchen;
pub mod menu;
pub mod money;
pub mod order;

pub use id::*;
pub use kitchen::*;
pub use menu::*;
pub use money::*;
pub use order::*;
