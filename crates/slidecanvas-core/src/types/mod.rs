//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` and lock-protected maps.
//! - [`ids`]: Identifier newtypes.

pub mod aliases;
pub mod ids;

pub use aliases::*;
pub use ids::OverlayId;
