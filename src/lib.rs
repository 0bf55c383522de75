pub mod config;
pub mod kernel;
pub mod outputs;

// Types a host game needs to build a reactor and read its outcomes
pub use config::{ConfigError, NotepadConfig};
pub use kernel::event::{Event, Notification, SpellCast};
pub use kernel::reactor::Reactor;
pub use kernel::spell::{SpellData, SpellType};
