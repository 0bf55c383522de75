//! Notepad kernel: pattern capture, resolution, and the cooldown that follows.
//!
//! Everything here runs on one logical context. Time only moves through `Reactor::tick_step`.

pub mod capture;
pub mod cooldown;
pub mod event;
pub mod reactor;
pub mod resolver;
pub mod scheduler;
pub mod spell;
pub mod state;
pub mod telemetry;
pub mod time;
