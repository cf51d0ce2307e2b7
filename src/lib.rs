pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod key;
pub mod traits;
pub mod types;
#[cfg(feature = "tui")]
pub mod ui;

pub use crate::config::{Config, ConfigError};
pub use crate::engine::{Engine, EngineBuilder, compute};
pub use crate::error::CalcError;
pub use crate::key::{InputEvent, KeyCode, KeyEvent, Modifiers};
pub use crate::traits::{Clipboard, MemoryClipboard};
pub use crate::types::{Action, DisplayMode, EngineSnapshot, Operator};
