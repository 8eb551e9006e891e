pub mod args;
pub mod menu;

pub use args::{Cli, Commands};
pub use menu::{Mode, choose_mode, run_menu};
