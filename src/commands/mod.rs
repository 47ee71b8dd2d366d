pub mod check;
mod context;
pub mod init;
pub mod layout;

pub use check::{run_check, run_check_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use layout::{run_layout, run_layout_impl};
