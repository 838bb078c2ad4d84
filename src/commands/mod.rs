mod config;
mod context;
mod export;
mod init;
mod report;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::{color_choice_to_mode, effective_filter, load_config, today};
pub use export::{run_export, run_export_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use report::{run_report, run_report_impl};
