pub mod config;
pub mod report;
pub mod run;

use colored::Colorize;

pub use run::{RunOptions, RunResultCallback, execute_run};

pub fn print_banner() {
    let banner = r#"
             _
 _ __  _   _| |___  ___
| '_ \| | | | / __|/ _ \
| |_) | |_| | \__ \  __/
| .__/ \__,_|_|___/\___|
|_|
"#;
    println!("{}", banner.bright_cyan());
    println!(
        "{}",
        format!("  v{} - HTTP health-check probe", env!("CARGO_PKG_VERSION")).bright_white()
    );
    println!();
}
