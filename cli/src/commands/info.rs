use colored::*;
use macfind_common::config::Config;
use macfind_core::VendorSearch;

use crate::terminal::print;

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    let service = VendorSearch::from_config(cfg)?;

    let availability: ColoredString = if service.has_local_db() {
        "available".green()
    } else {
        "not found".yellow()
    };

    print::header("configuration");
    print::aligned_line("Database", cfg.db_path.display().to_string());
    print::aligned_line("Status", availability);
    print::aligned_line("Endpoint", cfg.endpoint.as_str());
    print::aligned_line("Timeout", format!("{}ms", cfg.timeout.as_millis()));
    Ok(())
}
