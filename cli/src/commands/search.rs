use colored::*;
use macfind_common::config::Config;
use macfind_common::vendors::{Resolution, VendorRecord};
use macfind_core::VendorSearch;

use crate::terminal::{print, spinner};

pub async fn search(address: &str, cfg: &Config) -> anyhow::Result<()> {
    let service = VendorSearch::from_config(cfg)?;

    spinner::start(format!("Looking up {}", address.bold()));
    let result = service.search(address).await;
    spinner::stop();

    let resolution: Resolution = result?;
    let vendor: ColoredString = match &resolution.record {
        VendorRecord::Vendor(name) => name.green().bold(),
        VendorRecord::Unresolvable => resolution.record.to_string().yellow(),
    };

    print::aligned_line("Address", address);
    print::aligned_line("Vendor", vendor);
    print::aligned_line("Source", resolution.source.to_string());
    Ok(())
}
