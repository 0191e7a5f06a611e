use macfind_common::network::mac;

use crate::terminal::print;

pub fn oui(address: &str) -> anyhow::Result<()> {
    let oui = mac::parse(address)?;
    print::aligned_line("Address", address);
    print::aligned_line("OUI", oui.as_str());
    Ok(())
}
