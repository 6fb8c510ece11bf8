use clap::Parser;

use cli::Commands;
use device::BridgeDevice;

mod cli;
mod device;
mod parameters;
mod usb;
mod util;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let device = BridgeDevice::connect_with_vid_and_pid(cli.vid, cli.pid)?;
    match cli.command {
        Commands::Read { raw } => parameters::read_action(&device, raw)?,
        Commands::Write(changes) => parameters::write_action(&device, changes)?,
        Commands::Info => usb::print_info(&device)?,
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::cli::Cli;

    use clap::CommandFactory;

    #[test]
    fn check_cli_debug_asserts() {
        Cli::command().debug_assert();
    }
}
