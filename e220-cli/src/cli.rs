use crate::parameters::ParameterChanges;
use crate::util;

use clap::Parser;

/// CLI for the E220 LoRa USB bridge
///
/// The bridge relays data between a USB serial port and an EBYTE E220 radio
/// module. This tool uses the bridge's separate HID interface to read and
/// change the module's configuration registers.
///
/// Writing the configuration briefly interrupts the relay. If the UART baud
/// rate or parity changes, the bridge follows it automatically.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// Device vendor ID in hexadecimal
    #[arg(short, long = "vid", default_value = "0x2E8A", value_parser = util::u16_from_hex)]
    pub(crate) vid: u16,
    /// Device product ID in hexadecimal
    #[arg(short, long = "pid", default_value = "0x000A", value_parser = util::u16_from_hex)]
    pub(crate) pid: u16,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// Read the module configuration.
    Read {
        /// Print the six register bytes instead of the decoded settings.
        #[arg(long, default_value = "false")]
        raw: bool,
    },
    /// Change the module configuration.
    ///
    /// Settings not given keep their current value.
    #[command(flatten_help = true)]
    Write(ParameterChanges),
    /// Show the bridge's USB device information.
    Info,
}
