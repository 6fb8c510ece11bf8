use clap::{Parser, ValueEnum, value_parser};
use e220_bridge::Parameters;
use e220_bridge::settings::{self as radio, Options1, Options2, SpeedSettings, TransmissionMethod};

use crate::device::BridgeDevice;
use crate::util;

#[derive(Debug, Parser)]
pub(crate) struct ParameterChanges {
    /// Keep the new configuration only until the module is powered off.
    #[arg(long, default_value = "false")]
    pub volatile: bool,
    #[command(flatten)]
    pub settings: Settings,
}

#[derive(Debug, Parser)]
#[group(required = true, multiple = true)]
pub(crate) struct Settings {
    /// Module address in hexadecimal (0xFFFF to hear every address)
    #[arg(long, value_parser = util::u16_from_hex)]
    pub address: Option<u16>,
    /// Radio channel (the upper limit depends on the module's band)
    #[arg(long, value_parser = value_parser!(u8).range(0..=83))]
    pub channel: Option<u8>,
    /// UART baud rate between the module and the bridge
    #[arg(long)]
    pub baud: Option<Baud>,
    /// UART parity between the module and the bridge
    #[arg(long)]
    pub parity: Option<Parity>,
    /// Over-the-air data rate in kbps
    #[arg(long)]
    pub air_rate: Option<AirRate>,
    /// Maximum packet length in bytes
    #[arg(long)]
    pub packet_length: Option<PacketLength>,
    /// Enable the ambient noise RSSI register
    #[arg(long)]
    pub noise_rssi: Option<bool>,
    /// Transmit power in dBm
    #[arg(long)]
    pub tx_power: Option<TxPower>,
    /// Append an RSSI byte to every received packet
    #[arg(long)]
    pub rssi_byte: Option<bool>,
    /// Treat the first three bytes of each packet as address and channel
    #[arg(long)]
    pub fixed_transmission: Option<bool>,
    /// Listen before talk
    #[arg(long)]
    pub lbt: Option<bool>,
    /// Wake-on-radio cycle in milliseconds
    #[arg(long)]
    pub wor_cycle: Option<WorCycle>,
}

impl Settings {
    pub(crate) fn merge_into_existing(&self, parameters: &mut Parameters) {
        if let Some(address) = self.address {
            parameters.set_address(address);
        }
        if let Some(channel) = self.channel {
            parameters.channel = channel;
        }

        // Air rate patterns 000 to 010 all decode as 2.4k, so only re-encode
        // SPED when asked to.
        if self.baud.is_some() || self.parity.is_some() || self.air_rate.is_some() {
            let mut speed = parameters.speed_settings();
            if let Some(baud) = self.baud {
                speed.baud_rate = baud.into();
            }
            if let Some(parity) = self.parity {
                speed.parity = parity.into();
            }
            if let Some(air_rate) = self.air_rate {
                speed.air_data_rate = air_rate.into();
            }
            parameters.set_speed_settings(speed);
        }

        let mut options1 = parameters.options1();
        if let Some(packet_length) = self.packet_length {
            options1.packet_length = packet_length.into();
        }
        if let Some(noise_rssi) = self.noise_rssi {
            options1.ambient_noise_rssi = noise_rssi;
        }
        if let Some(tx_power) = self.tx_power {
            options1.tx_power = tx_power.into();
        }
        parameters.set_options1(options1);

        let mut options2 = parameters.options2();
        if let Some(rssi_byte) = self.rssi_byte {
            options2.rssi_byte = rssi_byte;
        }
        if let Some(fixed) = self.fixed_transmission {
            options2.transmission_method = if fixed {
                TransmissionMethod::Fixed
            } else {
                TransmissionMethod::Transparent
            };
        }
        if let Some(lbt) = self.lbt {
            options2.listen_before_talk = lbt;
        }
        if let Some(wor_cycle) = self.wor_cycle {
            options2.wor_cycle = wor_cycle.into();
        }
        parameters.set_options2(options2);
    }
}

#[allow(dead_code)]
#[derive(Debug)]
struct Decoded {
    address: String,
    channel: u8,
    speed: SpeedSettings,
    options1: Options1,
    options2: Options2,
}

impl From<&Parameters> for Decoded {
    fn from(parameters: &Parameters) -> Self {
        Self {
            address: format!("{:#06X}", parameters.address()),
            channel: parameters.channel,
            speed: parameters.speed_settings(),
            options1: parameters.options1(),
            options2: parameters.options2(),
        }
    }
}

fn print_parameters(parameters: &Parameters, raw: bool) {
    if raw {
        println!("{:02X?}", parameters.to_bytes());
    } else {
        println!("{:#?}", Decoded::from(parameters));
    }
}

pub(crate) fn read_action(device: &BridgeDevice, raw: bool) -> anyhow::Result<()> {
    print_parameters(&device.read_parameters()?, raw);
    Ok(())
}

pub(crate) fn write_action(device: &BridgeDevice, changes: ParameterChanges) -> anyhow::Result<()> {
    let current = device.read_parameters()?;
    let mut requested = current;
    changes.settings.merge_into_existing(&mut requested);
    if requested == current {
        println!("Configuration unchanged.");
        return Ok(());
    }

    let echoed = device.write_parameters(requested, !changes.volatile)?;
    if echoed != requested {
        println!(
            "The module adjusted the requested configuration {:02X?}.",
            requested.to_bytes()
        );
    }
    print_parameters(&echoed, false);
    Ok(())
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Baud {
    #[value(name = "1200")]
    _1200,
    #[value(name = "2400")]
    _2400,
    #[value(name = "4800")]
    _4800,
    #[value(name = "9600")]
    _9600,
    #[value(name = "19200")]
    _19200,
    #[value(name = "38400")]
    _38400,
    #[value(name = "57600")]
    _57600,
    #[value(name = "115200")]
    _115200,
}

impl From<Baud> for radio::BaudRate {
    fn from(value: Baud) -> Self {
        use radio::BaudRate::*;
        match value {
            Baud::_1200 => Bps1200,
            Baud::_2400 => Bps2400,
            Baud::_4800 => Bps4800,
            Baud::_9600 => Bps9600,
            Baud::_19200 => Bps19200,
            Baud::_38400 => Bps38400,
            Baud::_57600 => Bps57600,
            Baud::_115200 => Bps115200,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Parity {
    /// 8N1
    None,
    /// 8O1
    Odd,
    /// 8E1
    Even,
}

impl From<Parity> for radio::UartParity {
    fn from(value: Parity) -> Self {
        match value {
            Parity::None => radio::UartParity::None,
            Parity::Odd => radio::UartParity::Odd,
            Parity::Even => radio::UartParity::Even,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum AirRate {
    #[value(name = "2.4")]
    _2_4,
    #[value(name = "4.8")]
    _4_8,
    #[value(name = "9.6")]
    _9_6,
    #[value(name = "19.2")]
    _19_2,
    #[value(name = "38.4")]
    _38_4,
    #[value(name = "62.5")]
    _62_5,
}

impl From<AirRate> for radio::AirDataRate {
    fn from(value: AirRate) -> Self {
        use radio::AirDataRate::*;
        match value {
            AirRate::_2_4 => Kbps2_4,
            AirRate::_4_8 => Kbps4_8,
            AirRate::_9_6 => Kbps9_6,
            AirRate::_19_2 => Kbps19_2,
            AirRate::_38_4 => Kbps38_4,
            AirRate::_62_5 => Kbps62_5,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum PacketLength {
    #[value(name = "200")]
    _200,
    #[value(name = "128")]
    _128,
    #[value(name = "64")]
    _64,
    #[value(name = "32")]
    _32,
}

impl From<PacketLength> for radio::PacketLength {
    fn from(value: PacketLength) -> Self {
        use radio::PacketLength::*;
        match value {
            PacketLength::_200 => Bytes200,
            PacketLength::_128 => Bytes128,
            PacketLength::_64 => Bytes64,
            PacketLength::_32 => Bytes32,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum TxPower {
    #[value(name = "22")]
    _22,
    #[value(name = "17")]
    _17,
    #[value(name = "13")]
    _13,
    #[value(name = "10")]
    _10,
}

impl From<TxPower> for radio::TxPower {
    fn from(value: TxPower) -> Self {
        use radio::TxPower::*;
        match value {
            TxPower::_22 => Dbm22,
            TxPower::_17 => Dbm17,
            TxPower::_13 => Dbm13,
            TxPower::_10 => Dbm10,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum WorCycle {
    #[value(name = "500")]
    _500,
    #[value(name = "1000")]
    _1000,
    #[value(name = "1500")]
    _1500,
    #[value(name = "2000")]
    _2000,
    #[value(name = "2500")]
    _2500,
    #[value(name = "3000")]
    _3000,
    #[value(name = "3500")]
    _3500,
    #[value(name = "4000")]
    _4000,
}

impl From<WorCycle> for radio::WorCycle {
    fn from(value: WorCycle) -> Self {
        use radio::WorCycle::*;
        match value {
            WorCycle::_500 => Ms500,
            WorCycle::_1000 => Ms1000,
            WorCycle::_1500 => Ms1500,
            WorCycle::_2000 => Ms2000,
            WorCycle::_2500 => Ms2500,
            WorCycle::_3000 => Ms3000,
            WorCycle::_3500 => Ms3500,
            WorCycle::_4000 => Ms4000,
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use e220_bridge::Parameters;

    use crate::cli::{Cli, Commands};

    fn merged(args: &[&str]) -> Parameters {
        let cli = Cli::try_parse_from(["e220-cli", "write"].iter().chain(args)).unwrap();
        let Commands::Write(changes) = cli.command else {
            panic!("not a write command");
        };
        let mut parameters = Parameters::desired_default();
        changes.settings.merge_into_existing(&mut parameters);
        parameters
    }

    #[test]
    fn changes_only_named_settings() {
        let parameters = merged(&["--baud", "115200", "--parity", "even"]);
        assert_eq!(parameters.to_bytes(), [0xFF, 0xFF, 0xFA, 0x03, 0x17, 0x03]);
    }

    #[test]
    fn address_and_options() {
        let parameters = merged(&[
            "--address",
            "0x1234",
            "--channel",
            "5",
            "--rssi-byte",
            "true",
            "--fixed-transmission",
            "true",
            "--tx-power",
            "22",
        ]);
        assert_eq!(parameters.to_bytes(), [0x12, 0x34, 0x62, 0x00, 0x05, 0xC3]);
    }

    #[test]
    fn write_needs_a_setting() {
        assert!(Cli::try_parse_from(["e220-cli", "write", "--volatile"]).is_err());
    }

    #[test]
    fn channel_is_range_checked() {
        assert!(Cli::try_parse_from(["e220-cli", "write", "--channel", "84"]).is_err());
    }
}
