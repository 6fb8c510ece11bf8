use crate::device::BridgeDevice;

#[allow(dead_code)]
#[derive(Debug)]
pub(crate) struct UsbInfo<'a> {
    pub(crate) manufacturer: Option<&'a str>,
    pub(crate) product: Option<&'a str>,
    pub(crate) serial_number: Option<&'a str>,
    pub(crate) vendor_id: String,
    pub(crate) product_id: String,
    pub(crate) interface: i32,
    pub(crate) path: String,
}

impl<'a> From<&'a hidapi::DeviceInfo> for UsbInfo<'a> {
    fn from(info: &'a hidapi::DeviceInfo) -> Self {
        Self {
            manufacturer: info.manufacturer_string(),
            product: info.product_string(),
            serial_number: info.serial_number(),
            vendor_id: format!("{:#06X}", info.vendor_id()),
            product_id: format!("{:#06X}", info.product_id()),
            interface: info.interface_number(),
            path: info.path().to_string_lossy().to_string(),
        }
    }
}

pub(crate) fn print_info(device: &BridgeDevice) -> anyhow::Result<()> {
    println!("{:#?}", UsbInfo::from(&device.usb_device_info()?));
    Ok(())
}
