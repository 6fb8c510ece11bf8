use anyhow::{Context, anyhow, ensure};
use e220_bridge::Parameters;
use e220_bridge::host_command::{HostRequest, HostResponse, REPORT_LEN};
use hidapi::{HidApi, HidDevice};

/// How long to wait for the bridge to answer a report.
///
/// Covers two mode switches and the module's own response timeout.
const RESPONSE_TIMEOUT_MS: i32 = 3000;

/// The bridge's HID configuration interface.
pub(crate) struct BridgeDevice {
    inner: HidDevice,
}

impl BridgeDevice {
    /// Open the first bridge found with the given vendor and product ID.
    pub(crate) fn connect_with_vid_and_pid(
        vendor_id: u16,
        product_id: u16,
    ) -> anyhow::Result<Self> {
        let hidapi = HidApi::new()?;
        let inner = hidapi.open(vendor_id, product_id).with_context(|| {
            format!("no bridge with VID {vendor_id:#06X} and PID {product_id:#06X}")
        })?;
        Ok(Self { inner })
    }

    pub(crate) fn read_parameters(&self) -> anyhow::Result<Parameters> {
        self.transfer(&HostRequest::ReadParameters)
    }

    pub(crate) fn write_parameters(
        &self,
        parameters: Parameters,
        persist: bool,
    ) -> anyhow::Result<Parameters> {
        self.transfer(&HostRequest::WriteParameters {
            parameters,
            persist,
        })
    }

    pub(crate) fn usb_device_info(&self) -> anyhow::Result<hidapi::DeviceInfo> {
        Ok(self.inner.get_device_info()?)
    }

    /// Send one request report and read the bridge's response.
    fn transfer(&self, request: &HostRequest) -> anyhow::Result<Parameters> {
        // hidapi wants the report number first; the bridge has only report 0.
        let mut out = [0u8; REPORT_LEN + 1];
        out[1..].copy_from_slice(&request.to_report());
        let written = self.inner.write(&out)?;
        ensure!(written == out.len(), "wrote {written} of {} bytes", out.len());

        let mut read_buffer = [0u8; REPORT_LEN];
        let read = self.inner.read_timeout(&mut read_buffer, RESPONSE_TIMEOUT_MS)?;
        ensure!(read > 0, "no response from the bridge");

        HostResponse::from_report(request, &read_buffer[..read])?
            .parameters
            .ok_or_else(|| anyhow!("the bridge could not reach the radio module"))
    }
}
