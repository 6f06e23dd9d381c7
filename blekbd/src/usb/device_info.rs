/// Identity the device enumerates with.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceInfo {
    pub manufacturer: &'static str,
    pub vendor_id: u16,
    pub product_id: u16,
    pub product_name: &'static str,
    pub serial_number: &'static str,
}
