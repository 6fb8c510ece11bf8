pub(crate) fn u16_from_hex(value: &str) -> Result<u16, std::num::ParseIntError> {
    let s = if value.to_ascii_lowercase().starts_with("0x") {
        &value[2..]
    } else {
        value
    };
    u16::from_str_radix(s, 16)
}

#[cfg(test)]
mod test {
    use super::u16_from_hex;

    #[test]
    fn hex_with_and_without_prefix() {
        assert_eq!(u16_from_hex("0x2E8A"), Ok(0x2E8A));
        assert_eq!(u16_from_hex("0X000a"), Ok(0x000A));
        assert_eq!(u16_from_hex("ffff"), Ok(0xFFFF));
        assert!(u16_from_hex("0x").is_err());
        assert!(u16_from_hex("10000").is_err());
    }
}
