//! Panel geometry of the ST7305 mono TFT.
//!
//! Both dimensions can be overridden at build time through the
//! `DISPLAY_WIDTH` and `DISPLAY_HEIGHT` environment variables.

/// Portrait X pixels
pub const DISPLAY_WIDTH: usize = parse_dimension(option_env!("DISPLAY_WIDTH"), 168);
/// Portrait Y pixels
pub const DISPLAY_HEIGHT: usize = parse_dimension(option_env!("DISPLAY_HEIGHT"), 384);

/// Bytes per packed framebuffer row.
pub const DISPLAY_STRIDE: usize = DISPLAY_WIDTH.div_ceil(8);
pub const BUFFER_SIZE: usize = DISPLAY_STRIDE * DISPLAY_HEIGHT;

const fn parse_dimension(value: Option<&str>, default: usize) -> usize {
    let Some(value) = value else {
        return default;
    };
    let bytes = value.as_bytes();
    assert!(!bytes.is_empty(), "display dimension must not be empty");

    let mut result = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(digit.is_ascii_digit(), "display dimension must be a decimal number");
        result = result * 10 + (digit - b'0') as usize;
        i += 1;
    }
    assert!(result > 0, "display dimension must not be zero");
    result
}
