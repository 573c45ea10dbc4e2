use std::fmt::Write;

use calanim_core::framebuffer::Framebuffer;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::OriginDimensions};

/// Renders the framebuffer as text, `#` for lit pixels.
pub fn render(fb: &Framebuffer) -> String {
    let size = fb.size();
    let mut out = String::with_capacity((size.width as usize + 1) * size.height as usize);
    for y in 0..size.height as i32 {
        for x in 0..size.width as i32 {
            let c = match fb.pixel(x, y) {
                Some(BinaryColor::On) => '#',
                _ => '.',
            };
            out.push(c);
        }
        let _ = writeln!(out);
    }
    out
}
