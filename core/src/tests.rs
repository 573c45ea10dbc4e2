extern crate std;

use std::vec::Vec;

use embedded_graphics::{
    Drawable,
    pixelcolor::BinaryColor,
    prelude::{Dimensions, Point, Size},
    primitives::Rectangle,
};

use crate::{
    blit::{Blit, DrawTargetSurface, Surface, draw_pic},
    framebuffer::{Framebuffer, PixelStatus},
    pic::{self, Pic},
};

const FOREGROUND: i32 = 1;

/// Records every pixel-set call in order.
#[derive(Default)]
struct Recorder {
    calls: Vec<(i32, i32, i32)>,
}

impl Surface<i32> for Recorder {
    type Status = i32;

    fn set_pixel(&mut self, x: i32, y: i32, color: i32) -> i32 {
        self.calls.push((x, y, color));
        -1
    }
}

fn record(bitmap: &[u8], x: i32, y: i32) -> Vec<(i32, i32, i32)> {
    let mut recorder = Recorder::default();
    draw_pic(bitmap, x, y, &mut recorder, FOREGROUND);
    recorder.calls
}

#[test]
fn empty_dimensions_draw_nothing() {
    assert!(record(&[0, 0, 5, 0, 0xFF, 0xFF], 0, 0).is_empty());
    assert!(record(&[5, 0, 0, 0, 0xFF, 0xFF], 0, 0).is_empty());
    assert!(record(&[0, 0, 0, 0], 0, 0).is_empty());
}

#[test]
fn full_row_draws_left_to_right() {
    let calls = record(&[8, 0, 1, 0, 0xFF], 10, 20);
    let expected: Vec<_> = (0..8).map(|c| (10 + c, 20, FOREGROUND)).collect();
    assert_eq!(calls, expected);
}

#[test]
fn clear_bitmap_draws_nothing() {
    let bitmap = pic::encode(37, 11, |_, _| false);
    assert!(record(&bitmap, 3, 4).is_empty());
}

#[test]
fn padding_bits_are_never_drawn() {
    let calls = record(&[3, 0, 1, 0, 0xFF], 0, 0);
    assert_eq!(calls, [(0, 0, 1), (1, 0, 1), (2, 0, 1)]);

    let calls = record(&[3, 0, 1, 0, 0b0001_1111], 0, 0);
    assert!(calls.is_empty());
}

#[test]
fn rows_start_on_byte_boundaries() {
    // 10 wide: row 1 starts at the third data byte
    let bitmap = [10, 0, 2, 0, 0x00, 0x00, 0x80, 0x40];
    assert_eq!(record(&bitmap, 0, 0), [(0, 1, 1), (9, 1, 1)]);
}

#[test]
fn one_call_per_set_bit() {
    let bitmap = pic::encode(23, 17, |x, y| (x * 7 + y * 3) % 5 == 0);
    let expected = (0..17u16)
        .flat_map(|y| (0..23u16).map(move |x| (x, y)))
        .filter(|&(x, y)| (x * 7 + y * 3) % 5 == 0)
        .count();
    assert_eq!(record(&bitmap, 0, 0).len(), expected);
}

#[test]
fn coordinates_are_forwarded_verbatim() {
    let calls = record(&[2, 0, 2, 0, 0x80, 0x40], -5, -7);
    assert_eq!(calls, [(-5, -7, 1), (-4, -6, 1)]);

    let mut status = Vec::new();
    let mut fb = Framebuffer::default();
    let mut surface = |x: i32, y: i32, color: BinaryColor| {
        let result = fb.set_pixel(x, y, color);
        status.push(result);
        result
    };
    draw_pic(&[2, 0, 1, 0, 0xC0], -1, 0, &mut surface, BinaryColor::On);
    assert_eq!(status, [PixelStatus::Clipped, PixelStatus::Drawn]);
}

#[test]
fn translation_is_equivalent() {
    let bitmap = pic::encode(12, 5, |x, y| x % 3 == y % 2);
    let (x0, y0, dx, dy) = (4, -2, 13, 6);

    let direct = record(&bitmap, x0, y0);

    let mut recorder = Recorder::default();
    let mut shifted = |px: i32, py: i32, color: i32| recorder.set_pixel(px - dx, py - dy, color);
    draw_pic(&bitmap, x0 + dx, y0 + dy, &mut shifted, FOREGROUND);

    assert_eq!(direct, recorder.calls);
}

#[test]
fn drawing_twice_is_idempotent() {
    let bitmap = pic::encode(40, 30, |x, y| (x ^ y) & 4 == 0);
    let mut once = std::boxed::Box::new(Framebuffer::default());
    let mut twice = std::boxed::Box::new(Framebuffer::default());

    draw_pic(&bitmap, 7, 9, &mut *once, BinaryColor::On);
    draw_pic(&bitmap, 7, 9, &mut *twice, BinaryColor::On);
    draw_pic(&bitmap, 7, 9, &mut *twice, BinaryColor::On);

    assert_eq!(once.as_bytes(), twice.as_bytes());
}

#[test]
fn background_is_left_untouched() {
    let mut fb = std::boxed::Box::new(Framebuffer::default());
    fb.fill(BinaryColor::On);
    // Drawing "off" only where bits are set must leave the rest lit.
    draw_pic(&[2, 0, 1, 0, 0x40], 0, 0, &mut *fb, BinaryColor::Off);
    assert_eq!(fb.pixel(0, 0), Some(BinaryColor::On));
    assert_eq!(fb.pixel(1, 0), Some(BinaryColor::Off));
}

#[test]
fn foreground_is_caller_supplied() {
    let mut recorder = Recorder::default();
    draw_pic(&[1, 0, 1, 0, 0x80], 0, 0, &mut recorder, 0x5A);
    assert_eq!(recorder.calls, [(0, 0, 0x5A)]);
}

#[test]
fn truncated_body_reads_as_unset() {
    // header claims two rows, only one is present
    assert_eq!(record(&[8, 0, 2, 0, 0x01], 0, 0), [(7, 0, 1)]);
    assert!(record(&[8, 0], 0, 0).is_empty());
}

#[test]
fn draw_target_surface_matches_blit_drawable() {
    let bitmap = pic::encode(19, 13, |x, y| x * y % 4 == 1);
    let pic = Pic::parse(&bitmap).unwrap();

    let mut via_surface = std::boxed::Box::new(Framebuffer::default());
    draw_pic(
        &bitmap,
        5,
        6,
        &mut DrawTargetSurface(&mut *via_surface),
        BinaryColor::On,
    );

    let mut via_drawable = std::boxed::Box::new(Framebuffer::default());
    let blit = Blit::new(pic, Point::new(5, 6), BinaryColor::On);
    blit.draw(&mut *via_drawable).unwrap();

    assert_eq!(via_surface.as_bytes(), via_drawable.as_bytes());
    assert_eq!(
        blit.bounding_box(),
        Rectangle::new(Point::new(5, 6), Size::new(19, 13))
    );
}
