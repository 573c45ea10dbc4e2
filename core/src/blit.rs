use embedded_graphics::{
    Drawable, Pixel,
    prelude::{Dimensions, DrawTarget, OriginDimensions, PixelColor, Point},
    primitives::Rectangle,
};
use log::trace;

use crate::pic::{Pic, bit_set};

/// Anything a bitmap can be painted onto, one pixel at a time.
///
/// The blitter hands coordinates over verbatim, including negative and
/// off-panel ones, and never looks at the returned status. Clipping and
/// error policy belong to the implementation.
pub trait Surface<C> {
    type Status;

    fn set_pixel(&mut self, x: i32, y: i32, color: C) -> Self::Status;
}

impl<C, R, F> Surface<C> for F
where
    F: FnMut(i32, i32, C) -> R,
{
    type Status = R;

    fn set_pixel(&mut self, x: i32, y: i32, color: C) -> R {
        self(x, y, color)
    }
}

/// Exposes an embedded-graphics [`DrawTarget`] as a [`Surface`].
pub struct DrawTargetSurface<'a, D>(pub &'a mut D);

impl<D: DrawTarget> Surface<D::Color> for DrawTargetSurface<'_, D> {
    type Status = Result<(), D::Error>;

    fn set_pixel(&mut self, x: i32, y: i32, color: D::Color) -> Self::Status {
        self.0.draw_iter(core::iter::once(Pixel(Point::new(x, y), color)))
    }
}

/// Paints the set bits of a packed 1-bit resource with `color`, the top
/// left corner landing on (`x`, `y`). Unset bits are left untouched so the
/// picture composites onto whatever is already drawn.
///
/// The header is trusted: a resource shorter than its header draws nothing
/// and rows missing from the body read as unset.
pub fn draw_pic<C, S>(bitmap: &[u8], x: i32, y: i32, surface: &mut S, color: C)
where
    C: Copy,
    S: Surface<C> + ?Sized,
{
    Pic::trusted(bitmap).draw(x, y, surface, color);
}

impl Pic<'_> {
    /// See [`draw_pic`].
    pub fn draw<C, S>(&self, x: i32, y: i32, surface: &mut S, color: C)
    where
        C: Copy,
        S: Surface<C> + ?Sized,
    {
        trace!(
            "Blitting {}x{} pic at ({}, {})",
            self.width(),
            self.height(),
            x,
            y
        );
        for r in 0..self.height() {
            let row = self.row(r);
            let py = y.wrapping_add(r as i32);
            for c in 0..self.width() {
                if bit_set(row, c) {
                    let _ = surface.set_pixel(x.wrapping_add(c as i32), py, color);
                }
            }
        }
    }
}

/// A [`Pic`] placed at an origin, drawn in a single foreground colour.
#[derive(Debug, Clone, Copy)]
pub struct Blit<'a, C> {
    pic: Pic<'a>,
    origin: Point,
    color: C,
}

impl<'a, C: PixelColor> Blit<'a, C> {
    pub fn new(pic: Pic<'a>, origin: Point, color: C) -> Self {
        Blit { pic, origin, color }
    }
}

impl<C: PixelColor> Drawable for Blit<'_, C> {
    type Color = C;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let (origin, color) = (self.origin, self.color);
        target.draw_iter(
            self.pic
                .set_pixels()
                .map(|point| Pixel(origin + point, color)),
        )
    }
}

impl<C> Dimensions for Blit<'_, C> {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(self.origin, self.pic.size())
    }
}
