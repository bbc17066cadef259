//! In-memory Rgb565 surface.
//!
//! `Canvas` implements `DrawTarget` over a borrowed pixel slice. It owns no
//! memory, so a caller can keep one framebuffer and wrap it in a new canvas
//! every frame. Writes outside the surface are dropped.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Row-major Rgb565 surface backed by a borrowed slice.
pub struct Canvas<'a> {
    pixels: &'a mut [Rgb565],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// Wrap `pixels` as a `width` x `height` surface.
    ///
    /// Returns `None` if the slice is shorter than `width * height`.
    pub fn new(
        pixels: &'a mut [Rgb565],
        width: u32,
        height: u32,
    ) -> Option<Self> {
        let needed = width as usize * height as usize;
        if pixels.len() < needed {
            return None;
        }
        Some(Self { pixels, width, height })
    }

    /// Color at `p`, or `None` outside the surface.
    pub fn pixel(
        &self,
        p: Point,
    ) -> Option<Rgb565> {
        self.index(p.x, p.y).map(|idx| self.pixels[idx])
    }

    /// Fill the whole surface with one color.
    pub fn clear_buffer(
        &mut self,
        color: Rgb565,
    ) {
        let len = self.width as usize * self.height as usize;
        self.pixels[..len].fill(color);
    }

    #[inline]
    fn index(
        &self,
        x: i32,
        y: i32,
    ) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }
}

impl OriginDimensions for Canvas<'_> {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl DrawTarget for Canvas<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Colors are laid out over the full area, so clipped points still consume one
        for (point, color) in area.points().zip(colors) {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let x_start = drawable_area.top_left.x as usize;
        let width = drawable_area.size.width as usize;
        let stride = self.width as usize;

        for y in drawable_area.rows() {
            let row_start = y as usize * stride + x_start;
            self.pixels[row_start..row_start + width].fill(color);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
