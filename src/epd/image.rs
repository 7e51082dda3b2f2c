use ndarray::Array2;

/// Anything the panel can display: a 1-bit bitmap with known dimensions
/// and a packed representation.
pub trait DisplayImage {
    /// Bits per pixel. The panel only accepts 1.
    fn pixel_depth(&self) -> u8;

    fn size(&self) -> (u32, u32);

    /// Pack the pixels into a continuous bit stream, row-major and
    /// most-significant-bit first, `ceil(width * height / 8)` bytes with
    /// no per-row padding.
    fn to_packed_bits(&self) -> Vec<u8>;
}

/// A monochrome bitmap, one byte per pixel internally (0 = black, 1 = white).
pub struct MonoImage {
    pixels: Array2<u8>,
}

impl MonoImage {
    pub fn new(width: u32, height: u32) -> MonoImage {
        MonoImage {
            pixels: Array2::zeros((height as usize, width as usize)),
        }
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        self.pixels[[y as usize, x as usize]] = on as u8;
    }

    pub fn width(&self) -> u32 {
        self.pixels.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.pixels.nrows() as u32
    }
}

impl DisplayImage for MonoImage {
    fn pixel_depth(&self) -> u8 {
        1
    }

    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn to_packed_bits(&self) -> Vec<u8> {
        let mut packed = vec![0u8; (self.pixels.len() + 7) / 8];
        for (ix, px) in self.pixels.iter().enumerate() {
            if *px != 0 {
                packed[ix / 8] |= 0x80 >> (ix % 8);
            }
        }
        return packed;
    }
}
