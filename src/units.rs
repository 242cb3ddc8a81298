use derive_more::{Add, AddAssign, Display, From, Into, Mul, Sum};

/// A physical length in inches.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Mul, Sum, Display, From,
    Into,
)]
pub struct In(pub f64);

/// A physical length in millimetres.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Mul, Sum, Display, From,
    Into,
)]
pub struct Mm(pub f64);

/// A length on the raster canvas, in pixels. Fractional values come out of
/// font metrics; they are only rounded when committed to the pixel grid.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Mul, Sum, Display, From,
    Into,
)]
pub struct Px(pub f64);

/// Millimetres per inch, the bridge between metric margins and DPI.
pub const MM_PER_INCH: f64 = 25.4;

impl In {
    /// Convert to whole canvas pixels at the given resolution. Negative
    /// lengths collapse to zero.
    pub fn to_px(self, dpi: f64) -> u32 {
        (self.0 * dpi).round().max(0.0) as u32
    }
}

impl Mm {
    /// Convert to whole canvas pixels at the given resolution. Negative
    /// lengths collapse to zero.
    pub fn to_px(self, dpi: f64) -> u32 {
        (self.0 * dpi / MM_PER_INCH).round().max(0.0) as u32
    }
}

impl Px {
    /// Commit to the pixel grid.
    pub fn round(self) -> u32 {
        self.0.round().max(0.0) as u32
    }
}
