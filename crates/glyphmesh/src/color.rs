/// An 8-bit-per-channel RGBA vertex colour.
///
/// ```
/// use glyphmesh::Color32;
///
/// let orange = Color32::from_hex_alpha(0xFF8800FF);
/// assert_eq!(orange, Color32::rgb(255, 136, 0));
/// ```
///
/// The struct is `#[repr(C)]` and `Pod`, so it sits directly inside
/// interleaved vertex records.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color32 {
    pub const WHITE: Color32 = Color32::rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::rgb(0, 0, 0);
    pub const TRANSPARENT: Color32 = Color32::new(0, 0, 0, 0);

    /// Create a colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a colour from a 32-bit RGBA hex value (e.g. `0xFF880080`).
    pub const fn from_hex_alpha(hex: u32) -> Self {
        Self {
            r: ((hex >> 24) & 0xFF) as u8,
            g: ((hex >> 16) & 0xFF) as u8,
            b: ((hex >> 8) & 0xFF) as u8,
            a: (hex & 0xFF) as u8,
        }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color32 {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for Color32 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}
