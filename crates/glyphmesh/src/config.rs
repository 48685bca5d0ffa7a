use crate::storage::VertexLayout;

/// What newly grown interleaved records contain.
///
/// Split arrays always receive default attribute values. Interleaved records
/// have historically been left zeroed, on the assumption that the layout
/// engine rewrites every record before it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthFill {
    /// Grown records are all-zero bytes.
    #[default]
    Zeroed,
    /// Grown records are [`TextVertex::DEFAULT`](crate::TextVertex::DEFAULT).
    Defaults,
}

/// Construction parameters for a [`VertexBuffer`](crate::VertexBuffer).
///
/// # Example
///
/// ```
/// use glyphmesh::{BufferConfig, GrowthFill, VertexBuffer, VertexLayout};
///
/// let buffer = VertexBuffer::with_config(
///     BufferConfig::small()
///         .with_layout(VertexLayout::Interleaved)
///         .with_growth_fill(GrowthFill::Defaults),
/// );
/// assert_eq!(buffer.capacity_quads(), 32);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BufferConfig {
    /// Physical attribute layout. Default: split arrays.
    pub layout: VertexLayout,
    /// Quads allocated up front. Clamped to [`MAX_QUADS`](crate::MAX_QUADS).
    pub initial_quads: usize,
    /// Fill for interleaved records added by construction or growth.
    pub growth_fill: GrowthFill,
}

impl BufferConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Short labels and single words.
    pub fn small() -> Self {
        Self {
            initial_quads: 32,
            ..Default::default()
        }
    }

    /// Paragraph-sized text.
    pub fn large() -> Self {
        Self {
            initial_quads: 1024,
            ..Default::default()
        }
    }

    pub fn with_layout(mut self, layout: VertexLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_initial_quads(mut self, quads: usize) -> Self {
        self.initial_quads = quads;
        self
    }

    pub fn with_growth_fill(mut self, fill: GrowthFill) -> Self {
        self.growth_fill = fill;
        self
    }
}
