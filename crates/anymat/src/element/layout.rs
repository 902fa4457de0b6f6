//! Fixed-width byte layout for primitive scalars.
//!
//! Records are always little-endian, so a raw matrix has the same bytes on
//! every platform.

/// A scalar with a fixed little-endian byte encoding.
pub trait FixedWidth: Copy {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Encode into `out`, which must be exactly `WIDTH` bytes.
    fn store(self, out: &mut [u8]);

    /// Decode from `bytes`, which must be exactly `WIDTH` bytes.
    fn load(bytes: &[u8]) -> Self;
}

macro_rules! impl_fixed_width {
    ($($t:ty),* $(,)?) => {
        $(
            impl FixedWidth for $t {
                const WIDTH: usize = core::mem::size_of::<$t>();

                #[inline]
                fn store(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn load(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; core::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_fixed_width!(i8, i16, i32, i64, i128, f32, f64);
