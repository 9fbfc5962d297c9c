use std::io::{self, ErrorKind};
use std::num::NonZeroUsize;

use crate::constants::{HIGH_BITS_MASK, PRESENCE_MARKER_MASK, THREE_BIT_MASK, TWO_BIT_MASK};
use crate::grid::{Pixel, PixelGrid};

/// 编码时对 alpha 通道的处理策略。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlphaPolicy {
    /// 保留载体像素原有的 alpha 值。
    #[default]
    Preserve,
    /// 将被触及像素的 alpha 强制为完全不透明 (255)。
    ForceOpaque,
}

/// 编码器与解码器共享的配置。两端的 `stride` 必须一致，否则无法恢复数据。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StegConfig {
    pub stride: NonZeroUsize,
    pub alpha: AlphaPolicy,
}

impl Default for StegConfig {
    fn default() -> Self {
        Self {
            stride: NonZeroUsize::MIN,
            alpha: AlphaPolicy::Preserve,
        }
    }
}

pub fn index_to_coord(index: usize, width: u32, stride: NonZeroUsize) -> (u32, u32) {
    let site = index * stride.get();
    ((site % width as usize) as u32, (site / width as usize) as u32)
}

pub fn capacity(width: u32, height: u32, stride: NonZeroUsize) -> usize {
    width as usize * height as usize / stride.get()
}

pub fn encode_steg<G: PixelGrid>(
    grid: &mut G,
    data: &[u8],
    config: &StegConfig,
) -> Result<(), io::Error> {
    if data.len() > capacity(grid.width(), grid.height(), config.stride) {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "The payload does not fit into the carrier image.",
        ));
    }

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pixel = grid.get(x, y);
            grid.set(
                x,
                y,
                Pixel {
                    b: pixel.b & !PRESENCE_MARKER_MASK,
                    ..pixel
                },
            );
        }
    }

    for (index, &value) in data.iter().enumerate() {
        let (x, y) = index_to_coord(index, grid.width(), config.stride);
        let pixel = grid.get(x, y);

        let r = ((value >> 5) & THREE_BIT_MASK) + (pixel.r & HIGH_BITS_MASK);
        let g = ((value >> 2) & THREE_BIT_MASK) + (pixel.g & HIGH_BITS_MASK);
        let b = (value & TWO_BIT_MASK) + (pixel.b & HIGH_BITS_MASK) + PRESENCE_MARKER_MASK;
        let a = match config.alpha {
            AlphaPolicy::Preserve => pixel.a,
            AlphaPolicy::ForceOpaque => u8::MAX,
        };

        grid.set(x, y, Pixel::new(r, g, b, a));
    }

    Ok(())
}

pub fn decode_steg<G: PixelGrid>(grid: &G, config: &StegConfig) -> Vec<u8> {
    let mut recovered = Vec::new();

    for index in 0..capacity(grid.width(), grid.height(), config.stride) {
        let (x, y) = index_to_coord(index, grid.width(), config.stride);
        let pixel = grid.get(x, y);

        if pixel.b & PRESENCE_MARKER_MASK == 0 {
            break;
        }

        recovered.push(
            ((pixel.r & THREE_BIT_MASK) << 5)
                + ((pixel.g & THREE_BIT_MASK) << 2)
                + (pixel.b & TWO_BIT_MASK),
        );
    }

    recovered
}
