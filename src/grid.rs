//! # 像素网格抽象模块
//!
//! 隐写核心只依赖本模块定义的像素网格接口，而不依赖任何具体的图像编解码库。
//! 图像文件的加载与保存由 `image` crate 负责，其 `RgbaImage` 在此处接入该接口。

use image::{Rgba, RgbaImage};

/// 一个像素的四个独立 8 位通道值，约定顺序为 (R, G, B, A)。
///
/// 通道之间互相独立，不假定任何色彩空间语义，仅作为 8 位整数载体处理。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// 由四个通道值构造一个像素。
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// 编码器与解码器所依赖的像素网格接口。
///
/// 坐标满足 `0 <= x < width`、`0 <= y < height`。越界访问的行为由实现者决定
/// (对 `RgbaImage` 而言会 panic)，调用方必须自行约束迭代范围。
pub trait PixelGrid {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn get(&self, x: u32, y: u32) -> Pixel;

    fn set(&mut self, x: u32, y: u32, pixel: Pixel);
}

impl PixelGrid for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get(&self, x: u32, y: u32) -> Pixel {
        let Rgba([r, g, b, a]) = *self.get_pixel(x, y);
        Pixel::new(r, g, b, a)
    }

    fn set(&mut self, x: u32, y: u32, pixel: Pixel) {
        self.put_pixel(x, y, Rgba([pixel.r, pixel.g, pixel.b, pixel.a]));
    }
}
