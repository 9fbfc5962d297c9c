/// 存在标记位的掩码 (第三通道的 bit 2，即 0x04)。
/// 编码时在每个携带载荷的像素的蓝色通道上置位该比特；
/// 解码扫描遇到的第一个未置位像素即视为数据流结束。
pub const PRESENCE_MARKER_MASK: u8 = 0x04;

/// 通道高位保留掩码。
/// `& 0xF8` 保留通道的 bit 3-7 并将低 3 位清零，
/// 随后载荷比特以加法写入清零后的低位，不会向 bit 3 进位。
pub const HIGH_BITS_MASK: u8 = 0xF8;

/// 单个通道可携带的 3 比特载荷掩码。
/// 一个载荷字节被拆成 3 + 3 + 2 比特，分别写入前三个通道的低位。
pub const THREE_BIT_MASK: u8 = 0x07;

/// 第三通道可携带的 2 比特载荷掩码。
/// 由于 bit 2 被存在标记占用，蓝色通道只携带最低的 2 比特载荷。
pub const TWO_BIT_MASK: u8 = 0x03;

/// 默认像素步长。
/// 步长为 1 表示不跳过任何像素；更大的步长以容量换取更低的嵌入密度。
pub const DEFAULT_STRIDE: usize = 1;

/// `--encode` 模式下载体图像的默认路径。
pub const DEFAULT_INPUT_PUBLIC: &str = "input_public.png";

/// `--encode` 模式下载荷文件的默认路径。
/// 尽管默认扩展名是 .jpg，该文件始终被当作原始字节流读取。
pub const DEFAULT_INPUT_PRIVATE: &str = "input_private.jpg";

/// 编码输出与解码输入共用的默认图像路径。
pub const DEFAULT_ENCODED_IMAGE: &str = "output_encoded.png";

/// `--decode` 模式下恢复载荷的默认输出路径。
pub const DEFAULT_DECODED_OUTPUT: &str = "output_private.jpg";
