//! QR 码编码
//!
//! 纯函数：文本 → PNG 字节。失败只会让调用方省略二维码字段。

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use tracing::warn;

#[derive(Debug)]
pub enum QrError {
    Encode(String),
    Render(String),
}

impl std::fmt::Display for QrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(msg) => write!(f, "QR encode error: {}", msg),
            Self::Render(msg) => write!(f, "QR render error: {}", msg),
        }
    }
}

impl std::error::Error for QrError {}

/// 以中等纠错级别编码，输出边长不小于 `size` 像素的 PNG
pub fn encode_png(text: &str, size: u32) -> Result<Vec<u8>, QrError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::M)
        .map_err(|e| QrError::Encode(e.to_string()))?;

    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(size, size)
        .build();

    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| QrError::Render(e.to_string()))?;

    Ok(bytes)
}

/// base64 编码的 PNG；失败时记录告警并返回 None
pub fn encode_base64_png(text: &str, size: u32) -> Option<String> {
    match encode_png(text, size) {
        Ok(png) => Some(STANDARD.encode(png)),
        Err(e) => {
            warn!("QR generation skipped for '{}': {}", text, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];

    #[test]
    fn test_encode_png_header_and_size() {
        let png = encode_png("https://s.example.com/abc123", 256).expect("encode should succeed");
        assert!(png.starts_with(PNG_MAGIC));

        let decoded = image::load_from_memory(&png).expect("png should decode");
        assert!(decoded.width() >= 256);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[test]
    fn test_encode_base64_png() {
        let encoded = encode_base64_png("https://s.example.com/abc123", 128).expect("some");
        let raw = STANDARD.decode(encoded).expect("valid base64");
        assert!(raw.starts_with(PNG_MAGIC));
    }

    #[test]
    fn test_payload_too_large_is_none() {
        // 超出 QR 40-M 的容量
        let huge = "a".repeat(5000);
        assert!(encode_png(&huge, 256).is_err());
        assert!(encode_base64_png(&huge, 256).is_none());
    }
}
