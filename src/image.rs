// Image format sniffing from magic bytes
// Only the leading bytes are inspected; this picks an extension and content
// type and rejects obvious non-images, it does not validate image integrity.

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Unknown,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Unknown => "bin",
        }
    }

    /// Content type sent with the stored object, always `image/<extension>`.
    pub fn content_type(&self) -> String {
        format!("{}/{}", mime::IMAGE, self.extension())
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ImageFormat::Unknown)
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Jpeg => write!(f, "JPEG"),
            ImageFormat::Png => write!(f, "PNG"),
            ImageFormat::Unknown => write!(f, "unknown"),
        }
    }
}

pub fn detect_format(data: &[u8]) -> ImageFormat {
    if data.starts_with(JPEG_MAGIC) {
        ImageFormat::Jpeg
    } else if data.starts_with(PNG_MAGIC) {
        ImageFormat::Png
    } else {
        ImageFormat::Unknown
    }
}

pub fn is_valid_image(data: &[u8]) -> bool {
    detect_format(data).is_known()
}
