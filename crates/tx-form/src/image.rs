//! Image attachment: file bytes to an inline `data:` URI.
//!
//! Encoding writes the result into the working record immediately, as a
//! side effect of the attachment itself, not of form submission. A
//! submission that follows any sequence of attachments therefore always
//! collects a record whose asset slots are current - there is no
//! pending-decode window to race against.

use crate::{ImageError, Result};

use tx_core::ProfileRecord;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::debug;

/// The four image slots a profile carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    ProfilePhoto,
    ProfileBanner,
    CompanyLogo,
    CompanyBanner,
}

impl AssetSlot {
    /// The UI field name of the file input bound to this slot.
    pub fn field(&self) -> &'static str {
        match self {
            Self::ProfilePhoto => "profilePhoto",
            Self::ProfileBanner => "profileBanner",
            Self::CompanyLogo => "companyLogo",
            Self::CompanyBanner => "companyBanner",
        }
    }

    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "profilePhoto" => Some(Self::ProfilePhoto),
            "profileBanner" => Some(Self::ProfileBanner),
            "companyLogo" => Some(Self::CompanyLogo),
            "companyBanner" => Some(Self::CompanyBanner),
            _ => None,
        }
    }

    /// The data URI currently stored in this slot, if any.
    pub fn current<'r>(&self, record: &'r ProfileRecord) -> Option<&'r str> {
        let assets = &record.assets;
        match self {
            Self::ProfilePhoto => assets.profile_photo_src.as_deref(),
            Self::ProfileBanner => assets.profile_banner_src.as_deref(),
            Self::CompanyLogo => assets.company_logo_src.as_deref(),
            Self::CompanyBanner => assets.company_banner_src.as_deref(),
        }
    }

    fn apply(&self, record: &mut ProfileRecord, data_uri: String) {
        let assets = &mut record.assets;
        match self {
            Self::ProfilePhoto => assets.profile_photo_src = Some(data_uri),
            Self::ProfileBanner => assets.profile_banner_src = Some(data_uri),
            Self::CompanyLogo => assets.company_logo_src = Some(data_uri),
            Self::CompanyBanner => assets.company_banner_src = Some(data_uri),
        }
    }
}

/// Sniffs a supported image type from its leading bytes.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if looks_like_svg(bytes) {
        Some("image/svg+xml")
    } else {
        None
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let Ok(text) = std::str::from_utf8(&bytes[..bytes.len().min(512)]) else {
        return false;
    };
    let text = text.trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

/// Encodes bytes as a self-contained `data:` URI.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

/// Splits a `data:` URI back into its mime type and payload bytes.
pub fn parse_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = BASE64.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}

/// Encodes a selected image and writes it into the working record's
/// slot right away. Returns the data URI for preview rendering.
///
/// `name` is the selected file's name, used only for error messages.
pub fn attach_image(
    slot: AssetSlot,
    name: Option<&str>,
    bytes: &[u8],
    record: &mut ProfileRecord,
) -> Result<String> {
    if bytes.is_empty() {
        return Err(ImageError::empty_image());
    }

    let mime = sniff_mime(bytes).ok_or_else(|| ImageError::unsupported_format(name))?;

    let data_uri = encode_data_uri(mime, bytes);
    slot.apply(record, data_uri.clone());

    debug!("Updated {} in working record ({mime}, {} bytes)", slot.field(), bytes.len());
    Ok(data_uri)
}
