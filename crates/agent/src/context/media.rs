//! User turn content with inline image attachments.
//!
//! Images are embedded as `data:<mime>;base64,<payload>` URIs. Paths that
//! are missing, unreadable, or not images are dropped without error.

use base64::Engine;
use clawprompt_core::message::{ContentBlock, MessageContent};
use std::path::Path;

/// Build user content from text and optional media paths.
///
/// Returns plain text unless at least one image survives filtering; then all
/// image blocks come first, in input order, followed by one text block.
pub fn encode_user_content<P: AsRef<Path>>(text: &str, media: &[P]) -> MessageContent {
    let mut blocks: Vec<ContentBlock> = media
        .iter()
        .filter_map(|path| encode_image(path.as_ref()))
        .collect();

    if blocks.is_empty() {
        return MessageContent::Text(text.to_string());
    }

    blocks.push(ContentBlock::text(text));
    MessageContent::Blocks(blocks)
}

fn encode_image(path: &Path) -> Option<ContentBlock> {
    if !path.is_file() {
        return None;
    }
    let mime = guess_mime(path)?;
    let bytes = std::fs::read(path).ok()?;
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    Some(ContentBlock::image(mime, &payload))
}

/// Image MIME type for the file extension (case-insensitive), if it is one.
pub fn guess_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/vnd.microsoft.icon",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "avif" => "image/avif",
        _ => return None,
    };
    Some(mime)
}
