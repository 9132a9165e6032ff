/// Image asset handling
///
/// This module handles:
/// - Generating downscaled previews for the thumbnail strip
/// - Caching those previews to disk

pub mod thumbnail;
