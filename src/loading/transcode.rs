//! Conversion of legacy-format photos into JPEG

use crate::io::configuration::TRANSCODE_QUALITY;
use crate::io::error::{Result, transcode_error};
use crate::loading::adapter::TranscodeRequest;
use crate::loading::fetch::Fetch;
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;

/// Converts encoded photo bytes into a directly renderable format
pub trait Transcode {
    /// Convert the bytes fetched for `uri`
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be decoded or re-encoded
    fn transcode(&self, uri: &str, bytes: &[u8]) -> Result<Vec<u8>>;
}

/// Re-encodes anything the `image` crate can decode as JPEG
///
/// Formats without a compiled-in decoder fail, which callers treat like any
/// other conversion failure. HEIC is one of them: hosts that need it supply
/// their own [`Transcode`] backed by a HEIF decoder.
#[derive(Clone, Copy, Debug)]
pub struct JpegTranscoder {
    quality: u8,
}

impl Default for JpegTranscoder {
    fn default() -> Self {
        Self::new(TRANSCODE_QUALITY)
    }
}

impl JpegTranscoder {
    /// Transcoder writing JPEG at `quality` (clamped to 1..=100)
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Output JPEG quality
    pub const fn quality(&self) -> u8 {
        self.quality
    }
}

impl Transcode for JpegTranscoder {
    fn transcode(&self, uri: &str, bytes: &[u8]) -> Result<Vec<u8>> {
        let decoded = image::load_from_memory(bytes).map_err(|e| transcode_error(uri, &e))?;
        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
        let mut encoded = Vec::new();
        rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut encoded, self.quality))
            .map_err(|e| transcode_error(uri, &e))?;
        Ok(encoded)
    }
}

/// Fetch followed by transcode for one request
#[derive(Clone, Debug)]
pub struct TranscodePipeline<F, T> {
    fetcher: F,
    transcoder: T,
}

impl<F: Fetch, T: Transcode> TranscodePipeline<F, T> {
    /// Combine a fetcher and a transcoder
    pub const fn new(fetcher: F, transcoder: T) -> Self {
        Self {
            fetcher,
            transcoder,
        }
    }

    /// Produce renderable bytes for `request`
    ///
    /// Runs to completion even if the request was cancelled meanwhile; the
    /// adapter discards stale results.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching or transcoding fails
    pub fn run(&self, request: &TranscodeRequest) -> Result<Vec<u8>> {
        let bytes = self.fetcher.fetch(request.source())?;
        self.transcoder.transcode(request.source(), &bytes)
    }

    /// The underlying fetcher
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
