// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Where a page's image comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// An image the host has already decoded, identified by a host handle.
    Handle(u64),
    /// A remote image the host resolves asynchronously.
    Url(String),
}

impl ImageSource {
    /// Returns `true` if the image still has to be fetched.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

/// Location of a page's video.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VideoSource(pub String);

impl VideoSource {
    /// Returns the video URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0
    }
}

/// A single gallery entry.
///
/// The media references are fixed at construction; only the caption may be
/// replaced afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRecord {
    image: Option<ImageSource>,
    video: Option<VideoSource>,
    caption: String,
}

impl PageRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub fn new(image: Option<ImageSource>, video: Option<VideoSource>, caption: impl Into<String>) -> Self {
        Self {
            image,
            video,
            caption: caption.into(),
        }
    }

    /// Creates a record for a decoded host image.
    #[must_use]
    pub fn with_handle(handle: u64) -> Self {
        Self::new(Some(ImageSource::Handle(handle)), None, String::new())
    }

    /// Creates a record for a remote image.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::new(Some(ImageSource::Url(url.into())), None, String::new())
    }

    /// Attaches a caption.
    #[must_use]
    pub fn caption_text(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Attaches a video; the image acts as its poster frame.
    #[must_use]
    pub fn video_url(mut self, url: impl Into<String>) -> Self {
        self.video = Some(VideoSource(url.into()));
        self
    }

    /// Returns the image source, if any.
    #[must_use]
    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    /// Returns the video source, if any.
    #[must_use]
    pub fn video(&self) -> Option<&VideoSource> {
        self.video.as_ref()
    }

    /// Returns the caption.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Replaces the caption.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }
}
