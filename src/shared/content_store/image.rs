// src/shared/content_store/image.rs

use crate::shared::content_store::refs::ImageRef;

/// Crop/fit mode requested from the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Crop,
    Max,
}

impl Fit {
    fn as_str(self) -> &'static str {
        match self {
            Fit::Crop => "crop",
            Fit::Max => "max",
        }
    }
}

/// Builds CDN URLs from asset references.
///
/// References look like `image-<assetId>-<width>x<height>-<format>` and
/// resolve to `<cdn>/<assetId>-<width>x<height>.<format>` plus the
/// requested transformation parameters.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    cdn_base_url: String,
}

impl ImageUrlBuilder {
    pub fn new(cdn_base_url: impl Into<String>) -> Self {
        let mut cdn_base_url = cdn_base_url.into();
        while cdn_base_url.ends_with('/') {
            cdn_base_url.pop();
        }
        Self { cdn_base_url }
    }

    pub fn url(&self, asset_ref: &str, width: u32, height: u32, fit: Fit) -> Option<String> {
        let file = asset_file_name(asset_ref)?;
        Some(format!(
            "{}/{}?w={}&h={}&fit={}",
            self.cdn_base_url,
            file,
            width,
            height,
            fit.as_str()
        ))
    }

    /// Convenience for the common case of an optional image field.
    pub fn image_url(
        &self,
        image: &ImageRef,
        width: u32,
        height: u32,
        fit: Fit,
    ) -> Option<String> {
        let asset = image.asset.as_ref()?;
        self.url(&asset.reference, width, height, fit)
    }
}

fn asset_file_name(asset_ref: &str) -> Option<String> {
    let rest = asset_ref.strip_prefix("image-")?;
    let (stem, format) = rest.rsplit_once('-')?;
    if stem.is_empty() || format.is_empty() {
        return None;
    }
    Some(format!("{stem}.{format}"))
}
