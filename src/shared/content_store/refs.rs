// src/shared/content_store/refs.rs

use serde::{Deserialize, Serialize};

/// Pointer to an asset owned by the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPointer {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// An image field value: asset pointer plus optional alt text.
///
/// The store also attaches hotspot/crop metadata; those keys are ignored
/// here since the CDN applies them during transformation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub asset: Option<AssetPointer>,
    pub alt: Option<String>,
}

/// An uploaded file projected as `{asset->{url}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRef {
    pub asset: Option<FileAsset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAsset {
    pub url: Option<String>,
}

impl FileRef {
    pub fn url(&self) -> Option<&str> {
        self.asset.as_ref().and_then(|asset| asset.url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_ref_decodes_and_ignores_hotspot_metadata() {
        let value = json!({
            "_type": "image",
            "asset": { "_type": "reference", "_ref": "image-abc-1200x700-jpg" },
            "alt": "Portrait",
            "hotspot": { "x": 0.5, "y": 0.5 }
        });

        let image: ImageRef = serde_json::from_value(value).unwrap();
        assert_eq!(image.asset.unwrap().reference, "image-abc-1200x700-jpg");
        assert_eq!(image.alt.as_deref(), Some("Portrait"));
    }

    #[test]
    fn file_ref_exposes_the_projected_url() {
        let value = json!({ "asset": { "url": "https://cdn.example.com/cv.pdf" } });
        let file: FileRef = serde_json::from_value(value).unwrap();
        assert_eq!(file.url(), Some("https://cdn.example.com/cv.pdf"));
    }

    #[test]
    fn file_ref_without_asset_has_no_url() {
        let file: FileRef = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(file.url(), None);
    }
}
