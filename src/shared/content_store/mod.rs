pub mod client;
pub mod image;
pub mod portable_text;
pub mod refs;

pub use client::{ContentStoreConfig, ContentStoreError, HttpQueryExecutor, QueryExecutor};
pub use image::{Fit, ImageUrlBuilder};
pub use refs::{AssetPointer, FileAsset, FileRef, ImageRef};
