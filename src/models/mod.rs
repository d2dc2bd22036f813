pub mod gallery;
pub mod post;

pub use gallery::{GalleryDetails, GalleryInfo, RelatedGallery};
pub use post::{Author, Post, PostsMeta, PostsResult};
