//! Plain data shared across features.

mod gallery;
mod page;

pub use gallery::{Gallery, GalleryComment, GalleryDetail, GalleryTag};
pub use page::{Appended, GalleryList, Listing, PageNumber, PageRequest, STALE_REFETCH_LIMIT};
