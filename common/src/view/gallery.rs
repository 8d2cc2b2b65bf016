pub const EMPTY_GALLERY: &str = "No photos yet — add one above.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoTile<'a> {
    /// Position in storage order; opening the viewer uses it.
    pub index: usize,
    pub src: &'a str,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView<'a> {
    Empty { message: &'static str },
    Tiles(Vec<PhotoTile<'a>>),
}

impl<'a> GalleryView<'a> {
    /// One tile per photo, in storage order.
    pub fn project(photos: &'a [String]) -> Self {
        if photos.is_empty() {
            return GalleryView::Empty {
                message: EMPTY_GALLERY,
            };
        }
        GalleryView::Tiles(
            photos
                .iter()
                .enumerate()
                .map(|(index, src)| PhotoTile {
                    index,
                    src,
                    alt: format!("Photo {}", index + 1),
                })
                .collect(),
        )
    }
}
