//! Holder for the most recently generated symbol.

use crate::raster::RasterImage;

/// The generated image, if any.
///
/// Starts empty and becomes ready on the first successful generation. Later
/// generations replace the image wholesale; nothing ever mutates a held
/// image in place.
#[derive(Debug, Default)]
pub struct ArtifactHolder {
    image: Option<RasterImage>,
}

impl ArtifactHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    /// Stores `image`, dropping any previous one, and lends it back.
    pub fn store(&mut self, image: RasterImage) -> &RasterImage {
        self.image.insert(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::ModuleMatrix;
    use crate::raster::{render, Palette};

    #[test]
    fn test_empty_then_ready_then_replaced() {
        let mut holder = ArtifactHolder::new();
        assert!(holder.get().is_none());

        let m = ModuleMatrix::from_fn(2, |_, _| true).unwrap();
        let first = render(&m, 4, Palette::default());
        let second = render(&m, 8, Palette::default());

        assert_eq!(holder.store(first.clone()), &first);
        assert_eq!(holder.get(), Some(&first));

        assert_eq!(holder.store(second.clone()), &second);
        assert_eq!(holder.get(), Some(&second));
    }
}
