use serde::{Deserialize, Serialize};

use crate::lookup::LookupResult;

/// Edge length, in pixels, of the sprite inside the detail overlay.
pub const DETAIL_SPRITE_SIZE: u32 = 200;

/// Content of the overlay opened by selecting a sprite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailView {
    /// Overlay title (the creature name).
    pub title: String,
    /// Body text (the description).
    pub text: String,
    /// Sprite URL.
    pub image_url: String,
    /// Alternative text for the sprite.
    pub image_alt: String,
    pub image_width: u32,
    pub image_height: u32,
}

impl DetailView {
    /// Build the overlay for `result` at the fixed presentation size.
    pub fn for_result(result: &LookupResult) -> Self {
        Self {
            title: result.name.clone(),
            text: result.description.clone(),
            image_url: result.sprite_url.clone(),
            image_alt: result.name.clone(),
            image_width: DETAIL_SPRITE_SIZE,
            image_height: DETAIL_SPRITE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_carries_name_description_and_fixed_size_sprite() {
        let result = LookupResult::new("ditto", "https://sprites.example/132.png", "Transforms.");
        let view = result.detail();

        assert_eq!(view.title, "ditto");
        assert_eq!(view.text, "Transforms.");
        assert_eq!(view.image_url, "https://sprites.example/132.png");
        assert_eq!(view.image_alt, "ditto");
        assert_eq!((view.image_width, view.image_height), (200, 200));
    }
}
