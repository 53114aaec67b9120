use super::media::MediaSurface;

pub const PINNED_VOLUME: f64 = 0.4;

// Browsers report volume as an f32 internally, so compare loosely.
const TOLERANCE: f64 = 1e-3;

/// Writes the pinned volume if the element drifted away from it. Returns
/// whether a write happened; an unchanged value must not be rewritten or the
/// resulting `volumechange` would loop back here.
pub fn pin<M: MediaSurface>(media: &M) -> bool {
    if (media.volume() - PINNED_VOLUME).abs() > TOLERANCE {
        media.set_volume(PINNED_VOLUME);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::testing::FakeMedia;

    #[test]
    fn drifted_volume_is_restored() {
        let media = FakeMedia::default();
        media.set_volume(1.0);
        assert!(pin(&media));
        assert_eq!(media.volume(), PINNED_VOLUME);
    }

    #[test]
    fn pinned_volume_is_left_alone() {
        let media = FakeMedia::default();
        media.set_volume(PINNED_VOLUME);
        let writes = media.volume_writes();
        assert!(!pin(&media));
        assert_eq!(media.volume_writes(), writes);
    }
}
