//! Frame resolutions and closest-match lookup

use serde::{Deserialize, Serialize};

/// Frame resolution in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const VGA: Self = Self::new(640, 480);
    pub const HD: Self = Self::new(1280, 720);
    pub const FULL_HD: Self = Self::new(1920, 1080);

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Find the candidate whose pixel count is closest to `requested`.
///
/// Returns `None` when there are no candidates. An exact match is returned
/// as-is. Otherwise the first candidate with the smallest pixel-count gap
/// wins, and a zero gap ends the scan early even when the dimensions differ
/// (640x480 matches 480x640).
pub fn closest_resolution(requested: Resolution, candidates: &[Resolution]) -> Option<Resolution> {
    if candidates.is_empty() {
        return None;
    }
    if candidates.contains(&requested) {
        return Some(requested);
    }

    let target = requested.pixel_count();
    let mut best = None;
    let mut minimum_gap = u64::MAX;
    for candidate in candidates {
        let gap = target.abs_diff(candidate.pixel_count());
        if gap < minimum_gap {
            minimum_gap = gap;
            best = Some(*candidate);
            if gap == 0 {
                break;
            }
        }
    }
    best
}
