// Creator domain model
use serde::Serialize;

/// One ranked content creator. Records are immutable once loaded; the
/// published collection is only ever replaced wholesale, never edited
/// in place. `likes` can exceed 32-bit range (billions), hence u64.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creator {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub followers: u64,
    pub engagement: f64,
    pub likes: u64,
    pub video_count: u64,
    pub verified: bool,
}
