use serde::{Deserialize, Serialize};

/// A promotional video linked to a release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseVideo {
    /// Surrogate key assigned by the database; `None` until stored.
    pub id: Option<i64>,

    pub release_id: i32,

    /// Video length in seconds.
    pub duration: Option<i32>,

    /// Video URL or identifier.
    pub src: Option<String>,

    pub title: Option<String>,
}

impl ReleaseVideo {
    #[must_use]
    pub fn new(release_id: i32) -> Self {
        Self {
            id: None,
            release_id,
            duration: None,
            src: None,
            title: None,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, seconds: i32) -> Self {
        self.duration = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_video_builder() {
        let video = ReleaseVideo::new(7)
            .with_duration(296)
            .with_src("https://www.youtube.com/watch?v=hTWKbfoikeg")
            .with_title("Smells Like Teen Spirit");

        assert_eq!(video.release_id, 7);
        assert_eq!(video.duration, Some(296));
        assert!(video.id.is_none());
    }
}
