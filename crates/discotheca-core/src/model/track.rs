use serde::{Deserialize, Serialize};

/// A track belonging to a release.
///
/// `position` and `duration` are textual, exactly as the catalog records
/// them ("A1", "3:45"); vinyl side positions don't reduce to numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Surrogate key assigned by the database; `None` until stored.
    pub id: Option<i64>,

    pub release_id: i32,
    pub title: Option<String>,
    pub position: Option<String>,
    pub duration: Option<String>,
}

impl Track {
    #[must_use]
    pub fn new(release_id: i32) -> Self {
        Self {
            id: None,
            release_id,
            title: None,
            position: None,
            duration: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_builder() {
        let track = Track::new(1)
            .with_title("Breed")
            .with_position("A4")
            .with_duration("3:03");

        assert_eq!(track.release_id, 1);
        assert_eq!(track.position, Some("A4".to_string()));
        assert_eq!(track.duration, Some("3:03".to_string()));
    }
}
