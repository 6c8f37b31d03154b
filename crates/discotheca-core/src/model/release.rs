use serde::{Deserialize, Serialize};

/// A music release (album, single, etc.) as cataloged by the external
/// metadata source.
///
/// `id` is the catalog's own identifier. It is the conceptual primary key
/// of the `release` table but is deliberately not declared as one; the
/// imported dump is trusted to be unique on it (see the schema module).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: i32,

    /// Release status in the source catalog (e.g. "Accepted").
    pub status: Option<String>,

    pub title: Option<String>,
    pub country: Option<String>,

    /// Release date as the catalog spells it (often just a year).
    pub released: Option<String>,

    pub notes: Option<String>,

    /// High-level genre tags (e.g. "Jazz", "Electronic"), in catalog order.
    pub genres: Vec<String>,

    /// Sub-genre style tags (e.g. "Modal", "Hard Bop"), in catalog order.
    pub styles: Vec<String>,

    /// Master release this belongs to, when known. The master concept
    /// itself is not modeled here.
    pub master_id: Option<i32>,

    /// Free-text quality flag from the source (e.g. "Correct").
    pub data_quality: Option<String>,
}

impl Release {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self {
            id,
            status: None,
            title: None,
            country: None,
            released: None,
            notes: None,
            genres: Vec::new(),
            styles: Vec::new(),
            master_id: None,
            data_quality: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn with_released(mut self, released: impl Into<String>) -> Self {
        self.released = Some(released.into());
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_master_id(mut self, master_id: i32) -> Self {
        self.master_id = Some(master_id);
        self
    }

    #[must_use]
    pub fn with_data_quality(mut self, data_quality: impl Into<String>) -> Self {
        self.data_quality = Some(data_quality.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_new() {
        let release = Release::new(249_504);
        assert_eq!(release.id, 249_504);
        assert!(release.title.is_none());
        assert!(release.genres.is_empty());
    }

    #[test]
    fn test_release_builder() {
        let release = Release::new(1)
            .with_title("Nevermind")
            .with_country("US")
            .with_released("1991-09-24")
            .with_genres(["Rock"])
            .with_styles(["Grunge", "Alternative Rock"])
            .with_master_id(13814)
            .with_data_quality("Correct");

        assert_eq!(release.title, Some("Nevermind".to_string()));
        assert_eq!(release.genres, vec!["Rock".to_string()]);
        assert_eq!(release.styles.len(), 2);
        assert_eq!(release.master_id, Some(13814));
    }

    #[test]
    fn test_genres_keep_catalog_order() {
        let release = Release::new(2).with_genres(["Electronic", "Rock", "Electronic"]);
        assert_eq!(release.genres, vec!["Electronic", "Rock", "Electronic"]);
    }
}
