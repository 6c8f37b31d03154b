use serde::{Deserialize, Serialize};

/// A label / catalog-number association for a release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseLabel {
    /// Surrogate key assigned by the database; `None` until stored.
    pub id: Option<i64>,

    /// The release this association belongs to. Required, but not enforced
    /// as a foreign key (see the schema module docs).
    pub release_id: i32,

    /// External identifier of the label, when the catalog knows it.
    pub label_id: Option<i32>,

    /// Label display name.
    pub label: Option<String>,

    /// Catalog number string (e.g. "455 297-2").
    pub catno: Option<String>,
}

impl ReleaseLabel {
    #[must_use]
    pub fn new(release_id: i32) -> Self {
        Self {
            id: None,
            release_id,
            label_id: None,
            label: None,
            catno: None,
        }
    }

    #[must_use]
    pub fn with_label_id(mut self, label_id: i32) -> Self {
        self.label_id = Some(label_id);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_catno(mut self, catno: impl Into<String>) -> Self {
        self.catno = Some(catno.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_label_builder() {
        let label = ReleaseLabel::new(1)
            .with_label("Sub Pop")
            .with_catno("SP 34")
            .with_label_id(22);

        assert_eq!(label.release_id, 1);
        assert!(label.id.is_none());
        assert_eq!(label.label, Some("Sub Pop".to_string()));
        assert_eq!(label.catno, Some("SP 34".to_string()));
    }
}
