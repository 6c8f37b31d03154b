use serde::{Deserialize, Serialize};

/// A physical/medium format descriptor for a release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Format {
    /// Surrogate key assigned by the database; `None` until stored.
    pub id: Option<i64>,

    pub release_id: i32,

    /// Format name (e.g. "CD", "Vinyl", "File").
    pub name: Option<String>,

    /// Quantity, textual as the catalog records it (e.g. "2").
    pub qty: Option<String>,

    /// Free-text descriptor (e.g. "Gatefold", "Remastered").
    pub text: Option<String>,
}

impl Format {
    #[must_use]
    pub fn new(release_id: i32) -> Self {
        Self {
            id: None,
            release_id,
            name: None,
            qty: None,
            text: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_qty(mut self, qty: impl Into<String>) -> Self {
        self.qty = Some(qty.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_builder() {
        let format = Format::new(3)
            .with_name("Vinyl")
            .with_qty("2")
            .with_text("Gatefold");

        assert_eq!(format.release_id, 3);
        assert_eq!(format.name, Some("Vinyl".to_string()));
        assert_eq!(format.qty, Some("2".to_string()));
    }
}
