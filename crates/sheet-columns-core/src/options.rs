//! Generator options

/// Options for constructing a [`ColumnGenerator`](crate::ColumnGenerator)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorOptions {
    /// Row number appended to every label (default: none)
    pub row_number: Option<u32>,
    /// Columns to skip at construction and on every reset (default: 0)
    pub skip: u64,
}

impl GeneratorOptions {
    /// Create options with no row number and no skip
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `row_number` to every label
    pub fn with_row_number(mut self, row_number: u32) -> Self {
        self.row_number = Some(row_number);
        self
    }

    /// Start the sequence `skip` columns in
    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = GeneratorOptions::default();
        assert_eq!(options.row_number, None);
        assert_eq!(options.skip, 0);
    }

    #[test]
    fn test_builder_setters() {
        let options = GeneratorOptions::new().with_row_number(15).with_skip(3);
        assert_eq!(options.row_number, Some(15));
        assert_eq!(options.skip, 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let options = GeneratorOptions::new().with_row_number(15).with_skip(26);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"row_number":15,"skip":26}"#);
        assert_eq!(
            serde_json::from_str::<GeneratorOptions>(&json).unwrap(),
            options
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_missing_fields_use_defaults() {
        let options: GeneratorOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, GeneratorOptions::default());

        let options: GeneratorOptions = serde_json::from_str(r#"{"skip":3}"#).unwrap();
        assert_eq!(options, GeneratorOptions::new().with_skip(3));
    }
}
