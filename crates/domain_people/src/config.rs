//! Name parser configuration

use serde::Deserialize;

/// Additional lookups for the name parser.
///
/// The parser always recognizes its built-in honorific titles and
/// generational/professional suffixes; these lists extend them. Entries are
/// matched case-insensitively with an optional trailing period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NameParserConfig {
    /// Extra honorific titles stripped from the front of a name
    #[serde(default)]
    pub extra_titles: Vec<String>,
    /// Extra suffixes stripped from the end of a name
    #[serde(default)]
    pub extra_suffixes: Vec<String>,
}

impl NameParserConfig {
    /// Loads configuration from environment
    ///
    /// Reads `NAME_PARSER_EXTRA_TITLES` and `NAME_PARSER_EXTRA_SUFFIXES` as
    /// comma separated lists. Unset variables leave the lists empty.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("NAME_PARSER")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("extra_titles")
                    .with_list_parse_key("extra_suffixes"),
            )
            .build()?
            .try_deserialize()
    }

    /// Adds an extra title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.extra_titles.push(title.into());
        self
    }

    /// Adds an extra suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.extra_suffixes.push(suffix.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let config = NameParserConfig::default();
        assert!(config.extra_titles.is_empty());
        assert!(config.extra_suffixes.is_empty());
    }

    #[test]
    fn test_builder_methods() {
        let config = NameParserConfig::default()
            .with_title("Capt")
            .with_suffix("CPA");

        assert_eq!(config.extra_titles, vec!["Capt".to_string()]);
        assert_eq!(config.extra_suffixes, vec!["CPA".to_string()]);
    }

    #[test]
    fn test_deserialize_from_config_source() {
        let config: NameParserConfig = config::Config::builder()
            .set_override("extra_titles", vec!["Capt", "Rev"])
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.extra_titles, vec!["Capt".to_string(), "Rev".to_string()]);
        assert!(config.extra_suffixes.is_empty());
    }
}
