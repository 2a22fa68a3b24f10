//! Render configuration.
//!
//! Formatting settings and the short-name lookup table live here and
//! are passed explicitly to the renderer. [`RenderConfig::default`] gives the
//! usual Java layout; a TOML file can override any part of it:
//!
//! ```toml
//! indent = 2            # spaces, or "tab"
//! extension = "java"
//!
//! [well_known]
//! Money = "org.joda.money"
//! ```

use std::{path::Path, sync::LazyLock};

use indexmap::IndexMap;
use jgencode_codegen::Indent;
use serde::Deserialize;

use crate::{
    error::{Error, Result},
    types::TypeParser,
};

/// Short names of common JDK types and the package they live in.
const STANDARD_TYPES: &[(&str, &str)] = &[
    ("UUID", "java.util"),
    ("LocalDate", "java.time"),
    ("LocalDateTime", "java.time"),
    ("Optional", "java.util"),
    ("Stream", "java.util.stream"),
    ("LocalTime", "java.time"),
    ("Instant", "java.time"),
    ("Duration", "java.time"),
    ("OffsetDateTime", "java.time"),
    ("ZonedDateTime", "java.time"),
    ("BigDecimal", "java.math"),
    ("BigInteger", "java.math"),
    ("Collection", "java.util"),
    ("List", "java.util"),
    ("ArrayList", "java.util"),
    ("Set", "java.util"),
    ("HashSet", "java.util"),
    ("LinkedHashSet", "java.util"),
    ("Map", "java.util"),
    ("HashMap", "java.util"),
    ("LinkedHashMap", "java.util"),
    ("Collectors", "java.util.stream"),
];

/// Lookup table from a type's short name to its home package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellKnownTypes {
    packages: IndexMap<String, String>,
}

impl WellKnownTypes {
    /// The standard JDK table.
    pub fn standard() -> Self {
        Self {
            packages: STANDARD_TYPES
                .iter()
                .map(|(name, package)| (name.to_string(), package.to_string()))
                .collect(),
        }
    }

    /// Shared instance of the standard table.
    pub fn standard_ref() -> &'static Self {
        static STANDARD: LazyLock<WellKnownTypes> = LazyLock::new(WellKnownTypes::standard);
        &STANDARD
    }

    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            packages: IndexMap::new(),
        }
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, simple_name: impl Into<String>, package: impl Into<String>) {
        self.packages.insert(simple_name.into(), package.into());
    }

    /// Package for a short name, if known.
    pub fn package_of(&self, simple_name: &str) -> Option<&str> {
        self.packages.get(simple_name).map(String::as_str)
    }

    /// Fully-qualified name for a short name, if known.
    pub fn qualified(&self, simple_name: &str) -> Option<String> {
        self.package_of(simple_name)
            .map(|package| format!("{package}.{simple_name}"))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for WellKnownTypes {
    fn default() -> Self {
        Self::standard()
    }
}

/// Formatting and lookup settings consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Indentation unit for one nesting level.
    pub indent: Indent,
    /// Extension of written files, without the dot.
    pub extension: String,
    /// Short-name lookup table.
    pub well_known: WellKnownTypes,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: Indent::JAVA,
            extension: "java".to_string(),
            well_known: WellKnownTypes::standard(),
        }
    }
}

impl RenderConfig {
    /// Use a different indentation.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Use a different file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Parser resolving short names through this configuration's table.
    pub fn type_parser(&self) -> TypeParser<'_> {
        TypeParser::new(&self.well_known)
    }

    /// Parse a configuration from TOML, starting from the defaults.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(src).map_err(|source| Error::Config { source })?;
        Ok(raw.into_config())
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    indent: Option<IndentSetting>,
    extension: Option<String>,
    #[serde(default)]
    well_known: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IndentSetting {
    Width(u8),
    Style(IndentStyle),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum IndentStyle {
    Tab,
}

impl RawConfig {
    fn into_config(self) -> RenderConfig {
        let mut config = RenderConfig::default();
        match self.indent {
            Some(IndentSetting::Width(width)) => config.indent = Indent::Spaces(width),
            Some(IndentSetting::Style(IndentStyle::Tab)) => config.indent = Indent::Tab,
            None => {}
        }
        if let Some(extension) = self.extension {
            config.extension = extension.trim_start_matches('.').to_string();
        }
        for (name, package) in self.well_known {
            config.well_known.insert(name, package);
        }
        config
    }
}
