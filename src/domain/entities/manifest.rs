//! Manifest entity - the parsed `component.json` of a component
//!
//! Every field is optional. Unknown keys (`name`, `version`, `repo`, ...) are
//! accepted and ignored; type mismatches on known keys make the manifest
//! invalid.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// File name of a component manifest.
pub const MANIFEST_FILE: &str = "component.json";

/// Declared asset file categories, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    Scripts,
    Styles,
    Json,
    Images,
    Fonts,
    Files,
    Templates,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 7] = [
        AssetCategory::Scripts,
        AssetCategory::Styles,
        AssetCategory::Json,
        AssetCategory::Images,
        AssetCategory::Fonts,
        AssetCategory::Files,
        AssetCategory::Templates,
    ];

    /// Manifest key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Scripts => "scripts",
            AssetCategory::Styles => "styles",
            AssetCategory::Json => "json",
            AssetCategory::Images => "images",
            AssetCategory::Fonts => "fonts",
            AssetCategory::Files => "files",
            AssetCategory::Templates => "templates",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One external dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub name: String,
    pub version: String,
}

/// External dependencies in document order.
///
/// JSON objects are unordered in principle, but findings must follow the
/// order the author wrote, so the map is read entry by entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies(Vec<DependencySpec>);

impl Dependencies {
    pub fn iter(&self) -> std::slice::Iter<'_, DependencySpec> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Dependencies {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, version)| DependencySpec { name, version })
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Dependencies {
    type Item = &'a DependencySpec;
    type IntoIter = std::slice::Iter<'a, DependencySpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for Dependencies {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DependenciesVisitor;

        impl<'de> Visitor<'de> for DependenciesVisitor {
            type Value = Dependencies;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of dependency name to version")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut specs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, version)) = access.next_entry::<String, String>()? {
                    match specs
                        .iter_mut()
                        .find(|spec: &&mut DependencySpec| spec.name == name)
                    {
                        Some(existing) => existing.version = version,
                        None => specs.push(DependencySpec { name, version }),
                    }
                }
                Ok(Dependencies(specs))
            }
        }

        deserializer.deserialize_map(DependenciesVisitor)
    }
}

/// Parsed component manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// `None` when the manifest omits the key, so a configured default can apply.
    pub scripts: Option<Vec<String>>,
    pub styles: Vec<String>,
    pub json: Vec<String>,
    pub images: Vec<String>,
    pub fonts: Vec<String>,
    pub files: Vec<String>,
    pub templates: Vec<String>,
    /// Sub-directories searched for local dependencies.
    pub paths: Vec<String>,
    /// Local dependency names.
    pub local: Vec<String>,
    /// External dependency name → version specifier.
    pub dependencies: Dependencies,
}

impl Manifest {
    /// Parse manifest JSON.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Declared files of a category; `scripts` falls back to `default_scripts`
    /// when the manifest does not mention it.
    pub fn declared_files<'a>(
        &'a self,
        category: AssetCategory,
        default_scripts: &'a [String],
    ) -> &'a [String] {
        match category {
            AssetCategory::Scripts => self.scripts.as_deref().unwrap_or(default_scripts),
            AssetCategory::Styles => &self.styles,
            AssetCategory::Json => &self.json,
            AssetCategory::Images => &self.images,
            AssetCategory::Fonts => &self.fonts,
            AssetCategory::Files => &self.files,
            AssetCategory::Templates => &self.templates,
        }
    }
}
