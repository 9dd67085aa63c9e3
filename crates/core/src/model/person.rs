use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::normalize_department;

/// A guessable person as loaded from the roster file.
///
/// Every field is optional: records are never validated on load, so a missing
/// or mistyped field simply reads as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    variants: Vec<String>,
}

impl Person {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            department: Some(department.into()),
            image: Some(image.into()),
            variants: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn without_image(mut self) -> Self {
        self.image = None;
        self
    }

    /// Build a person from an arbitrary JSON value.
    ///
    /// Non-string scalars are dropped, non-array `variants` become empty and
    /// non-object values yield a person with every field absent.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let string_field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        let variants = value
            .get("variants")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: string_field("name"),
            department: string_field("department"),
            image: string_field("image").filter(|path| !path.is_empty()),
            variants,
        }
    }

    // Accessors
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Display form of the department, empty when absent.
    #[must_use]
    pub fn normalized_department(&self) -> String {
        self.department().map(normalize_department).unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Person {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}
