use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde_json::Value;
use std::fmt;

/// A project entry read from the input file. Only `title` and `category`
/// are kept, other keys are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Project {
    pub title: Option<Value>,
    pub category: Option<Value>,
}

impl Project {
    pub fn title(&self) -> Field<'_> {
        Field(self.title.as_ref())
    }

    pub fn category(&self) -> Field<'_> {
        Field(self.category.as_ref())
    }
}

// Only objects are accepted, and keys other than `title` and `category` are
// skipped without being built into a `Value`. The last duplicate key wins.
impl<'de> Deserialize<'de> for Project {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ProjectVisitor)
    }
}

struct ProjectVisitor;

impl<'de> Visitor<'de> for ProjectVisitor {
    type Value = Project;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a project object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Project, A::Error> {
        let mut project = Project::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "title" => project.title = map.next_value()?,
                "category" => project.category = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(project)
    }
}

/// Display form of an optional field: strings unquoted, `None` when the key
/// is absent or null, compact JSON otherwise.
#[derive(Clone, Copy, Debug)]
pub struct Field<'a>(Option<&'a Value>);

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None | Some(Value::Null) => f.write_str("None"),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{other}"),
        }
    }
}
