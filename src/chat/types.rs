use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use std::fmt;

/// Body of `POST /chat` as received.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatPayload {
    pub query: String,
    #[serde(default, rename = "userName")]
    pub user_name: Option<String>,
}

/// Body of `POST /summarize` as received.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizePayload {
    pub text: String,
}

/// Body of `POST /scenario` as received.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioPayload {
    pub status: String,
    pub filename: String,
    pub detections: DetectionMap,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectionPayload {
    pub object_id: String,
    pub position: String,
    pub confidence: f64,
}

/// Category label to detections, in the order the categories appeared in the
/// request body.
///
/// A repeated category keeps its first position and takes the later list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionMap(Vec<(String, Vec<DetectionPayload>)>);

impl DetectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, detections: Vec<DetectionPayload>) {
        let category = category.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == category) {
            Some((_, slot)) => *slot = detections,
            None => self.0.push((category, detections)),
        }
    }
}

impl IntoIterator for DetectionMap {
    type Item = (String, Vec<DetectionPayload>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de> Deserialize<'de> for DetectionMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DetectionMapVisitor;

        impl<'de> Visitor<'de> for DetectionMapVisitor {
            type Value = DetectionMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category labels to lists of detections")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = DetectionMap::new();
                while let Some((category, detections)) =
                    access.next_entry::<String, Vec<DetectionPayload>>()?
                {
                    map.insert(category, detections);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(DetectionMapVisitor)
    }
}
