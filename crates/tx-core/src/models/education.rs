use serde::{Deserialize, Serialize};

/// Schooling summary: institution and grade for class 12 and class 10.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub class12: String,
    pub grade12: String,
    pub class10: String,
    pub grade10: String,
}
