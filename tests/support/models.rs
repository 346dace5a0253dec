#![allow(dead_code)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Profile {
    #[schemars(extend("x-prompt" = true))]
    pub name: String,
    #[schemars(extend("x-prompt" = true))]
    pub age: i64,
    #[schemars(extend("x-prompt" = true))]
    pub active: bool,
}

/// Same shape as `Profile` with no field marked.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Unmarked {
    pub name: String,
    pub age: i64,
    pub active: bool,
}

/// Text, integer and boolean fields interleaved, with unasked fields between.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Interleaved {
    #[schemars(extend("x-prompt" = true))]
    pub first_flag: bool,
    #[schemars(extend("x-prompt" = true))]
    pub label: String,
    #[serde(skip)]
    pub cache_key: String,
    #[schemars(extend("x-prompt" = true))]
    pub count: u32,
    #[schemars(extend("x-prompt" = true))]
    pub second_flag: bool,
    #[serde(skip)]
    pub hits: i64,
    #[schemars(extend("x-prompt" = true))]
    pub owner: String,
    #[schemars(extend("x-prompt" = true))]
    pub delta: i16,
}

/// Marked, unmarked and never-deserialized fields side by side.
#[derive(Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Partial {
    #[schemars(extend("x-prompt" = true))]
    pub name: String,
    pub region: String,
    #[schemars(extend("x-prompt" = true))]
    #[serde(skip_deserializing)]
    pub stamp: String,
    pub weight: f64,
    #[schemars(extend("x-prompt" = true))]
    pub port: u16,
}

impl Default for Partial {
    fn default() -> Self {
        Self {
            name: String::new(),
            region: "eu-west".into(),
            stamp: "v1".into(),
            weight: 0.5,
            port: 8080,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct WithFloat {
    #[schemars(extend("x-prompt" = true))]
    pub name: String,
    #[schemars(extend("x-prompt" = true))]
    pub ratio: f64,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct WithList {
    #[schemars(extend("x-prompt" = true))]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct WithChar {
    #[schemars(extend("x-prompt" = true))]
    pub initial: char,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Renamed {
    /// Login shown to other users.
    #[serde(rename = "user_name")]
    #[schemars(extend("x-prompt" = true))]
    pub name: String,
    #[schemars(title = "Retry budget", extend("x-prompt" = true))]
    pub retries: u8,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct AllSkipped {
    #[serde(skip)]
    pub note: String,
}
