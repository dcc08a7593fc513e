//! JSON test vector loader for the content pipeline tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub body: BodyData,
    #[serde(default)]
    pub expect: Option<serde_json::Value>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct BodyData {
    pub encoding: String,
    pub data: String,
    #[serde(default)]
    pub count: usize,
}

impl BodyData {
    pub fn decode(&self) -> String {
        match self.encoding.as_str() {
            "plain" => self.data.clone(),
            "repeat" => self.data.repeat(self.count),
            other => panic!("unsupported encoding: {other}"),
        }
    }
}
