use std::fmt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/* Mock endpoint payloads */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
  pub id: u32,
  pub icon: String,
  pub image: String,
  pub title: String,
  pub short_desc: String,
  pub full_desc: String,
  pub benefits: Vec<String>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
  pub id: u32,
  pub name: String,
  pub subtitle: String,
  pub price: Decimal,
  pub period: String,  // rendered after a slash, e.g. "/month per court"
  pub featured: bool,
  pub features: Vec<String>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
  Features(Vec<Feature>),
  Pricing(Vec<Plan>)
}

impl Payload {
  pub fn into_features(self) -> Option<Vec<Feature>> {
    match self {
      Payload::Features(features) => Some(features),
      Payload::Pricing(_) => None
    }
  }

  pub fn into_plans(self) -> Option<Vec<Plan>> {
    match self {
      Payload::Pricing(plans) => Some(plans),
      Payload::Features(_) => None
    }
  }
}

/* Browser history state */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryState {
  pub route: String
}

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  MountPointMissing(String),
  UnknownRoute(String),
  WasmError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::MountPointMissing(id) => write!(f, "Mount point not found: #{}", id),
      AppError::UnknownRoute(route) => write!(f, "Route \"{}\" not found", route),
      AppError::WasmError(msg) => write!(f, "Wasm error: {}", msg),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn feature_serializes_with_camel_case_keys() {
    let feature = Feature {
      id: 1,
      icon: "🎯".to_string(),
      image: "img.png".to_string(),
      title: "Smart Booking System".to_string(),
      short_desc: "short".to_string(),
      full_desc: "long".to_string(),
      benefits: vec!["a".to_string()]
    };
    let value = serde_json::to_value(&feature).unwrap();
    assert_eq!(value["shortDesc"], "short");
    assert_eq!(value["fullDesc"], "long");
    assert!(value.get("short_desc").is_none());
  }

  #[test]
  fn untagged_payload_reads_plan_list() {
    let json = r#"[{"id":1,"name":"Court Owner","subtitle":"s","price":"5000","period":"month per court","featured":true,"features":[]}]"#;
    let payload: Payload = serde_json::from_str(json).unwrap();
    let plans = payload.into_plans().unwrap();
    assert_eq!(plans[0].price, dec!(5000));
  }

  #[test]
  fn errors_display_their_subject() {
    assert_eq!(AppError::UnknownRoute("blog".into()).to_string(), "Route \"blog\" not found");
    assert_eq!(AppError::MountPointMissing("main-content".into()).to_string(), "Mount point not found: #main-content");
  }
}
