use std::time::Duration;

use crate::router::routes::Route;

/// Upper bounds for the page transition phases. The router waits for the
/// host to acknowledge the end of a transition and only falls back to these
/// durations when no acknowledgment arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTimings {
  pub exit: Duration,
  /// gap between adding `page-enter` and `page-enter-active`, so the first class is painted
  pub settle: Duration,
  pub enter: Duration
}

impl Default for TransitionTimings {
  fn default() -> Self {
    Self {
      exit: Duration::from_millis(200),
      settle: Duration::from_millis(50),
      enter: Duration::from_millis(300)
    }
  }
}

/// Simulated latency of the mock content endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchDelays {
  pub preview: Duration,
  pub full: Duration
}

impl Default for FetchDelays {
  fn default() -> Self {
    Self {
      preview: Duration::from_millis(300),
      full: Duration::from_millis(500)
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub container_id: String,
  pub navbar_id: String,
  pub footer_id: String,
  pub default_route: Route,
  /// fragments naming anchors inside the default view
  pub section_aliases: Vec<String>,
  /// section whose nav link doubles as the link to the default view
  pub home_anchor: String,
  pub routes: Vec<Route>,
  pub timings: TransitionTimings,
  pub fetch_delays: FetchDelays,
  pub scroll_threshold: f64
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      container_id: "main-content".to_string(),
      navbar_id: "navbar".to_string(),
      footer_id: "footer".to_string(),
      default_route: Route::Home,
      section_aliases: vec!["hero".to_string(), "cta".to_string()],
      home_anchor: "hero".to_string(),
      routes: Route::ALL.to_vec(),
      timings: TransitionTimings::default(),
      fetch_delays: FetchDelays::default(),
      scroll_threshold: 50.0
    }
  }
}

impl AppConfig {
  pub fn with_timings(mut self, timings: TransitionTimings) -> Self {
    self.timings = timings;
    self
  }

  pub fn with_fetch_delays(mut self, fetch_delays: FetchDelays) -> Self {
    self.fetch_delays = fetch_delays;
    self
  }

  pub fn with_routes(mut self, routes: Vec<Route>) -> Self {
    self.routes = routes;
    self
  }

  pub fn is_section_alias(&self, fragment: &str) -> bool {
    self.section_aliases.iter().any(|alias| alias == fragment)
  }

  pub fn is_registered(&self, route: Route) -> bool {
    self.routes.contains(&route)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_the_page_choreography() {
    let config = AppConfig::default();
    assert_eq!(config.timings.exit, Duration::from_millis(200));
    assert_eq!(config.timings.settle, Duration::from_millis(50));
    assert_eq!(config.timings.enter, Duration::from_millis(300));
    assert_eq!(config.fetch_delays.preview, Duration::from_millis(300));
    assert_eq!(config.default_route, Route::Home);
    assert!(config.is_section_alias("hero"));
    assert!(config.is_section_alias("cta"));
    assert!(!config.is_section_alias("features"));
  }

  #[test]
  fn registry_can_be_narrowed() {
    let config = AppConfig::default().with_routes(vec![Route::Home, Route::Features]);
    assert!(config.is_registered(Route::Features));
    assert!(!config.is_registered(Route::Pricing));
  }
}
