use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::utils::{config::AppConfig, server::AppError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
  Home,
  Features,
  Pricing
}

impl Route {
  pub const ALL: [Route; 3] = [Route::Home, Route::Features, Route::Pricing];

  pub fn as_str(&self) -> &'static str {
    match self {
      Route::Home => "home",
      Route::Features => "features",
      Route::Pricing => "pricing"
    }
  }

  pub fn fragment(&self) -> String {
    format!("#{}", self.as_str())
  }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Route {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Route::ALL
      .into_iter()
      .find(|route| route.as_str() == s)
      .ok_or_else(|| AppError::UnknownRoute(s.to_string()))
  }
}

fn strip_hash(fragment: &str) -> &str {
  fragment.strip_prefix('#').unwrap_or(fragment)
}

/// Route to show on a fresh load. Section anchors, empty fragments and
/// anything unrecognised all land on the default route.
pub fn route_from_fragment(fragment: &str, config: &AppConfig) -> Route {
  let name = strip_hash(fragment);
  if name.is_empty() || config.is_section_alias(name) {
    return config.default_route;
  }
  match name.parse::<Route>() {
    Ok(route) if config.is_registered(route) => route,
    _ => config.default_route
  }
}

/// Route recorded in a popped history entry, falling back to the default.
pub fn route_from_history(state_route: Option<&str>, config: &AppConfig) -> Route {
  state_route
    .and_then(|name| name.parse::<Route>().ok())
    .filter(|route| config.is_registered(*route))
    .unwrap_or(config.default_route)
}

/// Target of a `data-nav` marker. `home` always means the default view.
pub fn resolve_marker(marker: &str, config: &AppConfig) -> Option<Route> {
  if marker == Route::Home.as_str() {
    return Some(config.default_route);
  }
  marker.parse().ok()
}

/// Whether the nav link pointing at `link_fragment` should be highlighted
/// while `route` is displayed.
pub fn nav_link_matches(link_fragment: &str, route: Route, config: &AppConfig) -> bool {
  let link = strip_hash(link_fragment);
  if link == route.as_str() {
    return true;
  }
  route == config.default_route && (link.is_empty() || link == config.home_anchor)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_route_names() {
    assert_eq!("pricing".parse::<Route>(), Ok(Route::Pricing));
    assert_eq!("blog".parse::<Route>(), Err(AppError::UnknownRoute("blog".to_string())));
    assert_eq!(Route::Features.fragment(), "#features");
  }

  #[test]
  fn fragments_resolve_with_aliases() {
    let config = AppConfig::default();
    assert_eq!(route_from_fragment("#pricing", &config), Route::Pricing);
    assert_eq!(route_from_fragment("#hero", &config), Route::Home);
    assert_eq!(route_from_fragment("#cta", &config), Route::Home);
    assert_eq!(route_from_fragment("", &config), Route::Home);
    assert_eq!(route_from_fragment("#team", &config), Route::Home);
  }

  #[test]
  fn unregistered_fragment_falls_back() {
    let config = AppConfig::default().with_routes(vec![Route::Home, Route::Features]);
    assert_eq!(route_from_fragment("#pricing", &config), Route::Home);
  }

  #[test]
  fn history_state_falls_back_to_default() {
    let config = AppConfig::default();
    assert_eq!(route_from_history(Some("features"), &config), Route::Features);
    assert_eq!(route_from_history(Some("nope"), &config), Route::Home);
    assert_eq!(route_from_history(None, &config), Route::Home);
  }

  #[test]
  fn nav_highlight_treats_hero_as_home() {
    let config = AppConfig::default();
    assert!(nav_link_matches("#hero", Route::Home, &config));
    assert!(nav_link_matches("", Route::Home, &config));
    assert!(nav_link_matches("#features", Route::Features, &config));
    assert!(!nav_link_matches("#hero", Route::Features, &config));
    assert!(!nav_link_matches("#cta", Route::Home, &config));
  }

  #[test]
  fn markers_resolve_home_to_default() {
    let config = AppConfig::default();
    assert_eq!(resolve_marker("home", &config), Some(Route::Home));
    assert_eq!(resolve_marker("pricing", &config), Some(Route::Pricing));
    assert_eq!(resolve_marker("contact", &config), None);
  }
}
