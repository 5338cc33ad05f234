use dioxus::logger::tracing::warn;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum NavRequest {
  /// navigate to a route by name, optionally recording a history entry
  Go { route: String, update_history: bool },
  /// a navbar link was followed; the router decides between a section scroll and a route
  Link { fragment: String },
  /// the browser popped a history entry carrying this route, if any
  History { route: Option<String> }
}

/// Cloneable handle that DOM callbacks use to ask the router for a
/// navigation. Views hold one of these instead of a router reference.
#[derive(Clone)]
pub struct Navigator {
  tx: UnboundedSender<NavRequest>
}

impl PartialEq for Navigator {
  fn eq(&self, other: &Self) -> bool {
    self.tx.same_channel(&other.tx)
  }
}

impl Navigator {
  pub fn channel() -> (Self, UnboundedReceiver<NavRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Self { tx }, rx)
  }

  pub fn request(&self, request: NavRequest) {
    if let Err(e) = self.tx.send(request) {
      warn!("router is gone, dropping navigation request: {:?}", e.0);
    }
  }

  pub fn go(&self, route: Route) {
    self.go_to(route.as_str());
  }

  pub fn go_to(&self, route: &str) {
    self.request(NavRequest::Go { route: route.to_string(), update_history: true });
  }

  pub fn follow_link(&self, href: &str) {
    self.request(NavRequest::Link { fragment: href.to_string() });
  }

  pub fn history(&self, route: Option<String>) {
    self.request(NavRequest::History { route });
  }
}
