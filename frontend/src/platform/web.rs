use std::{cell::Cell, time::Duration};
use dioxus::logger::tracing::{debug, warn};
use gloo_events::{EventListener, EventListenerOptions};
use js_sys::wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, PopStateEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use crate::router::{request::Navigator, routes::{resolve_marker, Route}};
use crate::utils::{config::AppConfig, server::{AppError, HistoryState}};
use super::{Binding, Host};

fn elements(list: web_sys::NodeList) -> Vec<Element> {
  (0..list.length())
    .filter_map(|i| list.get(i))
    .filter_map(|node| node.dyn_into::<Element>().ok())
    .collect()
}

#[derive(Clone)]
pub struct WebHost {
  window: Window,
  document: Document,
  container: Element,
  navbar: Option<Element>
}

impl WebHost {
  /// Locate the mount points. Only the main container is required.
  pub fn new(config: &AppConfig) -> Result<Self, AppError> {
    let window = window().ok_or_else(|| AppError::WasmError("global window should exist".to_string()))?;
    let document = window.document().ok_or_else(|| AppError::WasmError("window has no document".to_string()))?;

    let container = document
      .get_element_by_id(&config.container_id)
      .ok_or_else(|| AppError::MountPointMissing(config.container_id.clone()))?;

    let navbar = document.get_element_by_id(&config.navbar_id);
    if navbar.is_none() {
      warn!("navbar #{} not found, scroll effect disabled", config.navbar_id);
    }
    if document.get_element_by_id(&config.footer_id).is_none() {
      warn!("footer #{} not found", config.footer_id);
    }

    Ok(Self { window, document, container, navbar })
  }

  /// Forward browser back/forward to the router.
  pub fn on_popstate(&self, navigator: Navigator) -> Binding {
    let listener = EventListener::new(&self.window, "popstate", move |event| {
      let route = event
        .dyn_ref::<PopStateEvent>()
        .and_then(|event| event.state().as_string())
        .and_then(|state| serde_json::from_str::<HistoryState>(&state).ok())
        .map(|state| state.route);
      navigator.history(route);
    });
    Binding::new(listener)
  }

  /// Toggle `scrolled` on the navbar once the page scrolls past `threshold`.
  pub fn install_scroll_effect(&self, threshold: f64) -> Option<Binding> {
    let navbar = self.navbar.clone()?;
    let window = self.window.clone();
    let listener = EventListener::new(&self.window, "scroll", move |_| {
      let scrolled = window.scroll_y().map(|y| y > threshold).unwrap_or(false);
      if let Err(e) = navbar.class_list().toggle_with_force("scrolled", scrolled) {
        debug!("navbar class toggle failed: {:?}", e);
      }
    });
    Some(Binding::new(listener))
  }
}

/// Lock page scrolling while the mobile menu is open.
pub fn lock_body_scroll(locked: bool) {
  let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else { return };
  let overflow = if locked { "hidden" } else { "" };
  if let Err(e) = body.style().set_property("overflow", overflow) {
    debug!("body overflow update failed: {:?}", e);
  }
}

impl Host for WebHost {
  fn replace_content(&self, markup: &str) {
    self.container.set_inner_html(markup);
  }

  fn add_classes(&self, classes: &[&str]) {
    for class in classes {
      if let Err(e) = self.container.class_list().add_1(class) {
        debug!("adding class {} failed: {:?}", class, e);
      }
    }
  }

  fn remove_classes(&self, classes: &[&str]) {
    for class in classes {
      if let Err(e) = self.container.class_list().remove_1(class) {
        debug!("removing class {} failed: {:?}", class, e);
      }
    }
  }

  async fn transition_end(&self, fallback: Duration) {
    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    let tx = Cell::new(Some(tx));
    let container = self.container.clone();
    // transitionend bubbles, so ignore the ones fired by descendants
    let _listener = EventListener::new(&self.container, "transitionend", move |event| {
      let own = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .is_some_and(|target| target == container);
      if own {
        if let Some(tx) = tx.take() {
          let _ = tx.send(());
        }
      }
    });

    if async_std::future::timeout(fallback, rx).await.is_err() {
      debug!("no transitionend within {:?}, continuing", fallback);
    }
  }

  fn highlight_nav(&self, is_active: &dyn Fn(&str) -> bool) {
    let links = match self.document.query_selector_all(".nav-links a") {
      Ok(links) => elements(links),
      Err(e) => {
        debug!("nav link lookup failed: {:?}", e);
        return;
      }
    };
    for link in links {
      let href = link.get_attribute("href").unwrap_or_default();
      if let Err(e) = link.class_list().toggle_with_force("active", is_active(&href)) {
        debug!("nav link {} highlight failed: {:?}", href, e);
      }
    }
  }

  fn push_history(&self, route: Route) {
    let state = HistoryState { route: route.as_str().to_string() };
    let state = match serde_json::to_string(&state) {
      Ok(state) => JsValue::from_str(&state),
      Err(e) => {
        warn!("history state not serializable: {}", e);
        JsValue::NULL
      }
    };
    let pushed = self
      .window
      .history()
      .and_then(|history| history.push_state_with_url(&state, "", Some(route.fragment().as_str())));
    if let Err(e) = pushed {
      warn!("{}", AppError::WasmError(format!("{:?}", e)));
    }
  }

  fn location_fragment(&self) -> String {
    self.window.location().hash().unwrap_or_default()
  }

  fn scroll_to_top(&self) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    self.window.scroll_to_with_scroll_to_options(&options);
  }

  fn scroll_to_section(&self, id: &str) -> bool {
    let Some(section) = self.document.get_element_by_id(id) else { return false };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    true
  }

  fn write_region(&self, id: &str, markup: &str) -> bool {
    match self.container.query_selector(&format!("#{}", id)) {
      Ok(Some(region)) => {
        region.set_inner_html(markup);
        true
      },
      _ => false
    }
  }

  fn bind_nav_markers(&self, navigator: &Navigator, config: &AppConfig) -> Vec<Binding> {
    let markers = match self.container.query_selector_all("[data-nav]") {
      Ok(markers) => elements(markers),
      Err(e) => {
        debug!("marker lookup failed: {:?}", e);
        return Vec::new();
      }
    };

    markers
      .into_iter()
      .filter_map(|marker| {
        let value = marker.get_attribute("data-nav")?;
        let Some(route) = resolve_marker(&value, config) else {
          debug!("ignoring marker for unknown route '{}'", value);
          return None;
        };
        let navigator = navigator.clone();
        let listener = EventListener::new_with_options(&marker, "click", EventListenerOptions::enable_prevent_default(), move |event| {
          event.prevent_default();
          navigator.go(route);
        });
        Some(Binding::new(listener))
      })
      .collect()
  }
}
