//! In-memory host that records what the router does to the page. Used by
//! the test suites in place of a browser.

use std::{cell::{Cell, RefCell}, collections::{BTreeSet, HashMap}, rc::Rc, time::Duration};

use crate::router::{request::Navigator, routes::{resolve_marker, Route}};
use crate::utils::config::AppConfig;
use super::{Binding, Host};

struct MarkerBinding {
  marker: String,
  route: Route,
  navigator: Navigator,
  attached: Rc<Cell<bool>>
}

struct Detach(Rc<Cell<bool>>);

impl Drop for Detach {
  fn drop(&mut self) {
    self.0.set(false);
  }
}

#[derive(Default)]
struct Page {
  content: String,
  content_writes: Vec<String>,
  regions: HashMap<String, String>,
  classes: BTreeSet<String>,
  class_log: Vec<String>,
  transitions: usize,
  nav_links: Vec<String>,
  active_links: Vec<String>,
  history: Vec<Route>,
  cursor: usize,
  fragment: String,
  scroll_to_top: usize,
  scrolled_sections: Vec<String>,
  markers: Vec<MarkerBinding>
}

#[derive(Clone, Default)]
pub struct MemoryHost {
  page: Rc<RefCell<Page>>
}

fn markers_in(markup: &str) -> Vec<String> {
  const ATTR: &str = "data-nav=\"";
  let mut found = Vec::new();
  let mut rest = markup;
  while let Some(start) = rest.find(ATTR) {
    rest = &rest[start + ATTR.len()..];
    if let Some(end) = rest.find('"') {
      found.push(rest[..end].to_string());
      rest = &rest[end..];
    }
  }
  found
}

impl MemoryHost {
  /// Host with the default navbar links and the address bar at `fragment`.
  pub fn new(fragment: &str) -> Self {
    let host = Self::default();
    {
      let mut page = host.page.borrow_mut();
      page.fragment = fragment.to_string();
      page.nav_links = ["#hero", "#features", "#pricing", "#cta"].iter().map(|s| s.to_string()).collect();
    }
    host
  }

  pub fn content(&self) -> String {
    self.page.borrow().content.clone()
  }

  /// Every markup string the container has been given, oldest first.
  pub fn content_writes(&self) -> Vec<String> {
    self.page.borrow().content_writes.clone()
  }

  pub fn region(&self, id: &str) -> Option<String> {
    self.page.borrow().regions.get(id).cloned()
  }

  pub fn classes(&self) -> Vec<String> {
    self.page.borrow().classes.iter().cloned().collect()
  }

  /// `+class` / `-class` entries in the order the router applied them.
  pub fn class_log(&self) -> Vec<String> {
    self.page.borrow().class_log.clone()
  }

  pub fn transitions(&self) -> usize {
    self.page.borrow().transitions
  }

  pub fn active_links(&self) -> Vec<String> {
    self.page.borrow().active_links.clone()
  }

  pub fn history(&self) -> Vec<Route> {
    self.page.borrow().history.clone()
  }

  pub fn fragment(&self) -> String {
    self.page.borrow().fragment.clone()
  }

  pub fn scroll_to_top_count(&self) -> usize {
    self.page.borrow().scroll_to_top
  }

  pub fn scrolled_sections(&self) -> Vec<String> {
    self.page.borrow().scrolled_sections.clone()
  }

  pub fn attached_markers(&self) -> usize {
    self.page.borrow().markers.iter().filter(|m| m.attached.get()).count()
  }

  /// Simulate the back button. Returns the route stored in the popped-to
  /// entry, which is what a popstate event would carry.
  pub fn back(&self) -> Option<String> {
    let mut page = self.page.borrow_mut();
    if page.cursor <= 1 {
      page.fragment = String::new();
      page.cursor = 0;
      return None;
    }
    page.cursor -= 1;
    let route = page.history[page.cursor - 1];
    page.fragment = route.fragment();
    Some(route.as_str().to_string())
  }

  /// Simulate a click on the first attached marker with this value.
  pub fn click_marker(&self, marker: &str) -> bool {
    let page = self.page.borrow();
    match page.markers.iter().find(|m| m.attached.get() && m.marker == marker) {
      Some(binding) => {
        binding.navigator.go(binding.route);
        true
      },
      None => false
    }
  }

  fn has_region(page: &Page, id: &str) -> bool {
    let needle = format!("id=\"{}\"", id);
    page.content.contains(&needle) || page.regions.values().any(|markup| markup.contains(&needle))
  }
}

impl Host for MemoryHost {
  fn replace_content(&self, markup: &str) {
    let mut page = self.page.borrow_mut();
    page.content = markup.to_string();
    page.content_writes.push(markup.to_string());
    page.regions.clear();
  }

  fn add_classes(&self, classes: &[&str]) {
    let mut page = self.page.borrow_mut();
    for class in classes {
      page.classes.insert(class.to_string());
      page.class_log.push(format!("+{}", class));
    }
  }

  fn remove_classes(&self, classes: &[&str]) {
    let mut page = self.page.borrow_mut();
    for class in classes {
      if page.classes.remove(*class) {
        page.class_log.push(format!("-{}", class));
      }
    }
  }

  // no transitionend ever fires here, so every wait runs to its fallback
  async fn transition_end(&self, fallback: Duration) {
    self.page.borrow_mut().transitions += 1;
    async_std::task::sleep(fallback).await;
  }

  fn highlight_nav(&self, is_active: &dyn Fn(&str) -> bool) {
    let mut page = self.page.borrow_mut();
    page.active_links = page.nav_links.iter().filter(|link| is_active(link)).cloned().collect();
  }

  fn push_history(&self, route: Route) {
    let mut page = self.page.borrow_mut();
    let cursor = page.cursor;
    page.history.truncate(cursor);
    page.history.push(route);
    page.cursor = page.history.len();
    page.fragment = route.fragment();
  }

  fn location_fragment(&self) -> String {
    self.fragment()
  }

  fn scroll_to_top(&self) {
    self.page.borrow_mut().scroll_to_top += 1;
  }

  fn scroll_to_section(&self, id: &str) -> bool {
    let mut page = self.page.borrow_mut();
    if !Self::has_region(&page, id) {
      return false;
    }
    page.scrolled_sections.push(id.to_string());
    true
  }

  fn write_region(&self, id: &str, markup: &str) -> bool {
    let mut page = self.page.borrow_mut();
    if !Self::has_region(&page, id) {
      return false;
    }
    page.regions.insert(id.to_string(), markup.to_string());
    true
  }

  fn bind_nav_markers(&self, navigator: &Navigator, config: &AppConfig) -> Vec<Binding> {
    let mut page = self.page.borrow_mut();
    let mut markup = page.content.clone();
    for region in page.regions.values() {
      markup.push_str(region);
    }

    let mut bindings = Vec::new();
    for marker in markers_in(&markup) {
      let Some(route) = resolve_marker(&marker, config) else { continue };
      let attached = Rc::new(Cell::new(true));
      page.markers.push(MarkerBinding { marker, route, navigator: navigator.clone(), attached: attached.clone() });
      bindings.push(Binding::new(Detach(attached)));
    }
    bindings
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn finds_marker_values() {
    let markup = r##"<a data-nav="home">Back</a><a href="#" data-nav="features">More</a>"##;
    assert_eq!(markers_in(markup), vec!["home".to_string(), "features".to_string()]);
  }

  #[test]
  fn history_truncates_forward_entries() {
    let host = MemoryHost::new("");
    host.push_history(Route::Home);
    host.push_history(Route::Features);
    host.push_history(Route::Pricing);
    assert_eq!(host.back(), Some("features".to_string()));
    assert_eq!(host.fragment(), "#features");

    host.push_history(Route::Home);
    assert_eq!(host.history(), vec![Route::Home, Route::Features, Route::Home]);
  }

  #[test]
  fn regions_only_exist_inside_current_content() {
    let host = MemoryHost::new("");
    host.replace_content(r#"<div id="features-grid"></div>"#);
    assert!(host.write_region("features-grid", "cards"));
    assert!(!host.write_region("pricing-preview", "card"));

    host.replace_content("<p>next</p>");
    assert!(host.region("features-grid").is_none());
  }
}
