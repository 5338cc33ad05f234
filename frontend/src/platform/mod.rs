//! Platform primitives the router and views drive: the main container,
//! navigation links, history, scrolling and DOM listeners.

pub mod memory;
pub mod web;

use std::{any::Any, cell::Cell, rc::Rc, time::Duration};

use crate::router::{request::Navigator, routes::Route};
use crate::utils::config::AppConfig;

/// Cancellation flag shared by everything one view mount started.
#[derive(Debug, Clone, Default)]
pub struct MountToken {
  cancelled: Rc<Cell<bool>>
}

impl MountToken {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn cancel(&self) {
    self.cancelled.set(true);
  }

  pub fn is_cancelled(&self) -> bool {
    self.cancelled.get()
  }
}

/// Keeps a DOM listener attached until dropped.
pub struct Binding {
  _guard: Box<dyn Any>
}

impl Binding {
  pub fn new(guard: impl Any) -> Self {
    Self { _guard: Box::new(guard) }
  }
}

#[allow(async_fn_in_trait)]
pub trait Host {
  /// Swap the main container's content in one step.
  fn replace_content(&self, markup: &str);

  fn add_classes(&self, classes: &[&str]);

  fn remove_classes(&self, classes: &[&str]);

  /// Resolves when the container reports the end of its CSS transition,
  /// or after `fallback` if it never does.
  async fn transition_end(&self, fallback: Duration);

  /// Toggle the `active` class on every navbar link; `is_active` receives the link's href.
  fn highlight_nav(&self, is_active: &dyn Fn(&str) -> bool);

  fn push_history(&self, route: Route);

  fn location_fragment(&self) -> String;

  fn scroll_to_top(&self);

  /// Smooth-scroll to the element with `id`. Returns false if it is absent.
  fn scroll_to_section(&self, id: &str) -> bool;

  /// Replace the content of the element with `id` inside the container.
  /// Returns false if it is absent.
  fn write_region(&self, id: &str, markup: &str) -> bool;

  /// Attach click listeners to every `data-nav` marker inside the container.
  fn bind_nav_markers(&self, navigator: &Navigator, config: &AppConfig) -> Vec<Binding>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clones_share_cancellation() {
    let token = MountToken::new();
    let held_by_fetch = token.clone();
    assert!(!held_by_fetch.is_cancelled());
    token.cancel();
    assert!(held_by_fetch.is_cancelled());
  }

  #[test]
  fn binding_drops_its_guard() {
    struct Flag(Rc<Cell<bool>>);
    impl Drop for Flag {
      fn drop(&mut self) {
        self.0.set(true);
      }
    }

    let dropped = Rc::new(Cell::new(false));
    let binding = Binding::new(Flag(dropped.clone()));
    assert!(!dropped.get());
    drop(binding);
    assert!(dropped.get());
  }
}
