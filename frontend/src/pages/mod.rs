//! Page views. Each page renders its markup up front and fills in its data
//! regions once mounted.

pub mod features;
pub mod home;
pub mod pricing;

use std::time::Duration;

use crate::{
  platform::{Binding, Host, MountToken},
  router::{request::Navigator, routes::Route},
  utils::{config::AppConfig, mock, server::Payload}
};
use features::FeaturesView;
use home::HomeView;
use pricing::PricingView;

pub const LOADING_SPINNER: &str = r#"<div class="loading-spinner"><div class="spinner"></div></div>"#;

pub(crate) const CHECK_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
</svg>"#;

pub(crate) const BACK_BUTTON: &str = r##"<a href="#" class="back-button" data-nav="home">
    <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" fill="none" viewBox="0 0 24 24" stroke="currentColor">
        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 19l-7-7m0 0l7-7m-7 7h18" />
    </svg>
    Back to Home
</a>"##;

pub(crate) fn checklist(items: &[String]) -> String {
  items
    .iter()
    .map(|item| format!("<li>{}{}</li>", CHECK_ICON, item))
    .collect()
}

/// What a mounted view gets to work with. Views never see the router.
pub struct MountContext<'a, H: Host> {
  pub host: &'a H,
  pub navigator: &'a Navigator,
  pub config: &'a AppConfig
}

/// Resources owned by one mount of a view.
#[derive(Default)]
pub struct Lifecycle {
  token: MountToken,
  bindings: Vec<Binding>
}

impl Lifecycle {
  pub fn token(&self) -> &MountToken {
    &self.token
  }

  /// Keep listeners alive for the rest of the mount. Listeners bound after
  /// the mount was torn down are dropped straight away.
  pub fn attach(&mut self, bindings: Vec<Binding>) {
    if !self.token.is_cancelled() {
      self.bindings.extend(bindings);
    }
  }

  pub fn release(&mut self) {
    self.token.cancel();
    self.bindings.clear();
  }
}

#[allow(async_fn_in_trait)]
pub trait View {
  /// Markup for the whole page. Must not touch the DOM.
  fn render(&self) -> String;

  fn lifecycle(&self) -> &Lifecycle;

  fn lifecycle_mut(&mut self) -> &mut Lifecycle;

  /// Runs once the rendered markup is attached.
  async fn after_mount<H: Host>(&mut self, _ctx: &MountContext<'_, H>) {}

  /// Runs before the markup is detached. Cancels pending work and drops listeners.
  fn before_unmount(&mut self) {
    self.lifecycle_mut().release();
  }

  async fn fetch_data(&self, endpoint: &str, delay: Duration) -> Option<Payload> {
    mock::fetch_data(endpoint, delay, self.lifecycle().token()).await
  }

  /// Region write that becomes a no-op once this mount is cancelled.
  fn write_region<H: Host>(&self, host: &H, id: &str, markup: &str) -> bool {
    if self.lifecycle().token().is_cancelled() {
      return false;
    }
    host.write_region(id, markup)
  }

  fn bind_markers<H: Host>(&mut self, ctx: &MountContext<'_, H>) {
    let bindings = ctx.host.bind_nav_markers(ctx.navigator, ctx.config);
    self.lifecycle_mut().attach(bindings);
  }
}

pub enum Page {
  Home(HomeView),
  Features(FeaturesView),
  Pricing(PricingView)
}

impl Page {
  pub fn new(route: Route) -> Self {
    match route {
      Route::Home => Page::Home(HomeView::default()),
      Route::Features => Page::Features(FeaturesView::default()),
      Route::Pricing => Page::Pricing(PricingView::default())
    }
  }

  pub fn route(&self) -> Route {
    match self {
      Page::Home(_) => Route::Home,
      Page::Features(_) => Route::Features,
      Page::Pricing(_) => Route::Pricing
    }
  }

  pub fn token(&self) -> MountToken {
    match self {
      Page::Home(view) => view.lifecycle().token().clone(),
      Page::Features(view) => view.lifecycle().token().clone(),
      Page::Pricing(view) => view.lifecycle().token().clone()
    }
  }

  pub fn render(&self) -> String {
    match self {
      Page::Home(view) => view.render(),
      Page::Features(view) => view.render(),
      Page::Pricing(view) => view.render()
    }
  }

  pub async fn after_mount<H: Host>(&mut self, ctx: &MountContext<'_, H>) {
    match self {
      Page::Home(view) => view.after_mount(ctx).await,
      Page::Features(view) => view.after_mount(ctx).await,
      Page::Pricing(view) => view.after_mount(ctx).await
    }
  }

  pub fn before_unmount(&mut self) {
    match self {
      Page::Home(view) => view.before_unmount(),
      Page::Features(view) => view.before_unmount(),
      Page::Pricing(view) => view.before_unmount()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn render_is_idempotent() {
    for route in Route::ALL {
      let page = Page::new(route);
      assert_eq!(page.route(), route);
      assert_eq!(page.render(), page.render());
    }
  }

  #[test]
  fn unmount_cancels_the_mount_token() {
    let mut page = Page::new(Route::Features);
    let token = page.token();
    page.before_unmount();
    assert!(token.is_cancelled());
  }

  #[test]
  fn checklist_wraps_items() {
    let html = checklist(&["Revenue tracking".to_string()]);
    assert!(html.starts_with("<li><svg"));
    assert!(html.ends_with("Revenue tracking</li>"));
  }
}
