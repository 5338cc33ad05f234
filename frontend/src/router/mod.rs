//! Hash router. Owns the mounted page and plays the exit/mount/enter
//! choreography for every navigation.

pub mod request;
pub mod routes;

use std::collections::VecDeque;

use dioxus::logger::tracing::{debug, error, info};
use futures::{future::{select, Either}, pin_mut};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
  pages::{MountContext, Page},
  platform::Host,
  utils::{config::AppConfig, server::AppError}
};
use request::{NavRequest, Navigator};
use routes::{nav_link_matches, route_from_fragment, route_from_history, Route};

const PAGE_EXIT: &str = "page-exit";
const PAGE_EXIT_ACTIVE: &str = "page-exit-active";
const PAGE_ENTER: &str = "page-enter";
const PAGE_ENTER_ACTIVE: &str = "page-enter-active";
const TRANSITION_CLASSES: [&str; 4] = [PAGE_EXIT, PAGE_EXIT_ACTIVE, PAGE_ENTER, PAGE_ENTER_ACTIVE];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavState {
  /// nothing mounted yet
  Unmounted,
  Exiting { to: Route },
  Mounting { to: Route },
  Entering { to: Route },
  Idle(Route)
}

pub struct Router<H: Host> {
  host: H,
  navigator: Navigator,
  config: AppConfig,
  current: Option<Page>,
  state: NavState
}

impl<H: Host> Router<H> {
  pub fn new(host: H, navigator: Navigator, config: AppConfig) -> Self {
    Self { host, navigator, config, current: None, state: NavState::Unmounted }
  }

  pub fn state(&self) -> NavState {
    self.state
  }

  pub fn current_route(&self) -> Option<Route> {
    self.current.as_ref().map(Page::route)
  }

  pub fn host(&self) -> &H {
    &self.host
  }

  /// Route the address bar points at right now.
  pub fn initial_route(&self) -> Route {
    route_from_fragment(&self.host.location_fragment(), &self.config)
  }

  /// Navigate by route name. Unknown or unregistered names are logged and
  /// leave the current page untouched.
  pub async fn navigate_to(&mut self, name: &str, update_history: bool) -> Result<(), AppError> {
    let route = match name.parse::<Route>() {
      Ok(route) if self.config.is_registered(route) => route,
      _ => {
        let e = AppError::UnknownRoute(name.to_string());
        error!("{}", e);
        return Err(e);
      }
    };
    self.navigate(route, update_history).await
  }

  pub async fn navigate(&mut self, route: Route, update_history: bool) -> Result<(), AppError> {
    if !self.config.is_registered(route) {
      let e = AppError::UnknownRoute(route.to_string());
      error!("{}", e);
      return Err(e);
    }
    info!("navigating to {}", route);

    if let Some(mut page) = self.current.take() {
      page.before_unmount();
    }
    // an abandoned navigation may have left its classes behind
    self.host.remove_classes(&TRANSITION_CLASSES);

    self.state = NavState::Exiting { to: route };
    self.host.add_classes(&[PAGE_EXIT, PAGE_EXIT_ACTIVE]);
    self.host.transition_end(self.config.timings.exit).await;

    self.state = NavState::Mounting { to: route };
    let page = Page::new(route);
    self.host.replace_content(&page.render());
    self.current = Some(page);
    self.highlight(route);

    self.state = NavState::Entering { to: route };
    self.host.remove_classes(&[PAGE_EXIT, PAGE_EXIT_ACTIVE]);
    self.host.add_classes(&[PAGE_ENTER]);
    async_std::task::sleep(self.config.timings.settle).await;
    self.host.add_classes(&[PAGE_ENTER_ACTIVE]);
    self.host.remove_classes(&[PAGE_ENTER]);
    self.host.transition_end(self.config.timings.enter).await;
    self.host.remove_classes(&[PAGE_ENTER_ACTIVE]);

    if update_history {
      self.host.push_history(route);
    }
    self.host.scroll_to_top();

    let ctx = MountContext { host: &self.host, navigator: &self.navigator, config: &self.config };
    if let Some(page) = self.current.as_mut() {
      page.after_mount(&ctx).await;
    }

    self.state = NavState::Idle(route);
    debug!("{} settled", route);
    Ok(())
  }

  fn highlight(&self, route: Route) {
    let config = &self.config;
    self.host.highlight_nav(&|link| nav_link_matches(link, route, config));
  }

  /// A navbar link was followed. Section links scroll within the default
  /// view when it is showing and bring it back otherwise.
  pub async fn follow_link(&mut self, fragment: &str) -> Result<(), AppError> {
    let name = fragment.strip_prefix('#').unwrap_or(fragment);
    if !self.config.is_section_alias(name) {
      return self.navigate_to(name, true).await;
    }
    if self.current_route() == Some(self.config.default_route) {
      if !self.host.scroll_to_section(name) {
        debug!("section #{} not on the page", name);
      }
      return Ok(());
    }
    self.navigate(self.config.default_route, true).await
  }

  pub async fn handle(&mut self, request: NavRequest) -> Result<(), AppError> {
    match request {
      NavRequest::Go { route, update_history } => self.navigate_to(&route, update_history).await,
      NavRequest::Link { fragment } => self.follow_link(&fragment).await,
      NavRequest::History { route } => {
        let route = route_from_history(route.as_deref(), &self.config);
        self.navigate(route, false).await
      }
    }
  }

  /// Serve navigation requests until every navigator is dropped, starting
  /// with the route in the address bar. A request that replaces the view
  /// abandons the in-flight navigation. Section scrolls wait for it to
  /// settle, and rejected names are dropped without touching it.
  pub async fn run(&mut self, mut requests: UnboundedReceiver<NavRequest>) {
    let config = self.config.clone();
    let initial = self.initial_route();
    let mut queue = VecDeque::from([NavRequest::Go { route: initial.to_string(), update_history: true }]);

    loop {
      let request = match queue.pop_front() {
        Some(request) => request,
        None => match requests.recv().await {
          Some(request) => request,
          None => break
        }
      };

      let showing = self.current_route();
      let heading = match effect(&request, showing, &config) {
        Effect::Replace(route) => Some(route),
        _ => showing
      };

      let mut closed = false;
      let step = self.handle(request);
      pin_mut!(step);
      loop {
        let incoming = requests.recv();
        pin_mut!(incoming);
        match select(step.as_mut(), incoming).await {
          Either::Left(_) => break,
          Either::Right((Some(next), _)) => match effect(&next, heading, &config) {
            Effect::Replace(route) => {
              debug!("navigation superseded by a request for {}", route);
              queue.clear();
              queue.push_back(next);
              break;
            },
            Effect::Scroll => queue.push_back(next),
            Effect::Reject(e) => error!("{}", e)
          },
          Either::Right((None, pending)) => {
            // every navigator is gone; let the last navigation settle
            let _ = pending.await;
            closed = true;
            break;
          }
        }
      }
      if closed {
        break;
      }
    }
    info!("navigation channel closed, router stopping");
  }
}

/// What a request does to the page when `showing` is (or is about to be) mounted.
#[derive(Debug, PartialEq)]
enum Effect {
  Replace(Route),
  Scroll,
  Reject(AppError)
}

fn effect(request: &NavRequest, showing: Option<Route>, config: &AppConfig) -> Effect {
  let by_name = |name: &str| match name.parse::<Route>() {
    Ok(route) if config.is_registered(route) => Effect::Replace(route),
    _ => Effect::Reject(AppError::UnknownRoute(name.to_string()))
  };

  match request {
    NavRequest::Go { route, .. } => by_name(route),
    NavRequest::Link { fragment } => {
      let name = fragment.strip_prefix('#').unwrap_or(fragment);
      if !config.is_section_alias(name) {
        by_name(name)
      } else if showing == Some(config.default_route) {
        Effect::Scroll
      } else {
        Effect::Replace(config.default_route)
      }
    },
    NavRequest::History { route } => Effect::Replace(route_from_history(route.as_deref(), config))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;
  use crate::platform::memory::MemoryHost;
  use crate::utils::config::{FetchDelays, TransitionTimings};

  fn quick_config() -> AppConfig {
    AppConfig::default()
      .with_timings(TransitionTimings { exit: Duration::ZERO, settle: Duration::from_millis(1), enter: Duration::ZERO })
      .with_fetch_delays(FetchDelays { preview: Duration::from_millis(1), full: Duration::from_millis(1) })
  }

  fn router(fragment: &str) -> (Router<MemoryHost>, UnboundedReceiver<NavRequest>) {
    let (navigator, rx) = Navigator::channel();
    (Router::new(MemoryHost::new(fragment), navigator, quick_config()), rx)
  }

  #[async_std::test]
  async fn phases_run_in_order() {
    let (mut router, _rx) = router("");
    router.navigate(Route::Features, true).await.unwrap();

    assert_eq!(router.state(), NavState::Idle(Route::Features));
    assert_eq!(
      router.host().class_log(),
      vec!["+page-exit", "+page-exit-active", "-page-exit", "-page-exit-active", "+page-enter", "+page-enter-active", "-page-enter", "-page-enter-active"]
    );
    assert!(router.host().classes().is_empty());
    assert_eq!(router.host().transitions(), 2);
    assert_eq!(router.host().scroll_to_top_count(), 1);
  }

  #[async_std::test]
  async fn unknown_name_changes_nothing() {
    let (mut router, _rx) = router("");
    router.navigate(Route::Home, true).await.unwrap();
    let before = router.host().content();

    let result = router.navigate_to("blog", true).await;
    assert_eq!(result, Err(AppError::UnknownRoute("blog".to_string())));
    assert_eq!(router.state(), NavState::Idle(Route::Home));
    assert_eq!(router.host().content(), before);
    assert_eq!(router.host().history(), vec![Route::Home]);
  }

  #[async_std::test]
  async fn unregistered_route_is_rejected() {
    let (navigator, _rx) = Navigator::channel();
    let config = quick_config().with_routes(vec![Route::Home, Route::Features]);
    let mut router = Router::new(MemoryHost::new(""), navigator, config);

    assert!(router.navigate(Route::Pricing, true).await.is_err());
    assert_eq!(router.state(), NavState::Unmounted);
    assert!(router.host().content_writes().is_empty());
  }

  #[async_std::test]
  async fn section_link_scrolls_when_home_is_showing() {
    let (mut router, _rx) = router("");
    router.navigate(Route::Home, true).await.unwrap();
    router.follow_link("#cta").await.unwrap();

    assert_eq!(router.host().scrolled_sections(), vec!["cta".to_string()]);
    assert_eq!(router.host().content_writes().len(), 1);
  }

  #[async_std::test]
  async fn section_link_returns_home_from_other_pages() {
    let (mut router, _rx) = router("");
    router.navigate(Route::Pricing, true).await.unwrap();
    router.follow_link("#hero").await.unwrap();

    assert_eq!(router.current_route(), Some(Route::Home));
    assert!(router.host().scrolled_sections().is_empty());
    assert_eq!(router.host().active_links(), vec!["#hero".to_string()]);
  }

  #[test]
  fn section_links_only_scroll_over_the_default_view() {
    let config = quick_config();
    let cta = NavRequest::Link { fragment: "#cta".into() };
    assert_eq!(effect(&cta, Some(Route::Home), &config), Effect::Scroll);
    assert_eq!(effect(&cta, Some(Route::Pricing), &config), Effect::Replace(Route::Home));
    assert_eq!(effect(&cta, None, &config), Effect::Replace(Route::Home));
  }

  #[test]
  fn rejected_names_never_replace_the_view() {
    let config = quick_config().with_routes(vec![Route::Home, Route::Features]);
    let blog = NavRequest::Go { route: "blog".into(), update_history: true };
    let pricing = NavRequest::Link { fragment: "#pricing".into() };
    assert_eq!(effect(&blog, Some(Route::Home), &config), Effect::Reject(AppError::UnknownRoute("blog".into())));
    assert_eq!(effect(&pricing, Some(Route::Home), &config), Effect::Reject(AppError::UnknownRoute("pricing".into())));
    assert_eq!(effect(&NavRequest::History { route: None }, Some(Route::Features), &config), Effect::Replace(Route::Home));
  }

  #[async_std::test]
  async fn history_request_does_not_push() {
    let (mut router, _rx) = router("");
    router.navigate(Route::Home, true).await.unwrap();
    router.handle(NavRequest::History { route: Some("pricing".into()) }).await.unwrap();

    assert_eq!(router.current_route(), Some(Route::Pricing));
    assert_eq!(router.host().history(), vec![Route::Home]);
  }
}
