use std::{cell::RefCell, rc::Rc};
use dioxus::{logger::tracing::{error, info}, prelude::*};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
  components::template::{Footer, NavBar},
  platform::web::WebHost,
  router::{request::{NavRequest, Navigator}, Router},
  utils::config::AppConfig
};

#[component]
pub fn App() -> Element {
  static CSS: Asset = asset!("assets/main.css");

  let (navigator, requests) = use_hook(|| {
    let (navigator, requests) = Navigator::channel();
    (navigator, Rc::new(RefCell::new(Some(requests))))
  });
  use_context_provider({
    let navigator = navigator.clone();
    move || navigator
  });

  // the shell has to be in the DOM before the router looks for its mount points
  use_effect(move || {
    let Some(requests) = requests.borrow_mut().take() else { return };
    spawn(start(AppConfig::default(), navigator.clone(), requests));
  });

  rsx! {
    document::Stylesheet {href: CSS},
    NavBar { }
    main {
      id: "main-content",
      class: "main-content",
    }
    Footer { }
  }
}

/// Attach to the page and serve navigation for the lifetime of the app.
pub async fn start(config: AppConfig, navigator: Navigator, requests: UnboundedReceiver<NavRequest>) {
  let host = match WebHost::new(&config) {
    Ok(host) => host,
    Err(e) => {
      error!("initialization aborted: {}", e);
      return;
    }
  };

  let _popstate = host.on_popstate(navigator.clone());
  let _scroll = host.install_scroll_effect(config.scroll_threshold);

  info!("router starting");
  let mut router = Router::new(host, navigator, config);
  router.run(requests).await;
}
