use dioxus::prelude::*;

use crate::platform::web::lock_body_scroll;
use crate::router::request::Navigator;

const NAV_LINKS: [(&str, &str); 4] = [
  ("#hero", "Home"),
  ("#features", "Features"),
  ("#pricing", "Pricing"),
  ("#cta", "Get Started"),
];

#[component]
pub fn NavBar() -> Element {
  let navigator = use_context::<Navigator>();
  let mut menu_open = use_signal(|| false);

  use_effect(move || lock_body_scroll(menu_open()));

  let links_class = if menu_open() { "nav-links mobile-active" } else { "nav-links" };
  let button_class = if menu_open() { "mobile-menu-btn active" } else { "mobile-menu-btn" };
  let overlay_class = if menu_open() { "mobile-menu-overlay active" } else { "mobile-menu-overlay" };

  rsx!{
    nav {
      id: "navbar",
      class: "navbar",
      div {
        class: "container nav-container",
        a {
          class: "logo",
          href: "#hero",
          onclick: move |evt| {
            evt.prevent_default();
            menu_open.set(false);
            navigator.follow_link("#hero");
          },
          span { class: "logo-icon", "🏸" }
          span { class: "logo-text", "Rallio" }
        }
        div {
          class: "{links_class}",
          for (href, label) in NAV_LINKS {
            NavLink { href, label, menu_open }
          }
        }
        button {
          class: "{button_class}",
          aria_label: "Toggle menu",
          onclick: move |_| menu_open.set(!menu_open()),
          span {}
          span {}
          span {}
        }
      }
    }
    div {
      class: "{overlay_class}",
      onclick: move |_| menu_open.set(false)
    }
  }
}

#[component]
fn NavLink(href: &'static str, label: &'static str, menu_open: Signal<bool>) -> Element {
  let navigator = use_context::<Navigator>();
  rsx!{
    a {
      href,
      onclick: move |evt| {
        evt.prevent_default();
        menu_open.set(false);
        navigator.follow_link(href);
      },
      "{label}"
    }
  }
}

#[component]
pub fn Footer() -> Element {
  rsx!{
    footer {
      id: "footer",
      class: "footer",
      div {
        class: "container footer-container",
        div {
          class: "footer-brand",
          h3 { "🏸 Rallio" }
          p { "Fair and transparent court booking for Zamboanga City's badminton community." }
        }
        div {
          class: "footer-links",
          a { href: "mailto:hello@tresio.dev", class: "footer-link", "Contact" }
        }
        div {
          class: "copyright",
          p { "© 2025 Rallio by Tresio. All rights reserved." }
        }
      }
    }
  }
}
