use crate::{
  platform::Host,
  utils::{format::thousands, mock::{FEATURES_ENDPOINT, PRICING_ENDPOINT}, server::{Feature, Payload, Plan}}
};
use super::{checklist, Lifecycle, MountContext, View, LOADING_SPINNER};

pub const FEATURES_GRID: &str = "features-grid";
pub const PRICING_PREVIEW: &str = "pricing-preview";
const PREVIEW_FEATURES: usize = 3;

const ARROW_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" fill="none" viewBox="0 0 24 24" stroke="currentColor">
    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M14 5l7 7m0 0l-7 7m7-7H3" />
</svg>"#;

const HERO: &str = r##"
<section class="hero" id="hero">
    <div class="container hero-container">
        <div class="hero-content">
            <div class="hero-badge">
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 10V3L4 14h7v7l9-11h-7z" />
                </svg>
                <span>Powered by Tresio</span>
            </div>
            <h1 class="hero-title">
                Book Courts with <span>Fairness</span> & <span>Transparency</span>
            </h1>
            <p class="hero-description">
                The ultimate solution for Zamboanga City's badminton community.
                Say goodbye to double bookings, manual scheduling headaches, and long queue times.
            </p>
            <div class="hero-buttons">
                <a href="#cta" class="btn btn-primary">Launch App</a>
                <a href="#features" class="btn btn-glass">Learn More</a>
            </div>
        </div>
        <div class="hero-visual">
            <div class="hero-card float-animation">
                <div class="hero-card-content">
                    <div class="hero-card-header">
                        <div class="hero-card-icon">🏸</div>
                        <div>
                            <div class="hero-card-title">Available Courts</div>
                            <div class="hero-card-subtitle">Today's Schedule</div>
                        </div>
                    </div>
                    <div class="booking-preview">
                        <div class="booking-slot">
                            <div class="slot-info">
                                <span class="slot-court">Court A - Premium</span>
                                <span class="slot-time">9:00 AM - 10:00 AM</span>
                            </div>
                            <span class="slot-status available">Available</span>
                        </div>
                        <div class="booking-slot">
                            <div class="slot-info">
                                <span class="slot-court">Court B - Standard</span>
                                <span class="slot-time">9:00 AM - 10:00 AM</span>
                            </div>
                            <span class="slot-status booked">Booked</span>
                        </div>
                        <div class="booking-slot">
                            <div class="slot-info">
                                <span class="slot-court">Court C - Premium</span>
                                <span class="slot-time">10:00 AM - 11:00 AM</span>
                            </div>
                            <span class="slot-status available">Available</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    </div>
</section>
"##;

const CAROUSEL_COURTS: [&str; 8] = [
  "🏸 ZC Sports Hub",
  "🏆 Champions Arena",
  "⭐ Premier Courts",
  "🎯 Ace Badminton",
  "🏅 Elite Sports Center",
  // repeated so the scrolling track loops without a gap
  "🏸 ZC Sports Hub",
  "🏆 Champions Arena",
  "⭐ Premier Courts",
];

const CTA: &str = r##"
<section class="cta-section" id="cta">
    <div class="container">
        <div class="cta-wrapper">
            <div class="cta-content">
                <span class="cta-label">Ready to Play?</span>
                <h2 class="cta-title">Experience the Future of Court Booking</h2>
                <p class="cta-description">
                    Join hundreds of players who have already transformed their booking experience.
                    No more waiting in line or dealing with scheduling conflicts.
                </p>
                <div class="cta-features">
                    <div class="cta-feature"><span>Instant booking confirmation</span></div>
                    <div class="cta-feature"><span>Real-time queue updates</span></div>
                    <div class="cta-feature"><span>Fair and transparent system</span></div>
                </div>
                <a href="#" class="btn btn-primary" id="launch-app-btn">Launch App Now</a>
            </div>
            <div class="cta-visual">
                <div class="phone-mockup">
                    <div class="phone-screen">
                        <div class="phone-notch"></div>
                        <div class="phone-content">
                            <div class="phone-header">
                                <h4>🏸 Rallio</h4>
                                <p>Smart Court Booking</p>
                            </div>
                            <div class="phone-card">
                                <div class="phone-card-title">Quick Book</div>
                                <div class="phone-mini-slots">
                                    <div class="mini-slot"><span>Court A</span><span class="slot-open">Book →</span></div>
                                    <div class="mini-slot"><span>Court B</span><span class="slot-queue">Queue</span></div>
                                    <div class="mini-slot"><span>Court C</span><span class="slot-open">Book →</span></div>
                                </div>
                            </div>
                            <div class="phone-card">
                                <div class="phone-card-title">Your Position</div>
                                <div class="queue-position">
                                    <span class="queue-number">#3</span>
                                    <p class="queue-wait">~15 min wait</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    </div>
</section>
"##;

const FEATURES_SECTION: &str = r#"
<section class="features-section" id="features">
    <div class="container">
        <div class="section-header">
            <span class="section-label">What We Offer</span>
            <h2 class="section-title">Feature Highlights</h2>
            <p>Discover how Rallio transforms your badminton experience with cutting-edge features designed for players and court owners alike.</p>
        </div>
        <div class="features-grid" id="features-grid"></div>
    </div>
</section>
"#;

const PRICING_SECTION: &str = r#"
<section class="pricing-section" id="pricing">
    <div class="container">
        <div class="section-header">
            <span class="section-label">Simple Pricing</span>
            <h2 class="section-title">For Court Owners</h2>
            <p>One simple plan to manage your court, venue, or club. Players use Rallio for free!</p>
        </div>
        <div class="pricing-preview pricing-single" id="pricing-preview"></div>
    </div>
</section>
"#;

const TEAM: [(&str, &str, &str); 4] = [
  ("Jelaine Macias", "Project Manager", "./assets/images/Jelaine.jpg"),
  ("Margie Marie Clarion", "UI/UX", "./assets/images/Margie.jpg"),
  ("Vhan Louie Bulanadi", "Quality Assurance", "./assets/images/Vhan.jpg"),
  ("Ahmad Yahiya", "Lead Programmer", "./assets/images/Ahmad.jpg"),
];

fn curve_divider(path: &str) -> String {
  format!(
    r#"<div class="curve-divider"><svg viewBox="0 0 1440 100" preserveAspectRatio="none"><path d="{}"></path></svg></div>"#,
    path
  )
}

fn carousel() -> String {
  let slides: String = CAROUSEL_COURTS
    .iter()
    .map(|court| format!(r#"<div class="carousel-slide"><div class="court-logo">{}</div></div>"#, court))
    .collect();
  format!(
    r#"<div class="hero-carousel"><p class="carousel-label">Trusted by Top Courts in Zamboanga City</p><div class="carousel-track">{}</div></div>"#,
    slides
  )
}

fn team_section() -> String {
  let cards: String = TEAM
    .iter()
    .map(|(name, role, photo)| format!(
      r#"<div class="team-card glass-card">
    <div class="team-avatar"><img src="{photo}" alt="{name}"></div>
    <div class="team-info"><h3 class="team-name">{name}</h3><p class="team-role">{role}</p></div>
</div>"#
    ))
    .collect();
  format!(
    r#"<section class="team-section" id="team">
    <div class="container">
        <div class="section-header">
            <span class="section-label">Our Team</span>
            <h2 class="section-title">Meet the People Behind Rallio</h2>
            <p>A passionate team dedicated to revolutionizing badminton court booking in Zamboanga City.</p>
        </div>
        <div class="team-grid">{}</div>
    </div>
</section>"#,
    cards
  )
}

fn preview_card(feature: &Feature) -> String {
  format!(
    r##"<div class="feature-card glass-card">
    <div class="feature-image"><img src="{image}" alt="{title}" loading="lazy"></div>
    <h3 class="feature-title">{title}</h3>
    <p class="feature-description">{desc}</p>
    <a href="#" class="feature-link" data-nav="features" data-feature="{id}">Read More {arrow}</a>
</div>"##,
    image = feature.image,
    title = feature.title,
    desc = feature.short_desc,
    id = feature.id,
    arrow = ARROW_ICON
  )
}

fn pricing_preview_card(plan: &Plan) -> String {
  format!(
    r##"<div class="pricing-card featured single-plan">
    <span class="pricing-badge">Court Owner Plan</span>
    <div class="pricing-header">
        <h3 class="pricing-title">{name}</h3>
        <p class="pricing-subtitle">{subtitle}</p>
    </div>
    <div class="pricing-price">₱{price}<span>/{period}</span></div>
    <ul class="pricing-features">{features}</ul>
    <a href="#" class="btn btn-primary" data-nav="pricing">Get Started</a>
    <p class="pricing-note">Players always use Rallio for free</p>
</div>"##,
    name = plan.name,
    subtitle = plan.subtitle,
    price = thousands(plan.price),
    period = plan.period,
    features = checklist(&plan.features)
  )
}

#[derive(Default)]
pub struct HomeView {
  lifecycle: Lifecycle
}

impl HomeView {
  async fn load_features<H: Host>(&self, ctx: &MountContext<'_, H>) {
    if !self.write_region(ctx.host, FEATURES_GRID, LOADING_SPINNER) {
      return;
    }
    let Some(features) = self
      .fetch_data(FEATURES_ENDPOINT, ctx.config.fetch_delays.preview)
      .await
      .and_then(Payload::into_features) else { return };

    let cards: String = features.iter().take(PREVIEW_FEATURES).map(preview_card).collect();
    self.write_region(ctx.host, FEATURES_GRID, &cards);
  }

  async fn load_pricing_preview<H: Host>(&self, ctx: &MountContext<'_, H>) {
    if !self.write_region(ctx.host, PRICING_PREVIEW, LOADING_SPINNER) {
      return;
    }
    let plans = self
      .fetch_data(PRICING_ENDPOINT, ctx.config.fetch_delays.preview)
      .await
      .and_then(Payload::into_plans);
    if let Some(plan) = plans.as_ref().and_then(|plans| plans.first()) {
      self.write_region(ctx.host, PRICING_PREVIEW, &pricing_preview_card(plan));
    }
  }
}

impl View for HomeView {
  fn render(&self) -> String {
    [
      HERO.to_string(),
      carousel(),
      curve_divider("M0,50 C360,100 1080,0 1440,50 L1440,100 L0,100 Z"),
      CTA.to_string(),
      FEATURES_SECTION.to_string(),
      curve_divider("M0,50 C360,0 1080,100 1440,50 L1440,100 L0,100 Z"),
      PRICING_SECTION.to_string(),
      team_section()
    ]
    .concat()
  }

  fn lifecycle(&self) -> &Lifecycle {
    &self.lifecycle
  }

  fn lifecycle_mut(&mut self) -> &mut Lifecycle {
    &mut self.lifecycle
  }

  async fn after_mount<H: Host>(&mut self, ctx: &MountContext<'_, H>) {
    futures::join!(self.load_features(ctx), self.load_pricing_preview(ctx));
    self.bind_markers(ctx);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::mock::mock_data;

  #[test]
  fn render_has_sections_and_empty_regions() {
    let html = HomeView::default().render();
    for id in ["hero", "cta", "features", "pricing", "team"] {
      assert!(html.contains(&format!("id=\"{}\"", id)), "missing section {}", id);
    }
    assert!(html.contains(r#"<div class="features-grid" id="features-grid"></div>"#));
    assert!(html.contains("Ahmad Yahiya"));
    assert_eq!(html.matches("carousel-slide").count(), 8);
  }

  #[test]
  fn preview_card_links_to_features() {
    let features = mock_data(FEATURES_ENDPOINT).and_then(Payload::into_features).unwrap();
    let card = preview_card(&features[1]);
    assert!(card.contains("Queue Management"));
    assert!(card.contains(r#"data-nav="features" data-feature="2""#));
  }

  #[test]
  fn pricing_preview_formats_price() {
    let plans = mock_data(PRICING_ENDPOINT).and_then(Payload::into_plans).unwrap();
    let card = pricing_preview_card(&plans[0]);
    assert!(card.contains("₱5,000<span>/month per court</span>"));
    assert_eq!(card.matches("<li>").count(), 10);
  }
}
