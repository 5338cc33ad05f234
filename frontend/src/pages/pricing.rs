use crate::{
  platform::Host,
  utils::{format::thousands, mock::PRICING_ENDPOINT, server::{Payload, Plan}}
};
use super::{checklist, Lifecycle, MountContext, View, BACK_BUTTON, LOADING_SPINNER};

pub const PRICING_FULL_GRID: &str = "pricing-full-grid";

fn plan_card(plan: &Plan) -> String {
  format!(
    r##"<div class="pricing-full-card featured">
    <div class="pricing-full-header">
        <span class="pricing-badge">Court Owner Plan</span>
        <div class="pricing-icon">🏸</div>
        <h3 class="pricing-title">{name}</h3>
        <p class="pricing-subtitle">{subtitle}</p>
        <div class="pricing-price-large">
            <span class="currency">₱</span>
            <span class="amount">{price}</span>
            <span class="period">/{period}</span>
        </div>
    </div>
    <div class="pricing-full-body">
        <h4 class="features-heading">Everything you need to manage your courts</h4>
        <ul class="pricing-features-grid">{features}</ul>
        <div class="pricing-full-cta">
            <a href="#" class="btn btn-primary btn-large">Get Started Now</a>
            <p class="pricing-note">Players always use Rallio for free</p>
        </div>
    </div>
</div>"##,
    name = plan.name,
    subtitle = plan.subtitle,
    price = thousands(plan.price),
    period = plan.period,
    features = checklist(&plan.features)
  )
}

#[derive(Default)]
pub struct PricingView {
  lifecycle: Lifecycle
}

impl PricingView {
  async fn load_full_pricing<H: Host>(&self, ctx: &MountContext<'_, H>) {
    let plans = self
      .fetch_data(PRICING_ENDPOINT, ctx.config.fetch_delays.full)
      .await
      .and_then(Payload::into_plans);
    if let Some(plan) = plans.as_ref().and_then(|plans| plans.first()) {
      self.write_region(ctx.host, PRICING_FULL_GRID, &plan_card(plan));
    }
  }
}

impl View for PricingView {
  fn render(&self) -> String {
    format!(
      r#"<section class="view-container">
    <div class="container">
        {back}
        <div class="view-header">
            <span class="section-label">Pricing</span>
            <h1 class="section-title">For Court Owners</h1>
            <p>One simple plan to manage your court, venue, or club. Players use Rallio for free!</p>
        </div>
        <div class="pricing-full-wrapper" id="{grid}">{spinner}</div>
    </div>
</section>"#,
      back = BACK_BUTTON,
      grid = PRICING_FULL_GRID,
      spinner = LOADING_SPINNER
    )
  }

  fn lifecycle(&self) -> &Lifecycle {
    &self.lifecycle
  }

  fn lifecycle_mut(&mut self) -> &mut Lifecycle {
    &mut self.lifecycle
  }

  async fn after_mount<H: Host>(&mut self, ctx: &MountContext<'_, H>) {
    self.load_full_pricing(ctx).await;
    self.bind_markers(ctx);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::mock::mock_data;

  #[test]
  fn plan_card_shows_grouped_price_and_period() {
    let plans = mock_data(PRICING_ENDPOINT).and_then(Payload::into_plans).unwrap();
    let card = plan_card(&plans[0]);
    assert!(card.contains(r#"<span class="amount">5,000</span>"#));
    assert!(card.contains(r#"<span class="period">/month per court</span>"#));
    assert!(card.contains("Mobile app integration"));
  }
}
