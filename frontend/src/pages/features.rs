use crate::{
  platform::Host,
  utils::{mock::FEATURES_ENDPOINT, server::{Feature, Payload}}
};
use super::{checklist, Lifecycle, MountContext, View, BACK_BUTTON, LOADING_SPINNER};

pub const FEATURES_FULL_GRID: &str = "features-full-grid";

fn feature_row(index: usize, feature: &Feature) -> String {
  // every other row puts the image on the right
  let reverse = if index % 2 == 1 { " reverse" } else { "" };
  format!(
    r#"<div class="feature-full-card{reverse}">
    <div class="feature-full-image"><img src="{image}" alt="{title}" loading="lazy"></div>
    <div class="feature-full-content">
        <h3>{title}</h3>
        <p>{desc}</p>
        <ul class="feature-benefits">{benefits}</ul>
    </div>
</div>"#,
    reverse = reverse,
    image = feature.image,
    title = feature.title,
    desc = feature.full_desc,
    benefits = checklist(&feature.benefits)
  )
}

#[derive(Default)]
pub struct FeaturesView {
  lifecycle: Lifecycle
}

impl FeaturesView {
  async fn load_full_features<H: Host>(&self, ctx: &MountContext<'_, H>) {
    let Some(features) = self
      .fetch_data(FEATURES_ENDPOINT, ctx.config.fetch_delays.full)
      .await
      .and_then(Payload::into_features) else { return };

    let rows: String = features.iter().enumerate().map(|(i, feature)| feature_row(i, feature)).collect();
    self.write_region(ctx.host, FEATURES_FULL_GRID, &rows);
  }
}

impl View for FeaturesView {
  fn render(&self) -> String {
    format!(
      r#"<section class="view-container">
    <div class="container">
        {back}
        <div class="view-header">
            <span class="section-label">Our Features</span>
            <h1 class="section-title">Everything You Need</h1>
            <p>Comprehensive tools designed to revolutionize how you book and manage badminton courts.</p>
        </div>
        <div class="features-full-grid" id="{grid}">{spinner}</div>
    </div>
</section>"#,
      back = BACK_BUTTON,
      grid = FEATURES_FULL_GRID,
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
    self.load_full_features(ctx).await;
    self.bind_markers(ctx);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::mock::mock_data;

  #[test]
  fn render_shows_spinner_and_back_link() {
    let html = FeaturesView::default().render();
    assert!(html.contains(r#"id="features-full-grid"><div class="loading-spinner">"#));
    assert!(html.contains(r#"data-nav="home""#));
  }

  #[test]
  fn odd_rows_are_reversed() {
    let features = mock_data(FEATURES_ENDPOINT).and_then(Payload::into_features).unwrap();
    assert!(feature_row(0, &features[0]).starts_with(r#"<div class="feature-full-card">"#));
    assert!(feature_row(1, &features[1]).starts_with(r#"<div class="feature-full-card reverse">"#));
    assert_eq!(feature_row(2, &features[2]).matches("<li>").count(), 4);
  }
}
