use std::time::Duration;
use dioxus::logger::tracing::debug;
use rust_decimal_macros::dec;

use crate::platform::MountToken;
use super::server::{Feature, Payload, Plan};

pub const FEATURES_ENDPOINT: &str = "features";
pub const PRICING_ENDPOINT: &str = "pricing";

/// Simulated content fetch. Resolves after `delay` with the payload stored
/// under `endpoint`, or `None` when the endpoint is unknown or the mount that
/// issued the request was torn down while waiting.
pub async fn fetch_data(endpoint: &str, delay: Duration, token: &MountToken) -> Option<Payload> {
  async_std::task::sleep(delay).await;
  if token.is_cancelled() {
    debug!("dropping stale response for '{}'", endpoint);
    return None;
  }
  mock_data(endpoint)
}

pub fn mock_data(endpoint: &str) -> Option<Payload> {
  match endpoint {
    FEATURES_ENDPOINT => Some(Payload::Features(features())),
    PRICING_ENDPOINT => Some(Payload::Pricing(vec![court_owner_plan()])),
    _ => None
  }
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

fn feature(id: u32, icon: &str, image: &str, title: &str, short_desc: &str, full_desc: &str, benefits: &[&str]) -> Feature {
  Feature {
    id,
    icon: icon.to_string(),
    image: image.to_string(),
    title: title.to_string(),
    short_desc: short_desc.to_string(),
    full_desc: full_desc.to_string(),
    benefits: strings(benefits)
  }
}

fn features() -> Vec<Feature> {
  vec![
    feature(
      1,
      "🎯",
      "https://images.unsplash.com/photo-1626224583764-f87db24ac4ea?w=400&h=300&fit=crop",
      "Smart Booking System",
      "Intelligent scheduling that eliminates conflicts",
      "Our AI-powered booking system analyzes court availability, player preferences, and historical data to provide optimal scheduling recommendations. Say goodbye to double bookings and scheduling conflicts forever.",
      &["Real-time availability updates", "Conflict detection & prevention", "Automated waitlist management", "Smart time slot recommendations"]
    ),
    feature(
      2,
      "📋",
      "https://www.roller.software/hubfs/Understanding%20%26%20Choosing%20Queue%20Management%20Systems_Social(2_1)-1.png",
      "Queue Management",
      "Fair and transparent queue system",
      "Revolutionary queue management that ensures every player gets fair access to courts. Our transparent system shows real-time positions and estimated wait times.",
      &["Live queue position tracking", "Estimated wait time display", "Priority queue options", "SMS/Push notifications"]
    ),
    feature(
      3,
      "📊",
      "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=300&fit=crop",
      "Analytics Dashboard",
      "Insights for players and court owners",
      "Comprehensive analytics that help court owners optimize operations and players track their playing patterns. Make data-driven decisions with beautiful visualizations.",
      &["Court utilization reports", "Peak hours analysis", "Revenue tracking", "Player engagement metrics"]
    ),
    feature(
      4,
      "💳",
      "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=300&fit=crop",
      "Seamless Payments",
      "Multiple payment options integrated",
      "Accept payments through various channels including credit cards, e-wallets, and bank transfers. Automated invoicing and receipt generation included.",
      &["Multiple payment gateways", "Auto-generated invoices", "Refund management", "Payment history tracking"]
    ),
    feature(
      5,
      "🔔",
      "https://images.unsplash.com/photo-1611532736597-de2d4265fba3?w=400&h=300&fit=crop",
      "Smart Notifications",
      "Never miss a booking or update",
      "Stay informed with intelligent notifications that alert you about bookings, cancellations, and special promotions without overwhelming your inbox.",
      &["Customizable alert preferences", "Multi-channel delivery", "Booking reminders", "Promotional updates"]
    ),
    feature(
      6,
      "👥",
      "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?w=400&h=300&fit=crop",
      "Community Features",
      "Connect with fellow players",
      "Build your badminton community with features like player profiles, match history, and social connections. Find partners and organize tournaments easily.",
      &["Player profiles & ratings", "Match history tracking", "Tournament organization", "Social connections"]
    ),
  ]
}

fn court_owner_plan() -> Plan {
  Plan {
    id: 1,
    name: "Court Owner".to_string(),
    subtitle: "For courts, venues & clubs".to_string(),
    price: dec!(5000),
    period: "month per court".to_string(),
    featured: true,
    features: strings(&[
      "Complete booking management",
      "Real-time court availability",
      "Queue management system",
      "Full analytics dashboard",
      "Payment processing",
      "Staff account management",
      "Custom branding options",
      "SMS & email notifications",
      "Priority customer support",
      "Mobile app integration"
    ])
  }
}
