//! Integration tests for studio-metrics.
//!
//! These tests run the dashboard's own roster end to end: summary cards,
//! per-startup cards, selection and bucketing.

use approx::assert_relative_eq;
use studio_metrics::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn scale_lens() -> StartupRecord {
    StartupRecord::builder()
        .id("1")
        .name("ScaleLens")
        .industry("SaaS")
        .stage("MVP")
        .revenue(dec!(12000))
        .burn(dec!(6000))
        .runway(8.5)
        .customer_acquisition_cost(dec!(45))
        .lifetime_value(dec!(540))
        .user_count(1250)
        .churn_rate(5.2)
        .growth_rate(12.5)
        .risk_level(RiskLevel::Medium)
        .next_step("Focus on LinkedIn outbound → CAC = $50 → ROI = 3.2x")
        .next_step("Optimize onboarding flow to reduce churn by 15%")
        .next_step("Prepare $150k pre-seed raise for Q2")
        .build()
        .unwrap()
}

fn health_ai() -> StartupRecord {
    StartupRecord::builder()
        .id("2")
        .name("HealthAI")
        .industry("HealthTech")
        .stage("Early Traction")
        .revenue(dec!(8500))
        .burn(dec!(4200))
        .runway(14.2)
        .customer_acquisition_cost(dec!(65))
        .lifetime_value(dec!(890))
        .user_count(950)
        .churn_rate(3.8)
        .growth_rate(8.3)
        .risk_level(RiskLevel::Low)
        .next_step("Scale content marketing → 40% organic growth")
        .build()
        .unwrap()
}

fn agro_tech() -> StartupRecord {
    StartupRecord::builder()
        .id("3")
        .name("AgroTech")
        .industry("AgTech")
        .stage("Scaling")
        .revenue(dec!(45000))
        .burn(dec!(12000))
        .runway(18.7)
        .customer_acquisition_cost(dec!(120))
        .lifetime_value(dec!(2400))
        .user_count(3800)
        .churn_rate(2.1)
        .growth_rate(23.1)
        .risk_level(RiskLevel::Low)
        .next_step("Expand to 3 new geographic markets")
        .build()
        .unwrap()
}

fn dashboard_roster() -> Roster {
    Roster::builder()
        .add_startups(vec![scale_lens(), health_ai(), agro_tech()])
        .build()
        .unwrap()
}

// =============================================================================
// DASHBOARD OVERVIEW
// =============================================================================

#[test]
fn test_overview_cards() {
    let roster = dashboard_roster();
    let summary = roster.summarize(&MetricsConfig::default());

    assert_eq!(summary.startup_count, 3);
    assert_eq!(summary.total_revenue, dec!(65500));
    assert_eq!(summary.total_users, 6000);
    assert_relative_eq!(summary.average_growth_rate, 43.9 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(summary.average_growth_display(), 14.6);
    assert_eq!(summary.distinct_industry_count, 3);
}

#[test]
fn test_startup_cards() {
    let roster = dashboard_roster();
    let batch = roster.derive_views(&MetricsConfig::default());
    assert!(batch.is_clean());

    let views: Vec<&DerivedStartupView> = batch.successes().collect();
    assert_eq!(views.len(), 3);

    let scale = views[0];
    assert_eq!(scale.runway_months, 8);
    assert_eq!(scale.runway_health_tier, RunwayHealthTier::Warning);
    assert_eq!(scale.runway_progress_value, 40);
    assert_eq!(scale.ltv_to_cac_label(), "12.0x");
    assert_eq!(scale.risk_style_bucket, StyleTone::Warning);

    let health = views[1];
    assert_eq!(health.runway_months, 14);
    assert_eq!(health.runway_health_tier, RunwayHealthTier::Healthy);
    assert_eq!(health.runway_progress_value, 70);
    assert_eq!(health.ltv_to_cac_label(), "13.7x");
    assert_eq!(health.risk_style_bucket, StyleTone::Accent);

    let agro = views[2];
    assert_eq!(agro.runway_months, 18);
    assert_eq!(agro.runway_progress_value, 90);
    assert_eq!(agro.ltv_to_cac_label(), "20.0x");
    assert_eq!(agro.growth_direction, GrowthDirection::Positive);
    assert_eq!(
        agro.headline_step.as_deref(),
        Some("Expand to 3 new geographic markets")
    );
}

#[test]
fn test_broken_record_degrades_alone() {
    let broken = StartupRecord {
        id: "4".to_string(),
        customer_acquisition_cost: Decimal::ZERO,
        ..agro_tech()
    };
    let roster = Roster::builder()
        .add_startups(vec![scale_lens(), broken, health_ai()])
        .build()
        .unwrap();

    let batch = derive_views(roster.records(), &MetricsConfig::default());
    assert_eq!(batch.len(), 3);
    assert_eq!(batch.successes().count(), 2);

    let failed: Vec<&str> = batch.failures().map(|(id, _)| id).collect();
    assert_eq!(failed, vec!["4"]);
    assert!(batch.get("4").unwrap().error().unwrap().is_invalid_input());

    // the summary is unaffected by a record that cannot be derived
    let summary = summarize_portfolio(roster.records(), &MetricsConfig::default());
    assert_eq!(summary.startup_count, 3);
    assert_eq!(summary.distinct_industry_count, 3);
}

// =============================================================================
// NAVIGATION
// =============================================================================

#[test]
fn test_navigation_selection() {
    let roster = dashboard_roster();
    let mut selection = StartupSelection::first(&roster).unwrap();

    let entries = roster.basic_startups();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2].name, "AgroTech");
    assert_eq!(entries[2].revenue, dec!(45000));

    assert!(selection.is_selected("1"));
    selection.select(&entries[1].id).unwrap();
    assert_eq!(selection.current().name, "HealthAI");
    assert_eq!(selection.view().unwrap().runway_health_tier, RunwayHealthTier::Healthy);

    assert!(selection.select("missing").is_err());
    assert_eq!(selection.current().name, "HealthAI");
}

// =============================================================================
// BUCKETING
// =============================================================================

#[test]
fn test_risk_and_runway_distribution() {
    let roster = dashboard_roster();

    let by_risk = roster.by_risk_level();
    let low = by_risk.get(&RiskLevel::Low).unwrap();
    assert_eq!(low.count, 2);
    assert_eq!(low.total_revenue, dec!(53500));
    assert!(by_risk.get(&RiskLevel::High).is_none());

    let by_tier = roster.by_runway_tier();
    assert_eq!(by_tier.get(&RunwayHealthTier::Warning).unwrap().count, 1);
    assert_eq!(by_tier.get(&RunwayHealthTier::Healthy).unwrap().count, 2);

    let by_industry = roster.by_industry();
    let sorted = by_industry.sorted_by_weight();
    assert_eq!(sorted[0].0, "AgTech");
}

#[test]
fn test_roster_json_round_trip_validates() {
    let roster = dashboard_roster();
    let json = serde_json::to_string(&roster).unwrap();
    let parsed: Roster = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, roster);
}
