//! Bundled demo roster, used when no data file is configured.

use rust_decimal::Decimal;
use studio_metrics::{RiskLevel, Roster, StartupRecord};

use crate::error::CliResult;

/// The three demo startups shown on a fresh dashboard.
pub fn sample_roster() -> CliResult<Roster> {
    let records = vec![
        StartupRecord::builder()
            .id("1")
            .name("ScaleLens")
            .industry("SaaS")
            .stage("MVP")
            .revenue(Decimal::from(12_000))
            .burn(Decimal::from(6_000))
            .runway(8.5)
            .customer_acquisition_cost(Decimal::from(45))
            .lifetime_value(Decimal::from(540))
            .user_count(1_250)
            .churn_rate(5.2)
            .growth_rate(12.5)
            .risk_level(RiskLevel::Medium)
            .next_step("Focus on LinkedIn outbound → CAC = $50 → ROI = 3.2x")
            .next_step("Optimize onboarding flow to reduce churn by 15%")
            .next_step("Prepare $150k pre-seed raise for Q2")
            .build()?,
        StartupRecord::builder()
            .id("2")
            .name("HealthAI")
            .industry("HealthTech")
            .stage("Early Traction")
            .revenue(Decimal::from(8_500))
            .burn(Decimal::from(4_200))
            .runway(14.2)
            .customer_acquisition_cost(Decimal::from(65))
            .lifetime_value(Decimal::from(890))
            .user_count(950)
            .churn_rate(3.8)
            .growth_rate(8.3)
            .risk_level(RiskLevel::Low)
            .next_step("Scale content marketing → 40% organic growth")
            .next_step("Launch enterprise tier with $500/mo pricing")
            .next_step("Build strategic partnerships with hospitals")
            .build()?,
        StartupRecord::builder()
            .id("3")
            .name("AgroTech")
            .industry("AgTech")
            .stage("Scaling")
            .revenue(Decimal::from(45_000))
            .burn(Decimal::from(12_000))
            .runway(18.7)
            .customer_acquisition_cost(Decimal::from(120))
            .lifetime_value(Decimal::from(2_400))
            .user_count(3_800)
            .churn_rate(2.1)
            .growth_rate(23.1)
            .risk_level(RiskLevel::Low)
            .next_step("Expand to 3 new geographic markets")
            .next_step("Launch Series A fundraising → $2M target")
            .next_step("Hire VP of Sales and 2 AEs")
            .build()?,
    ];

    Ok(Roster::from_records(records)?)
}
