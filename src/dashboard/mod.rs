//! Synthetic analytics for the dashboard page
//!
//! Produces a week of plausible-looking request metrics plus tier and
//! severity distributions. Nothing is measured; values are random within
//! fixed ranges.

use chrono::{DateTime, Duration, TimeZone};
use rand::Rng;
use serde::Serialize;

/// Number of days covered by the time series
pub const DAYS: i64 = 7;

/// Full dashboard payload
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub time_series: TimeSeries,
    pub tier_distribution: TierDistribution,
    pub severity_distribution: SeverityDistribution,
}

/// Daily metrics, oldest day first
#[derive(Debug, Clone, Serialize)]
pub struct TimeSeries {
    pub labels: Vec<String>,
    pub total_requests: Vec<u32>,
    pub avg_response_time: Vec<f64>,
    pub success_rate: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierDistribution {
    #[serde(rename = "Free")]
    pub free: u32,
    #[serde(rename = "Premium")]
    pub premium: u32,
    #[serde(rename = "Enterprise")]
    pub enterprise: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeverityDistribution {
    #[serde(rename = "Low")]
    pub low: u32,
    #[serde(rename = "Medium")]
    pub medium: u32,
    #[serde(rename = "High")]
    pub high: u32,
}

/// Generate dashboard data for the week ending at `now`
pub fn generate<Tz, R>(now: DateTime<Tz>, rng: &mut R) -> DashboardData
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
    R: Rng,
{
    let labels = (0..DAYS)
        .rev()
        .map(|days_ago| {
            (now.clone() - Duration::days(days_ago))
                .format("%b %d")
                .to_string()
        })
        .collect();

    let total_requests = (0..DAYS).map(|_| rng.gen_range(800..=1500)).collect();
    let avg_response_time = (0..DAYS)
        .map(|_| round_to(rng.gen_range(0.5..=2.5), 2))
        .collect();
    let success_rate = (0..DAYS)
        .map(|_| round_to(rng.gen_range(95.0..=99.8), 1))
        .collect();

    DashboardData {
        time_series: TimeSeries {
            labels,
            total_requests,
            avg_response_time,
            success_rate,
        },
        tier_distribution: TierDistribution {
            free: rng.gen_range(5000..=8000),
            premium: rng.gen_range(2000..=4000),
            enterprise: rng.gen_range(500..=1500),
        },
        severity_distribution: SeverityDistribution {
            low: rng.gen_range(6000..=9000),
            medium: rng.gen_range(1500..=3000),
            high: rng.gen_range(200..=800),
        },
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
