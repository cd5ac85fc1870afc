/// Integration tests for the forecast results pipeline
///
/// These drive the engine the way the rendering layer does: a complete
/// forecast input goes in, a chart-ready payload with summary and risk
/// verdicts comes out.
use chrono::NaiveDate;

use water_forecast_engine::aggregate;
use water_forecast_engine::risk::{RiskClassifier, RiskLevel};
use water_forecast_engine::series::{HydroForecast, SeriesError, TimePoint};
use water_forecast_engine::services::ReportService;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, day).unwrap()
}

fn daily(start_day: u32, vals: &[f64]) -> Vec<TimePoint> {
    vals.iter()
        .enumerate()
        .map(|(i, v)| TimePoint::new(date(start_day + i as u32), *v))
        .collect()
}

#[test]
fn test_reference_scenario_verdicts_and_summary() {
    // Canonical scenario: each component judged on its own series
    let classifier = RiskClassifier::default();

    let flood = classifier
        .classify_flood_risk(&[1500.0, 2500.0, 4200.0, 1800.0])
        .unwrap();
    assert_eq!(flood.level, RiskLevel::High);
    assert_eq!(flood.metric_value, 4200.0);

    let drought = classifier.classify_drought_risk(&[0.1, 0.2, 0.05]);
    assert_eq!(drought.level, RiskLevel::Warning);
    assert!((drought.metric_value - 0.35).abs() < 1e-12);

    let summary = aggregate::summarize(&[100.0, 120.0, 130.0, 110.0]).unwrap();
    assert_eq!(summary.average, 115.0);
    assert_eq!(summary.peak, 130.0);
    assert_eq!(summary.total, 460.0);
}

#[test]
fn test_full_report_from_one_forecast_input() {
    let service = ReportService::default();

    let forecast = HydroForecast {
        historical_usage: daily(1, &[420.0, 415.0, 430.0, 425.0]),
        predicted_usage: daily(5, &[100.0, 120.0, 130.0, 110.0]),
        precipitation: daily(5, &[0.1, 0.2, 0.05, 0.0]),
        river_discharge: daily(5, &[1500.0, 2500.0, 4200.0, 1800.0]),
    };

    let report = service.build_report(&forecast).unwrap();

    // 4 historical + 4 predicted records, in source order
    assert_eq!(report.chart.len(), 8);
    assert!(report.chart[..4].iter().all(|p| p.usage.is_some()));
    assert!(report.chart[4..].iter().all(|p| p.predicted_usage.is_some()));

    assert_eq!(report.summary.average, 115.0);
    assert_eq!(report.summary.peak, 130.0);
    assert_eq!(report.summary.total, 460.0);

    assert_eq!(report.flood_risk.level, RiskLevel::High);
    assert_eq!(report.flood_risk.metric_value, 4200.0);
    assert_eq!(report.drought_risk.level, RiskLevel::Warning);
    assert!((report.drought_risk.metric_value - 0.35).abs() < 1e-12);
}

#[test]
fn test_report_serializes_chart_ready_payload() {
    let service = ReportService::default();

    let forecast = HydroForecast {
        historical_usage: daily(1, &[420.0]),
        predicted_usage: daily(2, &[100.0, 110.0]),
        precipitation: daily(2, &[3.0, 2.5]),
        river_discharge: daily(2, &[900.0, 1100.0]),
    };

    let report = service.build_report(&forecast).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    // Observed records carry only `usage`, predicted only `predicted_usage`
    let first = json["chart"][0].as_object().unwrap();
    assert_eq!(first["date"], "2024-07-01");
    assert!(first.contains_key("usage"));
    assert!(!first.contains_key("predicted_usage"));

    let second = json["chart"][1].as_object().unwrap();
    assert!(!second.contains_key("usage"));
    assert!(second.contains_key("predicted_usage"));

    // Levels serialize lowercase for the rendering layer's color coding
    assert_eq!(json["flood_risk"]["level"], "low");
    assert_eq!(json["drought_risk"]["level"], "low");
    assert_eq!(
        json["drought_risk"]["message"],
        "Sufficient rainfall predicted."
    );
}

#[test]
fn test_report_with_no_historical_usage() {
    // First-time users have no uploaded history; the chart is one-sided
    let service = ReportService::default();

    let forecast = HydroForecast {
        historical_usage: vec![],
        predicted_usage: daily(1, &[100.0, 105.0]),
        precipitation: daily(1, &[1.0, 2.0]),
        river_discharge: daily(1, &[500.0, 600.0]),
    };

    let report = service.build_report(&forecast).unwrap();

    assert_eq!(report.chart.len(), 2);
    assert!(report.chart.iter().all(|p| p.usage.is_none()));
}

#[test]
fn test_report_unavailable_on_malformed_axes() {
    let service = ReportService::default();

    let forecast = HydroForecast {
        historical_usage: daily(1, &[420.0]),
        predicted_usage: daily(2, &[100.0, 110.0, 120.0]),
        precipitation: daily(2, &[1.0, 2.0]),
        river_discharge: daily(2, &[500.0, 600.0, 700.0]),
    };

    let err = service.build_report(&forecast).unwrap_err();
    assert!(
        matches!(err, SeriesError::LengthMismatch { .. }),
        "expected LengthMismatch, got {err:?}"
    );
}

#[test]
fn test_report_unavailable_when_horizon_is_empty() {
    let service = ReportService::default();

    let forecast = HydroForecast {
        historical_usage: vec![],
        predicted_usage: vec![],
        precipitation: vec![],
        river_discharge: vec![],
    };

    let err = service.build_report(&forecast).unwrap_err();
    assert!(matches!(err, SeriesError::EmptySeries { .. }));
}
