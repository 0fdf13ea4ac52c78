//! Pure-variant estimation: selection precedence, shrinkage, confidence,
//! and terminal no-data behavior.

use quotient_core::models::EstimateRequest;
use quotient_core::pricing::{ConfidenceBand, RawNumber, RawPriorRow, SourceLevel};
use quotient_estimation::estimate_from_rows;

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn row(
    technology: &str,
    material: Option<&str>,
    parts_bucket: Option<&str>,
    n: f64,
    p10: f64,
    p50: f64,
    p90: f64,
) -> RawPriorRow {
    RawPriorRow {
        technology: Some(technology.to_string()),
        material: material.map(str::to_string),
        parts_bucket: parts_bucket.map(str::to_string),
        n: Some(RawNumber::Number(n)),
        p10: Some(RawNumber::Number(p10)),
        p50: Some(RawNumber::Number(p50)),
        p90: Some(RawNumber::Number(p90)),
    }
}

/// The four-level fixture from the CNC quoting scenario.
fn cnc_fixture() -> Vec<RawPriorRow> {
    vec![
        row("__global__", None, None, 1000.0, 10.0, 20.0, 40.0),
        row("CNC", None, None, 500.0, 12.0, 22.0, 42.0),
        row("CNC", Some("Aluminum 6061"), None, 80.0, 14.0, 24.0, 44.0),
        row("CNC", Some("Aluminum 6061"), Some("2-3"), 60.0, 16.0, 26.0, 46.0),
    ]
}

fn cnc_request() -> EstimateRequest {
    EstimateRequest::new(Some("CNC"), Some("Aluminum 6061"), Some(2.0))
}

const TOL: f64 = 1e-9;

// ─── End-to-end scenario ─────────────────────────────────────────────────────

#[test]
fn chooses_most_specific_cohort_and_blends_toward_its_parent() {
    let estimate = estimate_from_rows(&cnc_fixture(), &cnc_request()).expect("estimate");

    assert_eq!(estimate.source, SourceLevel::TechMatParts);
    // Chosen n=60 is pre-blend: 60 deals is moderate.
    assert_eq!(estimate.confidence, ConfidenceBand::Moderate);

    // w = 60/110 on the child, parent is tech+mat.
    let w = 60.0 / 110.0;
    assert!((estimate.p50 - (w * 26.0 + (1.0 - w) * 24.0)).abs() < TOL);
    assert!((estimate.p50 - 25.090909090909093).abs() < 1e-6);
    assert!((estimate.p10 - (w * 16.0 + (1.0 - w) * 14.0)).abs() < TOL);
    assert!((estimate.p90 - (w * 46.0 + (1.0 - w) * 44.0)).abs() < TOL);
}

#[test]
fn skip_around_falls_to_tech_mat_not_tech_parts() {
    // tech+mat+parts absent; tech+mat and tech+parts both present.
    let rows = vec![
        row("__global__", None, None, 1000.0, 10.0, 20.0, 40.0),
        row("CNC", None, None, 500.0, 12.0, 22.0, 42.0),
        row("CNC", Some("Aluminum 6061"), None, 80.0, 14.0, 24.0, 44.0),
        row("CNC", None, Some("2-3"), 300.0, 15.0, 25.0, 45.0),
    ];
    let estimate = estimate_from_rows(&rows, &cnc_request()).expect("estimate");
    assert_eq!(estimate.source, SourceLevel::TechMat);
}

// ─── Purity ──────────────────────────────────────────────────────────────────

#[test]
fn identical_inputs_produce_bit_identical_output() {
    let rows = cnc_fixture();
    let request = cnc_request();
    let first = estimate_from_rows(&rows, &request).unwrap();
    let second = estimate_from_rows(&rows, &request).unwrap();
    assert_eq!(first.p10.to_bits(), second.p10.to_bits());
    assert_eq!(first.p50.to_bits(), second.p50.to_bits());
    assert_eq!(first.p90.to_bits(), second.p90.to_bits());
    assert_eq!(first, second);
}

// ─── Shrinkage details ───────────────────────────────────────────────────────

#[test]
fn parent_walk_uses_static_chain_not_fallback_order() {
    // Material absent: chosen is tech+parts. Its chain is tech -> global;
    // tech has no row here, so global is the blending parent.
    let rows = vec![
        row("__global__", None, None, 1000.0, 30.0, 50.0, 70.0),
        row("CNC", None, Some("2-3"), 10.0, 80.0, 100.0, 120.0),
    ];
    let request = EstimateRequest::new(Some("CNC"), None::<&str>, Some(3.0));
    let estimate = estimate_from_rows(&rows, &request).expect("estimate");

    assert_eq!(estimate.source, SourceLevel::TechParts);
    let w = 10.0 / 60.0;
    assert!((estimate.p50 - (w * 100.0 + (1.0 - w) * 50.0)).abs() < TOL);
}

#[test]
fn no_ancestor_anywhere_passes_quantiles_through_unmodified() {
    // Only the chosen cohort exists — no tech row, no global row.
    let rows = vec![row("CNC", Some("Aluminum 6061"), None, 7.0, 14.0, 24.0, 44.0)];
    let request = EstimateRequest::new(Some("CNC"), Some("Aluminum 6061"), None);
    let estimate = estimate_from_rows(&rows, &request).expect("estimate");

    assert_eq!(estimate.source, SourceLevel::TechMat);
    assert_eq!(estimate.p10, 14.0);
    assert_eq!(estimate.p50, 24.0);
    assert_eq!(estimate.p90, 44.0);
}

#[test]
fn large_sample_stays_close_to_its_own_quantiles() {
    let rows = vec![
        row("__global__", None, None, 1000.0, 10.0, 20.0, 40.0),
        row("CNC", None, None, 5000.0, 12.0, 22.0, 42.0),
    ];
    let request = EstimateRequest::new(Some("CNC"), None::<&str>, None);
    let estimate = estimate_from_rows(&rows, &request).expect("estimate");
    // w = 5000/5050: the blend moves p50 less than 0.02 toward the parent.
    assert!((estimate.p50 - 22.0).abs() < 0.02);
}

// ─── Confidence is pre-blend, from the chosen cohort ────────────────────────

#[test]
fn confidence_ignores_parent_sample_size() {
    let rows = vec![
        row("__global__", None, None, 100_000.0, 10.0, 20.0, 40.0),
        row("CNC", None, None, 5.0, 12.0, 22.0, 42.0),
    ];
    let request = EstimateRequest::new(Some("CNC"), None::<&str>, None);
    let estimate = estimate_from_rows(&rows, &request).expect("estimate");
    assert_eq!(estimate.source, SourceLevel::Tech);
    assert_eq!(estimate.confidence, ConfidenceBand::Unknown);
}

// ─── Terminal no-data outcomes ───────────────────────────────────────────────

#[test]
fn empty_prior_set_yields_none() {
    assert!(estimate_from_rows(&[], &cnc_request()).is_none());
}

#[test]
fn rows_that_all_fail_normalization_yield_none() {
    let rows = vec![
        row("", None, None, 10.0, 1.0, 2.0, 3.0),
        RawPriorRow {
            technology: Some("CNC".into()),
            n: Some(RawNumber::Text("not a number".into())),
            p10: Some(RawNumber::Number(1.0)),
            p50: Some(RawNumber::Number(2.0)),
            p90: Some(RawNumber::Number(3.0)),
            ..Default::default()
        },
    ];
    assert!(estimate_from_rows(&rows, &cnc_request()).is_none());
}

#[test]
fn request_with_no_matching_cohorts_and_no_global_yields_none() {
    let rows = vec![row("SLS", None, None, 100.0, 1.0, 2.0, 3.0)];
    let request = EstimateRequest::new(Some("CNC"), None::<&str>, None);
    assert!(estimate_from_rows(&rows, &request).is_none());
}

#[test]
fn unbucketed_count_still_estimates_at_tech_level() {
    let rows = vec![
        row("CNC", None, Some("2-3"), 300.0, 15.0, 25.0, 45.0),
        row("CNC", None, None, 500.0, 12.0, 22.0, 42.0),
    ];
    // Fractional in-between count: bucket-specific levels are skipped.
    let request = EstimateRequest::new(Some("CNC"), None::<&str>, Some(3.5));
    let estimate = estimate_from_rows(&rows, &request).expect("estimate");
    assert_eq!(estimate.source, SourceLevel::Tech);
}

// ─── Duplicate keys ──────────────────────────────────────────────────────────

#[test]
fn duplicate_cohort_keys_keep_the_later_row() {
    let rows = vec![
        row("CNC", None, None, 100.0, 1.0, 2.0, 3.0),
        row("CNC", None, None, 100.0, 5.0, 6.0, 7.0),
    ];
    let request = EstimateRequest::new(Some("CNC"), None::<&str>, None);
    let estimate = estimate_from_rows(&rows, &request).expect("estimate");
    assert_eq!(estimate.p50, 6.0);
}
