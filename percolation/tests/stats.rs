use percolation::{Error, PercolationStats};
use pretty_assertions::assert_eq;

#[test]
fn rejects_degenerate_parameters() {
    assert_eq!(PercolationStats::run(0, 10).err(), Some(Error::InvalidSize));
    assert_eq!(
        PercolationStats::run(10, 0).err(),
        Some(Error::InvalidTrials)
    );
}

#[test]
fn single_trial_has_undefined_stddev() {
    let stats = PercolationStats::run(8, 1).unwrap();
    assert_eq!(stats.thresholds().len(), 1);
    assert!(stats.stddev().is_nan());
}

#[test]
fn thresholds_are_valid_fractions() {
    let stats = PercolationStats::run(5, 20).unwrap();
    assert_eq!(stats.thresholds().len(), 20);
    for &threshold in stats.thresholds() {
        assert!(threshold > 0.0 && threshold <= 1.0);
    }
}

#[test]
fn single_site_grid_always_saturates() {
    let stats = PercolationStats::run(1, 5).unwrap();
    assert_eq!(stats.mean(), 1.0);
    for &threshold in stats.thresholds() {
        assert_eq!(threshold, 1.0);
    }
}

#[test]
fn confidence_interval_brackets_the_mean() {
    let stats = PercolationStats::run(10, 30).unwrap();
    assert!(stats.stddev() >= 0.0);
    assert!(stats.confidence_lo() <= stats.mean());
    assert!(stats.mean() <= stats.confidence_hi());
}

#[test]
fn estimate_lands_near_the_known_threshold() {
    // p_c for 2D site percolation is about 0.593; the mean over 100
    // trials on a 20x20 grid stays well inside this band
    let stats = PercolationStats::run(20, 100).unwrap();
    let mean = stats.mean();
    assert!(mean > 0.5 && mean < 0.7, "mean = {mean}");
}
