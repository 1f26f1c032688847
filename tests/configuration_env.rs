//! Environment overrides live in their own test binary so the variables never
//! leak into other configuration tests.

use lectio::Config;

#[test]
fn test_environment_overrides_file_and_defaults() {
    // SAFETY: this is the only test in this binary, nothing else reads the
    // environment concurrently.
    unsafe {
        std::env::set_var("LECTIO__PLAN__DURATION_MONTHS", "18");
        std::env::set_var("LECTIO__PLAN__INCLUDE_WEEKENDS", "false");
    }

    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.plan.duration_months, 18.0);
    assert!(!config.plan.include_weekends);
    assert_eq!(config.plan.testament, "BOTH");
}
