#![cfg(feature = "serde")]


use bs_heatmap::{
    build_grid, default_configs, OptionParameters, PricingError, SensitivityGrid, SweepConfig,
    SweepRange,
};
use test_utils::{assert_close, reference_params};

#[test]
fn test_empty_toml_is_reference_sweep() {
    let config = SweepConfig::from_toml_str("").expect("empty config should parse");
    assert_eq!(config, SweepConfig::default());
    assert_eq!(config.base, OptionParameters::default());
    assert_eq!(config.spot.points, 10);
    assert_eq!(config.volatility.points, 10);
}

/// Overriding only the base recentres both axes on it.
#[test]
fn test_partial_base_recentres_axes() {
    let config = SweepConfig::from_toml_str(
        r#"
        [base]
        spot_price = 250.0
        volatility = 0.4
        "#,
    )
    .unwrap();

    assert_eq!(config.base.spot_price, 250.0);
    assert_eq!(config.base.strike, 100.0);
    assert_close(config.spot.min, 200.0, 1e-9, "spot min");
    assert_close(config.spot.max, 300.0, 1e-9, "spot max");
    assert_close(config.volatility.min, 0.2, 1e-12, "vol min");
    assert_close(config.volatility.max, 0.6, 1e-12, "vol max");
}

#[test]
fn test_explicit_axes_with_default_points() {
    let config = SweepConfig::from_toml_str(
        r#"
        [spot]
        min = 50.0
        max = 150.0

        [volatility]
        min = 0.05
        max = 0.8
        points = 4
        "#,
    )
    .unwrap();

    assert_eq!(config.spot, SweepRange::new(50.0, 150.0, 10));
    assert_eq!(config.volatility, SweepRange::new(0.05, 0.8, 4));

    let grid = config.run().unwrap();
    assert_eq!(grid.shape(), (4, 10));
    assert_eq!(grid.spot_values()[0], 50.0);
    assert_eq!(grid.spot_values()[9], 150.0);
}

#[test]
fn test_toml_round_trip() {
    let config = default_configs::fine(OptionParameters::new(42.0, 40.0, 0.25, -0.01, 0.33));
    let text = config.to_toml_string().unwrap();
    let parsed = SweepConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_malformed_toml_is_an_error() {
    assert!(SweepConfig::from_toml_str("base = 5").is_err());
    assert!(SweepConfig::from_toml_str("[spot]\nmin = \"low\"\nmax = 1.0").is_err());
}

#[test]
fn test_presets_differ_only_in_resolution() {
    let base = reference_params();
    let reference = default_configs::reference(base);
    let coarse = default_configs::coarse(base);
    let fine = default_configs::fine(base);

    assert_eq!(coarse.spot.points, 5);
    assert_eq!(fine.volatility.points, 25);
    assert_eq!(coarse.with_resolution(10), reference);
    assert_eq!(fine.run().unwrap().shape(), (25, 25));
}

#[test]
fn test_run_surfaces_pricing_error() {
    let config = SweepConfig::from_toml_str(
        r#"
        [spot]
        min = -10.0
        max = 10.0
        points = 3
        "#,
    )
    .unwrap();

    let err = config.run().unwrap_err();
    let pricing = err
        .chain()
        .find_map(|e| e.downcast_ref::<PricingError>())
        .expect("pricing error should be in the chain");
    assert_eq!(pricing.cell(), Some((0, 0)));
}

#[test]
fn test_zero_point_axis_is_rejected() {
    let config = SweepConfig::default().with_resolution(0);
    assert!(config.run().is_err());
}

#[test]
fn test_from_path() {
    let path = std::env::temp_dir().join(format!("bs_heatmap_sweep_{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[base]\nstrike = 110.0\ntime_to_maturity = 0.5\n\n[volatility]\nmin = 0.1\nmax = 0.5\npoints = 3\n",
    )
    .unwrap();

    let config = SweepConfig::from_path(&path);
    std::fs::remove_file(&path).ok();
    let config = config.expect("config file should load");

    assert_eq!(config.base.strike, 110.0);
    assert_eq!(config.base.time_to_maturity, 0.5);
    assert_eq!(config.volatility.points, 3);
    assert_eq!(config.spot.points, 10);

    let missing = SweepConfig::from_path(std::env::temp_dir().join("bs_heatmap_no_such_file.toml"));
    assert!(missing.is_err());
}

#[test]
fn test_grid_toml_round_trip() {
    let grid = build_grid(&reference_params(), &[90.0, 100.0, 110.0], &[0.1, 0.3]).unwrap();
    let text = toml::to_string(&grid).unwrap();
    let parsed: SensitivityGrid = toml::from_str(&text).unwrap();
    assert_eq!(parsed, grid);
}

/// Deserialized grids must have one row per volatility and one column per spot.
#[test]
fn test_ragged_grid_is_rejected() {
    let ragged_row = r#"
        call_prices = [[1.0, 2.0], [3.0]]
        put_prices = [[1.0, 2.0], [3.0, 4.0]]
        spot_values = [100.0, 110.0]
        volatility_values = [0.1, 0.2]
    "#;
    let err = toml::from_str::<SensitivityGrid>(ragged_row).unwrap_err();
    assert!(err.to_string().contains("call grid row 1"), "{err}");

    let missing_row = r#"
        call_prices = [[1.0, 2.0], [3.0, 4.0]]
        put_prices = [[1.0, 2.0]]
        spot_values = [100.0, 110.0]
        volatility_values = [0.1, 0.2]
    "#;
    let err = toml::from_str::<SensitivityGrid>(missing_row).unwrap_err();
    assert!(err.to_string().contains("put grid has 1 rows"), "{err}");
}
