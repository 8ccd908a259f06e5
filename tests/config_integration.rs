//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hypercube::config::AppConfig;
use hypercube_core::RotationPlane;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HYPERCUBE_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("HYPERCUBE_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_env_override_numeric() {
    std::env::set_var("HYPERCUBE_HYPERCUBE__SCALE", "25");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("HYPERCUBE_HYPERCUBE__SCALE");
    assert_eq!(config.hypercube.scale, 25.0);
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let loaded = AppConfig::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config")).unwrap();
    let builtin = AppConfig::default();

    assert_eq!(loaded.window.title, builtin.window.title);
    assert_eq!(loaded.window.width, builtin.window.width);
    assert_eq!(loaded.window.height, builtin.window.height);
    assert_eq!(loaded.hypercube.scale, builtin.hypercube.scale);
    assert_eq!(loaded.hypercube.origin, builtin.hypercube.origin);
    assert_eq!(loaded.projection.viewer_distance, builtin.projection.viewer_distance);
    assert_eq!(
        loaded.projection.depth_normalization,
        builtin.projection.depth_normalization
    );
    assert!((loaded.animation.angle_step - builtin.animation.angle_step).abs() < 1e-15);
    assert_eq!(loaded.animation.planes, vec![RotationPlane::XZ, RotationPlane::YW]);
    assert_eq!(loaded.rendering.draw_style(), builtin.rendering.draw_style());
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = std::env::temp_dir().join("hypercube-config-test-missing");
    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.width, 800);
    assert_eq!(config.animation.planes.len(), 2);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = std::env::temp_dir().join(format!("hypercube-config-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[window]\ntitle = \"Default\"\n").unwrap();
    std::fs::write(
        dir.join("user.toml"),
        "[window]\ntitle = \"User\"\n\n[animation]\nplanes = [\"zw\"]\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.window.title, "User");
    assert_eq!(config.window.width, 800);
    assert_eq!(config.animation.planes, vec![RotationPlane::ZW]);
}

#[test]
#[serial]
fn test_invalid_plane_is_an_error() {
    let dir = std::env::temp_dir().join(format!("hypercube-config-bad-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[animation]\nplanes = [\"xq\"]\n").unwrap();

    let result = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
