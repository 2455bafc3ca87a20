use momtest_adapters::SiteConfig;

#[test]
fn default_config_is_light_and_branded() {
    let config = SiteConfig::default();
    assert_eq!(config.brand_name, "The Mom Test Bot");
    assert!(!config.dark_mode);
    assert!(config.min_window_size[0] <= config.window_size[0]);
    assert!(config.min_window_size[1] <= config.window_size[1]);
}

#[test]
fn narrow_layout_switches_at_the_breakpoint() {
    let config = SiteConfig::default();
    assert!(config.is_narrow(config.narrow_layout_width - 1.0));
    assert!(!config.is_narrow(config.narrow_layout_width));
    assert!(!config.is_narrow(1280.0));
}
