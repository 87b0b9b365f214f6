use crate::config::Config;

#[test]
fn test_config_debug_lists_fields() {
    let config = Config {
        host: "0.0.0.0".to_string(),
        port: 8080,
        log_level: "debug".to_string(),
    };
    let rendered = format!("{:?}", config);

    assert!(rendered.starts_with("Config"));
    assert!(rendered.contains("host: \"0.0.0.0\""));
    assert!(rendered.contains("port: 8080"));
    assert!(rendered.contains("log_level: \"debug\""));
}
