use super::*;

#[test]
fn parse_defaults_to_all_interfaces_on_3000() {
    let cfg = HostConfig::parse(None, None).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parse_reads_host_and_port() {
    let cfg = HostConfig::parse(Some("127.0.0.1"), Some("8080")).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn parse_treats_blank_values_as_unset() {
    let cfg = HostConfig::parse(Some(" "), Some("")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn parse_rejects_bad_port() {
    assert_eq!(HostConfig::parse(None, Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(HostConfig::parse(None, Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn parse_rejects_bad_host() {
    assert_eq!(
        HostConfig::parse(Some("localhost:3000"), None),
        Err(ConfigError::InvalidHost("localhost:3000".to_owned()))
    );
}
