use super::*;

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

#[test]
fn unset_vars_use_defaults() {
    let config = ServerConfig::from_vars(None, None, default_addr()).unwrap();
    assert_eq!(config.addr, default_addr());
    assert!(config.game_dir.ends_with("../game"));
}

#[test]
fn port_binds_all_interfaces() {
    let config = ServerConfig::from_vars(Some("3000".to_owned()), None, default_addr()).unwrap();
    assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
}

#[test]
fn empty_port_is_ignored() {
    let config = ServerConfig::from_vars(Some(String::new()), None, default_addr()).unwrap();
    assert_eq!(config.addr, default_addr());
}

#[test]
fn invalid_port_is_rejected() {
    let error = ServerConfig::from_vars(Some("http".to_owned()), None, default_addr()).unwrap_err();
    assert!(matches!(error, ConfigError::InvalidPort(raw) if raw == "http"));
}

#[test]
fn game_dir_override_is_used_verbatim() {
    let config = ServerConfig::from_vars(None, Some("/srv/game".to_owned()), default_addr()).unwrap();
    assert_eq!(config.game_dir, PathBuf::from("/srv/game"));
}
