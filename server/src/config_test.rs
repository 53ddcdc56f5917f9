use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT, pkg_dir: None });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("HOST", " 127.0.0.1 "),
        ("PORT", " 8080 "),
        ("SITE_PKG_DIR", "target/site/pkg"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.pkg_dir, Some(PathBuf::from("target/site/pkg")));
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["http", "-1", "70000", ""] {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(raw.to_owned()));
    }
}

#[test]
fn empty_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: "HOST" });
}

#[test]
fn blank_pkg_dir_falls_back_to_leptos_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("SITE_PKG_DIR", "   ")])).unwrap();
    assert_eq!(cfg.pkg_dir, None);
}

// Only this test touches the process environment.
#[test]
fn from_env_reads_process_environment() {
    unsafe { std::env::set_var("PORT", "4100") };
    let cfg = ServerConfig::from_env().unwrap();
    unsafe { std::env::remove_var("PORT") };
    assert_eq!(cfg.port, 4100);
}
