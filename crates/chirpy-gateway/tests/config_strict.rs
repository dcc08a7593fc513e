#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use chirpy_gateway::config;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  asset_root: "./public" # typo should fail
database:
  url: "postgres://localhost/chirpy"
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
database:
  url: "postgres://localhost/chirpy"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.platform, "prod");
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert!(!cfg.is_dev());
}

#[test]
fn unsupported_version_is_rejected() {
    let bad = r#"
version: 2
database:
  url: "postgres://localhost/chirpy"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn env_only_config() {
    let cfg = config::load_with(env(&[
        ("PLATFORM", "dev"),
        ("DB_URL", "postgres://chirpy@localhost:5432/chirpy"),
    ]))
    .expect("must load");
    assert!(cfg.is_dev());
    assert_eq!(cfg.database.url, "postgres://chirpy@localhost:5432/chirpy");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 8080);
}

#[test]
fn missing_database_url_fails() {
    let err = config::load_with(env(&[("PLATFORM", "dev")])).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn bad_listen_address_fails() {
    let err = config::load_with(env(&[
        ("DB_URL", "postgres://localhost/chirpy"),
        ("CHIRPY_LISTEN", "localhost"),
    ]))
    .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn env_overrides_file() {
    let dir = std::env::temp_dir().join(format!("chirpy-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("chirpy.yaml");
    std::fs::write(
        &path,
        "version: 1\nplatform: dev\nserver:\n  assets_root: ./public\ndatabase:\n  url: postgres://file/db\n",
    )
    .unwrap();

    let path_str = path.to_str().unwrap().to_string();
    let cfg = config::load_with(env(&[
        ("CHIRPY_CONFIG", path_str.as_str()),
        ("PLATFORM", "prod"),
    ]))
    .expect("must load");

    assert!(!cfg.is_dev());
    assert_eq!(cfg.server.assets_root, "./public");
    assert_eq!(cfg.database.url, "postgres://file/db");

    std::fs::remove_dir_all(&dir).unwrap();
}

fn scratch_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("chirpy-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn dotenv_file_backs_missing_env_vars() {
    let dir = scratch_dir("dotenv");
    let path = dir.join(".env");
    std::fs::write(
        &path,
        "# local dev\nPLATFORM=\"dev\"\nDB_URL=postgres://chirpy:pw@localhost:5432/chirpy?sslmode=disable\n",
    )
    .unwrap();

    let dotenv = config::read_dotenv(&path).expect("must read");
    assert_eq!(dotenv.get("PLATFORM").map(String::as_str), Some("dev"));

    // process env first, .env second
    let process = env(&[("PLATFORM", "prod")]);
    let cfg = config::load_with(|key: &str| process(key).or_else(|| dotenv.get(key).cloned()))
        .expect("must load");
    assert!(!cfg.is_dev());
    assert_eq!(
        cfg.database.url,
        "postgres://chirpy:pw@localhost:5432/chirpy?sslmode=disable"
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_dotenv_file_is_empty() {
    let dir = scratch_dir("no-dotenv");
    let vars = config::read_dotenv(&dir.join(".env")).expect("missing file is fine");
    assert!(vars.is_empty());
    std::fs::remove_dir_all(&dir).unwrap();
}
