//! Loader chain behaviour against real files and caller-supplied loaders.

use server_config::config::{
    from_local, FnLoader, LoadOutcome, LocalLoader, SourceError,
};
use server_config::{load_config, load_config_with, ConfigError, LoaderChain};

mod common;

#[test]
fn test_default_chain_is_local_loader() {
    let implicit = load_config(common::FIXTURE_LOCATION).unwrap();
    let empty_slice = load_config_with(common::FIXTURE_LOCATION, &[]).unwrap();
    let explicit = load_config_with(common::FIXTURE_LOCATION, &[&from_local]).unwrap();
    let chain = LoaderChain::default().load(common::FIXTURE_LOCATION).unwrap();
    let empty_chain = LoaderChain::new().load(common::FIXTURE_LOCATION).unwrap();

    assert_eq!(implicit, explicit);
    assert_eq!(empty_slice, explicit);
    assert_eq!(chain, explicit);
    assert_eq!(empty_chain, explicit);
}

#[test]
fn test_fixture_contents() {
    let config = load_config(common::FIXTURE_LOCATION).unwrap();
    let server = &config.server;
    assert_eq!(server.port, "8080");
    assert_eq!(server.routers.len(), 2);

    let api = server.router("/api").unwrap();
    let kinds: Vec<&str> = api.middlewares.iter().map(|m| m.kind.as_str()).collect();
    assert_eq!(kinds, ["auth", "ratelimit"]);
    assert_eq!(api.middlewares[0].config["secret"], "x");
    assert_eq!(api.middlewares[1].config["burst"], "20");
    assert_eq!(api.handlers[0].path, "/ping");
    assert!(api.handlers[0].config.is_empty());
    assert_eq!(api.handlers[1].config["upstream"], "http://127.0.0.1:3000");

    assert_eq!(server.routers[1].prefix, "/");
    assert!(server.routers[1].middlewares.is_empty());
}

#[test]
fn test_first_non_empty_loader_wins() {
    let (first, first_calls) = common::counting_loader("first", Some(common::MINIMAL_YAML));
    let (second, second_calls) = common::counting_loader("second", Some("server: {port: \"1\"}"));

    let config = load_config_with("mem://x", &[&first, &second]).unwrap();
    assert_eq!(config.server.port, "80");
    assert_eq!(first_calls.get(), 1);
    assert_eq!(second_calls.get(), 0);
}

#[test]
fn test_declined_loader_defers_to_next() {
    let (first, first_calls) = common::counting_loader("first", None);
    let (second, second_calls) = common::counting_loader("second", Some(common::MINIMAL_YAML));

    let config = load_config_with("mem://x", &[&first, &second]).unwrap();
    assert_eq!(config.server.port, "80");
    assert_eq!(first_calls.get(), 1);
    assert_eq!(second_calls.get(), 1);
}

#[test]
fn test_remote_then_local_fallback() {
    let dir = tempfile::tempdir().unwrap();
    common::write_config(dir.path(), "server.yaml", common::MINIMAL_YAML);

    let remote = FnLoader::named("remote", |location: &str| -> LoadOutcome {
        if location.starts_with("https://") {
            Err(SourceError::Other("remote store unavailable".into()))
        } else {
            Ok(None)
        }
    });
    let chain = LoaderChain::new()
        .with(remote)
        .with(LocalLoader::with_base(dir.path()));

    assert_eq!(chain.load("./server.yaml").unwrap().server.port, "80");

    match chain.load("https://config.example/server.yaml") {
        Err(ConfigError::NoData { failures, .. }) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].loader, "remote");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_local_prefix_gate() {
    let dir = tempfile::tempdir().unwrap();
    common::write_config(dir.path(), "config.yaml", common::MINIMAL_YAML);
    let loader = LocalLoader::with_base(dir.path());

    let err = load_config_with("config.yaml", &[&loader]).unwrap_err();
    assert!(matches!(err, ConfigError::NoData { ref failures, .. } if failures.is_empty()));

    let config = load_config_with("./config.yaml", &[&loader]).unwrap();
    assert_eq!(config.server.port, "80");
}

#[test]
fn test_missing_local_file_keeps_cause() {
    let dir = tempfile::tempdir().unwrap();
    let loader = LocalLoader::with_base(dir.path());

    let err = load_config_with("./absent.yaml", &[&loader]).unwrap_err();
    match &err {
        ConfigError::NoData { failures, .. } => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].loader, "local");
            assert!(matches!(failures[0].error, SourceError::Io { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn test_all_loaders_exhausted() {
    let (a, _) = common::counting_loader("a", None);
    let (b, _) = common::counting_loader("b", None);

    let err = load_config_with("anything", &[&a, &b]).unwrap_err();
    assert!(matches!(err, ConfigError::NoData { ref location, .. } if location == "anything"));
}

#[test]
fn test_nested_config_value_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    common::write_config(
        dir.path(),
        "bad.yaml",
        "server:\n  routers:\n    - prefix: /\n      middlewares:\n        - type: auth\n          config:\n            secret: {nested: true}\n",
    );

    let err = LoaderChain::new()
        .with(LocalLoader::with_base(dir.path()))
        .load("./bad.yaml")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse { ref loader, .. } if loader == "local"));
}

#[test]
fn test_zero_length_file_is_default_config() {
    let dir = tempfile::tempdir().unwrap();
    common::write_config(dir.path(), "empty.yaml", "");
    let (never, never_calls) = common::counting_loader("never", Some(common::MINIMAL_YAML));
    let local = LocalLoader::with_base(dir.path());

    let config = load_config_with("./empty.yaml", &[&local, &never]).unwrap();
    assert_eq!(config, server_config::Config::default());
    assert_eq!(never_calls.get(), 0);
}
