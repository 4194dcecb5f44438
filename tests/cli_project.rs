mod common;

use common::{hashes, TestConfig};
use std::fs;

#[test]
fn add_creates_config_with_token_per_network() {
    let cfg = TestConfig::new();
    let (uuid, disclosed) = cfg.add_project("svc-a", &["10.0.0.0/8", "192.168.0.0/16"]);

    assert_eq!(disclosed.len(), 2);
    assert_eq!(disclosed[0].0, "10.0.0.0/8");
    assert_eq!(disclosed[1].0, "192.168.0.0/16");
    assert_ne!(disclosed[0].1, disclosed[1].1);

    let raw = fs::read_to_string(cfg.path()).expect("read config");
    let doc: serde_yaml::Value = serde_yaml::from_str(&raw).expect("yaml");
    let projects = doc["projects"].as_sequence().expect("projects");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["uuid"].as_str(), Some(uuid.as_str()));
    assert_eq!(projects[0]["name"].as_str(), Some("svc-a"));
    assert_eq!(projects[0]["workDir"].as_str(), Some("/srv/app"));
    let tokens = projects[0]["tokens"].as_sequence().expect("tokens");
    assert_eq!(tokens.len(), 2);
    assert_ne!(tokens[0]["token"], tokens[1]["token"]);
}

#[test]
fn add_defaults_to_any_ipv4_network() {
    let cfg = TestConfig::new();
    let (_, disclosed) = cfg.add_project("svc-open", &[]);
    assert_eq!(disclosed.len(), 1);
    assert_eq!(disclosed[0].0, "0.0.0.0/0");
}

#[test]
fn add_rejects_invalid_input_without_writing() {
    let cfg = TestConfig::new();
    let out = cfg.run_json_err(&["add", "--name", "", "--ip-cidr", "10.0.0.0/8"], 10);
    assert_eq!(out["error"]["code"], "INVALID_CONFIGURATION");
    assert_eq!(out["error"]["details"]["field"], "name");
    assert!(!cfg.path().exists());

    let out = cfg.run_json_err(
        &["add", "--name", "svc", "--ip-cidr", "not-a-cidr"],
        10,
    );
    assert_eq!(out["error"]["details"]["field"], "whitelistedNetwork");

    cfg.assert_exit(&["add", "--name", "svc", "--max-args", "-1"], 10);
    assert!(!cfg.path().exists());
}

#[test]
fn regenerate_replaces_hashes_and_keeps_identity() {
    let cfg = TestConfig::new();
    let (uuid, before) = cfg.add_project("svc-a", &["10.0.0.0/8", "fd00::/8"]);

    let out = cfg.run_json(&["regenerate", &uuid]);
    assert_eq!(out["data"]["uuid"], uuid.as_str());
    let after = hashes(&out);
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(&after) {
        assert_eq!(old.0, new.0);
        assert_ne!(old.1, new.1);
    }

    let list = cfg.run_json(&["list"]);
    let projects = list["data"]["projects"].as_array().expect("projects");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["uuid"], uuid.as_str());
    assert_eq!(projects[0]["name"], "svc-a");
}

#[test]
fn regenerate_error_codes() {
    let cfg = TestConfig::new();
    let out = cfg.run_json_err(&["regenerate", ""], 11);
    assert_eq!(out["error"]["code"], "INVALID_UUID");

    cfg.add_project("svc-a", &["10.0.0.0/8"]);
    let before = fs::read(cfg.path()).expect("read");
    let out = cfg.run_json_err(&["regenerate", "not-a-uuid"], 11);
    assert_eq!(out["error"]["code"], "INVALID_UUID");
    assert_eq!(out["error"]["details"]["uuid"], "not-a-uuid");
    let out = cfg.run_json_err(&["regenerate", "6f1c2f0e-4a8e-4f43-9d0a-2c1f5e8b7a10"], 12);
    assert_eq!(out["error"]["code"], "NOT_FOUND");
    assert_eq!(
        out["error"]["details"]["uuid"],
        "6f1c2f0e-4a8e-4f43-9d0a-2c1f5e8b7a10"
    );
    assert_eq!(fs::read(cfg.path()).expect("read"), before);
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let cfg = TestConfig::new();
    cfg.run_json(&["init"]);
    cfg.add_project("svc-a", &["10.0.0.0/8"]);
    let before = fs::read(cfg.path()).expect("read");

    let out = cfg.run_json_err(&["init"], 13);
    assert_eq!(out["error"]["code"], "FILE_EXISTS");
    assert_eq!(fs::read(cfg.path()).expect("read"), before);

    cfg.run_json(&["init", "--force"]);
    let list = cfg.run_json(&["list"]);
    assert!(list["data"]["projects"].as_array().unwrap().is_empty());
}

#[test]
fn remove_drops_only_the_named_project() {
    let cfg = TestConfig::new();
    let (a, _) = cfg.add_project("svc-a", &["10.0.0.0/8"]);
    let (b, _) = cfg.add_project("svc-b", &["172.16.0.0/12"]);

    let out = cfg.run_json(&["remove", &a]);
    assert_eq!(out["data"]["removed"], a.as_str());

    let list = cfg.run_json(&["list"]);
    let projects = list["data"]["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["uuid"], b.as_str());

    cfg.assert_exit(&["remove", &a], 12);
}

#[test]
fn list_never_reveals_secrets() {
    let cfg = TestConfig::new();
    cfg.add_project("svc-a", &["10.0.0.0/8"]);
    let raw = fs::read_to_string(cfg.path()).expect("read config");
    let doc: serde_yaml::Value = serde_yaml::from_str(&raw).expect("yaml");
    let secret = doc["projects"][0]["secret"].as_str().expect("secret").to_string();
    let token = doc["projects"][0]["tokens"][0]["token"]
        .as_str()
        .expect("token")
        .to_string();

    let output = cfg.cmd().arg("--json").arg("list").output().expect("list");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains(&secret));
    assert!(!stdout.contains(&token));
}

#[test]
fn commands_on_missing_config() {
    let cfg = TestConfig::new();
    let list = cfg.run_json(&["list"]);
    assert!(list["data"]["projects"].as_array().unwrap().is_empty());

    let out = cfg.run_json_err(&["regenerate", "6f1c2f0e-4a8e-4f43-9d0a-2c1f5e8b7a10"], 12);
    assert!(out["error"]["details"]["path"].is_string());
}

#[test]
fn config_env_var_is_honored() {
    let cfg = TestConfig::new();
    let path = cfg.dir().join("from-env.yaml");
    let output = assert_cmd::cargo::cargo_bin_cmd!()
        .env("DEP_AGENT_CONFIG", &path)
        .args(["--json", "init"])
        .output()
        .expect("init");
    assert!(output.status.success());
    assert!(path.exists());
}
