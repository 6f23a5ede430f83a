//! Integration tests for the configuration system.
//!
//! Covers the full layering: user file, project file found by walking up,
//! environment overrides and programmatic overrides, followed by validation.
//!
//! Tests that touch MDPATH_* environment variables are marked `#[serial]`;
//! the environment is process-global.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use mdpath::config::{Config, ConfigBuilder, ConfigLoader, ExtensionConfig};
use mdpath::{Error, WikiPath};

const ENV_KEYS: [&str; 4] = [
    "MDPATH_IMAGE_EXTENSIONS",
    "MDPATH_MARKDOWN_EXTENSIONS",
    "MDPATH_WIKI_PAGE_EXTENSIONS",
    "MDPATH_IGNORE_CASE",
];

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_mdpath_env_vars() -> Vec<EnvGuard> {
    ENV_KEYS.iter().map(|key| EnvGuard::remove(key)).collect()
}

fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// A project tree with a nested document directory and an empty user config dir.
struct Workspace {
    user: TempDir,
    project: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join("wiki").join("guide")).unwrap();
        Self {
            user: TempDir::new().unwrap(),
            project,
        }
    }

    fn nested(&self) -> PathBuf {
        self.project.path().join("wiki").join("guide")
    }

    fn builder(&self) -> ConfigBuilder {
        ConfigBuilder::new()
            .with_config_dir(self.user.path())
            .with_working_dir(&self.nested())
    }
}

#[test]
#[serial]
fn test_no_files_yields_defaults() {
    let _env = clear_mdpath_env_vars();
    let ws = Workspace::new();

    let extensions = ws.builder().build_extensions().unwrap();
    assert_eq!(extensions, ExtensionConfig::default());
}

#[test]
#[serial]
fn test_project_file_found_from_nested_dir() {
    let _env = clear_mdpath_env_vars();
    let ws = Workspace::new();
    write_config(
        ws.project.path(),
        ".mdpath.yaml",
        "image_extensions: [svg, webp]\n",
    );

    let extensions = ws.builder().build_extensions().unwrap();
    assert!(WikiPath::new("logo.svg").is_image_extension(&extensions));
    assert!(!WikiPath::new("logo.png").is_image_extension(&extensions));
}

#[test]
#[serial]
fn test_full_precedence_chain() {
    let _env = clear_mdpath_env_vars();
    let ws = Workspace::new();
    write_config(
        ws.user.path(),
        "config.yaml",
        "image_extensions: [bmp]\nmarkdown_extensions: [txt]\nignore_case: false\n",
    );
    write_config(
        ws.project.path(),
        ".mdpath.yaml",
        "image_extensions: [svg]\n",
    );
    let _md = EnvGuard::new("MDPATH_MARKDOWN_EXTENSIONS", "md,mdx");

    let config = ws
        .builder()
        .with_config(Config {
            wiki_page_extensions: Some(vec!["wiki".to_string()]),
            ..Default::default()
        })
        .build()
        .unwrap();

    // project beats user
    assert_eq!(config.image_extensions, Some(vec!["svg".to_string()]));
    // environment beats user
    assert_eq!(
        config.markdown_extensions,
        Some(vec!["md".to_string(), "mdx".to_string()])
    );
    // user value survives where nothing overrides it
    assert_eq!(config.ignore_case, Some(false));
    assert_eq!(config.wiki_page_extensions, Some(vec!["wiki".to_string()]));
}

#[test]
#[serial]
fn test_case_sensitivity_from_env() {
    let _env = clear_mdpath_env_vars();
    let _case = EnvGuard::new("MDPATH_IGNORE_CASE", "0");
    let ws = Workspace::new();

    let extensions = ws.builder().build_extensions().unwrap();
    assert!(!extensions.ignore_case);
    assert!(!WikiPath::new("A.PNG").is_image_extension(&extensions));
    assert!(WikiPath::new("a.png").is_image_extension(&extensions));
}

#[test]
#[serial]
fn test_invalid_env_bool_rejected() {
    let _env = clear_mdpath_env_vars();
    let _case = EnvGuard::new("MDPATH_IGNORE_CASE", "perhaps");
    let ws = Workspace::new();

    let result = ws.builder().build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
#[serial]
fn test_env_extension_validated() {
    let _env = clear_mdpath_env_vars();
    let _img = EnvGuard::new("MDPATH_IMAGE_EXTENSIONS", "png,.gif");
    let ws = Workspace::new();

    let result = ws.builder().build();
    assert!(matches!(
        result,
        Err(Error::Validation { ref field, .. }) if field == "image_extensions"
    ));
}

#[test]
fn test_malformed_project_file_names_path() {
    let ws = Workspace::new();
    let path = write_config(ws.project.path(), ".mdpath.yaml", "image_extensions: [png\n");

    let result = ws.builder().skip_env().build();
    match result {
        Err(Error::ConfigParse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn test_unknown_key_rejected() {
    let ws = Workspace::new();
    write_config(ws.project.path(), ".mdpath.yaml", "extensions: [png]\n");

    let result = ws.builder().skip_env().build();
    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[test]
fn test_skip_files_ignores_project_file() {
    let ws = Workspace::new();
    write_config(ws.project.path(), ".mdpath.yaml", "ignore_case: false\n");

    let config = ws.builder().skip_files().skip_env().build().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_loader_reports_both_sources() {
    let ws = Workspace::new();
    write_config(ws.user.path(), "config.yaml", "ignore_case: true\n");
    write_config(ws.project.path(), ".mdpath.yaml", "ignore_case: false\n");

    let sources = ConfigLoader::load_all(&ws.nested(), Some(ws.user.path())).unwrap();
    let paths: Vec<_> = sources.iter().map(|s| s.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            ws.user.path().join("config.yaml"),
            ws.project.path().join(".mdpath.yaml"),
        ]
    );
}
