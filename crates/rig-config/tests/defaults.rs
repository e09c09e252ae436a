//! Tests for default values and edge cases.

use rig_config::{
    CacheGroup, ChunkSelection, DevTool, Mode, ModuleIds, OptimizationPolicy, ProjectLayout,
    ModeFlags, RuntimeFlags, resolve,
};
use std::path::PathBuf;

#[test]
fn project_layout_defaults() {
    let layout = ProjectLayout::default();
    assert_eq!(layout.root, PathBuf::from("."));
    assert_eq!(layout.out_path(), PathBuf::from("./dist"));
    assert_eq!(layout.src_path(), PathBuf::from("./src"));
    assert_eq!(layout.static_dir, PathBuf::from("static"));
    assert_eq!(layout.template, PathBuf::from("index.ejs"));
    assert_eq!(layout.base_url, "");
}

#[test]
fn flag_defaults() {
    assert!(!ModeFlags::default().production);
    let runtime = RuntimeFlags::default();
    assert!(!runtime.analyze);
    assert!(!runtime.tests);
    assert!(!runtime.hot_reload);
    assert!(runtime.port.is_none());
    assert!(runtime.host.is_none());
}

#[test]
fn mode_defaults_to_development() {
    assert_eq!(Mode::default(), Mode::Development);
    assert_eq!(Mode::from_production(true), Mode::Production);
}

#[test]
fn optimization_defaults() {
    let policy = OptimizationPolicy::default();
    assert!(policy.runtime_chunk);
    assert_eq!(policy.module_ids, ModuleIds::Deterministic);
    assert!(policy.split_chunks.hide_path_info);
    assert_eq!(policy.split_chunks.chunks, ChunkSelection::All);
    assert!(!policy.split_chunks.cache_groups.default_group);
    assert_eq!(policy.split_chunks.cache_groups.vendors, CacheGroup::vendors());
}

#[test]
fn engine_defaults_in_resolved_config() {
    let config = resolve(&ModeFlags::default(), &RuntimeFlags::default());
    assert!(!config.performance.hints);
    assert_eq!(config.devtool, DevTool::EvalCheapModuleSourceMap);
    assert_eq!(config.output.public_path, "");
    assert_eq!(config.output.path, PathBuf::from("./dist"));
    assert_eq!(config.dev_server.static_dir, config.output.path);
    assert!(config.dev_server.headers.is_empty());
}

#[test]
fn devtool_serializes_false_when_disabled() {
    let config = resolve(&ModeFlags::production(), &RuntimeFlags::default());
    let value = config.to_value().unwrap();
    assert_eq!(value["devtool"], false);
    assert_eq!(value["mode"], "production");
    assert_eq!(value["performance"]["hints"], false);
}
