//! Behavior of the resolver across flag combinations.

use rig_config::{
    CONTENT_HASH_TOKENS, FileCategory, ModeFlags, PluginStage, RuntimeFlags,
    SESSION_HASH_TOKENS, StageKind, resolve,
};
use serde_json::json;

fn uses_only(templates: &[String], allowed: &[&str], forbidden: &[&str]) -> bool {
    templates.iter().all(|template| {
        allowed.iter().any(|token| template.contains(token))
            && !forbidden.iter().any(|token| template.contains(token))
    })
}

#[test]
fn production_build_without_tests_or_analysis() {
    let config = resolve(
        &ModeFlags { production: true },
        &RuntimeFlags {
            tests: false,
            analyze: false,
            ..RuntimeFlags::default()
        },
    );

    let templates: Vec<String> = config
        .filename_templates()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(templates.len(), 5);
    assert!(uses_only(&templates, &CONTENT_HASH_TOKENS, &SESSION_HASH_TOKENS));

    assert!(config.plugins.contains(StageKind::Copy));
    assert!(!config.plugins.contains(StageKind::BundleAnalyzer));
    assert!(config.plugins.contains(StageKind::ModuleReplacement));
}

#[test]
fn development_test_build_with_dev_server() {
    let config = resolve(
        &ModeFlags { production: false },
        &RuntimeFlags::from_value(json!({
            "tests": true,
            "hmr": true,
            "port": 9000,
            "host": "0.0.0.0"
        }))
        .unwrap(),
    );

    let templates: Vec<String> = config
        .filename_templates()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert!(uses_only(&templates, &SESSION_HASH_TOKENS, &CONTENT_HASH_TOKENS));

    assert!(!config.plugins.contains(StageKind::Copy));
    assert!(config.dev_server.hot);
    assert_eq!(config.dev_server.port, Some(9000));
    assert_eq!(config.dev_server.host.as_deref(), Some("0.0.0.0"));
    assert!(config.dev_server.history_api_fallback);
}

#[test]
fn analyzer_stage_follows_flag() {
    let on = resolve(
        &ModeFlags::default(),
        &RuntimeFlags {
            analyze: true,
            ..RuntimeFlags::default()
        },
    );
    let off = resolve(&ModeFlags::default(), &RuntimeFlags::default());

    assert!(on.plugins.contains(StageKind::BundleAnalyzer));
    assert!(!off.plugins.contains(StageKind::BundleAnalyzer));
}

#[test]
fn clean_runs_before_copy() {
    let config = resolve(&ModeFlags::default(), &RuntimeFlags::default());
    let clean = config.plugins.position(StageKind::Clean).unwrap();
    let copy = config.plugins.position(StageKind::Copy).unwrap();
    assert!(clean < copy);
}

#[test]
fn copy_stage_mirrors_static_dir_without_hidden_files() {
    let config = resolve(&ModeFlags::default(), &RuntimeFlags::default());
    let Some(PluginStage::Copy(copy)) = config.plugins.get(StageKind::Copy) else {
        panic!("copy stage missing");
    };
    assert_eq!(copy.patterns.len(), 1);
    assert_eq!(copy.patterns[0].from.to_str(), Some("static"));
    assert_eq!(copy.patterns[0].to, config.output.path);
    assert_eq!(copy.patterns[0].ignore, vec![".*"]);
}

#[test]
fn development_builds_keep_dev_config_module() {
    let config = resolve(&ModeFlags::default(), &RuntimeFlags::default());
    assert!(!config.plugins.contains(StageKind::ModuleReplacement));
}

#[test]
fn production_swaps_environment_module() {
    let config = resolve(&ModeFlags::production(), &RuntimeFlags::default());
    let Some(PluginStage::ModuleReplacement(swap)) =
        config.plugins.get(StageKind::ModuleReplacement)
    else {
        panic!("replacement stage missing");
    };
    assert_eq!(swap.apply("./environment/config-dev"), "./environment/config-prod");
    // Selected case-insensitively, rewritten case-sensitively
    assert_eq!(swap.apply("./environment/CONFIG-DEV"), "./environment/CONFIG-DEV");
}

#[test]
fn one_rule_per_category() {
    let config = resolve(&ModeFlags::default(), &RuntimeFlags::default());
    let categories: Vec<FileCategory> =
        config.module.rules.iter().map(|rule| rule.category).collect();
    assert_eq!(
        categories,
        vec![
            FileCategory::Markup,
            FileCategory::TypedSource,
            FileCategory::RasterImage,
            FileCategory::Stylesheet,
            FileCategory::PreprocessedStylesheet,
        ]
    );
    assert!(config.module.rules.find_conflict().is_none());
}

#[test]
fn stylesheets_from_markup_are_not_processed() {
    let config = resolve(&ModeFlags::default(), &RuntimeFlags::default());
    let rules = &config.module.rules;

    for sheet in ["src/app.css", "src/theme.scss"] {
        assert!(rules.find(sheet, Some("src/app.html")).is_none(), "{sheet}");
        assert!(rules.find(sheet, None).is_none(), "{sheet}");
        assert!(rules.find(sheet, Some("src/main.ts")).is_some(), "{sheet}");
    }

    let scss = rules.find("src/theme.scss", Some("src/main.ts")).unwrap();
    assert_eq!(
        scss.loader_names().collect::<Vec<_>>(),
        vec!["mini-css-extract-plugin/loader", "css-loader", "sass-loader"]
    );
}

#[test]
fn first_matching_rule_handles_file() {
    let config = resolve(&ModeFlags::default(), &RuntimeFlags::default());
    let rules = &config.module.rules;

    let category = |path: &str, issuer: Option<&str>| rules.find(path, issuer).unwrap().category;

    assert_eq!(category("views/Shell.HTML", None), FileCategory::Markup);
    assert_eq!(category("src/main.ts", None), FileCategory::TypedSource);
    assert_eq!(category("img/logo.png", Some("src/main.ts")), FileCategory::RasterImage);
    assert!(rules.find("src/legacy.js", None).is_none());
}

#[test]
fn serialized_shape_matches_engine() {
    let config = resolve(&ModeFlags::default(), &RuntimeFlags::default());
    let value = config.to_value().unwrap();

    assert_eq!(value["entry"], json!({ "app": ["aurelia-bootstrapper"] }));
    assert_eq!(value["output"]["filename"], "[name].[fullhash].bundle.js");
    assert_eq!(value["output"]["publicPath"], "");
    assert_eq!(value["devServer"]["historyApiFallback"], true);
    assert_eq!(value["devServer"]["hot"], false);
    assert_eq!(value["module"]["rules"][0]["test"], r"/\.html$/i");
    assert_eq!(value["module"]["rules"][3]["issuer"], r"/\.ts?$/i");
    assert_eq!(value["module"]["rules"][1]["use"][0]["options"]["allowTsInNodeModules"], true);
    assert_eq!(value["plugins"][0]["plugin"], "clean");
    assert_eq!(value["plugins"][2]["plugin"], "css-extract");
    assert_eq!(value["plugins"][2]["filename"], "css/[name].[hash].bundle.css");
    assert_eq!(value["plugins"][3]["metadata"]["title"], "Title from rig");
    assert_eq!(value["plugins"][3]["metadata"]["baseUrl"], "");
}
