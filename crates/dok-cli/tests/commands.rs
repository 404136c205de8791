//! Command-level tests driven through the clap parser.

use std::fs;

use clap::{CommandFactory, Parser};
use tempfile::TempDir;
use tracing::level_filters::LevelFilter;

use dok_cli::cli::{Cli, Command};
use dok_cli::commands::{run_generate, run_seed, seed_exit_code};
use dok_cli::logging::{LogFormat, log_config_from_cli};
use dok_cli::summary::{bundle_table, levels_table, seed_table};
use dok_model::{DokLevel, ModelError};
use dok_standards::SeedStatus;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("dok-studio").chain(args.iter().copied()))
        .expect("valid arguments")
}

fn seed_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(
        dir.path().join("data/Science.csv"),
        "subject,grade_or_band,code,statement\n\
         Science,MS,MS-PS1-1,Develop models to describe atomic composition.\n\
         Science,K,K-PS2-1,Plan and conduct an investigation.\n",
    )
    .unwrap();
    dir
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn log_flags_reach_the_log_config() {
    let config = log_config_from_cli(&parse(&[
        "--log-timestamps",
        "--log-target",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--color",
        "never",
        "levels",
    ]));
    assert!(config.with_timestamps);
    assert!(config.with_target);
    assert!(!config.with_ansi);
    assert!(!config.use_env_filter);
    assert_eq!(config.level_filter, LevelFilter::DEBUG);
    assert_eq!(config.format, LogFormat::Json);

    let defaults = log_config_from_cli(&parse(&["levels"]));
    assert!(!defaults.with_timestamps);
    assert!(!defaults.with_target);
    assert!(defaults.use_env_filter);
    assert_eq!(defaults.format, LogFormat::Pretty);
}

#[test]
fn seed_writes_outputs_under_root() {
    let dir = seed_fixture();
    let root = dir.path().to_str().unwrap();
    let Command::Seed(args) = parse(&["seed", "--root", root]).command else {
        panic!("expected seed command");
    };

    let report = run_seed(&args).unwrap();

    assert_eq!(report.subjects[2].status, SeedStatus::Written);
    assert_eq!(report.total_standards(), 2);
    assert_eq!(seed_exit_code(&report), 0);
    let json = fs::read_to_string(dir.path().join("standards/Science.json")).unwrap();
    assert!(json.find("\"K\"").unwrap() < json.find("\"MS\"").unwrap());
    assert!(seed_table(&report).to_string().contains("Science.csv"));
}

#[test]
fn seed_check_fails_until_outputs_exist() {
    let dir = seed_fixture();
    let root = dir.path().to_str().unwrap();
    let Command::Seed(check) = parse(&["seed", "--root", root, "--check"]).command else {
        panic!("expected seed command");
    };
    let Command::Seed(write) = parse(&["seed", "--root", root]).command else {
        panic!("expected seed command");
    };

    assert_eq!(seed_exit_code(&run_seed(&check).unwrap()), 1);
    run_seed(&write).unwrap();
    assert_eq!(seed_exit_code(&run_seed(&check).unwrap()), 0);
}

#[test]
fn seed_directory_flags_override_defaults() {
    let dir = seed_fixture();
    let root = dir.path().to_str().unwrap();
    let Command::Seed(args) =
        parse(&["seed", "--root", root, "--output-dir", "build/json"]).command
    else {
        panic!("expected seed command");
    };

    run_seed(&args).unwrap();

    assert!(dir.path().join("build/json/Science.json").exists());
    assert!(!dir.path().join("standards").exists());
}

#[test]
fn generate_all_kinds() {
    let Command::Generate(args) = parse(&[
        "generate",
        "--standard",
        "RL.5.1 – cite evidence",
        "--subject",
        "ELA",
        "--grade",
        "5",
        "--dok",
        "3",
    ])
    .command
    else {
        panic!("expected generate command");
    };

    let bundle = run_generate(&args).unwrap();

    assert_eq!(bundle.dok, DokLevel::StrategicThinking);
    assert_eq!(bundle.items.len(), 2);
    assert_eq!(bundle.activities.len(), 2);
    let rendered = bundle_table(&bundle).to_string();
    assert_eq!(rendered.matches("Activity").count(), 2);
}

#[test]
fn generate_items_only() {
    let Command::Generate(args) =
        parse(&["generate", "--standard", "NBT.3", "--dok", "1", "--kind", "items"]).command
    else {
        panic!("expected generate command");
    };

    let bundle = run_generate(&args).unwrap();

    assert_eq!(bundle.items.len(), 2);
    assert!(bundle.activities.is_empty());
}

#[test]
fn generate_rejects_out_of_range_level() {
    let Command::Generate(args) =
        parse(&["generate", "--standard", "NBT.3", "--dok", "-1"]).command
    else {
        panic!("expected generate command");
    };

    let err = run_generate(&args).unwrap_err();

    assert_eq!(
        err.downcast_ref::<ModelError>(),
        Some(&ModelError::InvalidDokLevel(-1))
    );
}

#[test]
fn levels_table_lists_every_level() {
    let rendered = levels_table().to_string();
    for word in ["Recall", "Skills", "Strategic", "Extended", "identify", "defend"] {
        assert!(rendered.contains(word), "missing {word}");
    }
}
