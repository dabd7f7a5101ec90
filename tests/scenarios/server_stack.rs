//! Scenario: a server on top of a JDK
//!
//! Journey: the solver produced configurations for the `server`/`jdk` model;
//! each one is realized into its own artifact tree.
//!
//! Success Criteria:
//! - component files land under `images/<instance>/`
//! - shared files land at the root of the tree
//! - every target is rewritten with the replacement of the chosen value

use camp::infrastructure::LocalFs;
use camp::{load_configuration_from_path, load_model_from_path, RealizeUseCase};

use crate::common::*;
use crate::{assert_file_content, assert_realized};

fn server_workspace(memories: &[&str]) -> TestEnv {
    memories
        .iter()
        .fold(
            TestEnv::builder()
                .with_model(SERVER_MODEL)
                .with_template(SERVER_TEMPLATE),
            |builder, memory| builder.with_configuration(&server_configuration(memory)),
        )
        .build()
}

/// SCENARIO: one configuration, from YAML to artifacts
#[test]
fn scenario_single_configuration_is_realized() {
    let env = server_workspace(&["2GB"]);

    let model = load_model_from_path(&env.path("camp.yml")).unwrap();
    let configuration =
        load_configuration_from_path(&model, &env.path("out/config_1.yml")).unwrap();
    let report = RealizeUseCase::new(LocalFs::new())
        .build(&configuration, env.root(), &env.destination(1))
        .unwrap();

    assert_file_content!(env, 1, "images/server_0/Dockerfile", "FROM camp/jdk_0\nENV mem=2\n");
    assert_file_content!(env, 1, "images/server_0/server.cfg", "mem=2\n");
    assert_file_content!(env, 1, "images/jdk_0/Dockerfile", "FROM openjdk:8\n");
    assert_file_content!(
        env,
        1,
        "docker-compose.yml",
        "services:\n  server:\n    environment: [ mem=2 ]\n"
    );

    assert_eq!(report.instances, vec!["server_0", "jdk_0"]);
    assert_eq!(report.substitutions, 3);
    assert_eq!(report.file_count(), 5);
    assert!(report
        .shared
        .contains(std::path::Path::new("docker-compose.yml")));
}

/// SCENARIO: component directories are not copied to the root of the tree
#[test]
fn scenario_component_directories_stay_under_images() {
    let env = server_workspace(&["1GB"]);

    let model = load_model_from_path(&env.path("camp.yml")).unwrap();
    let configuration =
        load_configuration_from_path(&model, &env.path("out/config_1.yml")).unwrap();
    RealizeUseCase::new(LocalFs::new())
        .build(&configuration, env.root(), &env.destination(1))
        .unwrap();

    assert_realized!(env, 1, "images/server_0/server.cfg");
    assert!(!env.destination(1).join("server").exists());
    assert!(!env.destination(1).join("jdk").exists());
}

/// SCENARIO: every configuration gets its own numbered tree
#[test]
fn scenario_realize_all_numbers_trees_from_one() {
    let env = server_workspace(&["1GB", "2GB"]);

    let model = load_model_from_path(&env.path("camp.yml")).unwrap();
    let configurations = vec![
        load_configuration_from_path(&model, &env.path("out/config_1.yml")).unwrap(),
        load_configuration_from_path(&model, &env.path("out/config_2.yml")).unwrap(),
    ];
    let reports = RealizeUseCase::new(LocalFs::new())
        .realize_all(&configurations, env.root(), &env.path("out"))
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].destination, env.destination(1));
    assert_file_content!(env, 1, "images/server_0/server.cfg", "mem=1\n");
    assert_file_content!(env, 2, "images/server_0/server.cfg", "mem=2\n");
}

/// SCENARIO: provider stacks of a loaded configuration
#[test]
fn scenario_stacks_follow_feature_providers() {
    let env = server_workspace(&["1GB"]);

    let model = load_model_from_path(&env.path("camp.yml")).unwrap();
    let configuration =
        load_configuration_from_path(&model, &env.path("out/config_1.yml")).unwrap();

    let stacks: Vec<Vec<&str>> = configuration
        .stacks()
        .map(|stack| stack.iter().map(|instance| instance.name()).collect())
        .collect();
    assert_eq!(stacks, vec![vec!["server_0", "jdk_0"]]);
}
