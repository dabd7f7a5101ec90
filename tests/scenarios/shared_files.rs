//! Scenario: several instances rewrite the same shared file
//!
//! Success Criteria:
//! - rewrites accumulate in instance order
//! - shared files that are no substitution target are copied verbatim

use camp::infrastructure::LocalFs;
use camp::{load_configuration, load_model, RealizeUseCase};

use crate::assert_file_content;
use crate::common::*;

/// SCENARIO: each instance leaves the pattern behind for the next one
#[test]
fn scenario_shared_rewrites_accumulate_in_instance_order() {
    let env = TestEnv::builder()
        .with_template_file("docker-compose.yml", "slots: slot=XXX\n")
        .build();

    let model = load_model(TWO_SERVERS_MODEL).unwrap();
    let configuration = load_configuration(&model, TWO_SERVERS_CONFIGURATION).unwrap();
    let report = RealizeUseCase::new(LocalFs::new())
        .build(&configuration, env.root(), &env.destination(1))
        .unwrap();

    assert_file_content!(env, 1, "docker-compose.yml", "slots: slot=2 slot=1 slot=XXX\n");
    assert_eq!(report.substitutions, 2);
    // No template/server directory: nothing to copy for the instances.
    assert!(report.instances.is_empty());
}

/// SCENARIO: untouched shared files, nested ones included, are copied as they are
#[test]
fn scenario_untouched_shared_files_are_copied_verbatim() {
    let env = TestEnv::builder()
        .with_template(SERVER_TEMPLATE)
        .with_template_file("scripts/run.sh", "#!/bin/sh\necho mem=XXX\n")
        .build();

    let model = load_model(SERVER_MODEL).unwrap();
    let configuration = load_configuration(&model, &server_configuration("1GB")).unwrap();
    RealizeUseCase::new(LocalFs::new())
        .build(&configuration, env.root(), &env.destination(1))
        .unwrap();

    assert_file_content!(env, 1, "README.md", "left as is: mem=XXX\n");
    assert_file_content!(env, 1, "scripts/run.sh", "#!/bin/sh\necho mem=XXX\n");
}
