//! Reusable workspace content.

/// A server needing a JVM, with one variable rewriting component and shared files
pub const SERVER_MODEL: &str = r#"
components:
  server:
    provides_services: [ Awesome ]
    requires_features: [ JVM ]
    variables:
      memory:
        values: [ 1GB, 2GB ]
        realization:
          - targets: [ server/Dockerfile, server/server.cfg, docker-compose.yml ]
            pattern: mem=XXX
            replacements: [ mem=1, mem=2 ]
    implementation:
      docker:
        file: server/Dockerfile
  jdk:
    provides_features: [ JVM ]
    implementation:
      docker:
        file: jdk/Dockerfile
goals:
  running: [ Awesome ]
"#;

/// Template tree of [`SERVER_MODEL`]
pub const SERVER_TEMPLATE: &[(&str, &str)] = &[
    ("server/Dockerfile", "FROM camp/jdk_0\nENV mem=XXX\n"),
    ("server/server.cfg", "mem=XXX\n"),
    ("jdk/Dockerfile", "FROM openjdk:8\n"),
    ("docker-compose.yml", "services:\n  server:\n    environment: [ mem=XXX ]\n"),
    ("README.md", "left as is: mem=XXX\n"),
];

/// One `server` on top of one `jdk`
pub fn server_configuration(memory: &str) -> String {
    format!(
        "instances:\n  server_0:\n    definition: server\n    feature_provider: jdk_0\n    configuration:\n      memory: {}\n  jdk_0:\n    definition: jdk\n",
        memory
    )
}

/// Two servers writing into the same shared file
pub const TWO_SERVERS_MODEL: &str = r#"
components:
  server:
    variables:
      slot:
        values: [ 1, 2 ]
        realization:
          - targets: [ docker-compose.yml ]
            pattern: slot=XXX
            replacements: [ "slot=1 slot=XXX", "slot=2 slot=XXX" ]
"#;

pub const TWO_SERVERS_CONFIGURATION: &str = r#"
instances:
  server_0:
    definition: server
    configuration:
      slot: 2
  server_1:
    definition: server
    configuration:
      slot: 1
"#;
