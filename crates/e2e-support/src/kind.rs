//! Loading container images into a local kind cluster
//!
//! Test images are built locally and never pushed to a registry, so they are
//! imported into the cluster nodes with `kind load docker-image`.

use crate::command::CommandRunner;
use crate::errors::Result;
use std::process::Command;
use tracing::{debug, instrument};

/// Environment variable overriding the target cluster name
pub const KIND_CLUSTER_NAME_ENV: &str = "KIND_CLUSTER_NAME";

/// Environment variable selecting a versioned local kind binary
pub const KIND_VERSION_ENV: &str = "KIND_VERSION";

const DEFAULT_CLUSTER_NAME: &str = "kind";

/// Load a local docker image into the test cluster
///
/// The cluster name defaults to `kind` and can be overridden via
/// `KIND_CLUSTER_NAME`. When `KIND_VERSION` is set, the versioned binary
/// `./bin/kind-<version>` (relative to the project root) is used instead of
/// `kind` on PATH.
#[instrument(skip(runner))]
pub fn load_image_into_cluster(runner: &mut CommandRunner, image: &str) -> Result<()> {
    let cluster = std::env::var(KIND_CLUSTER_NAME_ENV).ok();
    let version = std::env::var(KIND_VERSION_ENV).ok();

    let mut cmd = kind_invocation(image, cluster.as_deref(), version.as_deref());
    debug!("loading image {} into the test cluster", image);
    runner.run(&mut cmd)?;

    Ok(())
}

fn kind_invocation(image: &str, cluster: Option<&str>, version: Option<&str>) -> Command {
    let cluster = cluster.unwrap_or(DEFAULT_CLUSTER_NAME);

    let binary = match version {
        Some(version) => format!("./bin/kind-{}", version),
        None => "kind".to_string(),
    };

    let mut cmd = Command::new(binary);
    cmd.args(["load", "docker-image", image, "--name", cluster]);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(cmd: &Command) -> Vec<String> {
        let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
        parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
        parts
    }

    #[test]
    fn test_invocation_defaults() {
        let cmd = kind_invocation("controller:e2e", None, None);
        assert_eq!(
            rendered(&cmd),
            ["kind", "load", "docker-image", "controller:e2e", "--name", "kind"]
        );
    }

    #[test]
    fn test_invocation_with_cluster_override() {
        let cmd = kind_invocation("controller:e2e", Some("dev"), None);
        assert_eq!(
            rendered(&cmd),
            ["kind", "load", "docker-image", "controller:e2e", "--name", "dev"]
        );
    }

    #[test]
    fn test_invocation_with_versioned_binary() {
        let cmd = kind_invocation("controller:e2e", None, Some("v0.23.0"));
        assert_eq!(rendered(&cmd)[0], "./bin/kind-v0.23.0");
    }
}
