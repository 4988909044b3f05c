//! Generation pipeline
//!
//! Planning is pure: it turns a roster into the full set of artifacts in
//! memory. Writing is the only step that touches the filesystem, so a failed
//! plan leaves the output directory untouched.

use crate::config::Config;
use crate::roster::Roster;
use crate::stream::{self, SSH_PROXY_FILE, STREAM_MAP_FILE};
use crate::template::TemplateEngine;
use crate::vhost;
use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;

/// One generated file: where it goes and what goes in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// Plan all artifacts for the roster, in roster order
///
/// Produces the stream map, the SSH proxy blocks, and one vhost file per
/// student: `2 + N` artifacts in total. Fails if the collision check is
/// enabled and trips, or if a vhost template cannot be rendered.
pub fn plan(
    config: &Config,
    roster: &Roster,
    engine: &dyn TemplateEngine,
) -> anyhow::Result<Vec<Artifact>> {
    if config.check_port_collisions {
        roster.check_port_collisions()?;
    }

    let stream_dir = config.stream_dir();
    let mut artifacts = vec![
        Artifact {
            path: stream_dir.join(STREAM_MAP_FILE),
            content: stream::render_stream_map(roster, &config.domain),
        },
        Artifact {
            path: stream_dir.join(SSH_PROXY_FILE),
            content: stream::render_ssh_proxy(roster),
        },
    ];

    for student in roster.iter() {
        let content = vhost::render_vhost(engine, &config.template_name, student, &config.domain)?;
        artifacts.push(Artifact {
            path: config.output_dir.join(format!("{}.conf", student.name)),
            content,
        });
    }

    Ok(artifacts)
}

/// Write the planned artifacts, creating parent directories as needed
pub fn write(artifacts: &[Artifact]) -> anyhow::Result<()> {
    for artifact in artifacts {
        if let Some(parent) = artifact.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(&artifact.path, &artifact.content)
            .with_context(|| format!("failed to write '{}'", artifact.path.display()))?;
        debug!(path = %artifact.path.display(), bytes = artifact.content.len(), "Wrote artifact");
    }
    Ok(())
}
