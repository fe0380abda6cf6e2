use std::collections::HashMap;

use pomsync_core::{
    DependencyNode, RewriteDecision, RewriteEntry, SkipEntry, SkipReason, build_inventory, plan,
};
use pomsync_maven::PomDocument;

use crate::context::CommandContext;

/// Outcome of the planning pass over every parsed document.
///
/// `edits` runs parallel to `CommandContext::documents`; an empty map means
/// the file needs no rewrite and must not be written.
pub struct RunPlan {
    pub rewrites: Vec<RewriteEntry>,
    pub skips: Vec<SkipEntry>,
    pub edits: Vec<HashMap<DependencyNode, String>>,
}

/// Build the inventory from every descriptor, then plan each document's
/// dependency rewrites against it. Pure; file writes happen in the commands.
#[must_use]
pub fn plan_run(context: &CommandContext) -> RunPlan {
    let inventory = build_inventory(context.documents().iter().map(PomDocument::descriptor));

    let mut rewrites = Vec::new();
    let mut skips = Vec::new();
    let mut edits = Vec::new();
    for document in context.documents() {
        let mut document_edits = HashMap::new();
        for (dependency, decision) in plan(document.descriptor(), &inventory) {
            let coordinate = dependency.coordinate();
            let (reason, property) = match decision {
                RewriteDecision::Rewrite(version) => {
                    rewrites.push(RewriteEntry::new(
                        coordinate.group_id().to_string(),
                        coordinate.artifact_id().to_string(),
                        document.relative_path().to_path_buf(),
                        dependency.raw_version().unwrap_or_default().to_string(),
                        version.clone(),
                    ));
                    document_edits.insert(dependency.node(), version);
                    continue;
                }
                RewriteDecision::SkipInherited => (SkipReason::Inherited, None),
                RewriteDecision::SkipForeignProperty(name) => {
                    (SkipReason::ForeignProperty, Some(name))
                }
                RewriteDecision::SkipUnchanged => (SkipReason::Unchanged, None),
                RewriteDecision::SkipUnresolved => (SkipReason::Unresolved, None),
            };
            skips.push(SkipEntry::new(
                coordinate.group_id().to_string(),
                coordinate.artifact_id().to_string(),
                document.relative_path().to_path_buf(),
                reason,
                property,
            ));
        }
        edits.push(document_edits);
    }
    RunPlan {
        rewrites,
        skips,
        edits,
    }
}
