use std::collections::HashMap;
use std::path::Path;

use pomsync_core::{ArtifactCoordinate, Dependency, DependencyNode, Descriptor, Parent};
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::PomError;

/// Where the text of the currently open element belongs.
#[derive(Debug)]
enum Slot {
    ProjectGroupId,
    ProjectArtifactId,
    ProjectVersion,
    ParentGroupId,
    ParentArtifactId,
    ParentVersion,
    Property(String),
    DependencyGroupId,
    DependencyArtifactId,
    DependencyVersion,
}

#[derive(Debug)]
struct DependencyDraft {
    ordinal: usize,
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Default)]
struct Scan {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    parent_seen: bool,
    parent_group_id: Option<String>,
    parent_artifact_id: Option<String>,
    parent_version: Option<String>,
    properties: HashMap<String, String>,
    dependencies: Vec<Dependency>,
    draft: Option<DependencyDraft>,
    next_ordinal: usize,
}

impl Scan {
    // First element wins everywhere, like a first-match selector would.
    fn assign(&mut self, slot: Slot, value: String) {
        match slot {
            Slot::ProjectGroupId => {
                self.group_id.get_or_insert(value);
            }
            Slot::ProjectArtifactId => {
                self.artifact_id.get_or_insert(value);
            }
            Slot::ProjectVersion => {
                self.version.get_or_insert(value);
            }
            Slot::ParentGroupId => {
                self.parent_group_id.get_or_insert(value);
            }
            Slot::ParentArtifactId => {
                self.parent_artifact_id.get_or_insert(value);
            }
            Slot::ParentVersion => {
                self.parent_version.get_or_insert(value);
            }
            Slot::Property(name) => {
                self.properties.entry(name).or_insert(value);
            }
            Slot::DependencyGroupId => {
                if let Some(draft) = &mut self.draft {
                    draft.group_id.get_or_insert(value);
                }
            }
            Slot::DependencyArtifactId => {
                if let Some(draft) = &mut self.draft {
                    draft.artifact_id.get_or_insert(value);
                }
            }
            Slot::DependencyVersion => {
                if let Some(draft) = &mut self.draft {
                    draft.version.get_or_insert(value);
                }
            }
        }
    }

    fn open_dependency(&mut self) {
        self.draft = Some(DependencyDraft {
            ordinal: self.next_ordinal,
            group_id: None,
            artifact_id: None,
            version: None,
        });
        self.next_ordinal += 1;
    }

    fn close_dependency(&mut self, path: &Path) -> Result<(), PomError> {
        if let Some(draft) = self.draft.take() {
            let Some(group_id) = draft.group_id else {
                return Err(PomError::MissingGroupId {
                    path: path.to_path_buf(),
                });
            };
            let Some(artifact_id) = draft.artifact_id else {
                return Err(PomError::MissingArtifactId {
                    path: path.to_path_buf(),
                });
            };
            self.dependencies.push(Dependency::new(
                ArtifactCoordinate::new(group_id, artifact_id),
                draft.version,
                DependencyNode::new(draft.ordinal),
            ));
        }
        Ok(())
    }
}

fn path_is(stack: &[Vec<u8>], expected: &[&[u8]]) -> bool {
    stack.len() == expected.len()
        && stack
            .iter()
            .zip(expected)
            .all(|(name, want)| name.as_slice() == *want)
}

fn parent_is(stack: &[Vec<u8>], name: &[u8]) -> bool {
    stack.last().is_some_and(|last| last.as_slice() == name)
}

fn slot_for(stack: &[Vec<u8>], name: &[u8], in_dependency: bool) -> Option<Slot> {
    if path_is(stack, &[b"project"]) {
        return match name {
            b"groupId" => Some(Slot::ProjectGroupId),
            b"artifactId" => Some(Slot::ProjectArtifactId),
            b"version" => Some(Slot::ProjectVersion),
            _ => None,
        };
    }
    if path_is(stack, &[b"project", b"parent"]) {
        return match name {
            b"groupId" => Some(Slot::ParentGroupId),
            b"artifactId" => Some(Slot::ParentArtifactId),
            b"version" => Some(Slot::ParentVersion),
            _ => None,
        };
    }
    if parent_is(stack, b"properties") {
        return Some(Slot::Property(String::from_utf8_lossy(name).into_owned()));
    }
    if in_dependency && parent_is(stack, b"dependency") {
        return match name {
            b"groupId" => Some(Slot::DependencyGroupId),
            b"artifactId" => Some(Slot::DependencyArtifactId),
            b"version" => Some(Slot::DependencyVersion),
            _ => None,
        };
    }
    None
}

/// Parse one `pom.xml` into a [`Descriptor`].
///
/// Project identity fields are read from direct children of the `project`
/// root; a missing project `groupId` falls back to the parent's. Properties
/// come from any `<properties>` block (first definition wins) and
/// dependencies from any `<dependencies>` block, `dependencyManagement` and
/// profiles included, in document order. A version element that is present
/// but empty reads as the empty string, which is not the same as absent.
///
/// # Errors
///
/// [`PomError::Malformed`] for XML the parser rejects;
/// [`PomError::MissingGroupId`] / [`PomError::MissingArtifactId`] when the
/// project or one of its dependencies lacks an identity field.
pub fn parse_descriptor(content: &str, path: &Path) -> Result<Descriptor, PomError> {
    let mut reader = Reader::from_str(content);
    let mut buf = Vec::new();

    let mut scan = Scan::default();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    // open text capture: the slot and the stack depth of its element
    let mut capture: Option<(Slot, usize)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                if capture.is_none() {
                    if let Some(slot) = slot_for(&stack, &name, scan.draft.is_some()) {
                        capture = Some((slot, stack.len() + 1));
                        text.clear();
                    } else if name == b"parent" && path_is(&stack, &[b"project"]) {
                        scan.parent_seen = true;
                    } else if name == b"dependency"
                        && parent_is(&stack, b"dependencies")
                        && scan.draft.is_none()
                    {
                        scan.open_dependency();
                    }
                }
                stack.push(name);
            }
            Ok(Event::Empty(e)) => {
                let name = e.local_name().as_ref().to_vec();
                if capture.is_none() {
                    if let Some(slot) = slot_for(&stack, &name, scan.draft.is_some()) {
                        scan.assign(slot, String::new());
                    } else if name == b"parent" && path_is(&stack, &[b"project"]) {
                        scan.parent_seen = true;
                    } else if name == b"dependency"
                        && parent_is(&stack, b"dependencies")
                        && scan.draft.is_none()
                    {
                        // a self-closed dependency has no identity at all
                        scan.open_dependency();
                        scan.close_dependency(path)?;
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if capture.is_some() && let Ok(chunk) = e.decode() {
                    text.push_str(&chunk);
                }
            }
            Ok(Event::End(e)) => {
                stack.pop();
                if let Some((slot, _)) = capture.take_if(|(_, depth)| stack.len() < *depth) {
                    scan.assign(slot, text.trim().to_string());
                }
                if e.local_name().as_ref() == b"dependency"
                    && parent_is(&stack, b"dependencies")
                    && scan.draft.is_some()
                {
                    scan.close_dependency(path)?;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(PomError::Malformed {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
            _ => {}
        }
        buf.clear();
    }

    let Scan {
        group_id,
        artifact_id,
        version,
        parent_seen,
        parent_group_id,
        parent_artifact_id,
        parent_version,
        properties,
        dependencies,
        ..
    } = scan;

    let Some(group_id) = group_id.or_else(|| parent_group_id.clone()) else {
        return Err(PomError::MissingGroupId {
            path: path.to_path_buf(),
        });
    };
    let Some(artifact_id) = artifact_id else {
        return Err(PomError::MissingArtifactId {
            path: path.to_path_buf(),
        });
    };
    let parent =
        parent_seen.then(|| Parent::new(parent_group_id, parent_artifact_id, parent_version));

    Ok(Descriptor::new(
        ArtifactCoordinate::new(group_id, artifact_id),
        version,
        parent,
        properties,
        dependencies,
    ))
}
