use std::collections::HashMap;
use std::io::Cursor;

use anyhow::{Context, Result};
use pomsync_core::DependencyNode;
use quick_xml::events::{BytesEnd, BytesText, Event};
use quick_xml::{Reader, Writer};

/// Replace the `<version>` text of the dependencies named in `edits`, keyed
/// by the same node handles the reader assigned, and copy every other event
/// through untouched.
///
/// Only the first `<version>` child of a targeted dependency is touched; a
/// present-but-empty element gets the new text inserted and a self-closed one
/// is expanded to an open/close pair around it.
pub fn apply_rewrites(content: &str, edits: &HashMap<DependencyNode, String>) -> Result<String> {
    let mut reader = Reader::from_str(content);
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let mut buf = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut next_ordinal = 0usize;
    // replacement for the dependency currently open, if any
    let mut replacement: Option<&str> = None;
    let mut version_done = false;
    let mut in_version = false;
    let mut text_replaced = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"dependency" && parent_is(&stack, b"dependencies") {
                    replacement = edits
                        .get(&DependencyNode::new(next_ordinal))
                        .map(String::as_str);
                    next_ordinal += 1;
                    version_done = false;
                } else if name == b"version"
                    && parent_is(&stack, b"dependency")
                    && replacement.is_some()
                    && !version_done
                {
                    in_version = true;
                    text_replaced = false;
                }
                stack.push(name);
                writer.write_event(Event::Start(e.clone()))?;
            }
            Ok(Event::End(e)) => {
                stack.pop();
                if in_version && e.local_name().as_ref() == b"version" {
                    if !text_replaced && let Some(new_version) = replacement {
                        // the element was empty: insert the text before closing
                        writer.write_event(Event::Text(BytesText::new(new_version)))?;
                    }
                    in_version = false;
                    version_done = true;
                } else if e.local_name().as_ref() == b"dependency"
                    && parent_is(&stack, b"dependencies")
                {
                    replacement = None;
                }
                writer.write_event(Event::End(e.clone()))?;
            }
            Ok(Event::Empty(e)) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"version"
                    && parent_is(&stack, b"dependency")
                    && !version_done
                    && let Some(new_version) = replacement
                {
                    // expand <version/> so the new text has somewhere to live
                    let end = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    writer.write_event(Event::Start(e.clone()))?;
                    writer.write_event(Event::Text(BytesText::new(new_version)))?;
                    writer.write_event(Event::End(BytesEnd::new(end)))?;
                    version_done = true;
                } else {
                    if name == b"dependency" && parent_is(&stack, b"dependencies") {
                        next_ordinal += 1;
                    }
                    writer.write_event(Event::Empty(e.clone()))?;
                }
            }
            Ok(Event::Text(e)) => {
                if in_version {
                    if !text_replaced && let Some(new_version) = replacement {
                        writer.write_event(Event::Text(BytesText::new(new_version)))?;
                        text_replaced = true;
                    }
                } else {
                    writer.write_event(Event::Text(e.clone()))?;
                }
            }
            Ok(Event::CData(e)) => {
                if in_version {
                    if !text_replaced && let Some(new_version) = replacement {
                        writer.write_event(Event::Text(BytesText::new(new_version)))?;
                        text_replaced = true;
                    }
                } else {
                    writer.write_event(Event::CData(e.clone()))?;
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if in_version {
                    if !text_replaced && let Some(new_version) = replacement {
                        writer.write_event(Event::Text(BytesText::new(new_version)))?;
                        text_replaced = true;
                    }
                } else {
                    writer.write_event(Event::GeneralRef(e.clone()))?;
                }
            }
            Ok(Event::Comment(e)) => {
                writer.write_event(Event::Comment(e.clone()))?;
            }
            Ok(Event::Decl(e)) => {
                writer.write_event(Event::Decl(e.clone()))?;
            }
            Ok(Event::PI(e)) => {
                writer.write_event(Event::PI(e.clone()))?;
            }
            Ok(Event::DocType(e)) => {
                writer.write_event(Event::DocType(e.clone()))?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("XML parsing error: {e}")),
        }
        buf.clear();
    }

    let result = writer.into_inner().into_inner();
    String::from_utf8(result).context("Failed to convert XML to UTF-8")
}

fn parent_is(stack: &[Vec<u8>], name: &[u8]) -> bool {
    stack.last().is_some_and(|last| last.as_slice() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edits(entries: &[(usize, &str)]) -> HashMap<DependencyNode, String> {
        entries
            .iter()
            .map(|(ordinal, version)| (DependencyNode::new(*ordinal), version.to_string()))
            .collect()
    }

    const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <groupId>org.example</groupId>
  <artifactId>app</artifactId>
  <version>0.1.0</version>
  <!-- build deps -->
  <dependencies>
    <dependency>
      <groupId>org.example</groupId>
      <artifactId>json</artifactId>
      <version>1.0</version>
    </dependency>
    <dependency>
      <groupId>org.example</groupId>
      <artifactId>http-client</artifactId>
      <version>5.2.1</version>
    </dependency>
  </dependencies>
</project>
"#;

    #[test]
    fn test_rewrites_targeted_dependency_only() {
        let result = apply_rewrites(POM, &edits(&[(0, "2.0")])).unwrap();

        assert!(result.contains("<version>2.0</version>"));
        assert!(!result.contains("<version>1.0</version>"));
        // sibling dependency and project version untouched
        assert!(result.contains("<version>5.2.1</version>"));
        assert!(result.contains("<version>0.1.0</version>"));
        assert!(result.contains("<!-- build deps -->"));
    }

    #[test]
    fn test_ordinal_addresses_second_dependency() {
        let result = apply_rewrites(POM, &edits(&[(1, "6.0")])).unwrap();

        assert!(result.contains("<version>1.0</version>"));
        assert!(result.contains("<version>6.0</version>"));
        assert!(!result.contains("5.2.1"));
    }

    #[test]
    fn test_empty_plan_is_byte_identical() {
        let result = apply_rewrites(POM, &HashMap::new()).unwrap();
        assert_eq!(result, POM);
    }

    #[test]
    fn test_untargeted_file_parts_are_byte_identical() {
        let result = apply_rewrites(POM, &edits(&[(0, "2.0")])).unwrap();
        assert_eq!(
            result,
            POM.replace("<version>1.0</version>", "<version>2.0</version>")
        );
    }

    #[test]
    fn test_project_version_is_never_a_target() {
        // node 0 is the first dependency, not the project version element
        let result = apply_rewrites(POM, &edits(&[(0, "9.9")])).unwrap();
        assert!(result.contains("<version>0.1.0</version>"));
    }

    #[test]
    fn test_fills_in_empty_version_element() {
        let content = r"<project>
  <dependencies>
    <dependency>
      <groupId>g</groupId>
      <artifactId>a</artifactId>
      <version></version>
    </dependency>
  </dependencies>
</project>";

        let result = apply_rewrites(content, &edits(&[(0, "1.5")])).unwrap();
        assert!(result.contains("<version>1.5</version>"));
    }

    #[test]
    fn test_expands_self_closed_version_element() {
        let content = r"<project>
  <dependencies>
    <dependency>
      <groupId>g</groupId>
      <artifactId>a</artifactId>
      <version/>
    </dependency>
  </dependencies>
</project>";

        let result = apply_rewrites(content, &edits(&[(0, "1.5")])).unwrap();
        assert!(result.contains("<version>1.5</version>"));
        assert!(!result.contains("<version/>"));
    }

    #[test]
    fn test_dependency_management_blocks_share_the_ordinal_space() {
        let content = r"<project>
  <dependencyManagement>
    <dependencies>
      <dependency>
        <groupId>g</groupId>
        <artifactId>managed</artifactId>
        <version>1.0</version>
      </dependency>
    </dependencies>
  </dependencyManagement>
  <dependencies>
    <dependency>
      <groupId>g</groupId>
      <artifactId>direct</artifactId>
      <version>1.0</version>
    </dependency>
  </dependencies>
</project>";

        let result = apply_rewrites(content, &edits(&[(1, "2.0")])).unwrap();

        // managed entry (node 0) keeps its version, direct entry (node 1) moves
        assert!(result.contains("<artifactId>managed</artifactId>\n        <version>1.0</version>"));
        assert!(result.contains("<artifactId>direct</artifactId>\n      <version>2.0</version>"));
    }

    #[test]
    fn test_preserves_declaration_comments_and_cdata() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- header -->
<project>
  <description><![CDATA[keeps <angle> brackets]]></description>
  <dependencies>
    <dependency>
      <groupId>g</groupId>
      <artifactId>a</artifactId>
      <version>1.0</version>
    </dependency>
  </dependencies>
</project>"#;

        let result = apply_rewrites(content, &edits(&[(0, "2.0")])).unwrap();

        assert!(result.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(result.contains("<!-- header -->"));
        assert!(result.contains("<![CDATA[keeps <angle> brackets]]>"));
        assert!(result.contains("<version>2.0</version>"));
    }

    #[test]
    fn test_property_reference_text_is_replaced_wholesale() {
        let content = r"<project>
  <dependencies>
    <dependency>
      <groupId>g</groupId>
      <artifactId>a</artifactId>
      <version>${lib.version}</version>
    </dependency>
  </dependencies>
</project>";

        let result = apply_rewrites(content, &edits(&[(0, "3.0")])).unwrap();

        assert!(result.contains("<version>3.0</version>"));
        assert!(!result.contains("${lib.version}"));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let content = "<project><dependencies><dependency><version>1</version></dependency";
        let result = apply_rewrites(content, &edits(&[(0, "2")]));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("XML parsing error"));
    }
}
