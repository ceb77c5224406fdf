//! Diagram Validation
//!
//! The ordered pipeline a candidate diagram goes through before it may
//! replace the stored one. Each step is a standalone function so it can be
//! exercised on its own; `validate_diagram` runs them in order and stops at
//! the first failure.
//!
//! # Pipeline
//!
//! 1. `check_not_empty` - non-empty after trimming whitespace
//! 2. `check_xml_shape` - trimmed content starts with `<` and ends with `>`
//! 3. `check_size` - at most `MAX_DIAGRAM_BYTES` bytes
//! 4. `check_well_formed` - parses as well-formed XML
//! 5. `check_bpmn_marker` - mentions `bpmn` or `definitions` (any case)
//!
//! The shape check is a cheap rejection of obviously non-XML input before the
//! parser runs.

use crate::shared::error::DiagramError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Maximum accepted diagram size in bytes (10 MiB)
pub const MAX_DIAGRAM_BYTES: usize = 10 * 1024 * 1024;

/// Run the full validation pipeline on a candidate diagram
///
/// # Errors
///
/// Returns the `DiagramError` of the first failing step.
///
/// # Example
///
/// ```rust
/// use bpmn_collab::shared::diagram::validate_diagram;
/// use bpmn_collab::shared::error::DiagramError;
///
/// assert!(validate_diagram("<bpmn:definitions></bpmn:definitions>").is_ok());
/// assert_eq!(validate_diagram("   "), Err(DiagramError::EmptyContent));
/// assert_eq!(validate_diagram("<root></root>"), Err(DiagramError::NotBpmn));
/// ```
pub fn validate_diagram(candidate: &str) -> Result<(), DiagramError> {
    check_not_empty(candidate)?;
    check_xml_shape(candidate)?;
    check_size(candidate)?;
    check_well_formed(candidate)?;
    check_bpmn_marker(candidate)
}

/// Reject empty and whitespace-only content
pub fn check_not_empty(candidate: &str) -> Result<(), DiagramError> {
    if candidate.trim().is_empty() {
        return Err(DiagramError::EmptyContent);
    }
    Ok(())
}

/// Reject content that is not bracketed by `<` and `>` once trimmed
pub fn check_xml_shape(candidate: &str) -> Result<(), DiagramError> {
    let trimmed = candidate.trim();
    if trimmed.starts_with('<') && trimmed.ends_with('>') {
        Ok(())
    } else {
        Err(DiagramError::NotXmlShaped)
    }
}

/// Reject content over `MAX_DIAGRAM_BYTES`
///
/// The untrimmed byte length is what counts.
pub fn check_size(candidate: &str) -> Result<(), DiagramError> {
    let size = candidate.len();
    if size > MAX_DIAGRAM_BYTES {
        return Err(DiagramError::TooLarge {
            size,
            limit: MAX_DIAGRAM_BYTES,
        });
    }
    Ok(())
}

/// Parse the whole document and reject anything that is not well-formed
///
/// Beyond what the reader reports itself, this enforces:
/// - only characters from the XML `Char` production
/// - valid element and attribute names (prefixes are not resolved, so
///   `bpmn:definitions` needs no `xmlns` binding)
/// - attribute values free of raw `<` and of unknown entity references
/// - an XML declaration only at the very start
/// - no `]]>` in character data
/// - a single root element, no character data outside it, and no element
///   left open at the end of input
pub fn check_well_formed(candidate: &str) -> Result<(), DiagramError> {
    if let Some((pos, c)) = candidate.char_indices().find(|(_, c)| !is_xml_char(*c)) {
        return Err(DiagramError::malformed(format!(
            "invalid character U+{:04X} (at byte {})",
            c as u32, pos
        )));
    }

    let mut reader = Reader::from_str(candidate);
    let config = reader.config_mut();
    config.check_end_names = true;
    config.check_comments = true;

    let mut open: Vec<String> = Vec::new();
    let mut root_closed = false;
    let mut first_event = true;

    loop {
        let markup_start = reader.buffer_position() as usize;
        let event = reader.read_event().map_err(|e| {
            DiagramError::malformed(format!("{} (at byte {})", e, reader.buffer_position()))
        })?;

        match event {
            Event::Start(start) => {
                if open.is_empty() && root_closed {
                    return Err(DiagramError::malformed("multiple root elements"));
                }
                check_element(&start)?;
                open.push(String::from_utf8_lossy(start.name().as_ref()).into_owned());
            }
            Event::Empty(empty) => {
                if open.is_empty() && root_closed {
                    return Err(DiagramError::malformed("multiple root elements"));
                }
                check_element(&empty)?;
                if open.is_empty() {
                    root_closed = true;
                }
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                match open.pop() {
                    Some(expected) if expected == name => {}
                    Some(expected) => {
                        return Err(DiagramError::malformed(format!(
                            "expected </{}>, found </{}>",
                            expected, name
                        )));
                    }
                    None => {
                        return Err(DiagramError::malformed(format!(
                            "unexpected closing tag </{}>",
                            name
                        )));
                    }
                }
                if open.is_empty() {
                    root_closed = true;
                }
            }
            Event::Text(text) => {
                if text.windows(3).any(|w| w == b"]]>") {
                    return Err(DiagramError::malformed("']]>' is not allowed in character data"));
                }
                if open.is_empty() {
                    if !text.iter().all(|b| b.is_ascii_whitespace()) {
                        return Err(DiagramError::malformed(
                            "character data outside the root element",
                        ));
                    }
                } else {
                    text.unescape()
                        .map_err(|e| DiagramError::malformed(e.to_string()))?;
                }
            }
            Event::CData(_) if open.is_empty() => {
                return Err(DiagramError::malformed("CDATA outside the root element"));
            }
            Event::Decl(_) if !first_event || markup_start != 0 => {
                return Err(DiagramError::malformed(format!(
                    "XML declaration must be at the start of the document (at byte {})",
                    markup_start
                )));
            }
            Event::PI(_) => {
                let raw = candidate
                    .get(markup_start..reader.buffer_position() as usize)
                    .unwrap_or_default();
                if is_reserved_pi(raw) {
                    return Err(DiagramError::malformed(format!(
                        "reserved processing instruction target 'xml' (at byte {})",
                        markup_start
                    )));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        first_event = false;
    }

    if let Some(unclosed) = open.last() {
        return Err(DiagramError::malformed(format!(
            "unclosed element <{}>",
            unclosed
        )));
    }
    if !root_closed {
        return Err(DiagramError::malformed("no root element"));
    }
    Ok(())
}

/// Element name plus every attribute name and value
fn check_element(element: &BytesStart<'_>) -> Result<(), DiagramError> {
    check_name(element.name().as_ref())?;
    for attr in element.attributes() {
        let attr = attr.map_err(|e| DiagramError::malformed(e.to_string()))?;
        check_name(attr.key.as_ref())?;
        if attr.value.contains(&b'<') {
            return Err(DiagramError::malformed(format!(
                "'<' in value of attribute '{}'",
                String::from_utf8_lossy(attr.key.as_ref())
            )));
        }
        attr.unescape_value()
            .map_err(|e| DiagramError::malformed(e.to_string()))?;
    }
    Ok(())
}

fn check_name(raw: &[u8]) -> Result<(), DiagramError> {
    let name = std::str::from_utf8(raw).map_err(|e| DiagramError::malformed(e.to_string()))?;
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => is_name_start_char(first) && chars.all(is_name_char),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(DiagramError::malformed(format!("invalid name '{}'", name)))
    }
}

/// `<?xml ...?>` anywhere but the declaration, in any case
fn is_reserved_pi(raw: &str) -> bool {
    let target = raw
        .trim_start_matches("<?")
        .split(|c: char| c.is_ascii_whitespace() || c == '?')
        .next()
        .unwrap_or_default();
    target.eq_ignore_ascii_case("xml")
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

/// Require a `bpmn` or `definitions` marker somewhere in the content
pub fn check_bpmn_marker(candidate: &str) -> Result<(), DiagramError> {
    if contains_ignore_ascii_case(candidate, "bpmn")
        || contains_ignore_ascii_case(candidate, "definitions")
    {
        Ok(())
    } else {
        Err(DiagramError::NotBpmn)
    }
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const MINIMAL: &str = "<bpmn:definitions></bpmn:definitions>";

    #[test]
    fn test_accepts_minimal_bpmn() {
        assert_eq!(validate_diagram(MINIMAL), Ok(()));
    }

    #[test]
    fn test_accepts_realistic_document() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL" id="Definitions_1">
  <bpmn:process id="Process_1" isExecutable="false">
    <bpmn:startEvent id="StartEvent_1"/>
    <!-- a comment -->
    <bpmn:documentation>a &amp; b</bpmn:documentation>
  </bpmn:process>
</bpmn:definitions>
"#;
        assert_eq!(validate_diagram(xml), Ok(()));
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(validate_diagram(""), Err(DiagramError::EmptyContent));
        assert_eq!(validate_diagram(" \n\t "), Err(DiagramError::EmptyContent));
    }

    #[test]
    fn test_not_xml_shaped() {
        assert_eq!(validate_diagram("not xml"), Err(DiagramError::NotXmlShaped));
        assert_eq!(validate_diagram("<bpmn"), Err(DiagramError::NotXmlShaped));
        assert_eq!(validate_diagram("bpmn>"), Err(DiagramError::NotXmlShaped));
    }

    #[test]
    fn test_shape_check_ignores_surrounding_whitespace() {
        assert_eq!(validate_diagram(&format!("  \n{}\n  ", MINIMAL)), Ok(()));
    }

    #[test]
    fn test_too_large_checked_before_parse() {
        let mut xml = String::from("<bpmn>");
        xml.push_str(&"x".repeat(MAX_DIAGRAM_BYTES));
        // deliberately unclosed: size must win over the parse error
        xml.push('>');
        assert_matches!(
            validate_diagram(&xml),
            Err(DiagramError::TooLarge { limit: MAX_DIAGRAM_BYTES, .. })
        );
    }

    #[test]
    fn test_size_boundary() {
        let exact = "a".repeat(MAX_DIAGRAM_BYTES);
        assert_eq!(check_size(&exact), Ok(()));
        let over = "a".repeat(MAX_DIAGRAM_BYTES + 1);
        assert_eq!(
            check_size(&over),
            Err(DiagramError::TooLarge {
                size: MAX_DIAGRAM_BYTES + 1,
                limit: MAX_DIAGRAM_BYTES,
            })
        );
    }

    #[test]
    fn test_malformed_unclosed_tag() {
        assert_matches!(
            validate_diagram("<foo>"),
            Err(DiagramError::MalformedXml { detail }) if detail.contains("foo")
        );
    }

    #[test]
    fn test_malformed_mismatched_tags() {
        assert_matches!(
            validate_diagram("<bpmn:a></bpmn:b>"),
            Err(DiagramError::MalformedXml { .. })
        );
    }

    #[test]
    fn test_malformed_multiple_roots() {
        assert_matches!(
            validate_diagram("<bpmn></bpmn><bpmn></bpmn>"),
            Err(DiagramError::MalformedXml { .. })
        );
    }

    #[test]
    fn test_malformed_text_outside_root() {
        assert_matches!(
            check_well_formed("<definitions/>trailing<x/>"),
            Err(DiagramError::MalformedXml { .. })
        );
    }

    #[test]
    fn test_malformed_bad_entity() {
        assert_matches!(
            validate_diagram("<bpmn>&nope;</bpmn>"),
            Err(DiagramError::MalformedXml { .. })
        );
    }

    #[test]
    fn test_malformed_duplicate_attribute() {
        assert_matches!(
            validate_diagram(r#"<bpmn a="1" a="2"></bpmn>"#),
            Err(DiagramError::MalformedXml { .. })
        );
    }

    #[test]
    fn test_not_bpmn() {
        assert_eq!(validate_diagram("<root></root>"), Err(DiagramError::NotBpmn));
    }

    #[test]
    fn test_bpmn_marker_is_case_insensitive() {
        assert_eq!(check_bpmn_marker("<BPMN/>"), Ok(()));
        assert_eq!(check_bpmn_marker("<Definitions/>"), Ok(()));
        assert_eq!(check_bpmn_marker("<root/>"), Err(DiagramError::NotBpmn));
    }

    #[test]
    fn test_malformed_unknown_entity_in_attribute() {
        assert_matches!(
            validate_diagram(r#"<bpmn a="&nope;"/>"#),
            Err(DiagramError::MalformedXml { .. })
        );
        assert_eq!(validate_diagram(r#"<bpmn a="x &amp; y &#60;"/>"#), Ok(()));
    }

    #[test]
    fn test_malformed_raw_lt_in_attribute() {
        assert_matches!(
            validate_diagram(r#"<bpmn a="<"/>"#),
            Err(DiagramError::MalformedXml { .. })
        );
    }

    #[test]
    fn test_malformed_control_character() {
        assert_matches!(
            validate_diagram("<bpmn>\u{1}</bpmn>"),
            Err(DiagramError::MalformedXml { detail }) if detail.contains("U+0001")
        );
        assert_matches!(
            validate_diagram("<bpmn a=\"\u{1F}\"/>"),
            Err(DiagramError::MalformedXml { .. })
        );
        assert_eq!(validate_diagram("<bpmn>\t\r\n\u{E9}\u{1F600}</bpmn>"), Ok(()));
    }

    #[test]
    fn test_malformed_late_declaration() {
        assert_matches!(
            validate_diagram("<bpmn><?xml version='1.0'?></bpmn>"),
            Err(DiagramError::MalformedXml { .. })
        );
        assert_matches!(
            check_well_formed(" <?xml version='1.0'?><bpmn/>"),
            Err(DiagramError::MalformedXml { .. })
        );
        assert_eq!(check_well_formed("<?xml version='1.0'?>\n<bpmn/>"), Ok(()));
    }

    #[test]
    fn test_other_processing_instructions_allowed() {
        assert_eq!(
            validate_diagram("<bpmn><?editor hint=\"x\"?></bpmn>"),
            Ok(())
        );
    }

    #[test]
    fn test_malformed_name_start() {
        assert_matches!(
            check_well_formed("<1bpmn></1bpmn>"),
            Err(DiagramError::MalformedXml { detail }) if detail.contains("1bpmn")
        );
        assert_matches!(
            check_well_formed(r#"<bpmn -a="1"/>"#),
            Err(DiagramError::MalformedXml { .. })
        );
        assert_eq!(check_well_formed("<_b.p-m\u{B7}n2/>"), Ok(()));
    }

    #[test]
    fn test_malformed_cdata_end_in_text() {
        assert_matches!(
            check_well_formed("<bpmn>]]></bpmn>"),
            Err(DiagramError::MalformedXml { .. })
        );
        assert_eq!(check_well_formed("<bpmn><![CDATA[a]b]]></bpmn>"), Ok(()));
    }

    #[test]
    fn test_prefixes_need_no_namespace_binding() {
        assert_eq!(
            check_well_formed(r#"<bpmn:definitions bpmndi:x="1"><bpmn:process/></bpmn:definitions>"#),
            Ok(())
        );
    }

    #[test]
    fn test_self_closing_root() {
        assert_eq!(validate_diagram("<definitions/>"), Ok(()));
    }
}
