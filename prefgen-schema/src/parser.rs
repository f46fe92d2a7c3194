//! XML declaration parser.
//!
//! A declaration document holds one or more `<preferences>` groups, either at
//! the root or nested inside a wrapper element:
//!
//! ```xml
//! <preferences name="UserSettings" package="com.example" defaultType="string"
//!              editor="chained" editorType="Editor">
//!     <entry name="dark_mode" type="boolean" default="false"/>
//!     <entry name="username" key="pref_username"/>
//!     <entry name="greeting"><![CDATA["hello"]]></entry>
//! </preferences>
//! ```
//!
//! Type names are kept as written; unknown types are reported during
//! resolution together with the other declaration problems.

use crate::declarations::{EntryDef, GroupDef};
use crate::error::ParseError;
use crate::types::EditorMode;
use quick_xml::Reader;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesRef, BytesStart, Event};

const GROUP_TAG: &str = "preferences";
const ENTRY_TAG: &str = "entry";

/// Parses all declaration groups from an XML document.
///
/// # Arguments
/// * `xml` - Declaration document content
///
/// # Returns
/// Groups in document order.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, a required attribute is
/// missing, or the document has no `<preferences>` element.
pub fn parse_declarations(xml: &str) -> Result<Vec<GroupDef>, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut groups = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                if std::str::from_utf8(&name_bytes)? == GROUP_TAG {
                    groups.push(parse_group(&mut reader, e)?);
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                if std::str::from_utf8(&name_bytes)? == GROUP_TAG {
                    groups.push(parse_group_attributes(e)?);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if groups.is_empty() {
        return Err(ParseError::InvalidStructure {
            message: "No preferences element found".to_string(),
        });
    }

    tracing::debug!(groups = groups.len(), "parsed declaration document");

    Ok(groups)
}

/// Parses a `<preferences>` element and its entries.
fn parse_group(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<GroupDef, ParseError> {
    let mut group = parse_group_attributes(e)?;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name == ENTRY_TAG {
                    let entry = parse_entry(reader, e)?;
                    group.add_entry(entry);
                } else {
                    skip_to_end(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                if std::str::from_utf8(&name_bytes)? == ENTRY_TAG {
                    group.add_entry(parse_entry_attributes(e)?);
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: format!("unterminated preferences element '{}'", group.name),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(group)
}

/// Parses the attributes of a `<preferences>` element.
fn parse_group_attributes(e: &BytesStart<'_>) -> Result<GroupDef, ParseError> {
    let mut name = None;
    let mut package = None;
    let mut default_type_name = None;
    let mut chained = false;
    let mut editor_type = None;
    let mut description = None;

    for attr in e.attributes().flatten() {
        let (key, value) = decode_attribute(&attr)?;

        match key.as_str() {
            "name" => name = Some(value),
            "package" => package = Some(value),
            "defaultType" => default_type_name = Some(value),
            "editor" => {
                chained = match value.to_ascii_lowercase().as_str() {
                    "immediate" => false,
                    "chained" => true,
                    _ => return Err(ParseError::invalid_attr(GROUP_TAG, "editor", value)),
                }
            }
            "editorType" => editor_type = Some(value),
            "description" => description = Some(value),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr(GROUP_TAG, "name"))?;

    let mut group = GroupDef::new(name);
    group.package = package;
    group.default_type_name = default_type_name;
    group.description = description;
    if chained {
        group.editor_mode = EditorMode::chained(
            editor_type.unwrap_or_else(|| EditorMode::DEFAULT_EDITOR_TYPE.to_string()),
        );
    }

    Ok(group)
}

/// Parses an `<entry>` element whose text content may carry the default literal.
fn parse_entry(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<EntryDef, ParseError> {
    let mut entry = parse_entry_attributes(e)?;
    let mut text = String::new();
    let mut buf = Vec::new();

    // Entity references split the content into fragments; only the joined text is trimmed.
    reader.config_mut().trim_text(false);

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => text.push_str(std::str::from_utf8(t.as_ref())?),
            Ok(Event::CData(ref c)) => text.push_str(std::str::from_utf8(c)?),
            Ok(Event::GeneralRef(ref r)) => push_reference(&mut text, r, &entry.name)?,
            Ok(Event::Start(_)) => skip_to_end(reader)?,
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    reader.config_mut().trim_text(true);

    let text = text.trim();
    if entry.default_value.is_none() && !text.is_empty() {
        entry.default_value = Some(text.to_string());
    }

    Ok(entry)
}

/// Appends the resolved value of a character or predefined entity reference.
fn push_reference(text: &mut String, r: &BytesRef<'_>, entry: &str) -> Result<(), ParseError> {
    if let Some(ch) = r.resolve_char_ref()? {
        text.push(ch);
        return Ok(());
    }

    let name = std::str::from_utf8(r)?;
    match quick_xml::escape::resolve_predefined_entity(name) {
        Some(value) => {
            text.push_str(value);
            Ok(())
        }
        None => Err(ParseError::InvalidStructure {
            message: format!("unknown entity '&{name};' in entry '{entry}'"),
        }),
    }
}

/// Parses the attributes of an `<entry>` element.
fn parse_entry_attributes(e: &BytesStart<'_>) -> Result<EntryDef, ParseError> {
    let mut name = None;
    let mut type_name = None;
    let mut default_value = None;
    let mut boolean_prefix = None;
    let mut key_override = None;
    let mut description = None;

    for attr in e.attributes().flatten() {
        let (key, value) = decode_attribute(&attr)?;

        match key.as_str() {
            "name" => name = Some(value),
            "type" => type_name = Some(value),
            "default" => default_value = Some(value),
            "booleanPrefix" => boolean_prefix = Some(value),
            "key" => key_override = Some(value),
            "description" => description = Some(value),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr(ENTRY_TAG, "name"))?;

    let mut entry = EntryDef::new(name);
    entry.type_name = type_name;
    entry.default_value = default_value;
    entry.boolean_prefix = boolean_prefix;
    entry.key = key_override;
    entry.description = description;

    Ok(entry)
}

/// Decodes an attribute into its key and unescaped value.
fn decode_attribute(attr: &Attribute<'_>) -> Result<(String, String), ParseError> {
    let key = std::str::from_utf8(attr.key.as_ref())?;
    let raw = std::str::from_utf8(&attr.value)?;
    let value = quick_xml::escape::unescape(raw)
        .map_err(|_| ParseError::invalid_attr("attribute", key, raw))?;

    Ok((key.to_string(), value.into_owned()))
}

/// Skips to the end of the current element, including nested children.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
