//! Pretty-printed XML serialization of an [`Element`] tree.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::element::Element;
use crate::error::{OdmError, OdmResult};

/// Returns true if XML 1.0 allows `c` in text and attribute values.
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

/// Returns the first character of `value` that XML 1.0 does not allow.
pub fn find_illegal_char(value: &str) -> Option<char> {
    value.chars().find(|c| !is_xml_char(*c))
}

/// Writes `root` as a UTF-8 XML document with 2-space indentation.
///
/// # Errors
/// Returns [`OdmError::IllegalCharacter`] before writing anything if a
/// name, attribute value or text holds a character XML 1.0 forbids.
pub fn write_document<W: Write>(root: &Element, writer: W) -> OdmResult<()> {
    check_element(root)?;
    write_checked(root, writer)
}

fn write_checked<W: Write>(root: &Element, writer: W) -> OdmResult<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut xml, root)?;
    xml.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Writes `root` to `path`, creating parent directories as needed.
pub fn write_document_to_path(root: &Element, path: &Path) -> OdmResult<()> {
    check_element(root)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_checked(root, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Serializes `root` into a string.
pub fn to_xml_string(root: &Element) -> OdmResult<String> {
    let mut buffer = Vec::new();
    write_document(root, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn check_element(element: &Element) -> OdmResult<()> {
    let illegal = |location: String, value: &str| match find_illegal_char(value) {
        Some(character) => Err(OdmError::IllegalCharacter {
            location,
            character,
        }),
        None => Ok(()),
    };

    illegal(format!("element name <{}>", element.name()), element.name())?;
    for (name, value) in element.attributes() {
        illegal(format!("attribute {name} of <{}>", element.name()), value)?;
    }
    if let Some(text) = element.text_content() {
        illegal(format!("text of <{}>", element.name()), text)?;
    }
    element.children().iter().try_for_each(check_element)
}

fn write_element<W: Write>(xml: &mut Writer<W>, element: &Element) -> OdmResult<()> {
    let mut start = BytesStart::new(element.name());
    for (name, value) in element.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }

    xml.write_event(Event::Start(start))?;
    if let Some(text) = element.text_content().filter(|t| !t.is_empty()) {
        xml.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(xml, child)?;
    }
    xml.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}
