//! Strict structural decode of JSON and XML into the shared value tree.

use intake_model::Value;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

/// Internal decode failure. Detection swallows these and falls through
/// to the next format candidate; they never reach callers of
/// `detect_format` or `detect_and_parse`.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed xml: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed xml attribute: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),
    #[error("unbalanced xml document")]
    UnbalancedXml,
}

/// Parse JSON text, keeping object member order.
pub fn decode_json(text: &str) -> Result<Value, DecodeError> {
    let raw: serde_json::Value = serde_json::from_str(text)?;
    Ok(json_value(raw))
}

fn json_value(raw: serde_json::Value) -> Value {
    match raw {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(flag) => Value::Bool(flag),
        serde_json::Value::Number(number) => Value::Number(number.as_f64().unwrap_or_default()),
        serde_json::Value::String(text) => Value::Text(text),
        serde_json::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(json_value).collect())
        }
        serde_json::Value::Object(members) => Value::Mapping(
            members
                .into_iter()
                .map(|(key, value)| (key, json_value(value)))
                .collect(),
        ),
    }
}

/// Parse XML text into a value tree.
///
/// Element attributes land under an `"@attributes"` mapping, trimmed
/// character data under `"text"`, and repeated child element names
/// collapse into a sequence in document order. The root element is
/// wrapped as a single-entry mapping keyed by its tag.
pub fn decode_xml(text: &str) -> Result<Value, DecodeError> {
    let mut reader = Reader::from_str(text);
    let config = reader.config_mut();
    config.trim_text_start = true;
    config.trim_text_end = true;

    // Open-element frames; children fold into their parent on End.
    let mut stack: Vec<(String, Vec<(String, Value)>)> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let tag = element_name(&start);
                let entries = attribute_entries(&start)?;
                stack.push((tag, entries));
            }
            Event::Empty(start) => {
                let tag = element_name(&start);
                let entries = attribute_entries(&start)?;
                attach_child(&mut stack, &mut root, tag, Value::Mapping(entries))?;
            }
            Event::Text(chunk) => {
                let decoded = chunk.decode().map_err(quick_xml::Error::from)?;
                let content =
                    quick_xml::escape::unescape(&decoded).map_err(quick_xml::Error::from)?;
                let trimmed = content.trim();
                if !trimmed.is_empty()
                    && let Some((_, entries)) = stack.last_mut()
                {
                    entries.push(("text".to_string(), Value::Text(trimmed.to_string())));
                }
            }
            Event::CData(chunk) => {
                let content = String::from_utf8_lossy(&chunk.into_inner()).into_owned();
                let trimmed = content.trim();
                if !trimmed.is_empty()
                    && let Some((_, entries)) = stack.last_mut()
                {
                    entries.push(("text".to_string(), Value::Text(trimmed.to_string())));
                }
            }
            Event::End(_) => {
                let (tag, entries) = stack.pop().ok_or(DecodeError::UnbalancedXml)?;
                attach_child(&mut stack, &mut root, tag, Value::Mapping(entries))?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(DecodeError::UnbalancedXml);
    }
    let (tag, value) = root.ok_or(DecodeError::UnbalancedXml)?;
    Ok(Value::Mapping(vec![(tag, value)]))
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn attribute_entries(start: &BytesStart<'_>) -> Result<Vec<(String, Value)>, DecodeError> {
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(quick_xml::Error::from)?
            .into_owned();
        attributes.push((key, Value::Text(value)));
    }
    if attributes.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(vec![("@attributes".to_string(), Value::Mapping(attributes))])
    }
}

fn attach_child(
    stack: &mut [(String, Vec<(String, Value)>)],
    root: &mut Option<(String, Value)>,
    tag: String,
    value: Value,
) -> Result<(), DecodeError> {
    if let Some((_, entries)) = stack.last_mut() {
        push_child(entries, tag, value);
        return Ok(());
    }
    if root.is_some() {
        // A second top-level element is not a well-formed document.
        return Err(DecodeError::UnbalancedXml);
    }
    *root = Some((tag, value));
    Ok(())
}

/// Repeated child names collapse into a sequence, original order kept.
fn push_child(entries: &mut Vec<(String, Value)>, tag: String, value: Value) {
    if let Some((_, existing)) = entries.iter_mut().find(|(name, _)| *name == tag) {
        match existing {
            Value::Sequence(items) => items.push(value),
            single => {
                let prior = std::mem::replace(single, Value::Null);
                *single = Value::Sequence(vec![prior, value]);
            }
        }
    } else {
        entries.push((tag, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_objects_keep_member_order() {
        let value = decode_json(r#"{"z": 1, "a": "x"}"#).expect("valid json");
        let Value::Mapping(entries) = value else {
            panic!("expected mapping");
        };
        let keys: Vec<&str> = entries.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn xml_attributes_and_text_take_reserved_keys() {
        let value = decode_xml(r#"<person email="a@b.com">John Doe</person>"#).expect("valid xml");
        let person = value.get("person").expect("root tag");
        let attributes = person.get("@attributes").expect("attributes");
        assert_eq!(
            attributes.get("email"),
            Some(&Value::Text("a@b.com".to_string()))
        );
        assert_eq!(
            person.get("text"),
            Some(&Value::Text("John Doe".to_string()))
        );
    }

    #[test]
    fn repeated_children_collapse_into_a_sequence() {
        let value = decode_xml("<list><item>a</item><item>b</item></list>").expect("valid xml");
        let items = value
            .get("list")
            .and_then(|list| list.get("item"))
            .expect("items");
        let Value::Sequence(children) = items else {
            panic!("expected sequence");
        };
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn mismatched_tags_are_rejected() {
        assert!(decode_xml("<a><b></a></b>").is_err());
        assert!(decode_xml("<a>").is_err());
        assert!(decode_json("{not json}").is_err());
    }
}
