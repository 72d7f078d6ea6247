use serde_json::json;

use crate::content::{parse_content, xml, Content, ContentType};
use crate::Error;

#[test]
fn explicit_json() {
    let content = parse_content(ContentType::Json, r#"{"a":1}"#).unwrap();
    assert_eq!(content, Content::Json(json!({"a": 1})));

    // scalars are valid json documents
    let content = parse_content(ContentType::Json, "17").unwrap();
    assert_eq!(content, Content::Json(json!(17)));
}

#[test]
fn explicit_json_rejects_malformed_bodies() {
    let err = parse_content(ContentType::Json, "{broken").unwrap_err();
    assert!(matches!(err, Error::Parse { kind: "json", .. }));

    let err = parse_content(ContentType::Json, "<a>1</a>").unwrap_err();
    assert!(matches!(err, Error::Parse { kind: "json", .. }));
}

#[test]
fn explicit_xml() {
    let content = parse_content(ContentType::Xml, "<a>1</a>").unwrap();
    assert_eq!(content, Content::Xml(json!({"a": "1"})));
}

#[test]
fn explicit_xml_rejects_malformed_bodies() {
    for body in ["not-json-not-xml", "<a><b></a>", "<a>1</a><b>2</b>", ""] {
        let err = parse_content(ContentType::Xml, body).unwrap_err();
        assert!(
            matches!(err, Error::Parse { kind: "xml", .. }),
            "expected parse error for {:?}",
            body
        );
    }
}

#[test]
fn autodetect_prefers_json() {
    let content = parse_content(ContentType::Autodetect, r#"{"a":1}"#).unwrap();
    assert_eq!(content, Content::Json(json!({"a": 1})));
}

#[test]
fn autodetect_falls_back_to_xml() {
    let content = parse_content(ContentType::Autodetect, "<a>1</a>").unwrap();
    assert_eq!(content, Content::Xml(json!({"a": "1"})));
}

#[test]
fn autodetect_never_fails() {
    let content = parse_content(ContentType::Autodetect, "not-json-not-xml").unwrap();
    assert_eq!(content, Content::Raw("not-json-not-xml".to_string()));

    let content = parse_content(ContentType::Autodetect, "").unwrap();
    assert_eq!(content, Content::Raw(String::new()));
}

#[test]
fn raw_passes_anything_through() {
    let content = parse_content(ContentType::Raw, r#"{"a":1}"#).unwrap();
    assert_eq!(content, Content::Raw(r#"{"a":1}"#.to_string()));
}

#[test]
fn content_type_names() {
    assert_eq!(ContentType::from("json"), ContentType::Json);
    assert_eq!(ContentType::from("XML"), ContentType::Xml);
    assert_eq!(ContentType::from("autodetect"), ContentType::Autodetect);
    assert_eq!(ContentType::from("raw"), ContentType::Raw);
    // unrecognized values degrade to raw passthrough
    assert_eq!(ContentType::from("yaml"), ContentType::Raw);
    assert_eq!(ContentType::default(), ContentType::Autodetect);
}

#[test]
fn xml_nested_elements() {
    let value = xml::parse("<root><name>x</name><count>2</count></root>").unwrap();
    assert_eq!(value, json!({"root": {"name": "x", "count": "2"}}));
}

#[test]
fn xml_repeated_siblings_become_arrays() {
    let value = xml::parse("<root><item>1</item><item>2</item><item>3</item></root>").unwrap();
    assert_eq!(value, json!({"root": {"item": ["1", "2", "3"]}}));
}

#[test]
fn xml_attributes_and_mixed_text() {
    let value = xml::parse(r#"<a id="7">x</a>"#).unwrap();
    assert_eq!(value, json!({"a": {"@id": "7", "#text": "x"}}));
}

#[test]
fn xml_empty_elements() {
    assert_eq!(xml::parse("<a/>").unwrap(), json!({"a": null}));
    assert_eq!(xml::parse("<a></a>").unwrap(), json!({"a": null}));
    assert_eq!(
        xml::parse(r#"<a id="1"/>"#).unwrap(),
        json!({"a": {"@id": "1"}})
    );
}

#[test]
fn xml_allows_declaration_and_comments() {
    let value = xml::parse("<?xml version=\"1.0\"?><!-- note --><a>1</a><!-- end -->").unwrap();
    assert_eq!(value, json!({"a": "1"}));
}

#[test]
fn xml_unescapes_entities() {
    let value = xml::parse("<a>1 &amp; 2</a>").unwrap();
    assert_eq!(value, json!({"a": "1 & 2"}));

    let value = xml::parse("<a>&lt;tag&gt; &#33; &#x21;</a>").unwrap();
    assert_eq!(value, json!({"a": "<tag> ! !"}));
}

#[test]
fn xml_keeps_whitespace_between_references() {
    // the reader splits text at every reference; the spacing around each
    // fragment must survive reassembly
    let value = xml::parse("<a>one &amp; two &amp; three</a>").unwrap();
    assert_eq!(value, json!({"a": "one & two & three"}));
}

#[test]
fn xml_trims_surrounding_text_whitespace() {
    let value = xml::parse("<a>  spaced  </a>").unwrap();
    assert_eq!(value, json!({"a": "spaced"}));
}

#[test]
fn xml_handles_indented_documents() {
    let value = xml::parse("\n<root>\n  <a>1</a>\n  <b>2</b>\n</root>\n").unwrap();
    assert_eq!(value, json!({"root": {"a": "1", "b": "2"}}));
}
