//! Response elements and envelope serialization
//!
//! Text content always goes through `BytesText`, which escapes markup
//! characters, so item fields cannot inject elements into the response.

use quick_xml::Writer;
use quick_xml::events::BytesText;

use super::envelope::SOAP_ENV_NS;
use super::operation::OperationKind;
use crate::models::Item;

pub const ITEM_DELETED: &str = "Item deleted";
pub const ALL_ITEMS_DELETED: &str = "All items deleted";
pub const UNKNOWN_OPERATION: &str = "Unknown operation";

/// What a successful operation returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Item(Item),
    Items(Vec<Item>),
    Message(&'static str),
}

/// Result of dispatching one operation against the store
///
/// Business failures are data here: they are rendered inside the same
/// response element a success would use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(Payload),
    BusinessError(String),
}

/// The single element placed inside `soap:Body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseElement {
    /// `<{Op}Response>` carrying either the payload or an `error` child
    Operation { kind: OperationKind, outcome: Outcome },
    /// Top-level `<ErrorResponse>` with bare text content
    Error(String),
}

impl ResponseElement {
    pub fn unknown_operation() -> Self {
        ResponseElement::Error(UNKNOWN_OPERATION.to_string())
    }

    /// Serialize wrapped in the fixed `soap:Envelope`/`soap:Body` pair
    pub fn to_envelope(&self) -> Result<String, quick_xml::Error> {
        let mut writer = Writer::new(Vec::new());

        writer
            .create_element("soap:Envelope")
            .with_attribute(("xmlns:soap", SOAP_ENV_NS))
            .write_inner_content(|w| {
                w.create_element("soap:Body")
                    .write_inner_content(|w| self.write(w))?;
                Ok::<(), quick_xml::Error>(())
            })?;

        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    fn write(&self, w: &mut Writer<Vec<u8>>) -> quick_xml::Result<()> {
        match self {
            ResponseElement::Error(message) => {
                w.create_element("ErrorResponse")
                    .write_text_content(BytesText::new(message))?;
            }
            ResponseElement::Operation { kind, outcome } => {
                w.create_element(kind.response_tag())
                    .write_inner_content(|w| write_outcome(w, outcome))?;
            }
        }
        Ok(())
    }
}

fn write_outcome(w: &mut Writer<Vec<u8>>, outcome: &Outcome) -> quick_xml::Result<()> {
    match outcome {
        Outcome::Success(Payload::Item(item)) => write_item(w, item),
        Outcome::Success(Payload::Items(items)) => {
            for item in items {
                write_item(w, item)?;
            }
            Ok(())
        }
        Outcome::Success(Payload::Message(message)) => {
            w.create_element("message")
                .write_text_content(BytesText::new(message))?;
            Ok(())
        }
        Outcome::BusinessError(message) => {
            w.create_element("error")
                .write_text_content(BytesText::new(message))?;
            Ok(())
        }
    }
}

fn write_item(w: &mut Writer<Vec<u8>>, item: &Item) -> quick_xml::Result<()> {
    w.create_element("item").write_inner_content(|w| {
        w.create_element("id")
            .write_text_content(BytesText::new(&item.id.to_string()))?;
        w.create_element("name")
            .write_text_content(BytesText::new(&item.name))?;
        match &item.description {
            Some(description) => {
                w.create_element("description")
                    .write_text_content(BytesText::new(description))?;
            }
            None => {
                w.create_element("description").write_empty()?;
            }
        }
        Ok::<(), quick_xml::Error>(())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soap::envelope::parse_document;

    fn body_child(xml: &str) -> crate::soap::envelope::XmlElement {
        let root = parse_document(xml).unwrap();
        assert_eq!(root.local_name, "Envelope");
        assert_eq!(root.namespace.as_deref(), Some(SOAP_ENV_NS));
        let body = root.find_descendant(SOAP_ENV_NS, "Body").unwrap();
        assert_eq!(body.children.len(), 1);
        body.children[0].clone()
    }

    #[test]
    fn test_item_response_shape() {
        let xml = ResponseElement::Operation {
            kind: OperationKind::GetItem,
            outcome: Outcome::Success(Payload::Item(Item::new(1, "Laptop", Some("Fast")))),
        }
        .to_envelope()
        .unwrap();

        assert_eq!(
            xml,
            format!(
                r#"<soap:Envelope xmlns:soap="{}"><soap:Body><GetItemResponse><item><id>1</id><name>Laptop</name><description>Fast</description></item></GetItemResponse></soap:Body></soap:Envelope>"#,
                SOAP_ENV_NS
            )
        );
    }

    #[test]
    fn test_missing_description_is_empty_element() {
        let xml = ResponseElement::Operation {
            kind: OperationKind::CreateItem,
            outcome: Outcome::Success(Payload::Item(Item::new(9, "Cable", None))),
        }
        .to_envelope()
        .unwrap();

        assert!(xml.contains("<description/>"));
    }

    #[test]
    fn test_business_error_uses_operation_element() {
        let xml = ResponseElement::Operation {
            kind: OperationKind::DeleteItem,
            outcome: Outcome::BusinessError("Item not found".to_string()),
        }
        .to_envelope()
        .unwrap();

        let element = body_child(&xml);
        assert_eq!(element.local_name, "DeleteItemResponse");
        assert_eq!(element.child("error").unwrap().text, "Item not found");
    }

    #[test]
    fn test_text_content_is_escaped() {
        let item = Item::new(1, "<b>Fish & Chips</b>", Some("a < b"));
        let xml = ResponseElement::Operation {
            kind: OperationKind::GetItems,
            outcome: Outcome::Success(Payload::Items(vec![item])),
        }
        .to_envelope()
        .unwrap();

        assert!(!xml.contains("<b>"));
        let element = body_child(&xml);
        let item = element.child("item").unwrap();
        assert_eq!(item.child("name").unwrap().text, "<b>Fish & Chips</b>");
        assert_eq!(item.child("description").unwrap().text, "a < b");
    }

    #[test]
    fn test_error_response_is_top_level() {
        let xml = ResponseElement::unknown_operation().to_envelope().unwrap();
        let element = body_child(&xml);
        assert_eq!(element.local_name, "ErrorResponse");
        assert_eq!(element.text, "Unknown operation");
        assert!(element.children.is_empty());
    }
}
