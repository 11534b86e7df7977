//! Envelope parsing
//!
//! The request body is read once into a small namespace-resolved element
//! tree. Operation extraction then works on the tree instead of on the raw
//! event stream.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

use super::SoapError;

/// Namespace of the SOAP 1.1 envelope
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Deepest element nesting accepted in a request, the same bound libxml2 uses.
/// Tree traversal and drop recurse, so this also bounds stack use.
pub const MAX_DEPTH: usize = 256;

/// One parsed element: resolved namespace, local name, leading text and
/// child elements in document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub namespace: Option<String>,
    pub local_name: String,
    /// Character data before the first child element
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// First direct child with the given local name, whatever its namespace
    pub fn child(&self, local_name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.local_name == local_name)
    }

    /// First descendant (self excluded, document order) with the given
    /// namespace and local name
    pub fn find_descendant(&self, namespace: &str, local_name: &str) -> Option<&XmlElement> {
        self.children.iter().find_map(|c| {
            if c.namespace.as_deref() == Some(namespace) && c.local_name == local_name {
                Some(c)
            } else {
                c.find_descendant(namespace, local_name)
            }
        })
    }
}

/// A parsed request envelope
#[derive(Debug)]
pub struct Envelope {
    root: XmlElement,
}

impl Envelope {
    pub fn parse(body: &[u8]) -> Result<Self, SoapError> {
        let xml = std::str::from_utf8(body)?;
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);

        Ok(Self {
            root: parse_document(xml)?,
        })
    }

    /// The `Body` element in the envelope namespace
    pub fn body(&self) -> Result<&XmlElement, SoapError> {
        self.root
            .find_descendant(SOAP_ENV_NS, "Body")
            .ok_or(SoapError::MissingBody)
    }

    /// The operation element: the first child element of `Body`
    pub fn operation(&self) -> Result<&XmlElement, SoapError> {
        self.body()?
            .children
            .first()
            .ok_or(SoapError::MissingOperation)
    }
}

/// Parse a complete document into its root element
pub fn parse_document(xml: &str) -> Result<XmlElement, SoapError> {
    let mut reader = NsReader::from_str(xml);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_resolved_event()? {
            (ns, Event::Start(e)) => {
                check_single_root(&stack, &root, &e)?;
                check_depth(&stack)?;
                stack.push(open_element(ns, &e)?);
            }
            (ns, Event::Empty(e)) => {
                check_single_root(&stack, &root, &e)?;
                check_depth(&stack)?;
                let element = open_element(ns, &e)?;
                close_element(element, &mut stack, &mut root);
            }
            (_, Event::End(e)) => {
                let element = stack.pop().ok_or_else(|| {
                    SoapError::UnexpectedEndTag(String::from_utf8_lossy(e.name().as_ref()).into())
                })?;
                close_element(element, &mut stack, &mut root);
            }
            (_, Event::Text(e)) => {
                let text = e.unescape()?;
                append_text(&mut stack, &text)?;
            }
            (_, Event::CData(e)) => {
                let text = std::str::from_utf8(&e)?;
                append_text(&mut stack, text)?;
            }
            (_, Event::Eof) => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(SoapError::UnclosedElement(open.local_name));
    }

    root.ok_or(SoapError::NoRootElement)
}

fn check_single_root(
    stack: &[XmlElement],
    root: &Option<XmlElement>,
    start: &BytesStart<'_>,
) -> Result<(), SoapError> {
    if stack.is_empty() && root.is_some() {
        return Err(SoapError::MultipleRootElements(
            String::from_utf8_lossy(start.name().as_ref()).into(),
        ));
    }
    Ok(())
}

fn check_depth(stack: &[XmlElement]) -> Result<(), SoapError> {
    if stack.len() >= MAX_DEPTH {
        return Err(SoapError::TooDeeplyNested(MAX_DEPTH));
    }
    Ok(())
}

fn open_element(ns: ResolveResult<'_>, start: &BytesStart<'_>) -> Result<XmlElement, SoapError> {
    let namespace = match ns {
        ResolveResult::Bound(ns) => Some(std::str::from_utf8(ns.as_ref())?.to_string()),
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            return Err(SoapError::UnboundPrefix(
                String::from_utf8_lossy(&prefix).into(),
            ));
        }
    };

    Ok(XmlElement {
        namespace,
        local_name: std::str::from_utf8(start.local_name().as_ref())?.to_string(),
        ..Default::default()
    })
}

fn close_element(element: XmlElement, stack: &mut [XmlElement], root: &mut Option<XmlElement>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn append_text(stack: &mut [XmlElement], text: &str) -> Result<(), SoapError> {
    match stack.last_mut() {
        // Only text ahead of the first child counts as the element's text
        Some(current) if current.children.is_empty() => current.text.push_str(text),
        Some(_) => {}
        None if text.trim().is_empty() => {}
        None => return Err(SoapError::TextOutsideRoot),
    }
    Ok(())
}
