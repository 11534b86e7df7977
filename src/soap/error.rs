//! Structural errors of the SOAP front-end
//!
//! These never reach the client as a transport failure: the router renders
//! their message inside an `ErrorResponse` element of a normal envelope.

use std::fmt;

#[derive(Debug)]
pub enum SoapError {
    /// The body is not valid UTF-8
    Encoding(std::str::Utf8Error),
    /// The XML reader rejected the document
    Xml(quick_xml::Error),
    /// The document contains no element at all
    NoRootElement,
    /// A second top-level element follows the root
    MultipleRootElements(String),
    /// Character data outside the root element
    TextOutsideRoot,
    /// The document ended before this element was closed
    UnclosedElement(String),
    /// Elements nest deeper than the parser accepts
    TooDeeplyNested(usize),
    /// A closing tag with no matching opening tag
    UnexpectedEndTag(String),
    /// A tag uses a namespace prefix that was never declared
    UnboundPrefix(String),
    /// No `Body` element in the envelope namespace
    MissingBody,
    /// The `Body` element has no child element
    MissingOperation,
    /// A field the operation requires is absent
    MissingField {
        operation: &'static str,
        field: &'static str,
    },
    /// A required text field is present but empty
    EmptyField {
        operation: &'static str,
        field: &'static str,
    },
    /// A field that must hold an integer does not parse as one
    InvalidInteger { field: &'static str, value: String },
}

impl fmt::Display for SoapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoapError::Encoding(e) => write!(f, "Request body is not valid UTF-8: {}", e),
            SoapError::Xml(e) => write!(f, "XML parse error: {}", e),
            SoapError::NoRootElement => write!(f, "Document has no root element"),
            SoapError::MultipleRootElements(name) => {
                write!(f, "Extra content at the end of the document: <{}>", name)
            }
            SoapError::TextOutsideRoot => write!(f, "Text content outside of the root element"),
            SoapError::UnclosedElement(name) => write!(f, "Element <{}> is not closed", name),
            SoapError::TooDeeplyNested(max) => {
                write!(f, "Elements are nested deeper than {} levels", max)
            }
            SoapError::UnexpectedEndTag(name) => {
                write!(f, "Closing tag </{}> has no opening tag", name)
            }
            SoapError::UnboundPrefix(prefix) => {
                write!(f, "Namespace prefix {} is not defined", prefix)
            }
            SoapError::MissingBody => write!(f, "SOAP Body element not found"),
            SoapError::MissingOperation => write!(f, "SOAP Body contains no operation element"),
            SoapError::MissingField { operation, field } => {
                write!(f, "{} requires a <{}> element", operation, field)
            }
            SoapError::EmptyField { operation, field } => {
                write!(f, "{} requires a non-empty <{}> element", operation, field)
            }
            SoapError::InvalidInteger { field, value } => {
                write!(f, "Invalid integer in <{}>: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for SoapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SoapError::Encoding(e) => Some(e),
            SoapError::Xml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for SoapError {
    fn from(e: quick_xml::Error) -> Self {
        SoapError::Xml(e)
    }
}

impl From<std::str::Utf8Error> for SoapError {
    fn from(e: std::str::Utf8Error) -> Self {
        SoapError::Encoding(e)
    }
}
