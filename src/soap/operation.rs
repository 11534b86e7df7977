//! Operation identification and per-operation request schemas

use super::SoapError;
use super::envelope::XmlElement;
use crate::models::Item;

/// The closed set of operations the router understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    CreateItem,
    GetItems,
    GetItem,
    UpdateItem,
    DeleteItem,
    DeleteAllItems,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::CreateItem,
        OperationKind::GetItems,
        OperationKind::GetItem,
        OperationKind::UpdateItem,
        OperationKind::DeleteItem,
        OperationKind::DeleteAllItems,
    ];

    /// Match an operation element's local name
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::CreateItem => "CreateItem",
            OperationKind::GetItems => "GetItems",
            OperationKind::GetItem => "GetItem",
            OperationKind::UpdateItem => "UpdateItem",
            OperationKind::DeleteItem => "DeleteItem",
            OperationKind::DeleteAllItems => "DeleteAllItems",
        }
    }

    /// Name of the element wrapping this operation's response
    pub fn response_tag(self) -> &'static str {
        match self {
            OperationKind::CreateItem => "CreateItemResponse",
            OperationKind::GetItems => "GetItemsResponse",
            OperationKind::GetItem => "GetItemResponse",
            OperationKind::UpdateItem => "UpdateItemResponse",
            OperationKind::DeleteItem => "DeleteItemResponse",
            OperationKind::DeleteAllItems => "DeleteAllItemsResponse",
        }
    }
}

/// A fully extracted request, ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateItem(Item),
    GetItems,
    GetItem { id: i64 },
    UpdateItem(Item),
    DeleteItem { id: i64 },
    DeleteAllItems,
    /// Any tag outside the known set; carries the local name as received
    Unknown(String),
}

impl Operation {
    /// Extract the operation and its parameters from the operation element.
    ///
    /// Missing or malformed fields are structural errors; an unrecognised tag
    /// is not an error and yields `Operation::Unknown`.
    pub fn from_element(element: &XmlElement) -> Result<Self, SoapError> {
        let Some(kind) = OperationKind::from_tag(&element.local_name) else {
            return Ok(Operation::Unknown(element.local_name.clone()));
        };

        let fields = Fields {
            operation: kind.as_str(),
            element,
        };

        Ok(match kind {
            OperationKind::CreateItem => Operation::CreateItem(fields.item()?),
            OperationKind::GetItems => Operation::GetItems,
            OperationKind::GetItem => Operation::GetItem { id: fields.id()? },
            OperationKind::UpdateItem => Operation::UpdateItem(fields.item()?),
            OperationKind::DeleteItem => Operation::DeleteItem { id: fields.id()? },
            OperationKind::DeleteAllItems => Operation::DeleteAllItems,
        })
    }

    pub fn kind(&self) -> Option<OperationKind> {
        match self {
            Operation::CreateItem(_) => Some(OperationKind::CreateItem),
            Operation::GetItems => Some(OperationKind::GetItems),
            Operation::GetItem { .. } => Some(OperationKind::GetItem),
            Operation::UpdateItem(_) => Some(OperationKind::UpdateItem),
            Operation::DeleteItem { .. } => Some(OperationKind::DeleteItem),
            Operation::DeleteAllItems => Some(OperationKind::DeleteAllItems),
            Operation::Unknown(_) => None,
        }
    }

    /// Tag name as it appeared in the request
    pub fn name(&self) -> &str {
        match self {
            Operation::Unknown(tag) => tag.as_str(),
            known => known.kind().map_or("", OperationKind::as_str),
        }
    }
}

/// Typed access to the child fields of one operation element
struct Fields<'a> {
    operation: &'static str,
    element: &'a XmlElement,
}

impl<'a> Fields<'a> {
    fn required(&self, field: &'static str) -> Result<&'a XmlElement, SoapError> {
        self.element.child(field).ok_or(SoapError::MissingField {
            operation: self.operation,
            field,
        })
    }

    fn id(&self) -> Result<i64, SoapError> {
        let text = &self.required("id")?.text;
        text.trim()
            .parse()
            .map_err(|_| SoapError::InvalidInteger {
                field: "id",
                value: text.clone(),
            })
    }

    fn name(&self) -> Result<String, SoapError> {
        let text = &self.required("name")?.text;
        if text.is_empty() {
            return Err(SoapError::EmptyField {
                operation: self.operation,
                field: "name",
            });
        }
        Ok(text.clone())
    }

    /// The element must be present; empty text reads as no description
    fn description(&self) -> Result<Option<String>, SoapError> {
        let text = &self.required("description")?.text;
        Ok((!text.is_empty()).then(|| text.clone()))
    }

    fn item(&self) -> Result<Item, SoapError> {
        Ok(Item {
            id: self.id()?,
            name: self.name()?,
            description: self.description()?,
        })
    }
}
