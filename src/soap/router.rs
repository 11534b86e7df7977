//! The SOAP operation router
//!
//! One request/response cycle: parse the envelope, extract the operation,
//! dispatch it to the item repository and wrap the result in an envelope.
//! Errors travel on two separate channels:
//! - business errors (`DomainError`) become an `error` child of the
//!   operation's normal response element;
//! - structural errors (`SoapError`) abort the request and are rendered once,
//!   here, as a top-level `ErrorResponse`.
//!
//! Neither is a SOAP Fault, and the HTTP layer always answers 200.

use std::sync::Arc;

use super::SoapError;
use super::envelope::Envelope;
use super::operation::{Operation, OperationKind};
use super::response::{ALL_ITEMS_DELETED, ITEM_DELETED, Outcome, Payload, ResponseElement};
use crate::domain::{DomainError, ItemRepository};

/// Returned only if the response writer itself fails
const FALLBACK_ENVELOPE: &str = concat!(
    r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#,
    "<soap:Body><ErrorResponse>Internal error</ErrorResponse></soap:Body>",
    "</soap:Envelope>"
);

#[derive(Clone)]
pub struct SoapRouter {
    repo: Arc<dyn ItemRepository>,
}

impl SoapRouter {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    /// Handle one raw request body; always yields a well-formed envelope
    pub async fn handle(&self, body: &[u8]) -> String {
        let element = match self.process(body).await {
            Ok(element) => element,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected SOAP request");
                ResponseElement::Error(e.to_string())
            }
        };

        element.to_envelope().unwrap_or_else(|e| {
            tracing::error!("Failed to write SOAP response: {}", e);
            FALLBACK_ENVELOPE.to_string()
        })
    }

    /// Parse and dispatch, leaving structural errors to the caller
    pub async fn process(&self, body: &[u8]) -> Result<ResponseElement, SoapError> {
        let envelope = Envelope::parse(body)?;
        let operation = Operation::from_element(envelope.operation()?)?;
        Ok(self.dispatch(operation).await)
    }

    /// Run an extracted operation against the repository
    pub async fn dispatch(&self, operation: Operation) -> ResponseElement {
        tracing::debug!(operation = operation.name(), "Dispatching SOAP operation");

        let (kind, outcome) = match operation {
            Operation::CreateItem(item) => (
                OperationKind::CreateItem,
                outcome(self.repo.create(item).await, Payload::Item),
            ),
            Operation::GetItems => (
                OperationKind::GetItems,
                outcome(self.repo.find_all().await, Payload::Items),
            ),
            Operation::GetItem { id } => (
                OperationKind::GetItem,
                outcome(self.repo.find_by_id(id).await, Payload::Item),
            ),
            Operation::UpdateItem(item) => (
                OperationKind::UpdateItem,
                outcome(self.repo.update(item.id, item).await, Payload::Item),
            ),
            Operation::DeleteItem { id } => (
                OperationKind::DeleteItem,
                outcome(self.repo.delete(id).await, |()| {
                    Payload::Message(ITEM_DELETED)
                }),
            ),
            Operation::DeleteAllItems => (
                OperationKind::DeleteAllItems,
                outcome(self.repo.delete_all().await, |()| {
                    Payload::Message(ALL_ITEMS_DELETED)
                }),
            ),
            Operation::Unknown(tag) => {
                tracing::debug!(tag = %tag, "Unknown SOAP operation");
                return ResponseElement::unknown_operation();
            }
        };

        ResponseElement::Operation { kind, outcome }
    }
}

fn outcome<T>(result: Result<T, DomainError>, payload: impl FnOnce(T) -> Payload) -> Outcome {
    match result {
        Ok(value) => Outcome::Success(payload(value)),
        Err(e) => {
            tracing::info!(id = e.id(), "SOAP business error: {}", e);
            Outcome::BusinessError(e.to_string())
        }
    }
}
