//! SOAP-style XML front-end
//!
//! Requests are `soap:Envelope`/`soap:Body` documents whose single body
//! child names one of six catalog operations. See [`router`] for the
//! request cycle and its two error channels.

pub mod envelope;
pub mod error;
pub mod operation;
pub mod response;
pub mod router;

pub use envelope::{Envelope, SOAP_ENV_NS};
pub use error::SoapError;
pub use operation::{Operation, OperationKind};
pub use response::{Outcome, Payload, ResponseElement};
pub use router::SoapRouter;
