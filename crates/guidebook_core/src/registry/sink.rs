//! Registration sink contract.

use crate::model::guide::GuideDocument;
use crate::registry::RegistryResult;

/// External collaborator that receives guide documents.
///
/// The sink is always an injected dependency; no ambient global registry
/// exists in this crate. Hosts own registered documents after the call
/// returns. Implementations must store `document.content` verbatim.
pub trait GuideSink {
    /// Accepts one guide document for later retrieval by the host.
    fn register(&mut self, document: &GuideDocument) -> RegistryResult<()>;
}
