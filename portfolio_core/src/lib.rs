pub mod error;
pub mod model;

/// Parse a path id into a document id.
///
/// Anything that is not a UUID can never match a stored document,
/// so callers treat `None` as a lookup miss.
pub fn parse_doc_id(id: &str) -> Option<uuid::Uuid> {
    uuid::Uuid::parse_str(id).ok()
}
