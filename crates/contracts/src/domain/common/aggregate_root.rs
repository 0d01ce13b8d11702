use super::AggregateId;

/// Root of an aggregate mirrored from the remote store.
///
/// The dashboard never owns these records: it fetches a snapshot, shows it
/// and sends create/update/delete requests back to the collection.
pub trait AggregateRoot {
    /// Type of the aggregate identifier
    type Id: AggregateId;

    /// Collection segment of the REST API (e.g. "productos")
    fn collection_name() -> &'static str;

    /// Plural UI name, used as the page title (e.g. "Products")
    fn list_name() -> &'static str;
}
