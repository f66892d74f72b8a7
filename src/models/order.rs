/// Direction in which a record's snapshots are listed
///
/// Newest-first is the default whenever no order is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}
