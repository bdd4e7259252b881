/// Custom actions for Product entities.
///
/// These actions represent domain-specific operations that can be performed
/// on a product beyond standard CRUD operations.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Soft-deletes the product: it stays retrievable by id but leaves the
    /// catalog listing.
    Deactivate,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Result from Deactivate action
    Deactivated,
}
