use crate::product::ProductId;

/// Why a swipe was not accepted. Callers may ignore these; the session is
/// left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeError {
    /// The catalog has no products, so there is no card to swipe.
    EmptyCatalog,
    /// A previous swipe is still settling.
    ResolutionInFlight { pending: ProductId },
    /// The swiped card is not the active product.
    StaleProduct {
        expected: ProductId,
        actual: ProductId,
    },
}

impl std::fmt::Display for SwipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeError::EmptyCatalog => write!(f, "catalog is empty"),
            SwipeError::ResolutionInFlight { pending } => {
                write!(f, "swipe on product {pending} is still settling")
            }
            SwipeError::StaleProduct { expected, actual } => {
                write!(f, "product {actual} is not active; expected {expected}")
            }
        }
    }
}

impl std::error::Error for SwipeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateId { id: ProductId },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::DuplicateId { id } => write!(f, "product id {id} appears more than once"),
        }
    }
}

impl std::error::Error for CatalogError {}
