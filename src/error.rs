use std::fmt;

/// The content repository operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListCategories,
    GetCategoryBySlug,
    ListProducts,
    ListProductsByCategory,
    GetProductBySlug,
    ListReviewsByProduct,
    ListAllReviews,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::ListCategories => "fetch categories",
            Operation::GetCategoryBySlug => "fetch category",
            Operation::ListProducts => "fetch products",
            Operation::ListProductsByCategory => "fetch products by category",
            Operation::GetProductBySlug => "fetch product",
            Operation::ListReviewsByProduct => "fetch reviews",
            Operation::ListAllReviews => "fetch all reviews",
        };
        f.write_str(label)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content API returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to {operation}: {source}")]
    Fetch {
        operation: Operation,
        #[source]
        source: Box<StorefrontError>,
    },

    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StorefrontError {
    /// Wrap a lower-level failure with the operation that triggered it.
    pub fn fetch(operation: Operation, source: StorefrontError) -> Self {
        StorefrontError::Fetch {
            operation,
            source: Box::new(source),
        }
    }

    /// The failed operation, if this is a fetch failure.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            StorefrontError::Fetch { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
