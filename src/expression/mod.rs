pub mod fallback;
pub mod model;
pub mod provider;

pub use model::{
    Expression,
    ExpressionFetch,
    ExpressionSource,
};
pub use provider::{
    ExpressionProvider,
    ProviderConfig,
};
