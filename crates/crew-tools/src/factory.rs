//! Factory seam between the registry and concrete tools

use crate::args::ToolArgs;
use crate::error::BoxError;
use crate::handle::ToolHandle;

/// What a factory returns. Errors are wrapped by the registry as
/// [`Error::ToolConstruction`](crate::Error::ToolConstruction).
pub type FactoryResult = std::result::Result<Box<dyn ToolHandle>, BoxError>;

/// Builds a tool handle from validated arguments.
///
/// Factories only ever see arguments of descriptors whose mandatory
/// parameters are all set.
pub trait ToolFactory: Send + Sync {
    fn build(&self, args: &ToolArgs) -> FactoryResult;
}

impl<F> ToolFactory for F
where
    F: Fn(&ToolArgs) -> FactoryResult + Send + Sync,
{
    fn build(&self, args: &ToolArgs) -> FactoryResult {
        self(args)
    }
}
