use crate::error::Result;

/// Validate structural integrity of a geometric entity.
///
/// Constructors call this before returning, so an invalid control-point
/// layout is rejected before any evaluation can run.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
