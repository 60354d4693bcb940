//! The sub-emitter contract.

use jobxml_markup::MarkupBuilder;

use crate::error::EmitResult;

/// A component that renders exactly one subtree into a shared builder.
///
/// The builder is borrowed for the duration of the call only; emitters never
/// create a builder of their own.
///
/// # Example
///
/// ```rust
/// use jobxml_emitters::{Emit, EmitResult};
/// use jobxml_markup::MarkupBuilder;
///
/// struct Marker;
///
/// impl Emit for Marker {
///     fn emit(&self, out: &mut MarkupBuilder) -> EmitResult<()> {
///         out.empty("marker", &[])?;
///         Ok(())
///     }
/// }
///
/// let mut out = MarkupBuilder::new("  ", "\n");
/// Marker.emit(&mut out)?;
/// assert_eq!(out.finish()?, "<marker/>\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Emit {
    /// Write this component's subtree into `out`.
    ///
    /// # Errors
    /// Returns an error if required data is missing or the builder rejects
    /// an operation.
    fn emit(&self, out: &mut MarkupBuilder) -> EmitResult<()>;
}

impl<T: Emit + ?Sized> Emit for &T {
    fn emit(&self, out: &mut MarkupBuilder) -> EmitResult<()> {
        (**self).emit(out)
    }
}

/// Emit every item in order.
///
/// # Errors
/// Stops at and returns the first error.
pub fn emit_all<'a, I, T>(items: I, out: &mut MarkupBuilder) -> EmitResult<()>
where
    I: IntoIterator<Item = &'a T>,
    T: Emit + 'a,
{
    for item in items {
        item.emit(out)?;
    }
    Ok(())
}
