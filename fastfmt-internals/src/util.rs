//! Internal utility types.

/// Marker type used when type-erasing argument values.
///
/// This zero-sized type serves as a placeholder for the pointee of a
/// [`RawArgument`] once the concrete argument type has been erased. Using a
/// distinct marker type (rather than `()`) makes the intent clearer in type
/// signatures and error messages.
///
/// [`RawArgument`]: crate::RawArgument
pub(crate) struct Erased;
