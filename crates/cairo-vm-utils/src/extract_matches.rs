/// Macro to try to evaluate an expression as a pattern and extract its fields.
/// # Examples:
/// ```
/// use cairo_vm_utils::try_extract_matches;
///
/// #[derive(Debug)]
/// enum Operand {
///     Cell(i16),
///     Constant(u64),
/// }
/// let operand = Operand::Cell(-3);
/// assert_eq!(try_extract_matches!(operand, Operand::Cell), Some(-3));
/// assert_eq!(try_extract_matches!(Operand::Constant(7), Operand::Cell), None);
/// ```
#[macro_export]
macro_rules! try_extract_matches {
    ($e:expr, $variant:path) => {
        if let $variant(x) = $e { Some(x) } else { None }
    };
}
