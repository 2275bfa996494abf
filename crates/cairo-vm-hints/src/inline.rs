//! Operand literals in assembly notation: `cell!([fp - 3])`, `operand!([[ap + 1] + 2])`,
//! `operand!([ap] * 3)`.

/// Builds a [`CellRef`](crate::operand::CellRef) from `[reg]`, `[reg + k]` or `[reg - k]`.
#[macro_export]
macro_rules! cell {
    (@register ap) => {
        $crate::operand::Register::AP
    };
    (@register fp) => {
        $crate::operand::Register::FP
    };
    ([$register:ident]) => {
        $crate::operand::CellRef::new($crate::cell!(@register $register), 0)
    };
    ([$register:ident + $offset:expr]) => {
        $crate::operand::CellRef::new($crate::cell!(@register $register), $offset)
    };
    ([$register:ident - $offset:expr]) => {
        $crate::operand::CellRef::new($crate::cell!(@register $register), -($offset))
    };
}

/// Builds a [`ResOperand`](crate::operand::ResOperand). Anything that is not a cell literal is
/// taken as an immediate.
#[macro_export]
macro_rules! operand {
    (@rhs [$($cell:tt)+]) => {
        $crate::operand::BinOpRhs::Cell($crate::cell!([$($cell)+]))
    };
    (@rhs $value:expr) => {
        $crate::operand::BinOpRhs::immediate($value)
    };
    ([[$($cell:tt)+]]) => {
        $crate::operand::ResOperand::DoubleDeref($crate::cell!([$($cell)+]), 0)
    };
    ([[$($cell:tt)+] + $extra:expr]) => {
        $crate::operand::ResOperand::DoubleDeref($crate::cell!([$($cell)+]), $extra)
    };
    ([[$($cell:tt)+] - $extra:expr]) => {
        $crate::operand::ResOperand::DoubleDeref($crate::cell!([$($cell)+]), -($extra))
    };
    ([$($a:tt)+] + $($b:tt)+) => {
        $crate::operand::ResOperand::bin_op(
            $crate::operand::Operation::Add,
            $crate::cell!([$($a)+]),
            $crate::operand!(@rhs $($b)+),
        )
    };
    ([$($a:tt)+] * $($b:tt)+) => {
        $crate::operand::ResOperand::bin_op(
            $crate::operand::Operation::Mul,
            $crate::cell!([$($a)+]),
            $crate::operand!(@rhs $($b)+),
        )
    };
    ([$($cell:tt)+]) => {
        $crate::operand::ResOperand::Deref($crate::cell!([$($cell)+]))
    };
    ($value:expr) => {
        $crate::operand::ResOperand::immediate($value)
    };
}
