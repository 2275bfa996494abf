use cairo_vm_hints::hints::Hint;
use cairo_vm_hints::{cell, operand};
use cairo_vm_memory::{Memory, MemoryAddress, MemoryValue};
use indoc::indoc;
use pretty_assertions::assert_eq;
use starknet_types_core::felt::Felt;
use test_log::test;

use crate::{
    CoreHintProcessor, ExecutionContext, HintError, HintProcessor, HintRunnerConfig, RunnerError,
};

fn random_ec_points(seed: u64, count: i16) -> Vec<Felt> {
    let config = HintRunnerConfig { random_ec_point_seed: seed, ..Default::default() };
    let mut processor = CoreHintProcessor::new(config);
    let mut memory = Memory::with_segments(2);
    let mut ctx = ExecutionContext::new(0, 0);
    for i in 0..count {
        let hint = Hint::RandomEcPoint { x: cell!([ap + 2 * i]), y: cell!([ap + (2 * i + 1)]) };
        processor.execute_hint(&mut memory, &mut ctx, &hint).unwrap();
    }
    (0..2 * count as u64).map(|i| memory.read_felt(MemoryAddress::new(1, i)).unwrap()).collect()
}

#[test]
fn test_random_ec_point_is_seeded() {
    let points = random_ec_points(7, 2);

    assert_eq!(points, random_ec_points(7, 2));
    assert_ne!(points[0], points[2]);
    assert_ne!(points, random_ec_points(8, 2));
}

#[test]
fn test_hint_failure_names_the_hint() {
    let mut processor = CoreHintProcessor::default();
    let mut memory = Memory::with_segments(2);
    let mut ctx = ExecutionContext::new(0, 0);
    let hint = Hint::DivMod {
        lhs: operand!(1),
        rhs: operand!(0),
        quotient: cell!([ap]),
        remainder: cell!([ap + 1]),
    };

    let err = processor.execute_hint(&mut memory, &mut ctx, &hint).unwrap_err();

    assert_eq!(
        err,
        RunnerError::Hint { hint: "DivMod", source: HintError::DivisionByZero { operand: "rhs" } }
    );
    assert_eq!(err.to_string(), "Hint `DivMod` failed: Cannot divide by zero: `rhs` is 0.");
}

#[test]
fn test_eval_circuit_word_size_is_configurable() {
    // x1 + x = x2 modulo 65, with 3-bit limbs: 1 + x = 58, so x = 57 = 1 + 7 * 8.
    let mut memory = Memory::with_segments(2);
    let add_mod_builtin = memory.allocate_segment();
    let mul_mod_builtin = memory.allocate_segment();
    let cells: [(u64, MemoryValue); 14] = [
        (0, MemoryValue::from_int(1)),
        (1, MemoryValue::from_int(0)),
        (2, MemoryValue::from_int(0)),
        (3, MemoryValue::from_int(0)),
        (8, MemoryValue::from_int(2)),
        (9, MemoryValue::from_int(7)),
        (10, MemoryValue::from_int(0)),
        (11, MemoryValue::from_int(0)),
        (12, MemoryValue::from_int(0)),
        (13, MemoryValue::from_int(4)),
        (14, MemoryValue::from_int(8)),
        (15, add_mod_builtin.into()),
        (16, mul_mod_builtin.into()),
        (17, MemoryValue::from_int(0)),
    ];
    for (offset, value) in cells {
        memory.write(MemoryAddress::new(1, offset), value).unwrap();
    }
    for (offset, limb) in (0..).zip([1, 0, 1, 0]) {
        memory.write((add_mod_builtin + offset).unwrap(), MemoryValue::from_int(limb)).unwrap();
    }
    memory.write((add_mod_builtin + 4).unwrap(), MemoryAddress::new(1, 0).into()).unwrap();
    memory.write((add_mod_builtin + 5).unwrap(), MemoryAddress::new(1, 12).into()).unwrap();

    let mut processor =
        CoreHintProcessor::new(HintRunnerConfig { circuit_word_bit_len: 3, ..Default::default() });
    let mut ctx = ExecutionContext::new(0, 0);
    let hint = Hint::EvalCircuit {
        n_add_mods: operand!(1),
        add_mod_builtin: operand!([ap + 15]),
        n_mul_mods: operand!([ap + 17]),
        mul_mod_builtin: operand!([ap + 16]),
    };
    processor.execute_hint(&mut memory, &mut ctx, &hint).unwrap();

    let x: Vec<_> =
        (4..8).map(|offset| memory.read_felt(MemoryAddress::new(1, offset)).unwrap()).collect();
    assert_eq!(x, vec![Felt::ONE, Felt::from(7), Felt::ZERO, Felt::ZERO]);
}

#[test]
fn test_config_defaults() {
    let config: HintRunnerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, HintRunnerConfig::default());
    assert_eq!(config.circuit_word_bit_len, 96);

    let config: HintRunnerConfig = serde_json::from_str(indoc! {r#"
        {"random_ec_point_seed": 42}
    "#})
    .unwrap();
    assert_eq!(config.random_ec_point_seed, 42);
    assert_eq!(config.circuit_word_bit_len, 96);
}
