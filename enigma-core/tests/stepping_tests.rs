#![allow(missing_docs)]
use enigma_core::rotor::RotorStack;

/// Rotors II, I, III: II reaches its turnover entry F at offset 22, I reaches R at offset 23.
fn reference_stack() -> RotorStack {
    RotorStack::configure(&[2, 1, 3]).unwrap()
}

fn steps(stack: &mut RotorStack, count: usize) {
    for _ in 0..count {
        stack.step();
    }
}

#[test]
fn test_right_rotor_advances_every_step() {
    let mut stack = reference_stack();
    for expected in 1..=60u32 {
        stack.step();
        assert_eq!(u32::from(stack.positions()[0]), expected % 26);
    }
}

#[test]
fn test_middle_rotor_turns_once_per_revolution_of_right_rotor() {
    let mut stack = reference_stack();
    let mut middle_turns = Vec::new();
    let mut previous = stack.positions();
    for step in 1..=676 {
        stack.step();
        let current = stack.positions();
        if current[1] != previous[1] {
            middle_turns.push(step);
        }
        previous = current;
    }

    assert_eq!(middle_turns.len(), 26);
    // No coincidence at the first step: II only shows F after 22 steps.
    assert_eq!(middle_turns[0], 22);
    assert!(middle_turns.windows(2).all(|w| w[1] - w[0] == 26));
}

#[test]
fn test_known_positions_along_a_full_cycle() {
    let cases: [(usize, [u8; 3]); 8] = [
        (1, [1, 0, 0]),
        (21, [21, 0, 0]),
        (22, [22, 1, 0]),
        (48, [22, 2, 0]),
        (593, [21, 22, 0]),
        (594, [22, 23, 1]),
        (600, [2, 23, 7]),
        (620, [22, 24, 0]),
    ];
    for (count, expected) in cases {
        let mut stack = reference_stack();
        steps(&mut stack, count);
        assert_eq!(stack.positions(), expected, "after {count} steps");
    }
}

#[test]
fn test_parked_middle_rotor_keeps_driving_left_rotor() {
    let mut stack = reference_stack();
    steps(&mut stack, 594);
    for step in 595..620 {
        let left_before = stack.positions()[2];
        stack.step();
        assert_eq!(stack.positions()[1], 23, "middle rotor moved at step {step}");
        assert_eq!(stack.positions()[2], (left_before + 1) % 26);
    }
}

#[test]
fn test_stack_returns_home_after_676_steps() {
    let mut stack = reference_stack();
    steps(&mut stack, 676);
    assert_eq!(stack.positions(), vec![0, 0, 0]);
}

#[test]
fn test_single_rotor_stack_only_turns_itself() {
    let mut stack = RotorStack::configure(&[5]).unwrap();
    steps(&mut stack, 30);
    assert_eq!(stack.positions(), vec![4]);
}

#[test]
fn test_reconfiguring_discards_rotation() {
    let mut stack = reference_stack();
    steps(&mut stack, 100);
    assert_ne!(stack.positions(), vec![0, 0, 0]);
    stack = reference_stack();
    assert_eq!(stack.positions(), vec![0, 0, 0]);
}

#[test]
fn test_set_positions_validates_input() {
    let mut stack = reference_stack();
    stack.set_positions(&[3, 4, 5]).unwrap();
    assert_eq!(stack.positions(), vec![3, 4, 5]);
    assert!(stack.set_positions(&[1, 2]).is_err());
    assert!(stack.set_positions(&[1, 2, 26]).is_err());
}

#[test]
fn test_forward_and_inverse_lookups_agree() {
    let mut stack = reference_stack();
    steps(&mut stack, 37);
    for index in 0..stack.len() {
        for code in 0..26 {
            let out = stack.forward_lookup(index, code).unwrap();
            assert_eq!(stack.inverse_lookup(index, out).unwrap(), code);
        }
    }
}
