//! Transition Rule - next state from current state and neighbor sum
//!
//! Membership tests use the fixed tables below, not number theory:
//! 17 is never "prime" here and 32 is never a "power of two".

use super::cells::CellState;

/// Sums treated as prime
pub const PRIMES: [i32; 6] = [2, 3, 5, 7, 11, 13];

/// Sums treated as powers of two
pub const POWERS_OF_TWO: [i32; 5] = [1, 2, 4, 8, 16];

#[inline]
pub fn is_listed_prime(n: i32) -> bool {
    PRIMES.contains(&n)
}

#[inline]
pub fn is_listed_power_of_two(n: i32) -> bool {
    POWERS_OF_TWO.contains(&n)
}

/// Apply the rule table to one cell.
///
/// For each state two guards are checked in order; the first that holds wins.
/// If neither holds the state is returned unchanged.
#[inline]
pub fn next_state(state: CellState, neighbor_sum: i32) -> CellState {
    use CellState::*;

    match state {
        HealthyPositive => {
            if is_listed_power_of_two(neighbor_sum) {
                Dead
            } else if neighbor_sum < 10 {
                WeakPositive
            } else {
                state
            }
        }
        WeakPositive => {
            if neighbor_sum <= 0 {
                Dead
            } else if neighbor_sum >= 8 {
                HealthyPositive
            } else {
                state
            }
        }
        Dead => {
            if is_listed_prime(neighbor_sum) {
                WeakPositive
            } else if neighbor_sum.checked_abs().is_some_and(is_listed_prime) {
                WeakNegative
            } else {
                state
            }
        }
        WeakNegative => {
            if neighbor_sum >= 1 {
                Dead
            } else if neighbor_sum <= -8 {
                HealthyNegative
            } else {
                state
            }
        }
        HealthyNegative => {
            if neighbor_sum.checked_abs().is_some_and(is_listed_power_of_two) {
                Dead
            } else if neighbor_sum > -10 {
                WeakNegative
            } else {
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::*;

    #[test]
    fn tables_are_bounded() {
        assert!(!is_listed_prime(17));
        assert!(!is_listed_prime(0));
        assert!(!is_listed_prime(-3));
        assert!(!is_listed_power_of_two(32));
        assert!(!is_listed_power_of_two(0));
        assert!(!is_listed_power_of_two(-4));
    }

    #[test]
    fn healthy_positive() {
        assert_eq!(next_state(HealthyPositive, 4), Dead);
        assert_eq!(next_state(HealthyPositive, 16), Dead);
        assert_eq!(next_state(HealthyPositive, 3), WeakPositive);
        assert_eq!(next_state(HealthyPositive, 0), WeakPositive);
        assert_eq!(next_state(HealthyPositive, -16), WeakPositive);
        assert_eq!(next_state(HealthyPositive, 10), HealthyPositive);
        assert_eq!(next_state(HealthyPositive, 12), HealthyPositive);
    }

    #[test]
    fn weak_positive() {
        assert_eq!(next_state(WeakPositive, 0), Dead);
        assert_eq!(next_state(WeakPositive, -5), Dead);
        assert_eq!(next_state(WeakPositive, 8), HealthyPositive);
        assert_eq!(next_state(WeakPositive, 7), WeakPositive);
        assert_eq!(next_state(WeakPositive, 1), WeakPositive);
    }

    #[test]
    fn dead() {
        assert_eq!(next_state(Dead, 2), WeakPositive);
        assert_eq!(next_state(Dead, 13), WeakPositive);
        assert_eq!(next_state(Dead, -2), WeakNegative);
        assert_eq!(next_state(Dead, -13), WeakNegative);
        assert_eq!(next_state(Dead, 17), Dead);
        assert_eq!(next_state(Dead, -17), Dead);
        assert_eq!(next_state(Dead, 0), Dead);
        assert_eq!(next_state(Dead, 1), Dead);
        assert_eq!(next_state(Dead, 4), Dead);
    }

    #[test]
    fn weak_negative() {
        assert_eq!(next_state(WeakNegative, 1), Dead);
        assert_eq!(next_state(WeakNegative, -8), HealthyNegative);
        assert_eq!(next_state(WeakNegative, -16), HealthyNegative);
        assert_eq!(next_state(WeakNegative, 0), WeakNegative);
        assert_eq!(next_state(WeakNegative, -7), WeakNegative);
    }

    #[test]
    fn healthy_negative() {
        assert_eq!(next_state(HealthyNegative, -4), Dead);
        assert_eq!(next_state(HealthyNegative, 4), Dead);
        assert_eq!(next_state(HealthyNegative, -16), Dead);
        assert_eq!(next_state(HealthyNegative, 0), WeakNegative);
        assert_eq!(next_state(HealthyNegative, -9), WeakNegative);
        assert_eq!(next_state(HealthyNegative, -10), HealthyNegative);
        assert_eq!(next_state(HealthyNegative, -12), HealthyNegative);
    }

    #[test]
    fn total_over_reachable_sums() {
        // 8 neighbors of magnitude 2 bound the sum to [-16, 16]
        for state in CellState::ALL {
            for sum in -16..=16 {
                let next = next_state(state, sum);
                assert!(CellState::ALL.contains(&next));
                assert!((next.value() - state.value()).abs() <= 2);
            }
        }
    }

    #[test]
    fn total_at_i32_extremes() {
        for state in CellState::ALL {
            for sum in [i32::MIN, i32::MIN + 1, i32::MAX] {
                assert!(CellState::ALL.contains(&next_state(state, sum)));
            }
        }
        assert_eq!(next_state(Dead, i32::MIN), Dead);
        assert_eq!(next_state(HealthyNegative, i32::MIN), HealthyNegative);
        assert_eq!(next_state(HealthyPositive, i32::MAX), HealthyPositive);
        assert_eq!(next_state(WeakNegative, i32::MIN), HealthyNegative);
    }
}
