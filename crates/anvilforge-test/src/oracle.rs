//! Brute-force oracle for the traversal search.
//!
//! Breadth-first search over remaining displacements, using the same move
//! rule as the traversal search: a technique may be applied only if it does
//! not increase the distance to zero. Placeholders add no moves of their own
//! since every technique they resolve to is already a candidate.

use std::collections::{HashMap, VecDeque};

use anvilforge_core::Technique;

/// Returns the length of the shortest sequence covering `displacement`, or
/// `None` if no sequence that never moves away from zero does.
///
/// # Example
///
/// ```
/// use anvilforge_test::oracle::shortest_path_length;
///
/// assert_eq!(shortest_path_length(0), Some(0));
/// assert_eq!(shortest_path_length(66), Some(5));
/// assert_eq!(shortest_path_length(1), None);
/// ```
pub fn shortest_path_length(displacement: i32) -> Option<usize> {
    let mut distance = HashMap::from([(displacement, 0usize)]);
    let mut queue = VecDeque::from([displacement]);

    while let Some(remaining) = queue.pop_front() {
        let steps = distance[&remaining];
        if remaining == 0 {
            return Some(steps);
        }
        for technique in Technique::ALL {
            let next = remaining - technique.effect();
            if next.abs() <= remaining.abs() && !distance.contains_key(&next) {
                distance.insert(next, steps + 1);
                queue.push_back(next);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_unreachable() {
        let unreachable: Vec<i32> = (0..150).filter(|&d| shortest_path_length(d).is_none()).collect();
        assert_eq!(unreachable, vec![1, 3, 5]);
    }

    #[test]
    fn test_reachable_small() {
        let lengths: Vec<Option<usize>> = (0..8).map(shortest_path_length).collect();
        assert_eq!(
            lengths,
            vec![Some(0), None, Some(1), None, Some(2), None, Some(3), Some(1)]
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(shortest_path_length(-3), Some(1));
        assert_eq!(shortest_path_length(-12), Some(2));
        assert_eq!(shortest_path_length(-1), None);
    }
}
