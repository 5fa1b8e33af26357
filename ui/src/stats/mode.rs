//! Frequency ranking for categorical columns.

use std::collections::HashMap;
use std::hash::Hash;

/// Values with their counts, most frequent first. Equal counts keep the
/// order in which the values were first seen.
pub fn value_counts<I, T>(values: I) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match slots.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value and its count; ties go to the first value seen.
pub fn mode<I, T>(values: I) -> Option<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    value_counts(values).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_to_first_encountered() {
        let values = ["B", "A", "C", "A", "B", "A", "B"];
        assert_eq!(mode(values), Some(("B", 3)));

        let values = ["A", "B", "A", "B", "C", "A", "B"];
        assert_eq!(mode(values), Some(("A", 3)));
    }

    #[test]
    fn counts_are_ranked() {
        let counts = value_counts(["x", "y", "y", "z", "y", "x"]);
        assert_eq!(counts, vec![("y", 3), ("x", 2), ("z", 1)]);
    }

    #[test]
    fn empty_input_has_no_mode() {
        assert_eq!(mode(Vec::<&str>::new()), None);
    }
}
