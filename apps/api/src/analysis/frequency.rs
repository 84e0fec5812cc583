//! Insertion-ordered token counts. Ranking is a stable sort on count, so ties
//! always come back in first-seen order and results are deterministic.

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct FrequencyTable<'a> {
    order: Vec<&'a str>,
    counts: HashMap<&'a str, usize>,
}

impl<'a> FrequencyTable<'a> {
    pub fn count<S: AsRef<str>>(tokens: &'a [S]) -> Self {
        let mut table = Self::default();
        for token in tokens {
            let token = token.as_ref();
            let count = table.counts.entry(token).or_insert(0);
            if *count == 0 {
                table.order.push(token);
            }
            *count += 1;
        }
        table
    }

    /// Count of `token`, 0 when absent.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Distinct tokens with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.order.iter().map(move |t| (*t, self.get(t)))
    }

    /// Distinct tokens ranked by descending count.
    pub fn most_common(&self) -> Vec<(&'a str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// True for non-empty tokens made only of numeric characters.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let tokens = ["b", "a", "b", "c", "a", "b"];
        let table = FrequencyTable::count(&tokens);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("b"), 3);
        assert_eq!(table.get("a"), 2);
        assert_eq!(table.get("zzz"), 0);
        let order: Vec<_> = table.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_most_common_ties_keep_first_seen_order() {
        let tokens = ["x", "y", "z", "y", "x", "w"];
        let ranked = FrequencyTable::count(&tokens).most_common();
        assert_eq!(ranked, vec![("x", 2), ("y", 2), ("z", 1), ("w", 1)]);
    }

    #[test]
    fn test_empty_table() {
        let tokens: [&str; 0] = [];
        let table = FrequencyTable::count(&tokens);
        assert_eq!(table.len(), 0);
        assert!(table.most_common().is_empty());
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("123"));
        assert!(is_numeric("7"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("3d"));
        assert!(!is_numeric("python"));
    }
}
