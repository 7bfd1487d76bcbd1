use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Labels captured by `:name` pattern segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(FxHashMap<Arc<str>, Arc<str>>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|v| &**v)
    }

    pub fn insert(&mut self, name: Arc<str>, value: Arc<str>) {
        self.0.insert(name, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (&**k, &**v))
    }

    /// A copy of `self` with `overlay` written on top; `overlay` wins on
    /// key collision.
    pub fn merged_with(&self, overlay: &Params) -> Params {
        let mut merged = self.clone();
        for (k, v) in &overlay.0 {
            merged.0.insert(Arc::clone(k), Arc::clone(v));
        }
        merged
    }
}

impl<K: Into<Arc<str>>, V: Into<Arc<str>>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_wins() {
        let parent: Params = [("a", "1"), ("b", "2")].into_iter().collect();
        let child: Params = [("b", "3")].into_iter().collect();

        let merged = parent.merged_with(&child);
        assert_eq!(merged.get("a"), Some("1"));
        assert_eq!(merged.get("b"), Some("3"));
        assert_eq!(parent.get("b"), Some("2"));
    }
}
