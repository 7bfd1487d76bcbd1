use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// DNS labels in reversed order, most significant label first.
///
/// `www.example.com` becomes `[com, example, www]`, so a zone and everything
/// beneath it share a common prefix. Empty labels (the trailing root dot,
/// stray double dots) are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DomainPath {
    labels: SmallVec<[Arc<str>; 4]>,
}

impl DomainPath {
    pub fn from_name(name: &str) -> Self {
        let labels = name
            .split('.')
            .filter(|label| !label.is_empty())
            .rev()
            .map(Arc::from)
            .collect();
        Self { labels }
    }

    pub fn labels(&self) -> &[Arc<str>] {
        &self.labels
    }

    /// Back to a dotted name, without the trailing root dot.
    pub fn to_name(&self) -> String {
        let mut name = String::new();
        for (i, label) in self.labels.iter().rev().enumerate() {
            if i > 0 {
                name.push('.');
            }
            name.push_str(label);
        }
        name
    }
}

impl Deref for DomainPath {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.labels
    }
}

impl fmt::Display for DomainPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_name())
    }
}
