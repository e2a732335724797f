use std::fmt;

use crate::record::Sct;

/// Ordered SCTs as they appear in the extension. Order is kept as-is and
/// duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SctList {
    scts: Vec<Sct>,
}

impl SctList {
    pub fn iter(&self) -> std::slice::Iter<'_, Sct> {
        self.scts.iter()
    }

    pub fn len(&self) -> usize {
        self.scts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scts.is_empty()
    }

    pub fn into_inner(self) -> Vec<Sct> {
        self.scts
    }
}

impl From<Vec<Sct>> for SctList {
    fn from(scts: Vec<Sct>) -> Self {
        SctList { scts }
    }
}

impl FromIterator<Sct> for SctList {
    fn from_iter<I: IntoIterator<Item = Sct>>(iter: I) -> Self {
        SctList {
            scts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SctList {
    type Item = &'a Sct;
    type IntoIter = std::slice::Iter<'a, Sct>;

    fn into_iter(self) -> Self::IntoIter {
        self.scts.iter()
    }
}

impl fmt::Display for SctList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sct in &self.scts {
            write!(f, "{sct}")?;
        }
        Ok(())
    }
}
