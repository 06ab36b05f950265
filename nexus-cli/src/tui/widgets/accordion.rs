use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccordionError {
    #[error("unknown accordion item id")]
    UnknownItem,
}

/// Single-open expand/collapse state for a fixed list of item ids
/// (news accordion).
///
/// At most one id is expanded at any time. Toggling the expanded id
/// collapses it; toggling another id replaces the expansion in one
/// transition, so the view never observes two open panels or a
/// close-then-open intermediate state.
///
/// Callers that want independently toggling panels should keep one bool
/// per panel instead of using this model.
#[derive(Debug, Clone)]
pub struct AccordionState<K> {
    ids: Vec<K>,
    expanded: Option<K>,
}

impl<K: PartialEq + Clone> AccordionState<K> {
    /// Create with all panels collapsed
    pub fn new(ids: Vec<K>) -> Self {
        Self {
            ids,
            expanded: None,
        }
    }

    /// Toggle one panel. Returns the id now expanded, if any.
    pub fn toggle(&mut self, id: &K) -> Result<Option<&K>, AccordionError> {
        if !self.ids.contains(id) {
            return Err(AccordionError::UnknownItem);
        }
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.clone());
        }
        Ok(self.expanded.as_ref())
    }

    pub fn is_expanded(&self, id: &K) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&K> {
        self.expanded.as_ref()
    }

    pub fn ids(&self) -> &[K] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accordion() -> AccordionState<u32> {
        AccordionState::new(vec![1, 2, 3, 4])
    }

    #[test]
    fn test_toggle_expands_and_collapses() {
        let mut a = accordion();
        assert_eq!(a.toggle(&2).unwrap(), Some(&2));
        assert!(a.is_expanded(&2));
        assert_eq!(a.toggle(&2).unwrap(), None);
        assert!(!a.is_expanded(&2));
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        for id in [1u32, 2, 3, 4] {
            let mut a = accordion();
            a.toggle(&id).unwrap();
            a.toggle(&id).unwrap();
            assert_eq!(a.expanded(), None);
        }
    }

    #[test]
    fn test_switch_is_atomic() {
        let mut a = accordion();
        a.toggle(&2).unwrap();
        let now = a.toggle(&1).unwrap();
        // One transition: 1 is open, 2 closed, nothing else observed
        assert_eq!(now, Some(&1));
        assert!(a.is_expanded(&1));
        assert!(!a.is_expanded(&2));
    }

    #[test]
    fn test_at_most_one_expanded() {
        let mut a = accordion();
        for id in [1u32, 3, 2, 2, 4, 1, 1, 3] {
            a.toggle(&id).unwrap();
            let open = a.ids().iter().filter(|id| a.is_expanded(id)).count();
            assert!(open <= 1);
        }
    }

    #[test]
    fn test_unknown_item() {
        let mut a = accordion();
        a.toggle(&2).unwrap();
        assert_eq!(a.toggle(&99).unwrap_err(), AccordionError::UnknownItem);
        // Failed toggle leaves the expansion untouched
        assert!(a.is_expanded(&2));
    }
}
