//! Mutually exclusive sibling panels.
//!
//! A group behaves like a set of `<details>` elements where opening one closes
//! the rest. At most one panel is open once a transition settles.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionPanel<K> {
    pub key: K,
    pub is_open: bool,
}

#[derive(Debug, Clone)]
pub struct AccordionGroup<K> {
    panels: Vec<AccordionPanel<K>>,
}

impl<K: Copy + PartialEq + std::fmt::Debug> AccordionGroup<K> {
    /// Build a group with every panel closed.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            panels: keys
                .into_iter()
                .map(|key| AccordionPanel {
                    key,
                    is_open: false,
                })
                .collect(),
        }
    }

    pub fn with_open(mut self, key: K) -> Self {
        self.set_open(key, true);
        self
    }

    /// Apply an open-state change for one panel. Opening a panel closes all of
    /// its siblings; closing never opens anything else.
    pub fn set_open(&mut self, key: K, open: bool) {
        let Some(idx) = self.panels.iter().position(|panel| panel.key == key) else {
            debug!(?key, "Ignoring toggle for unknown accordion panel");
            return;
        };
        self.panels[idx].is_open = open;
        if open {
            for (other_idx, panel) in self.panels.iter_mut().enumerate() {
                if other_idx != idx {
                    panel.is_open = false;
                }
            }
        }
        debug!(?key, open, "Accordion panel toggled");
    }

    /// Flip a panel, as a click on its summary would.
    pub fn toggle(&mut self, key: K) {
        let open = !self.is_open(key);
        self.set_open(key, open);
    }

    pub fn is_open(&self, key: K) -> bool {
        self.panels
            .iter()
            .any(|panel| panel.key == key && panel.is_open)
    }

    pub fn open_panel(&self) -> Option<K> {
        self.panels
            .iter()
            .find(|panel| panel.is_open)
            .map(|panel| panel.key)
    }

    pub fn panels(&self) -> &[AccordionPanel<K>] {
        &self.panels
    }
}

#[cfg(test)]
mod tests {
    use super::AccordionGroup;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tab {
        A,
        B,
        C,
    }

    fn open_count(group: &AccordionGroup<Tab>) -> usize {
        group.panels().iter().filter(|panel| panel.is_open).count()
    }

    #[test]
    fn opening_b_closes_a_and_back_again() {
        let mut group = AccordionGroup::new([Tab::A, Tab::B]).with_open(Tab::A);
        group.set_open(Tab::B, true);
        assert!(!group.is_open(Tab::A));
        assert!(group.is_open(Tab::B));

        group.set_open(Tab::A, true);
        assert!(group.is_open(Tab::A));
        assert!(!group.is_open(Tab::B));
    }

    #[test]
    fn closing_leaves_every_panel_closed() {
        let mut group = AccordionGroup::new([Tab::A, Tab::B, Tab::C]).with_open(Tab::C);
        group.toggle(Tab::C);
        assert_eq!(group.open_panel(), None);
        assert_eq!(open_count(&group), 0);
    }

    #[test]
    fn any_toggle_sequence_keeps_at_most_one_open() {
        let mut group = AccordionGroup::new([Tab::A, Tab::B, Tab::C]);
        let sequence = [
            Tab::A,
            Tab::B,
            Tab::B,
            Tab::C,
            Tab::A,
            Tab::A,
            Tab::C,
            Tab::B,
        ];
        for key in sequence {
            group.toggle(key);
            assert!(open_count(&group) <= 1);
        }
        assert_eq!(group.open_panel(), Some(Tab::B));
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut group = AccordionGroup::new([Tab::A, Tab::B]).with_open(Tab::A);
        group.set_open(Tab::C, true);
        assert_eq!(group.open_panel(), Some(Tab::A));
    }
}
