//! Reading order recovered from the section hierarchy.

use crate::model::{ElementRef, Section};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Active,
    Done,
}

/// First-visit rank of every paragraph and table reachable from a section.
#[derive(Debug, Clone, Default)]
pub struct SectionOrder {
    ranks: HashMap<ElementRef, usize>,
    order: Vec<ElementRef>,
}

impl SectionOrder {
    /// Walk the section graph depth-first, starting from every section in
    /// index order.
    ///
    /// A section on the active path is not re-entered and a finished section
    /// is not expanded again, so arbitrary (cyclic) graphs terminate.
    /// References to missing sections and malformed references are skipped.
    pub fn walk(sections: &[Section]) -> Self {
        let mut marks = vec![Mark::Unvisited; sections.len()];
        let mut walk = SectionOrder::default();

        for root in 0..sections.len() {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::Active;
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

            while let Some(&(section, pos)) = stack.last() {
                let Some(element) = sections[section].elements.get(pos) else {
                    marks[section] = Mark::Done;
                    stack.pop();
                    continue;
                };
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }

                match ElementRef::parse(element) {
                    Some(ElementRef::Section(child)) => match marks.get(child) {
                        Some(Mark::Unvisited) => {
                            marks[child] = Mark::Active;
                            stack.push((child, 0));
                        }
                        Some(Mark::Active) => {
                            log::trace!("Section {} re-enters active section {}", section, child);
                        }
                        Some(Mark::Done) => {}
                        None => {
                            log::debug!(
                                "Section {} references missing section {}",
                                section,
                                child
                            );
                        }
                    },
                    Some(leaf @ (ElementRef::Paragraph(_) | ElementRef::Table(_))) => {
                        walk.push(leaf);
                    }
                    Some(ElementRef::Figure(_)) => {}
                    None => {
                        log::debug!("Section {} has malformed element {:?}", section, element);
                    }
                }
            }
        }

        walk
    }

    fn push(&mut self, element: ElementRef) {
        if !self.ranks.contains_key(&element) {
            self.ranks.insert(element, self.order.len());
            self.order.push(element);
        }
    }

    /// Rank of an element, if a section reaches it.
    pub fn rank(&self, element: ElementRef) -> Option<usize> {
        self.ranks.get(&element).copied()
    }

    /// Rank of an element given as a reference string such as `/tables/0`.
    pub fn rank_of(&self, reference: &str) -> Option<usize> {
        ElementRef::parse(reference).and_then(|r| self.rank(r))
    }

    /// Elements in rank order.
    pub fn elements(&self) -> &[ElementRef] {
        &self.order
    }

    /// Number of ranked elements.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no element was reached.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
