use std::collections::BTreeSet;

pub const ACTIVE_CLASS: &str = "active";

/// Open/closed state of every entry in a FAQ list. Entries toggle independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: BTreeSet<usize>,
}

impl Accordion {
    /// Flips entry `index` and returns whether it is now open.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.open.remove(&index) {
            false
        } else {
            self.open.insert(index);
            true
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }
}

/// `max-height` for an answer panel. Open panels get their measured content height
/// so the CSS transition has a concrete target.
pub fn answer_max_height(open: bool, content_height: i32) -> String {
    if open {
        format!("{}px", content_height.max(0))
    } else {
        "0".to_string()
    }
}
