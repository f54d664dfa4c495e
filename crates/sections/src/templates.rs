use crate::section::SectionKind;
use log::warn;
use std::collections::HashMap;
use tabfeed_types::TemplateId;

/// Maps display template reuse identifiers to the section kind that registered them.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<TemplateId, SectionKind>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` for `kind`. Registering the same pair again is a no-op.
    ///
    /// Returns `true` only for a new identifier. An identifier already owned by a
    /// different kind keeps its first owner.
    pub fn register(&mut self, id: impl Into<TemplateId>, kind: SectionKind) -> bool {
        let id = id.into();
        match self.templates.get(&id) {
            Some(existing) if *existing == kind => false,
            Some(existing) => {
                warn!(
                    "Template '{}' is registered by {}; ignoring registration by {}",
                    id,
                    existing.as_str(),
                    kind.as_str()
                );
                false
            }
            None => {
                self.templates.insert(id, kind);
                true
            }
        }
    }

    pub fn kind_of(&self, id: &TemplateId) -> Option<SectionKind> {
        self.templates.get(id).copied()
    }

    pub fn contains(&self, id: &TemplateId) -> bool {
        self.templates.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
