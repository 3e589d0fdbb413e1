use std::collections::HashMap;
use std::sync::Arc;

use crate::{Grammar, LangError, LanguageId};

/// Memoizes one grammar per language for the lifetime of the cache.
///
/// The language set is closed, so the cache is bounded by its size and never
/// evicts.
#[derive(Debug, Default)]
pub struct GrammarCache {
    grammars: HashMap<LanguageId, Arc<Grammar>>,
}

impl GrammarCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, id: LanguageId) -> Result<Arc<Grammar>, LangError> {
        if let Some(grammar) = self.grammars.get(&id) {
            return Ok(Arc::clone(grammar));
        }

        let grammar = Arc::new(Grammar::load(id)?);
        tracing::debug!(language = %id, "loaded grammar");
        self.grammars.insert(id, Arc::clone(&grammar));
        Ok(grammar)
    }

    /// Resolves an editor id first; unknown ids fail before any load.
    pub fn get_by_name(&mut self, name: &str) -> Result<Arc<Grammar>, LangError> {
        let id = LanguageId::from_editor_id(name)
            .ok_or_else(|| LangError::Unsupported(name.to_owned()))?;
        self.get(id)
    }

    pub fn is_loaded(&self, id: LanguageId) -> bool {
        self.grammars.contains_key(&id)
    }

    /// Resident grammars in enumeration order.
    pub fn loaded(&self) -> Vec<LanguageId> {
        LanguageId::ALL
            .iter()
            .copied()
            .filter(|id| self.is_loaded(*id))
            .collect()
    }
}
