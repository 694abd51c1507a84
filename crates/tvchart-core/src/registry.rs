// File: crates/tvchart-core/src/registry.rs
// Summary: Figure registry keyed by id, with a "current figure" pointer for implicit operations.

use std::collections::HashMap;
use tracing::{info, warn};

use crate::error::Result;
use crate::figure::Figure;
use crate::theme;
use crate::types::FigureId;

/// Grows monotonically; figures are never removed.
#[derive(Debug, Default)]
pub struct FigureRegistry {
    figures: HashMap<FigureId, Figure>,
    /// Registration order, used when showing figures.
    order: Vec<FigureId>,
    current: Option<FigureId>,
}

impl FigureRegistry {
    pub fn new() -> Self { Self::default() }

    /// Create a figure, register it and make it current. A missing id is generated.
    /// Re-creating an existing id replaces its contents in place.
    pub fn create_figure(&mut self, id: Option<FigureId>, title: &str, theme_name: &str) -> Result<FigureId> {
        let theme = theme::find(theme_name)?;
        let id = id.unwrap_or_else(FigureId::generate);
        let figure = Figure::new(title, theme);
        if self.figures.insert(id.clone(), figure).is_some() {
            warn!(%id, "figure re-created; previous contents discarded");
        } else {
            self.order.push(id.clone());
        }
        info!(%id, title, theme = theme.name, "created figure");
        self.current = Some(id.clone());
        Ok(id)
    }

    /// Make `id` current, creating it first when unknown.
    pub fn select_figure(&mut self, id: FigureId, title: &str, theme_name: &str) -> Result<FigureId> {
        if self.figures.contains_key(&id) {
            info!(%id, "selected figure");
            self.current = Some(id.clone());
            Ok(id)
        } else {
            self.create_figure(Some(id), title, theme_name)
        }
    }

    pub fn current_id(&self) -> Option<&FigureId> { self.current.as_ref() }

    pub fn current(&self) -> Option<&Figure> {
        self.current.as_ref().and_then(|id| self.figures.get(id))
    }

    pub fn current_mut(&mut self) -> Option<&mut Figure> {
        self.current.as_ref().and_then(|id| self.figures.get_mut(id))
    }

    pub fn get(&self, id: &FigureId) -> Option<&Figure> { self.figures.get(id) }

    pub fn get_mut(&mut self, id: &FigureId) -> Option<&mut Figure> { self.figures.get_mut(id) }

    pub fn len(&self) -> usize { self.order.len() }

    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    /// Figures in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&FigureId, &Figure)> {
        self.order.iter().filter_map(|id| self.figures.get(id).map(|f| (id, f)))
    }
}
