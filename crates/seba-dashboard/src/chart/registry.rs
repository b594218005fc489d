//! Ownership of live chart instances

use super::config::ChartConfig;
use crate::error::Result;
use std::collections::HashMap;

/// Opaque handle to a chart created by a [`ChartBackend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

/// A charting surface that can create and destroy chart instances on canvases
pub trait ChartBackend {
    /// Create a chart on `canvas_id`; fails if the canvas does not exist
    fn create_chart(&mut self, canvas_id: &str, config: &ChartConfig) -> Result<ChartHandle>;

    /// Release a chart and everything it holds
    fn destroy_chart(&mut self, handle: ChartHandle);
}

/// Live chart instances keyed by canvas id
///
/// At most one instance is live per canvas: mounting onto a canvas destroys
/// whatever was mounted there before.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    instances: HashMap<String, ChartHandle>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroy the canvas' previous chart, then create the new one
    pub fn mount<B>(&mut self, backend: &mut B, canvas_id: &str, config: &ChartConfig) -> Result<ChartHandle>
    where
        B: ChartBackend + ?Sized,
    {
        if let Some(previous) = self.instances.remove(canvas_id) {
            tracing::debug!("Destroying chart {:?} on {}", previous, canvas_id);
            backend.destroy_chart(previous);
        }

        let handle = backend.create_chart(canvas_id, config)?;
        self.instances.insert(canvas_id.to_string(), handle);
        Ok(handle)
    }

    /// Handle of the chart currently mounted on a canvas
    pub fn get(&self, canvas_id: &str) -> Option<ChartHandle> {
        self.instances.get(canvas_id).copied()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::config::{ChartData, ChartKind, ChartOptions};
    use crate::error::DashboardError;
    use std::collections::HashSet;

    /// Backend that only tracks which handles are alive
    #[derive(Default)]
    struct CountingBackend {
        next: u64,
        live: HashSet<ChartHandle>,
        destroyed: Vec<ChartHandle>,
    }

    impl ChartBackend for CountingBackend {
        fn create_chart(&mut self, canvas_id: &str, _config: &ChartConfig) -> Result<ChartHandle> {
            if canvas_id == "missing" {
                return Err(DashboardError::Render("no canvas".to_string()));
            }
            self.next += 1;
            let handle = ChartHandle(self.next);
            self.live.insert(handle);
            Ok(handle)
        }

        fn destroy_chart(&mut self, handle: ChartHandle) {
            self.live.remove(&handle);
            self.destroyed.push(handle);
        }
    }

    fn config() -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Line,
            data: ChartData::default(),
            options: ChartOptions::default(),
        }
    }

    #[test]
    fn test_mount_destroys_previous_instance() {
        let mut backend = CountingBackend::default();
        let mut registry = ChartRegistry::new();

        let first = registry.mount(&mut backend, "rsiChart", &config()).unwrap();
        let second = registry.mount(&mut backend, "rsiChart", &config()).unwrap();

        assert_ne!(first, second);
        assert_eq!(backend.destroyed, vec![first]);
        assert_eq!(backend.live.len(), 1);
        assert_eq!(registry.get("rsiChart"), Some(second));
    }

    #[test]
    fn test_one_instance_per_canvas() {
        let mut backend = CountingBackend::default();
        let mut registry = ChartRegistry::new();

        for _ in 0..3 {
            for canvas in ["stockChart", "rsiChart", "macdChart"] {
                registry.mount(&mut backend, canvas, &config()).unwrap();
            }
        }

        assert_eq!(registry.len(), 3);
        assert_eq!(backend.live.len(), 3);
        assert_eq!(backend.destroyed.len(), 6);
    }

    #[test]
    fn test_failed_create_leaves_canvas_empty() {
        let mut backend = CountingBackend::default();
        let mut registry = ChartRegistry::new();

        registry.mount(&mut backend, "missing", &config()).unwrap_err();
        assert!(registry.is_empty());

        let handle = registry.mount(&mut backend, "stockChart", &config()).unwrap();
        assert_eq!(registry.get("stockChart"), Some(handle));
        assert_eq!(backend.live.len(), 1);
    }
}
