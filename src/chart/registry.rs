//! Chart type registration
//!
//! The renderer only draws chart kinds that have been registered. Registration
//! happens once per process; later calls return the same registry.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use thiserror::Error;

use super::options::ChartKind;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("chart types have not been registered")]
    NotRegistered,

    #[error("chart kind {} is not registered", .0.as_str())]
    Unsupported(ChartKind),
}

/// Chart kinds and the renderer elements they need
#[derive(Debug, PartialEq, Eq)]
pub struct ChartRegistry {
    kinds: BTreeSet<ChartKind>,
    elements: BTreeSet<&'static str>,
}

impl ChartRegistry {
    fn standard() -> Self {
        let kinds = [ChartKind::Pie, ChartKind::Bar, ChartKind::Line]
            .into_iter()
            .collect();

        let elements = [
            "ArcElement",
            "BarElement",
            "LineElement",
            "PointElement",
            "CategoryScale",
            "LinearScale",
            "Filler",
            "Title",
            "Tooltip",
            "Legend",
        ]
        .into_iter()
        .collect();

        Self { kinds, elements }
    }

    pub fn supports(&self, kind: ChartKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Element names to pass to the renderer's register call
    pub fn elements(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.elements.iter().copied()
    }
}

static REGISTRY: OnceLock<ChartRegistry> = OnceLock::new();

/// Register the standard chart kinds. Safe to call any number of times.
pub fn init() -> &'static ChartRegistry {
    REGISTRY.get_or_init(|| {
        tracing::debug!("registering chart elements");
        ChartRegistry::standard()
    })
}

/// The registry, if [`init`] has run
pub fn get() -> Option<&'static ChartRegistry> {
    REGISTRY.get()
}

/// Check that `kind` can be drawn. Never registers anything itself.
pub fn require(
    registry: Option<&ChartRegistry>,
    kind: ChartKind,
) -> Result<&ChartRegistry, RegistryError> {
    let registry = registry.ok_or(RegistryError::NotRegistered)?;
    if !registry.supports(kind) {
        return Err(RegistryError::Unsupported(kind));
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = init();
        let second = init();

        assert!(std::ptr::eq(first, second));
        assert!(get().is_some());
    }

    #[test]
    fn test_require_refuses_before_registration() {
        assert_eq!(require(None, ChartKind::Pie), Err(RegistryError::NotRegistered));
        assert_eq!(
            RegistryError::NotRegistered.to_string(),
            "chart types have not been registered"
        );
    }

    #[test]
    fn test_require_unsupported_kind() {
        let bars_only = ChartRegistry {
            kinds: [ChartKind::Bar].into_iter().collect(),
            elements: ["BarElement"].into_iter().collect(),
        };

        assert!(require(Some(&bars_only), ChartKind::Bar).is_ok());
        assert_eq!(
            require(Some(&bars_only), ChartKind::Line),
            Err(RegistryError::Unsupported(ChartKind::Line))
        );
        assert_eq!(
            RegistryError::Unsupported(ChartKind::Line).to_string(),
            "chart kind line is not registered"
        );
        assert!(require(Some(init()), ChartKind::Line).is_ok());
    }

    #[test]
    fn test_standard_kinds() {
        let registry = init();

        assert!(registry.supports(ChartKind::Pie));
        assert!(registry.supports(ChartKind::Bar));
        assert!(registry.supports(ChartKind::Line));
        assert!(registry.elements().any(|e| e == "ArcElement"));
        assert!(registry.elements().any(|e| e == "Filler"));
    }
}
