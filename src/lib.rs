// src/lib.rs

pub mod capabilities;
pub mod core;

pub mod engine;
pub mod preload;
pub mod utils;
pub mod vis;

use std::sync::{Once, OnceLock};

use crate::core::config::Settings;
use crate::preload::{PreloadGate, PreloadRegistry};

// Re-exports para tener una API limpia desde fuera del crate
pub use capabilities::{
    CapabilityError, CapabilityResult, Classification, ImageClassifier, ImageClassifierOptions,
    KnnClassifier, KnnClassifierOptions, KnnResult, ModelSpec,
};
pub use crate::core::tensor::{Shape, Tensor, TensorError};
pub use engine::chained::ChainedOps;
pub use engine::ops;
pub use engine::{EngineError, EngineResult};
pub use preload::PreloadHandle;
pub use utils::community_statement;

/// Crate version, surfaced as a namespace member.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Capability member names as they appear in the namespace.
pub const IMAGE_CLASSIFIER: &str = "image_classifier";
pub const KNN_CLASSIFIER: &str = "knn_classifier";

static INIT: Once = Once::new();

/// Idempotent process-wide initialization: applies the output settings and
/// fires the community statement exactly once, before the namespace is first
/// handed to a consumer. Returns whether this call performed the
/// initialization. A failing statement is logged and swallowed; it never
/// blocks capability usage.
pub fn ensure_initialized() -> bool {
    let mut ran = false;
    INIT.call_once(|| {
        ran = true;
        let settings = Settings::load();
        if !settings.output.color {
            colored::control::set_override(false);
        }
        if settings.output.quiet {
            return;
        }
        if std::panic::catch_unwind(utils::community::community_statement).is_err() {
            eprintln!("mlbox: community statement failed; continuing");
        }
    });
    ran
}

static REGISTRY: OnceLock<PreloadRegistry> = OnceLock::new();

/// Process-wide preload registry, built on first use. Every namespace value
/// shares it, so readiness marked through one namespace applies to deferrals
/// made through any other.
fn shared_registry() -> &'static PreloadRegistry {
    REGISTRY.get_or_init(|| PreloadRegistry::new(PreloadGate::new(), vec![IMAGE_CLASSIFIER]))
}

/// The assembled public surface: capability members, the version string, the
/// engine and vis handles, and the shared preload registry. Construction runs
/// [`ensure_initialized`] so the one-time statement precedes first use.
pub struct Namespace {
    preload: &'static PreloadRegistry,
}

impl Namespace {
    pub fn new() -> Self {
        ensure_initialized();
        Self {
            preload: shared_registry(),
        }
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// Capability member names.
    pub fn capabilities(&self) -> Vec<&'static str> {
        vec![IMAGE_CLASSIFIER, KNN_CLASSIFIER]
    }

    /// Every member key of the namespace: capabilities plus the version
    /// string and the engine/vis/utils handles. No collisions.
    pub fn members(&self) -> Vec<&'static str> {
        let mut members = self.capabilities();
        members.extend(["version", "engine", "vis", "utils"]);
        members
    }

    /// Capabilities whose factories may be called before readiness.
    pub fn preload(&self) -> &PreloadRegistry {
        self.preload
    }

    /// The readiness gate backing the preload registry.
    pub fn gate(&self) -> &PreloadGate {
        self.preload.gate()
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}
