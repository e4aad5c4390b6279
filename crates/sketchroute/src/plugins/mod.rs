//! Plugin implementations for the diagram archetypes
//!
//! Each plugin pairs an archetype's signal detector with its layout builder
//! and implements the core traits for it.

use std::sync::Arc;

use crate::core::{Archetype, Detector, Diagram, LayoutBuilder};

pub mod architecture;
pub mod er;
pub mod flowchart;
pub mod mindmap;
pub mod orchestrator;
pub mod sequence;
pub mod simple;
pub mod timeline;

pub use architecture::*;
pub use er::*;
pub use flowchart::*;
pub use mindmap::*;
pub use orchestrator::*;
pub use sequence::*;
pub use simple::*;
pub use timeline::*;

/// Detector for an archetype; `None` for fallback-only archetypes
pub fn detector_for(archetype: Archetype) -> Option<Arc<dyn Detector>> {
    match archetype {
        Archetype::Flowchart => FlowchartDiagram::detector(),
        Archetype::Architecture => ArchitectureDiagram::detector(),
        Archetype::Sequence => SequenceDiagram::detector(),
        Archetype::MindMap => MindMapDiagram::detector(),
        Archetype::Timeline => TimelineDiagram::detector(),
        Archetype::EntityRelationship => ErDiagram::detector(),
        Archetype::Simple => SimpleDiagram::detector(),
    }
}

/// Layout builder for an archetype
pub fn builder_for(archetype: Archetype) -> Box<dyn LayoutBuilder> {
    match archetype {
        Archetype::Flowchart => Box::new(FlowchartDiagram::create_builder()),
        Archetype::Architecture => Box::new(ArchitectureDiagram::create_builder()),
        Archetype::Sequence => Box::new(SequenceDiagram::create_builder()),
        Archetype::MindMap => Box::new(MindMapDiagram::create_builder()),
        Archetype::Timeline => Box::new(TimelineDiagram::create_builder()),
        Archetype::EntityRelationship => Box::new(ErDiagram::create_builder()),
        Archetype::Simple => Box::new(SimpleDiagram::create_builder()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_detectable_archetype_has_a_detector() {
        for archetype in Archetype::DETECTABLE {
            let detector = detector_for(archetype).unwrap();
            assert_eq!(detector.archetype(), archetype);
        }
        assert!(detector_for(Archetype::Simple).is_none());
    }

    #[test]
    fn test_builders_match_their_archetype() {
        for archetype in Archetype::ALL {
            assert_eq!(builder_for(archetype).archetype(), archetype);
        }
    }
}
