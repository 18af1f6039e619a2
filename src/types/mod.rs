mod archetype;
mod feature;

pub use archetype::{Archetype, ArchetypeProfile};
pub use feature::{CityAttributes, CityFeature, FeatureId};
