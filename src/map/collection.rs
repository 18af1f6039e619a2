use crate::types::{Archetype, CityFeature, FeatureId};

/// Ordered set of city features produced by one load.
///
/// Feature `i` always has id `i`; the rendering surface assigns ids to the
/// same features in insertion order, so the two indices agree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityCollection {
    features: Vec<CityFeature>,
}

impl CityCollection {
    /// Build a collection, renumbering features by position.
    pub fn new(features: impl IntoIterator<Item = CityFeature>) -> Self {
        let features = features.into_iter()
            .enumerate()
            .map(|(idx, feature)| CityFeature { id: idx as FeatureId, ..feature })
            .collect();
        Self { features }
    }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    #[inline] pub fn features(&self) -> &[CityFeature] { &self.features }

    #[inline]
    pub fn get(&self, id: FeatureId) -> Option<&CityFeature> {
        self.features.get(id as usize)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &CityFeature> + '_ {
        self.features.iter()
    }

    /// Features that pass the archetype filter, in collection order.
    pub fn visible(&self, filter: Option<Archetype>) -> impl Iterator<Item = &CityFeature> + '_ {
        self.features.iter()
            .filter(move |feature| filter.is_none_or(|archetype| feature.archetype() == archetype))
    }
}

impl<'a> IntoIterator for &'a CityCollection {
    type Item = &'a CityFeature;
    type IntoIter = std::slice::Iter<'a, CityFeature>;

    fn into_iter(self) -> Self::IntoIter { self.features.iter() }
}
