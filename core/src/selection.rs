use crate::model::{EcosystemTarget, SpectralIndex};

/// What the operator is currently looking at.
///
/// Both fields are tri-state toggles: picking the value that is already
/// active clears it, picking anything else replaces the previous choice.
/// Target and index never influence each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub active_target: Option<EcosystemTarget>,
    pub active_index: Option<SpectralIndex>,
}

impl SelectionState {
    pub fn toggle_target(&mut self, target: EcosystemTarget) {
        if self.active_target == Some(target) {
            self.active_target = None;
        } else {
            self.active_target = Some(target);
        }
    }

    pub fn toggle_index(&mut self, index: SpectralIndex) {
        if self.active_index == Some(index) {
            self.active_index = None;
        } else {
            self.active_index = Some(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_none() {
        let mut selection = SelectionState::default();
        selection.toggle_target(EcosystemTarget::Mangroves);
        assert_eq!(selection.active_target, Some(EcosystemTarget::Mangroves));
        selection.toggle_target(EcosystemTarget::Mangroves);
        assert_eq!(selection.active_target, None);
    }

    #[test]
    fn last_selection_wins() {
        let mut selection = SelectionState::default();
        selection.toggle_target(EcosystemTarget::CoralReefs);
        selection.toggle_target(EcosystemTarget::Seagrass);
        assert_eq!(selection.active_target, Some(EcosystemTarget::Seagrass));
    }

    #[test]
    fn clearing_the_target_empties_the_map() {
        let mut selection = SelectionState::default();
        selection.toggle_target(EcosystemTarget::Mangroves);
        selection.toggle_target(EcosystemTarget::Mangroves);
        let features =
            crate::features::generate_features(selection.active_target, &crate::model::REGIONS);
        assert!(features.is_empty());
    }

    #[test]
    fn target_and_index_are_independent() {
        let mut selection = SelectionState::default();
        selection.toggle_target(EcosystemTarget::Shoreline);
        selection.toggle_index(SpectralIndex::Ndvi);
        assert_eq!(selection.active_target, Some(EcosystemTarget::Shoreline));

        selection.toggle_index(SpectralIndex::Ndvi);
        assert_eq!(selection.active_target, Some(EcosystemTarget::Shoreline));
        assert_eq!(selection.active_index, None);

        selection.toggle_target(EcosystemTarget::Shoreline);
        selection.toggle_index(SpectralIndex::Mndwi);
        assert_eq!(selection.active_target, None);
        assert_eq!(selection.active_index, Some(SpectralIndex::Mndwi));
    }
}
