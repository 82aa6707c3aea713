//! Running score tracked by the engine.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub snowmen_killed: u32,
    pub snowmen_spawned: u32,
    pub bullets_fired: u32,
}
