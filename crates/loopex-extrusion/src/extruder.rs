//! The loop extrusion factor and its per-step update.
//!
//! An [`Extruder`] owns two [`Leg`]s walking apart along the lattice. Each
//! call to [`translocate`](Extruder::translocate) runs four phases in a
//! fixed order:
//!
//! 1. **Unload**: with probability `1/lifetime` (`1/stalled_lifetime` if
//!    either leg is stalled) vacate both sites and reload elsewhere; the
//!    step then continues at the new sites.
//! 2. **Capture**: each leg may be captured by a blocker at its site.
//! 3. **Release**: each captured leg may be released. Skipped without
//!    drawing when neither leg is captured.
//! 4. **Translocate**: each free leg steps one site in its direction, or
//!    stalls on a boundary or an occupied site. `leg_a` moves first.
//!
//! The occupancy and the random source are lent in for each step; the
//! extruder holds no reference to either between steps.

use crate::blockers::BlockerModel;
use crate::leg::{Leg, LegFlag};
use crate::loading::{LoadingConfig, LoadingPolicy};
use loopex_core::{
    ConfigurationError, Direction, ExtruderError, ExtruderId, LoadingSaturationError,
    RandomSource,
};
use loopex_lattice::Occupancy;
use std::fmt;
use std::sync::Arc;

/// Mean residence time, in steps, of a free extruder.
pub const DEFAULT_LIFETIME: f64 = 100.0;
/// Mean residence time, in steps, while at least one leg is stalled.
pub const DEFAULT_STALLED_LIFETIME: f64 = 10.0;
/// Placement attempts a reload makes before reporting saturation.
pub const DEFAULT_MAX_RELOAD_ATTEMPTS: u32 = 100_000;

/// What happened during the most recent [`Extruder::translocate`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// The extruder unloaded and rebound this step.
    pub unloaded: bool,
    /// Legs newly captured this step.
    pub captures: u8,
    /// Captured legs released this step.
    pub releases: u8,
    /// Legs that advanced one site.
    pub moves: u8,
    /// Legs that tried to move and stalled.
    pub stalls: u8,
}

/// A loop extrusion factor: two legs plus the rules that move them.
#[derive(Clone, Debug)]
pub struct Extruder {
    id: ExtruderId,
    leg_a: Leg,
    leg_b: Leg,
    blockers: Arc<BlockerModel>,
    lifetime: f64,
    stalled_lifetime: f64,
    loading: LoadingPolicy,
    max_reload_attempts: u32,
    last_events: StepEvents,
}

#[derive(Clone, Debug)]
enum LoadingSource {
    Config(LoadingConfig),
    Policy(LoadingPolicy),
}

/// Builder for [`Extruder`].
///
/// Required: leg positions (unless targeted loading supplies them).
#[derive(Clone, Debug)]
pub struct ExtruderBuilder {
    id: ExtruderId,
    legs: Option<(usize, usize)>,
    blockers: Arc<BlockerModel>,
    lifetime: f64,
    stalled_lifetime: f64,
    loading: LoadingSource,
    max_reload_attempts: u32,
}

impl Extruder {
    /// Create a new builder for the extruder with identity `id`.
    pub fn builder(id: ExtruderId) -> ExtruderBuilder {
        ExtruderBuilder {
            id,
            legs: None,
            blockers: Arc::new(BlockerModel::empty()),
            lifetime: DEFAULT_LIFETIME,
            stalled_lifetime: DEFAULT_STALLED_LIFETIME,
            loading: LoadingSource::Policy(LoadingPolicy::Uniform),
            max_reload_attempts: DEFAULT_MAX_RELOAD_ATTEMPTS,
        }
    }

    /// Identity within the population.
    pub fn id(&self) -> ExtruderId {
        self.id
    }

    /// The left-moving leg.
    pub fn leg_a(&self) -> &Leg {
        &self.leg_a
    }

    /// The right-moving leg.
    pub fn leg_b(&self) -> &Leg {
        &self.leg_b
    }

    /// Mutable access to the leg walking in `direction`, for drivers and
    /// tests that need to force a flag.
    pub fn leg_mut(&mut self, direction: Direction) -> &mut Leg {
        match direction {
            Direction::Left => &mut self.leg_a,
            Direction::Right => &mut self.leg_b,
        }
    }

    /// Both legs, `leg_a` first.
    pub fn legs(&self) -> [&Leg; 2] {
        [&self.leg_a, &self.leg_b]
    }

    /// Sites of `(leg_a, leg_b)`.
    pub fn sites(&self) -> (usize, usize) {
        (self.leg_a.position, self.leg_b.position)
    }

    /// Number of sites spanned by the extruded loop.
    pub fn loop_size(&self) -> usize {
        self.leg_a.position.abs_diff(self.leg_b.position)
    }

    /// Whether either leg has `flag` set.
    pub fn any_leg(&self, flag: LegFlag) -> bool {
        self.leg_a.flag(flag) || self.leg_b.flag(flag)
    }

    /// Whether both legs have `flag` set.
    pub fn all_legs(&self, flag: LegFlag) -> bool {
        self.leg_a.flag(flag) && self.leg_b.flag(flag)
    }

    /// Mean residence time while free.
    pub fn lifetime(&self) -> f64 {
        self.lifetime
    }

    /// Mean residence time while stalled.
    pub fn stalled_lifetime(&self) -> f64 {
        self.stalled_lifetime
    }

    /// The shared blocker model.
    pub fn blockers(&self) -> &Arc<BlockerModel> {
        &self.blockers
    }

    /// The placement strategy used on reload.
    pub fn loading_policy(&self) -> &LoadingPolicy {
        &self.loading
    }

    /// Reload attempt cap.
    pub fn max_reload_attempts(&self) -> u32 {
        self.max_reload_attempts
    }

    /// Outcome of the most recent step.
    pub fn last_events(&self) -> StepEvents {
        self.last_events
    }

    /// Per-step unload probability given the current stall state.
    pub fn unload_probability(&self) -> f64 {
        if self.any_leg(LegFlag::Stalled) {
            1.0 / self.stalled_lifetime
        } else {
            1.0 / self.lifetime
        }
    }

    /// Advance this extruder by one step.
    ///
    /// Mutates `occupancy` in place and hands it back. Stalls at the
    /// lattice ends or against other legs are normal outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`LoadingSaturationError`] if the extruder unloads and no
    /// free adjacent pair is found within the attempt cap. The legs are
    /// then left on (and re-marked at) their previous sites.
    pub fn translocate<'o, R: RandomSource + ?Sized>(
        &mut self,
        occupancy: &'o mut Occupancy,
        rng: &mut R,
    ) -> Result<&'o mut Occupancy, LoadingSaturationError> {
        let mut events = StepEvents::default();

        if rng.uniform() < self.unload_probability() {
            let previous = self.sites();
            if let Err(e) = self.reload(occupancy, rng) {
                tracing::warn!(
                    extruder = %self.id,
                    error = %e,
                    "reload failed, keeping previous sites"
                );
                self.last_events = events;
                return Err(e);
            }
            tracing::debug!(
                extruder = %self.id,
                from = ?previous,
                to = ?self.sites(),
                "extruder unloaded and reloaded"
            );
            events.unloaded = true;
        }

        self.capture(rng, &mut events);
        self.release(rng, &mut events);

        for leg in [&mut self.leg_a, &mut self.leg_b] {
            if leg.captured {
                continue;
            }
            match occupancy.neighbour(leg.position, leg.direction) {
                Some(next) if !occupancy.is_occupied(next) => {
                    leg.stalled = false;
                    occupancy.clear(leg.position);
                    occupancy.mark(next);
                    leg.position = next;
                    events.moves += 1;
                }
                _ => {
                    leg.stalled = true;
                    events.stalls += 1;
                }
            }
        }

        self.last_events = events;
        Ok(occupancy)
    }

    fn capture<R: RandomSource + ?Sized>(&mut self, rng: &mut R, events: &mut StepEvents) {
        for leg in [&mut self.leg_a, &mut self.leg_b] {
            let p = self.blockers.capture_probability(leg.position, leg.direction);
            if rng.uniform() < p {
                if !leg.captured {
                    events.captures += 1;
                }
                leg.captured = true;
            }
        }
    }

    fn release<R: RandomSource + ?Sized>(&mut self, rng: &mut R, events: &mut StepEvents) {
        if !self.any_leg(LegFlag::Captured) {
            return;
        }
        for leg in [&mut self.leg_a, &mut self.leg_b] {
            let p = self.blockers.release_probability(leg.position, leg.direction);
            if rng.uniform() < p {
                if leg.captured {
                    events.releases += 1;
                }
                leg.captured = false;
            }
        }
    }

    fn unload(&mut self, occupancy: &mut Occupancy) {
        occupancy.clear(self.leg_a.position);
        occupancy.clear(self.leg_b.position);
    }

    /// Unload, then place both legs on a fresh free pair `(p, p + 1)`
    /// chosen by the loading policy, clearing their flags.
    ///
    /// The extruder's current sites are vacated first, so the old pair is
    /// itself a candidate.
    ///
    /// # Errors
    ///
    /// Returns [`LoadingSaturationError`] if no free pair is found within
    /// the attempt cap. The legs then stay on their previous sites, which
    /// are marked again.
    pub fn reload<R: RandomSource + ?Sized>(
        &mut self,
        occupancy: &mut Occupancy,
        rng: &mut R,
    ) -> Result<(), LoadingSaturationError> {
        self.unload(occupancy);
        let site = match self
            .loading
            .find_free_pair(occupancy, rng, self.max_reload_attempts)
        {
            Ok(site) => site,
            Err(e) => {
                occupancy.mark(self.leg_a.position);
                occupancy.mark(self.leg_b.position);
                return Err(e);
            }
        };
        occupancy.mark(site);
        occupancy.mark(site + 1);
        self.leg_a.place(site);
        self.leg_b.place(site + 1);
        Ok(())
    }
}

impl fmt::Display for Extruder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "extruder {}: {}; {}", self.id, self.leg_a, self.leg_b)
    }
}

impl ExtruderBuilder {
    /// Initial sites of the left-moving and right-moving legs. Ignored
    /// when targeted loading is enabled.
    pub fn legs(mut self, leg_a: usize, leg_b: usize) -> Self {
        self.legs = Some((leg_a, leg_b));
        self
    }

    /// Shared blocker model (default: no blockers).
    pub fn blockers(mut self, blockers: Arc<BlockerModel>) -> Self {
        self.blockers = blockers;
        self
    }

    /// Mean residence time while free (default: 100).
    pub fn lifetime(mut self, lifetime: f64) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Mean residence time while stalled (default: 10).
    pub fn stalled_lifetime(mut self, stalled_lifetime: f64) -> Self {
        self.stalled_lifetime = stalled_lifetime;
        self
    }

    /// Raw loading configuration, validated at [`build`](Self::build).
    pub fn loading(mut self, config: LoadingConfig) -> Self {
        self.loading = LoadingSource::Config(config);
        self
    }

    /// An already-validated loading policy, typically shared by a whole
    /// population.
    pub fn loading_policy(mut self, policy: LoadingPolicy) -> Self {
        self.loading = LoadingSource::Policy(policy);
        self
    }

    /// Reload attempt cap (default: 100 000).
    pub fn max_reload_attempts(mut self, attempts: u32) -> Self {
        self.max_reload_attempts = attempts;
        self
    }

    /// Validate the configuration, mark both legs' sites in `occupancy`
    /// and return the extruder.
    ///
    /// With targeted loading the legs start on `spots[id]` and
    /// `spots[id] + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtruderError::Configuration`] if:
    /// - targeted loading is enabled without spots, or spots are given
    ///   without it
    /// - the loading spots or weights are invalid, or `id` has no spot
    /// - a lifetime is not finite and positive
    /// - leg positions are missing, out of bounds, equal, inverted
    ///   (`leg_a > leg_b`), or occupied
    /// - `max_reload_attempts` is zero
    pub fn build(self, occupancy: &mut Occupancy) -> Result<Extruder, ExtruderError> {
        let lattice_len = occupancy.len();

        if self.max_reload_attempts == 0 {
            return Err(ConfigurationError::ZeroReloadAttempts.into());
        }
        for (name, value) in [
            ("lifetime", self.lifetime),
            ("stalled_lifetime", self.stalled_lifetime),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigurationError::InvalidLifetime { name, value }.into());
            }
        }

        let loading = match self.loading {
            LoadingSource::Config(config) => LoadingPolicy::resolve(&config, lattice_len)?,
            LoadingSource::Policy(policy) => policy,
        };

        let (a, b) = match &loading {
            LoadingPolicy::Targeted(table) => {
                let spots = table.spots();
                let spot = *spots.get(self.id.index()).ok_or(
                    ConfigurationError::MissingLoadingSpot {
                        index: self.id.index(),
                        spots: spots.len(),
                    },
                )?;
                (spot, spot + 1)
            }
            LoadingPolicy::Uniform => self.legs.ok_or(ConfigurationError::MissingLegPositions)?,
        };

        for position in [a, b] {
            if position >= lattice_len {
                return Err(ConfigurationError::LegOutOfBounds {
                    position,
                    lattice_len,
                }
                .into());
            }
        }
        if a == b {
            return Err(ConfigurationError::LegsCoincide { position: a }.into());
        }
        if a > b {
            return Err(ConfigurationError::LegsInverted { leg_a: a, leg_b: b }.into());
        }
        if let Some(position) = [a, b].into_iter().find(|&p| occupancy.is_occupied(p)) {
            return Err(ConfigurationError::SiteOccupied { position }.into());
        }

        occupancy.mark(a);
        occupancy.mark(b);

        Ok(Extruder {
            id: self.id,
            leg_a: Leg::new(a, Direction::Left),
            leg_b: Leg::new(b, Direction::Right),
            blockers: self.blockers,
            lifetime: self.lifetime,
            stalled_lifetime: self.stalled_lifetime,
            loading,
            max_reload_attempts: self.max_reload_attempts,
            last_events: StepEvents::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always returns the same uniform draw; `below` picks the middle.
    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn uniform(&mut self) -> f64 {
            self.0
        }

        fn below(&mut self, upper: usize) -> usize {
            upper / 2
        }
    }

    fn lattice(len: usize) -> Occupancy {
        Occupancy::new(len).unwrap()
    }

    #[test]
    fn build_marks_both_sites() {
        let mut occ = lattice(20);
        let ex = Extruder::builder(ExtruderId(0)).legs(5, 6).build(&mut occ).unwrap();
        assert_eq!(ex.sites(), (5, 6));
        assert_eq!(ex.leg_a().direction(), Direction::Left);
        assert_eq!(ex.leg_b().direction(), Direction::Right);
        assert!(occ.is_occupied(5) && occ.is_occupied(6));
        assert_eq!(occ.occupied_count(), 2);
    }

    #[test]
    fn build_rejects_targeted_without_spots() {
        let mut occ = lattice(20);
        let err = Extruder::builder(ExtruderId(0))
            .legs(1, 2)
            .loading(LoadingConfig {
                targeted_loading: true,
                loading_spots: None,
                loading_weights: None,
            })
            .build(&mut occ)
            .unwrap_err();
        assert_eq!(
            err,
            ExtruderError::Configuration(ConfigurationError::TargetedLoadingWithoutSpots)
        );
        assert_eq!(occ.occupied_count(), 0);
    }

    #[test]
    fn build_rejects_spots_without_targeted() {
        let mut occ = lattice(20);
        let err = Extruder::builder(ExtruderId(0))
            .legs(1, 2)
            .loading(LoadingConfig {
                targeted_loading: false,
                loading_spots: Some(vec![4]),
                loading_weights: None,
            })
            .build(&mut occ)
            .unwrap_err();
        assert_eq!(
            err,
            ExtruderError::Configuration(ConfigurationError::SpotsWithoutTargetedLoading)
        );
    }

    #[test]
    fn targeted_build_ignores_given_legs() {
        let mut occ = lattice(20);
        let ex = Extruder::builder(ExtruderId(1))
            .legs(0, 1)
            .loading(LoadingConfig::targeted(vec![3, 12], None))
            .build(&mut occ)
            .unwrap();
        assert_eq!(ex.sites(), (12, 13));
        assert!(ex.loading_policy().is_targeted());
    }

    #[test]
    fn targeted_build_needs_spot_for_index() {
        let mut occ = lattice(20);
        let err = Extruder::builder(ExtruderId(2))
            .loading(LoadingConfig::targeted(vec![3, 12], None))
            .build(&mut occ)
            .unwrap_err();
        assert_eq!(
            err,
            ExtruderError::Configuration(ConfigurationError::MissingLoadingSpot {
                index: 2,
                spots: 2
            })
        );
    }

    #[test]
    fn build_validates_positions_and_lifetimes() {
        let mut occ = lattice(10);
        assert!(matches!(
            Extruder::builder(ExtruderId(0)).build(&mut occ),
            Err(ExtruderError::Configuration(
                ConfigurationError::MissingLegPositions
            ))
        ));
        assert!(matches!(
            Extruder::builder(ExtruderId(0)).legs(9, 10).build(&mut occ),
            Err(ExtruderError::Configuration(
                ConfigurationError::LegOutOfBounds { position: 10, .. }
            ))
        ));
        assert!(matches!(
            Extruder::builder(ExtruderId(0)).legs(4, 4).build(&mut occ),
            Err(ExtruderError::Configuration(
                ConfigurationError::LegsCoincide { position: 4 }
            ))
        ));
        assert_eq!(
            Extruder::builder(ExtruderId(0)).legs(6, 5).build(&mut occ).unwrap_err(),
            ExtruderError::Configuration(ConfigurationError::LegsInverted { leg_a: 6, leg_b: 5 })
        );
        assert!(matches!(
            Extruder::builder(ExtruderId(0)).legs(1, 2).lifetime(0.0).build(&mut occ),
            Err(ExtruderError::Configuration(
                ConfigurationError::InvalidLifetime {
                    name: "lifetime",
                    ..
                }
            ))
        ));
        assert!(matches!(
            Extruder::builder(ExtruderId(0))
                .legs(1, 2)
                .stalled_lifetime(f64::INFINITY)
                .build(&mut occ),
            Err(ExtruderError::Configuration(
                ConfigurationError::InvalidLifetime {
                    name: "stalled_lifetime",
                    ..
                }
            ))
        ));
        assert!(matches!(
            Extruder::builder(ExtruderId(0))
                .legs(1, 2)
                .max_reload_attempts(0)
                .build(&mut occ),
            Err(ExtruderError::Configuration(
                ConfigurationError::ZeroReloadAttempts
            ))
        ));
        assert_eq!(occ.occupied_count(), 0);
    }

    #[test]
    fn reload_without_prior_unload_keeps_markers_exact() {
        let mut occ = lattice(21);
        let mut ex = Extruder::builder(ExtruderId(0)).legs(2, 3).build(&mut occ).unwrap();
        // below(20) -> 10.
        ex.reload(&mut occ, &mut Fixed(0.5)).unwrap();
        assert_eq!(ex.sites(), (10, 11));
        assert_eq!(occ.occupied_count(), 2);
        assert_eq!(crate::check_population(&occ, [&ex]), Ok(()));
    }

    #[test]
    fn failed_reload_restores_previous_sites() {
        let mut occ = lattice(3);
        let mut ex = Extruder::builder(ExtruderId(0))
            .legs(0, 2)
            .max_reload_attempts(4)
            .build(&mut occ)
            .unwrap();
        occ.mark(1);
        assert!(ex.reload(&mut occ, &mut Fixed(0.5)).is_err());
        assert_eq!(ex.sites(), (0, 2));
        assert_eq!(occ.markers(), &[1, 1, 1]);
    }

    #[test]
    fn build_refuses_occupied_site() {
        let mut occ = lattice(10);
        let _first = Extruder::builder(ExtruderId(0)).legs(3, 4).build(&mut occ).unwrap();
        let err = Extruder::builder(ExtruderId(1)).legs(4, 5).build(&mut occ).unwrap_err();
        assert_eq!(
            err,
            ExtruderError::Configuration(ConfigurationError::SiteOccupied { position: 4 })
        );
        assert_eq!(occ.occupied_count(), 2);
    }

    #[test]
    fn free_legs_walk_apart() {
        let mut occ = lattice(20);
        let mut ex = Extruder::builder(ExtruderId(0)).legs(9, 10).build(&mut occ).unwrap();
        ex.translocate(&mut occ, &mut Fixed(0.999)).unwrap();
        assert_eq!(ex.sites(), (8, 11));
        assert!(!ex.any_leg(LegFlag::Stalled));
        assert_eq!(occ.occupied_count(), 2);
        assert!(occ.is_occupied(8) && occ.is_occupied(11));
        assert_eq!(ex.loop_size(), 3);
        assert_eq!(
            ex.last_events(),
            StepEvents {
                moves: 2,
                ..Default::default()
            }
        );
    }

    #[test]
    fn unload_probability_tracks_stall_state() {
        let mut occ = lattice(20);
        let mut ex = Extruder::builder(ExtruderId(0))
            .legs(0, 1)
            .lifetime(50.0)
            .stalled_lifetime(5.0)
            .build(&mut occ)
            .unwrap();
        assert_eq!(ex.unload_probability(), 1.0 / 50.0);
        ex.translocate(&mut occ, &mut Fixed(0.5)).unwrap();
        assert!(ex.leg_a().is_stalled());
        assert!(ex.any_leg(LegFlag::Stalled));
        assert!(!ex.all_legs(LegFlag::Stalled));
        assert_eq!(ex.unload_probability(), 1.0 / 5.0);
    }

    #[test]
    fn certain_unload_reloads_on_fresh_pair() {
        let mut occ = lattice(21);
        let mut ex = Extruder::builder(ExtruderId(0))
            .legs(2, 3)
            .lifetime(1.0)
            .build(&mut occ)
            .unwrap();
        // below(20) -> 10: reload at (10, 11), then both legs step outward.
        ex.translocate(&mut occ, &mut Fixed(0.5)).unwrap();
        assert!(ex.last_events().unloaded);
        assert_eq!(ex.sites(), (9, 12));
        assert!(!occ.is_occupied(2) && !occ.is_occupied(3));
        assert_eq!(occ.occupied_count(), 2);
    }

    #[test]
    fn capture_then_release() {
        let blockers = BlockerModel::builder()
            .capture(Direction::Right, 6, 1.0)
            .release(Direction::Right, 6, 1.0)
            .build()
            .unwrap();
        let mut occ = lattice(20);
        let mut ex = Extruder::builder(ExtruderId(0))
            .legs(4, 5)
            .blockers(Arc::new(blockers))
            .build(&mut occ)
            .unwrap();

        // Step 1: leg_b walks onto the blocker at 6.
        ex.translocate(&mut occ, &mut Fixed(0.5)).unwrap();
        assert_eq!(ex.sites(), (3, 6));

        // Step 2: captured and immediately released (release prob 1).
        ex.translocate(&mut occ, &mut Fixed(0.5)).unwrap();
        let ev = ex.last_events();
        assert_eq!(ev.captures, 1);
        assert_eq!(ev.releases, 1);
        assert_eq!(ex.sites(), (2, 7));
    }

    #[test]
    fn captured_leg_holds_position() {
        let blockers = BlockerModel::builder()
            .capture(Direction::Left, 4, 1.0)
            .build()
            .unwrap();
        let mut occ = lattice(20);
        let mut ex = Extruder::builder(ExtruderId(0))
            .legs(4, 5)
            .blockers(Arc::new(blockers))
            .build(&mut occ)
            .unwrap();
        for _ in 0..3 {
            ex.translocate(&mut occ, &mut Fixed(0.5)).unwrap();
        }
        assert_eq!(ex.leg_a().position(), 4);
        assert!(ex.leg_a().is_captured());
        assert!(!ex.leg_a().is_stalled());
        assert_eq!(ex.leg_b().position(), 8);
    }

    #[test]
    fn saturation_error_surfaces() {
        // A foreign leg sits between the extruder's legs, so no adjacent
        // pair is ever free.
        let mut occ = lattice(3);
        let mut ex = Extruder::builder(ExtruderId(0))
            .legs(0, 2)
            .lifetime(1.0)
            .max_reload_attempts(16)
            .build(&mut occ)
            .unwrap();
        occ.mark(1);
        let err = ex.translocate(&mut occ, &mut Fixed(0.5)).unwrap_err();
        assert_eq!(
            err,
            LoadingSaturationError {
                attempts: 16,
                lattice_len: 3
            }
        );
        assert_eq!(occ.markers(), &[1, 1, 1]);
        assert_eq!(ex.sites(), (0, 2));
    }

    #[test]
    fn display_lists_both_legs() {
        let mut occ = lattice(10);
        let ex = Extruder::builder(ExtruderId(3)).legs(4, 5).build(&mut occ).unwrap();
        let s = ex.to_string();
        assert!(s.starts_with("extruder 3:"));
        assert!(s.contains("leg -1 at 4"));
        assert!(s.contains("leg +1 at 5"));
    }
}
