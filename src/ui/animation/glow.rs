//! Glow phase controller
//!
//! Owns the widget's animation lifecycle: the initial glow, the steady
//! rotation driven by two independent intervals (direction and color), and
//! the hover override. Timers are plain owned values in one [`TimerSet`];
//! every transition goes through `GlowController::enter`, which clears the
//! whole set before arming anything new.
//!
//! The controller is clock-driven. The shell calls [`GlowController::advance`]
//! with the current instant and every timer that fell due since the last call
//! fires in deadline order.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::features::GlowSettings;
use crate::ui::animation::direction::Direction;
use crate::ui::animation::keyframes::GlowKeyframes;
use crate::ui::effects::gradient::Snapshot;

/// Upper bound on timer firings handled by one `advance` call
const MAX_CATCH_UP: usize = 1024;

/// Animation mode of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Symmetric pulsing glow played once after entry
    #[default]
    InitialGlow,
    /// Highlight rotating around the border while colors cycle
    Steady,
}

/// Repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next_due: Instant,
}

impl Interval {
    /// `None` when the first deadline is past what `Instant` can represent
    fn start(period: Duration, now: Instant) -> Option<Self> {
        now.checked_add(period).map(|next_due| Self { period, next_due })
    }

    /// The interval one period later, `None` once it can no longer fire
    fn advanced(self) -> Option<Self> {
        Self::start(self.period, self.next_due)
    }
}

/// One-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    due: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TimerKind {
    Transition,
    Direction,
    Color,
}

/// Every timer a widget instance can own
#[derive(Debug, Default)]
pub struct TimerSet {
    direction: Option<Interval>,
    color: Option<Interval>,
    transition: Option<Timeout>,
}

impl TimerSet {
    /// Number of armed timers
    pub fn active(&self) -> usize {
        usize::from(self.direction.is_some())
            + usize::from(self.color.is_some())
            + usize::from(self.transition.is_some())
    }

    /// Cancel everything
    pub fn clear(&mut self) {
        if self.active() > 0 {
            tracing::trace!("Clearing {} glow timers", self.active());
        }
        self.direction = None;
        self.color = None;
        self.transition = None;
    }

    /// Earliest timer due at or before `now`
    fn next_due(&self, now: Instant) -> Option<(Instant, TimerKind)> {
        [
            self.transition.map(|t| (t.due, TimerKind::Transition)),
            self.direction.map(|i| (i.next_due, TimerKind::Direction)),
            self.color.map(|i| (i.next_due, TimerKind::Color)),
        ]
        .into_iter()
        .flatten()
        .filter(|(due, _)| *due <= now)
        .min()
    }

    /// Drop missed firings and schedule intervals one period after `now`
    fn resync(&mut self, now: Instant) {
        for interval in [&mut self.direction, &mut self.color] {
            *interval = interval.and_then(|i| Interval::start(i.period, now));
        }
    }
}

/// Resolved controller parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GlowConfig {
    /// Direction rotation period
    pub direction_period: Duration,
    /// Color cycling period
    pub color_period: Duration,
    pub clockwise: bool,
    pub initial_phase: Phase,
    pub initial_direction: Direction,
    /// Delay before the initial glow hands over to the steady phase
    pub glow_delay: Duration,
    /// Length of the keyframe sequence played during the initial glow
    pub glow_duration: Duration,
    /// Color ticks in the steady phase before the glow replays
    pub breathing_threshold: Option<u32>,
    pub palette_size: usize,
}

impl From<&GlowSettings> for GlowConfig {
    fn from(settings: &GlowSettings) -> Self {
        let glow_delay = settings.glow_delay();
        Self {
            direction_period: settings.direction_period(),
            color_period: settings.color_period(),
            clockwise: settings.clockwise,
            initial_phase: settings.initial_phase,
            initial_direction: settings.initial_direction,
            glow_delay,
            glow_duration: glow_delay,
            breathing_threshold: settings.breathing_threshold.filter(|n| *n > 0),
            palette_size: settings.resolve_palette().len().max(1),
        }
    }
}

/// Phase controller with its direction and color sequencers
#[derive(Debug)]
pub struct GlowController {
    config: GlowConfig,
    phase: Phase,
    direction: Direction,
    color_index: usize,
    hovered: bool,
    mounted: bool,
    timers: TimerSet,
    glow_started: Option<Instant>,
    glow_progress: f32,
    steady_color_ticks: u32,
    transitions: u32,
}

impl GlowController {
    pub fn new(config: GlowConfig) -> Self {
        Self {
            phase: config.initial_phase,
            direction: config.initial_direction,
            config,
            color_index: 0,
            hovered: false,
            mounted: false,
            timers: TimerSet::default(),
            glow_started: None,
            glow_progress: 0.0,
            steady_color_ticks: 0,
            transitions: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Armed timers, zero while hovered or unmounted
    pub fn active_timers(&self) -> usize {
        self.timers.active()
    }

    /// Initial glow -> steady transitions performed so far
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    /// Whether the shell must keep delivering clock ticks
    pub fn needs_ticks(&self) -> bool {
        self.mounted && self.timers.active() > 0
    }

    /// Progress through the initial glow keyframes (0.0 - 1.0)
    pub fn glow_progress(&self) -> f32 {
        self.glow_progress
    }

    /// Start animating from the configured initial state
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        tracing::debug!("Mounting glow controller in {:?}", self.config.initial_phase);
        self.mounted = true;
        self.hovered = false;
        self.direction = self.config.initial_direction;
        self.color_index = 0;
        self.enter(self.config.initial_phase, now);
    }

    /// Tear down: cancels every timer; later ticks are ignored
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        tracing::debug!("Unmounting glow controller");
        self.timers.clear();
        self.mounted = false;
    }

    /// Pointer entered (`true`) or left (`false`) the widget
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        if !self.mounted {
            return;
        }

        if hovered {
            self.timers.clear();
        } else {
            // Resume the phase that was showing when the hover began
            self.enter(self.phase, now);
        }
    }

    /// Switch phase; the only place timers are armed
    fn enter(&mut self, phase: Phase, now: Instant) {
        self.timers.clear();
        if self.phase != phase {
            tracing::debug!("Glow phase {:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;

        match phase {
            Phase::InitialGlow => {
                self.glow_started = Some(now);
                self.glow_progress = 0.0;
            }
            Phase::Steady => {
                self.glow_started = None;
                self.glow_progress = 1.0;
                self.steady_color_ticks = 0;
            }
        }

        if self.hovered || !self.mounted {
            return;
        }

        match phase {
            Phase::InitialGlow => {
                self.timers.transition = now
                    .checked_add(self.config.glow_delay)
                    .map(|due| Timeout { due });
            }
            Phase::Steady => {
                self.timers.direction = Interval::start(self.config.direction_period, now);
                self.timers.color = Interval::start(self.config.color_period, now);
            }
        }
        if self.timers.active() == 0 {
            tracing::warn!("Glow timers for {:?} are out of range, nothing armed", phase);
        }
    }

    /// Fire every timer due at or before `now`, returning how many fired
    pub fn advance(&mut self, now: Instant) -> usize {
        if !self.mounted {
            return 0;
        }

        let mut fired = 0;
        while let Some((due, kind)) = self.timers.next_due(now) {
            if fired == MAX_CATCH_UP {
                tracing::warn!("Glow timers fell behind, skipping missed ticks");
                self.timers.resync(now);
                break;
            }
            fired += 1;

            match kind {
                TimerKind::Transition => self.fire_transition(due),
                TimerKind::Direction => self.fire_direction(),
                TimerKind::Color => self.fire_color(due),
            }
        }

        self.update_glow_progress(now);
        fired
    }

    fn fire_transition(&mut self, due: Instant) {
        self.timers.transition = None;
        // Hover may have changed since the timeout was armed
        if self.hovered || self.phase != Phase::InitialGlow {
            return;
        }
        self.transitions += 1;
        self.enter(Phase::Steady, due);
    }

    fn fire_direction(&mut self) {
        self.timers.direction = self.timers.direction.and_then(Interval::advanced);
        self.direction = self.direction.rotate(self.config.clockwise);
    }

    fn fire_color(&mut self, due: Instant) {
        self.timers.color = self.timers.color.and_then(Interval::advanced);
        self.color_index = (self.color_index + 1) % self.config.palette_size.max(1);
        self.steady_color_ticks += 1;

        if let Some(threshold) = self.config.breathing_threshold {
            if self.phase == Phase::Steady && self.steady_color_ticks >= threshold {
                tracing::debug!("Color cycle complete after {} ticks, replaying glow", threshold);
                self.enter(Phase::InitialGlow, due);
            }
        }
    }

    /// Progress stays frozen while hovered
    fn update_glow_progress(&mut self, now: Instant) {
        if self.hovered {
            return;
        }
        let Some(started) = self.glow_started else {
            return;
        };
        let total = self.config.glow_duration.as_secs_f32();
        self.glow_progress = if total <= 0.0 {
            1.0
        } else {
            (now.saturating_duration_since(started).as_secs_f32() / total).min(1.0)
        };
    }

    /// Renderer input for the current state
    pub fn snapshot(&self, keyframes: &GlowKeyframes) -> Snapshot {
        Snapshot {
            phase: self.phase,
            direction: self.direction,
            color_index: self.color_index,
            hovered: self.hovered,
            glow_frame: keyframes.frame_at(self.glow_progress),
        }
    }
}

impl Drop for GlowController {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn steady_config() -> GlowConfig {
        GlowConfig {
            direction_period: ms(750),
            color_period: ms(300),
            clockwise: true,
            initial_phase: Phase::Steady,
            initial_direction: Direction::Top,
            glow_delay: ms(1600),
            glow_duration: ms(1600),
            breathing_threshold: None,
            palette_size: 6,
        }
    }

    fn glow_config() -> GlowConfig {
        GlowConfig {
            initial_phase: Phase::InitialGlow,
            ..steady_config()
        }
    }

    fn mounted(config: GlowConfig) -> (GlowController, Instant) {
        let t0 = Instant::now();
        let mut controller = GlowController::new(config);
        controller.mount(t0);
        (controller, t0)
    }

    #[test]
    fn test_one_direction_tick() {
        let (mut c, t0) = mounted(steady_config());
        c.advance(t0 + ms(749));
        assert_eq!(c.direction(), Direction::Top);
        c.advance(t0 + ms(750));
        assert_eq!(c.direction(), Direction::Left);
    }

    #[test]
    fn test_four_direction_ticks_return_home() {
        let (mut c, t0) = mounted(steady_config());
        c.advance(t0 + ms(3000));
        assert_eq!(c.direction(), Direction::Top);
    }

    #[test]
    fn test_counter_clockwise_rotation() {
        let (mut c, t0) = mounted(GlowConfig {
            clockwise: false,
            ..steady_config()
        });
        c.advance(t0 + ms(750));
        assert_eq!(c.direction(), Direction::Right);
    }

    #[test]
    fn test_six_color_ticks_wrap() {
        let (mut c, t0) = mounted(steady_config());
        c.advance(t0 + ms(300));
        assert_eq!(c.color_index(), 1);
        c.advance(t0 + ms(1800));
        assert_eq!(c.color_index(), 0);
    }

    #[test]
    fn test_steady_owns_one_interval_pair() {
        let (mut c, t0) = mounted(steady_config());
        assert_eq!(c.active_timers(), 2);
        for i in 1..20 {
            c.set_hovered(i % 2 == 1, t0 + ms(i * 10));
        }
        c.set_hovered(false, t0 + ms(500));
        assert_eq!(c.active_timers(), 2);
    }

    #[test]
    fn test_hover_clears_all_timers() {
        let (mut c, t0) = mounted(steady_config());
        c.advance(t0 + ms(800));
        let direction = c.direction();
        c.set_hovered(true, t0 + ms(800));
        assert_eq!(c.active_timers(), 0);
        assert!(!c.needs_ticks());

        assert_eq!(c.advance(t0 + ms(10_000)), 0);
        assert_eq!(c.direction(), direction);
    }

    #[test]
    fn test_unhover_resumes_from_current_direction() {
        let (mut c, t0) = mounted(steady_config());
        c.advance(t0 + ms(750));
        c.set_hovered(true, t0 + ms(760));
        c.set_hovered(false, t0 + ms(5000));
        assert_eq!(c.direction(), Direction::Left);
        c.advance(t0 + ms(5750));
        assert_eq!(c.direction(), Direction::Bottom);
    }

    #[test]
    fn test_glow_transitions_exactly_once() {
        let (mut c, t0) = mounted(glow_config());
        assert_eq!(c.phase(), Phase::InitialGlow);
        assert_eq!(c.active_timers(), 1);

        c.advance(t0 + ms(1599));
        assert_eq!(c.phase(), Phase::InitialGlow);
        c.advance(t0 + ms(1600));
        assert_eq!(c.phase(), Phase::Steady);
        assert_eq!(c.transitions(), 1);

        c.advance(t0 + ms(20_000));
        assert_eq!(c.transitions(), 1);
        assert_eq!(c.active_timers(), 2);
    }

    #[test]
    fn test_hover_blocks_glow_transition() {
        let (mut c, t0) = mounted(glow_config());
        c.set_hovered(true, t0 + ms(1000));
        c.advance(t0 + ms(5000));
        assert_eq!(c.phase(), Phase::InitialGlow);
        assert_eq!(c.transitions(), 0);

        // Leaving replays the glow with a fresh delay
        c.set_hovered(false, t0 + ms(5000));
        c.advance(t0 + ms(6599));
        assert_eq!(c.phase(), Phase::InitialGlow);
        c.advance(t0 + ms(6600));
        assert_eq!(c.phase(), Phase::Steady);
        assert_eq!(c.transitions(), 1);
    }

    #[test]
    fn test_breathing_replays_glow() {
        let (mut c, t0) = mounted(GlowConfig {
            breathing_threshold: Some(30),
            ..steady_config()
        });
        c.advance(t0 + ms(8999));
        assert_eq!(c.phase(), Phase::Steady);
        c.advance(t0 + ms(9000));
        assert_eq!(c.phase(), Phase::InitialGlow);
        assert_eq!(c.active_timers(), 1);

        c.advance(t0 + ms(10_600));
        assert_eq!(c.phase(), Phase::Steady);
        assert_eq!(c.transitions(), 1);
    }

    #[test]
    fn test_no_breathing_by_default() {
        let (mut c, t0) = mounted(steady_config());
        c.advance(t0 + ms(60_000));
        assert_eq!(c.phase(), Phase::Steady);
    }

    #[test]
    fn test_immediate_glow_delay() {
        let (mut c, t0) = mounted(GlowConfig {
            glow_delay: Duration::ZERO,
            glow_duration: Duration::ZERO,
            ..glow_config()
        });
        c.advance(t0);
        assert_eq!(c.phase(), Phase::Steady);
        assert_eq!(c.glow_progress(), 1.0);
    }

    #[test]
    fn test_unmount_releases_everything() {
        let (mut c, t0) = mounted(steady_config());
        c.unmount();
        assert_eq!(c.active_timers(), 0);
        assert_eq!(c.advance(t0 + ms(10_000)), 0);
        assert_eq!(c.direction(), Direction::Top);

        // Hover changes while unmounted arm nothing
        c.set_hovered(true, t0);
        c.set_hovered(false, t0);
        assert_eq!(c.active_timers(), 0);
    }

    #[test]
    fn test_glow_progress_and_snapshot() {
        let (mut c, t0) = mounted(glow_config());
        let keyframes = GlowKeyframes::new(0.0, 8, Default::default());
        c.advance(t0 + ms(800));
        assert!((c.glow_progress() - 0.5).abs() < 1e-3);

        let snap = c.snapshot(&keyframes);
        assert_eq!(snap.phase, Phase::InitialGlow);
        assert_eq!(snap.glow_frame, 4);
        assert!(!snap.hovered);
    }

    #[test]
    fn test_out_of_range_periods_arm_nothing() {
        let (mut c, t0) = mounted(GlowConfig {
            direction_period: Duration::MAX,
            color_period: Duration::MAX,
            ..steady_config()
        });
        assert_eq!(c.active_timers(), 0);
        assert_eq!(c.advance(t0 + ms(60_000)), 0);
        assert_eq!(c.direction(), Direction::Top);

        let (c, _) = mounted(GlowConfig {
            glow_delay: Duration::MAX,
            ..glow_config()
        });
        assert_eq!(c.phase(), Phase::InitialGlow);
        assert_eq!(c.active_timers(), 0);
    }

    #[test]
    fn test_huge_settings_mount_cleanly() {
        let settings: GlowSettings = serde_json::from_str(
            r#"{ "duration_secs": 1e30, "color_interval_ms": 18446744073709551615, "glow_delay_ms": 18446744073709551615 }"#,
        )
        .unwrap();
        let config = GlowConfig::from(&settings);
        assert_eq!(config.direction_period, Duration::from_secs(3600));
        assert_eq!(config.color_period, Duration::from_secs(3600));
        assert_eq!(config.glow_delay, Duration::from_secs(3600));

        let (mut c, t0) = mounted(GlowConfig {
            initial_phase: Phase::Steady,
            ..config
        });
        assert_eq!(c.active_timers(), 2);
        assert_eq!(c.advance(t0 + ms(60_000)), 0);
    }

    #[test]
    fn test_glow_progress_freezes_while_hovered() {
        let (mut c, t0) = mounted(glow_config());
        c.advance(t0 + ms(400));
        c.set_hovered(true, t0 + ms(400));
        c.advance(t0 + ms(600));
        assert!((c.glow_progress() - 0.25).abs() < 1e-3);
    }

    #[test]
    fn test_catch_up_is_bounded() {
        let (mut c, t0) = mounted(GlowConfig {
            direction_period: ms(1),
            color_period: ms(1),
            ..steady_config()
        });
        assert_eq!(c.advance(t0 + ms(100_000)), MAX_CATCH_UP);
        assert_eq!(c.active_timers(), 2);
        assert_eq!(c.advance(t0 + ms(100_000)), 0);
    }
}
