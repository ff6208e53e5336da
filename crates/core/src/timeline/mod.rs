//! Staging of the linear banner transition between meters.
//!
//! Switching meters fades the foot groupings out, slides the unit strip to
//! the new offset and then reveals the feet one box at a time. The stages are
//! expressed as a schedule of [`ScheduledEvent`]s driven by a
//! [`PlaybackClock`], so the sequence is deterministic and testable. Starting
//! a new transition discards whatever was still pending.

use serde::{Deserialize, Serialize};

use crate::config::BannerConfig;

#[derive(Debug, Default, Clone)]
pub struct PlaybackClock {
    pub time_ms: u64,
}

impl PlaybackClock {
    pub fn reset(&mut self) {
        self.time_ms = 0;
    }

    pub fn advance(&mut self, delta_ms: u64) {
        self.time_ms = self.time_ms.saturating_add(delta_ms);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BannerEvent {
    /// Groupings start fading out.
    Disintegrate,
    /// Groupings are hidden and the strip moves to the target offset.
    Slide,
    /// Groupings return, still without any visible box.
    Reform,
    /// The box of the foot at this index appears.
    RevealBox(usize),
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub time_ms: u64,
    pub event: BannerEvent,
}

impl ScheduledEvent {
    pub fn new(time_ms: u64, event: BannerEvent) -> Self {
        Self { time_ms, event }
    }
}

/// Events for a transition that ends on a meter with `feet` feet.
pub fn transition_schedule(config: &BannerConfig, feet: usize) -> Vec<ScheduledEvent> {
    let step = config.reveal_step_ms;
    let mut events = vec![
        ScheduledEvent::new(0, BannerEvent::Disintegrate),
        ScheduledEvent::new(config.disintegrate_ms, BannerEvent::Slide),
        ScheduledEvent::new(config.reform_at_ms, BannerEvent::Reform),
    ];
    events.extend((0..feet).map(|index| {
        ScheduledEvent::new(
            config.reform_at_ms + step * index as u64,
            BannerEvent::RevealBox(index),
        )
    }));
    events.push(ScheduledEvent::new(
        config.settle_at_ms + step * feet as u64,
        BannerEvent::Complete,
    ));
    events
}

#[derive(Debug, Default)]
pub struct Scheduler {
    events: Vec<ScheduledEvent>,
    next_event: usize,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the schedule; anything still pending is dropped.
    pub fn set_events(&mut self, events: Vec<ScheduledEvent>) {
        self.events = events;
        self.events.sort_by_key(|event| event.time_ms);
        self.next_event = 0;
    }

    pub fn cancel(&mut self) {
        self.events.clear();
        self.next_event = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.next_event >= self.events.len()
    }

    /// Returns every event due at the clock's time, in schedule order.
    pub fn tick(&mut self, clock: &PlaybackClock) -> Vec<BannerEvent> {
        let mut fired = Vec::new();
        while let Some(event) = self.events.get(self.next_event) {
            if clock.time_ms < event.time_ms {
                break;
            }
            fired.push(event.event);
            self.next_event += 1;
        }
        fired
    }
}

/// Visibility flags of the banner at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerState {
    /// Offset the strip is currently scrolled to.
    pub current_offset: usize,
    pub target_offset: usize,
    pub show_groupings: bool,
    pub animating: bool,
    pub disintegrating: bool,
    pub reforming: bool,
    pub visible_boxes: Vec<bool>,
}

impl BannerState {
    /// A settled banner at offset 0 with every box visible.
    pub fn new(feet: usize) -> Self {
        Self {
            current_offset: 0,
            target_offset: 0,
            show_groupings: true,
            animating: false,
            disintegrating: false,
            reforming: false,
            visible_boxes: vec![true; feet],
        }
    }

    fn begin(&mut self, target_offset: usize, feet: usize) {
        self.target_offset = target_offset;
        self.visible_boxes = vec![false; feet];
        self.disintegrating = true;
        self.animating = true;
    }

    pub fn apply(&mut self, event: BannerEvent) {
        match event {
            BannerEvent::Disintegrate => {
                self.disintegrating = true;
                self.animating = true;
            }
            BannerEvent::Slide => {
                self.show_groupings = false;
                self.disintegrating = false;
                self.current_offset = self.target_offset;
            }
            BannerEvent::Reform => {
                self.show_groupings = true;
                self.reforming = true;
            }
            BannerEvent::RevealBox(index) => {
                if let Some(visible) = self.visible_boxes.get_mut(index) {
                    *visible = true;
                }
            }
            BannerEvent::Complete => {
                self.reforming = false;
                self.animating = false;
            }
        }
    }
}

/// Clock, schedule and state of one banner, restarted on every meter change.
#[derive(Debug)]
pub struct BannerTransition {
    config: BannerConfig,
    clock: PlaybackClock,
    scheduler: Scheduler,
    state: BannerState,
}

impl BannerTransition {
    pub fn new(config: BannerConfig) -> Self {
        Self {
            config,
            clock: PlaybackClock::default(),
            scheduler: Scheduler::new(),
            state: BannerState::new(0),
        }
    }

    /// Starts moving towards `target_offset`, superseding any transition in
    /// flight.
    pub fn start(&mut self, target_offset: usize, feet: usize) {
        self.clock.reset();
        self.scheduler
            .set_events(transition_schedule(&self.config, feet));
        self.state.begin(target_offset, feet);
    }

    pub fn advance(&mut self, delta_ms: u64) -> &BannerState {
        self.clock.advance(delta_ms);
        for event in self.scheduler.tick(&self.clock) {
            self.state.apply(event);
        }
        &self.state
    }

    pub fn state(&self) -> &BannerState {
        &self.state
    }

    pub fn is_settled(&self) -> bool {
        self.scheduler.is_finished() && !self.state.animating
    }

    /// Total length of a transition to a meter with `feet` feet.
    pub fn duration_ms(&self, feet: usize) -> u64 {
        self.config.settle_at_ms + self.config.reveal_step_ms * feet as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_follows_the_banner_stages() {
        let events = transition_schedule(&BannerConfig::default(), 3);
        let times: Vec<u64> = events.iter().map(|e| e.time_ms).collect();
        assert_eq!(times, vec![0, 300, 1100, 1100, 1250, 1400, 2050]);
        assert_eq!(events[3].event, BannerEvent::RevealBox(0));
        assert_eq!(events.last().unwrap().event, BannerEvent::Complete);
    }

    #[test]
    fn scheduler_fires_due_events_once() {
        let mut scheduler = Scheduler::new();
        scheduler.set_events(vec![
            ScheduledEvent::new(200, BannerEvent::Slide),
            ScheduledEvent::new(0, BannerEvent::Disintegrate),
        ]);

        let mut clock = PlaybackClock::default();
        assert_eq!(scheduler.tick(&clock), vec![BannerEvent::Disintegrate]);
        assert!(scheduler.tick(&clock).is_empty());

        clock.advance(500);
        assert_eq!(scheduler.tick(&clock), vec![BannerEvent::Slide]);
        assert!(scheduler.is_finished());

        scheduler.set_events(vec![ScheduledEvent::new(900, BannerEvent::Complete)]);
        scheduler.cancel();
        clock.advance(1_000);
        assert!(scheduler.tick(&clock).is_empty());
    }

    #[test]
    fn transition_slides_then_reveals_boxes_in_order() {
        let mut banner = BannerTransition::new(BannerConfig::default());
        banner.start(3, 4);

        let state = banner.advance(0).clone();
        assert!(state.disintegrating);
        assert_eq!(state.current_offset, 0);

        let state = banner.advance(300).clone();
        assert!(!state.show_groupings);
        assert_eq!(state.current_offset, 3);

        let state = banner.advance(950).clone();
        assert!(state.show_groupings && state.reforming);
        assert_eq!(state.visible_boxes, vec![true, true, false, false]);

        banner.advance(banner.duration_ms(4));
        assert!(banner.is_settled());
        assert_eq!(banner.state().visible_boxes, vec![true; 4]);
    }

    #[test]
    fn restarting_discards_pending_events() {
        let mut banner = BannerTransition::new(BannerConfig::default());
        banner.start(2, 3);
        banner.advance(400);
        assert_eq!(banner.state().current_offset, 2);

        banner.start(7, 2);
        let state = banner.advance(100).clone();
        assert_eq!(state.current_offset, 2);
        assert_eq!(state.visible_boxes, vec![false, false]);

        banner.advance(10_000);
        assert_eq!(banner.state().current_offset, 7);
        assert!(banner.is_settled());
    }

    #[test]
    fn out_of_range_reveal_is_ignored() {
        let mut state = BannerState::new(1);
        state.apply(BannerEvent::RevealBox(5));
        assert_eq!(state.visible_boxes, vec![true]);
    }
}
