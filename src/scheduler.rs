//! Tick-driven event scheduler shared by the timer, PPU, APU and serial
//! subsystems.
//!
//! The scheduler owns a single monotonic tick counter (T-cycles at the
//! base 4.194304 MHz clock) and a priority queue of pending events keyed
//! by their absolute firing tick. Each [`EventKind`] may have at most one
//! outstanding occurrence at a time; scheduling a kind that is already
//! pending moves it rather than creating a second entry.
//!
//! `BinaryHeap` has no cheap arbitrary-element removal, so descheduling
//! is implemented with the usual lazy-deletion trick: a side table tracks
//! which sequence number is the live one for each kind, and stale heap
//! entries left behind by a reschedule/deschedule are discarded when
//! popped instead of being removed up front.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Closed set of event kinds the scheduler can carry. New kinds are added
/// here as components need them; consumers match exhaustively on this
/// enum so the compiler catches a missing handler arm at build time
/// rather than falling back to a silent no-op at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PpuHBlank,
    PpuVBlank,
    PpuOamScanEnd,
    PpuModeTransition,
    TimerOverflow,
    TimerReload,
    ApuFrameSequencer,
    ApuChannel1,
    ApuChannel2,
    ApuChannel3,
    ApuChannel4,
    ApuSample,
    SerialBitTransfer,
    SerialBitInterrupt,
    JoypadRelease,
    HdmaTransfer,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct HeapEntry {
    tick: u64,
    seq: u64,
    kind: EventKind,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, reverse the tick (and then the
        // sequence number, for stable same-tick ordering) so that the
        // earliest-scheduled, earliest-inserted event sorts first.
        other
            .tick
            .cmp(&self.tick)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Monotonic tick clock plus a lazily-deleted priority queue of events.
pub struct Scheduler {
    tick: u64,
    heap: BinaryHeap<HeapEntry>,
    live: HashMap<EventKind, u64>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            tick: 0,
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            next_seq: 0,
        }
    }

    pub fn reset(&mut self) {
        self.tick = 0;
        self.heap.clear();
        self.live.clear();
        self.next_seq = 0;
    }

    /// Current absolute tick.
    #[inline(always)]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Schedules `kind` to fire `in_ticks` T-cycles from now, replacing
    /// any occurrence already pending for that kind.
    pub fn schedule(&mut self, kind: EventKind, in_ticks: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(kind, seq);
        self.heap.push(HeapEntry {
            tick: self.tick + in_ticks,
            seq,
            kind,
        });
    }

    /// Cancels any pending occurrence of `kind`. A no-op if none is
    /// pending; the corresponding heap entry, if any, is discarded
    /// lazily the next time it would otherwise fire.
    pub fn deschedule(&mut self, kind: EventKind) {
        self.live.remove(&kind);
    }

    /// Whether `kind` currently has a live, pending occurrence.
    pub fn is_scheduled(&self, kind: EventKind) -> bool {
        self.live.contains_key(&kind)
    }

    /// Advances the tick counter by `cycles` T-cycles and returns the
    /// kinds that fired, in (tick, insertion order) order, matching the
    /// stable ordering required of same-tick events.
    pub fn tick(&mut self, cycles: u64) -> Vec<EventKind> {
        self.tick += cycles;
        self.drain_due()
    }

    /// Advances the tick counter directly to the next pending event (if
    /// any) and fires it. Used to model HALT/STOP: the CPU has nothing
    /// else to do, so time can jump straight to the next interrupt
    /// source instead of being ticked one T-cycle at a time.
    pub fn do_next(&mut self) -> Vec<EventKind> {
        let Some(next_tick) = self.next_due_tick() else {
            return Vec::new();
        };
        if next_tick > self.tick {
            self.tick = next_tick;
        }
        self.drain_due()
    }

    /// The tick at which the next live event is due, if any.
    fn next_due_tick(&self) -> Option<u64> {
        self.heap
            .iter()
            .filter(|entry| self.live.get(&entry.kind) == Some(&entry.seq))
            .map(|entry| entry.tick)
            .min()
    }

    fn drain_due(&mut self) -> Vec<EventKind> {
        let mut fired = Vec::new();
        while let Some(top) = self.heap.peek() {
            if top.tick > self.tick {
                break;
            }
            let entry = self.heap.pop().unwrap();
            // stale entry left behind by a deschedule/reschedule, skip
            if self.live.get(&entry.kind) != Some(&entry.seq) {
                continue;
            }
            self.live.remove(&entry.kind);
            fired.push(entry.kind);
        }
        fired
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_tick_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(EventKind::TimerOverflow, 10);
        scheduler.schedule(EventKind::PpuHBlank, 4);
        assert!(scheduler.tick(3).is_empty());
        let fired = scheduler.tick(1);
        assert_eq!(fired, vec![EventKind::PpuHBlank]);
        let fired = scheduler.tick(6);
        assert_eq!(fired, vec![EventKind::TimerOverflow]);
    }

    #[test]
    fn reschedule_replaces_pending_occurrence() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(EventKind::TimerReload, 4);
        scheduler.schedule(EventKind::TimerReload, 10);
        let fired = scheduler.tick(4);
        assert!(fired.is_empty());
        let fired = scheduler.tick(6);
        assert_eq!(fired, vec![EventKind::TimerReload]);
    }

    #[test]
    fn deschedule_cancels_pending_occurrence() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(EventKind::SerialBitTransfer, 5);
        scheduler.deschedule(EventKind::SerialBitTransfer);
        let fired = scheduler.tick(10);
        assert!(fired.is_empty());
        assert!(!scheduler.is_scheduled(EventKind::SerialBitTransfer));
    }

    #[test]
    fn do_next_jumps_tick_to_next_event() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(EventKind::ApuFrameSequencer, 100);
        let fired = scheduler.do_next();
        assert_eq!(fired, vec![EventKind::ApuFrameSequencer]);
        assert_eq!(scheduler.tick_count(), 100);
    }

    #[test]
    fn same_tick_events_fire_in_insertion_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(EventKind::PpuOamScanEnd, 5);
        scheduler.schedule(EventKind::PpuModeTransition, 5);
        let fired = scheduler.tick(5);
        assert_eq!(
            fired,
            vec![EventKind::PpuOamScanEnd, EventKind::PpuModeTransition]
        );
    }
}
