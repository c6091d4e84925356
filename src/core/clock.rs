//! Core domain: simulation clock and fixed logical tick.

use bevy::prelude::*;

/// Monotonic simulation time in milliseconds since startup.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SimClock {
    now_ms: f64,
}

impl SimClock {
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Time only moves forward.
    pub fn set_now_ms(&mut self, now_ms: f64) {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
    }
}

/// Frame-time accumulator that releases at most one logical tick per frame.
///
/// Leftover time carries into the next frame. The carried backlog is capped
/// at `max_backlog` ticks so a long stall cannot queue up a burst of ticks.
#[derive(Resource, Debug, Clone)]
pub struct FixedTick {
    tick_ms: f64,
    max_backlog: u32,
    accumulated_ms: f64,
    ready: bool,
    count: u64,
}

impl Default for FixedTick {
    fn default() -> Self {
        Self::new(60.0, 4)
    }
}

impl FixedTick {
    pub fn new(rate_hz: f64, max_backlog: u32) -> Self {
        let rate_hz = if rate_hz.is_finite() && rate_hz > 0.0 {
            rate_hz
        } else {
            60.0
        };
        Self {
            tick_ms: 1000.0 / rate_hz,
            max_backlog: max_backlog.max(1),
            accumulated_ms: 0.0,
            ready: false,
            count: 0,
        }
    }

    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    /// Whether the current frame runs a logical tick.
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Ticks fired since startup.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn accumulated_ms(&self) -> f64 {
        self.accumulated_ms
    }

    /// Feed one frame's wall-clock delta. Returns whether a tick fires.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.accumulated_ms += delta_ms;
        }

        self.ready = self.accumulated_ms > self.tick_ms;
        if self.ready {
            self.accumulated_ms = (self.accumulated_ms - self.tick_ms)
                .min(self.tick_ms * f64::from(self.max_backlog));
            self.count += 1;
        }
        self.ready
    }
}

pub(crate) fn advance_clock(
    time: Res<Time>,
    mut clock: ResMut<SimClock>,
    mut tick: ResMut<FixedTick>,
) {
    clock.set_now_ms(time.elapsed_secs_f64() * 1000.0);
    tick.advance(time.delta_secs_f64() * 1000.0);
}

/// Run condition: true on frames that carry a logical tick.
pub fn tick_ready(tick: Res<FixedTick>) -> bool {
    tick.ready()
}
