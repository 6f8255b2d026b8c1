//! Tooltip / selection state machine.

use std::time::Duration;

use bevy_math::Vec2;

use super::{
    TOOLTIP_GAP, TOOLTIP_HEIGHT, TOOLTIP_MIN_SCALE, TOOLTIP_MIN_TOP, TOOLTIP_WIDTH,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipState {
    Hidden,
    /// Visible or fading in; `progress` runs 0 -> 1
    Showing { index: usize, anchor: Vec2, progress: f32 },
    /// Fading out; selection is kept until `progress` reaches 0
    Hiding { index: usize, anchor: Vec2, progress: f32 },
}

#[derive(Clone, Debug)]
pub struct TooltipMachine {
    state: TooltipState,
    duration: Duration,
}

impl TooltipMachine {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: TooltipState::Hidden,
            duration,
        }
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            TooltipState::Hidden => None,
            TooltipState::Showing { index, .. } | TooltipState::Hiding { index, .. } => Some(index),
        }
    }

    /// Select `index`. An already visible tooltip is replaced in place and
    /// keeps its current fade progress.
    pub fn show(&mut self, index: usize, anchor: Vec2) {
        let progress = match self.state {
            TooltipState::Hidden => 0.0,
            TooltipState::Showing { progress, .. } | TooltipState::Hiding { progress, .. } => {
                progress
            }
        };
        self.state = TooltipState::Showing {
            index,
            anchor,
            progress,
        };
    }

    /// Start the fade-out. Returns true if a tooltip was showing.
    pub fn hide(&mut self) -> bool {
        match self.state {
            TooltipState::Showing {
                index,
                anchor,
                progress,
            } => {
                self.state = TooltipState::Hiding {
                    index,
                    anchor,
                    progress,
                };
                true
            }
            _ => false,
        }
    }

    /// Drop the selection immediately, skipping the fade
    pub fn clear(&mut self) {
        self.state = TooltipState::Hidden;
    }

    /// Hide without animating if the selection no longer exists.
    /// Returns true if it had to.
    pub fn drop_if_stale(&mut self, bar_count: usize) -> bool {
        match self.selected_index() {
            Some(index) if index >= bar_count => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        let step = if self.duration.is_zero() {
            1.0
        } else {
            dt.as_secs_f32() / self.duration.as_secs_f32()
        };

        self.state = match self.state {
            TooltipState::Showing {
                index,
                anchor,
                progress,
            } => TooltipState::Showing {
                index,
                anchor,
                progress: (progress + step).min(1.0),
            },
            TooltipState::Hiding {
                index,
                anchor,
                progress,
            } => {
                let progress = progress - step;
                if progress <= 0.0 {
                    TooltipState::Hidden
                } else {
                    TooltipState::Hiding {
                        index,
                        anchor,
                        progress,
                    }
                }
            }
            TooltipState::Hidden => TooltipState::Hidden,
        };
    }
}

/// Opacity and scale for a given fade progress
pub fn pop(progress: f32) -> (f32, f32) {
    let t = progress.clamp(0.0, 1.0);
    (t, TOOLTIP_MIN_SCALE + (1.0 - TOOLTIP_MIN_SCALE) * t)
}

/// Top-left corner of the tooltip box in container space. It is centered
/// over the anchor, kept inside the padded container horizontally and never
/// placed above `TOOLTIP_MIN_TOP`.
pub fn place_tooltip(anchor: Vec2, container_width: f32, padding: f32) -> Vec2 {
    let max_left = container_width - TOOLTIP_WIDTH - padding;
    // Narrow containers: the left padding wins over the right bound
    let left = (anchor.x - TOOLTIP_WIDTH * 0.5).min(max_left).max(padding);
    let top = (anchor.y - TOOLTIP_HEIGHT - TOOLTIP_GAP).max(TOOLTIP_MIN_TOP);
    Vec2::new(left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> TooltipMachine {
        TooltipMachine::new(Duration::from_millis(150))
    }

    #[test]
    fn show_then_hide_after_fade() {
        let mut m = machine();
        m.show(1, Vec2::new(100.0, 80.0));
        m.tick(Duration::from_millis(200));
        assert!(matches!(
            m.state(),
            TooltipState::Showing { index: 1, progress, .. } if progress == 1.0
        ));

        assert!(m.hide());
        assert_eq!(m.selected_index(), Some(1));
        m.tick(Duration::from_millis(100));
        assert_eq!(m.selected_index(), Some(1));
        m.tick(Duration::from_millis(100));
        assert_eq!(m.state(), TooltipState::Hidden);
        assert_eq!(m.selected_index(), None);
    }

    #[test]
    fn new_selection_replaces_without_hiding() {
        let mut m = machine();
        m.show(1, Vec2::ZERO);
        m.tick(Duration::from_millis(300));
        m.show(4, Vec2::new(10.0, 10.0));
        match m.state() {
            TooltipState::Showing {
                index, progress, ..
            } => {
                assert_eq!(index, 4);
                assert_eq!(progress, 1.0);
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn press_while_hiding_resumes_from_current_fade() {
        let mut m = machine();
        m.show(0, Vec2::ZERO);
        m.tick(Duration::from_millis(150));
        m.hide();
        m.tick(Duration::from_millis(75));
        m.show(2, Vec2::ZERO);
        match m.state() {
            TooltipState::Showing { index, progress, .. } => {
                assert_eq!(index, 2);
                assert!(progress > 0.0 && progress < 1.0);
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn hide_when_hidden_is_noop() {
        let mut m = machine();
        assert!(!m.hide());
        assert_eq!(m.state(), TooltipState::Hidden);
    }

    #[test]
    fn stale_selection_is_dropped() {
        let mut m = machine();
        m.show(5, Vec2::ZERO);
        assert!(!m.drop_if_stale(6));
        assert!(m.drop_if_stale(3));
        assert_eq!(m.state(), TooltipState::Hidden);
    }

    #[test]
    fn pop_scales_from_point_eight() {
        assert_eq!(pop(0.0), (0.0, 0.8));
        assert_eq!(pop(1.0), (1.0, 1.0));
    }

    #[test]
    fn placement_clamps_right_edge() {
        let pos = place_tooltip(Vec2::new(310.0, 120.0), 320.0, 16.0);
        assert!(pos.x <= 320.0 - TOOLTIP_WIDTH - 16.0);
        assert_eq!(pos.x, 144.0);
    }

    #[test]
    fn placement_clamps_left_edge_and_top() {
        let pos = place_tooltip(Vec2::new(5.0, 10.0), 320.0, 16.0);
        assert_eq!(pos.x, 16.0);
        assert_eq!(pos.y, TOOLTIP_MIN_TOP);
    }

    #[test]
    fn placement_sits_above_anchor() {
        let pos = place_tooltip(Vec2::new(160.0, 200.0), 320.0, 16.0);
        assert_eq!(pos.x, 160.0 - TOOLTIP_WIDTH * 0.5);
        assert_eq!(pos.y, 200.0 - TOOLTIP_HEIGHT - TOOLTIP_GAP);
    }

    #[test]
    fn narrow_container_keeps_left_padding() {
        let pos = place_tooltip(Vec2::new(60.0, 200.0), 120.0, 16.0);
        assert_eq!(pos.x, 16.0);
    }
}
