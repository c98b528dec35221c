//! # Confirmation Toast Timeline
//!
//! After a successful submission a centered message box and a dimming overlay
//! fade in, stay for a dwell period, fade out and are removed. The sequence is
//! an explicit state machine, [`ToastTimeline`], driven by one scheduling seam
//! ([`Scheduler`]) so it runs without wall-clock delays in tests:
//!
//! ```text
//! Showing --next frame--> Holding --dwell--> Fading --fade--> Removed
//! opacity 0               opacity 1          opacity 0        elements gone
//! ```
//!
//! The elements are created at opacity 0 and only raised to 1 on the next
//! animation frame, so the browser sees the change and runs the CSS
//! transition.

use async_trait::async_trait;

use crate::error::Result;

/// Durations of the toast sequence, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimings {
    pub dwell_ms: u32,
    pub fade_ms: u32,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            dwell_ms: 3000,
            fade_ms: 300,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted, still transparent.
    Showing,
    /// Fully visible.
    Holding,
    /// Transparent again, waiting for the transition to finish.
    Fading,
    /// Elements removed from the page.
    Removed,
}

/// What the timeline waits for before its next transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wait {
    NextFrame,
    Millis(u32),
}

#[derive(Clone, Copy, Debug)]
pub struct ToastTimeline {
    phase: ToastPhase,
    timings: ToastTimings,
}

impl ToastTimeline {
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            phase: ToastPhase::Showing,
            timings,
        }
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Opacity the elements should have in the current phase.
    pub fn opacity(&self) -> f64 {
        match self.phase {
            ToastPhase::Holding => 1.0,
            ToastPhase::Showing | ToastPhase::Fading | ToastPhase::Removed => 0.0,
        }
    }

    /// The wait that precedes the next transition, `None` once removed.
    pub fn pending_wait(&self) -> Option<Wait> {
        match self.phase {
            ToastPhase::Showing => Some(Wait::NextFrame),
            ToastPhase::Holding => Some(Wait::Millis(self.timings.dwell_ms)),
            ToastPhase::Fading => Some(Wait::Millis(self.timings.fade_ms)),
            ToastPhase::Removed => None,
        }
    }

    /// Move to the next phase. `Removed` is terminal.
    pub fn advance(&mut self) -> ToastPhase {
        self.phase = match self.phase {
            ToastPhase::Showing => ToastPhase::Holding,
            ToastPhase::Holding => ToastPhase::Fading,
            ToastPhase::Fading | ToastPhase::Removed => ToastPhase::Removed,
        };
        self.phase
    }
}

/// Deferred execution: the next animation frame or a delay.
#[async_trait(?Send)]
pub trait Scheduler {
    async fn wait(&self, wait: Wait);
}

/// The overlay and message box the toast renders into.
pub trait ToastSurface {
    /// Create the elements, transparent, showing `message`.
    fn mount(&self, message: &str) -> Result<()>;

    fn set_opacity(&self, opacity: f64);

    /// Remove the elements from the page.
    fn remove(&self);
}

/// Run a toast from mount to removal.
pub async fn run_toast<S, C>(surface: &S, scheduler: &C, timings: ToastTimings, message: &str) -> Result<()>
where
    S: ToastSurface + ?Sized,
    C: Scheduler + ?Sized,
{
    let mut timeline = ToastTimeline::new(timings);
    surface.mount(message)?;
    surface.set_opacity(timeline.opacity());

    while let Some(wait) = timeline.pending_wait() {
        scheduler.wait(wait).await;
        match timeline.advance() {
            ToastPhase::Removed => surface.remove(),
            phase => {
                tracing::trace!("Toast phase {:?}", phase);
                surface.set_opacity(timeline.opacity());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingScheduler, RecordingToast, ToastEvent};

    #[test]
    fn test_timeline_sequence() {
        let mut timeline = ToastTimeline::new(ToastTimings::default());
        assert_eq!(timeline.phase(), ToastPhase::Showing);
        assert_eq!(timeline.opacity(), 0.0);
        assert_eq!(timeline.pending_wait(), Some(Wait::NextFrame));

        assert_eq!(timeline.advance(), ToastPhase::Holding);
        assert_eq!(timeline.opacity(), 1.0);
        assert_eq!(timeline.pending_wait(), Some(Wait::Millis(3000)));

        assert_eq!(timeline.advance(), ToastPhase::Fading);
        assert_eq!(timeline.opacity(), 0.0);
        assert_eq!(timeline.pending_wait(), Some(Wait::Millis(300)));

        assert_eq!(timeline.advance(), ToastPhase::Removed);
        assert_eq!(timeline.pending_wait(), None);
        assert_eq!(timeline.advance(), ToastPhase::Removed);
    }

    #[tokio::test]
    async fn test_run_toast_drives_surface() {
        let surface = RecordingToast::default();
        let scheduler = RecordingScheduler::default();

        run_toast(&surface, &scheduler, ToastTimings::default(), "Message sent successfully!")
            .await
            .unwrap();

        assert_eq!(
            scheduler.waits(),
            vec![Wait::NextFrame, Wait::Millis(3000), Wait::Millis(300)]
        );
        assert_eq!(
            surface.events(),
            vec![
                ToastEvent::Mounted("Message sent successfully!".to_string()),
                ToastEvent::Opacity(0.0),
                ToastEvent::Opacity(1.0),
                ToastEvent::Opacity(0.0),
                ToastEvent::Removed,
            ]
        );
        assert!(!surface.is_mounted());
    }

    #[tokio::test]
    async fn test_run_toast_uses_custom_timings() {
        let surface = RecordingToast::default();
        let scheduler = RecordingScheduler::default();
        let timings = ToastTimings { dwell_ms: 5000, fade_ms: 150 };

        run_toast(&surface, &scheduler, timings, "Thanks!").await.unwrap();

        assert_eq!(scheduler.waits()[1..], [Wait::Millis(5000), Wait::Millis(150)]);
    }

    #[tokio::test]
    async fn test_mount_failure_skips_timeline() {
        let surface = RecordingToast::failing();
        let scheduler = RecordingScheduler::default();

        let result = run_toast(&surface, &scheduler, ToastTimings::default(), "hi").await;

        assert!(result.is_err());
        assert!(scheduler.waits().is_empty());
    }
}
