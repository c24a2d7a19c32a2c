use std::{sync::Arc, time::Duration};

use shared::domain::{Section, SequenceStep};
use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{sleep_until, Instant},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    /// Offset from page load.
    pub at: Duration,
    pub step: SequenceStep,
    pub scroll_to: Option<Section>,
}

pub const LOAD_CUES: [Cue; 4] = [
    Cue {
        at: Duration::from_millis(500),
        step: SequenceStep::Title,
        scroll_to: None,
    },
    Cue {
        at: Duration::from_millis(3000),
        step: SequenceStep::Tagline,
        scroll_to: None,
    },
    Cue {
        at: Duration::from_millis(8000),
        step: SequenceStep::ScrollHint,
        scroll_to: Some(Section::Inquiry),
    },
    Cue {
        at: Duration::from_millis(12000),
        step: SequenceStep::Finale,
        scroll_to: Some(Section::Inquire),
    },
];

/// Reveal step at `elapsed` since load.
pub fn step_at(elapsed: Duration) -> SequenceStep {
    LOAD_CUES
        .iter()
        .rev()
        .find(|cue| elapsed >= cue.at)
        .map(|cue| cue.step)
        .unwrap_or_default()
}

/// Pending load cues. Dropping the set cancels whatever has not fired.
#[derive(Debug, Default)]
pub struct TimerSet {
    handles: Vec<JoinHandle<()>>,
}

impl TimerSet {
    pub fn cancel(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub struct Sequencer;

impl Sequencer {
    /// Schedules every load cue against one load instant.
    pub fn start<F>(runtime: &Handle, on_cue: F) -> TimerSet
    where
        F: Fn(Cue) + Send + Sync + 'static,
    {
        let loaded_at = Instant::now();
        let on_cue = Arc::new(on_cue);
        let handles = LOAD_CUES
            .iter()
            .copied()
            .map(|cue| {
                let on_cue = Arc::clone(&on_cue);
                runtime.spawn(async move {
                    sleep_until(loaded_at + cue.at).await;
                    tracing::debug!(step = cue.step.ordinal(), "reveal cue fired");
                    on_cue(cue);
                })
            })
            .collect();
        TimerSet { handles }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn step_follows_schedule_boundaries() {
        let ms = Duration::from_millis;
        assert_eq!(step_at(ms(0)), SequenceStep::Blank);
        assert_eq!(step_at(ms(499)), SequenceStep::Blank);
        assert_eq!(step_at(ms(500)), SequenceStep::Title);
        assert_eq!(step_at(ms(2999)), SequenceStep::Title);
        assert_eq!(step_at(ms(3000)), SequenceStep::Tagline);
        assert_eq!(step_at(ms(7999)), SequenceStep::Tagline);
        assert_eq!(step_at(ms(8000)), SequenceStep::ScrollHint);
        assert_eq!(step_at(ms(11999)), SequenceStep::ScrollHint);
        assert_eq!(step_at(ms(12000)), SequenceStep::Finale);
        assert_eq!(step_at(ms(600_000)), SequenceStep::Finale);
    }

    #[test]
    fn only_the_last_two_cues_scroll() {
        let scrolls: Vec<_> = LOAD_CUES.iter().filter_map(|c| c.scroll_to).collect();
        assert_eq!(scrolls, vec![Section::Inquiry, Section::Inquire]);
    }

    #[tokio::test(start_paused = true)]
    async fn cues_fire_in_order_at_their_offsets() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let loaded_at = Instant::now();
        let sink = Arc::clone(&fired);
        let timers = Sequencer::start(&Handle::current(), move |cue| {
            sink.lock().expect("fired lock").push((loaded_at.elapsed(), cue));
        });
        assert_eq!(timers.pending(), 4);

        tokio::time::sleep(Duration::from_millis(12_500)).await;

        let fired = fired.lock().expect("fired lock");
        let offsets: Vec<_> = fired.iter().map(|(elapsed, _)| *elapsed).collect();
        assert_eq!(offsets, LOAD_CUES.iter().map(|c| c.at).collect::<Vec<_>>());
        let steps: Vec<_> = fired.iter().map(|(_, cue)| cue.step.ordinal()).collect();
        assert_eq!(steps, vec![1, 2, 3, 4]);
        assert_eq!(timers.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_timer_set_cancels_pending_cues() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let timers = Sequencer::start(&Handle::current(), move |cue| {
            sink.lock().expect("fired lock").push(cue.step);
        });

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        drop(timers);
        tokio::time::sleep(Duration::from_millis(20_000)).await;

        assert_eq!(
            *fired.lock().expect("fired lock"),
            vec![SequenceStep::Title, SequenceStep::Tagline]
        );
    }
}
