//! Command emission state machine
use hifitime::{Duration, Epoch};
use log::{debug, info, warn};

use crate::catalog::Source;
use crate::cfg::Config;
use crate::command::{Command, CommandRecord};
use crate::error::MalformedScheduleError;
use crate::grid::TimeGrid;
use crate::schedule::Schedule;

/// Instrument power / pointing state.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
enum State {
    /// Instrument off, parked
    #[default]
    Idle,
    /// Pointing at the given catalog index
    Observing(usize),
}

/// Walks a [Schedule] in time order and emits the minimal command stream
/// describing instrument power state and current target: one STARTUP ahead
/// of the first observed bin, one OBSERVING per target change, SHUTDOWN on
/// idle gaps, and a forced SHUTDOWN one bin width past the end of the night.
#[derive(Debug, Clone)]
pub struct Emitter {
    cfg: Config,
}

impl Emitter {
    /// Builds a new [Emitter] using given configuration settings.
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// One transition of the state machine: prior state and tie-broken
    /// target for this bin, to new state and the records the bin emits.
    fn step(
        &self,
        state: State,
        selected: Option<usize>,
        epoch: Epoch,
        catalog: &[Source],
    ) -> (State, Vec<CommandRecord>) {
        match (state, selected) {
            (State::Idle, Some(next)) => {
                let startup = epoch - self.cfg.startup_lead;
                debug!("{:?} - starting up (first observation {:?})", startup, epoch);
                (
                    State::Observing(next),
                    vec![
                        CommandRecord::new(startup, Command::Startup),
                        self.observing(epoch, next, catalog),
                    ],
                )
            },
            (State::Observing(current), Some(next)) if next == current => {
                // same target as previous bin: coalesced, no record
                (state, vec![])
            },
            (State::Observing(_), Some(next)) => {
                // target switch, no power cycle
                (State::Observing(next), vec![self.observing(epoch, next, catalog)])
            },
            (State::Observing(_), None) => {
                debug!("{:?} - nothing observable, shutting down", epoch);
                (State::Idle, vec![CommandRecord::new(epoch, Command::Shutdown)])
            },
            (State::Idle, None) => (state, vec![]),
        }
    }

    fn observing(&self, epoch: Epoch, index: usize, catalog: &[Source]) -> CommandRecord {
        let source = &catalog[index];
        debug!("{:?} - pointing at {}", epoch, source.name);
        CommandRecord::new(
            epoch,
            Command::Observing {
                source: source.name.clone(),
                ra_rad: source.ra_rad,
                dec_rad: source.dec_rad,
            },
        )
    }

    /// Emits the command stream for one night. The schedule shape must
    /// match the catalog (rows) and the time grid (columns); mismatches
    /// abort before any record is produced.
    pub fn emit(
        &self,
        schedule: &Schedule,
        catalog: &[Source],
        grid: &TimeGrid,
    ) -> Result<Vec<CommandRecord>, MalformedScheduleError> {
        if schedule.num_sources() != catalog.len() {
            return Err(MalformedScheduleError::SourceCountMismatch {
                schedule: schedule.num_sources(),
                catalog: catalog.len(),
            });
        }
        if schedule.num_bins() != grid.len() {
            return Err(MalformedScheduleError::TimeBinMismatch {
                schedule: schedule.num_bins(),
                grid: grid.len(),
            });
        }

        let lead = self.cfg.startup_lead;
        if lead <= Duration::ZERO || lead >= grid.bin_width() {
            warn!(
                "startup lead {} outside (0, {}): strict command ordering not guaranteed",
                lead,
                grid.bin_width()
            );
        }

        let mut state = State::default();
        let mut records = Vec::new();

        for (t, epoch) in grid.iter().enumerate() {
            let (next, emitted) = self.step(state, schedule.selected(t), *epoch, catalog);
            records.extend(emitted);
            state = next;
        }

        // whatever state the night ended in, the stream closes with a
        // shutdown one bin width past the last bin
        records.push(CommandRecord::new(grid.closing_epoch(), Command::Shutdown));

        info!("{} commands over {} bins", records.len(), grid.len());
        Ok(records)
    }
}
