//! Console and JSON output for the `rookery` binary.
//!
//! [`ColonyPrinter`] is a [`RoundObserver`] that writes the colony layout
//! for every state it sees. [`Report`] is the serializable end-of-run
//! document behind `ROOKERY_FORMAT=json`.

use std::io::Write;

use anyhow::{Context, Result};
use rookery_colony::{ColonyConfig, ColonyLayout};
use rookery_core::RoundId;
use rookery_engine::{EvolutionRun, RoundObserver, RoundOutcome, RunConfig, RunSummary, Trajectory};
use serde::Serialize;
use tracing::debug;

/// Writes the shuffled colony for the initial state and every round.
///
/// Observer callbacks cannot fail, so the first error is held and
/// surfaced by [`finish`](ColonyPrinter::finish); later frames are skipped.
pub struct ColonyPrinter<W: Write> {
    colony: ColonyConfig,
    out: W,
    error: Option<anyhow::Error>,
    frames: usize,
}

impl<W: Write> ColonyPrinter<W> {
    /// Print frames for `colony` into `out`.
    pub fn new(colony: ColonyConfig, out: W) -> Self {
        Self {
            colony,
            out,
            error: None,
            frames: 0,
        }
    }

    /// Number of frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Flush the writer and return it, or the first error encountered.
    pub fn finish(mut self) -> Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush().context("flushing colony output")?;
        Ok(self.out)
    }

    fn frame(&mut self, round: RoundId, proportion: f64) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_frame(round, proportion) {
            self.error = Some(e);
        }
    }

    fn write_frame(&mut self, round: RoundId, proportion: f64) -> Result<()> {
        let layout = ColonyLayout::for_round(proportion, &self.colony, round)
            .with_context(|| format!("laying out round {round}"))?;
        writeln!(
            self.out,
            "Round {round}: x = {proportion:.4} ({} jumpers, {} waiters)",
            layout.jumpers(),
            layout.waiters()
        )?;
        writeln!(self.out, "{layout}")?;
        writeln!(self.out)?;
        self.frames += 1;
        debug!(round = %round, frames = self.frames, "colony frame written");
        Ok(())
    }
}

impl<W: Write> RoundObserver for ColonyPrinter<W> {
    fn on_begin(&mut self, trajectory: &Trajectory) {
        let round = RoundId(trajectory.rounds());
        self.frame(round, trajectory.last());
    }

    fn on_round(&mut self, outcome: &RoundOutcome, _trajectory: &Trajectory) {
        self.frame(outcome.round, outcome.proportion);
    }
}

/// Everything a completed run produced, in serializable form.
#[derive(Clone, Debug, Serialize)]
pub struct Report<'a> {
    /// The run's configuration as supplied.
    pub config: &'a RunConfig,
    /// Jumper count of the final colony layout.
    pub final_jumpers: usize,
    /// Colony size the layout was drawn with.
    pub colony_size: usize,
    /// Every recorded proportion.
    pub trajectory: &'a Trajectory,
    /// Closing numbers.
    pub summary: &'a RunSummary,
}

impl<'a> Report<'a> {
    /// Assemble a report for a finished run.
    pub fn new(
        run: &'a EvolutionRun,
        summary: &'a RunSummary,
        colony: &ColonyConfig,
    ) -> Result<Self> {
        let layout = ColonyLayout::for_round(summary.final_proportion, colony, run.current_round())
            .context("laying out final colony")?;
        Ok(Self {
            config: run.config(),
            final_jumpers: layout.jumpers(),
            colony_size: layout.len(),
            trajectory: run.trajectory(),
            summary,
        })
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, self).context("serializing report")?;
        writeln!(out)?;
        Ok(())
    }

    /// Write the closing summary lines.
    pub fn write_text<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(
            out,
            "Jumpers in final colony: {} of {}",
            self.final_jumpers, self.colony_size
        )?;
        writeln!(out, "{}", self.summary)?;
        Ok(())
    }
}
