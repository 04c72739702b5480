//! Optional audit trail of simulation requests.
//!
//! The engine never emits events itself. Callers that want a snapshot of a
//! run build a [`SimulationEvent`] and hand it to [`report`], which logs and
//! swallows sink failures so the simulation result is never affected.

use serde::{Deserialize, Serialize};

/// Which entry point produced the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SimulationKind {
    Amortization,
    Investment,
    Comparison,
}

/// Full input and output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationEvent {
    pub kind: SimulationKind,
    pub input: serde_json::Value,
    /// `null` when the engine declined to compute.
    pub output: serde_json::Value,
}

impl SimulationEvent {
    pub fn new<I: Serialize, O: Serialize>(kind: SimulationKind, input: &I, output: &O) -> anyhow::Result<Self> {
        Ok(Self {
            kind,
            input: serde_json::to_value(input)?,
            output: serde_json::to_value(output)?,
        })
    }
}

/// Destination for simulation snapshots (analytics, audit log, queue...).
pub trait AuditSink {
    fn emit(&self, event: &SimulationEvent) -> anyhow::Result<()>;
}

/// Writes each event as a JSON line through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AuditSink for LogSink {
    fn emit(&self, event: &SimulationEvent) -> anyhow::Result<()> {
        log::info!(target: "br_investment::audit", "{}", serde_json::to_string(event)?);
        Ok(())
    }
}

/// Fire-and-forget: a failing sink is logged, never propagated.
pub fn report(sink: &dyn AuditSink, event: &SimulationEvent) {
    if let Err(err) = sink.emit(event) {
        log::warn!("Failed to emit {:?} simulation event: {:#}", event.kind, err);
    }
}
