//! Reward Distribution Processor
//!
//! The concrete rule processor wiring the whole computation: partition the
//! drained document graph, validate every mass document, then run the
//! adjustment/expansion/aggregation pipeline. Stateless and reentrant:
//! everything is request-scoped, so concurrent requests need no
//! coordination.

use super::{ProcessorResponse, RuleProcessor};
use crate::aggregate::{aggregate_certificate, group_by_mass};
use crate::distribution::{expand_rewards, math, AdjustmentEngine};
use crate::error::{RewardError, RewardResult};
use crate::graph::{partition, DocumentSource, GraphDocument};
use crate::roster::ActorRoster;
use crate::table::{DistributionTable, TableRegistry};
use crate::types::{MassDocument, MethodologyDocument, RewardDistributionOutput};
use rust_decimal::Decimal;

/// One mass document, validated and ready to evaluate
#[derive(Clone, Debug)]
pub struct PreparedMass {
    pub document: MassDocument,
    pub roster: ActorRoster,
    pub table: DistributionTable,
}

/// Validated request: every precondition checked, evaluation cannot fail
#[derive(Clone, Debug)]
pub struct EvaluableCertificate {
    pub masses: Vec<PreparedMass>,
    pub methodology: MethodologyDocument,
    pub total_weight: Decimal,
}

/// Reward distribution engine, exposed as a rule processor
pub struct RewardDistributionProcessor {
    registry: TableRegistry,
    engine: AdjustmentEngine,
}

impl RewardDistributionProcessor {
    /// Processor with the default v1 distribution tables
    pub fn new() -> Self {
        Self {
            registry: TableRegistry::with_default_v1(),
            engine: AdjustmentEngine::new(),
        }
    }

    /// Processor over a custom table registry
    pub fn with_registry(registry: TableRegistry) -> Self {
        Self {
            registry,
            engine: AdjustmentEngine::new(),
        }
    }

    /// Fetch the document graph for a root id and process it
    pub fn run(
        &self,
        source: &dyn DocumentSource,
        root_id: &str,
    ) -> ProcessorResponse<RewardDistributionOutput> {
        match source.fetch(root_id) {
            Ok(documents) => self.process(documents),
            Err(err) => ProcessorResponse::Rejected {
                result_comment: err.to_string(),
            },
        }
    }
}

impl RuleProcessor for RewardDistributionProcessor {
    type Input = Vec<GraphDocument>;
    type Subject = EvaluableCertificate;
    type Output = RewardDistributionOutput;

    fn validate(&self, documents: Vec<GraphDocument>) -> RewardResult<EvaluableCertificate> {
        let batch = partition(documents)?;

        let total_weight: Decimal = batch.mass_documents.iter().map(|m| m.weight).sum();
        if total_weight <= Decimal::ZERO {
            return Err(RewardError::NonPositiveTotalWeight {
                weight: total_weight.to_string(),
            });
        }

        let mut masses = Vec::with_capacity(batch.mass_documents.len());
        for document in batch.mass_documents {
            let roster = ActorRoster::extract(&document)?;
            roster.guard_required_roles(&document)?;
            let table = self.registry.resolve(&document)?.clone();
            masses.push(PreparedMass {
                document,
                roster,
                table,
            });
        }

        tracing::debug!(
            masses = masses.len(),
            total_weight = %total_weight,
            tables_version = self.registry.version(),
            "validated reward distribution request"
        );

        Ok(EvaluableCertificate {
            masses,
            methodology: batch.methodology,
            total_weight,
        })
    }

    fn evaluate(&self, subject: EvaluableCertificate) -> RewardDistributionOutput {
        let mut rewards = Vec::new();

        for prepared in &subject.masses {
            let shares = self.engine.role_shares(&prepared.table, &prepared.roster);
            let weight_fraction = math::div(prepared.document.weight, subject.total_weight);
            rewards.extend(expand_rewards(
                &prepared.document,
                &shares,
                &prepared.roster,
                &subject.methodology,
                weight_fraction,
            ));
        }

        let output = RewardDistributionOutput {
            certificate_rewards: aggregate_certificate(&rewards),
            mass_rewards: group_by_mass(&rewards),
        };

        tracing::info!(
            certificate_rewards = output.certificate_rewards.len(),
            mass_rewards = output.mass_rewards.len(),
            "reward distribution computed"
        );

        output
    }
}

impl Default for RewardDistributionProcessor {
    fn default() -> Self {
        Self::new()
    }
}
