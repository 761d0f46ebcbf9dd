//! Runs one round against the input and display collaborators.

use rand::{CryptoRng, RngCore};
use tracing::info;

use super::{FairValueProtocol, Reveal, RoundEvent, RoundKind};
use crate::collaborator::{Contribution, ContributionRequest, ContributionSource, Reporter};
use crate::crypto::SecureRandom;
use crate::error::Result;

/// How a driven round ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Contribution combined, reveal verified
    Completed(Reveal),
    /// Counterparty asked for help; nothing was combined
    HelpRequested,
    /// Counterparty asked to end the session
    ExitRequested,
}

/// Play one round of `kind`.
///
/// The commitment is reported before the contribution is requested, and
/// the reveal is verified before it is reported. A rejected contribution
/// or a failed verification is reported as `Aborted` and returned as an
/// error.
pub fn play_round<R, C, P>(
    rng: &mut SecureRandom<R>,
    kind: RoundKind,
    input: &mut C,
    reporter: &mut P,
) -> Result<RoundOutcome>
where
    R: RngCore + CryptoRng,
    C: ContributionSource + ?Sized,
    P: Reporter + ?Sized,
{
    let round = FairValueProtocol::start(rng, kind.modulus())?;
    let round_id = round.id();
    reporter.report(&RoundEvent::Started { round_id, kind });

    let (tag, round) = round.publish();
    reporter.report(&RoundEvent::CommitmentPublished {
        round_id,
        kind,
        tag,
    });

    let request = ContributionRequest {
        round_id,
        kind,
        modulus: round.modulus(),
    };
    let value = match input.contribution(&request) {
        Contribution::Value(value) => value,
        Contribution::Help => {
            reporter.report(&RoundEvent::Aborted { round_id });
            return Ok(RoundOutcome::HelpRequested);
        }
        Contribution::Exit => {
            reporter.report(&RoundEvent::Aborted { round_id });
            return Ok(RoundOutcome::ExitRequested);
        }
    };

    let round = match round.contribute(value) {
        Ok(round) => round,
        Err(err) => {
            reporter.report(&RoundEvent::Aborted { round_id });
            return Err(err);
        }
    };
    reporter.report(&RoundEvent::ContributionReceived { round_id, value });

    let reveal = round.reveal();
    if let Err(err) = reveal.verify() {
        reporter.report(&RoundEvent::Aborted { round_id });
        return Err(err);
    }
    info!(round = %round_id, %kind, result = reveal.result, "round completed");
    reporter.report(&RoundEvent::Revealed {
        kind,
        reveal: reveal.clone(),
    });

    Ok(RoundOutcome::Completed(reveal))
}
