use roll_core::entities::AttendanceDecision;

use crate::cli::root_commands::DecisionArgs;

/// Turn `--present`/`--absent [--reason] [--note]` into a stored decision.
///
/// The reason must be one of the stored category names exactly.
pub fn decision_from_args(args: &DecisionArgs) -> anyhow::Result<AttendanceDecision> {
    Ok(AttendanceDecision::parse(
        args.attended(),
        args.reason.as_deref(),
        args.note.as_deref(),
    )?)
}
