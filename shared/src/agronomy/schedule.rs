//! Seasonal fertilizer application timelines

use std::fmt::Write;

use crate::models::{
    ApplicationStage, FertilizerDosePlan, FullDose, Season, Share, StageKind,
};
use crate::types::round2;

const BASAL_DOSES: [FullDose; 4] = [
    FullDose::Phosphorus,
    FullDose::Potash,
    FullDose::Micronutrients,
    FullDose::Organics,
];

fn basal(timing: &str, nitrogen_share: Share) -> ApplicationStage {
    ApplicationStage {
        stage: StageKind::BasalDose,
        timing: timing.to_string(),
        nitrogen_share,
        remaining_nitrogen: false,
        full_doses: BASAL_DOSES.to_vec(),
    }
}

fn top_dress(
    stage: StageKind,
    timing: &str,
    nitrogen_share: Share,
    remaining_nitrogen: bool,
) -> ApplicationStage {
    ApplicationStage {
        stage,
        timing: timing.to_string(),
        nitrogen_share,
        remaining_nitrogen,
        full_doses: Vec::new(),
    }
}

/// Application stages for a season, in the order they are applied
pub fn application_schedule(season: Season) -> Vec<ApplicationStage> {
    match season {
        Season::Kharif => vec![
            basal("Apply before sowing (June)", Share::new(1, 3)),
            top_dress(
                StageKind::FirstTopDress,
                "Apply 30 days after sowing (July)",
                Share::new(1, 3),
                false,
            ),
            top_dress(
                StageKind::SecondTopDress,
                "Apply 60 days after sowing (August)",
                Share::new(1, 3),
                true,
            ),
        ],
        Season::Rabi => vec![
            basal("Apply before sowing (November)", Share::new(1, 2)),
            top_dress(
                StageKind::FirstTopDress,
                "Apply with first irrigation (December)",
                Share::new(1, 4),
                false,
            ),
            top_dress(
                StageKind::SecondTopDress,
                "Apply with second irrigation (January)",
                Share::new(1, 4),
                true,
            ),
        ],
        Season::Zaid => vec![
            basal("Apply before sowing (March)", Share::new(1, 2)),
            top_dress(
                StageKind::FirstTopDress,
                "Apply 30 days after sowing (April)",
                Share::new(1, 2),
                true,
            ),
        ],
    }
}

/// Render stages as plain text for storage alongside a plan.
///
/// Product totals are quoted for the reader; the stage shares are not
/// applied to them.
pub fn render_schedule(stages: &[ApplicationStage], plan: &FertilizerDosePlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Fertilizer application schedule: {} ({})",
        plan.crop_name, plan.season
    );
    let _ = writeln!(
        out,
        "Totals: Urea {} kg, DAP {} kg, MOP {} kg",
        round2(plan.products.urea_kg),
        round2(plan.products.dap_kg),
        round2(plan.products.mop_kg)
    );

    for stage in stages {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}] {}", stage.stage.as_str(), stage.timing);
        for line in stage.instructions() {
            let _ = writeln!(out, "  - {}", line);
        }
    }

    out
}
