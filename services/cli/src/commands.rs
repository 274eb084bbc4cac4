use std::fs::File;
use std::io::Write;

use chrono::Local;
use safe_scan::assessment::{
    catalog, write_csv, AnswerValue, AssessmentDraft, AssessmentRecord, AssessmentRepository,
    AssessmentService, AssessmentStatus, DashboardSummary, Evaluation, PhotoRef,
    NO_CRITICAL_ISSUES, THRESHOLD_LEGEND,
};
use safe_scan::error::AppError;
use tracing::info;

use crate::cli::{AssessArgs, ClearArgs, DashboardArgs, ExportArgs};

pub(crate) fn run_checklist(out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "S.A.F.E. School Scan checklist ({} items)", catalog::items().len())?;
    for item in catalog::items() {
        let options: Vec<_> = item.domain.options().iter().map(AnswerValue::as_str).collect();
        writeln!(out, "- {:<14} {} [{}]", item.key, item.label, options.join(" / "))?;
        if let Some(help) = item.help {
            writeln!(out, "  {:<14} {}", "", help)?;
        }
    }
    Ok(())
}

pub(crate) fn run_assess<R: AssessmentRepository>(
    service: &AssessmentService<R>,
    args: AssessArgs,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let AssessArgs {
        school,
        room,
        assessor,
        answers,
        photos,
        notes,
        dry_run,
        json,
    } = args;

    let mut draft = AssessmentDraft::new();
    draft.school = school;
    draft.room = room;
    draft.assessor = assessor;
    draft.notes = notes;
    for (key, value) in answers {
        draft.set_answer(key, value);
    }
    for photo in photos {
        draft.attach_photo(PhotoRef(photo));
    }

    let evaluation = draft.evaluate();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&evaluation)?)?;
    } else {
        render_evaluation(&evaluation, out)?;
    }

    if dry_run {
        if !json {
            writeln!(out, "\nDry run: assessment not saved.")?;
        }
        return Ok(());
    }

    let record = service.save(&draft)?;
    if !json {
        writeln!(out, "\nAssessment saved to Dashboard ({})", record.id())?;
    }
    Ok(())
}

fn render_evaluation(evaluation: &Evaluation, out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "Risk score: {}", evaluation.total)?;
    writeln!(out, "{THRESHOLD_LEGEND}")?;
    writeln!(
        out,
        "Status: {} ({})",
        evaluation.status,
        evaluation.status.description()
    )?;

    if !evaluation.components.is_empty() {
        writeln!(out, "\nContributing items:")?;
        for component in &evaluation.components {
            writeln!(
                out,
                "  - {} = {} (+{})",
                component.label, component.value, component.points
            )?;
        }
    }

    writeln!(out, "\nAuto recommendations:")?;
    if evaluation.recommendations.is_empty() {
        writeln!(out, "  {NO_CRITICAL_ISSUES}")?;
    } else {
        for advice in &evaluation.recommendations {
            writeln!(out, "  - {advice}")?;
        }
    }
    Ok(())
}

pub(crate) fn run_dashboard<R: AssessmentRepository>(
    service: &AssessmentService<R>,
    args: DashboardArgs,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let records = service.dashboard(args.status);
    let summary = service.summary();

    if args.json {
        let body = serde_json::json!({ "summary": summary, "records": records });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        return Ok(());
    }

    writeln!(out, "Dashboard: saved assessments (filter {})", args.status)?;
    render_summary(&summary, out)?;

    if records.is_empty() {
        writeln!(out, "\nNo assessments yet. Run `assess` to create one.")?;
        return Ok(());
    }

    writeln!(
        out,
        "\n{:<17} {:<24} {:<14} {:<18} {:>5}  {:<7} {:>6}",
        "When", "School", "Room", "Assessor", "Score", "Status", "Photos"
    )?;
    for record in &records {
        render_row(record, out)?;
    }
    Ok(())
}

fn render_summary(summary: &DashboardSummary, out: &mut impl Write) -> Result<(), AppError> {
    let counts: Vec<_> = AssessmentStatus::ordered()
        .into_iter()
        .map(|status| format!("{} {}", summary.count(status), status))
        .collect();
    writeln!(out, "{} total | {}", summary.total, counts.join(" | "))?;
    Ok(())
}

fn render_row(record: &AssessmentRecord, out: &mut impl Write) -> Result<(), AppError> {
    let when = record
        .created_at()
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M");
    let photos = match record.photo_refs().len() {
        0 => "—".to_string(),
        count => count.to_string(),
    };
    writeln!(
        out,
        "{:<17} {:<24} {:<14} {:<18} {:>5}  {:<7} {:>6}",
        when.to_string(),
        record.school(),
        record.room(),
        record.assessor(),
        record.total(),
        record.status().label(),
        photos
    )?;
    Ok(())
}

pub(crate) fn run_export<R: AssessmentRepository>(
    service: &AssessmentService<R>,
    args: ExportArgs,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let records = service.dashboard(args.status);

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_csv(&records, file)?;
            info!(count = records.len(), path = %path.display(), "assessments exported");
        }
        None => {
            write_csv(&records, &mut *out)?;
            out.flush()?;
        }
    }
    Ok(())
}

pub(crate) fn run_clear<R: AssessmentRepository>(
    service: &AssessmentService<R>,
    args: ClearArgs,
    out: &mut impl Write,
) -> Result<(), AppError> {
    if !args.yes {
        return Err(AppError::Usage(
            "refusing to clear all saved assessments without --yes".to_string(),
        ));
    }

    let removed = service.summary().total;
    service.clear()?;
    writeln!(out, "Cleared {removed} saved assessment(s).")?;
    Ok(())
}
