use crate::infra::{load_profile, matching_engine, InMemoryAssessmentRepository};
use clap::{Args, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use youlement::assessment::{
    write_matches_csv, ArchetypeDefinition, AssessmentId, AssessmentProfile, AssessmentService,
    CareerPath, DreamJobVision, FiveWhyProblem, KeywordMatcher, LifeArea, ProfileSummary,
    RankedArchetype, ScoringWeights,
};
use youlement::config::{AppConfig, MatchingConfig};
use youlement::error::AppError;

const DEMO_ASSESSMENT_ID: &str = "demo";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Assessment profile in JSON (camelCase fields)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Number of archetypes to show; 0 shows all. Defaults to APP_MATCH_LIMIT.
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Keyword matching mode (containment or whole-word). Defaults to APP_MATCH_MODE.
    #[arg(long, value_parser = crate::infra::parse_matcher)]
    pub(crate) matcher: Option<KeywordMatcher>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ArchetypesArgs {
    /// Show a single archetype with its career paths
    #[arg(long)]
    pub(crate) id: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct SummaryArgs {
    /// Assessment profile in JSON (camelCase fields)
    #[arg(long)]
    pub(crate) profile: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of archetypes to show; 0 shows all. Defaults to APP_MATCH_LIMIT.
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        profile,
        limit,
        format,
        matcher,
    } = args;

    let mut matching = AppConfig::load()?.matching;
    if let Some(matcher) = matcher {
        matching.mode = matcher;
    }

    let profile = load_profile(&profile)?;
    let service = assessment_service(&matching)?;
    let ranked = service.rank(profile, limit);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render_matches(&mut out, &ranked, service.engine().weights())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &ranked)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_matches_csv(&mut out, &ranked)?,
    }

    Ok(())
}

pub(crate) fn run_archetypes(args: ArchetypesArgs) -> Result<(), AppError> {
    let service = assessment_service(&MatchingConfig::default())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.id {
        Some(id) => {
            let detail = service
                .archetype(&id)
                .ok_or(AppError::UnknownArchetype(id))?;
            render_archetype(&mut out, detail.archetype, detail.career_paths)?;
        }
        None => render_catalog(&mut out, service.archetypes())?,
    }

    Ok(())
}

pub(crate) fn run_summary(args: SummaryArgs) -> Result<(), AppError> {
    let profile = load_profile(&args.profile)?;
    let service = assessment_service(&MatchingConfig::default())?;
    let summary = service.summary(profile);

    let stdout = io::stdout();
    render_summary(&mut stdout.lock(), &summary)?;
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let matching = AppConfig::load()?.matching;
    let service = assessment_service(&matching)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Career matching demo")?;
    let id = AssessmentId(DEMO_ASSESSMENT_ID.to_string());
    let saved = service.save(id.clone(), sample_profile())?;
    writeln!(
        out,
        "Saved assessment '{}' at {} ({} sanitizer adjustments)",
        saved.record.id,
        saved.record.updated_at.format("%Y-%m-%d %H:%M UTC"),
        saved.adjustments.len()
    )?;

    writeln!(out)?;
    render_summary(&mut out, &service.summary(saved.record.profile.clone()))?;

    let ranked = service.rank_saved(&id, args.limit)?;
    writeln!(out)?;
    render_matches(&mut out, &ranked, service.engine().weights())?;

    if let Some(top) = ranked.first() {
        if let Some(detail) = service.archetype(top.archetype.id) {
            writeln!(out)?;
            render_archetype(&mut out, detail.archetype, detail.career_paths)?;
        }
    }

    Ok(())
}

fn assessment_service(
    matching: &MatchingConfig,
) -> Result<AssessmentService<InMemoryAssessmentRepository>, AppError> {
    Ok(AssessmentService::new(
        Arc::new(InMemoryAssessmentRepository::default()),
        matching_engine(matching)?,
    )
    .with_default_limit(matching.default_limit))
}

pub(crate) fn sample_profile() -> AssessmentProfile {
    AssessmentProfile::builder()
        .values(["Innovation", "Learning", "Impact", "Freedom", "Authenticity"])
        .work_task("researching", 3)
        .work_task("strategizing", 2)
        .work_task("writing", 1)
        .work_task("status meetings", -2)
        .work_strengths(Some("market research"), ["analytical", "strategic"])
        .test_strength("critical thinking")
        .friend_strengths(Some("Jordan"), ["curiosity", "writing"])
        .ranked_requirement("intellectual stimulation", 1, 2)
        .ranked_requirement("autonomy", 2, 3)
        .ranked_requirement("variety", 3, 1)
        .life_area(LifeArea::Career, 1)
        .life_area_justification(LifeArea::Career, "Interesting work, little room to grow")
        .life_area(LifeArea::Health, 2)
        .life_area(LifeArea::Relationships, 3)
        .life_area(LifeArea::PersonalGrowth, 2)
        .life_area(LifeArea::Finances, 0)
        .five_why(FiveWhyProblem {
            problem: "Status meetings eat my focus time".to_string(),
            whys: vec![
                "They are scattered across the day".to_string(),
                "Every team books its own slot".to_string(),
                "Nobody owns the shared calendar".to_string(),
                String::new(),
                String::new(),
            ],
            root_cause: "No agreed focus hours".to_string(),
            next_step: "Propose meeting-free mornings".to_string(),
            category: Some("work".to_string()),
        })
        .select_archetype("synthesizer")
        .vision(DreamJobVision {
            doing: "Turning research into product strategy".to_string(),
            with_whom: "A small, curious team".to_string(),
            how: "Remote with deep-focus time".to_string(),
            why: "To help people make better decisions".to_string(),
        })
        .build()
}

pub(crate) fn render_matches<W: Write>(
    out: &mut W,
    ranked: &[RankedArchetype<'_>],
    weights: &ScoringWeights,
) -> io::Result<()> {
    writeln!(out, "Top archetype matches")?;
    if ranked.is_empty() {
        writeln!(out, "- none")?;
        return Ok(());
    }

    for (index, entry) in ranked.iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({}): {}/100",
            index + 1,
            entry.archetype.name,
            entry.archetype.id,
            entry.matched.score
        )?;

        let points = entry
            .matched
            .breakdown
            .weighted_points(weights)
            .iter()
            .map(|(factor, points)| format!("{factor} {points}"))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(out, "   points: {points}")?;

        let factors = &entry.matched.matching_factors;
        if !factors.values.is_empty() {
            writeln!(out, "   values: {}", factors.values.join(", "))?;
        }
        if !factors.tasks.is_empty() {
            writeln!(out, "   tasks: {}", factors.tasks.join(", "))?;
        }
        if !factors.strengths.is_empty() {
            writeln!(out, "   strengths: {}", factors.strengths.join(", "))?;
        }
    }

    Ok(())
}

pub(crate) fn render_catalog<W: Write>(
    out: &mut W,
    archetypes: &[ArchetypeDefinition],
) -> io::Result<()> {
    writeln!(out, "Career archetypes")?;
    for archetype in archetypes {
        writeln!(
            out,
            "- {} ({}): {}",
            archetype.name, archetype.id, archetype.description
        )?;
    }
    Ok(())
}

pub(crate) fn render_archetype<W: Write>(
    out: &mut W,
    archetype: &ArchetypeDefinition,
    paths: &[CareerPath],
) -> io::Result<()> {
    writeln!(out, "{} ({})", archetype.name, archetype.id)?;
    writeln!(out, "{}", archetype.description)?;
    writeln!(out, "Key traits: {}", archetype.key_traits.join(", "))?;
    writeln!(out, "Example careers: {}", archetype.careers.join(", "))?;

    if paths.is_empty() {
        return Ok(());
    }

    writeln!(out, "\nCareer paths")?;
    for path in paths {
        writeln!(out, "- {}: {}", path.title, path.description)?;
        writeln!(out, "  skills: {}", path.required_skills.join(", "))?;
        for step in path.next_steps {
            writeln!(out, "  next: {step}")?;
        }
    }
    Ok(())
}

pub(crate) fn render_summary<W: Write>(out: &mut W, summary: &ProfileSummary) -> io::Result<()> {
    writeln!(out, "Profile summary")?;
    writeln!(out, "- Top values: {}", join_or_none(&summary.top_values))?;
    writeln!(out, "- Top strengths: {}", join_or_none(&summary.top_strengths))?;

    let energy = &summary.energy_balance;
    writeln!(
        out,
        "- Energy: {} energizing, {} draining, {} neutral of {} tasks",
        energy.energizing, energy.draining, energy.neutral, energy.total
    )?;
    writeln!(out, "- Life balance: {:.1}", summary.life_balance_score)?;

    if !summary.top_requirements.is_empty() {
        writeln!(out, "Requirement gaps")?;
        for requirement in &summary.top_requirements {
            writeln!(
                out,
                "- {}: match {}/5, gap {}",
                requirement.name, requirement.current_match, requirement.gap
            )?;
        }
    }

    if !summary.top_problems.is_empty() {
        writeln!(out, "Root causes")?;
        for entry in &summary.top_problems {
            writeln!(out, "- {}: {}", entry.problem, entry.root_cause)?;
            if !entry.next_step.is_empty() {
                writeln!(out, "  next: {}", entry.next_step)?;
            }
        }
    }

    if let Some(primary) = &summary.primary_archetype {
        writeln!(out, "- Dream archetype: {primary}")?;
    }
    Ok(())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
