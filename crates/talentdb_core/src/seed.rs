//! Fixed seed datasets.
//!
//! Applied at most once per store lifetime so a first listing never
//! observes an empty store. Vacancy seeds carry their candidate
//! summaries pre-linked, matching the candidate seeds.

use crate::model::{
    Candidate, CandidateStage, CandidateStatus, CandidateSummary, Priority, Vacancy,
    VacancyStatus,
};

fn avatar(id: &str) -> String {
    format!("https://i.pravatar.cc/150?u={id}")
}

fn candidate(
    id: &str,
    name: &str,
    email: &str,
    applied_for: &str,
    status: CandidateStatus,
    stage: CandidateStage,
    applied_date: &str,
) -> Candidate {
    Candidate {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        avatar_url: avatar(id),
        applied_for: applied_for.into(),
        status,
        stage,
        applied_date: applied_date.into(),
    }
}

/// The candidate seed set.
pub(crate) fn candidates() -> Vec<Candidate> {
    vec![
        candidate(
            "cand1",
            "Alice Johnson",
            "alice@example.com",
            "Senior Frontend Developer",
            CandidateStatus::Active,
            CandidateStage::Interview,
            "2023-10-15T00:00:00.000Z",
        ),
        candidate(
            "cand2",
            "Bob Williams",
            "bob@example.com",
            "Backend Engineer",
            CandidateStatus::Active,
            CandidateStage::Screening,
            "2023-10-12T00:00:00.000Z",
        ),
        candidate(
            "cand3",
            "Charlie Brown",
            "charlie@example.com",
            "UX/UI Designer",
            CandidateStatus::Inactive,
            CandidateStage::Sourced,
            "2023-10-10T00:00:00.000Z",
        ),
        candidate(
            "cand4",
            "Diana Prince",
            "diana@example.com",
            "Product Manager",
            CandidateStatus::Active,
            CandidateStage::Offer,
            "2023-09-28T00:00:00.000Z",
        ),
        candidate(
            "cand5",
            "Ethan Hunt",
            "ethan@example.com",
            "Senior Frontend Developer",
            CandidateStatus::Hired,
            CandidateStage::Hired,
            "2023-09-20T00:00:00.000Z",
        ),
    ]
}

fn vacancy(
    id: &str,
    title: &str,
    department: &str,
    status: VacancyStatus,
    priority: Priority,
    created_at: &str,
    candidate_ids: &[&str],
) -> Vacancy {
    // Embeds are projections of the candidate seeds; a test pins that
    // every listed id resolves.
    let candidates = candidates()
        .iter()
        .filter(|c| candidate_ids.contains(&c.id.as_str()))
        .map(Candidate::summary)
        .collect();
    Vacancy {
        id: id.into(),
        title: title.into(),
        department: department.into(),
        status,
        priority,
        created_at: created_at.into(),
        candidates,
    }
}

/// The vacancy seed set, summaries pre-linked to the candidate seeds.
pub(crate) fn vacancies() -> Vec<Vacancy> {
    vec![
        vacancy(
            "vac1",
            "Senior Frontend Developer",
            "Engineering",
            VacancyStatus::Interviewing,
            Priority::High,
            "2023-09-01T00:00:00.000Z",
            &["cand1", "cand5"],
        ),
        vacancy(
            "vac2",
            "Backend Engineer",
            "Engineering",
            VacancyStatus::Sourcing,
            Priority::High,
            "2023-09-05T00:00:00.000Z",
            &["cand2"],
        ),
        vacancy(
            "vac3",
            "UX/UI Designer",
            "Design",
            VacancyStatus::Open,
            Priority::Medium,
            "2023-09-10T00:00:00.000Z",
            &["cand3"],
        ),
        vacancy(
            "vac4",
            "Product Manager",
            "Product",
            VacancyStatus::Offer,
            Priority::Medium,
            "2023-08-20T00:00:00.000Z",
            &["cand4"],
        ),
        vacancy(
            "vac5",
            "DevOps Engineer",
            "Operations",
            VacancyStatus::Closed,
            Priority::Low,
            "2023-08-15T00:00:00.000Z",
            &[],
        ),
        vacancy(
            "vac6",
            "Data Scientist",
            "Analytics",
            VacancyStatus::Sourcing,
            Priority::High,
            "2023-10-01T00:00:00.000Z",
            &[],
        ),
    ]
}
