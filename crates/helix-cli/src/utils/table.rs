use helixgen::core::models::request::DesignConstraints;
use helixgen::core::properties::SequenceProfile;
use helixgen::core::residues::AminoAcid;
use helixgen::engine::report::VerificationReport;

const NAME_WIDTH: usize = 24;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

fn push_line(out: &mut String, line: String) {
    out.push_str(&line);
    out.push('\n');
}

/// Summary of accepted candidates with a flag column for missed design constraints.
pub fn render_candidates(report: &VerificationReport, constraints: &DesignConstraints) -> String {
    let mut out = String::new();
    push_line(
        &mut out,
        format!(
            "{:<28} {:<width$} {:>6} {:>9} {:>9} {:>10}  {}",
            "ID",
            "NAME",
            "LENGTH",
            "WEIGHT",
            "STABILITY",
            "KD (nM)",
            "FLAGS",
            width = NAME_WIDTH
        ),
    );
    for candidate in &report.accepted {
        let violations = constraints.violations(candidate);
        let flags = if violations.is_empty() {
            "-".to_string()
        } else {
            violations
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        };
        push_line(
            &mut out,
            format!(
                "{:<28} {:<width$} {:>6} {:>5.2} kDa {:>9.1} {:>10.2}  {}",
                candidate.id(),
                truncate(candidate.name(), NAME_WIDTH),
                candidate.sequence().chars().count(),
                candidate.molecular_weight(),
                candidate.stability_score(),
                candidate.affinity_score(),
                flags,
                width = NAME_WIDTH
            ),
        );
    }
    push_line(
        &mut out,
        format!(
            "{} of {} proposal(s) verified.",
            report.accepted.len(),
            report.total()
        ),
    );
    out
}

pub fn render_rejections(report: &VerificationReport) -> String {
    report
        .rejected
        .iter()
        .map(|rejected| {
            format!(
                "#{:<3} {:<width$} {}\n",
                rejected.index,
                truncate(&rejected.name, NAME_WIDTH),
                rejected.reason,
                width = NAME_WIDTH
            )
        })
        .collect()
}

pub fn render_profile(sequence: &str, profile: &SequenceProfile) -> String {
    let mut out = String::new();
    push_line(&mut out, format!("Sequence:        {}", sequence));
    let validity = match &profile.validity {
        Ok(()) => "yes".to_string(),
        Err(reason) => format!("no ({})", reason),
    };
    push_line(&mut out, format!("Valid:           {}", validity));
    push_line(&mut out, format!("Length:          {}", profile.length));
    push_line(
        &mut out,
        format!("Molecular weight: {:.2} kDa", profile.molecular_weight),
    );
    push_line(
        &mut out,
        format!(
            "Stability score: {:.1} (hydropathy proxy)",
            profile.stability_score
        ),
    );
    if let Some(mean) = profile.mean_hydropathy {
        push_line(&mut out, format!("Mean hydropathy: {:.3}", mean));
    }
    push_line(
        &mut out,
        format!(
            "Composition:     {} polar, {} nonpolar, {} unknown",
            profile.composition.polar, profile.composition.nonpolar, profile.composition.unknown
        ),
    );
    let counts: Vec<_> = profile
        .composition
        .counts()
        .map(|(code, n)| format!("{}:{}", code, n))
        .collect();
    if !counts.is_empty() {
        push_line(&mut out, format!("Residues:        {}", counts.join(" ")));
    }
    out
}

pub fn render_residue_table() -> String {
    let mut out = String::new();
    push_line(
        &mut out,
        format!(
            "{:<4} {:<5} {:<15} {:>10} {:>10}  {}",
            "CODE", "NAME", "RESIDUE", "MASS (Da)", "HYDROPATHY", "CLASS"
        ),
    );
    for aa in AminoAcid::all() {
        push_line(
            &mut out,
            format!(
                "{:<4} {:<5} {:<15} {:>10.4} {:>10.1}  {:?}",
                aa.code(),
                aa.three_letter_code(),
                format!("{:?}", aa),
                aa.mass(),
                aa.hydropathy(),
                aa.class()
            ),
        );
    }
    out
}
