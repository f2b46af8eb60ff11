use lechemin::{build_report, MandatoryMatch, MatchKind, PathDetail, Report};
use lemodele::{parse_specializations, parse_talents, Catalog, TalentIndex};
use std::path::Path;

const TALENT_HEADER: &str = "id,tier,name,description,allowMultiplePurchases,requiredTalentId";
const SPEC_HEADER: &str = "id,tier,name,description,requirements,talents.mandatory,talents.optional,options,reservedTalent.name,reservedTalent.description";

fn talent_id(n: u32) -> String {
    format!("00000000-0000-0000-0000-{:012x}", n)
}

fn spec_id(n: u32) -> String {
    format!("00000000-0000-0000-0001-{:012x}", n)
}

/// Talents 1..=20 without prerequisites, plus 21 <- 22 <- 23.
fn talents_csv() -> String {
    let mut rows = vec![TALENT_HEADER.to_string()];
    for n in 1..=20 {
        rows.push(format!("{},1,Talent {n},,false,", talent_id(n)));
    }
    rows.push(format!("{},1,Root,,false,", talent_id(21)));
    rows.push(format!("{},2,Branch,,false,{}", talent_id(22), talent_id(21)));
    rows.push(format!("{},3,Leaf,,true,{}", talent_id(23), talent_id(22)));
    rows.join("\n")
}

fn spec_row(n: u32, tier: i32, name: &str, mandatory: Option<u32>, optional: &[u32]) -> String {
    let mandatory = mandatory.map(talent_id).unwrap_or_default();
    let optional = optional
        .iter()
        .map(|id| talent_id(*id))
        .collect::<Vec<_>>()
        .join(",");
    format!("{},{tier},{name},,,{mandatory},\"{optional}\",,,", spec_id(n))
}

fn catalog(rows: &[String]) -> Catalog {
    let origin = Path::new("inline.csv");
    let talents = TalentIndex::new(parse_talents(&talents_csv(), origin).expect("talents"));
    let mut content = vec![SPEC_HEADER.to_string()];
    content.extend(rows.iter().cloned());
    let specializations =
        parse_specializations(&content.join("\n"), origin).expect("specializations");
    Catalog::new(talents, specializations).expect("catalog")
}

fn detail<'a>(report: &'a Report, source: &str, target: &str) -> &'a PathDetail {
    report
        .details
        .iter()
        .find(|d| d.source == source && d.target == target)
        .expect("detail present")
}

#[test]
fn matched_mandatory_with_two_of_three_optionals_is_none() {
    let catalog = catalog(&[
        spec_row(1, 1, "Squire", Some(1), &[2, 3]),
        spec_row(2, 2, "Knight", Some(1), &[2, 3, 4]),
    ]);
    let report = Report::from_catalog(&catalog).expect("report");

    let path = detail(&report, "Squire", "Knight");
    assert_eq!(path.is_mandatory_talent_match, MandatoryMatch::Matched);
    assert_eq!(path.optional_talent_matches, 2);
    assert_eq!(path.kind, MatchKind::None);
}

#[test]
fn seven_of_eight_optionals_without_mandatory_is_strong() {
    let catalog = catalog(&[
        spec_row(1, 2, "Knight", None, &[1, 2, 3, 4, 5, 6, 7]),
        spec_row(2, 3, "Paladin", None, &[1, 2, 3, 4, 5, 6, 7, 8]),
    ]);
    let report = Report::from_catalog(&catalog).expect("report");

    let path = detail(&report, "Knight", "Paladin");
    assert_eq!(path.is_mandatory_talent_match, MandatoryMatch::NotRequired);
    assert_eq!(path.optional_talent_matches, 7);
    assert_eq!(path.kind, MatchKind::Strong);
    assert_eq!(report.tier2[0].strong, vec!["Paladin"]);
}

#[test]
fn missed_mandatory_with_five_optionals_is_none() {
    let catalog = catalog(&[
        spec_row(1, 1, "Squire", Some(9), &[1, 2, 3, 4, 5]),
        spec_row(2, 2, "Knight", Some(20), &[1, 2, 3, 4, 5, 6]),
    ]);
    let report = Report::from_catalog(&catalog).expect("report");

    let path = detail(&report, "Squire", "Knight");
    assert_eq!(path.is_mandatory_talent_match, MandatoryMatch::Missing);
    assert_eq!(path.optional_talent_matches, 5);
    assert_eq!(path.kind, MatchKind::None);
}

#[test]
fn prerequisite_chain_counts_toward_mandatory_match() {
    let catalog = catalog(&[
        spec_row(1, 1, "Squire", None, &[21]),
        spec_row(2, 2, "Knight", Some(23), &[]),
    ]);
    let report = Report::from_catalog(&catalog).expect("report");

    let path = detail(&report, "Squire", "Knight");
    assert_eq!(path.is_mandatory_talent_match, MandatoryMatch::Matched);
}

#[test]
fn report_properties_hold_across_a_mixed_catalog() {
    let catalog = catalog(&[
        spec_row(1, 1, "Squire", Some(1), &[2, 3, 21]),
        spec_row(2, 1, " squire", None, &[4, 5]),
        spec_row(3, 1, "Scout", None, &[6]),
        spec_row(4, 2, "Knight", Some(23), &[1, 2, 3, 4]),
        spec_row(5, 2, "Ranger", None, &[6, 7, 8]),
        spec_row(6, 3, "Paladin", Some(1), &[2, 3, 4, 5, 6, 7, 8]),
        spec_row(7, 3, "Warden", None, &[]),
    ]);
    let report = build_report(&catalog.specializations, &catalog.talents).expect("report");

    let tiers: std::collections::HashMap<&str, i32> = catalog
        .specializations
        .iter()
        .map(|s| (s.name.as_str(), s.tier))
        .collect();
    let optional_counts: std::collections::HashMap<&str, usize> = catalog
        .specializations
        .iter()
        .map(|s| (s.name.as_str(), s.optional_talents.len()))
        .collect();
    let has_mandatory: std::collections::HashMap<&str, bool> = catalog
        .specializations
        .iter()
        .map(|s| (s.name.as_str(), s.mandatory_talent.is_some()))
        .collect();

    // 3 tier-1 sources x 2 tier-2 targets + 2 tier-2 sources x 2 tier-3 targets
    assert_eq!(report.details.len(), 10);
    for d in &report.details {
        assert_eq!(tiers[d.source.as_str()], tiers[d.target.as_str()] - 1);
        assert!(d.optional_talent_matches <= optional_counts[d.target.as_str()]);
        if !has_mandatory[d.target.as_str()] {
            assert_eq!(d.is_mandatory_talent_match, MandatoryMatch::NotRequired);
        }
    }

    // "Squire" and " squire" collapse into one bucket
    let tier1: Vec<&str> = report.tier1.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(tier1, vec!["Squire", "Scout"]);
    let tier2: Vec<&str> = report.tier2.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(tier2, vec!["Knight", "Ranger"]);
}
