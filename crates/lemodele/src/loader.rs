//! CSV table loading
//!
//! Both tables are read with headers; columns are matched by name so their
//! order in the file does not matter. Every value is read as text first and
//! converted here, so failures carry the file and line they came from.

use crate::error::{ModelError, Result};
use crate::specialization::{ReservedTalent, Specialization, SpecializationId};
use crate::talent::{Talent, TalentId};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Deserialize)]
struct TalentRow {
    id: String,
    tier: String,
    name: String,
    description: String,
    #[serde(rename = "allowMultiplePurchases")]
    allow_multiple_purchases: String,
    #[serde(rename = "requiredTalentId")]
    required_talent_id: String,
}

#[derive(Debug, Deserialize)]
struct SpecializationRow {
    id: String,
    tier: String,
    name: String,
    description: String,
    requirements: String,
    #[serde(rename = "talents.mandatory")]
    mandatory_talent: String,
    #[serde(rename = "talents.optional")]
    optional_talents: String,
    options: String,
    #[serde(rename = "reservedTalent.name")]
    reserved_talent_name: String,
    #[serde(rename = "reservedTalent.description")]
    reserved_talent_description: String,
}

/// Read the talents table from disk
pub fn load_talents(path: &Path) -> Result<Vec<Talent>> {
    let content = read_table(path)?;
    let talents = parse_talents(&content, path)?;
    tracing::debug!("Loaded {} talents from {}", talents.len(), path.display());
    Ok(talents)
}

/// Read the specializations table from disk
pub fn load_specializations(path: &Path) -> Result<Vec<Specialization>> {
    let content = read_table(path)?;
    let specializations = parse_specializations(&content, path)?;
    tracing::debug!(
        "Loaded {} specializations from {}",
        specializations.len(),
        path.display()
    );
    Ok(specializations)
}

/// Parse talents table content. `origin` is only used in error messages.
pub fn parse_talents(content: &str, origin: &Path) -> Result<Vec<Talent>> {
    let mut seen = HashSet::new();

    read_rows::<TalentRow>(content, origin)?
        .into_iter()
        .map(|(line, row)| {
            let cell = Cell { origin, line };
            let id: TalentId = cell.id("id", &row.id)?;
            if !seen.insert(id) {
                return Err(cell.error(format!("duplicate talent id {}", id)));
            }

            Ok(Talent {
                id,
                tier: cell.tier(&row.tier)?,
                name: row.name,
                description: row.description,
                allow_multiple_purchases: cell.flag(
                    "allowMultiplePurchases",
                    &row.allow_multiple_purchases,
                )?,
                required_talent: cell.optional_id("requiredTalentId", &row.required_talent_id)?,
            })
        })
        .collect()
}

/// Parse specializations table content. `origin` is only used in error messages.
pub fn parse_specializations(content: &str, origin: &Path) -> Result<Vec<Specialization>> {
    let mut seen = HashSet::new();

    read_rows::<SpecializationRow>(content, origin)?
        .into_iter()
        .map(|(line, row)| {
            let cell = Cell { origin, line };
            let id: SpecializationId = cell.id("id", &row.id)?;
            if !seen.insert(id) {
                return Err(cell.error(format!("duplicate specialization id {}", id)));
            }

            Ok(Specialization {
                id,
                tier: cell.tier(&row.tier)?,
                name: row.name,
                description: row.description,
                requirements: row.requirements,
                mandatory_talent: cell.optional_id("talents.mandatory", &row.mandatory_talent)?,
                optional_talents: cell.id_list("talents.optional", &row.optional_talents)?,
                other_options: split_options(&row.options),
                reserved_talent: ReservedTalent {
                    name: row.reserved_talent_name,
                    description: row.reserved_talent_description,
                },
            })
        })
        .collect()
}

fn read_table(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserialize every row, paired with its line number.
fn read_rows<T>(content: &str, origin: &Path) -> Result<Vec<(u64, T)>>
where
    T: for<'de> Deserialize<'de>,
{
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| csv_error(origin, &e))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(origin, &e))?;
        let line = record.position().map_or(0, |p| p.line());
        let row = record
            .deserialize::<T>(Some(&headers))
            .map_err(|e| ModelError::malformed(origin, line, e.to_string()))?;
        rows.push((line, row));
    }

    Ok(rows)
}

fn csv_error(origin: &Path, err: &csv::Error) -> ModelError {
    let line = err.position().map_or(0, |p| p.line());
    ModelError::malformed(origin, line, err.to_string())
}

/// Split free-text options on commas, trimming every item. A blank field
/// means no options.
fn split_options(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return Vec::new();
    }
    value.split(',').map(|item| item.trim().to_string()).collect()
}

/// Location of the row being converted.
struct Cell<'a> {
    origin: &'a Path,
    line: u64,
}

impl Cell<'_> {
    fn error(&self, message: impl Into<String>) -> ModelError {
        ModelError::malformed(self.origin, self.line, message)
    }

    fn id<T>(&self, column: &str, value: &str) -> Result<T>
    where
        T: FromStr<Err = uuid::Error>,
    {
        value
            .parse()
            .map_err(|e| self.error(format!("invalid {} '{}': {}", column, value, e)))
    }

    fn optional_id<T>(&self, column: &str, value: &str) -> Result<Option<T>>
    where
        T: FromStr<Err = uuid::Error>,
    {
        if value.trim().is_empty() {
            return Ok(None);
        }
        self.id(column, value).map(Some)
    }

    fn id_list(&self, column: &str, value: &str) -> Result<Vec<TalentId>> {
        value
            .split(',')
            .filter(|item| !item.trim().is_empty())
            .map(|item| self.id(column, item))
            .collect()
    }

    fn tier(&self, value: &str) -> Result<i32> {
        value
            .trim()
            .parse()
            .map_err(|_| self.error(format!("invalid tier '{}'", value)))
    }

    fn flag(&self, column: &str, value: &str) -> Result<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(self.error(format!("invalid {} '{}'", column, value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    const T1: &str = "00000000-0000-0000-0000-000000000001";
    const T2: &str = "00000000-0000-0000-0000-000000000002";
    const S1: &str = "00000000-0000-0000-0000-0000000000a1";

    const TALENT_HEADER: &str =
        "id,tier,name,description,allowMultiplePurchases,requiredTalentId";
    const SPEC_HEADER: &str = "id,tier,name,description,requirements,talents.mandatory,talents.optional,options,reservedTalent.name,reservedTalent.description";

    fn origin() -> &'static Path {
        Path::new("fixture.csv")
    }

    #[test]
    fn parses_talents_with_and_without_prerequisite() {
        let content = format!(
            "{TALENT_HEADER}\n{T1},1,Toughness,Take hits,True,\n{T2},2,Iron Skin,\"Harder, better\",false,{T1}\n"
        );
        let talents = parse_talents(&content, origin()).expect("parse");

        assert_eq!(talents.len(), 2);
        assert_eq!(talents[0].name, "Toughness");
        assert!(talents[0].allow_multiple_purchases);
        assert_eq!(talents[0].required_talent, None);
        assert_eq!(talents[1].description, "Harder, better");
        assert_eq!(talents[1].tier, 2);
        assert_eq!(
            talents[1].required_talent,
            Some(TalentId::new(Uuid::from_u128(1)))
        );
    }

    #[test]
    fn columns_are_matched_by_name() {
        let content = format!(
            "name,id,requiredTalentId,tier,allowMultiplePurchases,description\nToughness,{T1},,3,false,x\n"
        );
        let talents = parse_talents(&content, origin()).expect("parse");
        assert_eq!(talents[0].tier, 3);
        assert_eq!(talents[0].name, "Toughness");
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let content = format!("\u{feff}{TALENT_HEADER}\n{T1},1,Toughness,,false,\n");
        assert_eq!(parse_talents(&content, origin()).expect("parse").len(), 1);
    }

    #[test]
    fn invalid_talent_id_is_malformed_with_line() {
        let content = format!("{TALENT_HEADER}\n{T1},1,A,,false,\nnope,1,B,,false,\n");
        let err = parse_talents(&content, origin()).expect_err("bad id");
        match err {
            ModelError::MalformedRecord { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("invalid id 'nope'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_tier_is_malformed() {
        let bad_tier = format!("{TALENT_HEADER}\n{T1},one,A,,false,\n");
        assert!(matches!(
            parse_talents(&bad_tier, origin()),
            Err(ModelError::MalformedRecord { .. })
        ));
    }

    #[rstest]
    #[case("true", Some(true))]
    #[case("FALSE", Some(false))]
    #[case(" True ", Some(true))]
    #[case("maybe", None)]
    #[case("1", None)]
    #[case("", None)]
    fn purchase_flag_values(#[case] value: &str, #[case] expected: Option<bool>) {
        let content = format!("{TALENT_HEADER}\n{T1},1,A,,{value},\n");
        match (parse_talents(&content, origin()), expected) {
            (Ok(talents), Some(flag)) => assert_eq!(talents[0].allow_multiple_purchases, flag),
            (Err(err), None) => assert!(err.to_string().contains("allowMultiplePurchases")),
            (other, _) => panic!("unexpected result for '{value}': {other:?}"),
        }
    }

    #[test]
    fn duplicate_talent_id_is_malformed() {
        let content = format!("{TALENT_HEADER}\n{T1},1,A,,false,\n{T1},1,B,,false,\n");
        let err = parse_talents(&content, origin()).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate talent id"));
    }

    #[test]
    fn missing_column_is_malformed() {
        let content = format!("id,tier,name\n{T1},1,A\n");
        assert!(matches!(
            parse_talents(&content, origin()),
            Err(ModelError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn parses_specialization_lists() {
        let content = format!(
            "{SPEC_HEADER}\n{S1},2,Knight,Desc,Req,{T1},\"{T1}, {T2},\",\" Ride , Joust\",Charge,Big hit\n"
        );
        let specs = parse_specializations(&content, origin()).expect("parse");
        let knight = &specs[0];

        assert_eq!(knight.tier, 2);
        assert_eq!(knight.mandatory_talent, Some(TalentId::new(Uuid::from_u128(1))));
        assert_eq!(
            knight.optional_talents,
            vec![
                TalentId::new(Uuid::from_u128(1)),
                TalentId::new(Uuid::from_u128(2))
            ]
        );
        assert_eq!(knight.other_options, vec!["Ride", "Joust"]);
        assert_eq!(knight.reserved_talent.name, "Charge");
        assert_eq!(knight.reserved_talent.description, "Big hit");
    }

    #[test]
    fn blank_specialization_references_are_empty() {
        let content = format!("{SPEC_HEADER}\n{S1},1,Scout,,,,,,,\n");
        let specs = parse_specializations(&content, origin()).expect("parse");
        assert_eq!(specs[0].mandatory_talent, None);
        assert!(specs[0].optional_talents.is_empty());
        assert!(specs[0].other_options.is_empty());
    }

    #[test]
    fn unparseable_optional_talent_is_malformed() {
        let content = format!("{SPEC_HEADER}\n{S1},1,Scout,,,,\"{T1},n/a\",,,\n");
        let err = parse_specializations(&content, origin()).expect_err("unparseable id");
        match err {
            ModelError::MalformedRecord { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("invalid talents.optional 'n/a'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_reports_missing_file_as_io() {
        let err = load_talents(Path::new("/definitely/not/here.csv")).expect_err("missing");
        assert!(matches!(err, ModelError::Io { .. }));
    }
}
