//! Per-profile custom chart parsing.
//!
//! Format: a header row of defending-type names, then one row per attacking
//! type. Parsing never errors; unreadable cells degrade to 1.0.

use ahash::AHashMap;

use crate::types::TypeKind;

/// A parsed custom type chart. Missing pairs are neutral.
#[derive(Debug, Clone, Default)]
pub struct CustomChart {
    table: AHashMap<(TypeKind, TypeKind), f64>,
}

impl CustomChart {
    pub fn multiplier(&self, attacker: TypeKind, defender: TypeKind) -> f64 {
        self.table.get(&(attacker, defender)).copied().unwrap_or(1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Strip BOM artifacts and surrounding whitespace from a type-name token.
fn clean_token(raw: &str) -> &str {
    raw.trim().trim_start_matches('\u{FEFF}').trim()
}

/// Parse a cell value: `"1/2"` is a half, blank is neutral, anything else
/// that fails to parse as a number is neutral too.
fn parse_cell(raw: &str) -> f64 {
    match raw.trim() {
        "1/2" => 0.5,
        "" => 1.0,
        other => other.parse().unwrap_or(1.0),
    }
}

/// Parse custom chart text. An empty or headerless input yields an empty
/// chart (every lookup neutral).
pub fn parse_custom(text: &str) -> CustomChart {
    let mut lines = text.lines();

    let headers: Vec<TypeKind> = match lines.next() {
        Some(header) => header
            .split(',')
            .map(|tok| TypeKind::from_name(clean_token(tok)))
            .collect(),
        None => return CustomChart::default(),
    };

    let mut table = AHashMap::new();
    for line in lines {
        let cells: Vec<&str> = line.split(',').collect();
        let Some(first) = cells.first() else {
            continue;
        };
        let attacker = TypeKind::from_name(clean_token(first));
        if attacker.is_unknown() {
            continue;
        }

        for (j, cell) in cells.iter().enumerate().skip(1) {
            let Some(&defender) = headers.get(j) else {
                break;
            };
            if defender.is_unknown() {
                continue;
            }
            table.insert((attacker, defender), parse_cell(cell));
        }
    }

    CustomChart { table }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHART: &str = "\
,Normal,Fire,Water
Normal,,2,1/2
Fire,0,x,1.5
";

    #[test]
    fn test_cell_values() {
        let chart = parse_custom(CHART);
        // blank cell is neutral
        assert_eq!(chart.multiplier(TypeKind::Normal, TypeKind::Normal), 1.0);
        assert_eq!(chart.multiplier(TypeKind::Normal, TypeKind::Fire), 2.0);
        // literal fraction
        assert_eq!(chart.multiplier(TypeKind::Normal, TypeKind::Water), 0.5);
        assert_eq!(chart.multiplier(TypeKind::Fire, TypeKind::Normal), 0.0);
        // non-numeric garbage is neutral
        assert_eq!(chart.multiplier(TypeKind::Fire, TypeKind::Fire), 1.0);
        assert_eq!(chart.multiplier(TypeKind::Fire, TypeKind::Water), 1.5);
    }

    #[test]
    fn test_missing_pair_is_neutral() {
        let chart = parse_custom(CHART);
        assert_eq!(chart.multiplier(TypeKind::Ghost, TypeKind::Fairy), 1.0);
    }

    #[test]
    fn test_bom_and_whitespace_stripped() {
        let text = "\u{FEFF} , Fire \nWater ,2\n";
        let chart = parse_custom(text);
        assert_eq!(chart.multiplier(TypeKind::Water, TypeKind::Fire), 2.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_custom("").is_empty());
    }
}
