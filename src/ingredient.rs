use serde::{Deserialize, Serialize};

/// One ingredient line after normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Quantity, `None` when the line carries no leading number
    pub count: Option<f64>,
    /// Canonical unit abbreviation, empty when no unit was recognized
    pub unit: String,
    /// Ingredient name, never empty for a non-empty input line
    pub name: String,
}

/// Unicode vulgar fractions and their ASCII fraction spellings
const VULGAR_FRACTIONS: &[(char, &str)] = &[
    ('\u{00BD}', "1/2"),
    ('\u{2153}', "1/3"),
    ('\u{2154}', "2/3"),
    ('\u{00BC}', "1/4"),
    ('\u{00BE}', "3/4"),
    ('\u{2155}', "1/5"),
    ('\u{2156}', "2/5"),
    ('\u{2157}', "3/5"),
    ('\u{2158}', "4/5"),
    ('\u{2159}', "1/6"),
    ('\u{215A}', "5/6"),
    ('\u{215B}', "1/8"),
    ('\u{215C}', "3/8"),
    ('\u{215D}', "5/8"),
    ('\u{215E}', "7/8"),
];

/// Unit synonyms mapped to their canonical abbreviation. Lookup is
/// case-insensitive and tolerates a trailing dot.
const UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("tbsps", "tbsp"),
    ("tbsp", "tbsp"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("tsps", "tsp"),
    ("tsp", "tsp"),
    ("cups", "cup"),
    ("cup", "cup"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("oz", "oz"),
    ("pounds", "lb"),
    ("pound", "lb"),
    ("lbs", "lb"),
    ("lb", "lb"),
    ("grams", "g"),
    ("gram", "g"),
    ("g", "g"),
    ("kilograms", "kg"),
    ("kilogram", "kg"),
    ("kgs", "kg"),
    ("kg", "kg"),
    ("milliliters", "ml"),
    ("millilitres", "ml"),
    ("ml", "ml"),
    ("liters", "l"),
    ("litres", "l"),
    ("liter", "l"),
    ("litre", "l"),
    ("l", "l"),
    ("pinches", "pinch"),
    ("pinch", "pinch"),
    ("cloves", "clove"),
    ("clove", "clove"),
    ("slices", "slice"),
    ("slice", "slice"),
];

/// Parse a free-text ingredient line into a structured quantity, unit and
/// name. Never fails: anything that does not look like a quantity or a
/// known unit ends up in the name.
pub fn parse_ingredient(raw: &str) -> ParsedIngredient {
    let normalized = replace_vulgar_fractions(raw);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let (count, consumed) = leading_count(&tokens);
    let mut rest = &tokens[consumed..];

    let mut unit = String::new();
    if let Some(first) = rest.first() {
        if let Some(canonical) = canonical_unit(first) {
            unit = canonical.to_string();
            rest = &rest[1..];
        }
    }

    let mut name = rest.join(" ");
    // Drop trailing preparation clauses ("flour, sifted" -> "flour")
    if let Some(comma) = name.find(',') {
        name.truncate(comma);
    }
    let mut name = name.trim().to_string();

    if name.is_empty() {
        // Lines like "2 cups" or a bare number: keep the whole line as the
        // name rather than violating the non-empty-name invariant.
        unit.clear();
        name = raw.trim().to_string();
    }

    ParsedIngredient { count, unit, name }
}

/// Render a quantity the way a cook writes it: "0.5" -> "1/2",
/// "2.5" -> "2 1/2". Falls back to a trimmed decimal.
pub fn format_count(count: f64) -> String {
    let whole = count.trunc() as i64;
    let frac = count.fract();

    if frac.abs() < 1e-9 {
        return whole.to_string();
    }

    for denom in [2u32, 3, 4, 5, 6, 8, 16] {
        let numer = (frac * f64::from(denom)).round();
        if numer > 0.0
            && numer < f64::from(denom)
            && (frac - numer / f64::from(denom)).abs() < 1e-6
        {
            return if whole == 0 {
                format!("{}/{}", numer as u32, denom)
            } else {
                format!("{} {}/{}", whole, numer as u32, denom)
            };
        }
    }

    let text = format!("{:.2}", count);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn replace_vulgar_fractions(raw: &str) -> String {
    if !raw.chars().any(|c| VULGAR_FRACTIONS.iter().any(|(v, _)| *v == c)) {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len() + 4);
    for c in raw.chars() {
        match VULGAR_FRACTIONS.iter().find(|(v, _)| *v == c) {
            // Leading space splits "2½" into the two-token form "2 1/2";
            // duplicate whitespace is collapsed by tokenization.
            Some((_, ascii)) => {
                out.push(' ');
                out.push_str(ascii);
            }
            None => out.push(c),
        }
    }
    out
}

/// Leading numeric expression over one or two tokens ("2", "1/2", "2 1/2",
/// "3.5"). Returns the parsed count and how many tokens it consumed.
fn leading_count(tokens: &[&str]) -> (Option<f64>, usize) {
    let Some(first) = tokens.first().and_then(|t| parse_number(t)) else {
        return (None, 0);
    };

    // A whole number followed by a fraction is a mixed number.
    if first.fract() == 0.0 {
        if let Some(frac) = tokens
            .get(1)
            .filter(|t| t.contains('/'))
            .and_then(|t| parse_number(t))
        {
            return (Some(first + frac), 2);
        }
    }

    (Some(first), 1)
}

fn parse_number(token: &str) -> Option<f64> {
    let value = if let Some((numer, denom)) = token.split_once('/') {
        let numer: f64 = numer.parse().ok()?;
        let denom: f64 = denom.parse().ok()?;
        if denom == 0.0 {
            return None;
        }
        numer / denom
    } else {
        token.parse().ok()?
    };

    (value >= 0.0).then_some(value)
}

fn canonical_unit(token: &str) -> Option<&'static str> {
    let trimmed = token.trim_end_matches('.');
    // The single-letter spoon forms only differ by case, so they are
    // matched before the case-insensitive table lookup.
    match trimmed {
        "T" => return Some("tbsp"),
        "t" => return Some("tsp"),
        _ => {}
    }
    let key = trimmed.to_lowercase();
    UNIT_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == key)
        .map(|(_, canonical)| *canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> ParsedIngredient {
        parse_ingredient(raw)
    }

    #[test]
    fn test_integer_count_and_unit() {
        let p = parsed("2 cups flour");
        assert_eq!(p.count, Some(2.0));
        assert_eq!(p.unit, "cup");
        assert_eq!(p.name, "flour");
    }

    #[test]
    fn test_simple_fraction() {
        let p = parsed("1/2 cup sugar");
        assert_eq!(p.count, Some(0.5));
        assert_eq!(p.unit, "cup");
        assert_eq!(p.name, "sugar");
    }

    #[test]
    fn test_mixed_number() {
        let p = parsed("2 1/2 cups flour, sifted");
        assert_eq!(p.count, Some(2.5));
        assert_eq!(p.unit, "cup");
        assert_eq!(p.name, "flour");
    }

    #[test]
    fn test_decimal_count() {
        let p = parsed("3.5 oz dark chocolate");
        assert_eq!(p.count, Some(3.5));
        assert_eq!(p.unit, "oz");
        assert_eq!(p.name, "dark chocolate");
    }

    #[test]
    fn test_unit_synonym_normalization() {
        assert_eq!(parsed("3 tablespoons olive oil").unit, "tbsp");
        assert_eq!(parsed("1 Teaspoon salt").unit, "tsp");
        assert_eq!(parsed("2 lbs. potatoes").unit, "lb");
    }

    #[test]
    fn test_vulgar_fraction_standalone() {
        let p = parsed("\u{00BD} cup milk");
        assert_eq!(p.count, Some(0.5));
        assert_eq!(p.unit, "cup");
        assert_eq!(p.name, "milk");
    }

    #[test]
    fn test_vulgar_fraction_attached_to_digit() {
        let p = parsed("2\u{00BD} cups stock");
        assert_eq!(p.count, Some(2.5));
        assert_eq!(p.unit, "cup");
        assert_eq!(p.name, "stock");
    }

    #[test]
    fn test_no_leading_number() {
        let p = parsed("salt and pepper to taste");
        assert_eq!(p.count, None);
        assert_eq!(p.unit, "");
        assert_eq!(p.name, "salt and pepper to taste");
    }

    #[test]
    fn test_count_without_unit() {
        let p = parsed("3 eggs");
        assert_eq!(p.count, Some(3.0));
        assert_eq!(p.unit, "");
        assert_eq!(p.name, "eggs");
    }

    #[test]
    fn test_comma_clause_dropped() {
        let p = parsed("1 onion, finely chopped");
        assert_eq!(p.count, Some(1.0));
        assert_eq!(p.name, "onion");
    }

    #[test]
    fn test_count_and_unit_only_keeps_line_as_name() {
        let p = parsed("2 cups");
        assert_eq!(p.count, Some(2.0));
        assert_eq!(p.unit, "");
        assert_eq!(p.name, "2 cups");
    }

    #[test]
    fn test_fraction_with_zero_denominator_is_not_a_count() {
        let p = parsed("1/0 weird line");
        assert_eq!(p.count, None);
        assert_eq!(p.name, "1/0 weird line");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let p = parsed("  2   cups   flour  ");
        assert_eq!(p.count, Some(2.0));
        assert_eq!(p.name, "flour");
    }

    #[test]
    fn test_format_count_fractions() {
        assert_eq!(format_count(0.5), "1/2");
        assert_eq!(format_count(2.5), "2 1/2");
        assert_eq!(format_count(0.75), "3/4");
        assert_eq!(format_count(3.0), "3");
    }

    #[test]
    fn test_format_count_decimal_fallback() {
        assert_eq!(format_count(1.23), "1.23");
    }

    #[test]
    fn test_format_count_near_whole_after_drift() {
        // Repeated rescaling can leave a count a hair under a whole number;
        // it must not render as "2 2/2".
        assert_eq!(format_count(2.0 - 1e-7), "2");
        assert_eq!(format_count(1.0 - 1e-7), "1");
    }

    #[test]
    fn test_single_letter_spoon_units_are_case_sensitive() {
        let big = parsed("1 T butter");
        assert_eq!(big.unit, "tbsp");
        assert_eq!(big.name, "butter");

        let small = parsed("1 t vanilla extract");
        assert_eq!(small.unit, "tsp");
        assert_eq!(small.name, "vanilla extract");
    }
}
